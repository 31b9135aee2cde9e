//! Repository for the `questions` table.

use sqlx::PgPool;
use trivia_core::paging::{page_offset, QUESTIONS_PER_PAGE};
use trivia_core::types::DbId;

use crate::models::question::{CreateQuestion, Question};

/// Column list for questions queries.
///
/// `category_id` is aliased to `category`, the name the wire format and the
/// [`Question`] struct use.
const COLUMNS: &str = "id, question, answer, difficulty, category_id AS category, created_at";

/// Provides CRUD operations for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// One page of questions in stable id order.
    pub async fn list_page(pool: &PgPool, page: i64) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             ORDER BY id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(QUESTIONS_PER_PAGE)
            .bind(page_offset(page))
            .fetch_all(pool)
            .await
    }

    /// Total number of questions.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await
    }

    /// Find a question by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new question, returning the created row.
    ///
    /// The category FK is enforced by the database; inserting against an
    /// unknown category surfaces as a foreign-key violation.
    pub async fn create(pool: &PgPool, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (question, answer, difficulty, category_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.difficulty)
            .bind(input.category)
            .fetch_one(pool)
            .await
    }

    /// Delete a question by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// One page of questions whose text contains `term`, case-insensitively.
    pub async fn search_page(
        pool: &PgPool,
        term: &str,
        page: i64,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE question ILIKE $1
             ORDER BY id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(format!("%{term}%"))
            .bind(QUESTIONS_PER_PAGE)
            .bind(page_offset(page))
            .fetch_all(pool)
            .await
    }

    /// Total number of questions matching `term`.
    pub async fn count_search(pool: &PgPool, term: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE question ILIKE $1")
            .bind(format!("%{term}%"))
            .fetch_one(pool)
            .await
    }

    /// One page of questions belonging to a category, in stable id order.
    pub async fn list_by_category_page(
        pool: &PgPool,
        category_id: DbId,
        page: i64,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE category_id = $1
             ORDER BY id ASC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .bind(QUESTIONS_PER_PAGE)
            .bind(page_offset(page))
            .fetch_all(pool)
            .await
    }

    /// Total number of questions in a category.
    pub async fn count_by_category(pool: &PgPool, category_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(pool)
            .await
    }

    /// Pick one random question not in `exclude`, optionally restricted to a
    /// category. Returns `None` when every candidate has been excluded.
    pub async fn random_unseen(
        pool: &PgPool,
        category_id: Option<DbId>,
        exclude: &[DbId],
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE ($1::bigint IS NULL OR category_id = $1)
               AND id != ALL($2)
             ORDER BY random()
             LIMIT 1"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .bind(exclude)
            .fetch_optional(pool)
            .await
    }
}
