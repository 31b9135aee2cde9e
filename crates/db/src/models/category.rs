//! Category model.

use std::collections::BTreeMap;

use serde::Serialize;
use sqlx::FromRow;
use trivia_core::types::{DbId, Timestamp};

/// A row from the `categories` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
}

/// Ordered id -> name map, the shape categories take inside response
/// envelopes.
pub type CategoryMap = BTreeMap<DbId, String>;

/// Collapse category rows into the envelope map.
pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.name.clone()))
        .collect()
}
