use serde::Serialize;

// Legacy listing; no route ever inserts into this table.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Thing {
    pub id: i64,
    pub name: String,
}
