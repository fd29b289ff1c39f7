use anyhow::Result;
use sqlx::SqlitePool;

use crate::database::models::Thing;

#[derive(Clone)]
pub struct ThingRepository {
    pool: SqlitePool,
}

impl ThingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_things(&self) -> Result<Vec<Thing>> {
        let things =
            sqlx::query_as::<_, Thing>("SELECT id, name FROM things ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(things)
    }
}
