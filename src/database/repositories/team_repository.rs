use anyhow::Result;
use sqlx::SqlitePool;

use crate::database::models::{NewTeamForm, Team};

#[derive(Clone)]
pub struct TeamRepository {
    pool: SqlitePool,
}

impl TeamRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        let teams = sqlx::query_as::<_, Team>(
            "SELECT code, name, description, website FROM teams ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(teams)
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Team>> {
        let team = sqlx::query_as::<_, Team>(
            "SELECT code, name, description, website FROM teams WHERE code = ?1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(team)
    }

    pub async fn create_team(&self, team: &NewTeamForm) -> Result<()> {
        sqlx::query("INSERT INTO teams (code, name, description, website) VALUES (?1, ?2, ?3, ?4)")
            .bind(&team.code)
            .bind(&team.name)
            .bind(&team.description)
            .bind(&team.website)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Succeeds whether or not a row matched.
    pub async fn delete_team(&self, code: &str) -> Result<()> {
        sqlx::query("DELETE FROM teams WHERE code = ?1")
            .bind(code)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
