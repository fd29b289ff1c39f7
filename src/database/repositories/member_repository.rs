use anyhow::Result;
use sqlx::SqlitePool;

use crate::database::models::Member;

#[derive(Clone)]
pub struct MemberRepository {
    pool: SqlitePool,
}

impl MemberRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_members(&self) -> Result<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(
            "SELECT id, name, team, notes FROM members ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    /// Fetches a single member, erroring with `RowNotFound` for absent ids.
    pub async fn get_by_id(&self, id: i64) -> Result<Member> {
        let member =
            sqlx::query_as::<_, Member>("SELECT id, name, team, notes FROM members WHERE id = ?1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(member)
    }

    pub async fn list_for_team(&self, code: &str) -> Result<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(
            "SELECT id, name, team, notes FROM members WHERE team = ?1 ORDER BY id ASC",
        )
        .bind(code)
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    pub async fn create_member(&self, name: &str, team: &str) -> Result<()> {
        sqlx::query("INSERT INTO members (name, team) VALUES (?1, ?2)")
            .bind(name)
            .bind(team)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Succeeds whether or not a row matched.
    pub async fn delete_member(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM members WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn update_notes(&self, id: i64, notes: &str) -> Result<()> {
        sqlx::query("UPDATE members SET notes = ?1 WHERE id = ?2")
            .bind(notes)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
