use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Team {
    pub code: String,
    pub name: String,
    pub description: String,
    pub website: String,
}

/// Form payload for `POST /add/team`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTeamForm {
    pub name: String,
    pub code: String,
    pub description: String,
    pub website: String,
}
