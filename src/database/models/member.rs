use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Member {
    pub id: i64,
    pub name: String,
    /// Code of the owning team. Kept as-is when the team is deleted, so
    /// members of a deleted team dangle rather than disappear.
    pub team: String,
    pub notes: String,
}

/// Form payload for `POST /add/member/{code}`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewMemberForm {
    pub name: String,
}

/// Form payload for `POST /note/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct NotesForm {
    pub notes: String,
}
