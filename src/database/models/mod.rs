pub mod member;
pub mod team;
pub mod thing;

// Re-export all models for easy importing
pub use member::{Member, NewMemberForm, NotesForm};
pub use team::{NewTeamForm, Team};
pub use thing::Thing;
