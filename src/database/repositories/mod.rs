pub mod member_repository;
pub mod team_repository;
pub mod thing_repository;

// Re-export all repositories for easy importing
pub use member_repository::MemberRepository;
pub use team_repository::TeamRepository;
pub use thing_repository::ThingRepository;
