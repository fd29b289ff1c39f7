pub mod members;
pub mod pages;
pub mod shared;
pub mod teams;
