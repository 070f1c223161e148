pub mod cache;
pub mod health;
pub mod info;
pub mod messages;
pub mod users;
