pub mod database;
pub mod rabbitmq;
pub mod redis;
