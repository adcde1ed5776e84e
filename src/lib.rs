pub mod catalog;
pub mod config;
pub mod database;
pub mod error;
pub mod exchange;
pub mod handlers;
pub mod listing;
pub mod profile;
pub mod state;
