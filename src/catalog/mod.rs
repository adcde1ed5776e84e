pub mod query;
pub mod view;
