pub mod draft;
pub mod model;
pub mod sample;
