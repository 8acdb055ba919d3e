pub mod id;
pub mod model;
pub mod query;
pub mod seed;
