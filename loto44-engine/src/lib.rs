pub mod analysis;
pub mod error;
pub mod models;
pub mod sampler;
pub mod store;
