pub mod ballot;
pub mod error;
pub mod model;
pub mod serialization;
pub mod service;
