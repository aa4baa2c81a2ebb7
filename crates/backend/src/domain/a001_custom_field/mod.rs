pub mod registry;
pub mod service;
