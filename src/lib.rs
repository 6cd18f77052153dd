pub mod api;
pub mod errors;
pub mod models;
pub mod repository;
pub mod services;
pub mod settings;
pub mod utils;
