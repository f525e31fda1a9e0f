pub mod dtos;
pub mod handlers;
pub mod models;
pub mod patch;
pub mod routes;
pub mod services;
