pub mod constants;
pub mod patch;
pub mod types;
pub mod validation;
