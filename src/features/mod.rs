pub mod auth;
pub mod dashboard;
pub mod equipment;
pub mod requests;
pub mod teams;
pub mod users;
pub mod work_centers;
