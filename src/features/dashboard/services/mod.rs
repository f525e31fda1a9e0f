mod dashboard_service;
pub mod stats;

pub use dashboard_service::DashboardService;
