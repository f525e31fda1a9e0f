mod request_service;
mod worksheet_service;

pub use request_service::{RequestFilters, RequestService};
pub use worksheet_service::WorksheetService;
