mod request_handler;
mod worksheet_handler;

pub use request_handler::*;
pub use worksheet_handler::*;
