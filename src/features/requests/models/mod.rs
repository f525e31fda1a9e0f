mod request;
mod worksheet_line;

pub use request::{
    MaintenanceKind, MaintenanceRequest, MaintenanceRequestWithNames, MaintenanceScope,
    MaintenanceStage,
};
pub use worksheet_line::WorksheetLine;
