mod request_dto;
mod worksheet_dto;

pub use request_dto::{
    CreateMaintenanceRequestDto, MaintenanceRequestResponseDto, UpdateMaintenanceRequestDto,
};
pub use worksheet_dto::{
    CreateWorksheetLineDto, UpdateWorksheetLineDto, WorksheetLineResponseDto,
};
