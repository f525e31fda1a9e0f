mod work_center_dto;

pub use work_center_dto::{CreateWorkCenterDto, UpdateWorkCenterDto, WorkCenterResponseDto};
