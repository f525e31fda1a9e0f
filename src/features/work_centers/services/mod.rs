mod work_center_service;

pub use work_center_service::WorkCenterService;
