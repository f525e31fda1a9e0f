mod work_center_handler;

pub use work_center_handler::*;
