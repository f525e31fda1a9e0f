mod work_center;

pub use work_center::WorkCenter;
