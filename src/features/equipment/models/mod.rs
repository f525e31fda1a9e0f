mod equipment;

pub use equipment::Equipment;
