mod snapshot;

pub use snapshot::RequestSnapshot;
