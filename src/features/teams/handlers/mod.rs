mod team_handler;

pub use team_handler::*;
