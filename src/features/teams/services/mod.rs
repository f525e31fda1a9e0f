mod team_service;

pub use team_service::TeamService;
