mod team_dto;

pub use team_dto::{CreateTeamDto, TeamResponseDto, UpdateTeamDto};
