mod dashboard_dto;

pub use dashboard_dto::{
    DashboardStatsDto, EquipmentFaultDto, MonthlyTrendDto, ReportStatsDto, StageCountsDto,
    TechnicianScoreDto,
};
