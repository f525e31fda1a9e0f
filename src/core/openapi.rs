use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::features::equipment::{dtos as equipment_dtos, handlers as equipment_handlers};
use crate::features::requests::{
    dtos as requests_dtos, handlers as requests_handlers, models as requests_models,
};
use crate::features::teams::{dtos as teams_dtos, handlers as teams_handlers};
use crate::features::users::{dtos as users_dtos, handlers as users_handlers, models as users_models};
use crate::features::work_centers::{
    dtos as work_centers_dtos, handlers as work_centers_handlers,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::register,
        auth_handlers::login,
        auth_handlers::get_me,
        // Users
        users_handlers::list_users,
        users_handlers::get_user,
        users_handlers::update_user,
        // Teams
        teams_handlers::list_teams,
        teams_handlers::create_team,
        teams_handlers::get_team,
        teams_handlers::update_team,
        teams_handlers::delete_team,
        // Work centers
        work_centers_handlers::list_work_centers,
        work_centers_handlers::create_work_center,
        work_centers_handlers::get_work_center,
        work_centers_handlers::update_work_center,
        work_centers_handlers::delete_work_center,
        // Equipment
        equipment_handlers::list_equipment,
        equipment_handlers::create_equipment,
        equipment_handlers::get_equipment,
        equipment_handlers::update_equipment,
        equipment_handlers::get_equipment_request_counts,
        // Maintenance requests
        requests_handlers::list_requests,
        requests_handlers::create_request,
        requests_handlers::get_request,
        requests_handlers::update_request,
        // Worksheet lines
        requests_handlers::list_worksheet_lines,
        requests_handlers::create_worksheet_line,
        requests_handlers::update_worksheet_line,
        requests_handlers::delete_worksheet_line,
        // Dashboard
        dashboard_handlers::get_dashboard_stats,
        dashboard_handlers::get_report_stats,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Auth
            auth_dtos::RegisterRequestDto,
            auth_dtos::LoginRequestDto,
            auth_dtos::AuthUserDto,
            auth_dtos::AuthResponseDto,
            ApiResponse<auth_dtos::AuthResponseDto>,
            ApiResponse<auth_dtos::AuthUserDto>,
            // Users
            users_models::UserRole,
            users_dtos::UserResponseDto,
            users_dtos::UpdateUserDto,
            ApiResponse<Vec<users_dtos::UserResponseDto>>,
            ApiResponse<users_dtos::UserResponseDto>,
            // Teams
            teams_dtos::CreateTeamDto,
            teams_dtos::UpdateTeamDto,
            teams_dtos::TeamResponseDto,
            ApiResponse<Vec<teams_dtos::TeamResponseDto>>,
            ApiResponse<teams_dtos::TeamResponseDto>,
            // Work centers
            work_centers_dtos::CreateWorkCenterDto,
            work_centers_dtos::UpdateWorkCenterDto,
            work_centers_dtos::WorkCenterResponseDto,
            ApiResponse<Vec<work_centers_dtos::WorkCenterResponseDto>>,
            ApiResponse<work_centers_dtos::WorkCenterResponseDto>,
            // Equipment
            equipment_dtos::CreateEquipmentDto,
            equipment_dtos::UpdateEquipmentDto,
            equipment_dtos::EquipmentResponseDto,
            equipment_dtos::EquipmentRequestCountDto,
            ApiResponse<Vec<equipment_dtos::EquipmentResponseDto>>,
            ApiResponse<equipment_dtos::EquipmentResponseDto>,
            ApiResponse<equipment_dtos::EquipmentRequestCountDto>,
            // Maintenance requests
            requests_models::MaintenanceStage,
            requests_models::MaintenanceKind,
            requests_models::MaintenanceScope,
            requests_dtos::CreateMaintenanceRequestDto,
            requests_dtos::UpdateMaintenanceRequestDto,
            requests_dtos::MaintenanceRequestResponseDto,
            requests_dtos::CreateWorksheetLineDto,
            requests_dtos::UpdateWorksheetLineDto,
            requests_dtos::WorksheetLineResponseDto,
            ApiResponse<Vec<requests_dtos::MaintenanceRequestResponseDto>>,
            ApiResponse<requests_dtos::MaintenanceRequestResponseDto>,
            ApiResponse<Vec<requests_dtos::WorksheetLineResponseDto>>,
            ApiResponse<requests_dtos::WorksheetLineResponseDto>,
            ApiResponse<String>,
            // Dashboard
            dashboard_dtos::DashboardStatsDto,
            dashboard_dtos::StageCountsDto,
            dashboard_dtos::EquipmentFaultDto,
            dashboard_dtos::TechnicianScoreDto,
            dashboard_dtos::MonthlyTrendDto,
            dashboard_dtos::ReportStatsDto,
            ApiResponse<dashboard_dtos::DashboardStatsDto>,
            ApiResponse<dashboard_dtos::ReportStatsDto>,
        )
    ),
    tags(
        (name = "auth", description = "Signup and session endpoints"),
        (name = "users", description = "Company user management"),
        (name = "teams", description = "Maintenance teams"),
        (name = "work-centers", description = "Work center registry"),
        (name = "equipment", description = "Equipment registry and scrap tracking"),
        (name = "requests", description = "Maintenance request lifecycle"),
        (name = "worksheet", description = "Request checklist steps"),
        (name = "dashboard", description = "KPIs and analytics reports"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Maintrack API",
        version = "0.1.0",
        description = "Maintenance management API",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
