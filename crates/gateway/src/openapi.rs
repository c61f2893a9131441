//! OpenAPI documentation.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use domain::{
    AccountResponse, AccountStatus, CreateFacility, CreatePlacementExecutive, CreateStudent,
    Facility, FacilityAggregate, FacilityAgreement, FacilityAttribute, FacilityBranch,
    FacilityRule, LoginCredentials, NewFacilityAgreement, NewFacilityAttribute,
    NewFacilityBranch, NewFacilityRule, NewPlacementExecutiveRegion, NewStudentAddress,
    NewStudentEligibility, NewStudentJobStatus, NewStudentVisa, PlacementExecutive,
    PlacementExecutiveAggregate, PlacementExecutiveRegion, Role, Student, StudentAddress,
    StudentAggregate, StudentEligibility, StudentJobStatus, StudentVisa, UpdateFacility,
    UpdatePlacementExecutive, UpdateStudent,
};
use placement_service_lib::service::TokenResponse;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth_handler::login,
        crate::handlers::auth_handler::me,
        crate::handlers::facility_handler::create_facility,
        crate::handlers::facility_handler::list_facilities,
        crate::handlers::facility_handler::get_facility,
        crate::handlers::facility_handler::update_facility,
        crate::handlers::facility_handler::delete_facility,
        crate::handlers::facility_handler::purge_facility,
        crate::handlers::placement_executive_handler::create_placement_executive,
        crate::handlers::placement_executive_handler::list_placement_executives,
        crate::handlers::placement_executive_handler::get_placement_executive,
        crate::handlers::placement_executive_handler::update_placement_executive,
        crate::handlers::placement_executive_handler::delete_placement_executive,
        crate::handlers::placement_executive_handler::purge_placement_executive,
        crate::handlers::student_handler::create_student,
        crate::handlers::student_handler::list_students,
        crate::handlers::student_handler::get_student,
        crate::handlers::student_handler::update_student,
        crate::handlers::student_handler::delete_student,
        crate::handlers::student_handler::purge_student,
        crate::handlers::role_handler::list_roles,
    ),
    components(
        schemas(
            LoginCredentials,
            TokenResponse,
            AccountResponse,
            AccountStatus,
            Role,
            CreateFacility,
            UpdateFacility,
            NewFacilityAttribute,
            NewFacilityBranch,
            NewFacilityAgreement,
            NewFacilityRule,
            Facility,
            FacilityAttribute,
            FacilityBranch,
            FacilityAgreement,
            FacilityRule,
            FacilityAggregate,
            CreatePlacementExecutive,
            UpdatePlacementExecutive,
            NewPlacementExecutiveRegion,
            PlacementExecutive,
            PlacementExecutiveRegion,
            PlacementExecutiveAggregate,
            CreateStudent,
            UpdateStudent,
            NewStudentAddress,
            NewStudentVisa,
            NewStudentEligibility,
            NewStudentJobStatus,
            Student,
            StudentAddress,
            StudentVisa,
            StudentEligibility,
            StudentJobStatus,
            StudentAggregate,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login for provisioned accounts"),
        (name = "Facilities", description = "Facility aggregates"),
        (name = "Placement Executives", description = "Placement executive aggregates"),
        (name = "Students", description = "Student aggregates"),
        (name = "Roles", description = "Account roles"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
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
