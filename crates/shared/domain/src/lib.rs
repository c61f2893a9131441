//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the placement CRM's aggregates, their create/update payloads and the rules
//! those payloads must satisfy, plus password hashing for linked accounts.

pub mod account;
pub mod constants;
pub mod error;
pub mod facility;
pub mod password;
pub mod placement_executive;
pub mod student;
pub mod validation;

pub use account::{
    normalize_login_id, Account, AccountResponse, AccountStatus, Credentials, LoginCredentials,
    Role,
};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use facility::{
    CreateFacility, Facility, FacilityAggregate, FacilityAgreement, FacilityAttribute,
    FacilityBranch, FacilityRule, NewFacilityAgreement, NewFacilityAttribute, NewFacilityBranch,
    NewFacilityRule, UpdateFacility,
};
pub use password::Password;
pub use placement_executive::{
    CreatePlacementExecutive, NewPlacementExecutiveRegion, PlacementExecutive,
    PlacementExecutiveAggregate, PlacementExecutiveRegion, UpdatePlacementExecutive,
};
pub use student::{
    CreateStudent, NewStudentAddress, NewStudentEligibility, NewStudentJobStatus,
    NewStudentVisa, Student, StudentAddress, StudentAggregate, StudentEligibility,
    StudentJobStatus, StudentVisa, UpdateStudent,
};
pub use validation::Draft;
