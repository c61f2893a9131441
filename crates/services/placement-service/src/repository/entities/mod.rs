//! SeaORM entities, one module per table.

pub mod account;
pub mod facility;
pub mod facility_agreement;
pub mod facility_attribute;
pub mod facility_branch;
pub mod facility_rule;
pub mod placement_executive;
pub mod placement_executive_region;
pub mod role;
pub mod student;
pub mod student_address;
pub mod student_eligibility;
pub mod student_job_status;
pub mod student_visa;
