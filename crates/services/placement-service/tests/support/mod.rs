//! Shared setup for placement service integration tests.

#![allow(dead_code)]

use std::time::Duration;

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

use common::{DatabaseConfig, JwtConfig};
use domain::{
    CreateFacility, CreatePlacementExecutive, CreateStudent, LoginCredentials, NewFacilityAgreement,
    NewFacilityBranch, NewPlacementExecutiveRegion, NewStudentAddress, NewStudentEligibility,
    NewStudentJobStatus, NewStudentVisa,
};
use placement_service_lib::config::PlacementServiceConfig;
use placement_service_lib::infra::Database;
use placement_service_lib::Services;

pub const TEST_JWT_SECRET: &str = "integration-test-secret-at-least-32-chars";

pub fn test_config() -> PlacementServiceConfig {
    PlacementServiceConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            // One connection: every pooled connection would get its own in-memory database
            max_connections: 1,
            min_connections: 1,
        },
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            expiration_hours: 1,
        },
        transaction_timeout: Duration::from_secs(10),
    }
}

/// Migrated in-memory database plus services wired to it.
pub async fn setup() -> (Database, Services) {
    let config = test_config();
    let db = Database::connect(&config.database)
        .await
        .expect("in-memory database");
    let services = Services::new(&db, &config);
    (db, services)
}

/// Number of stored rows, soft deleted or not.
pub async fn count<E: EntityTrait>(db: &DatabaseConnection) -> u64
where
    E::Model: Sync,
{
    E::find().count(db).await.expect("count rows")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn acme_care() -> CreateFacility {
    CreateFacility {
        organization_name: "Acme Care".to_string(),
        email: Some("office@acme.example".to_string()),
        branches: vec![NewFacilityBranch {
            city: "Springfield".to_string(),
            ..Default::default()
        }],
        login: Some(LoginCredentials::new("acme@x.com", "Secret123")),
        ..Default::default()
    }
}

pub fn facility_named(name: &str) -> CreateFacility {
    CreateFacility {
        organization_name: name.to_string(),
        ..Default::default()
    }
}

pub fn facility_with_agreement() -> CreateFacility {
    CreateFacility {
        agreements: vec![NewFacilityAgreement {
            agreement_type: "Placement".to_string(),
            start_date: Some(date(2024, 1, 1)),
            end_date: Some(date(2025, 1, 1)),
            document_url: None,
        }],
        ..acme_care()
    }
}

pub fn dana() -> CreatePlacementExecutive {
    CreatePlacementExecutive {
        first_name: "Dana".to_string(),
        joining_date: Some(date(2024, 2, 1)),
        regions: vec![NewPlacementExecutiveRegion {
            region: "North".to_string(),
            state: Some("NSW".to_string()),
        }],
        login: Some(LoginCredentials::new("dana@x.com", "Secret123")),
        ..Default::default()
    }
}

pub fn sam() -> CreateStudent {
    CreateStudent {
        first_name: "Sam".to_string(),
        last_name: Some("Lee".to_string()),
        email: Some("sam@uni.edu".to_string()),
        date_of_birth: Some(date(2001, 5, 17)),
        course: Some("Nursing".to_string()),
        addresses: vec![
            NewStudentAddress {
                address_type: "home".to_string(),
                city: Some("Sydney".to_string()),
                ..Default::default()
            },
            NewStudentAddress {
                address_type: "term".to_string(),
                city: Some("Newcastle".to_string()),
                ..Default::default()
            },
        ],
        visas: vec![NewStudentVisa {
            visa_type: "Student 500".to_string(),
            visa_number: Some("V123".to_string()),
            expiry_date: Some(date(2027, 6, 30)),
        }],
        eligibility: vec![NewStudentEligibility {
            criterion: "First aid certificate".to_string(),
            is_eligible: true,
            assessed_on: Some(date(2024, 3, 1)),
        }],
        job_statuses: vec![NewStudentJobStatus {
            status: "seeking".to_string(),
            ..Default::default()
        }],
        login: Some(LoginCredentials::new("sam.lee", "Secret123")),
        ..Default::default()
    }
}
