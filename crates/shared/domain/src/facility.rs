//! Facility aggregate: the facility itself plus attributes, branches,
//! agreements and rules.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::account::{AccountResponse, LoginCredentials};
use crate::error::{DomainError, DomainResult};
use crate::validation::{ensure_date_order, ensure_valid_group, Draft, PHONE_PATTERN, POSTCODE_PATTERN};

/// Facility root entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Facility {
    #[serde(rename = "facility_id")]
    pub id: i32,
    pub organization_name: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub website: Option<String>,
    pub registration_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FacilityAttribute {
    pub id: i32,
    pub facility_id: i32,
    pub name: String,
    pub value: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FacilityBranch {
    pub id: i32,
    pub facility_id: i32,
    pub branch_name: Option<String>,
    pub address: Option<String>,
    pub city: String,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FacilityAgreement {
    pub id: i32,
    pub facility_id: i32,
    pub agreement_type: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub document_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FacilityRule {
    pub id: i32,
    pub facility_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Facility with every live child group and its login account
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FacilityAggregate {
    #[serde(flatten)]
    pub facility: Facility,
    pub attributes: Vec<FacilityAttribute>,
    pub branches: Vec<FacilityBranch>,
    pub agreements: Vec<FacilityAgreement>,
    pub rules: Vec<FacilityRule>,
    pub account: Option<AccountResponse>,
}

// =============================================================================
// Create / update payloads
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewFacilityAttribute {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,
    #[validate(length(max = 1000, message = "value must be at most 1000 characters"))]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewFacilityBranch {
    #[validate(length(max = 255, message = "branch_name must be at most 255 characters"))]
    pub branch_name: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "city is required"))]
    pub city: String,
    pub state: Option<String>,
    #[validate(regex(path = *POSTCODE_PATTERN, message = "postcode is invalid"))]
    pub postcode: Option<String>,
    #[validate(regex(path = *PHONE_PATTERN, message = "phone must be a valid phone number"))]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewFacilityAgreement {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "agreement_type is required"))]
    pub agreement_type: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[validate(url(message = "document_url must be a valid URL"))]
    pub document_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewFacilityRule {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "title is required"))]
    pub title: String,
    pub description: Option<String>,
}

/// Facility creation request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateFacility {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "organization_name is required"))]
    pub organization_name: String,
    #[validate(length(max = 255, message = "contact_person must be at most 255 characters"))]
    pub contact_person: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    #[validate(regex(path = *PHONE_PATTERN, message = "phone must be a valid phone number"))]
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[validate(regex(path = *POSTCODE_PATTERN, message = "postcode is invalid"))]
    pub postcode: Option<String>,
    #[validate(url(message = "website must be a valid URL"))]
    pub website: Option<String>,
    pub registration_date: Option<NaiveDate>,
    #[serde(default)]
    pub attributes: Vec<NewFacilityAttribute>,
    #[serde(default)]
    pub branches: Vec<NewFacilityBranch>,
    #[serde(default)]
    pub agreements: Vec<NewFacilityAgreement>,
    #[serde(default)]
    pub rules: Vec<NewFacilityRule>,
    pub login: Option<LoginCredentials>,
}

impl Draft for CreateFacility {
    fn login(&self) -> Option<&LoginCredentials> {
        self.login.as_ref()
    }

    fn check_rules(&self) -> DomainResult<()> {
        ensure_valid_group("attributes", &self.attributes)?;
        ensure_valid_group("branches", &self.branches)?;
        ensure_valid_group("agreements", &self.agreements)?;
        ensure_valid_group("rules", &self.rules)?;

        for (index, agreement) in self.agreements.iter().enumerate() {
            let start = agreement.start_date.ok_or_else(|| {
                DomainError::validation(format!("agreements[{}]: start_date is required", index))
            })?;
            ensure_date_order(start, agreement.end_date, "start_date", "end_date").map_err(|e| {
                DomainError::validation(format!("agreements[{}]: {}", index, e))
            })?;
        }
        Ok(())
    }
}

/// Facility update request; only the root's own scalar fields. An explicit null clears an optional field
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateFacility {
    #[validate(length(min = 1, max = 255, message = "organization_name cannot be empty"))]
    pub organization_name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, nullable))]
    pub contact_person: Option<Option<String>>,
    #[validate(email(message = "email must be a valid email address"))]
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, nullable))]
    pub email: Option<Option<String>>,
    #[validate(regex(path = *PHONE_PATTERN, message = "phone must be a valid phone number"))]
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, nullable))]
    pub phone: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, nullable))]
    pub address: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, nullable))]
    pub city: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, nullable))]
    pub state: Option<Option<String>>,
    #[validate(regex(path = *POSTCODE_PATTERN, message = "postcode is invalid"))]
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, nullable))]
    pub postcode: Option<Option<String>>,
    #[validate(url(message = "website must be a valid URL"))]
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, nullable))]
    pub website: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = Date, nullable))]
    pub registration_date: Option<Option<NaiveDate>>,
}
