//! Placement executive aggregate.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::account::{AccountResponse, LoginCredentials};
use crate::error::DomainResult;
use crate::validation::{ensure_valid_group, required, Draft, PHONE_PATTERN};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PlacementExecutive {
    #[serde(rename = "placement_executive_id")]
    pub id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub designation: Option<String>,
    pub joining_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Region a placement executive covers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PlacementExecutiveRegion {
    pub id: i32,
    pub placement_executive_id: i32,
    pub region: String,
    pub state: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PlacementExecutiveAggregate {
    #[serde(flatten)]
    pub placement_executive: PlacementExecutive,
    pub regions: Vec<PlacementExecutiveRegion>,
    pub account: Option<AccountResponse>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewPlacementExecutiveRegion {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "region is required"))]
    pub region: String,
    pub state: Option<String>,
}

/// Placement executive creation request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreatePlacementExecutive {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "first_name is required"))]
    pub first_name: String,
    #[validate(length(max = 255, message = "last_name must be at most 255 characters"))]
    pub last_name: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    #[validate(regex(path = *PHONE_PATTERN, message = "phone must be a valid phone number"))]
    pub phone: Option<String>,
    pub designation: Option<String>,
    /// Required; optional on the wire so its absence is a validation error
    pub joining_date: Option<NaiveDate>,
    #[serde(default)]
    pub regions: Vec<NewPlacementExecutiveRegion>,
    pub login: Option<LoginCredentials>,
}

impl Draft for CreatePlacementExecutive {
    fn login(&self) -> Option<&LoginCredentials> {
        self.login.as_ref()
    }

    fn check_rules(&self) -> DomainResult<()> {
        required(self.joining_date, "joining_date")?;
        ensure_valid_group("regions", &self.regions)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdatePlacementExecutive {
    #[validate(length(min = 1, max = 255, message = "first_name cannot be empty"))]
    pub first_name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, nullable))]
    pub last_name: Option<Option<String>>,
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
    pub designation: Option<Option<String>>,
    pub joining_date: Option<NaiveDate>,
}
