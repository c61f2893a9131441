//! Student aggregate: the student plus addresses, visas, eligibility
//! assessments and job status history.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::account::{AccountResponse, LoginCredentials};
use crate::error::{DomainError, DomainResult};
use crate::validation::{ensure_valid_group, Draft, PHONE_PATTERN, POSTCODE_PATTERN};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Student {
    #[serde(rename = "student_id")]
    pub id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    /// Contact address; never used as a login identifier
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub course: Option<String>,
    pub intake: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StudentAddress {
    pub id: i32,
    pub student_id: i32,
    pub address_type: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StudentVisa {
    pub id: i32,
    pub student_id: i32,
    pub visa_type: String,
    pub visa_number: Option<String>,
    pub expiry_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StudentEligibility {
    pub id: i32,
    pub student_id: i32,
    pub criterion: String,
    pub is_eligible: bool,
    pub assessed_on: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StudentJobStatus {
    pub id: i32,
    pub student_id: i32,
    pub status: String,
    pub employer: Option<String>,
    pub position: Option<String>,
    pub effective_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StudentAggregate {
    #[serde(flatten)]
    pub student: Student,
    pub addresses: Vec<StudentAddress>,
    pub visas: Vec<StudentVisa>,
    pub eligibility: Vec<StudentEligibility>,
    pub job_statuses: Vec<StudentJobStatus>,
    pub account: Option<AccountResponse>,
}

// =============================================================================
// Create / update payloads
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewStudentAddress {
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "address_type is required"))]
    pub address_type: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    #[validate(regex(path = *POSTCODE_PATTERN, message = "postcode is invalid"))]
    pub postcode: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewStudentVisa {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "visa_type is required"))]
    pub visa_type: String,
    #[validate(length(max = 50, message = "visa_number must be at most 50 characters"))]
    pub visa_number: Option<String>,
    pub expiry_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewStudentEligibility {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "criterion is required"))]
    pub criterion: String,
    #[serde(default)]
    pub is_eligible: bool,
    pub assessed_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewStudentJobStatus {
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "status is required"))]
    pub status: String,
    pub employer: Option<String>,
    pub position: Option<String>,
    pub effective_date: Option<NaiveDate>,
}

/// Student creation request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateStudent {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "first_name is required"))]
    pub first_name: String,
    #[validate(length(max = 255, message = "last_name must be at most 255 characters"))]
    pub last_name: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    #[validate(regex(path = *PHONE_PATTERN, message = "phone must be a valid phone number"))]
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub course: Option<String>,
    pub intake: Option<String>,
    #[serde(default)]
    pub addresses: Vec<NewStudentAddress>,
    #[serde(default)]
    pub visas: Vec<NewStudentVisa>,
    #[serde(default)]
    pub eligibility: Vec<NewStudentEligibility>,
    #[serde(default)]
    pub job_statuses: Vec<NewStudentJobStatus>,
    pub login: Option<LoginCredentials>,
}

impl Draft for CreateStudent {
    fn login(&self) -> Option<&LoginCredentials> {
        self.login.as_ref()
    }

    fn check_rules(&self) -> DomainResult<()> {
        if let Some(dob) = self.date_of_birth {
            if dob >= Utc::now().date_naive() {
                return Err(DomainError::validation("date_of_birth must be in the past"));
            }
        }
        ensure_valid_group("addresses", &self.addresses)?;
        ensure_valid_group("visas", &self.visas)?;
        ensure_valid_group("eligibility", &self.eligibility)?;
        ensure_valid_group("job_statuses", &self.job_statuses)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateStudent {
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
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, format = Date, nullable))]
    pub date_of_birth: Option<Option<NaiveDate>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, nullable))]
    pub course: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<String>, nullable))]
    pub intake: Option<Option<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_of_birth_in_future_rejected() {
        let draft = CreateStudent {
            first_name: "Sam".to_string(),
            date_of_birth: Some(Utc::now().date_naive() + chrono::Duration::days(1)),
            ..Default::default()
        };

        assert_eq!(
            draft.check().unwrap_err(),
            DomainError::validation("date_of_birth must be in the past")
        );
    }

    #[test]
    fn test_child_groups_validated() {
        let draft = CreateStudent {
            first_name: "Sam".to_string(),
            visas: vec![NewStudentVisa::default()],
            ..Default::default()
        };

        assert_eq!(
            draft.check().unwrap_err(),
            DomainError::validation("visas[0]: visa_type is required")
        );
    }

    #[test]
    fn test_contact_email_is_not_a_login() {
        let draft = CreateStudent {
            first_name: "Sam".to_string(),
            email: Some("sam@uni.edu".to_string()),
            ..Default::default()
        };

        assert_eq!(draft.check().unwrap(), None);
    }
}
