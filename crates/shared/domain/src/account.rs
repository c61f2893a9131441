//! Accounts, roles and login credentials.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{
    ACCOUNT_STATUS_ACTIVE, ACCOUNT_STATUS_INACTIVE, MAX_LOGIN_ID_LENGTH, MIN_PASSWORD_LENGTH,
};
use crate::error::{DomainError, DomainResult};
use crate::validation::ensure_valid;

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    /// Check if the account may log in
    pub fn is_active(&self) -> bool {
        matches!(self, AccountStatus::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => ACCOUNT_STATUS_ACTIVE,
            AccountStatus::Inactive => ACCOUNT_STATUS_INACTIVE,
        }
    }
}

impl From<&str> for AccountStatus {
    fn from(s: &str) -> Self {
        match s {
            ACCOUNT_STATUS_ACTIVE => AccountStatus::Active,
            _ => AccountStatus::Inactive,
        }
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role referenced by accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Role {
    pub id: i32,
    pub name: String,
}

/// Account domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i32,
    /// Unique login identifier (often an email address)
    pub login_id: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role_id: i32,
    pub facility_id: Option<i32>,
    pub placement_executive_id: Option<i32>,
    pub student_id: Option<i32>,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft delete timestamp (None = active, Some = deleted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Check if account is soft deleted
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Check if the account may authenticate
    pub fn can_login(&self) -> bool {
        self.status.is_active() && !self.is_deleted()
    }
}

/// Account fields safe to return to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AccountResponse {
    pub id: i32,
    #[serde(rename = "userID")]
    pub user_id: String,
    pub role: String,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

impl AccountResponse {
    pub fn new(account: Account, role: impl Into<String>) -> Self {
        Self {
            id: account.id,
            user_id: account.login_id,
            role: role.into(),
            status: account.status,
            created_at: account.created_at,
        }
    }
}

/// Canonical form of a login id: surrounding whitespace dropped, lowercased.
pub fn normalize_login_id(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// The optional `login` object of a create request.
///
/// Both halves are optional on the wire so that a lone half is reported as a
/// validation failure instead of a deserialization error.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LoginCredentials {
    #[serde(rename = "userID")]
    #[validate(length(min = 1, max = 255, message = "userID must be 1 to 255 characters"))]
    pub user_id: Option<String>,
    #[cfg_attr(feature = "openapi", schema(min_length = 8))]
    pub password: Option<String>,
}

impl LoginCredentials {
    pub fn new(user_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            password: Some(password.into()),
        }
    }

    /// Resolve the pair into credentials.
    ///
    /// An empty object means no account is requested.
    pub fn credentials(&self) -> DomainResult<Option<Credentials>> {
        ensure_valid(self)?;
        match (&self.user_id, &self.password) {
            (None, None) => Ok(None),
            (Some(_), None) => Err(DomainError::validation(
                "password is required when userID is supplied",
            )),
            (None, Some(_)) => Err(DomainError::validation(
                "userID is required when password is supplied",
            )),
            (Some(user_id), Some(password)) => {
                let login_id = normalize_login_id(user_id);
                if login_id.is_empty() || login_id.len() as u64 > MAX_LOGIN_ID_LENGTH {
                    return Err(DomainError::validation("userID must be 1 to 255 characters"));
                }
                if password.chars().count() < MIN_PASSWORD_LENGTH {
                    return Err(DomainError::validation(format!(
                        "password must be at least {} characters",
                        MIN_PASSWORD_LENGTH
                    )));
                }
                Ok(Some(Credentials {
                    login_id,
                    secret: password.clone(),
                }))
            }
        }
    }
}

/// A validated login pair, ready to be provisioned.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub login_id: String,
    pub secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("login_id", &self.login_id)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_login_requests_no_account() {
        assert_eq!(LoginCredentials::default().credentials().unwrap(), None);
    }

    #[test]
    fn test_login_pair_is_mutually_required() {
        let only_id = LoginCredentials {
            user_id: Some("acme@x.com".to_string()),
            password: None,
        };
        let only_secret = LoginCredentials {
            user_id: None,
            password: Some("Secret123".to_string()),
        };

        assert!(matches!(only_id.credentials(), Err(DomainError::Validation(_))));
        assert!(matches!(only_secret.credentials(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_login_id_is_trimmed_and_lowercased() {
        let creds = LoginCredentials::new("  Acme@X.com ", "Secret123")
            .credentials()
            .unwrap()
            .unwrap();
        assert_eq!(creds.login_id, "acme@x.com");
        assert_eq!(normalize_login_id("Sam.Lee"), "sam.lee");
    }

    #[test]
    fn test_short_password_rejected_without_echo() {
        let err = LoginCredentials::new("acme@x.com", "abc")
            .credentials()
            .unwrap_err();
        assert!(!err.to_string().contains("abc"));
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = LoginCredentials::new("acme@x.com", "Secret123")
            .credentials()
            .unwrap()
            .unwrap();
        let debug = format!("{:?}", creds);
        assert!(debug.contains("acme@x.com"));
        assert!(!debug.contains("Secret123"));
    }

    #[test]
    fn test_response_hides_hash() {
        let account = Account {
            id: 7,
            login_id: "acme@x.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            role_id: 2,
            facility_id: Some(1),
            placement_executive_id: None,
            student_id: None,
            status: AccountStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        };
        assert!(!serde_json::to_string(&account).unwrap().contains("argon2"));

        let json = serde_json::to_value(AccountResponse::new(account, "Facility")).unwrap();
        assert_eq!(json["userID"], "acme@x.com");
        assert_eq!(json["status"], "active");
        assert!(json.get("password_hash").is_none());
    }
}
