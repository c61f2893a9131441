//! Authentication service - login for provisioned accounts.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use common::{AppError, AppResult, JwtConfig};
use domain::{
    normalize_login_id, Account, AccountResponse, LoginCredentials, Password, Role,
    SECONDS_PER_HOUR, TOKEN_TYPE_BEARER,
};

use crate::repository::AccountRepository;

/// Verified against when the login id is unknown, so both paths cost one Argon2 run.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Account id
    pub sub: i32,
    #[serde(rename = "userID")]
    pub user_id: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TokenResponse {
    pub access_token: String,
    /// Always "Bearer"
    pub token_type: String,
    /// Lifetime in seconds
    pub expires_in: i64,
}

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify a login pair and issue a token
    async fn login(&self, credentials: LoginCredentials) -> AppResult<TokenResponse>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;

    /// The live account a token was issued to
    async fn current_account(&self, claims: &Claims) -> AppResult<AccountResponse>;
}

pub struct Authenticator {
    accounts: Arc<dyn AccountRepository>,
    jwt: JwtConfig,
}

impl Authenticator {
    pub fn new(accounts: Arc<dyn AccountRepository>, jwt: JwtConfig) -> Self {
        Self { accounts, jwt }
    }

    fn generate_token(&self, account: &Account, role: &Role) -> AppResult<TokenResponse> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.jwt.expiration_hours);

        let claims = Claims {
            sub: account.id,
            user_id: account.login_id.clone(),
            role: role.name.clone(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt.secret.as_bytes()),
        )?;

        Ok(TokenResponse {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.jwt.expiration_hours * SECONDS_PER_HOUR,
        })
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, credentials: LoginCredentials) -> AppResult<TokenResponse> {
        let (login_id, password) = match (credentials.user_id, credentials.password) {
            (Some(login_id), Some(password)) => (normalize_login_id(&login_id), password),
            _ => return Err(AppError::validation("userID and password are required")),
        };

        let found = self.accounts.find_by_login_id(&login_id).await?;

        // Verify even when the account is missing so timing does not reveal login ids
        let (stored_hash, can_login) = match &found {
            Some((account, _)) => (account.password_hash.clone(), account.can_login()),
            None => (DUMMY_HASH.to_string(), false),
        };

        let password_valid = tokio::task::spawn_blocking(move || {
            Password::from_hash(stored_hash).verify(&password)
        })
        .await
        .map_err(|e| AppError::internal(format!("Password verification task failed: {}", e)))?;

        match found {
            Some((account, role)) if can_login && password_valid => {
                tracing::info!(account_id = account.id, "Login succeeded");
                self.generate_token(&account, &role)
            }
            _ => Err(AppError::InvalidCredentials),
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt.secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    async fn current_account(&self, claims: &Claims) -> AppResult<AccountResponse> {
        match self.accounts.find_by_id(claims.sub).await? {
            Some((account, role)) if account.can_login() => {
                Ok(AccountResponse::new(account, role.name))
            }
            _ => Err(AppError::Unauthorized),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockAccountRepository;
    use domain::AccountStatus;

    const SECRET: &str = "test-secret-that-is-at-least-32-characters";

    fn jwt() -> JwtConfig {
        JwtConfig {
            secret: SECRET.to_string(),
            expiration_hours: 1,
        }
    }

    fn account(password: &str, status: AccountStatus) -> (Account, Role) {
        let now = Utc::now();
        let account = Account {
            id: 7,
            login_id: "acme@x.com".to_string(),
            password_hash: Password::new(password).unwrap().into_string(),
            role_id: 2,
            facility_id: Some(1),
            placement_executive_id: None,
            student_id: None,
            status,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        let role = Role {
            id: 2,
            name: "Facility".to_string(),
        };
        (account, role)
    }

    fn authenticator(mock: MockAccountRepository) -> Authenticator {
        Authenticator::new(Arc::new(mock), jwt())
    }

    #[tokio::test]
    async fn test_login_normalizes_id_and_issues_verifiable_token() {
        let found = account("Secret123", AccountStatus::Active);
        let mut mock = MockAccountRepository::new();
        mock.expect_find_by_login_id()
            .withf(|login_id| login_id == "acme@x.com")
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));

        let auth = authenticator(mock);
        let token = auth
            .login(LoginCredentials::new(" ACME@x.com ", "Secret123"))
            .await
            .unwrap();

        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, SECONDS_PER_HOUR);

        let claims = auth.verify_token(&token.access_token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.user_id, "acme@x.com");
        assert_eq!(claims.role, "Facility");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let found = account("Secret123", AccountStatus::Active);
        let mut mock = MockAccountRepository::new();
        mock.expect_find_by_login_id()
            .returning(move |_| Ok(Some(found.clone())));

        let result = authenticator(mock)
            .login(LoginCredentials::new("acme@x.com", "Wrong1234"))
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_account() {
        let mut mock = MockAccountRepository::new();
        mock.expect_find_by_login_id().returning(|_| Ok(None));

        let result = authenticator(mock)
            .login(LoginCredentials::new("nobody@x.com", "Secret123"))
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_inactive_account_cannot_login() {
        let found = account("Secret123", AccountStatus::Inactive);
        let mut mock = MockAccountRepository::new();
        mock.expect_find_by_login_id()
            .returning(move |_| Ok(Some(found.clone())));

        let result = authenticator(mock)
            .login(LoginCredentials::new("acme@x.com", "Secret123"))
            .await;

        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_requires_both_fields() {
        let mock = MockAccountRepository::new();

        let result = authenticator(mock)
            .login(LoginCredentials {
                user_id: Some("acme@x.com".to_string()),
                password: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_token_signed_with_other_secret_rejected() {
        let other = Authenticator::new(
            Arc::new(MockAccountRepository::new()),
            JwtConfig {
                secret: "another-secret-that-is-at-least-32-chars".to_string(),
                expiration_hours: 1,
            },
        );
        let (found, role) = account("Secret123", AccountStatus::Active);
        let token = other.generate_token(&found, &role).unwrap();

        let result = authenticator(MockAccountRepository::new()).verify_token(&token.access_token);
        assert!(matches!(result, Err(AppError::Jwt(_))));
    }

    #[tokio::test]
    async fn test_current_account_of_deleted_account_is_unauthorized() {
        let (mut found, role) = account("Secret123", AccountStatus::Active);
        found.deleted_at = Some(Utc::now());
        let mut mock = MockAccountRepository::new();
        mock.expect_find_by_id()
            .returning(move |_| Ok(Some((found.clone(), role.clone()))));

        let claims = Claims {
            sub: 7,
            user_id: "acme@x.com".to_string(),
            role: "Facility".to_string(),
            exp: 0,
            iat: 0,
        };
        let result = authenticator(mock).current_account(&claims).await;

        assert!(matches!(result, Err(AppError::Unauthorized)));
    }
}
