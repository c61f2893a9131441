//! Credential provisioning for linked accounts.

use common::{AppError, AppResult};
use domain::{Credentials, Password};

use crate::infra::NewAccount;

/// Hash the secret on the blocking pool, before any transaction is opened.
pub(crate) async fn provision(credentials: Credentials) -> AppResult<NewAccount> {
    let Credentials { login_id, secret } = credentials;

    let password = tokio::task::spawn_blocking(move || Password::new(&secret))
        .await
        .map_err(|e| AppError::internal(format!("Password hashing task failed: {}", e)))??;

    Ok(NewAccount { login_id, password })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_provision_hashes_secret() {
        let account = provision(Credentials {
            login_id: "acme@x.com".to_string(),
            secret: "Secret123".to_string(),
        })
        .await
        .unwrap();

        assert_eq!(account.login_id, "acme@x.com");
        assert_ne!(account.password.as_str(), "Secret123");
        assert!(account.password.verify("Secret123"));
    }

    #[tokio::test]
    async fn test_provision_rejects_short_secret() {
        let result = provision(Credentials {
            login_id: "acme@x.com".to_string(),
            secret: "short".to_string(),
        })
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
