use crate::domain::model::{AuthSession, Credentials, Registration, User};
use crate::domain::ports::AuthRepository;
use crate::session::SessionContext;
use crate::utils::error::{PredictionsError, Result};
use crate::utils::validation::validate_non_empty_string;
use std::sync::Arc;

pub struct LoginUseCase {
    repository: Arc<dyn AuthRepository>,
    session: SessionContext,
}

impl LoginUseCase {
    pub fn new(repository: Arc<dyn AuthRepository>, session: SessionContext) -> Self {
        Self {
            repository,
            session,
        }
    }

    pub async fn execute(&self, credentials: Credentials) -> Result<AuthSession> {
        validate_non_empty_string("email", &credentials.email)?;
        validate_non_empty_string("password", &credentials.password)?;
        let session = self.repository.login(credentials).await?;
        self.session.set(session.clone());
        Ok(session)
    }
}

pub struct RegisterUseCase {
    repository: Arc<dyn AuthRepository>,
    session: SessionContext,
}

impl RegisterUseCase {
    pub fn new(repository: Arc<dyn AuthRepository>, session: SessionContext) -> Self {
        Self {
            repository,
            session,
        }
    }

    pub async fn execute(&self, registration: Registration) -> Result<AuthSession> {
        validate_non_empty_string("email", &registration.email)?;
        validate_non_empty_string("password", &registration.password)?;
        validate_non_empty_string("displayName", &registration.display_name)?;
        let session = self.repository.register(registration).await?;
        self.session.set(session.clone());
        Ok(session)
    }
}

pub struct LogoutUseCase {
    repository: Arc<dyn AuthRepository>,
    session: SessionContext,
}

impl LogoutUseCase {
    pub fn new(repository: Arc<dyn AuthRepository>, session: SessionContext) -> Self {
        Self {
            repository,
            session,
        }
    }

    /// The local session is cleared even when the server call fails.
    pub async fn execute(&self) -> Result<()> {
        let result = self.repository.logout().await;
        self.session.clear();
        result
    }
}

pub struct VerifyEmailUseCase {
    repository: Arc<dyn AuthRepository>,
    session: SessionContext,
}

impl VerifyEmailUseCase {
    pub fn new(repository: Arc<dyn AuthRepository>, session: SessionContext) -> Self {
        Self {
            repository,
            session,
        }
    }

    pub async fn execute(&self, token: &str) -> Result<User> {
        validate_non_empty_string("token", token)?;
        let user = self.repository.verify_email(token).await?;
        if !user.is_email_verified {
            tracing::warn!("Verification call for {} returned an unverified user", user.email);
            return Err(PredictionsError::DomainConsistency {
                message: format!("email {} is still unverified", user.email),
            });
        }
        self.session.refresh_user(user.clone());
        Ok(user)
    }
}
