use crate::domain::model::{CheckoutSession, PaymentStatus};
use crate::domain::ports::PaymentRepository;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_uuid};
use std::sync::Arc;

pub struct CreateCheckoutUseCase {
    repository: Arc<dyn PaymentRepository>,
}

impl CreateCheckoutUseCase {
    pub fn new(repository: Arc<dyn PaymentRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, league_id: &str) -> Result<CheckoutSession> {
        validate_uuid("leagueId", league_id)?;
        self.repository.create_checkout(league_id).await
    }
}

pub struct GetPaymentStatusUseCase {
    repository: Arc<dyn PaymentRepository>,
}

impl GetPaymentStatusUseCase {
    pub fn new(repository: Arc<dyn PaymentRepository>) -> Self {
        Self { repository }
    }

    // Session ids come from the payment provider and are not UUIDs.
    pub async fn execute(&self, session_id: &str) -> Result<PaymentStatus> {
        validate_non_empty_string("sessionId", session_id)?;
        self.repository.get_status(session_id).await
    }
}
