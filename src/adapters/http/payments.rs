use super::ApiClient;
use crate::adapters::dto::payment::CheckoutRequestDto;
use crate::adapters::dto::{CheckoutSessionDto, PaymentStatusDto};
use crate::domain::model::{CheckoutSession, PaymentStatus};
use crate::domain::ports::PaymentRepository;
use crate::utils::error::Result;
use async_trait::async_trait;

pub struct HttpPaymentRepository {
    client: ApiClient,
}

impl HttpPaymentRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PaymentRepository for HttpPaymentRepository {
    async fn create_checkout(&self, league_id: &str) -> Result<CheckoutSession> {
        let body = CheckoutRequestDto {
            league_id: league_id.to_string(),
        };
        let dto: CheckoutSessionDto = self.client.post(&["payments", "checkout"], &body).await?;
        Ok(dto.into())
    }

    async fn get_status(&self, session_id: &str) -> Result<PaymentStatus> {
        let dto: PaymentStatusDto = self
            .client
            .get(&["payments", session_id, "status"])
            .await?;
        Ok(dto.into())
    }
}
