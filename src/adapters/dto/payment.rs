use crate::domain::model::{CheckoutSession, PaymentState, PaymentStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequestDto {
    pub league_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSessionDto {
    pub session_id: String,
    pub checkout_url: String,
}

impl From<CheckoutSessionDto> for CheckoutSession {
    fn from(dto: CheckoutSessionDto) -> Self {
        CheckoutSession {
            session_id: dto.session_id,
            checkout_url: dto.checkout_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusDto {
    pub session_id: String,
    pub league_id: String,
    pub status: PaymentState,
}

impl From<PaymentStatusDto> for PaymentStatus {
    fn from(dto: PaymentStatusDto) -> Self {
        PaymentStatus {
            session_id: dto.session_id,
            league_id: dto.league_id,
            status: dto.status,
        }
    }
}
