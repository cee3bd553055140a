use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutSession {
    pub session_id: String,
    pub checkout_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentState {
    Pending,
    Paid,
    Failed,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentStatus {
    pub session_id: String,
    pub league_id: String,
    pub status: PaymentState,
}

impl PaymentStatus {
    pub fn is_settled(&self) -> bool {
        self.status != PaymentState::Pending
    }
}
