// Shared data model for the gateway adapter
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Monetary amount as submitted by the host system, still in the host's
/// own numeric convention. It stays a `Decimal` until it crosses the
/// amount localization boundary in `amount.rs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: Decimal,
    pub currency: String,
}

impl Money {
    pub fn new(amount: impl Into<Decimal>, currency: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency: currency.into(),
        }
    }
}

/// Billing address derived from host order data; read-only here, used only
/// while building store options for profile creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub zip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Per-charge metadata bundle handed in by the host system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderContext {
    pub order_id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
}

/// Outcome of a remote API call. A `success = false` response is a normal
/// value, not an error; the host decides how to surface it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayResponse {
    pub success: bool,
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl GatewayResponse {
    pub fn approved(reference: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            reference: reference.into(),
            message: message.into(),
            params: Map::new(),
        }
    }

    pub fn declined(message: impl Into<String>) -> Self {
        Self {
            success: false,
            reference: String::new(),
            message: message.into(),
            params: Map::new(),
        }
    }

    pub fn with_params(mut self, params: Map<String, Value>) -> Self {
        self.params = params;
        self
    }
}

/// Remote profile ids attached to a payment source after a successful store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileIds {
    pub customer_profile_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_profile_id: Option<String>,
}

/// Lifecycle of a single charge attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeState {
    Pending,
    Authorized,
    Captured,
    Voided,
    Refunded,
    Failed,
}

impl ChargeState {
    pub fn can_transition(self, next: ChargeState) -> bool {
        use ChargeState::*;
        matches!(
            (self, next),
            (Pending, Captured | Failed)
                | (Authorized, Captured | Voided | Failed)
                | (Captured, Refunded | Failed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ChargeState::Voided | ChargeState::Refunded | ChargeState::Failed
        )
    }
}
