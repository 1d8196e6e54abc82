// Outbound seam to the remote payment API.
//
// The HTTP transport, authentication and retry behavior live behind this
// trait; the adapter only decides what to send.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::stripe::errors::GatewayError;
use crate::stripe::source::{PaymentObject, PaymentSource};
use crate::stripe::types::GatewayResponse;

/// Options attached to a charge-shaped call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Billing address block sent with a store call. Country and state are
/// added only when the host order carries them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressOptions {
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub zip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Options for storing a customer/payment profile remotely. `login` is
/// the secret key; the remote API treats it as the authentication login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreOptions {
    pub email: String,
    pub login: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressOptions>,
}

/// What gets stored: either a previously issued payment-profile id, or
/// the full source on a first-time tokenized store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorePayment {
    ProfileId(String),
    Card(PaymentSource),
}

/// Remote payment API client. Implementations may only fail with
/// `GatewayError::Transport`; a remote decline comes back as a
/// `GatewayResponse` with `success = false`.
#[async_trait]
pub trait StripeClient: Send + Sync {
    async fn purchase(
        &self,
        amount: i64,
        payment: &PaymentObject,
        options: &ChargeOptions,
    ) -> Result<GatewayResponse, GatewayError>;

    async fn authorize(
        &self,
        amount: i64,
        payment: &PaymentObject,
        options: &ChargeOptions,
    ) -> Result<GatewayResponse, GatewayError>;

    async fn capture(
        &self,
        amount: i64,
        reference: &str,
        options: &ChargeOptions,
    ) -> Result<GatewayResponse, GatewayError>;

    async fn refund(
        &self,
        amount: i64,
        reference: &str,
        options: &ChargeOptions,
    ) -> Result<GatewayResponse, GatewayError>;

    async fn void(
        &self,
        reference: &str,
        options: &ChargeOptions,
    ) -> Result<GatewayResponse, GatewayError>;

    async fn store(
        &self,
        payment: &StorePayment,
        options: &StoreOptions,
    ) -> Result<GatewayResponse, GatewayError>;
}

#[cfg(test)]
pub(crate) mod recording {
    //! Recording client used across the adapter's tests: remembers every
    //! call and replays queued responses in order.

    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) enum RemoteCall {
        Purchase {
            amount: i64,
            payment: PaymentObject,
            options: ChargeOptions,
        },
        Authorize {
            amount: i64,
            payment: PaymentObject,
            options: ChargeOptions,
        },
        Capture {
            amount: i64,
            reference: String,
        },
        Refund {
            amount: i64,
            reference: String,
        },
        Void {
            reference: String,
        },
        Store {
            payment: StorePayment,
            options: StoreOptions,
        },
    }

    #[derive(Default)]
    pub(crate) struct RecordingClient {
        pub(crate) calls: Mutex<Vec<RemoteCall>>,
        responses: Mutex<VecDeque<Result<GatewayResponse, GatewayError>>>,
    }

    impl RecordingClient {
        pub(crate) fn approving() -> Self {
            Self::default()
        }

        pub(crate) fn returning(
            responses: Vec<Result<GatewayResponse, GatewayError>>,
        ) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                responses: Mutex::new(responses.into_iter().collect()),
            }
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        fn record(&self, call: RemoteCall) -> Result<GatewayResponse, GatewayError> {
            self.calls.lock().unwrap().push(call);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(GatewayResponse::approved("ref_test", "ok")))
        }
    }

    #[async_trait]
    impl StripeClient for RecordingClient {
        async fn purchase(
            &self,
            amount: i64,
            payment: &PaymentObject,
            options: &ChargeOptions,
        ) -> Result<GatewayResponse, GatewayError> {
            self.record(RemoteCall::Purchase {
                amount,
                payment: payment.clone(),
                options: options.clone(),
            })
        }

        async fn authorize(
            &self,
            amount: i64,
            payment: &PaymentObject,
            options: &ChargeOptions,
        ) -> Result<GatewayResponse, GatewayError> {
            self.record(RemoteCall::Authorize {
                amount,
                payment: payment.clone(),
                options: options.clone(),
            })
        }

        async fn capture(
            &self,
            amount: i64,
            reference: &str,
            _options: &ChargeOptions,
        ) -> Result<GatewayResponse, GatewayError> {
            self.record(RemoteCall::Capture {
                amount,
                reference: reference.to_string(),
            })
        }

        async fn refund(
            &self,
            amount: i64,
            reference: &str,
            _options: &ChargeOptions,
        ) -> Result<GatewayResponse, GatewayError> {
            self.record(RemoteCall::Refund {
                amount,
                reference: reference.to_string(),
            })
        }

        async fn void(
            &self,
            reference: &str,
            _options: &ChargeOptions,
        ) -> Result<GatewayResponse, GatewayError> {
            self.record(RemoteCall::Void {
                reference: reference.to_string(),
            })
        }

        async fn store(
            &self,
            payment: &StorePayment,
            options: &StoreOptions,
        ) -> Result<GatewayResponse, GatewayError> {
            self.record(RemoteCall::Store {
                payment: payment.clone(),
                options: options.clone(),
            })
        }
    }
}
