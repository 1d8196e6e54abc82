// Stripe gateway adapter module

pub mod amount;
pub mod client;
pub mod errors;
pub mod profile;
pub mod source;
pub mod types;

use std::sync::Arc;
use tracing::debug;

use crate::settings::GatewaySettings;
use self::amount::localized_amount;
use self::client::{ChargeOptions, StripeClient};
use self::errors::GatewayError;
use self::source::{PaymentObject, PaymentSource};
use self::types::{GatewayResponse, Money, OrderContext, ProfileIds};

/// Adapter between the host system's payment operations and the remote
/// payment API client. Each operation localizes the amount, resolves the
/// source where one is involved, and performs a single outbound call; a
/// `success = false` response comes back as `Ok` for the host to
/// interpret.
#[derive(Clone)]
pub struct StripeGateway {
    client: Arc<dyn StripeClient>,
    settings: GatewaySettings,
}

impl StripeGateway {
    pub fn new(client: Arc<dyn StripeClient>, settings: GatewaySettings) -> Self {
        Self { client, settings }
    }

    pub fn name(&self) -> &'static str {
        "stripe"
    }

    pub fn payment_profiles_supported(&self) -> bool {
        true
    }

    pub fn settings(&self) -> &GatewaySettings {
        &self.settings
    }

    pub async fn purchase(
        &self,
        money: &Money,
        source: &PaymentSource,
        context: &OrderContext,
    ) -> Result<GatewayResponse, GatewayError> {
        let amount = localized_amount(money);
        let payment = PaymentObject::resolve(source);
        let options = charge_options(money, context);
        debug!(
            target: "stripe",
            amount,
            currency = %money.currency,
            order_id = %context.order_id,
            payment = ?payment.reference(),
            "purchase"
        );
        self.client.purchase(amount, &payment, &options).await
    }

    pub async fn authorize(
        &self,
        money: &Money,
        source: &PaymentSource,
        context: &OrderContext,
    ) -> Result<GatewayResponse, GatewayError> {
        let amount = localized_amount(money);
        let payment = PaymentObject::resolve(source);
        let options = charge_options(money, context);
        debug!(
            target: "stripe",
            amount,
            currency = %money.currency,
            order_id = %context.order_id,
            payment = ?payment.reference(),
            "authorize"
        );
        self.client.authorize(amount, &payment, &options).await
    }

    /// Captures a prior authorization. The source was already sent at
    /// authorize time, so only the reference code travels here.
    pub async fn capture(
        &self,
        money: &Money,
        reference: &str,
        _context: &OrderContext,
    ) -> Result<GatewayResponse, GatewayError> {
        let amount = localized_amount(money);
        let options = ChargeOptions {
            description: None,
            currency: Some(money.currency.clone()),
        };
        debug!(target: "stripe", amount, reference = %reference, "capture");
        self.client.capture(amount, reference, &options).await
    }

    /// Refunds against a captured charge. The source parameter exists for
    /// interface symmetry with the host's gateway surface and is not sent.
    pub async fn credit(
        &self,
        money: &Money,
        _source: &PaymentSource,
        reference: &str,
        _context: &OrderContext,
    ) -> Result<GatewayResponse, GatewayError> {
        let amount = localized_amount(money);
        debug!(target: "stripe", amount, reference = %reference, "refund");
        self.client
            .refund(amount, reference, &ChargeOptions::default())
            .await
    }

    pub async fn void(
        &self,
        reference: &str,
        _source: &PaymentSource,
        _context: &OrderContext,
    ) -> Result<GatewayResponse, GatewayError> {
        debug!(target: "stripe", reference = %reference, "void");
        self.client.void(reference, &ChargeOptions::default()).await
    }

    pub async fn cancel(&self, reference: &str) -> Result<GatewayResponse, GatewayError> {
        debug!(target: "stripe", reference = %reference, "cancel");
        self.client.void(reference, &ChargeOptions::default()).await
    }

    /// See [`profile::ensure_profile`].
    pub async fn ensure_profile(
        &self,
        source: &mut PaymentSource,
        context: &OrderContext,
    ) -> Result<ProfileIds, GatewayError> {
        profile::ensure_profile(self.client.as_ref(), &self.settings, source, context).await
    }
}

fn charge_options(money: &Money, context: &OrderContext) -> ChargeOptions {
    ChargeOptions {
        description: Some(format!("Order ID: {}", context.order_id)),
        currency: Some(money.currency.clone()),
    }
}
