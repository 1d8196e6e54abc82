//! Translation layer between a host order system's payment abstraction and
//! a Stripe-style remote card-processing API.
//!
//! The crate owns three decisions: localizing a charge amount across
//! currencies with different minor-unit conventions, resolving a stored
//! payment source into the identifier shape the remote API expects
//! (token, stored customer/card pair, or raw card), and the idempotent
//! create-or-reuse lifecycle of a remote payment profile. The remote API
//! itself sits behind the [`StripeClient`] trait.

pub mod settings;
pub mod stripe;

pub use settings::{Config, GatewaySettings};
pub use stripe::amount::{localized_amount, non_fractional_currency, CURRENCIES_WITHOUT_FRACTIONS};
pub use stripe::client::{
    AddressOptions, ChargeOptions, StoreOptions, StorePayment, StripeClient,
};
pub use stripe::errors::GatewayError;
pub use stripe::source::{normalized_brand, CardDetails, PaymentObject, PaymentSource};
pub use stripe::types::{
    Address, ChargeState, GatewayResponse, Money, OrderContext, ProfileIds,
};
pub use stripe::StripeGateway;
