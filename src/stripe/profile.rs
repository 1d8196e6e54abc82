// Remote customer/payment-profile lifecycle for a stored source.

use serde_json::Value;
use tracing::{debug, warn};

use crate::settings::GatewaySettings;
use crate::stripe::client::{AddressOptions, StoreOptions, StorePayment, StripeClient};
use crate::stripe::errors::GatewayError;
use crate::stripe::source::{normalized_brand, PaymentSource};
use crate::stripe::types::{OrderContext, ProfileIds};

/// Creates a remote customer/payment profile for the source, at most once
/// per source: if a customer profile id is already attached this returns
/// the existing ids without any remote call. The guard is local only;
/// concurrent requests for the same source can still race and create
/// duplicate remote profiles.
///
/// The brand remap is applied to the source before the store call and is
/// retained regardless of outcome. A remote decline leaves the profile
/// ids untouched and surfaces the remote message as `Rejected`.
pub async fn ensure_profile(
    client: &dyn StripeClient,
    settings: &GatewaySettings,
    source: &mut PaymentSource,
    order: &OrderContext,
) -> Result<ProfileIds, GatewayError> {
    if let Some(customer) = &source.gateway_customer_profile_id {
        debug!(
            target: "stripe",
            customer_profile_id = %customer,
            "source already has a remote profile, skipping store"
        );
        return Ok(ProfileIds {
            customer_profile_id: customer.clone(),
            payment_profile_id: source.gateway_payment_profile_id.clone(),
        });
    }

    let options = StoreOptions {
        email: order.email.clone(),
        login: settings.secret_key.clone(),
        address: address_options(order),
    };

    source.brand = normalized_brand(&source.brand).to_string();

    // No raw number but an existing payment-profile id: store by id.
    // Otherwise this is a first-time tokenized store of the full source.
    let payment = match &source.gateway_payment_profile_id {
        Some(id) if !source.has_card_number() => StorePayment::ProfileId(id.clone()),
        _ => StorePayment::Card(source.clone()),
    };

    debug!(
        target: "stripe",
        order_id = %order.order_id,
        by_profile_id = matches!(payment, StorePayment::ProfileId(_)),
        "storing payment profile"
    );

    let response = client.store(&payment, &options).await?;
    if !response.success {
        warn!(
            target: "stripe",
            order_id = %order.order_id,
            message = %response.message,
            "remote store rejected"
        );
        return Err(GatewayError::rejected(response.message));
    }

    let customer = response
        .params
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or(&response.reference)
        .to_string();
    let payment_profile = response
        .params
        .get("default_source")
        .or_else(|| response.params.get("default_card"))
        .and_then(Value::as_str)
        .map(str::to_string);

    source.gateway_customer_profile_id = Some(customer.clone());
    source.gateway_payment_profile_id = payment_profile.clone();

    Ok(ProfileIds {
        customer_profile_id: customer,
        payment_profile_id: payment_profile,
    })
}

fn address_options(order: &OrderContext) -> Option<AddressOptions> {
    order.billing_address.as_ref().map(|address| AddressOptions {
        address1: address.line1.clone(),
        address2: address.line2.clone(),
        city: address.city.clone(),
        zip: address.zip.clone(),
        country: address.country.clone(),
        state: address.state.clone(),
    })
}
