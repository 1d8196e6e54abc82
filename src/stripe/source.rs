// Stored payment sources and their resolution into the identifier shape
// the remote API expects for a charge.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// One-time tokens look like "tok_..." with an optional word prefix
// (e.g. "btok_" bank tokens).
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w*tok_").expect("token pattern"));

/// Raw card data as entered by the buyer. Only present on a source that
/// has not been tokenized or stored remotely yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    pub number: String,
    pub exp_month: u32,
    pub exp_year: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A stored payment source owned by the host system. The adapter mutates
/// `brand` and the two gateway profile ids in place during profile
/// creation; it never deletes a source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSource {
    pub brand: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<CardDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_customer_profile_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_payment_profile_id: Option<String>,
}

impl PaymentSource {
    /// Whether the source still carries a raw card number.
    pub fn has_card_number(&self) -> bool {
        self.card.as_ref().is_some_and(|c| !c.number.is_empty())
    }
}

/// What actually goes over the wire for a charge or authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentObject {
    /// One-time token from a client-side tokenization.
    Token(String),
    /// Previously stored customer + card pair.
    StoredCard { customer: String, card: String },
    /// Full card data sent directly.
    Card(CardDetails),
}

impl PaymentObject {
    /// Resolves a source in fixed precedence order: token-shaped payment
    /// profile id first, then stored customer/card pair, then raw card.
    /// A source with no ids and no card degrades to empty card details;
    /// resolution never fails.
    pub fn resolve(source: &PaymentSource) -> Self {
        match &source.gateway_payment_profile_id {
            Some(id) if TOKEN_PATTERN.is_match(id) => PaymentObject::Token(id.clone()),
            Some(id) => PaymentObject::StoredCard {
                customer: source.gateway_customer_profile_id.clone().unwrap_or_default(),
                card: id.clone(),
            },
            None => PaymentObject::Card(source.card.clone().unwrap_or_default()),
        }
    }

    /// Wire identifier for the object, when it is identifier-shaped. A
    /// stored pair is serialized as `"<customer>|<card>"`.
    pub fn reference(&self) -> Option<String> {
        match self {
            PaymentObject::Token(token) => Some(token.clone()),
            PaymentObject::StoredCard { customer, card } => Some(format!("{customer}|{card}")),
            PaymentObject::Card(_) => None,
        }
    }
}

/// Maps a host-side card brand name into the remote API's vocabulary.
/// Unmapped brands pass through unchanged. Pure; the caller decides when
/// to persist the result onto the source.
pub fn normalized_brand(brand: &str) -> &str {
    match brand {
        "American Express" => "american_express",
        "Diners Club" => "diners_club",
        "Visa" => "visa",
        other => other,
    }
}
