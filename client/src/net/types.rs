//! Shared DTOs for the client/collaborator boundary.
//!
//! DESIGN
//! ======
//! Payment details are a tagged union keyed by payment method so a submission
//! can only ever carry the fields of one variant. Everything here serializes
//! as camelCase JSON to match the donation-processing and auth endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

// =============================================================================
// USERS
// =============================================================================

/// Account role as reported by the external auth service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Organization,
    Donor,
}

impl Role {
    /// Interpret a raw role string.
    ///
    /// `"admin"` and `"organization"` are recognized verbatim; any other
    /// non-empty value (whitespace included) is treated as a donor. Only the
    /// empty string has no role.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "" => None,
            "admin" => Some(Self::Admin),
            "organization" => Some(Self::Organization),
            _ => Some(Self::Donor),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Organization => "organization",
            Self::Donor => "donor",
        }
    }
}

/// Signed-in user identity. Owned by the auth service; read-only here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_role")]
    pub role: Option<Role>,
}

fn deserialize_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Role::parse))
}

/// Credentials posted to `/api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Account details posted to `/api/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

// =============================================================================
// DONATIONS
// =============================================================================

/// Donation cadence. Also used for the independent reminder cadence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    pub const ALL: [Self; 3] = [Self::Monthly, Self::Quarterly, Self::Yearly];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Yearly => "Yearly",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == raw)
    }
}

/// Payment method tag selecting which variant's fields are active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    CreditCard,
    Mpesa,
    Paypal,
    /// Has validation rules but is not offered in the method selector.
    Bank,
}

impl PaymentMethod {
    /// Methods listed in the donation form's selector, in display order.
    pub const OFFERED: [Self; 3] = [Self::CreditCard, Self::Mpesa, Self::Paypal];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreditCard => "creditCard",
            Self::Mpesa => "mpesa",
            Self::Paypal => "paypal",
            Self::Bank => "bank",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::Mpesa => "MPESA",
            Self::Paypal => "PayPal",
            Self::Bank => "Bank Transfer",
        }
    }

    /// Parse a selector value. The empty placeholder option maps to `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "creditCard" => Some(Self::CreditCard),
            "mpesa" => Some(Self::Mpesa),
            "paypal" => Some(Self::Paypal),
            "bank" => Some(Self::Bank),
            _ => None,
        }
    }
}

/// Variant-specific payment fields, already validated and trimmed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PaymentDetails {
    CreditCard { card_number: String, expiry_date: String, cvc: String },
    Mpesa { phone_number: String, mpesa_pin: String },
    Paypal { paypal_email: String },
    Bank { bank_account: String, bank_routing: String },
}

impl PaymentDetails {
    pub fn method(&self) -> PaymentMethod {
        match self {
            Self::CreditCard { .. } => PaymentMethod::CreditCard,
            Self::Mpesa { .. } => PaymentMethod::Mpesa,
            Self::Paypal { .. } => PaymentMethod::Paypal,
            Self::Bank { .. } => PaymentMethod::Bank,
        }
    }
}

/// Who the donation is attributed to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Donor {
    Anonymous,
    Named { full_name: String },
}

/// Fully validated payload handed to the donation-processing service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationSubmission {
    /// Stable for one form session so retries after a failure can be deduplicated.
    pub request_id: Uuid,
    pub amount: u32,
    pub frequency: Frequency,
    pub donor: Donor,
    pub email: String,
    pub payment: PaymentDetails,
    pub reminder_frequency: Frequency,
    pub receive_updates: bool,
}

/// Acknowledgement returned by the donation-processing service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationReceipt {
    pub reference: String,
}
