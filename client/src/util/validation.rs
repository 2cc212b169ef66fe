//! Donation form validation rules.
//!
//! DESIGN
//! ======
//! Which fields are required depends on the selected payment method and the
//! anonymity toggle. `rule_for` is the single mapping from that context to a
//! per-field rule; everything else (error computation, payload assembly)
//! derives from it so the active field set cannot drift between the two.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::PaymentMethod;

pub const MSG_REQUIRED: &str = "Required";
pub const MSG_FULL_NAME_REQUIRED: &str = "Full name is required";
pub const MSG_INVALID_EMAIL: &str = "Invalid email";
pub const MSG_INVALID_PHONE: &str = "Invalid phone number";
pub const MSG_INVALID_PIN: &str = "MPESA PIN must be 4 digits";
pub const MSG_INVALID_CARD: &str = "Invalid card number";
pub const MSG_INVALID_EXPIRY: &str = "Expiry must be MM/YY";
pub const MSG_INVALID_CVC: &str = "CVC must be 3 or 4 digits";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email pattern"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,12}$").expect("invalid phone pattern"));
static MPESA_PIN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{4}$").expect("invalid pin pattern"));
static CARD_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9] ?){11,18}[0-9]$").expect("invalid card pattern"));
static EXPIRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:0[1-9]|1[0-2])/[0-9]{2}$").expect("invalid expiry pattern"));
static CVC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{3,4}$").expect("invalid cvc pattern"));

/// Every text input the donation form knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FullName,
    Email,
    CardNumber,
    ExpiryDate,
    Cvc,
    PhoneNumber,
    MpesaPin,
    BankAccount,
    BankRouting,
    PaypalEmail,
}

impl FieldName {
    pub const COUNT: usize = 10;

    pub const ALL: [Self; Self::COUNT] = [
        Self::FullName,
        Self::Email,
        Self::CardNumber,
        Self::ExpiryDate,
        Self::Cvc,
        Self::PhoneNumber,
        Self::MpesaPin,
        Self::BankAccount,
        Self::BankRouting,
        Self::PaypalEmail,
    ];

    /// Position in `ALL`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// DOM id / form key for the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::CardNumber => "cardNumber",
            Self::ExpiryDate => "expiryDate",
            Self::Cvc => "cvc",
            Self::PhoneNumber => "phoneNumber",
            Self::MpesaPin => "mpesaPin",
            Self::BankAccount => "bankAccount",
            Self::BankRouting => "bankRouting",
            Self::PaypalEmail => "paypalEmail",
        }
    }
}

/// Fields owned by a payment variant.
pub fn payment_fields(method: PaymentMethod) -> &'static [FieldName] {
    match method {
        PaymentMethod::CreditCard => &[FieldName::CardNumber, FieldName::ExpiryDate, FieldName::Cvc],
        PaymentMethod::Mpesa => &[FieldName::PhoneNumber, FieldName::MpesaPin],
        PaymentMethod::Paypal => &[FieldName::PaypalEmail],
        PaymentMethod::Bank => &[FieldName::BankAccount, FieldName::BankRouting],
    }
}

/// Inputs that change which rules apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RuleContext {
    pub payment_method: Option<PaymentMethod>,
    pub anonymous: bool,
}

/// Shape constraint checked once a required value is present.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Email,
    PhoneNumber,
    MpesaPin,
    CardNumber,
    ExpiryDate,
    Cvc,
}

impl Format {
    pub fn matches(self, value: &str) -> bool {
        match self {
            Self::Email => EMAIL.is_match(value),
            Self::PhoneNumber => PHONE.is_match(value),
            Self::MpesaPin => MPESA_PIN.is_match(value),
            Self::CardNumber => CARD_NUMBER.is_match(value),
            Self::ExpiryDate => EXPIRY.is_match(value),
            Self::Cvc => CVC.is_match(value),
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Email => MSG_INVALID_EMAIL,
            Self::PhoneNumber => MSG_INVALID_PHONE,
            Self::MpesaPin => MSG_INVALID_PIN,
            Self::CardNumber => MSG_INVALID_CARD,
            Self::ExpiryDate => MSG_INVALID_EXPIRY,
            Self::Cvc => MSG_INVALID_CVC,
        }
    }
}

/// Requirement and format for one field under one context.
///
/// `required` carries the message shown when the value is blank; `None`
/// means the field is inactive and never produces an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub required: Option<&'static str>,
    pub format: Option<Format>,
}

impl FieldRule {
    pub const INACTIVE: Self = Self { required: None, format: None };

    const fn required(format: Option<Format>) -> Self {
        Self { required: Some(MSG_REQUIRED), format }
    }

    pub fn is_active(self) -> bool {
        self.required.is_some()
    }

    /// Check a value against this rule, returning the first failure.
    pub fn check(self, value: &str) -> Option<&'static str> {
        let message = self.required?;
        let value = value.trim();
        if value.is_empty() {
            return Some(message);
        }
        match self.format {
            Some(format) if !format.matches(value) => Some(format.message()),
            _ => None,
        }
    }
}

/// Map the current context to the rule for `field`.
pub fn rule_for(field: FieldName, ctx: RuleContext) -> FieldRule {
    match field {
        FieldName::FullName if ctx.anonymous => FieldRule::INACTIVE,
        FieldName::FullName => FieldRule { required: Some(MSG_FULL_NAME_REQUIRED), format: None },
        FieldName::Email => FieldRule::required(Some(Format::Email)),
        _ => {
            let Some(method) = ctx.payment_method else {
                return FieldRule::INACTIVE;
            };
            if !payment_fields(method).contains(&field) {
                return FieldRule::INACTIVE;
            }
            FieldRule::required(match field {
                FieldName::CardNumber => Some(Format::CardNumber),
                FieldName::ExpiryDate => Some(Format::ExpiryDate),
                FieldName::Cvc => Some(Format::Cvc),
                FieldName::PhoneNumber => Some(Format::PhoneNumber),
                FieldName::MpesaPin => Some(Format::MpesaPin),
                FieldName::PaypalEmail => Some(Format::Email),
                _ => None,
            })
        }
    }
}

/// Fields that must be filled in under `ctx`, in declaration order.
pub fn required_fields(ctx: RuleContext) -> Vec<FieldName> {
    FieldName::ALL
        .into_iter()
        .filter(|field| rule_for(*field, ctx).is_active())
        .collect()
}

/// Validation failures keyed by field.
pub type FieldErrors = BTreeMap<FieldName, &'static str>;

/// Validate every field, looking values up through `value_of`.
pub fn validate_all<'a, F>(value_of: F, ctx: RuleContext) -> FieldErrors
where
    F: Fn(FieldName) -> &'a str,
{
    FieldName::ALL
        .into_iter()
        .filter_map(|field| rule_for(field, ctx).check(value_of(field)).map(|msg| (field, msg)))
        .collect()
}

pub fn is_valid_email(value: &str) -> bool {
    Format::Email.matches(value.trim())
}
