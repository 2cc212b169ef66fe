//! Donation form session state.
//!
//! DESIGN
//! ======
//! Each field keeps a value/touched/error triple. Errors are recomputed from
//! the full value snapshot on every change, so switching payment method or
//! toggling anonymity can never leave an error behind for a field that is no
//! longer active. Touched flags for deactivated fields are cleared as well so
//! switching back starts clean. Edits are ignored while a submission is in
//! flight, since a successful result resets every field.

#[cfg(test)]
#[path = "donation_form_test.rs"]
mod donation_form_test;

use uuid::Uuid;

use crate::net::types::{DonationReceipt, DonationSubmission, Donor, Frequency, PaymentDetails, PaymentMethod};
use crate::util::validation::{FieldErrors, FieldName, RuleContext, rule_for, validate_all};

pub const MSG_SELECT_PAYMENT_METHOD: &str = "Select a payment method";

/// Value, touched flag, and current error for one input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub touched: bool,
    pub error: Option<&'static str>,
}

/// Lifecycle of the submission boundary call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(DonationReceipt),
    Failed(String),
}

/// Dismissible banner derived from the submit status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Banner {
    Success(String),
    Failure(String),
}

/// Why a submit attempt did not produce a payload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitBlocked {
    pub field_errors: FieldErrors,
    pub missing_payment_method: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DonationFormState {
    fields: [FieldState; FieldName::COUNT],
    payment_method: Option<PaymentMethod>,
    anonymous: bool,
    reminder_frequency: Frequency,
    receive_updates: bool,
    submit_attempted: bool,
    request_id: Uuid,
    status: SubmitStatus,
}

impl Default for DonationFormState {
    fn default() -> Self {
        let mut state = Self {
            fields: std::array::from_fn(|_| FieldState::default()),
            payment_method: None,
            anonymous: false,
            reminder_frequency: Frequency::Monthly,
            receive_updates: false,
            submit_attempted: false,
            request_id: Uuid::new_v4(),
            status: SubmitStatus::Idle,
        };
        state.revalidate();
        state
    }
}

impl DonationFormState {
    pub fn rule_context(&self) -> RuleContext {
        RuleContext { payment_method: self.payment_method, anonymous: self.anonymous }
    }

    pub fn field(&self, field: FieldName) -> &FieldState {
        &self.fields[field.index()]
    }

    pub fn value(&self, field: FieldName) -> &str {
        &self.field(field).value
    }

    pub fn error(&self, field: FieldName) -> Option<&'static str> {
        self.field(field).error
    }

    /// Error to render under the input: only once the field has been touched.
    pub fn visible_error(&self, field: FieldName) -> Option<&'static str> {
        let state = self.field(field);
        if state.touched { state.error } else { None }
    }

    pub fn errors(&self) -> FieldErrors {
        self.entries()
            .filter_map(|(field, state)| state.error.map(|msg| (field, msg)))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|f| f.error.is_none())
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    pub fn reminder_frequency(&self) -> Frequency {
        self.reminder_frequency
    }

    pub fn receive_updates(&self) -> bool {
        self.receive_updates
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, SubmitStatus::Submitting)
    }

    pub fn payment_method_error(&self) -> Option<&'static str> {
        (self.submit_attempted && self.payment_method.is_none()).then_some(MSG_SELECT_PAYMENT_METHOD)
    }

    pub fn set_value(&mut self, field: FieldName, value: String) {
        if self.is_submitting() {
            return;
        }
        self.fields[field.index()].value = value;
        self.revalidate();
    }

    pub fn touch(&mut self, field: FieldName) {
        self.fields[field.index()].touched = true;
    }

    pub fn set_payment_method(&mut self, method: Option<PaymentMethod>) {
        if self.payment_method == method || self.is_submitting() {
            return;
        }
        self.payment_method = method;
        self.untouch_inactive();
        self.revalidate();
    }

    pub fn set_anonymous(&mut self, anonymous: bool) {
        if self.is_submitting() {
            return;
        }
        self.anonymous = anonymous;
        self.untouch_inactive();
        self.revalidate();
    }

    pub fn set_reminder_frequency(&mut self, frequency: Frequency) {
        if self.is_submitting() {
            return;
        }
        self.reminder_frequency = frequency;
    }

    pub fn set_receive_updates(&mut self, receive_updates: bool) {
        if self.is_submitting() {
            return;
        }
        self.receive_updates = receive_updates;
    }

    /// Validate everything and, if clean, assemble the submission payload.
    ///
    /// Touches every active field so their errors become visible.
    ///
    /// # Errors
    ///
    /// Returns the field errors (and whether no payment method was chosen)
    /// when the form is not ready to submit.
    pub fn submit(&mut self, amount: u32, frequency: Frequency) -> Result<DonationSubmission, SubmitBlocked> {
        self.submit_attempted = true;
        self.revalidate();
        let ctx = self.rule_context();
        for (field, state) in FieldName::ALL.into_iter().zip(&mut self.fields) {
            if rule_for(field, ctx).is_active() {
                state.touched = true;
            }
        }

        let field_errors = self.errors();
        let Some(method) = self.payment_method else {
            return Err(SubmitBlocked { field_errors, missing_payment_method: true });
        };
        if !field_errors.is_empty() {
            return Err(SubmitBlocked { field_errors, missing_payment_method: false });
        }

        let donor = if self.anonymous {
            Donor::Anonymous
        } else {
            Donor::Named { full_name: self.trimmed(FieldName::FullName) }
        };
        Ok(DonationSubmission {
            request_id: self.request_id,
            amount,
            frequency,
            donor,
            email: self.trimmed(FieldName::Email),
            payment: self.payment_details(method),
            reminder_frequency: self.reminder_frequency,
            receive_updates: self.receive_updates,
        })
    }

    pub fn begin_submit(&mut self) {
        self.status = SubmitStatus::Submitting;
    }

    /// Record the boundary result. Success ends the form session.
    pub fn finish_submit(&mut self, result: Result<DonationReceipt, String>) {
        match result {
            Ok(receipt) => {
                *self = Self { status: SubmitStatus::Succeeded(receipt), ..Self::default() };
            }
            Err(message) => self.status = SubmitStatus::Failed(message),
        }
    }

    pub fn banner(&self) -> Option<Banner> {
        match &self.status {
            SubmitStatus::Succeeded(receipt) => Some(Banner::Success(format!(
                "Thank you! Your donation was received (reference {}).",
                receipt.reference
            ))),
            SubmitStatus::Failed(message) => Some(Banner::Failure(format!("Donation failed: {message}"))),
            SubmitStatus::Idle | SubmitStatus::Submitting => None,
        }
    }

    pub fn dismiss_banner(&mut self) {
        if matches!(self.status, SubmitStatus::Succeeded(_) | SubmitStatus::Failed(_)) {
            self.status = SubmitStatus::Idle;
        }
    }

    fn trimmed(&self, field: FieldName) -> String {
        self.value(field).trim().to_owned()
    }

    fn payment_details(&self, method: PaymentMethod) -> PaymentDetails {
        match method {
            PaymentMethod::CreditCard => PaymentDetails::CreditCard {
                card_number: self.value(FieldName::CardNumber).split_whitespace().collect(),
                expiry_date: self.trimmed(FieldName::ExpiryDate),
                cvc: self.trimmed(FieldName::Cvc),
            },
            PaymentMethod::Mpesa => PaymentDetails::Mpesa {
                phone_number: self.trimmed(FieldName::PhoneNumber),
                mpesa_pin: self.trimmed(FieldName::MpesaPin),
            },
            PaymentMethod::Paypal => PaymentDetails::Paypal { paypal_email: self.trimmed(FieldName::PaypalEmail) },
            PaymentMethod::Bank => PaymentDetails::Bank {
                bank_account: self.trimmed(FieldName::BankAccount),
                bank_routing: self.trimmed(FieldName::BankRouting),
            },
        }
    }

    fn untouch_inactive(&mut self) {
        let ctx = self.rule_context();
        for (field, state) in FieldName::ALL.into_iter().zip(&mut self.fields) {
            if !rule_for(field, ctx).is_active() {
                state.touched = false;
            }
        }
    }

    fn revalidate(&mut self) {
        let errors = validate_all(|field| self.value(field), self.rule_context());
        for (field, state) in FieldName::ALL.into_iter().zip(&mut self.fields) {
            state.error = errors.get(&field).copied();
        }
    }

    fn entries(&self) -> impl Iterator<Item = (FieldName, &FieldState)> {
        FieldName::ALL.into_iter().zip(&self.fields)
    }
}
