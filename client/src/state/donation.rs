//! Donation page selection state (preset amount + frequency).

#[cfg(test)]
#[path = "donation_test.rs"]
mod donation_test;

use crate::net::types::{Frequency, PaymentMethod};

/// A fixed donation tier and what it pays for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresetAmount {
    pub amount: u32,
    pub description: &'static str,
}

pub const PRESET_AMOUNTS: [PresetAmount; 4] = [
    PresetAmount { amount: 10, description: "Plants 20 trees in affected areas" },
    PresetAmount { amount: 25, description: "Protects 1 acre of rainforest" },
    PresetAmount { amount: 50, description: "Funds water conservation projects" },
    PresetAmount { amount: 100, description: "Supports wildlife preservation" },
];

pub const DEFAULT_AMOUNT: u32 = 25;

/// Selected tier and cadence, passed down to the donation form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DonationSelection {
    pub amount: u32,
    pub frequency: Frequency,
}

impl Default for DonationSelection {
    fn default() -> Self {
        Self { amount: DEFAULT_AMOUNT, frequency: Frequency::Monthly }
    }
}

impl DonationSelection {
    /// Select a preset tier. Amounts outside the preset table are ignored.
    pub fn select_amount(&mut self, amount: u32) -> bool {
        if PRESET_AMOUNTS.iter().any(|p| p.amount == amount) {
            self.amount = amount;
            true
        } else {
            false
        }
    }

    pub fn select_frequency(&mut self, frequency: Frequency) {
        self.frequency = frequency;
    }

    pub fn is_amount_selected(&self, amount: u32) -> bool {
        self.amount == amount
    }

    pub fn is_frequency_selected(&self, frequency: Frequency) -> bool {
        self.frequency == frequency
    }
}

/// Unsubmitted amount/frequency/method triple shown on the submit button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DonationIntent {
    pub amount: u32,
    pub frequency: Frequency,
    pub payment_method: Option<PaymentMethod>,
}

impl DonationIntent {
    /// Submit button label, naming the method once one is chosen.
    pub fn call_to_action(&self) -> String {
        match self.payment_method {
            Some(method) => format!("Donate ${} {} via {}", self.amount, self.frequency.as_str(), method.label()),
            None => format!("Donate ${} {}", self.amount, self.frequency.as_str()),
        }
    }
}
