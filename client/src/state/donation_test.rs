use super::*;

#[test]
fn selection_defaults_to_25_monthly() {
    let selection = DonationSelection::default();
    assert_eq!(selection.amount, 25);
    assert_eq!(selection.frequency, Frequency::Monthly);
}

#[test]
fn presets_are_10_25_50_100() {
    let amounts: Vec<u32> = PRESET_AMOUNTS.iter().map(|p| p.amount).collect();
    assert_eq!(amounts, vec![10, 25, 50, 100]);
    assert!(PRESET_AMOUNTS.iter().any(|p| p.amount == DEFAULT_AMOUNT));
}

#[test]
fn select_amount_accepts_only_presets() {
    let mut selection = DonationSelection::default();
    assert!(selection.select_amount(100));
    assert_eq!(selection.amount, 100);
    assert!(!selection.select_amount(37));
    assert_eq!(selection.amount, 100);
}

#[test]
fn exactly_one_amount_is_selected() {
    let mut selection = DonationSelection::default();
    selection.select_amount(50);
    let selected: Vec<u32> = PRESET_AMOUNTS
        .iter()
        .map(|p| p.amount)
        .filter(|a| selection.is_amount_selected(*a))
        .collect();
    assert_eq!(selected, vec![50]);
}

#[test]
fn quarterly_then_yearly_leaves_only_yearly() {
    let mut selection = DonationSelection::default();
    selection.select_frequency(Frequency::Quarterly);
    selection.select_frequency(Frequency::Yearly);
    let selected: Vec<Frequency> = Frequency::ALL
        .into_iter()
        .filter(|f| selection.is_frequency_selected(*f))
        .collect();
    assert_eq!(selected, vec![Frequency::Yearly]);
    assert_eq!(selection.frequency, Frequency::Yearly);
}

#[test]
fn call_to_action_includes_amount_and_frequency() {
    let intent = DonationIntent { amount: 25, frequency: Frequency::Quarterly, payment_method: None };
    assert_eq!(intent.call_to_action(), "Donate $25 quarterly");
}

#[test]
fn call_to_action_names_chosen_method() {
    let intent =
        DonationIntent { amount: 50, frequency: Frequency::Monthly, payment_method: Some(PaymentMethod::Mpesa) };
    assert_eq!(intent.call_to_action(), "Donate $50 monthly via MPESA");
}
