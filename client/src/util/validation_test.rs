use super::*;

fn ctx(payment_method: Option<PaymentMethod>, anonymous: bool) -> RuleContext {
    RuleContext { payment_method, anonymous }
}

fn check(field: FieldName, method: Option<PaymentMethod>, value: &str) -> Option<&'static str> {
    rule_for(field, ctx(method, false)).check(value)
}

// =============================================================
// Required field sets per payment method
// =============================================================

#[test]
fn no_method_requires_only_name_and_email() {
    assert_eq!(required_fields(ctx(None, false)), vec![FieldName::FullName, FieldName::Email]);
}

#[test]
fn credit_card_requires_card_fields() {
    assert_eq!(
        required_fields(ctx(Some(PaymentMethod::CreditCard), false)),
        vec![
            FieldName::FullName,
            FieldName::Email,
            FieldName::CardNumber,
            FieldName::ExpiryDate,
            FieldName::Cvc,
        ]
    );
}

#[test]
fn mpesa_requires_phone_and_pin() {
    assert_eq!(
        required_fields(ctx(Some(PaymentMethod::Mpesa), false)),
        vec![FieldName::FullName, FieldName::Email, FieldName::PhoneNumber, FieldName::MpesaPin]
    );
}

#[test]
fn paypal_requires_paypal_email() {
    assert_eq!(
        required_fields(ctx(Some(PaymentMethod::Paypal), false)),
        vec![FieldName::FullName, FieldName::Email, FieldName::PaypalEmail]
    );
}

#[test]
fn bank_requires_account_and_routing() {
    assert_eq!(
        required_fields(ctx(Some(PaymentMethod::Bank), false)),
        vec![FieldName::FullName, FieldName::Email, FieldName::BankAccount, FieldName::BankRouting]
    );
}

#[test]
fn payment_field_sets_are_disjoint() {
    let methods = [PaymentMethod::CreditCard, PaymentMethod::Mpesa, PaymentMethod::Paypal, PaymentMethod::Bank];
    for (i, a) in methods.iter().enumerate() {
        for b in &methods[i + 1..] {
            for field in payment_fields(*a) {
                assert!(!payment_fields(*b).contains(field), "{field:?} shared by {a:?} and {b:?}");
            }
        }
    }
}

#[test]
fn anonymous_drops_full_name_requirement() {
    let rule = rule_for(FieldName::FullName, ctx(None, true));
    assert!(!rule.is_active());
    assert_eq!(rule.check(""), None);
    assert_eq!(required_fields(ctx(Some(PaymentMethod::Paypal), true)), vec![FieldName::Email, FieldName::PaypalEmail]);
}

#[test]
fn inactive_payment_fields_never_error() {
    assert_eq!(check(FieldName::PhoneNumber, Some(PaymentMethod::Paypal), "garbage"), None);
    assert_eq!(check(FieldName::MpesaPin, None, ""), None);
    assert_eq!(check(FieldName::CardNumber, Some(PaymentMethod::Mpesa), "x"), None);
}

// =============================================================
// Messages
// =============================================================

#[test]
fn blank_full_name_uses_specific_message() {
    assert_eq!(check(FieldName::FullName, None, "  "), Some(MSG_FULL_NAME_REQUIRED));
}

#[test]
fn blank_required_fields_report_required_before_format() {
    assert_eq!(check(FieldName::Email, None, ""), Some(MSG_REQUIRED));
    assert_eq!(check(FieldName::MpesaPin, Some(PaymentMethod::Mpesa), ""), Some(MSG_REQUIRED));
    assert_eq!(check(FieldName::PaypalEmail, Some(PaymentMethod::Paypal), "   "), Some(MSG_REQUIRED));
}

// =============================================================
// Formats
// =============================================================

#[test]
fn email_requires_at_structured_address() {
    for bad in ["plainaddress", "missing-at.example.com", "a@b", "@example.com", "a b@c.com"] {
        assert_eq!(check(FieldName::Email, None, bad), Some(MSG_INVALID_EMAIL), "{bad:?}");
    }
    for good in ["donor@example.org", "first.last+tag@sub.domain.io", "  padded@example.com  "] {
        assert_eq!(check(FieldName::Email, None, good), None, "{good:?}");
    }
}

#[test]
fn mpesa_pin_accepts_exactly_four_digits() {
    let mpesa = Some(PaymentMethod::Mpesa);
    assert_eq!(check(FieldName::MpesaPin, mpesa, "1234"), None);
    assert_eq!(check(FieldName::MpesaPin, mpesa, "12a4"), Some(MSG_INVALID_PIN));
    assert_eq!(check(FieldName::MpesaPin, mpesa, "123"), Some(MSG_INVALID_PIN));
    assert_eq!(check(FieldName::MpesaPin, mpesa, "12345"), Some(MSG_INVALID_PIN));
}

#[test]
fn mpesa_pin_rejects_non_ascii_digits() {
    assert_eq!(check(FieldName::MpesaPin, Some(PaymentMethod::Mpesa), "١٢٣٤"), Some(MSG_INVALID_PIN));
}

#[test]
fn phone_number_accepts_ten_to_twelve_digits_with_optional_plus() {
    let mpesa = Some(PaymentMethod::Mpesa);
    assert_eq!(check(FieldName::PhoneNumber, mpesa, "+254700000000"), None);
    assert_eq!(check(FieldName::PhoneNumber, mpesa, "0700000000"), None);
    assert_eq!(check(FieldName::PhoneNumber, mpesa, "12345"), Some(MSG_INVALID_PHONE));
    assert_eq!(check(FieldName::PhoneNumber, mpesa, "+2547000000001"), Some(MSG_INVALID_PHONE));
    assert_eq!(check(FieldName::PhoneNumber, mpesa, "++254700000000"), Some(MSG_INVALID_PHONE));
}

#[test]
fn paypal_email_uses_email_format() {
    let paypal = Some(PaymentMethod::Paypal);
    assert_eq!(check(FieldName::PaypalEmail, paypal, "example@domain.com"), None);
    assert_eq!(check(FieldName::PaypalEmail, paypal, "example"), Some(MSG_INVALID_EMAIL));
}

#[test]
fn card_fields_check_their_shapes() {
    let card = Some(PaymentMethod::CreditCard);
    assert_eq!(check(FieldName::CardNumber, card, "1234 5678 9876 5432"), None);
    assert_eq!(check(FieldName::CardNumber, card, "4242424242424242"), None);
    assert_eq!(check(FieldName::CardNumber, card, "1234"), Some(MSG_INVALID_CARD));
    assert_eq!(check(FieldName::ExpiryDate, card, "09/27"), None);
    assert_eq!(check(FieldName::ExpiryDate, card, "13/27"), Some(MSG_INVALID_EXPIRY));
    assert_eq!(check(FieldName::Cvc, card, "123"), None);
    assert_eq!(check(FieldName::Cvc, card, "12"), Some(MSG_INVALID_CVC));
}

#[test]
fn card_number_accepts_twelve_to_nineteen_digits() {
    let card = Some(PaymentMethod::CreditCard);
    assert_eq!(check(FieldName::CardNumber, card, "123456789012"), None);
    assert_eq!(check(FieldName::CardNumber, card, "1234567890123456789"), None);
    assert_eq!(check(FieldName::CardNumber, card, "1234 5678 9012 3456 789"), None);
    assert_eq!(check(FieldName::CardNumber, card, "12345678901"), Some(MSG_INVALID_CARD));
    assert_eq!(check(FieldName::CardNumber, card, "12345678901234567890"), Some(MSG_INVALID_CARD));
}

#[test]
fn card_number_rejects_double_spaces_and_letters() {
    let card = Some(PaymentMethod::CreditCard);
    assert_eq!(check(FieldName::CardNumber, card, "1234  5678 9876 5432"), Some(MSG_INVALID_CARD));
    assert_eq!(check(FieldName::CardNumber, card, "1234-5678-9876-5432"), Some(MSG_INVALID_CARD));
    assert_eq!(check(FieldName::CardNumber, card, "4242 4242 4242 424x"), Some(MSG_INVALID_CARD));
}

#[test]
fn expiry_month_is_bounded() {
    let card = Some(PaymentMethod::CreditCard);
    assert_eq!(check(FieldName::ExpiryDate, card, "01/27"), None);
    assert_eq!(check(FieldName::ExpiryDate, card, "12/27"), None);
    assert_eq!(check(FieldName::ExpiryDate, card, "00/27"), Some(MSG_INVALID_EXPIRY));
    assert_eq!(check(FieldName::ExpiryDate, card, "9/27"), Some(MSG_INVALID_EXPIRY));
    assert_eq!(check(FieldName::ExpiryDate, card, "09/2027"), Some(MSG_INVALID_EXPIRY));
}

#[test]
fn cvc_accepts_three_or_four_digits() {
    let card = Some(PaymentMethod::CreditCard);
    assert_eq!(check(FieldName::Cvc, card, "1234"), None);
    assert_eq!(check(FieldName::Cvc, card, "12345"), Some(MSG_INVALID_CVC));
    assert_eq!(check(FieldName::Cvc, card, "12a"), Some(MSG_INVALID_CVC));
}

#[test]
fn bank_fields_have_no_format() {
    let bank = Some(PaymentMethod::Bank);
    assert_eq!(check(FieldName::BankAccount, bank, "anything"), None);
    assert_eq!(check(FieldName::BankRouting, bank, ""), Some(MSG_REQUIRED));
}

// =============================================================
// validate_all
// =============================================================

#[test]
fn validate_all_reports_only_active_failures() {
    let values = |field: FieldName| match field {
        FieldName::FullName => "Ada",
        FieldName::Email => "ada@example.com",
        FieldName::PhoneNumber => "12345",
        FieldName::CardNumber => "nope",
        _ => "",
    };
    let errors = validate_all(values, ctx(Some(PaymentMethod::Mpesa), false));
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get(&FieldName::PhoneNumber), Some(&MSG_INVALID_PHONE));
    assert_eq!(errors.get(&FieldName::MpesaPin), Some(&MSG_REQUIRED));
}

#[test]
fn is_valid_email_trims_input() {
    assert!(is_valid_email(" a@b.co "));
    assert!(!is_valid_email("a@b"));
}
