use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_parse_recognizes_admin_and_organization() {
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse("organization"), Some(Role::Organization));
}

#[test]
fn role_parse_treats_other_values_as_donor() {
    assert_eq!(Role::parse("donor"), Some(Role::Donor));
    assert_eq!(Role::parse("volunteer"), Some(Role::Donor));
}

#[test]
fn role_parse_empty_has_no_role() {
    assert_eq!(Role::parse(""), None);
}

#[test]
fn role_parse_does_not_trim() {
    assert_eq!(Role::parse("   "), Some(Role::Donor));
    assert_eq!(Role::parse(" admin"), Some(Role::Donor));
    assert_eq!(Role::parse("organization "), Some(Role::Donor));
}

#[test]
fn user_deserializes_whitespace_role_as_donor() {
    let user: User = serde_json::from_str(r#"{"email":"a@b.co","role":"  "}"#).unwrap();
    assert_eq!(user.role, Some(Role::Donor));
}

#[test]
fn user_deserializes_missing_and_null_role_as_none() {
    let missing: User = serde_json::from_str(r#"{"email":"a@b.co"}"#).unwrap();
    assert_eq!(missing.role, None);

    let null: User = serde_json::from_str(r#"{"email":"a@b.co","role":null}"#).unwrap();
    assert_eq!(null.role, None);

    let empty: User = serde_json::from_str(r#"{"email":"a@b.co","role":""}"#).unwrap();
    assert_eq!(empty.role, None);
}

#[test]
fn user_deserializes_unknown_role_as_donor() {
    let user: User = serde_json::from_str(r#"{"email":"a@b.co","role":"supporter"}"#).unwrap();
    assert_eq!(user.role, Some(Role::Donor));
}

#[test]
fn user_serializes_role_lowercase() {
    let user = User { email: "a@b.co".to_owned(), role: Some(Role::Organization) };
    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json, serde_json::json!({ "email": "a@b.co", "role": "organization" }));
}

// =============================================================
// Frequency / PaymentMethod
// =============================================================

#[test]
fn frequency_default_is_monthly() {
    assert_eq!(Frequency::default(), Frequency::Monthly);
}

#[test]
fn frequency_parse_matches_as_str() {
    for freq in Frequency::ALL {
        assert_eq!(Frequency::parse(freq.as_str()), Some(freq));
    }
    assert_eq!(Frequency::parse("weekly"), None);
}

#[test]
fn payment_method_parse_placeholder_is_none() {
    assert_eq!(PaymentMethod::parse(""), None);
    assert_eq!(PaymentMethod::parse("creditCard"), Some(PaymentMethod::CreditCard));
    assert_eq!(PaymentMethod::parse("mpesa"), Some(PaymentMethod::Mpesa));
    assert_eq!(PaymentMethod::parse("paypal"), Some(PaymentMethod::Paypal));
}

#[test]
fn payment_method_selector_omits_bank() {
    assert!(!PaymentMethod::OFFERED.contains(&PaymentMethod::Bank));
    assert_eq!(PaymentMethod::OFFERED.len(), 3);
}

// =============================================================
// DonationSubmission wire shape
// =============================================================

#[test]
fn submission_serializes_tagged_payment_and_donor() {
    let submission = DonationSubmission {
        request_id: Uuid::nil(),
        amount: 25,
        frequency: Frequency::Quarterly,
        donor: Donor::Named { full_name: "Wangari Maathai".to_owned() },
        email: "w@example.org".to_owned(),
        payment: PaymentDetails::Mpesa {
            phone_number: "+254700000000".to_owned(),
            mpesa_pin: "1234".to_owned(),
        },
        reminder_frequency: Frequency::Yearly,
        receive_updates: true,
    };
    let json = serde_json::to_value(&submission).unwrap();
    assert_eq!(json["amount"], 25);
    assert_eq!(json["frequency"], "quarterly");
    assert_eq!(json["reminderFrequency"], "yearly");
    assert_eq!(json["receiveUpdates"], true);
    assert_eq!(json["donor"], serde_json::json!({ "kind": "named", "fullName": "Wangari Maathai" }));
    assert_eq!(
        json["payment"],
        serde_json::json!({ "method": "mpesa", "phoneNumber": "+254700000000", "mpesaPin": "1234" })
    );
}

#[test]
fn anonymous_donor_serializes_kind_only() {
    let json = serde_json::to_value(Donor::Anonymous).unwrap();
    assert_eq!(json, serde_json::json!({ "kind": "anonymous" }));
}

#[test]
fn payment_details_report_their_method() {
    let card = PaymentDetails::CreditCard {
        card_number: "4242424242424242".to_owned(),
        expiry_date: "12/30".to_owned(),
        cvc: "123".to_owned(),
    };
    assert_eq!(card.method(), PaymentMethod::CreditCard);
    let paypal = PaymentDetails::Paypal { paypal_email: "p@x.io".to_owned() };
    assert_eq!(paypal.method(), PaymentMethod::Paypal);
}
