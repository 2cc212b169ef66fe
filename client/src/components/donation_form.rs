//! Donation form: donor details, payment-method branch, and submit.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form owns its `DonationFormState` for the lifetime of the component,
//! so navigating away discards it. Submission goes through
//! `net::api::submit_donation`; the result is shown as a dismissible banner
//! and a failed attempt can be retried.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::net::types::{Frequency, PaymentMethod};
use crate::state::donation::DonationIntent;
use crate::state::donation_form::{Banner, DonationFormState};
use crate::util::validation::FieldName;

/// Labeled text input bound to one form field, with its inline error.
#[component]
fn FormField(
    form: RwSignal<DonationFormState>,
    field: FieldName,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let id = field.as_str();
    view! {
        <div class="form-field">
            <label for=id class="form-field__label">{label}</label>
            <input
                id=id
                name=id
                type=input_type
                class="form-field__input"
                placeholder=placeholder
                prop:value=move || form.with(|f| f.value(field).to_owned())
                on:input=move |ev| form.update(|f| f.set_value(field, event_target_value(&ev)))
                on:blur=move |_| form.update(|f| f.touch(field))
            />
            {move || {
                form.with(|f| f.visible_error(field))
                    .map(|msg| view! { <div class="form-field__error">{msg}</div> })
            }}
        </div>
    }
}

#[component]
pub fn DonationForm(amount: Signal<u32>, frequency: Signal<Frequency>) -> impl IntoView {
    let form = RwSignal::new(DonationFormState::default());

    // Memoized so typing in a field does not rebuild the variant inputs.
    let method = Memo::new(move |_| form.with(DonationFormState::payment_method));
    let anonymous = Memo::new(move |_| form.with(DonationFormState::is_anonymous));
    let submitting = Memo::new(move |_| form.with(DonationFormState::is_submitting));

    let intent = move || DonationIntent {
        amount: amount.get(),
        frequency: frequency.get(),
        payment_method: method.get(),
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(DonationFormState::is_submitting) {
            return;
        }
        let attempt = form.try_update(|f| f.submit(amount.get_untracked(), frequency.get_untracked()));
        let Some(Ok(submission)) = attempt else {
            return;
        };
        form.update(DonationFormState::begin_submit);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            log::info!(
                "submitting donation: amount={} frequency={} method={}",
                submission.amount,
                submission.frequency.as_str(),
                submission.payment.method().as_str()
            );
            let result = crate::net::api::submit_donation(&submission).await;
            match &result {
                Ok(receipt) => log::info!("donation accepted: reference={}", receipt.reference),
                Err(e) => log::warn!("donation failed: {e}"),
            }
            form.update(|f| f.finish_submit(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = submission;
    };

    let variant_fields = move || match method.get() {
        Some(PaymentMethod::CreditCard) => view! {
            <FormField form=form field=FieldName::CardNumber label="Card Number" placeholder="1234 5678 9876 5432"/>
            <FormField form=form field=FieldName::ExpiryDate label="Expiry Date (MM/YY)" placeholder="MM/YY"/>
            <FormField form=form field=FieldName::Cvc label="CVC" placeholder="123"/>
        }
        .into_any(),
        Some(PaymentMethod::Mpesa) => view! {
            <FormField
                form=form
                field=FieldName::PhoneNumber
                label="MPESA Phone Number"
                placeholder="e.g., +254700000000"
            />
            <FormField
                form=form
                field=FieldName::MpesaPin
                label="MPESA PIN"
                input_type="password"
                placeholder="Enter MPESA PIN"
            />
        }
        .into_any(),
        Some(PaymentMethod::Paypal) => view! {
            <FormField
                form=form
                field=FieldName::PaypalEmail
                label="PayPal Email"
                input_type="email"
                placeholder="example@domain.com"
            />
        }
        .into_any(),
        Some(PaymentMethod::Bank) => view! {
            <FormField form=form field=FieldName::BankAccount label="Bank Account Number"/>
            <FormField form=form field=FieldName::BankRouting label="Routing Number"/>
        }
        .into_any(),
        None => ().into_any(),
    };

    let banner = move || {
        form.with(DonationFormState::banner).map(|banner| {
            let (class, message) = match banner {
                Banner::Success(msg) => ("banner banner--success", msg),
                Banner::Failure(msg) => ("banner banner--failure", msg),
            };
            view! {
                <div class=class role="status">
                    <span class="banner__message">{message}</span>
                    <button
                        class="banner__dismiss"
                        type="button"
                        aria-label="Dismiss"
                        on:click=move |_| form.update(DonationFormState::dismiss_banner)
                    >
                        "×"
                    </button>
                </div>
            }
        })
    };

    view! {
        <form class="donation-form" on:submit=on_submit novalidate=true>
            <h2 class="donation-form__title">"Complete Your Donation"</h2>
            {banner}
            <fieldset class="donation-form__fields" disabled=move || submitting.get()>
                <Show when=move || !anonymous.get()>
                    <FormField form=form field=FieldName::FullName label="Full Name"/>
                </Show>
                <FormField form=form field=FieldName::Email label="Email Address" input_type="email"/>

                <div class="form-field">
                    <label for="paymentMethod" class="form-field__label">"Payment Method"</label>
                    <select
                        id="paymentMethod"
                        name="paymentMethod"
                        class="form-field__input"
                        prop:value=move || method.get().map_or("", PaymentMethod::as_str)
                        on:change=move |ev| {
                            form.update(|f| f.set_payment_method(PaymentMethod::parse(&event_target_value(&ev))));
                        }
                    >
                        <option value="">"Select Payment Method"</option>
                        {PaymentMethod::OFFERED
                            .into_iter()
                            .map(|m| view! { <option value=m.as_str()>{m.label()}</option> })
                            .collect_view()}
                    </select>
                    {move || {
                        form.with(DonationFormState::payment_method_error)
                            .map(|msg| view! { <div class="form-field__error">{msg}</div> })
                    }}
                </div>

                {variant_fields}

                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || anonymous.get()
                        on:change=move |ev| form.update(|f| f.set_anonymous(event_target_checked(&ev)))
                    />
                    "Donate anonymously"
                </label>

                <div class="form-field">
                    <label for="reminderFrequency" class="form-field__label">"Set Reminder Frequency"</label>
                    <select
                        id="reminderFrequency"
                        class="form-field__input"
                        prop:value=move || form.with(|f| f.reminder_frequency().as_str())
                        on:change=move |ev| {
                            if let Some(freq) = Frequency::parse(&event_target_value(&ev)) {
                                form.update(|f| f.set_reminder_frequency(freq));
                            }
                        }
                    >
                        {Frequency::ALL
                            .into_iter()
                            .map(|freq| view! { <option value=freq.as_str()>{freq.label()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(DonationFormState::receive_updates)
                        on:change=move |ev| form.update(|f| f.set_receive_updates(event_target_checked(&ev)))
                    />
                    "Receive beneficiary stories"
                </label>

                <button class="btn donation-form__submit" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Processing...".to_owned() } else { intent().call_to_action() }}
                </button>
            </fieldset>
        </form>
    }
}
