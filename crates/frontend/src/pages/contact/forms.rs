//! Contact, booking and visit forms.
//!
//! Each form validates locally with [`Inquiry::validate`] before sending,
//! then shows the server's receipt or error under the submit button.

use super::api::submit_inquiry;
use crate::layout::global_context::use_site;
use crate::shared::components::ui::{Button, Input, Select, Textarea};
use contracts::inquiry::{
    BookingInquiry, ContactInquiry, FieldError, Inquiry, InquiryReceipt, StayDuration,
    VisitInquiry, VisitSlot,
};
use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug, PartialEq)]
enum FormStatus {
    Idle,
    Sending,
    Sent(InquiryReceipt),
    Failed(String),
}

/// Submission state shared by the three forms
#[derive(Clone, Copy)]
struct FormState {
    status: RwSignal<FormStatus>,
    field_error: RwSignal<Option<FieldError>>,
}

impl FormState {
    fn new() -> Self {
        Self {
            status: RwSignal::new(FormStatus::Idle),
            field_error: RwSignal::new(None),
        }
    }

    /// Error message for `field`, if the last problem was reported there
    fn error_for(&self, field: &'static str) -> Signal<Option<String>> {
        let field_error = self.field_error;
        Signal::derive(move || {
            field_error
                .get()
                .filter(|e| e.field == field)
                .map(|e| e.message)
        })
    }

    fn is_sending(&self) -> Signal<bool> {
        let status = self.status;
        Signal::derive(move || status.get() == FormStatus::Sending)
    }

    /// Validate and send; `on_sent` runs after the server accepted it.
    fn submit(&self, inquiry: Inquiry, on_sent: impl Fn() + 'static) {
        let state = *self;
        if state.status.get_untracked() == FormStatus::Sending {
            return;
        }
        if let Err(e) = inquiry.validate() {
            state.status.set(FormStatus::Idle);
            state.field_error.set(Some(e));
            return;
        }

        state.field_error.set(None);
        state.status.set(FormStatus::Sending);
        spawn_local(async move {
            match submit_inquiry(&inquiry).await {
                Ok(receipt) => {
                    log::info!("Inquiry {} accepted: {}", receipt.kind, receipt.id);
                    on_sent();
                    state.status.set(FormStatus::Sent(receipt));
                }
                Err(e) => {
                    log::warn!("Inquiry rejected: {}", e.message);
                    if let Some(field) = e.field.clone() {
                        state.field_error.set(Some(FieldError::new(field, e.message.clone())));
                    }
                    state.status.set(FormStatus::Failed(e.message));
                }
            }
        });
    }
}

#[component]
fn FormFeedback(state: FormState) -> impl IntoView {
    move || {
        let (intent, text) = match state.status.get() {
            FormStatus::Sent(receipt) => (MessageBarIntent::Success, receipt.message),
            FormStatus::Failed(message) => (MessageBarIntent::Error, message),
            FormStatus::Idle | FormStatus::Sending => return None,
        };
        Some(view! {
            <MessageBar intent=intent>
                <div class="form__feedback">{text}</div>
            </MessageBar>
        })
    }
}

fn setter(signal: RwSignal<String>) -> Callback<String> {
    Callback::new(move |value| signal.set(value))
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let state = FormState::new();
    let sending = state.is_sending();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let inquiry = Inquiry::Contact(ContactInquiry {
            name: name.get_untracked(),
            email: email.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        });
        state.submit(inquiry, move || {
            for field in [name, email, subject, message] {
                field.set(String::new());
            }
        });
    };

    view! {
        <form class="form inquiry-form" novalidate=true on:submit=on_submit>
            <div class="form__row">
                <Input id="contact-name" label="Your Name" value=name on_input=setter(name)
                    placeholder="John Doe" required=true error=state.error_for("name") />
                <Input id="contact-email" label="Email Address" input_type="email" value=email
                    on_input=setter(email) placeholder="john@example.com" required=true
                    error=state.error_for("email") />
            </div>
            <Input id="contact-subject" label="Subject" value=subject on_input=setter(subject)
                placeholder="How can we help?" required=true error=state.error_for("subject") />
            <Textarea id="contact-message" label="Message" value=message on_input=setter(message)
                rows=5 required=true error=state.error_for("message") />
            <Button button_type="submit" size="lg" disabled=sending>
                {move || if sending.get() { "Sending..." } else { "Send Message" }}
            </Button>
            <FormFeedback state=state />
        </form>
    }
}

#[component]
pub fn BookingForm() -> impl IntoView {
    let site = use_site();
    let state = FormState::new();
    let sending = state.is_sending();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let room_type = RwSignal::new(String::new());
    let check_in = RwSignal::new(String::new());
    let duration = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    // Room choices follow the rooms catalog tabs.
    let room_options = Signal::derive(move || {
        site.content.with(|c| {
            c.rooms
                .catalog
                .tabs
                .iter()
                .map(|t| (t.key.clone(), t.label.clone()))
                .collect::<Vec<_>>()
        })
    });
    let duration_options: Vec<(String, String)> = StayDuration::all()
        .into_iter()
        .map(|d| (d.key().to_string(), d.label().to_string()))
        .collect();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let inquiry = Inquiry::Booking(BookingInquiry {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            room_type: room_type.get_untracked(),
            check_in: check_in.get_untracked(),
            duration: StayDuration::from_key(&duration.get_untracked()),
            notes: notes.get_untracked(),
        });
        state.submit(inquiry, move || {
            for field in [name, email, phone, room_type, check_in, duration, notes] {
                field.set(String::new());
            }
        });
    };

    view! {
        <form class="form inquiry-form" novalidate=true on:submit=on_submit>
            <div class="form__row">
                <Input id="booking-name" label="Full Name" value=name on_input=setter(name)
                    required=true error=state.error_for("name") />
                <Input id="booking-email" label="Email Address" input_type="email" value=email
                    on_input=setter(email) required=true error=state.error_for("email") />
            </div>
            <div class="form__row">
                <Input id="booking-phone" label="Phone Number" input_type="tel" value=phone
                    on_input=setter(phone) required=true error=state.error_for("phone") />
                <Select id="booking-room" label="Room Type" value=room_type on_change=setter(room_type)
                    options=room_options placeholder="Select a room type" required=true
                    error=state.error_for("room_type") />
            </div>
            <div class="form__row">
                <Input id="booking-check-in" label="Check-in Date" input_type="date" value=check_in
                    on_input=setter(check_in) required=true error=state.error_for("check_in") />
                <Select id="booking-duration" label="Duration of Stay" value=duration
                    on_change=setter(duration) options=duration_options
                    placeholder="Select duration" required=true error=state.error_for("duration") />
            </div>
            <Textarea id="booking-notes" label="Special Requests" value=notes on_input=setter(notes)
                rows=3 placeholder="Anything we should know?" />
            <Button button_type="submit" size="lg" disabled=sending>
                {move || if sending.get() { "Sending..." } else { "Request Booking" }}
            </Button>
            <FormFeedback state=state />
        </form>
    }
}

#[component]
pub fn VisitForm() -> impl IntoView {
    let state = FormState::new();
    let sending = state.is_sending();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let visit_date = RwSignal::new(String::new());
    let time_slot = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let slot_options: Vec<(String, String)> = VisitSlot::all()
        .into_iter()
        .map(|s| (s.key().to_string(), s.label().to_string()))
        .collect();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let inquiry = Inquiry::Visit(VisitInquiry {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            visit_date: visit_date.get_untracked(),
            time_slot: VisitSlot::from_key(&time_slot.get_untracked()),
            notes: notes.get_untracked(),
        });
        state.submit(inquiry, move || {
            for field in [name, email, phone, visit_date, time_slot, notes] {
                field.set(String::new());
            }
        });
    };

    view! {
        <form class="form inquiry-form" novalidate=true on:submit=on_submit>
            <div class="form__row">
                <Input id="visit-name" label="Full Name" value=name on_input=setter(name)
                    required=true error=state.error_for("name") />
                <Input id="visit-email" label="Email Address" input_type="email" value=email
                    on_input=setter(email) required=true error=state.error_for("email") />
            </div>
            <div class="form__row">
                <Input id="visit-phone" label="Phone Number" input_type="tel" value=phone
                    on_input=setter(phone) required=true error=state.error_for("phone") />
                <Input id="visit-date" label="Preferred Date" input_type="date" value=visit_date
                    on_input=setter(visit_date) required=true error=state.error_for("visit_date") />
            </div>
            <Select id="visit-slot" label="Preferred Time" value=time_slot on_change=setter(time_slot)
                options=slot_options placeholder="Select a time" required=true
                error=state.error_for("time_slot") />
            <Textarea id="visit-notes" label="Additional Notes" value=notes on_input=setter(notes) rows=3 />
            <Button button_type="submit" size="lg" disabled=sending>
                {move || if sending.get() { "Sending..." } else { "Schedule Visit" }}
            </Button>
            <FormFeedback state=state />
        </form>
    }
}
