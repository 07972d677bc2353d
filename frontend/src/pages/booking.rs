use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use web_sys::{HtmlFormElement, SubmitEvent};
use yew::prelude::*;

use crate::analytics::{Analytics, AnalyticsEvent};
use crate::components::field::{FieldKind, ValidatedField};
use crate::components::notification::{Notifier, Severity};
use crate::config;
use crate::content::{SERVICES, TIME_SLOTS};
use crate::dom;

pub const FIELD_NAMES: [&str; 8] = [
    "name", "email", "phone", "address", "service", "date", "time", "message",
];

const ADDRESS_PLACEHOLDER: &str = "Not provided";
const MESSAGE_PLACEHOLDER: &str = "None";

/// `YYYY-MM-DD` becomes `DD/MM/YYYY`. Anything that doesn't split into three
/// parts on `-` is passed through as typed.
pub fn format_booking_date(raw: &str) -> String {
    let parts: Vec<&str> = raw.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => format!("{}/{}/{}", day, month, year),
        _ => raw.to_string(),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub service: String,
    pub date: String,
    pub time: String,
    pub message: Option<String>,
}

impl FormSubmission {
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let text = |name: &str| fields.get(name).cloned().unwrap_or_default();
        let optional = |name: &str| {
            fields
                .get(name)
                .filter(|value| !value.is_empty())
                .cloned()
        };

        Self {
            name: text("name"),
            email: text("email"),
            phone: text("phone"),
            address: optional("address"),
            service: text("service"),
            date: text("date"),
            time: text("time"),
            message: optional("message"),
        }
    }

    pub fn subject(&self) -> String {
        format!("Booking Request - {}", self.service)
    }

    pub fn body(&self) -> String {
        format!(
            "Booking Request Details:\n\
             \n\
             Name: {name}\n\
             Email: {email}\n\
             Phone: {phone}\n\
             Address: {address}\n\
             Service: {service}\n\
             Preferred Date: {date}\n\
             Preferred Time: {time}\n\
             Additional Details: {message}\n\
             \n\
             ---\n\
             This booking request was submitted from the website booking form.",
            name = self.name,
            email = self.email,
            phone = self.phone,
            address = self.address.as_deref().unwrap_or(ADDRESS_PLACEHOLDER),
            service = self.service,
            date = format_booking_date(&self.date),
            time = self.time,
            message = self.message.as_deref().unwrap_or(MESSAGE_PLACEHOLDER),
        )
        .trim()
        .to_string()
    }

    pub fn mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&self.subject()),
            urlencoding::encode(&self.body()),
        )
    }

    pub fn analytics_event(&self) -> AnalyticsEvent {
        AnalyticsEvent::new("Booking", "form_submit", &self.service).with_value(1)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PipelineState {
    #[default]
    Idle,
    /// Only held while the submit handler runs, so it is never rendered.
    Submitting,
    LinkComposed,
}

impl PipelineState {
    fn button_label(self) -> &'static str {
        match self {
            PipelineState::Idle => "Request Booking",
            PipelineState::Submitting => "Preparing…",
            PipelineState::LinkComposed => "Opening your email…",
        }
    }
}

/// The one scheduled form reset. Replacing it drops, and so cancels, the
/// previous handle.
pub struct PendingReset<T = Timeout> {
    pending: Option<T>,
}

impl<T> Default for PendingReset<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> PendingReset<T> {
    pub fn replace(&mut self, handle: T) {
        if self.pending.replace(handle).is_some() {
            debug!("Cancelled pending form reset");
        }
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[function_component(BookingForm)]
pub fn booking_form() -> Html {
    let analytics = use_context::<Analytics>().unwrap_or_default();
    let notifier = use_context::<Notifier>();
    let state = use_state_eq(PipelineState::default);
    let form_ref = use_node_ref();
    // Pending reset; replacing it cancels the previous one
    let reset_timer = use_mut_ref(PendingReset::<Timeout>::default);
    let min_date = use_state(|| AttrValue::from(dom::today_iso()));

    let onsubmit = {
        let state = state.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                warn!("Booking form not mounted, ignoring submit");
                return;
            };
            state.set(PipelineState::Submitting);

            let fields = match dom::form_fields(&form, &FIELD_NAMES) {
                Ok(fields) => fields,
                Err(err) => {
                    warn!("Could not read booking form: {}", err);
                    state.set(PipelineState::Idle);
                    return;
                }
            };
            let submission = FormSubmission::from_fields(&fields);
            let link = submission.mailto(config::BOOKING_RECIPIENT);
            info!("Opening mail client for {} booking", submission.service);
            let (message, severity) = match dom::navigate_to(&link) {
                Ok(()) => (config::BOOKING_SUCCESS_MESSAGE.to_string(), Severity::Success),
                Err(err) => {
                    warn!("Could not open mailto link: {}", err);
                    (
                        format!("We couldn't open your email app. Please email {} with your booking details.", config::BOOKING_RECIPIENT),
                        Severity::Info,
                    )
                }
            };
            state.set(PipelineState::LinkComposed);

            analytics.track(submission.analytics_event());
            if let Some(notifier) = &notifier {
                notifier.show(message, severity);
            } else {
                debug!("No notifier in context, skipping success message");
            }

            let state = state.clone();
            let timer = Timeout::new(config::FORM_RESET_DELAY_MS, move || {
                debug!("Resetting booking form");
                form.reset();
                state.set(PipelineState::Idle);
            });
            reset_timer.borrow_mut().replace(timer);
        })
    };

    let service_options: Vec<(AttrValue, AttrValue)> = SERVICES
        .iter()
        .map(|s| (AttrValue::from(s.value), AttrValue::from(s.title)))
        .collect();
    let time_options: Vec<(AttrValue, AttrValue)> = TIME_SLOTS
        .iter()
        .map(|&slot| (AttrValue::from(slot), AttrValue::from(slot)))
        .collect();

    html! {
        <section id="booking" class="booking-section">
            <div class="container">
                <h2 class="section-title">{"Book a Visit"}</h2>
                <p class="section-subtitle">
                    {"Fill in the form and we'll open an email with your booking details ready to send."}
                </p>
                <form id="bookingForm" class="booking-form" ref={form_ref} {onsubmit}>
                    <div class="form-row">
                        <ValidatedField name="name" label="Full Name" kind={FieldKind::Text} required=true />
                        <ValidatedField name="email" label="Email" kind={FieldKind::Email} required=true />
                    </div>
                    <div class="form-row">
                        <ValidatedField name="phone" label="Phone" kind={FieldKind::Tel} required=true placeholder="e.g. 07123 456789" />
                        <ValidatedField name="address" label="Address" kind={FieldKind::Text} />
                    </div>
                    <ValidatedField name="service" label="Service Required" kind={FieldKind::Select} required=true prompt="Select a service" options={service_options} />
                    <div class="form-row">
                        <ValidatedField name="date" label="Preferred Date" kind={FieldKind::Date} required=true min={(*min_date).clone()} />
                        <ValidatedField name="time" label="Preferred Time" kind={FieldKind::Select} required=true prompt="Select a time" options={time_options} />
                    </div>
                    <ValidatedField name="message" label="Additional Details" kind={FieldKind::TextArea} placeholder="Tell us about the job" />
                    <button type="submit" class="btn btn-primary" data-state={format!("{:?}", *state)}>
                        {state.button_label()}
                    </button>
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::rc::Rc;

    struct Handle(Rc<Cell<usize>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn resubmitting_cancels_the_pending_reset() {
        let dropped = Rc::new(Cell::new(0));
        let mut reset = PendingReset::default();
        assert!(!reset.is_pending());

        reset.replace(Handle(dropped.clone()));
        assert_eq!(dropped.get(), 0);

        reset.replace(Handle(dropped.clone()));
        assert_eq!(dropped.get(), 1);
        assert!(reset.is_pending());

        drop(reset);
        assert_eq!(dropped.get(), 2);
    }

    fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn required_only() -> FormSubmission {
        FormSubmission::from_fields(&fields(&[
            ("name", "Jane Doe"),
            ("email", "jane@example.com"),
            ("phone", "07123 456789"),
            ("address", ""),
            ("service", "Boiler Repair"),
            ("date", "2025-03-07"),
            ("time", "Morning (8am - 12pm)"),
            ("message", ""),
        ]))
    }

    fn decoded_body(link: &str) -> String {
        let encoded = link.split("&body=").nth(1).expect("link has a body");
        urlencoding::decode(encoded).expect("body is valid utf-8").into_owned()
    }

    #[test]
    fn iso_date_is_reordered() {
        assert_eq!(format_booking_date("2025-03-07"), "07/03/2025");
    }

    #[test]
    fn malformed_date_passes_through() {
        assert_eq!(format_booking_date("2025"), "2025");
        assert_eq!(format_booking_date("2025-03"), "2025-03");
        assert_eq!(format_booking_date("7 March"), "7 March");
        assert_eq!(format_booking_date(""), "");
    }

    #[test]
    fn body_contains_reformatted_date() {
        let body = required_only().body();
        assert!(body.contains("Preferred Date: 07/03/2025"));
    }

    #[test]
    fn omitted_optional_fields_use_placeholders() {
        let body = required_only().body();
        assert!(body.contains("Address: Not provided"));
        assert!(body.contains("Additional Details: None"));
    }

    #[test]
    fn missing_fields_are_treated_as_empty() {
        let submission = FormSubmission::from_fields(&fields(&[("service", "Other")]));
        assert_eq!(submission.name, "");
        assert_eq!(submission.address, None);
        assert_eq!(submission.message, None);
    }

    #[test]
    fn body_follows_the_template() {
        let mut submission = required_only();
        submission.address = Some("1 High Street".to_string());
        submission.message = Some("Boiler keeps losing pressure".to_string());

        let expected = "Booking Request Details:\n\
                        \n\
                        Name: Jane Doe\n\
                        Email: jane@example.com\n\
                        Phone: 07123 456789\n\
                        Address: 1 High Street\n\
                        Service: Boiler Repair\n\
                        Preferred Date: 07/03/2025\n\
                        Preferred Time: Morning (8am - 12pm)\n\
                        Additional Details: Boiler keeps losing pressure\n\
                        \n\
                        ---\n\
                        This booking request was submitted from the website booking form.";
        assert_eq!(submission.body(), expected);
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let submission = required_only();
        let link = submission.mailto("bookings@example.com");

        assert!(link.starts_with("mailto:bookings@example.com?subject=Booking%20Request%20-%20Boiler%20Repair&body="));
        assert!(!link.contains('\n'));
        assert_eq!(decoded_body(&link), submission.body());
    }

    #[test]
    fn analytics_event_is_labelled_with_service() {
        let event = required_only().analytics_event();
        assert_eq!(event.action, "form_submit");
        assert_eq!(event.properties.event_category.as_deref(), Some("Booking"));
        assert_eq!(event.properties.event_label.as_deref(), Some("Boiler Repair"));
        assert_eq!(event.properties.value, Some(1));
    }
}
