use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use web_sys::{FocusEvent, InputEvent};
use yew::prelude::*;

use crate::dom;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9\s+\-()]+$").expect("phone pattern compiles")
});

const MIN_PHONE_DIGITS: usize = 10;
const ERROR_BORDER: &str = "border-color: #DC3545;";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Date,
    Select,
    TextArea,
}

impl FieldKind {
    fn input_type(self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Date => "date",
            _ => "text",
        }
    }
}

/// The message shown under a field that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    error: Option<FieldError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<FieldError> {
        self.error
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Digits and the usual separators only, with at least ten digits.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value) && value.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

pub fn validate(kind: FieldKind, required: bool, raw: &str) -> ValidationResult {
    let value = raw.trim();
    let error = if required && value.is_empty() {
        Some(FieldError::Required)
    } else if kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        Some(FieldError::InvalidEmail)
    } else if kind == FieldKind::Tel && !value.is_empty() && !is_valid_phone(value) {
        Some(FieldError::InvalidPhone)
    } else {
        None
    };
    ValidationResult { error }
}

/// Typing only re-checks a field that is already showing an error.
pub fn revalidates_on_input(current: &ValidationResult) -> bool {
    !current.is_valid()
}

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub name: AttrValue,
    pub label: AttrValue,
    pub kind: FieldKind,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub min: Option<AttrValue>,
    /// Empty first option of a select.
    #[prop_or_default]
    pub prompt: Option<AttrValue>,
    /// `(value, label)` pairs for select fields.
    #[prop_or_default]
    pub options: Vec<(AttrValue, AttrValue)>,
}

/// Labelled form control with inline validation feedback.
#[function_component(ValidatedField)]
pub fn validated_field(props: &FieldProps) -> Html {
    let result = use_state_eq(ValidationResult::default);

    let onblur = {
        let result = result.clone();
        let (kind, required, name) = (props.kind, props.required, props.name.clone());
        Callback::from(move |e: FocusEvent| {
            if let Some(value) = dom::control_value(e.target()) {
                let next = validate(kind, required, &value);
                debug!("Validated {} on blur: {:?}", name, next.error());
                result.set(next);
            }
        })
    };

    let oninput = {
        let result = result.clone();
        let (kind, required) = (props.kind, props.required);
        Callback::from(move |e: InputEvent| {
            if !revalidates_on_input(&result) {
                return;
            }
            if let Some(value) = dom::control_value(e.target()) {
                result.set(validate(kind, required, &value));
            }
        })
    };

    let invalid = !result.is_valid();
    let class = classes!(invalid.then_some("error"));
    let style = invalid.then_some(ERROR_BORDER);
    let id = props.name.clone();

    let control = match props.kind {
        FieldKind::Select => html! {
            <select {id} name={props.name.clone()} required={props.required} {class} {style} {onblur} {oninput}>
                <option value="">{props.prompt.as_ref().map_or("Please select".to_string(), |p| p.to_string())}</option>
                { for props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()}>{label.to_string()}</option>
                }) }
            </select>
        },
        FieldKind::TextArea => html! {
            <textarea
                {id}
                name={props.name.clone()}
                rows="4"
                required={props.required}
                placeholder={props.placeholder.clone()}
                {class}
                {style}
                {onblur}
                {oninput}
            />
        },
        kind => html! {
            <input
                {id}
                type={kind.input_type()}
                name={props.name.clone()}
                required={props.required}
                placeholder={props.placeholder.clone()}
                min={props.min.clone()}
                {class}
                {style}
                {onblur}
                {oninput}
            />
        },
    };

    html! {
        <div class="form-group">
            <label for={props.name.clone()}>
                {props.label.to_string()}
                { if props.required { html! { <span class="required">{" *"}</span> } } else { html! {} } }
            </label>
            {control}
            {
                if let Some(message) = result.error_message() {
                    html! { <div class="error-message">{message}</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_required_field_fails_first() {
        assert_eq!(validate(FieldKind::Text, true, "").error(), Some(FieldError::Required));
        assert_eq!(validate(FieldKind::Email, true, "   ").error(), Some(FieldError::Required));
        assert_eq!(
            validate(FieldKind::Tel, true, "").error_message().as_deref(),
            Some("This field is required")
        );
    }

    #[test]
    fn empty_optional_field_passes() {
        assert!(validate(FieldKind::Text, false, "").is_valid());
        assert!(validate(FieldKind::Email, false, "").is_valid());
    }

    #[test]
    fn email_needs_a_dot_after_the_domain() {
        let result = validate(FieldKind::Email, true, "a@b");
        assert_eq!(
            result.error_message().as_deref(),
            Some("Please enter a valid email address")
        );
        assert!(validate(FieldKind::Email, true, "a@b.com").is_valid());
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
    }

    #[test]
    fn phone_needs_ten_digits() {
        let result = validate(FieldKind::Tel, true, "12345");
        assert_eq!(
            result.error_message().as_deref(),
            Some("Please enter a valid phone number")
        );
        assert!(validate(FieldKind::Tel, true, "+44 07123 456789").is_valid());
        assert!(validate(FieldKind::Tel, true, "(01234) 567-890").is_valid());
    }

    #[test]
    fn phone_rejects_letters_even_with_enough_digits() {
        assert!(!is_valid_phone("0123456789 ext"));
    }

    #[test]
    fn only_invalid_fields_revalidate_while_typing() {
        assert!(!revalidates_on_input(&ValidationResult::default()));
        assert!(revalidates_on_input(&validate(FieldKind::Email, true, "nope")));
    }

    #[test]
    fn value_is_trimmed_before_checks() {
        assert!(validate(FieldKind::Email, true, "  a@b.com  ").is_valid());
    }
}
