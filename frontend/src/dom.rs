//! Thin helpers around `web_sys` lookups that return typed errors instead of
//! panicking when the page is missing something.

use std::collections::HashMap;

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, EventTarget, FormData, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, Window,
};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Points the current page at `url`. For `mailto:` links this hands off to
/// the user's mail client and leaves the page in place.
pub fn navigate_to(url: &str) -> Result<(), DomError> {
    window()?.location().set_href(url)?;
    Ok(())
}

/// Reads the named entries of `form`. Names absent from the form map to an
/// empty string.
pub fn form_fields(form: &HtmlFormElement, names: &[&str]) -> Result<HashMap<String, String>, DomError> {
    let data = FormData::new_with_form(form)?;
    Ok(names
        .iter()
        .map(|name| {
            let value = data.get(name).as_string().unwrap_or_default();
            (name.to_string(), value)
        })
        .collect())
}

/// Current value of whichever form control an event was fired on.
pub fn control_value(target: Option<EventTarget>) -> Option<String> {
    let target = target?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

/// Today's local date in the `YYYY-MM-DD` shape date inputs use.
pub fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
