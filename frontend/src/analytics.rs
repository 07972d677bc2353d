use std::rc::Rc;

use log::{debug, info, warn};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;

/// Parameters sent along with an event, serialized into the collector's
/// parameter object. Absent fields are left out entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_location: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEvent {
    pub action: String,
    pub properties: EventProperties,
}

impl AnalyticsEvent {
    pub fn new(category: &str, action: &str, label: &str) -> Self {
        Self {
            action: action.to_string(),
            properties: EventProperties {
                event_category: Some(category.to_string()),
                event_label: Some(label.to_string()),
                ..Default::default()
            },
        }
    }

    pub fn with_value(mut self, value: i64) -> Self {
        self.properties.value = Some(value);
        self
    }

    pub fn page_view(title: &str, location: &str) -> Self {
        Self {
            action: "page_view".to_string(),
            properties: EventProperties {
                page_title: Some(title.to_string()),
                page_location: Some(location.to_string()),
                ..Default::default()
            },
        }
    }
}

pub type Collector = Rc<dyn Fn(&str, &EventProperties)>;

/// Best-effort event sink. Holds the collector when the page has one and
/// drops events silently when it doesn't.
#[derive(Clone, Default)]
pub struct Analytics {
    collector: Option<Collector>,
}

impl PartialEq for Analytics {
    fn eq(&self, other: &Self) -> bool {
        match (&self.collector, &other.collector) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl Analytics {
    pub fn disabled() -> Self {
        Self { collector: None }
    }

    pub fn with_collector(collector: impl Fn(&str, &EventProperties) + 'static) -> Self {
        Self { collector: Some(Rc::new(collector)) }
    }

    /// Looks for the global `gtag` function once and wraps it.
    pub fn from_window() -> Self {
        let gtag = web_sys::window()
            .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str("gtag")).ok())
            .and_then(|value| value.dyn_into::<js_sys::Function>().ok());

        match gtag {
            Some(gtag) => {
                info!("Analytics collector found");
                Self::with_collector(move |action, properties| {
                    let params = match serde_wasm_bindgen::to_value(properties) {
                        Ok(params) => params,
                        Err(e) => {
                            warn!("Could not serialize analytics properties: {}", e);
                            return;
                        }
                    };
                    if let Err(e) = gtag.call3(
                        &JsValue::NULL,
                        &JsValue::from_str("event"),
                        &JsValue::from_str(action),
                        &params,
                    ) {
                        warn!("Analytics collector rejected event {}: {:?}", action, e);
                    }
                })
            }
            None => {
                info!("No analytics collector on page, events will be dropped");
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.collector.is_some()
    }

    pub fn emit(&self, category: &str, action: &str, label: &str, value: Option<i64>) {
        let event = AnalyticsEvent::new(category, action, label);
        self.track(match value {
            Some(value) => event.with_value(value),
            None => event,
        });
    }

    pub fn track(&self, event: AnalyticsEvent) {
        match &self.collector {
            Some(collector) => {
                debug!("Tracking {} {:?}", event.action, event.properties.event_label);
                collector(&event.action, &event.properties);
            }
            None => debug!("Dropping {} event, no collector", event.action),
        }
    }
}
