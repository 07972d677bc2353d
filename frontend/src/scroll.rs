use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::analytics::Analytics;
use crate::config;
use crate::dom::{self, DomError};

/// Returns the selector to scroll to, or `None` for hrefs that should keep
/// their default behaviour (`#` alone, or anything that isn't an in-page
/// anchor).
pub fn anchor_selector(href: &str) -> Option<&str> {
    if href == "#" || !href.starts_with('#') {
        return None;
    }
    Some(href)
}

/// Scroll position that puts an element at `offset_top` just below the
/// fixed navbar.
pub fn scroll_top_for(offset_top: f64) -> f64 {
    offset_top - config::HEADER_CLEARANCE
}

/// Smoothly scrolls to the element `href` points at. Returns `Ok(false)` when
/// there is nothing to scroll to and the click should be left alone.
pub fn smooth_scroll_to(href: &str) -> Result<bool, DomError> {
    let Some(selector) = anchor_selector(href) else {
        return Ok(false);
    };
    let window = dom::window()?;
    let document = window.document().ok_or(DomError::NoDocument)?;

    // An href that isn't a valid selector resolves to nothing.
    let target = match document.query_selector(selector) {
        Ok(Some(element)) => element,
        _ => return Ok(false),
    };
    let Some(target) = target.dyn_ref::<HtmlElement>() else {
        return Ok(false);
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_top_for(target.offset_top() as f64));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(true)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavbarElevation {
    #[default]
    Resting,
    Raised,
}

impl NavbarElevation {
    pub fn from_scroll_y(scroll_y: f64) -> Self {
        if scroll_y > config::NAVBAR_SHADOW_THRESHOLD {
            NavbarElevation::Raised
        } else {
            NavbarElevation::Resting
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            NavbarElevation::Resting => "0 2px 10px rgba(0, 0, 0, 0.1)",
            NavbarElevation::Raised => "0 4px 20px rgba(0, 0, 0, 0.15)",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_follow: Option<Callback<()>>,
    pub children: Children,
}

/// In-page link that scrolls smoothly to its target instead of jumping.
#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let analytics = use_context::<Analytics>().unwrap_or_default();

    let onclick = {
        let href = props.href.clone();
        let on_follow = props.on_follow.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(on_follow) = &on_follow {
                on_follow.emit(());
            }
            match smooth_scroll_to(&href) {
                Ok(true) => {
                    e.prevent_default();
                    analytics.emit("Navigation", "click", &href, None);
                }
                Ok(false) => debug!("No scroll target for {}", href),
                Err(err) => debug!("Skipping smooth scroll to {}: {}", href, err),
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_and_external_links_are_not_scrolled() {
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector("/privacy"), None);
        assert_eq!(anchor_selector("tel:01234567890"), None);
        assert_eq!(anchor_selector("#booking"), Some("#booking"));
    }

    #[test]
    fn target_clears_the_navbar() {
        assert_eq!(scroll_top_for(1200.0), 1120.0);
        assert_eq!(scroll_top_for(0.0), -80.0);
    }

    #[test]
    fn shadow_switches_above_threshold() {
        assert_eq!(NavbarElevation::from_scroll_y(0.0), NavbarElevation::Resting);
        assert_eq!(NavbarElevation::from_scroll_y(50.0), NavbarElevation::Resting);
        assert_eq!(NavbarElevation::from_scroll_y(50.5), NavbarElevation::Raised);
        assert_eq!(
            NavbarElevation::from_scroll_y(400.0).box_shadow(),
            "0 4px 20px rgba(0, 0, 0, 0.15)"
        );
        assert_eq!(
            NavbarElevation::Resting.box_shadow(),
            "0 2px 10px rgba(0, 0, 0, 0.1)"
        );
    }
}
