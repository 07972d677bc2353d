use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};
use yew::prelude::*;

use crate::analytics::Analytics;
use crate::config;
use crate::content::NAV_LINKS;
use crate::dom;
use crate::scroll::{AnchorLink, NavbarElevation};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }

    /// State after a click anywhere on the page. Clicks on the toggle or inside
    /// the menu are handled by those elements themselves.
    pub fn after_document_click(self, inside_nav: bool) -> Self {
        if inside_nav {
            self
        } else {
            MenuState::Closed
        }
    }

    /// Next state for `input`, and whether it was an explicit toggle that
    /// should be reported.
    pub fn apply(self, input: MenuInput) -> (Self, bool) {
        match input {
            MenuInput::Toggle => (self.toggled(), true),
            MenuInput::DocumentClick { inside_nav } => (self.after_document_click(inside_nav), false),
            MenuInput::LinkFollowed => (MenuState::Closed, false),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuInput {
    Toggle,
    DocumentClick { inside_nav: bool },
    LinkFollowed,
}

/// Applies `input` and reports explicit toggles. Programmatic closes stay
/// silent.
pub fn update_menu(current: MenuState, input: MenuInput, analytics: &Analytics) -> MenuState {
    let (next, report) = current.apply(input);
    if report {
        analytics.emit("Navigation", "click", "Mobile Menu Toggle", None);
    }
    next
}

fn contains(node_ref: &NodeRef, target: &Node) -> bool {
    node_ref
        .cast::<Node>()
        .map_or(false, |node| node.contains(Some(target)))
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let analytics = use_context::<Analytics>().unwrap_or_default();
    let menu = use_state_eq(MenuState::default);
    let elevation = use_state_eq(NavbarElevation::default);
    let toggle_ref = use_node_ref();
    let menu_ref = use_node_ref();
    // Mirror for the document listener, which outlives individual renders
    let current_menu = use_mut_ref(MenuState::default);
    *current_menu.borrow_mut() = *menu;

    // Navbar shadow follows the scroll position
    {
        let elevation = elevation.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match dom::window() {
                    Ok(window) => {
                        let callback = Closure::<dyn Fn()>::new({
                            let elevation = elevation.clone();
                            move || {
                                if let Some(Ok(scroll_y)) = web_sys::window().map(|w| w.scroll_y()) {
                                    elevation.set(NavbarElevation::from_scroll_y(scroll_y));
                                }
                            }
                        });
                        if let Ok(scroll_y) = window.scroll_y() {
                            elevation.set(NavbarElevation::from_scroll_y(scroll_y));
                        }
                        if let Err(e) = window.add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            warn!("Could not add scroll listener: {:?}", e);
                        }
                        Box::new(move || {
                            if let Err(e) = window.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            ) {
                                warn!("Could not remove scroll listener: {:?}", e);
                            }
                        })
                    }
                    Err(err) => {
                        debug!("Navbar scroll effect disabled: {}", err);
                        Box::new(|| ())
                    }
                };
                destructor
            },
            (),
        );
    }

    // Any click outside the toggle and the menu closes the menu
    {
        let menu = menu.clone();
        let current_menu = current_menu.clone();
        let click_analytics = analytics.clone();
        let toggle_ref = toggle_ref.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match dom::document() {
                    Ok(document) => {
                        let callback = Closure::<dyn Fn(MouseEvent)>::new(move |e: MouseEvent| {
                            let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                                return;
                            };
                            let inside = contains(&toggle_ref, &target) || contains(&menu_ref, &target);
                            let current = *current_menu.borrow();
                            let next = update_menu(
                                current,
                                MenuInput::DocumentClick { inside_nav: inside },
                                &click_analytics,
                            );
                            if next != current {
                                debug!("Mobile menu closed by outside click");
                                menu.set(next);
                            }
                        });
                        if let Err(e) = document.add_event_listener_with_callback(
                            "click",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            warn!("Could not add click listener: {:?}", e);
                        }
                        Box::new(move || {
                            if let Err(e) = document.remove_event_listener_with_callback(
                                "click",
                                callback.as_ref().unchecked_ref(),
                            ) {
                                warn!("Could not remove click listener: {:?}", e);
                            }
                        })
                    }
                    Err(err) => {
                        debug!("Outside-click close disabled: {}", err);
                        Box::new(|| ())
                    }
                };
                destructor
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        let analytics = analytics.clone();
        Callback::from(move |_: MouseEvent| {
            let next = update_menu(*menu, MenuInput::Toggle, &analytics);
            debug!("Mobile menu {:?} -> {:?}", *menu, next);
            menu.set(next);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.set(update_menu(*menu, MenuInput::LinkFollowed, &analytics)))
    };

    let active = menu.is_open().then_some("active");

    html! {
        <nav id="navbar" class="navbar" style={format!("box-shadow: {};", elevation.box_shadow())}>
            <div class="nav-container">
                <AnchorLink href="#home" class="logo">
                    {config::BUSINESS_NAME}
                </AnchorLink>

                <button
                    id="mobileMenuToggle"
                    ref={toggle_ref}
                    class={classes!("mobile-menu-toggle", active)}
                    aria-label="Toggle navigation"
                    aria-expanded={menu.is_open().to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <ul id="navMenu" ref={menu_ref} class={classes!("nav-menu", active)}>
                    { for NAV_LINKS.iter().map(|link| html! {
                        <li>
                            <AnchorLink href={link.href} class="nav-link" on_follow={close_menu.clone()}>
                                {link.label}
                            </AnchorLink>
                        </li>
                    }) }
                </ul>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::EventProperties;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn menu_starts_closed_and_toggles() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.toggled(), MenuState::Open);
        assert_eq!(menu.toggled().toggled(), MenuState::Closed);
    }

    #[test]
    fn outside_click_closes_open_menu() {
        assert_eq!(MenuState::Open.after_document_click(false), MenuState::Closed);
        assert_eq!(MenuState::Closed.after_document_click(false), MenuState::Closed);
    }

    #[test]
    fn click_inside_nav_leaves_menu_alone() {
        assert_eq!(MenuState::Open.after_document_click(true), MenuState::Open);
        assert_eq!(MenuState::Closed.after_document_click(true), MenuState::Closed);
    }

    #[test]
    fn only_explicit_toggles_are_reported() {
        let seen = Rc::new(RefCell::new(Vec::<(String, EventProperties)>::new()));
        let analytics = {
            let seen = seen.clone();
            Analytics::with_collector(move |action, properties| {
                seen.borrow_mut().push((action.to_string(), properties.clone()));
            })
        };

        let menu = update_menu(MenuState::Closed, MenuInput::Toggle, &analytics);
        assert_eq!(menu, MenuState::Open);
        let menu = update_menu(menu, MenuInput::DocumentClick { inside_nav: false }, &analytics);
        assert_eq!(menu, MenuState::Closed);

        let menu = MenuState::Open;
        let menu = update_menu(menu, MenuInput::DocumentClick { inside_nav: true }, &analytics);
        assert_eq!(menu, MenuState::Open);
        let menu = update_menu(menu, MenuInput::LinkFollowed, &analytics);
        assert_eq!(menu, MenuState::Closed);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        let (action, properties) = &seen[0];
        assert_eq!(action, "click");
        assert_eq!(properties.event_category.as_deref(), Some("Navigation"));
        assert_eq!(properties.event_label.as_deref(), Some("Mobile Menu Toggle"));
    }
}
