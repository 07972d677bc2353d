use yew::prelude::*;
use log::{debug, info};

mod analytics;
mod config;
mod content;
mod dom;
mod nav;
mod scroll;
mod components {
    pub mod field;
    pub mod gallery;
    pub mod notification;
}
mod pages {
    pub mod booking;
    pub mod faq;
    pub mod home;
}

use analytics::{Analytics, AnalyticsEvent};
use components::notification::NotificationProvider;
use nav::Nav;
use pages::home::Home;

fn track_page_view(analytics: &Analytics) {
    if !analytics.is_enabled() {
        debug!("No analytics collector, skipping page view");
        return;
    }
    let page = dom::window().and_then(|window| {
        let document = window.document().ok_or(dom::DomError::NoDocument)?;
        Ok((document.title(), window.location().href()?))
    });
    match page {
        Ok((title, location)) => analytics.track(AnalyticsEvent::page_view(&title, &location)),
        Err(err) => debug!("Skipping page view: {}", err),
    }
}

#[function_component]
fn App() -> Html {
    let analytics = use_state(Analytics::from_window);

    {
        let analytics = analytics.clone();
        use_effect_with_deps(
            move |_| {
                track_page_view(&analytics);
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<Analytics> context={(*analytics).clone()}>
            <NotificationProvider>
                <Nav />
                <Home />
                <footer class="footer">
                    <div class="container">
                        <p>{format!("© {} {}", chrono::Local::now().format("%Y"), config::BUSINESS_NAME)}</p>
                    </div>
                </footer>
            </NotificationProvider>
        </ContextProvider<Analytics>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::BUSINESS_NAME);
    yew::Renderer::<App>::new().render();
}
