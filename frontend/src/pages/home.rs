use yew::prelude::*;

use crate::components::gallery::Gallery;
use crate::config;
use crate::content::SERVICES;
use crate::pages::{booking::BookingForm, faq::Faq};
use crate::scroll::AnchorLink;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main>
            <section id="home" class="hero">
                <div class="container hero-content">
                    <h1>{config::BUSINESS_NAME}</h1>
                    <p class="hero-subtitle">
                        {"Reliable plumbing, heating and boiler work from a local, Gas Safe registered engineer."}
                    </p>
                    <div class="hero-actions">
                        <AnchorLink href="#booking" class="btn btn-primary">{"Book a Visit"}</AnchorLink>
                        <AnchorLink href="#services" class="btn btn-secondary">{"Our Services"}</AnchorLink>
                    </div>
                </div>
            </section>

            <section id="services" class="services-section">
                <div class="container">
                    <h2 class="section-title">{"Services"}</h2>
                    <div class="services-grid">
                        { for SERVICES.iter().map(|service| html! {
                            <div class="service-card">
                                <h3>{service.title}</h3>
                                <p>{service.blurb}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <Gallery />
            <Faq />
            <BookingForm />
        </main>
    }
}
