use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    html! {
        <header class="hero">
            <div class="hero-content">
                <span class="eyebrow">{props.eyebrow}</span>
                <h1 class="fade-up">{props.title}</h1>
                <p class="hero-subtitle fade-up delay-1">{props.subtitle}</p>
                <div class="hero-cta-group fade-up delay-2">
                    <a href={config::BOOKING_URL} target="_blank" rel="noopener noreferrer">
                        <button class="hero-cta">{"Book a free call"}</button>
                    </a>
                    <Link<Route> to={Route::Contact} classes="secondary-link">
                        {"Send us a message"}
                    </Link<Route>>
                </div>
            </div>
            { for props.children.iter() }
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingCtaProps {
    pub heading: &'static str,
    pub text: &'static str,
}

#[function_component(BookingCta)]
pub fn booking_cta(props: &BookingCtaProps) -> Html {
    html! {
        <section class="footer-cta">
            <div class="footer-content">
                <h2>{props.heading}</h2>
                <p class="subtitle">{props.text}</p>
                <a href={config::BOOKING_URL} target="_blank" rel="noopener noreferrer">
                    <button class="hero-cta">{"Book your discovery call"}</button>
                </a>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().format("%Y").to_string();
    html! {
        <footer class="site-footer">
            <a class="footer-brand" href={format!("{}/", config::get_site_url())}>{config::AGENCY_NAME}</a>
            <div class="footer-links">
                <Link<Route> to={Route::Home}>{"Home"}</Link<Route>>
                {" | "}
                <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                {" | "}
                <a href={config::PAYMENT_INFO_URL} target="_blank" rel="noopener noreferrer">{"Payment information"}</a>
            </div>
            <p class="copyright">
                {format!("© {} {}. All rights reserved.", year, config::AGENCY_NAME)}
            </p>
        </footer>
    }
}
