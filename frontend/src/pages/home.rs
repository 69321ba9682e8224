use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::count_up::CountUp;
use crate::components::sections::{BookingCta, Hero};
use crate::content::{HOME_STATS, SERVICES};
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <Hero
                eyebrow="Digital services agency"
                title="Automate the busywork. Ship the product."
                subtitle="AI agents, apps, cloud and data work for growing businesses, priced up front."
            />

            <section class="stats-strip">
                { HOME_STATS.iter().map(|stat| html! { <CountUp stat={stat.clone()} /> }).collect::<Html>() }
            </section>

            <section class="services">
                <h2>{"What we do"}</h2>
                <div class="services-grid">
                    {
                        SERVICES.iter().map(|service| html! {
                            <Link<Route> to={service.route.clone()} classes="service-card">
                                <span class="service-icon">{service.icon}</span>
                                <h3>{service.title}</h3>
                                <p>{service.summary}</p>
                                <span class="service-more">{"See pricing →"}</span>
                            </Link<Route>>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="how-it-works">
                <h2>{"How we work"}</h2>
                <div class="steps-grid">
                    <div class="step">
                        <h3>{"1. Discovery call"}</h3>
                        <p>{"Thirty minutes to map your workflow and where the hours go."}</p>
                    </div>
                    <div class="step">
                        <h3>{"2. Fixed proposal"}</h3>
                        <p>{"A scope, a price and a date. No hourly surprises."}</p>
                    </div>
                    <div class="step">
                        <h3>{"3. Build and hand over"}</h3>
                        <p>{"Weekly demos, then everything transferred to your accounts."}</p>
                    </div>
                </div>
            </section>

            <BookingCta
                heading="Not sure where to start?"
                text="Tell us what eats your week and we'll show you what can be automated."
            />
        </div>
    }
}
