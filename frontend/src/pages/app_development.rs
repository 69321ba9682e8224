use yew::prelude::*;

use crate::components::faq::FaqList;
use crate::components::pricing_tiers::PricingTiers;
use crate::components::roi_calculator::RoiCalculator;
use crate::components::sections::{BookingCta, Hero};
use crate::components::terminal::Terminal;
use crate::content::{self, APP_FAQ, APP_TIERS, TERMINAL_COMMANDS};

#[function_component(AppDevelopment)]
pub fn app_development() -> Html {
    let model = use_memo(|_| content::app_development_model(), ());

    html! {
        <div class="landing-page app-development">
            <Hero
                eyebrow="App Development"
                title="From idea to app store in weeks."
                subtitle="Web and mobile apps with tests, pipelines and monitoring from day one."
            >
                <div class="hero-terminal">
                    <Terminal commands={TERMINAL_COMMANDS} cwd="~/nexa-client" />
                </div>
            </Hero>

            <RoiCalculator
                model={(*model).clone()}
                title="What does a faster release cycle save?"
                benefit_label="Yearly value"
            />

            <PricingTiers tiers={APP_TIERS} />
            <FaqList entries={APP_FAQ} />
            <BookingCta
                heading="Have a spec or just a sketch?"
                text="Either works. We'll turn it into a scoped plan with a fixed price."
            />
        </div>
    }
}
