use yew::prelude::*;

use crate::components::faq::FaqList;
use crate::components::pricing_tiers::PricingTiers;
use crate::components::roi_calculator::RoiCalculator;
use crate::components::sections::{BookingCta, Hero};
use crate::content::{self, WEB_FAQ, WEB_TIERS};

#[function_component(WebPricing)]
pub fn web_pricing() -> Html {
    let model = use_memo(|_| content::web_pricing_model(), ());

    html! {
        <div class="landing-page web-pricing">
            <Hero
                eyebrow="Web Development"
                title="Websites with a price tag, not a quote request."
                subtitle="Pick a package, see what it returns, and launch in weeks."
            />

            <RoiCalculator
                model={(*model).clone()}
                title="Project your website ROI"
                benefit_label="Projected value"
            />

            <PricingTiers tiers={WEB_TIERS} />
            <FaqList entries={WEB_FAQ} />
            <BookingCta
                heading="Ready to launch?"
                text="Book a call and get a fixed quote within 24 hours."
            />
        </div>
    }
}
