use yew::prelude::*;

use crate::components::faq::FaqList;
use crate::components::preview_steps::PreviewSteps;
use crate::components::pricing_tiers::PricingTiers;
use crate::components::roi_calculator::RoiCalculator;
use crate::components::sections::{BookingCta, Hero};
use crate::content::{self, AI_FAQ, AI_TIERS, AUTOMATION_PREVIEW_STEPS};

#[function_component(AiAutomation)]
pub fn ai_automation() -> Html {
    let model = use_memo(|_| content::ai_automation_model(), ());

    html! {
        <div class="landing-page ai-automation">
            <Hero
                eyebrow="AI Automation"
                title="Every lead answered in under a minute."
                subtitle="Chat agents that qualify, follow up and book meetings across WhatsApp, Instagram and your website."
            >
                <div class="hero-preview">
                    <PreviewSteps steps={AUTOMATION_PREVIEW_STEPS} />
                </div>
            </Hero>

            <RoiCalculator
                model={(*model).clone()}
                title="What would faster follow-up be worth?"
                benefit_label="Monthly value of automation"
            />

            <PricingTiers tiers={AI_TIERS} />
            <FaqList entries={AI_FAQ} />
            <BookingCta
                heading="See your own workflow automated"
                text="Bring a real conversation from last week and we'll build the flow live on the call."
            />
        </div>
    }
}
