use yew::prelude::*;

use crate::components::count_up::CountUp;
use crate::components::faq::FaqList;
use crate::components::pricing_tiers::PricingTiers;
use crate::components::roi_calculator::RoiCalculator;
use crate::components::sections::{BookingCta, Hero};
use crate::content::{self, CLOUD_FAQ, CLOUD_STATS, CLOUD_TIERS};

#[function_component(CloudSolutions)]
pub fn cloud_solutions() -> Html {
    let model = use_memo(|_| content::cloud_solutions_model(), ());

    html! {
        <div class="landing-page cloud-solutions">
            <Hero
                eyebrow="Cloud Solutions"
                title="Smaller bills. Fewer 3am pages."
                subtitle="Migrations, cost tuning and managed infrastructure on AWS, Google Cloud and Azure."
            />

            <section class="stats-strip">
                { CLOUD_STATS.iter().map(|stat| html! { <CountUp stat={stat.clone()} /> }).collect::<Html>() }
            </section>

            <RoiCalculator
                model={(*model).clone()}
                title="Estimate your cloud savings"
                benefit_label="Yearly savings"
            />

            <PricingTiers tiers={CLOUD_TIERS} />
            <FaqList entries={CLOUD_FAQ} />
            <BookingCta
                heading="Get a free bill review"
                text="Share last month's invoice and we'll point out the three biggest savings."
            />
        </div>
    }
}
