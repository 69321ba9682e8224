use yew::prelude::*;

use crate::components::count_up::CountUp;
use crate::components::faq::FaqList;
use crate::components::pricing_tiers::PricingTiers;
use crate::components::roi_calculator::RoiCalculator;
use crate::components::sections::{BookingCta, Hero};
use crate::content::{self, DATA_FAQ, DATA_STATS, DATA_TIERS};

#[function_component(DataAnalysis)]
pub fn data_analysis() -> Html {
    let model = use_memo(|_| content::data_analysis_model(), ());

    html! {
        <div class="landing-page data-analysis">
            <Hero
                eyebrow="Data Analysis"
                title="Know which leads will close before you call them."
                subtitle="Dashboards, forecasting and lead scoring built on the data you already collect."
            />

            <section class="stats-strip">
                { DATA_STATS.iter().map(|stat| html! { <CountUp stat={stat.clone()} /> }).collect::<Html>() }
            </section>

            <RoiCalculator
                model={(*model).clone()}
                title="What is better data worth to you?"
                benefit_label="Monthly value of insights"
            />

            <PricingTiers tiers={DATA_TIERS} />
            <FaqList entries={DATA_FAQ} />
            <BookingCta
                heading="Send us a spreadsheet"
                text="We'll come back with one chart that changes how you plan next quarter."
            />
        </div>
    }
}
