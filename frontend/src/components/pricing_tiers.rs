use yew::prelude::*;

use crate::config;
use crate::content::PricingTier;

#[derive(Properties, PartialEq)]
pub struct PricingTiersProps {
    pub tiers: &'static [PricingTier],
}

#[function_component(PricingTiers)]
pub fn pricing_tiers(props: &PricingTiersProps) -> Html {
    html! {
        <section class="pricing-tiers">
            <div class="pricing-grid">
                {
                    props.tiers.iter().map(|tier| html! {
                        <div class={classes!("pricing-card", tier.highlighted.then(|| "highlighted"))}>
                            {
                                if tier.highlighted {
                                    html! { <div class="popular-tag">{"Most Popular"}</div> }
                                } else {
                                    html! {}
                                }
                            }
                            <div class="card-header">
                                <h3>{tier.name}</h3>
                                <div class="price">
                                    <span class="amount">{tier.price}</span>
                                    <span class="period">{tier.period}</span>
                                </div>
                                <p class="blurb">{tier.blurb}</p>
                            </div>
                            <ul>
                                { tier.features.iter().map(|f| html! { <li>{*f}</li> }).collect::<Html>() }
                            </ul>
                            <a href={config::BOOKING_URL} target="_blank" rel="noopener noreferrer" class="tier-cta">
                                {"Book a call"}
                            </a>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <p class="payment-note">
                {"Payment terms and bank details: "}
                <a href={config::PAYMENT_INFO_URL} target="_blank" rel="noopener noreferrer">{"payment information"}</a>
            </p>
            <style>
                {r#"
                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .pricing-card {
                    position: relative;
                    padding: 2rem;
                    border-radius: 24px;
                    background: var(--surface);
                    border: 1px solid var(--border);
                    display: flex;
                    flex-direction: column;
                    transition: transform 0.3s ease;
                }
                .pricing-card:hover { transform: translateY(-4px); }
                .pricing-card.highlighted { border-color: var(--accent); }
                .popular-tag {
                    position: absolute;
                    top: -12px;
                    right: 24px;
                    background: var(--accent);
                    color: #fff;
                    padding: 4px 12px;
                    border-radius: 999px;
                    font-size: 0.8rem;
                }
                .price .amount { font-size: 2rem; font-weight: 700; }
                .price .period { margin-left: 0.4rem; color: var(--muted); }
                .pricing-card ul { flex: 1; padding-left: 1.2rem; }
                .tier-cta {
                    margin-top: 1.5rem;
                    text-align: center;
                    padding: 0.8rem;
                    border-radius: 12px;
                    background: var(--accent);
                    color: #fff;
                    text-decoration: none;
                }
                .payment-note { text-align: center; margin-top: 2rem; color: var(--muted); }
                "#}
            </style>
        </section>
    }
}
