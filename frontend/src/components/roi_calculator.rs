use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::roi::{format_currency, RoiModel, SliderSpec};

#[derive(Properties, PartialEq)]
pub struct RoiCalculatorProps {
    pub model: RoiModel,
    #[prop_or("Estimate your return".to_string())]
    pub title: String,
    #[prop_or("Projected value".to_string())]
    pub benefit_label: String,
}

#[function_component(RoiCalculator)]
pub fn roi_calculator(props: &RoiCalculatorProps) -> Html {
    let values = use_state(|| props.model.defaults());
    let projection = props.model.project(&values);

    let slider = |spec: &SliderSpec| {
        let oninput = {
            let values = values.clone();
            let model = props.model.clone();
            let id = spec.id;
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut next = (*values).clone();
                model.set(&mut next, id, input.value_as_number());
                values.set(next);
            })
        };
        let current = values.get(spec.id).copied().unwrap_or(spec.default);

        html! {
            <div class="roi-slider">
                <div class="roi-slider-header">
                    <label for={spec.id}>{spec.label}</label>
                    <span class="roi-slider-value">{spec.format(current)}</span>
                </div>
                <input
                    id={spec.id}
                    type="range"
                    min={spec.min.to_string()}
                    max={spec.max.to_string()}
                    step={spec.step.to_string()}
                    value={current.to_string()}
                    {oninput}
                />
                <div class="roi-slider-range">
                    <span>{spec.format(spec.min)}</span>
                    <span>{spec.format(spec.max)}</span>
                </div>
            </div>
        }
    };

    html! {
        <section class="roi-calculator">
            <h2>{props.title.clone()}</h2>
            <div class="roi-grid">
                <div class="roi-inputs">
                    { props.model.inputs.iter().map(slider).collect::<Html>() }
                </div>
                <div class="roi-results">
                    {
                        if props.model.basis.is_some() {
                            html! {
                                <>
                                    <div class="roi-row">
                                        <span>{"Manual revenue / month"}</span>
                                        <span>{format_currency(projection.manual_revenue)}</span>
                                    </div>
                                    <div class="roi-row">
                                        <span>{"With automation"}</span>
                                        <span>{format_currency(projection.automated_revenue)}</span>
                                    </div>
                                    <div class="roi-row highlight">
                                        <span>{"Extra revenue"}</span>
                                        <span>{format_currency(projection.revenue_lift)}</span>
                                    </div>
                                </>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <div class="roi-row">
                        <span>{"Time & operations value"}</span>
                        <span>{format_currency(projection.weighted_value)}</span>
                    </div>
                    <div class="roi-row total">
                        <span>{props.benefit_label.clone()}</span>
                        <span>{format_currency(projection.total_benefit)}</span>
                    </div>
                    <div class="roi-row">
                        <span>{"Investment"}</span>
                        <span>{format_currency(props.model.baseline_cost)}</span>
                    </div>
                    <div class="roi-figure">
                        <span class="roi-percent">{format!("{}%", projection.display_roi())}</span>
                        <span class="roi-caption">{"projected ROI"}</span>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .roi-calculator {
                    max-width: 1100px;
                    margin: 4rem auto;
                    padding: 2.5rem;
                    border-radius: 24px;
                    background: var(--surface);
                    border: 1px solid var(--border);
                }
                .roi-calculator h2 { margin-bottom: 2rem; }
                .roi-grid {
                    display: grid;
                    grid-template-columns: 1.2fr 1fr;
                    gap: 2.5rem;
                }
                .roi-slider { margin-bottom: 1.75rem; }
                .roi-slider-header {
                    display: flex;
                    justify-content: space-between;
                    margin-bottom: 0.5rem;
                }
                .roi-slider-value { font-weight: 600; color: var(--accent); }
                .roi-slider input[type=range] { width: 100%; accent-color: var(--accent); }
                .roi-slider-range {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.8rem;
                    color: var(--muted);
                }
                .roi-row {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.6rem 0;
                    border-bottom: 1px solid var(--border);
                }
                .roi-row.highlight span:last-child { color: var(--accent); }
                .roi-row.total { font-weight: 700; font-size: 1.1rem; }
                .roi-figure {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    margin-top: 1.5rem;
                }
                .roi-percent { font-size: 3rem; font-weight: 800; color: var(--accent); }
                .roi-caption { color: var(--muted); }
                @media (max-width: 850px) {
                    .roi-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
