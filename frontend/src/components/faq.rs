use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::FaqEntry;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    // Deep links like /web-pricing#web-hosting open the matching answer
    let is_open = use_state(|| {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .map(|hash| hash == format!("#{}", props.entry.id))
            .unwrap_or(false)
    });

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div id={props.entry.id} class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.entry.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.entry.answer}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub entries: &'static [FaqEntry],
    #[prop_or("Frequently Asked Questions".to_string())]
    pub title: String,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    html! {
        <section class="faq-section">
            <h2>{props.title.clone()}</h2>
            {
                props.entries.iter().map(|entry| html! {
                    <FaqItem key={entry.id} entry={entry.clone()} />
                }).collect::<Html>()
            }
            <style>
                {r#"
                .faq-section {
                    max-width: 800px;
                    margin: 4rem auto;
                    padding: 0 1.5rem;
                }
                .faq-item {
                    border-bottom: 1px solid var(--border);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    color: inherit;
                    font-size: 1.05rem;
                    cursor: pointer;
                    text-align: left;
                }
                .toggle-icon { font-size: 1.4rem; color: var(--accent); }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.3s ease;
                    color: var(--muted);
                }
                .faq-item.open .faq-answer {
                    max-height: 400px;
                    padding-bottom: 1rem;
                }
                "#}
            </style>
        </section>
    }
}
