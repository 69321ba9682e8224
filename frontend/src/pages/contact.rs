use gloo_timers::callback::Timeout;
use log::{error, info};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::{mailto_link, ContactError, ContactMessage, FormStatus, STATUS_RESET_MS};

/// Opens the visitor's mail client with the message prefilled.
fn hand_off(link: &str) -> Result<(), ContactError> {
    let window = web_sys::window().ok_or_else(|| ContactError::Handoff(config::CONTACT_EMAIL.to_string()))?;
    window.location().set_href(link).map_err(|e| {
        error!("mailto handoff failed: {:?}", e);
        ContactError::Handoff(config::CONTACT_EMAIL.to_string())
    })
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactMessage::default);
    let status = use_state(|| FormStatus::Idle);
    let validation = use_state(|| None::<String>);

    // Back to idle after a while, whatever the outcome
    {
        let deps = (*status).clone();
        let status = status.clone();
        use_effect_with_deps(
            move |current: &FormStatus| {
                let reset = if *current == FormStatus::Idle {
                    None
                } else {
                    Some(Timeout::new(STATUS_RESET_MS, move || status.set(FormStatus::Idle)))
                };
                move || drop(reset)
            },
            deps,
        );
    }

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.name = input.value();
            form.set(next);
        })
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.email = input.value();
            form.set(next);
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = input.value();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let status = status.clone();
        let validation = validation.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(err) = form.validate() {
                validation.set(Some(err.to_string()));
                return;
            }
            validation.set(None);

            let link = mailto_link(config::CONTACT_EMAIL, &form);
            match hand_off(&link) {
                Ok(()) => {
                    info!("Handed contact message to mail client");
                    status.set(FormStatus::Sent);
                    form.set(ContactMessage::default());
                }
                Err(err) => status.set(FormStatus::Failed(err.to_string())),
            }
        })
    };

    let banner = match &*status {
        FormStatus::Idle => html! {},
        FormStatus::Sent => html! {
            <div class="form-banner success">{"Your mail app should open with the message ready to send."}</div>
        },
        FormStatus::Failed(msg) => html! {
            <div class="form-banner error">{msg.clone()}</div>
        },
    };

    html! {
        <div class="contact-page">
            <section class="contact-hero">
                <h1>{"Let's talk"}</h1>
                <p>
                    {"Tell us about your project, or email "}
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                    {" directly."}
                </p>
            </section>

            <form class="contact-form" onsubmit={on_submit}>
                <label for="contact-name">{"Name"}</label>
                <input id="contact-name" type="text" value={form.name.clone()} oninput={on_name} />

                <label for="contact-email">{"Email *"}</label>
                <input id="contact-email" type="email" required=true value={form.email.clone()} oninput={on_email} />

                <label for="contact-message">{"Message *"}</label>
                <textarea id="contact-message" rows="6" required=true value={form.message.clone()} oninput={on_message} />

                {
                    if let Some(msg) = &*validation {
                        html! { <p class="field-error">{msg.clone()}</p> }
                    } else {
                        html! {}
                    }
                }
                <button type="submit" class="hero-cta">{"Send message"}</button>
                {banner}
            </form>

            <style>
                {r#"
                .contact-page {
                    padding: 8rem 1.5rem 4rem;
                    max-width: 640px;
                    margin: 0 auto;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                }
                .contact-form input,
                .contact-form textarea {
                    padding: 0.8rem 1rem;
                    border-radius: 12px;
                    border: 1px solid var(--border);
                    background: var(--surface);
                    color: inherit;
                    font: inherit;
                }
                .field-error { color: #e5484d; }
                .form-banner {
                    margin-top: 1rem;
                    padding: 0.8rem 1rem;
                    border-radius: 12px;
                }
                .form-banner.success { background: rgba(48, 164, 108, 0.15); }
                .form-banner.error { background: rgba(229, 72, 77, 0.15); }
                "#}
            </style>
        </div>
    }
}
