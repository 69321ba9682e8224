use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::content::Stat;
use crate::roi::group_thousands;

const FRAME_MS: u32 = 30;

/// Eased value `elapsed_ms` into a count-up from 0 to `target`.
pub fn count_up_value(target: f64, elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 || elapsed_ms >= duration_ms {
        return target;
    }
    let t = (elapsed_ms.max(0.0) / duration_ms).clamp(0.0, 1.0);
    let eased = 1.0 - (1.0 - t).powi(3);
    target * eased
}

fn format_stat(value: f64, target: f64) -> String {
    // keep one decimal for targets like 99.9
    if target.fract() != 0.0 {
        format!("{:.1}", value)
    } else {
        group_thousands(value.round() as i64)
    }
}

fn in_viewport(node: &NodeRef) -> bool {
    let Some(element) = node.cast::<web_sys::Element>() else {
        return false;
    };
    let Some(window) = web_sys::window() else {
        return false;
    };
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let rect = element.get_bounding_client_rect();
    rect.top() < height && rect.bottom() > 0.0
}

#[derive(Properties, PartialEq)]
pub struct CountUpProps {
    pub stat: Stat,
    #[prop_or(1_600.0)]
    pub duration_ms: f64,
}

/// Counts up once, the first time the element scrolls into view.
#[function_component(CountUp)]
pub fn count_up(props: &CountUpProps) -> Html {
    let node = use_node_ref();
    let started = use_state(|| false);
    let value = use_state(|| 0.0_f64);
    let start = use_mut_ref(|| None::<i64>);

    // Visibility trigger
    {
        let already = *started;
        let node = node.clone();
        let started = started.clone();
        use_effect_with_deps(
            move |already: &bool| {
                let mut listener: Option<(web_sys::Window, Closure<dyn FnMut()>)> = None;
                if !*already {
                    if in_viewport(&node) {
                        started.set(true);
                    } else if let Some(window) = web_sys::window() {
                        let check = Closure::wrap(Box::new(move || {
                            if in_viewport(&node) {
                                started.set(true);
                            }
                        }) as Box<dyn FnMut()>);
                        if window
                            .add_event_listener_with_callback("scroll", check.as_ref().unchecked_ref())
                            .is_ok()
                        {
                            listener = Some((window, check));
                        }
                    }
                }
                move || {
                    if let Some((window, check)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            check.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            already,
        );
    }

    // Animation: one frame timeout at a time until the target is reached
    {
        let deps = (*started, *value);
        let value = value.clone();
        let start = start.clone();
        let target = props.stat.target;
        let duration_ms = props.duration_ms;
        use_effect_with_deps(
            move |(running, current): &(bool, f64)| {
                let mut frame = None;
                if *running && *current < target {
                    let t0 = *start
                        .borrow_mut()
                        .get_or_insert_with(|| chrono::Utc::now().timestamp_millis());
                    frame = Some(Timeout::new(FRAME_MS, move || {
                        let elapsed = (chrono::Utc::now().timestamp_millis() - t0) as f64;
                        value.set(count_up_value(target, elapsed, duration_ms));
                    }));
                }
                move || drop(frame)
            },
            deps,
        );
    }

    let stat = &props.stat;
    html! {
        <div class="stat" ref={node}>
            <span class="stat-value">
                {stat.prefix}{format_stat(*value, stat.target)}{stat.suffix}
            </span>
            <span class="stat-label">{stat.label}</span>
        </div>
    }
}
