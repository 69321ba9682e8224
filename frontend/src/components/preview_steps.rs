use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

pub const ROTATE_MS: u32 = 2_500;

pub fn next_step(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

#[derive(Properties, PartialEq)]
pub struct PreviewStepsProps {
    pub steps: &'static [&'static str],
}

/// Workflow preview that highlights one step at a time.
#[function_component(PreviewSteps)]
pub fn preview_steps(props: &PreviewStepsProps) -> Html {
    let active = use_state(|| 0usize);

    {
        let active = active.clone();
        let len = props.steps.len();
        use_effect_with_deps(
            move |_| {
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                let interval_handle_clone = interval_handle.clone();
                if len > 1 {
                    let mut current = *active;
                    let interval = Interval::new(ROTATE_MS, move || {
                        current = next_step(current, len);
                        active.set(current);
                    });
                    *interval_handle.borrow_mut() = Some(interval);
                }

                move || {
                    if let Some(interval) = interval_handle_clone.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            len,
        );
    }

    html! {
        <ol class="preview-steps">
            {
                props.steps.iter().enumerate().map(|(i, step)| {
                    let class = classes!("preview-step", (i == *active).then(|| "active"));
                    html! {
                        <li {class}>
                            <span class="step-index">{(i + 1).to_string()}</span>
                            <span class="step-label">{*step}</span>
                        </li>
                    }
                }).collect::<Html>()
            }
        </ol>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotates_and_wraps() {
        assert_eq!(next_step(0, 4), 1);
        assert_eq!(next_step(3, 4), 0);
        assert_eq!(next_step(0, 1), 0);
        assert_eq!(next_step(5, 0), 0);
    }
}
