use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MediaQueryListEvent};
use yew::prelude::*;

const STORAGE_KEY: &str = "theme";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Theme> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// A saved choice wins over the OS preference.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Theme {
        match stored.and_then(Theme::parse) {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }
}

pub enum ThemeAction {
    Toggle,
    Set(Theme),
    /// OS preference changed
    System(bool),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThemeState {
    pub theme: Theme,
    /// true once the visitor picked a theme themselves
    pub explicit: bool,
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ThemeAction::Toggle => Rc::new(ThemeState {
                theme: self.theme.toggled(),
                explicit: true,
            }),
            ThemeAction::Set(theme) => Rc::new(ThemeState { theme, explicit: true }),
            ThemeAction::System(prefers_dark) if !self.explicit => Rc::new(ThemeState {
                theme: if prefers_dark { Theme::Dark } else { Theme::Light },
                explicit: false,
            }),
            ThemeAction::System(_) => self,
        }
    }
}

pub type ThemeContext = UseReducerHandle<ThemeState>;

fn stored_theme() -> Option<String> {
    window()?.local_storage().ok()??.get_item(STORAGE_KEY).ok()?
}

fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn initial_state() -> ThemeState {
    let stored = stored_theme();
    ThemeState {
        theme: Theme::resolve(stored.as_deref(), prefers_dark()),
        explicit: stored.as_deref().and_then(Theme::parse).is_some(),
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

/// Owns the site-wide theme for the lifetime of the app.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let state = use_reducer(initial_state);

    // Mirror to <html class> and persist explicit choices
    use_effect_with_deps(
        |state: &ThemeState| {
            if let Some(root) = window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let classes = root.class_list();
                let _ = classes.remove_1(state.theme.toggled().as_str());
                let _ = classes.add_1(state.theme.as_str());
            }
            if state.explicit {
                let saved = window()
                    .and_then(|w| w.local_storage().ok().flatten())
                    .map(|s| s.set_item(STORAGE_KEY, state.theme.as_str()).is_ok())
                    .unwrap_or(false);
                if !saved {
                    warn!("Could not persist theme preference");
                }
            }
            || ()
        },
        (*state).clone(),
    );

    // Follow the OS setting until the visitor picks one
    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let media = window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten());
                let listener = media.map(|mq| {
                    let on_change = Closure::wrap(Box::new(move |e: MediaQueryListEvent| {
                        state.dispatch(ThemeAction::System(e.matches()));
                    }) as Box<dyn FnMut(MediaQueryListEvent)>);
                    let _ = mq.add_event_listener_with_callback(
                        "change",
                        on_change.as_ref().unchecked_ref(),
                    );
                    (mq, on_change)
                });
                move || {
                    if let Some((mq, on_change)) = listener {
                        let _ = mq.remove_event_listener_with_callback(
                            "change",
                            on_change.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<ThemeContext> context={state}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> Option<ThemeContext> {
    use_context::<ThemeContext>()
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme();
    let Some(theme) = theme else {
        return html! {};
    };
    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.dispatch(ThemeAction::Toggle))
    };
    let (icon, label) = match theme.theme {
        Theme::Light => ("🌙", "Switch to dark mode"),
        Theme::Dark => ("☀️", "Switch to light mode"),
    };

    html! {
        <button class="theme-toggle" aria-label={label} title={label} {onclick}>
            {icon}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(theme: Theme, explicit: bool) -> Rc<ThemeState> {
        Rc::new(ThemeState { theme, explicit })
    }

    #[test]
    fn stored_value_beats_os_preference() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn falls_back_to_os_preference() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Dark);
    }

    #[test]
    fn parse_round_trips_names() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::parse(" dark\n"), Some(Theme::Dark));
        assert_eq!(Theme::parse("DARK"), None);
    }

    #[test]
    fn toggle_marks_choice_explicit() {
        let next = state(Theme::Light, false).reduce(ThemeAction::Toggle);
        assert_eq!(*next, ThemeState { theme: Theme::Dark, explicit: true });
        let back = next.reduce(ThemeAction::Toggle);
        assert_eq!(back.theme, Theme::Light);
    }

    #[test]
    fn set_overrides_current_theme() {
        let next = state(Theme::Dark, false).reduce(ThemeAction::Set(Theme::Light));
        assert_eq!(*next, ThemeState { theme: Theme::Light, explicit: true });
    }

    #[test]
    fn os_changes_apply_only_without_explicit_choice() {
        let follows = state(Theme::Light, false).reduce(ThemeAction::System(true));
        assert_eq!(follows.theme, Theme::Dark);
        assert!(!follows.explicit);

        let pinned = state(Theme::Light, true).reduce(ThemeAction::System(true));
        assert_eq!(pinned.theme, Theme::Light);
    }
}
