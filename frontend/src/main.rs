use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod contact;
mod content;
mod roi;
mod theme;
mod components {
    pub mod count_up;
    pub mod faq;
    pub mod preview_steps;
    pub mod pricing_tiers;
    pub mod roi_calculator;
    pub mod sections;
    pub mod terminal;
}
mod pages {
    pub mod home;
    pub mod ai_automation;
    pub mod app_development;
    pub mod cloud_solutions;
    pub mod data_analysis;
    pub mod web_pricing;
    pub mod contact;
    pub mod not_found;
}

use components::sections::Footer;
use pages::{
    home::Home,
    ai_automation::AiAutomation,
    app_development::AppDevelopment,
    cloud_solutions::CloudSolutions,
    data_analysis::DataAnalysis,
    web_pricing::WebPricing,
    contact::Contact,
    not_found::NotFound,
};
use theme::{ThemeProvider, ThemeToggle};


#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/ai-automation")]
    AiAutomation,
    #[at("/app-development")]
    AppDevelopment,
    #[at("/cloud-solutions")]
    CloudSolutions,
    #[at("/data-analysis")]
    DataAnalysis,
    #[at("/web-pricing")]
    WebPricing,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::AiAutomation => {
            info!("Rendering AI Automation page");
            html! { <AiAutomation /> }
        },
        Route::AppDevelopment => {
            info!("Rendering App Development page");
            html! { <AppDevelopment /> }
        },
        Route::CloudSolutions => {
            info!("Rendering Cloud Solutions page");
            html! { <CloudSolutions /> }
        },
        Route::DataAnalysis => {
            info!("Rendering Data Analysis page");
            html! { <DataAnalysis /> }
        },
        Route::WebPricing => {
            info!("Rendering Web Pricing page");
            html! { <WebPricing /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.map(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 40.0);
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    let links = [
        (Route::AiAutomation, "AI Automation"),
        (Route::AppDevelopment, "Apps"),
        (Route::CloudSolutions, "Cloud"),
        (Route::DataAnalysis, "Data"),
        (Route::WebPricing, "Web Pricing"),
    ];

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::AGENCY_NAME}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        links.into_iter().map(|(route, label)| html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={route} classes="nav-link">
                                    {label}
                                </Link<Route>>
                            </div>
                        }).collect::<Html>()
                    }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-contact-button">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                    <ThemeToggle />
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <ThemeProvider>
            <BrowserRouter>
                <Nav />
                <main>
                    <Switch<Route> render={switch} />
                </main>
                <Footer />
            </BrowserRouter>
        </ThemeProvider>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
