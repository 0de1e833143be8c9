use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::{window, MouseEvent};

mod config;
mod wizard {
    pub mod stage;
    pub mod state;
    pub mod surface;
    pub mod navigator;
}
mod dom {
    pub mod listener;
    pub mod registry;
    pub mod surface;
    pub mod wiring;
}
mod effects {
    pub mod banner;
    pub mod hero_glow;
    pub mod navbar;
    pub mod parallax;
    pub mod reveal;
    pub mod ripple;
    pub mod smooth_scroll;
    pub mod status;
}
mod pages {
    pub mod landing;
    pub mod setup;
}

use pages::{
    landing::Landing,
    setup::Setup,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/setup")]
    Setup,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Setup => {
            info!("Rendering Setup page");
            html! { <Setup /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <section class="not-found">
                    <h1>{"404"}</h1>
                    <Link<Route> to={Route::Home} classes="btn-primary">
                        {"Back home"}
                    </Link<Route>>
                </section>
            }
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
            let listener = window().and_then(|window| {
                effects::navbar::watch(&window, move |scrolled| is_scrolled.set(scrolled))
            });

            move || drop(listener)
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
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"deepsense"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class} onclick={close_menu}>
                    <a href="/#features" class="nav-link">{"Features"}</a>
                    <a href="/#status" class="nav-link">{"Status"}</a>
                    <Link<Route> to={Route::Setup} classes="nav-cta">
                        {"Setup"}
                    </Link<Route>>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::get_log_level()).expect("error initializing log");

    effects::banner::print();
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
