use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod carousel;
mod components {
    pub mod back_to_top;
    pub mod branch_coverflow;
    pub mod franchise_carousel;
    pub mod hero_slider;
    pub mod reveal;
    pub mod stats;
    pub mod use_carousel;
    pub mod viewport;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
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
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = Closure::wrap(Box::new(move || {
                is_scrolled.set(components::viewport::scroll_y() > config::NAV_SCROLLED_THRESHOLD);
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = &window {
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

    let open = (*menu_open).then(|| "open");

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 20;
                        transition: background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(13, 13, 13, 0.92);
                        backdrop-filter: blur(8px);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 1rem 1.5rem;
                    }
                    .nav-logo {
                        color: #fff;
                        font-weight: 700;
                        font-size: 1.4rem;
                        text-decoration: none;
                    }
                    .nav-links {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .nav-links a {
                        color: #ddd;
                        text-decoration: none;
                    }
                    .nav-toggle {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .nav-toggle span {
                        display: block;
                        width: 24px;
                        height: 2px;
                        margin: 5px 0;
                        background: #fff;
                        transition: transform 0.3s ease, opacity 0.3s ease;
                    }
                    @media (max-width: 768px) {
                        .nav-toggle { display: block; }
                        .nav-toggle.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
                        .nav-toggle.open span:nth-child(2) { opacity: 0; }
                        .nav-toggle.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
                        .nav-links {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1.5rem;
                            background: rgba(13, 13, 13, 0.96);
                        }
                        .nav-links.open { display: flex; }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Crumb Group"}
                </Link<Route>>

                <button class={classes!("nav-toggle", open)} aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={classes!("nav-links", open)}>
                    <a href="#stats" onclick={close_menu.clone()}>{"About"}</a>
                    <a href="#franchises" onclick={close_menu.clone()}>{"Brands"}</a>
                    <a href="#branches" onclick={close_menu.clone()}>{"Branches"}</a>
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
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
