use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod i18n;
mod story {
    pub mod scroll;
    pub mod viewer;
    pub mod zones;
}
mod content {
    pub mod blog;
    pub mod social;
}
mod components {
    pub mod newsletter;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod blog_post;
    pub mod home;
    pub mod philosophy;
    pub mod social;
    pub mod termsprivacy;
}

use i18n::{strings, Locale};
use pages::{
    about::About,
    blog::Blog,
    blog_post::BlogPostPage,
    home::Home,
    philosophy::Philosophy,
    social::Social,
    termsprivacy::{PrivacyPolicy, TermsOfUse},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/philosophy")]
    Philosophy,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/social")]
    Social,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Philosophy => {
            info!("Rendering Philosophy page");
            html! { <Philosophy /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        }
        Route::BlogPost { slug } => {
            info!("Rendering blog post {}", slug);
            html! { <BlogPostPage {slug} /> }
        }
        Route::Social => {
            info!("Rendering Social page");
            html! { <Social /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfUse /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let locale = use_context::<Locale>().unwrap_or_default();
    let text = strings(locale);
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 80);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
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
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Daily Sunrise"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">
                            { text.nav_about }
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Philosophy} classes="nav-link">
                            { text.nav_philosophy }
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Blog} classes="nav-link">
                            { text.nav_blog }
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Social} classes="nav-link">
                            { text.nav_social }
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let locale = use_context::<Locale>().unwrap_or_default();
    let text = strings(locale);

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <span class="footer-brand">{"Daily Sunrise"}</span>
                <span class="footer-tagline">{ text.footer_tagline }</span>
                <div class="footer-links">
                    <Link<Route> to={Route::Terms} classes="footer-link">{"Terms"}</Link<Route>>
                    <Link<Route> to={Route::Privacy} classes="footer-link">{"Privacy"}</Link<Route>>
                </div>
            </div>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    // Resolved once at mount from the browser locale, read-only afterwards
    let locale = use_state(Locale::detect);

    html! {
        <ContextProvider<Locale> context={*locale}>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
                <Footer />
            </BrowserRouter>
            <style>
                {r#"
                * {
                    margin: 0;
                    padding: 0;
                    box-sizing: border-box;
                }
                body {
                    font-family: Georgia, 'Times New Roman', serif;
                    background: #fdf8f1;
                }
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 10;
                    padding: 1rem 0;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(253, 248, 241, 0.95);
                    box-shadow: 0 1px 8px rgba(45, 40, 34, 0.08);
                }
                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.3rem;
                    font-weight: 700;
                    color: #2d2822;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                }
                .nav-link {
                    color: #4a4239;
                    text-decoration: none;
                }
                .nav-link:hover {
                    color: #e8833a;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #2d2822;
                }
                .site-footer {
                    background: #2d2822;
                    color: #cfc4b6;
                    padding: 2.5rem 2rem;
                }
                .footer-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    flex-wrap: wrap;
                }
                .footer-brand {
                    font-weight: 700;
                    color: #fff;
                }
                .footer-links {
                    margin-left: auto;
                    display: flex;
                    gap: 1.25rem;
                }
                .footer-link {
                    color: #cfc4b6;
                    text-decoration: none;
                }
                .footer-link:hover {
                    color: #ffd9a0;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        width: 100%;
                        flex-direction: column;
                        background: #fdf8f1;
                        padding: 1.5rem 0;
                        box-shadow: 0 6px 12px rgba(45, 40, 34, 0.1);
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </ContextProvider<Locale>>
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
