use log::{info, warn, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod dom;
mod storage;
mod shop {
    pub mod cart;
    pub mod catalog;
    pub mod checkout;
    pub mod stripe;
}
mod chat {
    pub mod responder;
    pub mod session;
}
mod contact {
    pub mod draft;
    pub mod support;
    pub mod validation;
}
mod site {
    pub mod carousel;
    pub mod counter;
    pub mod portfolio;
    pub mod scroll;
}
mod components {
    pub mod back_to_top;
    pub mod cart_sidebar;
    pub mod chat_widget;
    pub mod contact_form;
    pub mod faq;
    pub mod modal;
    pub mod notification;
    pub mod portfolio;
    pub mod reveal;
    pub mod stats;
    pub mod support_modal;
}
mod pages {
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod shop;
}

use components::{
    back_to_top::BackToTop,
    chat_widget::ChatWidget,
    notification::{NoticeAction, NoticeBoard, NoticeCenter, NoticeKind, Notify},
};
use pages::{contact::Contact, home::Home, not_found::NotFound, shop::Shop};
use site::scroll::{anchor_target, NavState, ScrollTracker};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/shop")]
    Shop,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, notify: &Notify) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Shop => {
            info!("Rendering Shop page");
            html! { <Shop notify={notify.clone()} /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact notify={notify.clone()} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

const SECTION_LINKS: &[(&str, &str)] = &[
    ("#services", "Services"),
    ("#portfolio", "Portfolio"),
    ("#faq", "FAQ"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let nav_state = use_state(NavState::default);
    let navigator = use_navigator();

    {
        let nav_state = nav_state.clone();
        use_effect_with_deps(
            move |_| {
                let mut tracker = ScrollTracker::default();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let next = tracker.observe(dom::scroll_y());
                    nav_state.set(next);
                }) as Box<dyn FnMut()>);

                let window = window();
                if let Some(window) = &window {
                    if let Err(e) = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("Could not watch scrolling: {:?}", e);
                    }
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
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
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-menu mobile-menu-open"
    } else {
        "nav-menu"
    };

    html! {
        <nav class={classes!("top-nav", nav_state.scrolled.then(|| "scrolled"), nav_state.hidden.then(|| "nav-hidden"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Jitendra.dev"}
                </Link<Route>>

                <button class={classes!("burger-menu", (*menu_open).then(|| "active"))} aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">{"Home"}</Link<Route>>
                    </div>
                    { for SECTION_LINKS.iter().map(|(href, label)| {
                        let href: &'static str = *href;
                        let navigator = navigator.clone();
                        let close = close_menu.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            close.emit(e);
                            let Some(id) = anchor_target(href) else {
                                return;
                            };
                            // Sections live on the home page.
                            if !dom::scroll_into_view(id) {
                                if let Some(navigator) = &navigator {
                                    navigator.push(&Route::Home);
                                }
                            }
                        });
                        html! { <a class="nav-link" {href} {onclick}>{ *label }</a> }
                    }) }
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Shop} classes="nav-link">{"Shop"}</Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contact} classes="nav-cta">{"Hire Me"}</Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let board = use_reducer(NoticeBoard::default);

    let notify: Notify = {
        let board = board.dispatcher();
        Callback::from(move |(kind, message): (NoticeKind, String)| board.dispatch(NoticeAction::Push(kind, message)))
    };
    let dismiss = {
        let board = board.dispatcher();
        Callback::from(move |id: u32| board.dispatch(NoticeAction::Dismiss(id)))
    };
    let render = {
        let notify = notify.clone();
        Callback::from(move |route: Route| switch(route, &notify))
    };

    html! {
        <BrowserRouter>
            <Nav />
            <main>
                <Switch<Route> {render} />
            </main>
            <footer class="site-footer">
                <p>{ format!("© {} · {}", chrono::Local::now().format("%Y"), config::CONTACT_EMAIL) }</p>
            </footer>
            <BackToTop />
            <ChatWidget />
            <NoticeCenter notices={board.notices.clone()} on_dismiss={dismiss} />
        </BrowserRouter>
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
