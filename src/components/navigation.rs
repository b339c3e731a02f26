use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::actions::{mail_callback, scroll_to_section, send_template, BrowserComposer, MailTemplate};
use crate::components::logo::{Logo, LogoSize};
use crate::config;
use crate::content::NavLink;
use crate::icons::Icon;

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Technology", anchor: "#results" },
    NavLink { label: "Market", anchor: "#market" },
    NavLink { label: "Team", anchor: "#team" },
    NavLink { label: "Investment", anchor: "#investment" },
    NavLink { label: "FAQ", anchor: "#faq" },
];

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.clone().map(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::<dyn FnMut()>::new(move || {
                    let offset = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(offset > config::NAV_SCROLL_THRESHOLD);
                });
                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
                scroll_callback
            });

            move || {
                if let (Some(window), Some(scroll_callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
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

    let follow_link = |anchor: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("Navigating to {}", anchor);
            if scroll_to_section(anchor) {
                menu_open.set(false);
            }
        })
    };

    let mobile_demo = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            send_template(MailTemplate::InvestorDemo, &BrowserComposer);
            menu_open.set(false);
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="container nav-content">
                <Logo size={LogoSize::Medium} />

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <button key={link.label} class="nav-link" onclick={follow_link(link.anchor)}>
                            {link.label}
                        </button>
                    }) }
                </div>

                <div class="nav-cta">
                    <button class="btn btn-primary" onclick={mail_callback(MailTemplate::InvestorDemo)}>
                        {"Schedule Demo"}
                        {Icon::ArrowRight.view()}
                    </button>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { Icon::Close.view() } else { Icon::Menu.view() } }
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for NAV_LINKS.iter().map(|link| html! {
                                <button key={link.label} class="mobile-link" onclick={follow_link(link.anchor)}>
                                    {link.label}
                                </button>
                            }) }
                            <div class="mobile-cta">
                                <button class="btn btn-primary btn-block" onclick={mobile_demo}>
                                    {"Schedule Demo"}
                                    {Icon::ArrowRight.view()}
                                </button>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 10px 15px rgba(15, 23, 42, 0.1);
                }
                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    height: 5rem;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link, .mobile-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    color: #374151;
                    font-weight: 500;
                    font-size: 1rem;
                    transition: color 0.2s ease;
                }
                .nav-link:hover, .mobile-link:hover {
                    color: #2563eb;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    padding: 0.5rem;
                    border-radius: 0.5rem;
                    cursor: pointer;
                    color: #374151;
                }
                .mobile-menu {
                    background: #ffffff;
                    border-top: 1px solid #e5e7eb;
                    box-shadow: 0 10px 15px rgba(15, 23, 42, 0.1);
                    padding: 1.5rem 1rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .mobile-link {
                    text-align: left;
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                }
                .mobile-cta {
                    padding-top: 1rem;
                    border-top: 1px solid #e5e7eb;
                }
                @media (max-width: 768px) {
                    .nav-links, .nav-cta {
                        display: none;
                    }
                    .burger-menu {
                        display: block;
                    }
                }
                @media (min-width: 769px) {
                    .mobile-menu {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
