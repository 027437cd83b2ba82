use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent, Node};
use yew::prelude::*;

use crate::dom::{closest, focus, smooth_scroll_to, Listener};
use crate::nav::{NavKeyOutcome, NavMenu};

const LINKS: &[(&str, &str)] = &[
    ("#inicio", "Inicio"),
    ("#beneficios", "Beneficios"),
    ("#galeria", "Nuestro equipo"),
    ("#testimonios", "Testimonios"),
    ("#faq", "Preguntas"),
    ("#aplicar", "Aplicar"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(NavMenu::default);
    let root = use_node_ref();
    let toggle = use_node_ref();
    let first_link = use_node_ref();

    {
        let first_link = first_link.clone();
        use_effect_with_deps(
            move |menu: &NavMenu| {
                if menu.is_open() {
                    if let Some(link) = first_link.cast::<Element>() {
                        focus(&link);
                    }
                }
                || ()
            },
            *menu,
        );
    }

    // Outside clicks and Escape only matter while the menu is open.
    {
        let open = menu.is_open();
        let menu = menu.clone();
        let root = root.clone();
        let toggle = toggle.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let mut listeners = Vec::new();
                if *open {
                    listeners.extend(Listener::on_document("click", {
                        let menu = menu.clone();
                        let root = root.clone();
                        move |event: Event| {
                            let inside = event
                                .target()
                                .and_then(|target| target.dyn_into::<Node>().ok())
                                .zip(root.get())
                                .map(|(target, root)| root.contains(Some(&target)))
                                .unwrap_or(false);
                            let next = menu.on_click(inside);
                            if next != *menu {
                                menu.set(next);
                            }
                        }
                    }));
                    listeners.extend(Listener::on_document("keydown", move |event: Event| {
                        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                            return;
                        };
                        let (next, outcome) = menu.on_key(&key);
                        if outcome == NavKeyOutcome::ClosedAndRefocus {
                            menu.set(next);
                            if let Some(toggle) = toggle.cast::<Element>() {
                                focus(&toggle);
                            }
                        }
                    }));
                }
                move || drop(listeners)
            },
            open,
        );
    }

    let on_toggle = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.toggled()))
    };
    let on_link = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.set(menu.closed()))
    };

    html! {
        <header class="site-header">
            <nav class="nav" ref={root.clone()} aria-label="Principal">
                <a href="#inicio" class="nav__brand">{"Únete al equipo"}</a>
                <button
                    ref={toggle}
                    class="nav__toggle"
                    aria-controls="nav-menu"
                    aria-expanded={menu.aria_expanded()}
                    aria-label="Abrir menú"
                    onclick={on_toggle}
                >
                    <span class="nav__toggle-bar"></span>
                    <span class="nav__toggle-bar"></span>
                    <span class="nav__toggle-bar"></span>
                </button>
                <ul id="nav-menu" class={classes!("nav__menu", menu.is_open().then_some("is-open"))} hidden={!menu.is_open()}>
                    { for LINKS.iter().enumerate().map(|(index, (href, label))| html! {
                        <li>
                            <a
                                ref={if index == 0 { first_link.clone() } else { NodeRef::default() }}
                                href={*href}
                                class="nav__link"
                                onclick={on_link.clone()}
                            >{*label}</a>
                        </li>
                    }) }
                </ul>
            </nav>
        </header>
    }
}

/// Smooth scrolling for every in-page link on the document, offset by the
/// fixed header. Links whose default was already prevented are left alone.
#[hook]
pub fn use_smooth_scroll() {
    use_effect_with_deps(
        |_| {
            let listener = Listener::on_document("click", |event: Event| {
                if event.default_prevented() {
                    return;
                }
                let Some(href) = closest(&event, "a[href^='#']").and_then(|link| link.get_attribute("href")) else {
                    return;
                };
                if smooth_scroll_to(&href) {
                    event.prevent_default();
                }
            });
            move || drop(listener)
        },
        (),
    );
}
