use std::cell::RefCell;
use std::rc::Rc;

use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod accordion;
mod analytics;
mod carousel;
mod config;
mod dom;
mod headline;
mod nav;
mod components {
    pub mod analytics;
    pub mod apply;
    pub mod carousel;
    pub mod consent_banner;
    pub mod faq;
    pub mod headline;
    pub mod nav;
    pub mod reveal;
}
mod pages {
    pub mod landing;
    pub mod privacy;
}

use analytics::{pixels, ConsentManager, LocalConsentStore};
use components::analytics::{use_page_tracking, AnalyticsContext};
use components::consent_banner::ConsentBanner;
use components::nav::{use_smooth_scroll, Nav};
use config::AnalyticsConfig;
use pages::{landing::Landing, privacy::PrivacyNotice};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/aviso-de-privacidad")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! {
                <>
                    <Nav />
                    <Landing />
                </>
            }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyNotice /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct PageChromeProps {
    enabled: bool,
    children: Children,
}

/// Page-wide behaviour that needs the analytics context in scope.
#[function_component(PageChrome)]
fn page_chrome(props: &PageChromeProps) -> Html {
    use_page_tracking(props.enabled);
    use_smooth_scroll();
    html! { { for props.children.iter() } }
}

#[function_component]
fn App() -> Html {
    let manager = use_mut_ref(|| ConsentManager::load(LocalConsentStore));
    let consent = use_state(|| manager.borrow().consent());
    let enabled = consent.analytics_enabled();
    let context = use_memo(|enabled| AnalyticsContext::new(*enabled), enabled);
    let pixels_loaded: Rc<RefCell<bool>> = use_mut_ref(|| false);

    use_effect_with_deps(
        move |enabled| {
            if *enabled && !*pixels_loaded.borrow() {
                pixels::load_all(&AnalyticsConfig::from_env());
                *pixels_loaded.borrow_mut() = true;
            }
            || ()
        },
        enabled,
    );

    let on_decide = {
        let consent = consent.clone();
        Callback::from(move |accepted: bool| {
            let decided = manager.borrow_mut().decide(accepted);
            info!("analytics consent: {decided:?}");
            consent.set(decided);
        })
    };

    html! {
        <ContextProvider<AnalyticsContext> context={(*context).clone()}>
            <BrowserRouter>
                <PageChrome {enabled}>
                    <Switch<Route> render={switch} />
                </PageChrome>
                if consent.show_banner() {
                    <ConsentBanner {on_decide} />
                }
            </BrowserRouter>
        </ContextProvider<AnalyticsContext>>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}
