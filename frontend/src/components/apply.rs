use log::warn;
use web_sys::window;
use yew::prelude::*;

use crate::analytics::{engagement, pixels, NotificationSink};
use crate::components::analytics::use_sink;
use crate::config::{AnalyticsConfig, APPLICATION_FORM_URL};

/// Call to action that opens the external application form in a new tab
/// and reports the lead.
#[function_component(ApplySection)]
pub fn apply_section() -> Html {
    let sink = use_sink();

    let open_form = Callback::from(move |_: MouseEvent| {
        sink.notify("application_form_open", &engagement("external_form", 1));
        pixels::track_lead(&AnalyticsConfig::from_env(), sink.as_ref());

        // noopener makes open() return null, so only a thrown error counts
        let Some(window) = window() else {
            return;
        };
        if let Err(e) =
            window.open_with_url_and_target_and_features(APPLICATION_FORM_URL, "_blank", "noopener,noreferrer")
        {
            warn!("could not open the application form: {e:?}");
        }
    });

    html! {
        <section id="aplicar" class="apply reveal">
            <div class="apply__content">
                <h2 class="section-header">{"¿Listo para unirte?"}</h2>
                <p>{"Llena la solicitud en menos de cinco minutos. Te contactamos en 48 horas."}</p>
                <button class="btn btn--primary apply__cta" onclick={open_form}>
                    {"Llenar solicitud"}
                </button>
                <p class="apply__whatsapp">
                    {"¿Tienes dudas? "}
                    <a href="https://wa.me/5218112345678" target="_blank" rel="noopener noreferrer">{"Escríbenos por WhatsApp"}</a>
                </p>
            </div>
        </section>
    }
}
