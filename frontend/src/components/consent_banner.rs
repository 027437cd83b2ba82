use stylist::yew::styled_component;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ConsentBannerProps {
    /// Emits true on accept, false on reject.
    pub on_decide: Callback<bool>,
}

#[styled_component(ConsentBanner)]
pub fn consent_banner(props: &ConsentBannerProps) -> Html {
    let banner = css!(
        r#"
        position: fixed;
        left: 1rem;
        right: 1rem;
        bottom: 1rem;
        z-index: 1000;
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        align-items: center;
        justify-content: space-between;
        padding: 1rem 1.25rem;
        border-radius: 12px;
        background: #1a1a2e;
        color: #f5f5f5;
        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);

        p {
            margin: 0;
            flex: 1 1 20rem;
            font-size: 0.9rem;
        }

        a {
            color: #ffd166;
        }

        .consent-actions {
            display: flex;
            gap: 0.5rem;
        }

        button {
            border: none;
            border-radius: 8px;
            padding: 0.5rem 1rem;
            font-weight: 600;
            cursor: pointer;
        }

        .consent-accept {
            background: #ffd166;
            color: #1a1a2e;
        }

        .consent-reject {
            background: transparent;
            color: #f5f5f5;
            border: 1px solid #f5f5f5;
        }
    "#
    );

    let accept = props.on_decide.reform(|_: MouseEvent| true);
    let reject = props.on_decide.reform(|_: MouseEvent| false);

    html! {
        <div class={classes!("consent-banner", banner)} role="dialog" aria-live="polite" aria-label="Consentimiento de cookies">
            <p>
                {"Usamos cookies de análisis para entender cómo se usa esta página y mejorar nuestras vacantes. "}
                <Link<Route> to={Route::Privacy}>{"Aviso de privacidad"}</Link<Route>>
            </p>
            <div class="consent-actions">
                <button class="consent-reject" onclick={reject}>{"Rechazar"}</button>
                <button class="consent-accept" onclick={accept}>{"Aceptar"}</button>
            </div>
        </div>
    }
}
