use yew::prelude::*;
use yew_router::prelude::*;

use crate::analytics::{Consent, ConsentManager, LocalConsentStore};
use crate::config::CONSENT_STORAGE_KEY;
use crate::Route;

#[function_component(PrivacyNotice)]
pub fn privacy_notice() -> Html {
    let consent = use_state(|| ConsentManager::load(LocalConsentStore).consent());
    let status = match *consent {
        Consent::Undecided => "Aún no has elegido. Mientras tanto usamos cookies de análisis.",
        Consent::Granted => "Aceptaste las cookies de análisis.",
        Consent::Denied => "Rechazaste las cookies de análisis.",
    };

    html! {
        <div class="legal-content">
            <div>
                <h1>{"Aviso de privacidad"}</h1>

                <h2>{"Qué datos recopilamos"}</h2>
                <p>
                    {"Esta página no recibe datos personales directamente. La solicitud de empleo se llena en un formulario externo que tiene su propio aviso."}
                </p>

                <h2>{"Cookies de análisis"}</h2>
                <p>
                    {"Con tu consentimiento cargamos Google Analytics, Meta Pixel y TikTok Pixel para medir visitas, clics y el avance en la página. No vendemos esta información."}
                </p>
                <p>
                    {"Tu elección se guarda en este navegador bajo la clave "}
                    <code>{CONSENT_STORAGE_KEY}</code>
                    {". Puedes cambiarla borrando los datos del sitio."}
                </p>
                <p class="legal-content__status">{status}</p>

                <h2>{"Contacto"}</h2>
                <p>{"Para ejercer tus derechos ARCO escríbenos a privacidad@talento.example."}</p>

                <Link<Route> to={Route::Home} classes="btn btn--secondary">{"Volver al inicio"}</Link<Route>>
            </div>
        </div>
    }
}
