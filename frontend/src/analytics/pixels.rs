use log::{info, warn};
use serde_json::json;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Date, Function, Reflect};
use web_sys::{window, HtmlScriptElement};

use super::sink::{engagement, global_function, AnalyticsError, NotificationSink};
use crate::config::AnalyticsConfig;

const GTAG_SCRIPT: &str = "https://www.googletagmanager.com/gtag/js?id=";

// Vendor queue stubs. They buffer calls until the real SDK script arrives.
const GTAG_STUB: &str =
    "window.dataLayer = window.dataLayer || []; window.gtag = function(){ dataLayer.push(arguments); };";
const FBQ_STUB: &str = "if (window.fbq) return; var n = window.fbq = function(){ n.callMethod ? n.callMethod.apply(n, arguments) : n.queue.push(arguments); }; if (!window._fbq) window._fbq = n; n.push = n; n.loaded = true; n.version = '2.0'; n.queue = [];";
const FBQ_SCRIPT: &str = "https://connect.facebook.net/en_US/fbevents.js";
const TTQ_STUB: &str = "window.TiktokAnalyticsObject = 'ttq'; var ttq = window.ttq = window.ttq || []; ttq.methods = ['page','track','identify','instances','debug','on','off','once','ready','alias','group','enableCookie','disableCookie']; ttq.setAndDefer = function(t, e){ t[e] = function(){ t.push([e].concat(Array.prototype.slice.call(arguments, 0))); }; }; for (var i = 0; i < ttq.methods.length; i++) ttq.setAndDefer(ttq, ttq.methods[i]); ttq._i = ttq._i || {}; ttq._t = ttq._t || {}; ttq._o = ttq._o || {};";
const TTQ_REGISTER: &str = "var ttq = window.ttq; ttq._i[id] = []; ttq._i[id]._u = src; ttq._t[id] = +new Date(); ttq._o[id] = {};";
const TTQ_SCRIPT: &str = "https://analytics.tiktok.com/i18n/pixel/events.js";

/// Loads every configured tag. Each loader fails on its own without
/// affecting the others.
pub fn load_all(config: &AnalyticsConfig) {
    if let Some(id) = config.ga4() {
        report("GA4", load_ga4(id));
    }
    if let Some(id) = config.meta_pixel() {
        report("Meta Pixel", load_meta_pixel(id));
    }
    if let Some(id) = config.tiktok_pixel() {
        report("TikTok Pixel", load_tiktok_pixel(id));
    }
}

fn report(name: &str, result: Result<(), AnalyticsError>) {
    match result {
        Ok(()) => info!("{name} initialized"),
        Err(e) => warn!("{name} failed to initialize: {e}"),
    }
}

fn load_ga4(id: &str) -> Result<(), AnalyticsError> {
    inject_script(&format!("{GTAG_SCRIPT}{}", urlencoding::encode(id)))?;
    Function::new_no_args(GTAG_STUB).call0(&JsValue::NULL)?;

    let gtag = global_function("gtag")?;
    gtag.call2(&JsValue::NULL, &"js".into(), &Date::new_0())?;
    let settings = to_js(&json!({
        "send_page_view": true,
        "allow_google_signals": true,
        "allow_ad_personalization_signals": true,
    }))?;
    gtag.call3(&JsValue::NULL, &"config".into(), &JsValue::from_str(id), &settings)?;

    let document = window()
        .and_then(|w| w.document())
        .ok_or(AnalyticsError::NoDocument)?;
    let location = document.location().ok_or(AnalyticsError::NoDocument)?;
    let page = to_js(&json!({
        "page_title": document.title(),
        "page_location": location.href().unwrap_or_default(),
        "page_path": location.pathname().unwrap_or_default(),
    }))?;
    gtag.call3(&JsValue::NULL, &"event".into(), &"page_view".into(), &page)?;
    Ok(())
}

fn load_meta_pixel(id: &str) -> Result<(), AnalyticsError> {
    Function::new_no_args(FBQ_STUB).call0(&JsValue::NULL)?;
    inject_script(FBQ_SCRIPT)?;
    let fbq = global_function("fbq")?;
    fbq.call2(&JsValue::NULL, &"init".into(), &JsValue::from_str(id))?;
    fbq.call2(&JsValue::NULL, &"track".into(), &"PageView".into())?;
    Ok(())
}

fn load_tiktok_pixel(id: &str) -> Result<(), AnalyticsError> {
    Function::new_no_args(TTQ_STUB).call0(&JsValue::NULL)?;
    Function::new_with_args("id, src", TTQ_REGISTER).call2(
        &JsValue::NULL,
        &JsValue::from_str(id),
        &JsValue::from_str(TTQ_SCRIPT),
    )?;
    inject_script(&format!("{TTQ_SCRIPT}?sdkid={}&lib=ttq", urlencoding::encode(id)))?;

    let window = window().ok_or(AnalyticsError::NoWindow)?;
    let ttq = Reflect::get(&window, &"ttq".into())?;
    if ttq.is_undefined() {
        return Err(AnalyticsError::NotLoaded("ttq"));
    }
    let page = method(&ttq, "page")?;
    page.call0(&ttq)?;
    Ok(())
}

/// Sends a lead conversion to whichever tags are present.
pub fn track_lead(config: &AnalyticsConfig, sink: &dyn NotificationSink) {
    if let Some(id) = config.ga4() {
        let mut conversion = engagement("application_submitted", 1);
        conversion.insert("event_category".into(), "lead".into());
        conversion.insert("send_to".into(), format!("{id}/lead_generation").into());
        sink.notify("conversion", &conversion);
    }
    let lead = json!({
        "content_name": "Job Application",
        "content_category": "Recruitment",
        "value": 1,
        "currency": "MXN",
    });
    if let Ok(fbq) = global_function("fbq") {
        if let Ok(payload) = to_js(&lead) {
            let _ = fbq.call3(&JsValue::NULL, &"track".into(), &"Lead".into(), &payload);
        }
    }
    let ttq = window().and_then(|w| Reflect::get(&w, &"ttq".into()).ok());
    if let Some(ttq) = ttq.filter(|t| !t.is_undefined()) {
        let submit = json!({ "content_type": "application", "content_name": "Job Application" });
        if let (Ok(track), Ok(payload)) = (method(&ttq, "track"), to_js(&submit)) {
            let args = Array::of2(&"SubmitForm".into(), &payload);
            let _ = track.apply(&ttq, &args);
        }
    }
}

fn method(target: &JsValue, name: &'static str) -> Result<Function, AnalyticsError> {
    Reflect::get(target, &JsValue::from_str(name))?
        .dyn_into::<Function>()
        .map_err(|_| AnalyticsError::NotCallable(name))
}

fn inject_script(src: &str) -> Result<(), AnalyticsError> {
    let document = window()
        .and_then(|w| w.document())
        .ok_or(AnalyticsError::NoDocument)?;
    let script: HtmlScriptElement = document.create_element("script")?.unchecked_into();
    script.set_async(true);
    script.set_src(src);
    let head = document.head().ok_or(AnalyticsError::NoDocument)?;
    head.append_child(&script)?;
    Ok(())
}

fn to_js(value: &serde_json::Value) -> Result<JsValue, AnalyticsError> {
    use serde::Serialize;
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| AnalyticsError::Serialize(e.to_string()))
}
