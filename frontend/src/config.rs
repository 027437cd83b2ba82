use crate::carousel::RotatorConfig;
use crate::headline::TypewriterTimings;

pub const HERO_CAROUSEL: RotatorConfig = RotatorConfig {
    interval_ms: 3000,
    bidirectional: false,
    has_indicators: false,
    supports_swipe: false,
    supports_keyboard: false,
    pause_offscreen: false,
    event: "hero_slide_view",
    label_prefix: "hero_slide_",
    one_based: true,
    announce_initial: true,
};

pub const TESTIMONIALS_CAROUSEL: RotatorConfig = RotatorConfig {
    interval_ms: 15000,
    bidirectional: true,
    has_indicators: true,
    supports_swipe: false,
    supports_keyboard: false,
    pause_offscreen: false,
    event: "testimonial_view",
    label_prefix: "testimonial_",
    one_based: true,
    announce_initial: true,
};

pub const GALLERY_CAROUSEL: RotatorConfig = RotatorConfig {
    interval_ms: 4000,
    bidirectional: true,
    has_indicators: true,
    supports_swipe: true,
    supports_keyboard: true,
    pause_offscreen: true,
    event: "carousel_slide",
    label_prefix: "slide_",
    one_based: false,
    announce_initial: false,
};

pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
pub const OFFSCREEN_VISIBILITY_THRESHOLD: f64 = 0.5;

pub const HEADLINE_WORDS: &[&str] = &["Talento", "Pasión", "Servicio", "Actitud"];
pub const HEADLINE_TIMINGS: TypewriterTimings = TypewriterTimings {
    type_ms: 120,
    delete_ms: 60,
    jitter_ms: 20,
    hold_ms: 1500,
    gap_ms: 300,
    initial_delay_ms: 800,
};

pub const HEADER_HEIGHT_FALLBACK_PX: f64 = 80.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_MS: u32 = 100;

pub const SCROLL_THROTTLE_MS: u32 = 100;
pub const SCROLL_MILESTONES: &[u32] = &[25, 50, 75, 100];

pub const APPLICATION_FORM_URL: &str =
    "https://feedback.soul23.cloud/s/cmfsu7y5h003smo0170y0l0x5";
pub const APPLY_ANCHOR: &str = "#aplicar";

pub const CONSENT_STORAGE_KEY: &str = "analytics_consent";

/// Third-party tag IDs. Placeholders mean "not configured".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsConfig {
    pub ga4_id: &'static str,
    pub meta_pixel_id: &'static str,
    pub tiktok_pixel_id: &'static str,
}

const GA4_PLACEHOLDER: &str = "XXXXXXXXXX";
const META_PLACEHOLDER: &str = "123456789";
const TIKTOK_PLACEHOLDER: &str = "TIKTOK123";

impl AnalyticsConfig {
    pub fn from_env() -> Self {
        Self {
            ga4_id: option_env!("LANDING_GA4_ID").unwrap_or("G-XXXXXXXXXX"),
            meta_pixel_id: option_env!("LANDING_META_PIXEL_ID").unwrap_or(META_PLACEHOLDER),
            tiktok_pixel_id: option_env!("LANDING_TIKTOK_PIXEL_ID").unwrap_or(TIKTOK_PLACEHOLDER),
        }
    }

    pub fn ga4(&self) -> Option<&'static str> {
        configured(self.ga4_id, GA4_PLACEHOLDER)
    }

    pub fn meta_pixel(&self) -> Option<&'static str> {
        configured(self.meta_pixel_id, META_PLACEHOLDER)
    }

    pub fn tiktok_pixel(&self) -> Option<&'static str> {
        configured(self.tiktok_pixel_id, TIKTOK_PLACEHOLDER)
    }
}

fn configured(id: &'static str, placeholder: &str) -> Option<&'static str> {
    let id = id.trim();
    (!id.is_empty() && !id.contains(placeholder)).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_not_configured() {
        let config = AnalyticsConfig {
            ga4_id: "G-XXXXXXXXXX",
            meta_pixel_id: "123456789",
            tiktok_pixel_id: "",
        };
        assert_eq!(config.ga4(), None);
        assert_eq!(config.meta_pixel(), None);
        assert_eq!(config.tiktok_pixel(), None);
    }

    #[test]
    fn real_ids_pass_through() {
        let config = AnalyticsConfig {
            ga4_id: "G-4F9Q2L7ZKD",
            meta_pixel_id: "981273645501",
            tiktok_pixel_id: "CQ1MEJ3C77U8",
        };
        assert_eq!(config.ga4(), Some("G-4F9Q2L7ZKD"));
        assert_eq!(config.meta_pixel(), Some("981273645501"));
        assert_eq!(config.tiktok_pixel(), Some("CQ1MEJ3C77U8"));
    }
}
