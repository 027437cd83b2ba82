pub mod consent;
pub mod pixels;
pub mod sink;
pub mod tracking;

pub use consent::{Consent, ConsentManager, LocalConsentStore};
pub use sink::{engagement, GtagSink, NotificationSink, NullSink};
