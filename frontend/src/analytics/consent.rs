use log::{info, warn};
use web_sys::window;

use crate::config::CONSENT_STORAGE_KEY;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consent {
    Undecided,
    Granted,
    Denied,
}

impl Consent {
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            None => Consent::Undecided,
            Some("false") => Consent::Denied,
            Some(_) => Consent::Granted,
        }
    }

    pub fn stored_value(self) -> Option<&'static str> {
        match self {
            Consent::Undecided => None,
            Consent::Granted => Some("true"),
            Consent::Denied => Some("false"),
        }
    }

    /// Analytics stays on until a rejection has been recorded.
    pub fn analytics_enabled(self) -> bool {
        self != Consent::Denied
    }

    pub fn show_banner(self) -> bool {
        self == Consent::Undecided
    }
}

pub trait ConsentStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// `window.localStorage`; unavailable storage reads as undecided and
/// writes are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalConsentStore;

impl ConsentStore for LocalConsentStore {
    fn load(&self) -> Option<String> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(CONSENT_STORAGE_KEY).ok())
            .flatten()
    }

    fn save(&self, value: &str) {
        let storage = window().and_then(|w| w.local_storage().ok()).flatten();
        match storage {
            Some(storage) => {
                if storage.set_item(CONSENT_STORAGE_KEY, value).is_err() {
                    warn!("could not persist analytics consent");
                }
            }
            None => warn!("local storage unavailable, consent not persisted"),
        }
    }
}

pub struct ConsentManager<S> {
    store: S,
    consent: Consent,
}

impl<S: ConsentStore> ConsentManager<S> {
    pub fn load(store: S) -> Self {
        let consent = Consent::from_stored(store.load().as_deref());
        Self { store, consent }
    }

    pub fn consent(&self) -> Consent {
        self.consent
    }

    pub fn decide(&mut self, accepted: bool) -> Consent {
        self.consent = if accepted {
            Consent::Granted
        } else {
            Consent::Denied
        };
        if let Some(value) = self.consent.stored_value() {
            self.store.save(value);
        }
        info!("analytics consent recorded: {:?}", self.consent);
        self.consent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct MemoryStore(Rc<RefCell<Option<String>>>);

    impl ConsentStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn save(&self, value: &str) {
            *self.0.borrow_mut() = Some(value.to_string());
        }
    }

    #[test]
    fn absent_value_shows_banner_with_analytics_on() {
        let manager = ConsentManager::load(MemoryStore::default());
        assert_eq!(manager.consent(), Consent::Undecided);
        assert!(manager.consent().show_banner());
        assert!(manager.consent().analytics_enabled());
    }

    #[test]
    fn rejection_is_persisted_and_disables_analytics() {
        let store = MemoryStore::default();
        let mut manager = ConsentManager::load(store.clone());
        assert_eq!(manager.decide(false), Consent::Denied);
        assert_eq!(store.load().as_deref(), Some("false"));

        let reloaded = ConsentManager::load(store);
        assert!(!reloaded.consent().analytics_enabled());
        assert!(!reloaded.consent().show_banner());
    }

    #[test]
    fn acceptance_is_persisted() {
        let store = MemoryStore::default();
        ConsentManager::load(store.clone()).decide(true);
        assert_eq!(
            ConsentManager::load(store).consent(),
            Consent::Granted
        );
    }

    #[test]
    fn anything_but_false_counts_as_granted() {
        assert_eq!(Consent::from_stored(Some("true")), Consent::Granted);
        assert_eq!(Consent::from_stored(Some("yes")), Consent::Granted);
        assert_eq!(Consent::from_stored(Some("false")), Consent::Denied);
    }
}
