use crate::config::HEADER_HEIGHT_FALLBACK_PX;

/// Open/closed state of the mobile menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

/// What the page should do after a key press on the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKeyOutcome {
    Ignored,
    /// Menu closed; focus goes back to the toggle button.
    ClosedAndRefocus,
}

impl NavMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    /// A click outside the navigation closes the menu.
    pub fn on_click(self, inside_nav: bool) -> Self {
        if inside_nav {
            self
        } else {
            self.closed()
        }
    }

    pub fn on_key(self, key: &str) -> (Self, NavKeyOutcome) {
        if key == "Escape" && self.open {
            (self.closed(), NavKeyOutcome::ClosedAndRefocus)
        } else {
            (self, NavKeyOutcome::Ignored)
        }
    }
}

/// Element id an in-page link points at. A bare `#` is not a target.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts `target_top` just below the fixed header.
pub fn scroll_offset(target_top: f64, header_height: Option<f64>) -> f64 {
    let header = header_height
        .filter(|height| *height > 0.0)
        .unwrap_or(HEADER_HEIGHT_FALLBACK_PX);
    (target_top - header).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_aria_state() {
        let menu = NavMenu::default();
        assert_eq!(menu.aria_expanded(), "false");
        let open = menu.toggled();
        assert!(open.is_open());
        assert_eq!(open.aria_expanded(), "true");
        assert!(!open.toggled().is_open());
    }

    #[test]
    fn escape_closes_only_an_open_menu() {
        let (menu, outcome) = NavMenu::default().toggled().on_key("Escape");
        assert!(!menu.is_open());
        assert_eq!(outcome, NavKeyOutcome::ClosedAndRefocus);

        let (menu, outcome) = NavMenu::default().on_key("Escape");
        assert!(!menu.is_open());
        assert_eq!(outcome, NavKeyOutcome::Ignored);

        let (menu, outcome) = NavMenu::default().toggled().on_key("Enter");
        assert!(menu.is_open());
        assert_eq!(outcome, NavKeyOutcome::Ignored);
    }

    #[test]
    fn outside_click_closes_inside_click_keeps_open() {
        let open = NavMenu::default().toggled();
        assert!(open.on_click(true).is_open());
        assert!(!open.on_click(false).is_open());
        assert_eq!(NavMenu::default().on_click(false), NavMenu::default());
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_id("#faq"), Some("faq"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("/aviso-de-privacidad"), None);
    }

    #[test]
    fn offset_uses_header_height_or_fallback() {
        assert_eq!(scroll_offset(1000.0, Some(64.0)), 936.0);
        assert_eq!(scroll_offset(1000.0, Some(0.0)), 920.0);
        assert_eq!(scroll_offset(1000.0, None), 920.0);
        assert_eq!(scroll_offset(30.0, None), 0.0);
    }
}
