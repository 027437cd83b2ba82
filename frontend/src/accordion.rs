/// FAQ list where at most one item is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccordionKey {
    Toggle,
    Focus(usize),
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Opens `index` (closing the others) or closes it if it was open.
    /// Returns true only when the item was opened.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        if self.open == Some(index) {
            self.open = None;
            false
        } else {
            self.open = Some(index);
            true
        }
    }

    /// Keyboard handling on the question at `index`.
    pub fn on_key(&self, index: usize, key: &str) -> Option<AccordionKey> {
        if self.len == 0 {
            return None;
        }
        match key {
            "Enter" | " " => Some(AccordionKey::Toggle),
            "ArrowDown" => Some(AccordionKey::Focus((index + 1) % self.len)),
            "ArrowUp" => Some(AccordionKey::Focus((index + self.len - 1) % self.len)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_rest() {
        let mut faq = Accordion::new(3);
        assert!(faq.toggle(0));
        assert!(faq.toggle(2));
        assert!(!faq.is_open(0));
        assert!(faq.is_open(2));
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        let mut faq = Accordion::new(2);
        faq.toggle(1);
        assert!(!faq.toggle(1));
        assert!(!faq.is_open(1));
    }

    #[test]
    fn arrow_keys_wrap() {
        let faq = Accordion::new(4);
        assert_eq!(faq.on_key(3, "ArrowDown"), Some(AccordionKey::Focus(0)));
        assert_eq!(faq.on_key(0, "ArrowUp"), Some(AccordionKey::Focus(3)));
        assert_eq!(faq.on_key(1, " "), Some(AccordionKey::Toggle));
        assert_eq!(faq.on_key(1, "Tab"), None);
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut faq = Accordion::new(2);
        assert!(!faq.toggle(5));
        assert_eq!(faq, Accordion::new(2));
    }
}
