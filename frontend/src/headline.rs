#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTimings {
    pub type_ms: u32,
    pub delete_ms: u32,
    pub jitter_ms: u32,
    pub hold_ms: u32,
    pub gap_ms: u32,
    pub initial_delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// What to show after a step and how long until the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub typing: bool,
    pub delay_ms: u32,
}

impl Frame {
    /// Blank headline shown until the first keystroke.
    pub fn initial(timings: &TypewriterTimings) -> Self {
        Self {
            text: String::new(),
            typing: false,
            delay_ms: timings.initial_delay_ms,
        }
    }
}

/// Types each word out, holds it, deletes it, then moves on to the next
/// word, forever. Driven by repeatedly calling [`Typewriter::step`] after
/// the returned delay.
#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<Vec<char>>,
    word: usize,
    shown: usize,
    phase: Phase,
    timings: TypewriterTimings,
}

impl Typewriter {
    pub fn new(words: &[&str], timings: TypewriterTimings) -> Option<Self> {
        if words.is_empty() {
            return None;
        }
        Some(Self {
            words: words.iter().map(|word| word.chars().collect()).collect(),
            word: 0,
            shown: 0,
            phase: Phase::Typing,
            timings,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn word_index(&self) -> usize {
        self.word
    }

    /// Text shown when motion is reduced.
    pub fn first_word(&self) -> String {
        self.words[0].iter().collect()
    }

    /// Advances one keystroke. `jitter` in `[-1, 1]` varies the keystroke
    /// delay by up to `jitter_ms` either way.
    pub fn step(&mut self, jitter: f64) -> Frame {
        let len = self.words[self.word].len();
        match self.phase {
            Phase::Typing => {
                self.shown = (self.shown + 1).min(len);
                if self.shown == len {
                    self.phase = Phase::Holding;
                    return self.frame(false, self.timings.hold_ms);
                }
                self.frame(true, self.keystroke(self.timings.type_ms, jitter))
            }
            Phase::Holding | Phase::Deleting => {
                self.phase = Phase::Deleting;
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.word = (self.word + 1) % self.words.len();
                    self.phase = Phase::Typing;
                    return self.frame(false, self.timings.gap_ms);
                }
                self.frame(true, self.keystroke(self.timings.delete_ms, jitter))
            }
        }
    }

    fn keystroke(&self, base_ms: u32, jitter: f64) -> u32 {
        let spread = f64::from(self.timings.jitter_ms) * jitter.clamp(-1.0, 1.0);
        (f64::from(base_ms) + spread).round().max(0.0) as u32
    }

    fn frame(&self, typing: bool, delay_ms: u32) -> Frame {
        Frame {
            text: self.words[self.word][..self.shown].iter().collect(),
            typing,
            delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HEADLINE_TIMINGS, HEADLINE_WORDS};

    fn texts(writer: &mut Typewriter, steps: usize) -> Vec<String> {
        (0..steps).map(|_| writer.step(0.0).text).collect()
    }

    #[test]
    fn types_holds_deletes_and_moves_on() {
        let mut writer = Typewriter::new(&["ab", "c"], HEADLINE_TIMINGS).unwrap();
        assert_eq!(
            texts(&mut writer, 7),
            vec!["a", "ab", "a", "", "c", "", "a"]
        );
    }

    #[test]
    fn delays_follow_the_phase() {
        let mut writer = Typewriter::new(&["ab"], HEADLINE_TIMINGS).unwrap();
        let first = writer.step(0.0);
        assert!(first.typing);
        assert_eq!(first.delay_ms, 120);

        let complete = writer.step(0.0);
        assert_eq!(complete.text, "ab");
        assert!(!complete.typing);
        assert_eq!(complete.delay_ms, 1500);
        assert_eq!(writer.phase(), Phase::Holding);

        let deleting = writer.step(0.0);
        assert_eq!(deleting.delay_ms, 60);
        assert_eq!(writer.phase(), Phase::Deleting);

        let gap = writer.step(0.0);
        assert_eq!(gap.text, "");
        assert_eq!(gap.delay_ms, 300);
        assert_eq!(writer.phase(), Phase::Typing);
        assert_eq!(writer.word_index(), 0);
    }

    #[test]
    fn jitter_is_bounded() {
        let mut writer = Typewriter::new(&["abc"], HEADLINE_TIMINGS).unwrap();
        assert_eq!(writer.step(1.0).delay_ms, 140);
        assert_eq!(writer.step(-5.0).delay_ms, 100);
    }

    #[test]
    fn handles_multibyte_words() {
        let mut writer = Typewriter::new(&["Pasión"], HEADLINE_TIMINGS).unwrap();
        let shown = texts(&mut writer, 6);
        assert_eq!(shown[4], "Pasió");
        assert_eq!(shown[5], "Pasión");
        assert_eq!(writer.first_word(), "Pasión");
    }

    #[test]
    fn starts_blank_then_types_the_first_word() {
        let initial = Frame::initial(&HEADLINE_TIMINGS);
        assert_eq!(initial.text, "");
        assert!(!initial.typing);
        assert_eq!(initial.delay_ms, 800);

        let mut writer = Typewriter::new(HEADLINE_WORDS, HEADLINE_TIMINGS).unwrap();
        let first = writer.step(0.0);
        assert_eq!(first.text, "T");
        assert!(first.typing);
    }

    #[test]
    fn empty_word_list_is_rejected() {
        assert!(Typewriter::new(&[], HEADLINE_TIMINGS).is_none());
    }
}
