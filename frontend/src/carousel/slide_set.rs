use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a rotator needs at least one slide")]
    NoSlides,
    #[error("{indicators} indicators do not match {slides} slides")]
    IndicatorMismatch { slides: usize, indicators: usize },
}

/// Ordered slides with exactly one marked active.
///
/// Indicators are either absent or one per slide, so the active indicator is
/// always the one sharing the active slide's index.
#[derive(Debug, Clone)]
pub struct SlideSet<T> {
    slides: Vec<T>,
    indicators: usize,
    active: usize,
}

impl<T> SlideSet<T> {
    pub fn new(slides: Vec<T>, indicators: usize) -> Result<Self, ConfigError> {
        if slides.is_empty() {
            return Err(ConfigError::NoSlides);
        }
        if indicators != 0 && indicators != slides.len() {
            return Err(ConfigError::IndicatorMismatch {
                slides: slides.len(),
                indicators,
            });
        }
        Ok(Self {
            slides,
            indicators,
            active: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &T {
        &self.slides[self.active]
    }

    /// Marks `index` active and every other slide inactive. Out of range
    /// indexes leave the set untouched and return false.
    pub fn set_active(&mut self, index: usize) -> bool {
        if index >= self.slides.len() {
            return false;
        }
        self.active = index;
        true
    }

    /// Index `step` positions away from the active slide, wrapping both ways.
    pub fn offset(&self, step: isize) -> usize {
        let len = self.slides.len() as isize;
        (self.active as isize + step).rem_euclid(len) as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &T, bool)> + '_ {
        self.slides
            .iter()
            .enumerate()
            .map(move |(index, slide)| (index, slide, index == self.active))
    }

    /// Active flags for the indicator row, empty when the set has none.
    pub fn indicator_states(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.indicators).map(move |index| index == self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_mismatched_sets() {
        assert_eq!(
            SlideSet::<u8>::new(vec![], 0).unwrap_err(),
            ConfigError::NoSlides
        );
        assert_eq!(
            SlideSet::new(vec![1, 2, 3], 2).unwrap_err(),
            ConfigError::IndicatorMismatch {
                slides: 3,
                indicators: 2
            }
        );
    }

    #[test]
    fn exactly_one_slide_and_indicator_active() {
        let mut set = SlideSet::new(vec!["a", "b", "c"], 3).unwrap();
        assert!(set.set_active(2));
        let active: Vec<usize> = set.iter().filter(|(_, _, on)| *on).map(|(i, _, _)| i).collect();
        assert_eq!(active, vec![2]);
        let indicators: Vec<bool> = set.indicator_states().collect();
        assert_eq!(indicators, vec![false, false, true]);
        assert_eq!(*set.active(), "c");
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut set = SlideSet::new(vec![1, 2], 0).unwrap();
        assert!(!set.set_active(2));
        assert_eq!(set.active_index(), 0);
        assert_eq!(set.indicator_states().count(), 0);
    }

    #[test]
    fn offset_wraps_in_both_directions() {
        let set = SlideSet::new(vec![1, 2, 3, 4], 0).unwrap();
        assert_eq!(set.offset(1), 1);
        assert_eq!(set.offset(-1), 3);
        assert_eq!(set.offset(9), 1);
    }
}
