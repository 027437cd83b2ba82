//! Auto-advancing slide rotation shared by the hero, testimonial and gallery
//! carousels. Nothing in here touches the DOM except [`IntervalScheduler`].

pub mod gate;
pub mod input;
pub mod rotator;
pub mod slide_set;
pub mod timer;

#[cfg(test)]
pub mod test_support;

pub use gate::SuspendReason;
pub use input::SwipeTracker;
pub use rotator::{Rotator, RotatorConfig, Trigger};
pub use timer::IntervalScheduler;
