use gloo_timers::callback::Timeout;
use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::config::{HEADLINE_TIMINGS, HEADLINE_WORDS};
use crate::dom::prefers_reduced_motion;
use crate::headline::{Frame, Typewriter};

#[derive(Clone, PartialEq)]
struct Step {
    seq: u64,
    frame: Frame,
}

/// Hero headline that types and deletes each word in turn.
#[function_component(AnimatedHeadline)]
pub fn animated_headline() -> Html {
    let reduced_motion = use_state(prefers_reduced_motion);
    let writer = use_mut_ref(|| Typewriter::new(HEADLINE_WORDS, HEADLINE_TIMINGS));
    let step = use_state(|| Step {
        seq: 0,
        frame: Frame::initial(&HEADLINE_TIMINGS),
    });

    {
        let deps = (step.seq, *reduced_motion);
        let step = step.clone();
        let writer = writer.clone();
        use_effect_with_deps(
            move |(seq, reduced)| {
                let timeout = (!*reduced).then(|| {
                    let seq = *seq;
                    Timeout::new(step.frame.delay_ms, move || {
                        let jitter = Math::random() * 2.0 - 1.0;
                        let next = writer.borrow_mut().as_mut().map(|w| w.step(jitter));
                        if let Some(frame) = next {
                            step.set(Step { seq: seq + 1, frame });
                        }
                    })
                });
                move || drop(timeout)
            },
            deps,
        );
    }

    let text = if *reduced_motion {
        writer
            .borrow()
            .as_ref()
            .map(Typewriter::first_word)
            .unwrap_or_default()
    } else {
        step.frame.text.clone()
    };

    html! {
        <span class="hero__headline-rotator" aria-live="polite">
            <span class="typewriter-text">{text}</span>
            <span class={classes!("typewriter-cursor", step.frame.typing.then_some("typing"))} aria-hidden="true">{"|"}</span>
        </span>
    }
}
