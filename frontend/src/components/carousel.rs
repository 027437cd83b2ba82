use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Element, FocusEvent, KeyboardEvent, MouseEvent, Node, TouchEvent};
use yew::prelude::*;

use crate::carousel::{IntervalScheduler, Rotator, RotatorConfig, SuspendReason, SwipeTracker, Trigger};
use crate::components::analytics::{use_current_sink, CurrentSink};
use crate::config::{GALLERY_CAROUSEL, HERO_CAROUSEL, OFFSCREEN_VISIBILITY_THRESHOLD, TESTIMONIALS_CAROUSEL};
use crate::dom::{document_hidden, prefers_reduced_motion, Listener, ViewportObserver};

pub type PageRotator<T> = Rotator<T, IntervalScheduler, CurrentSink>;

#[derive(Clone, PartialEq)]
pub struct ImageSlide {
    pub src: &'static str,
    pub alt: &'static str,
    pub caption: Option<&'static str>,
}

#[derive(Clone, PartialEq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

/// Shared access to a mounted rotator plus the index the view renders.
pub struct RotatorHandle<T: 'static> {
    rotator: Rc<RefCell<Option<PageRotator<T>>>>,
    active: UseStateHandle<usize>,
}

impl<T: 'static> Clone for RotatorHandle<T> {
    fn clone(&self) -> Self {
        Self {
            rotator: self.rotator.clone(),
            active: self.active.clone(),
        }
    }
}

impl<T: 'static> RotatorHandle<T> {
    pub fn active(&self) -> usize {
        *self.active
    }

    /// Runs `f` against the rotator, if it mounted, and re-renders at
    /// whatever slide it ends on.
    pub fn with<R>(&self, f: impl FnOnce(&mut PageRotator<T>) -> R) -> Option<R> {
        let (result, index) = {
            let mut slot = self.rotator.borrow_mut();
            let rotator = slot.as_mut()?;
            let result = f(rotator);
            (result, rotator.active_index())
        };
        self.active.set(index);
        Some(result)
    }

    pub fn suspend(&self, reason: SuspendReason) {
        self.with(|rotator| rotator.suspend(reason));
    }

    pub fn resume(&self, reason: SuspendReason) {
        self.with(|rotator| rotator.resume(reason));
    }

    pub fn next(&self) -> Callback<MouseEvent> {
        let handle = self.clone();
        Callback::from(move |_| {
            handle.with(|rotator| rotator.next(Trigger::Manual));
        })
    }

    pub fn previous(&self) -> Callback<MouseEvent> {
        let handle = self.clone();
        Callback::from(move |_| {
            handle.with(|rotator| rotator.previous(Trigger::Manual));
        })
    }

    pub fn go_to(&self, index: usize) -> Callback<MouseEvent> {
        let handle = self.clone();
        Callback::from(move |_| {
            handle.with(|rotator| rotator.go_to(index, Trigger::Manual));
        })
    }
}

/// Mounts a rotator for `slides` on the element behind `root` and wires
/// the page-level suspend signals: document visibility, page hide/show and, where
/// configured, leaving the viewport. Hover, focus and input are wired on
/// the container by each carousel component.
#[hook]
pub fn use_rotator<T: 'static>(config: RotatorConfig, slides: Vec<T>, root: NodeRef) -> RotatorHandle<T> {
    let rotator = use_mut_ref(|| None::<PageRotator<T>>);
    let active = use_state(|| 0usize);
    let sink = use_current_sink();

    {
        let rotator = rotator.clone();
        let set_active = active.setter();
        use_effect_with_deps(
            move |_| {
                let weak = Rc::downgrade(&rotator);
                let on_expire = Callback::from(move |generation: u64| {
                    let Some(cell) = weak.upgrade() else {
                        return;
                    };
                    let moved = cell
                        .borrow_mut()
                        .as_mut()
                        .and_then(|rotator| rotator.tick(generation));
                    if let Some(index) = moved {
                        set_active.set(index);
                    }
                });

                match Rotator::new(
                    config,
                    slides,
                    IntervalScheduler::new(on_expire),
                    sink,
                    prefers_reduced_motion(),
                ) {
                    Ok(mut mounted) => {
                        if document_hidden() {
                            mounted.suspend(SuspendReason::HiddenDocument);
                        }
                        *rotator.borrow_mut() = Some(mounted);
                    }
                    Err(e) => warn!("{} carousel disabled: {e}", config.event),
                }

                let mut listeners = Vec::new();
                listeners.extend(Listener::on_document("visibilitychange", {
                    let rotator = rotator.clone();
                    move |_| {
                        if let Some(rotator) = rotator.borrow_mut().as_mut() {
                            if document_hidden() {
                                rotator.suspend(SuspendReason::HiddenDocument);
                            } else {
                                rotator.resume(SuspendReason::HiddenDocument);
                            }
                        }
                    }
                }));
                listeners.extend(Listener::on_window("pagehide", {
                    let rotator = rotator.clone();
                    move |_| {
                        if let Some(rotator) = rotator.borrow_mut().as_mut() {
                            rotator.shutdown();
                        }
                    }
                }));
                listeners.extend(Listener::on_window("pageshow", {
                    let rotator = rotator.clone();
                    move |_| {
                        if let Some(rotator) = rotator.borrow_mut().as_mut() {
                            rotator.revive();
                        }
                    }
                }));

                let observer = if config.pause_offscreen {
                    observe_viewport(&root, rotator.clone())
                } else {
                    None
                };

                move || {
                    drop(listeners);
                    drop(observer);
                    if let Some(rotator) = rotator.borrow_mut().as_mut() {
                        rotator.shutdown();
                    }
                }
            },
            (),
        );
    }

    RotatorHandle { rotator, active }
}

fn observe_viewport<T: 'static>(
    root: &NodeRef,
    rotator: Rc<RefCell<Option<PageRotator<T>>>>,
) -> Option<ViewportObserver> {
    let element = root.cast::<Element>()?;
    let observer = ViewportObserver::new(OFFSCREEN_VISIBILITY_THRESHOLD, None, move |entry, _| {
        if let Some(rotator) = rotator.borrow_mut().as_mut() {
            if entry.is_intersecting() {
                rotator.resume(SuspendReason::OutOfViewport);
            } else {
                rotator.suspend(SuspendReason::OutOfViewport);
            }
        }
    })?;
    observer.observe(&element);
    Some(observer)
}

#[derive(Properties, PartialEq)]
pub struct ImageCarouselProps {
    pub slides: Vec<ImageSlide>,
}

#[function_component(HeroCarousel)]
pub fn hero_carousel(props: &ImageCarouselProps) -> Html {
    let root = use_node_ref();
    let handle = use_rotator(HERO_CAROUSEL, props.slides.clone(), root.clone());
    let active = handle.active();
    let listeners = container_listeners(&handle, &root, HERO_CAROUSEL);

    html! {
        <div id="heroCarousel" class="hero__carousel" ref={root} aria-roledescription="carousel"
            onmouseenter={listeners.onmouseenter} onmouseleave={listeners.onmouseleave}
            onfocusin={listeners.onfocusin} onfocusout={listeners.onfocusout}>
            { for props.slides.iter().enumerate().map(|(index, slide)| html! {
                <figure class={classes!("hero__slide", (index == active).then_some("active"))}
                    aria-hidden={(index != active).to_string()}>
                    <img src={slide.src} alt={slide.alt} loading={if index == 0 { "eager" } else { "lazy" }} />
                </figure>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsCarouselProps {
    pub testimonials: Vec<Testimonial>,
}

#[function_component(TestimonialsCarousel)]
pub fn testimonials_carousel(props: &TestimonialsCarouselProps) -> Html {
    let root = use_node_ref();
    let handle = use_rotator(TESTIMONIALS_CAROUSEL, props.testimonials.clone(), root.clone());
    let active = handle.active();
    let listeners = container_listeners(&handle, &root, TESTIMONIALS_CAROUSEL);

    html! {
        <div id="testimonialsCarousel" class="testimonials__carousel" ref={root} aria-roledescription="carousel"
            onmouseenter={listeners.onmouseenter} onmouseleave={listeners.onmouseleave}
            onfocusin={listeners.onfocusin} onfocusout={listeners.onfocusout}>
            <div class="testimonials__track">
                { for props.testimonials.iter().enumerate().map(|(index, testimonial)| html! {
                    <blockquote class={classes!("testimonial-slide", (index == active).then_some("active"))}
                        aria-hidden={(index != active).to_string()}>
                        <p class="testimonial-slide__quote">{testimonial.quote}</p>
                        <footer>
                            <cite class="testimonial-slide__name">{testimonial.name}</cite>
                            <span class="testimonial-slide__role">{testimonial.role}</span>
                        </footer>
                    </blockquote>
                }) }
            </div>
            <div class="testimonials__controls">
                <button id="testimonioPrev" class="carousel-btn" aria-label="Testimonio anterior" onclick={handle.previous()}>{"‹"}</button>
                { indicators(&handle, props.testimonials.len(), "testimonial-indicator") }
                <button id="testimonioNext" class="carousel-btn" aria-label="Siguiente testimonio" onclick={handle.next()}>{"›"}</button>
            </div>
        </div>
    }
}

#[function_component(ImageCarousel)]
pub fn image_carousel(props: &ImageCarouselProps) -> Html {
    let root = use_node_ref();
    let handle = use_rotator(GALLERY_CAROUSEL, props.slides.clone(), root.clone());
    let active = handle.active();
    let listeners = container_listeners(&handle, &root, GALLERY_CAROUSEL);

    html! {
        <div id="imageCarousel" class="carousel" ref={root} tabindex="0" aria-roledescription="carousel"
            onmouseenter={listeners.onmouseenter} onmouseleave={listeners.onmouseleave}
            onfocusin={listeners.onfocusin} onfocusout={listeners.onfocusout}
            onkeydown={listeners.onkeydown}>
            <div class="carousel-track" ontouchstart={listeners.ontouchstart} ontouchend={listeners.ontouchend}>
                { for props.slides.iter().enumerate().map(|(index, slide)| html! {
                    <figure class={classes!("carousel-slide", (index == active).then_some("active"))}
                        aria-hidden={(index != active).to_string()}>
                        <img src={slide.src} alt={slide.alt} loading="lazy" />
                        { for slide.caption.map(|caption| html! { <figcaption>{caption}</figcaption> }) }
                    </figure>
                }) }
            </div>
            <button id="carouselPrev" class="carousel-btn carousel-btn--prev" aria-label="Imagen anterior" onclick={handle.previous()}>{"‹"}</button>
            <button id="carouselNext" class="carousel-btn carousel-btn--next" aria-label="Siguiente imagen" onclick={handle.next()}>{"›"}</button>
            { indicators(&handle, props.slides.len(), "carousel-indicator") }
        </div>
    }
}

fn indicators<T: 'static>(handle: &RotatorHandle<T>, count: usize, class: &'static str) -> Html {
    let active = handle.active();
    html! {
        <div class={format!("{class}s")} role="tablist">
            { for (0..count).map(|index| html! {
                <button class={classes!(class, (index == active).then_some("active"))}
                    role="tab"
                    aria-selected={(index == active).to_string()}
                    aria-label={format!("Ir a la diapositiva {}", index + 1)}
                    onclick={handle.go_to(index)}>
                </button>
            }) }
        </div>
    }
}

struct ContainerListeners {
    onmouseenter: Callback<MouseEvent>,
    onmouseleave: Callback<MouseEvent>,
    onfocusin: Callback<FocusEvent>,
    onfocusout: Callback<FocusEvent>,
    onkeydown: Callback<KeyboardEvent>,
    ontouchstart: Callback<TouchEvent>,
    ontouchend: Callback<TouchEvent>,
}

fn container_listeners<T: 'static>(
    handle: &RotatorHandle<T>,
    root: &NodeRef,
    config: RotatorConfig,
) -> ContainerListeners {
    let swipe = Rc::new(RefCell::new(SwipeTracker::default()));

    let onmouseenter = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| handle.suspend(SuspendReason::Hover))
    };
    let onmouseleave = {
        let handle = handle.clone();
        Callback::from(move |_: MouseEvent| handle.resume(SuspendReason::Hover))
    };
    let onfocusin = {
        let handle = handle.clone();
        Callback::from(move |_: FocusEvent| handle.suspend(SuspendReason::Focus))
    };
    let onfocusout = {
        let handle = handle.clone();
        let root = root.clone();
        Callback::from(move |e: FocusEvent| {
            // focus moving between controls inside the carousel is not a focus-out
            let stays_inside = e
                .related_target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .zip(root.get())
                .map(|(target, root)| root.contains(Some(&target)))
                .unwrap_or(false);
            if !stays_inside {
                handle.resume(SuspendReason::Focus);
            }
        })
    };
    let onkeydown = {
        let handle = handle.clone();
        Callback::from(move |e: KeyboardEvent| {
            if !config.supports_keyboard {
                return;
            }
            if handle.with(|rotator| rotator.key(&e.key())).unwrap_or(false) {
                e.prevent_default();
            }
        })
    };
    let ontouchstart = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.changed_touches().get(0) {
                swipe.borrow_mut().begin(f64::from(touch.screen_x()));
            }
        })
    };
    let ontouchend = {
        let handle = handle.clone();
        Callback::from(move |e: TouchEvent| {
            let Some(touch) = e.changed_touches().get(0) else {
                return;
            };
            if let Some(delta) = swipe.borrow_mut().end(f64::from(touch.screen_x())) {
                handle.with(|rotator| rotator.swipe(delta));
            }
        })
    };

    ContainerListeners {
        onmouseenter,
        onmouseleave,
        onfocusin,
        onfocusout,
        onkeydown,
        ontouchstart,
        ontouchend,
    }
}
