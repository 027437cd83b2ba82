use web_sys::{Element, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::accordion::{Accordion, AccordionKey};
use crate::analytics::sink::Attributes;
use crate::analytics::{engagement, NotificationSink};
use crate::components::analytics::use_sink;
use crate::dom::focus;

const QUESTIONS: &[(&str, &str)] = &[
    (
        "¿Necesito experiencia previa?",
        "No. Buscamos actitud y ganas de aprender; te capacitamos desde el primer día con acompañamiento de tu líder.",
    ),
    (
        "¿Qué horarios manejan?",
        "Contamos con turnos matutinos, vespertinos y mixtos. Durante la entrevista elegimos juntos el que mejor se adapte a ti.",
    ),
    (
        "¿Qué prestaciones ofrecen?",
        "Prestaciones de ley desde el primer día, bonos por desempeño, comedor subsidiado y oportunidades reales de crecimiento.",
    ),
    (
        "¿Cómo es el proceso de selección?",
        "Llenas el formulario en línea, te contactamos en menos de 48 horas para una entrevista y, si todo va bien, te integras en la siguiente semana.",
    ),
    (
        "¿Qué documentos necesito?",
        "Identificación oficial, CURP, comprobante de domicilio, número de seguridad social y acta de nacimiento.",
    ),
];

fn opened_attributes(index: usize) -> Attributes {
    engagement(QUESTIONS[index].0, 1)
}

/// Exclusive accordion: opening one question closes the rest.
#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_state(|| Accordion::new(QUESTIONS.len()));
    let buttons = use_state(|| QUESTIONS.iter().map(|_| NodeRef::default()).collect::<Vec<_>>());
    let sink = use_sink();

    let toggle = {
        let accordion = accordion.clone();
        Callback::from(move |index: usize| {
            let mut next = *accordion;
            if next.toggle(index) {
                sink.notify("faq_open", &opened_attributes(index));
            }
            accordion.set(next);
        })
    };

    html! {
        <section id="faq" class="faq-section">
            <h2 class="section-header">{"Preguntas frecuentes"}</h2>
            <div class="faq-list">
                { for QUESTIONS.iter().enumerate().map(|(index, (question, answer))| {
                    let open = accordion.is_open(index);
                    let onclick = {
                        let toggle = toggle.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            toggle.emit(index);
                        })
                    };
                    let onkeydown = {
                        let toggle = toggle.clone();
                        let accordion = *accordion;
                        let buttons = buttons.clone();
                        Callback::from(move |e: KeyboardEvent| {
                            match accordion.on_key(index, &e.key()) {
                                Some(AccordionKey::Toggle) => {
                                    e.prevent_default();
                                    toggle.emit(index);
                                }
                                Some(AccordionKey::Focus(target)) => {
                                    e.prevent_default();
                                    if let Some(button) = buttons[target].cast::<Element>() {
                                        focus(&button);
                                    }
                                }
                                None => {}
                            }
                        })
                    };
                    html! {
                        <div class={classes!("faq-item", open.then_some("open"))}>
                            <button
                                ref={buttons[index].clone()}
                                id={format!("faq-question-{index}")}
                                class="faq-question"
                                aria-expanded={open.to_string()}
                                aria-controls={format!("faq-answer-{index}")}
                                {onclick}
                                {onkeydown}
                            >
                                <span class="question-text">{*question}</span>
                                <span class="toggle-icon">{if open { "−" } else { "+" }}</span>
                            </button>
                            <div
                                id={format!("faq-answer-{index}")}
                                class="faq-answer"
                                role="region"
                                aria-labelledby={format!("faq-question-{index}")}
                                hidden={!open}
                            >
                                <p>{*answer}</p>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
