use yew::prelude::*;

use crate::components::apply::ApplySection;
use crate::components::carousel::{HeroCarousel, ImageCarousel, ImageSlide, TestimonialsCarousel, Testimonial};
use crate::components::faq::Faq;
use crate::components::headline::AnimatedHeadline;
use crate::components::reveal::use_reveal;
use crate::config::APPLY_ANCHOR;

fn hero_slides() -> Vec<ImageSlide> {
    vec![
        ImageSlide {
            src: "/assets/hero/equipo-1.webp",
            alt: "Equipo de piso atendiendo a clientes",
            caption: None,
        },
        ImageSlide {
            src: "/assets/hero/equipo-2.webp",
            alt: "Colaboradores en capacitación",
            caption: None,
        },
        ImageSlide {
            src: "/assets/hero/equipo-3.webp",
            alt: "Celebración de aniversario del equipo",
            caption: None,
        },
    ]
}

fn gallery_slides() -> Vec<ImageSlide> {
    vec![
        ImageSlide {
            src: "/assets/galeria/cocina.webp",
            alt: "Cocina en plena operación",
            caption: Some("Cocina"),
        },
        ImageSlide {
            src: "/assets/galeria/piso.webp",
            alt: "Servicio en piso",
            caption: Some("Servicio en piso"),
        },
        ImageSlide {
            src: "/assets/galeria/capacitacion.webp",
            alt: "Sesión de capacitación",
            caption: Some("Capacitación continua"),
        },
        ImageSlide {
            src: "/assets/galeria/convivio.webp",
            alt: "Convivio de fin de mes",
            caption: Some("Convivios"),
        },
    ]
}

fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "Entré como ayudante de cocina y en un año ya era encargada de turno. Aquí sí se crece.",
            name: "Mariana G.",
            role: "Encargada de turno",
        },
        Testimonial {
            quote: "Los horarios me permiten estudiar y trabajar. Mi líder siempre me ha apoyado.",
            name: "Luis A.",
            role: "Mesero",
        },
        Testimonial {
            quote: "Lo mejor es el ambiente. Somos un equipo de verdad y eso se nota con los clientes.",
            name: "Fernanda R.",
            role: "Host",
        },
    ]
}

const BENEFITS: &[(&str, &str)] = &[
    ("Prestaciones de ley", "Desde el primer día, sin letras chiquitas."),
    ("Crecimiento real", "Plan de carrera con evaluaciones cada seis meses."),
    ("Capacitación pagada", "Aprendes mientras ganas."),
    ("Comedor subsidiado", "Comida caliente en cada turno."),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let root = use_node_ref();
    use_reveal(root.clone());

    html! {
        <main class="landing" ref={root}>
            <section id="inicio" class="hero">
                <div class="hero__content">
                    <h1 class="hero__title">
                        {"Buscamos "}
                        <AnimatedHeadline />
                    </h1>
                    <p class="hero__subtitle">{"Únete a un equipo que valora lo que haces y te impulsa a crecer."}</p>
                    <a href={APPLY_ANCHOR} class="btn btn--primary">{"Quiero aplicar"}</a>
                </div>
                <HeroCarousel slides={hero_slides()} />
            </section>

            <section id="beneficios" class="benefits reveal">
                <h2 class="section-header reveal">{"¿Por qué trabajar con nosotros?"}</h2>
                <div class="benefits__grid">
                    { for BENEFITS.iter().enumerate().map(|(index, (title, body))| html! {
                        <article class="card reveal" data-reveal-index={index.to_string()}>
                            <h3>{*title}</h3>
                            <p>{*body}</p>
                        </article>
                    }) }
                </div>
            </section>

            <section id="galeria" class="gallery reveal">
                <h2 class="section-header reveal">{"Conoce a nuestro equipo"}</h2>
                <ImageCarousel slides={gallery_slides()} />
            </section>

            <section id="testimonios" class="testimonials reveal">
                <h2 class="section-header reveal">{"Lo que dice nuestra gente"}</h2>
                <TestimonialsCarousel testimonials={testimonials()} />
            </section>

            <Faq />

            <ApplySection />
        </main>
    }
}
