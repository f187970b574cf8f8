use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::faq::Faq;
use crate::components::portfolio::PortfolioShowcase;
use crate::components::reveal::{LazyImage, Reveal};
use crate::components::stats::Stats;
use crate::Route;

const SERVICES: &[(&str, &str, &str)] = &[
    (
        "fab fa-apple",
        "iOS Development",
        "Native Swift and SwiftUI apps that feel at home on iPhone and iPad.",
    ),
    (
        "fab fa-android",
        "Android Development",
        "Kotlin and Jetpack Compose apps tuned for the whole range of Android devices.",
    ),
    (
        "fas fa-mobile-alt",
        "Cross-platform Apps",
        "One Flutter or React Native codebase shipped to both stores.",
    ),
    (
        "fas fa-paint-brush",
        "UI/UX Design",
        "Wireframes, prototypes and polished interfaces before a line of code is written.",
    ),
    (
        "fas fa-server",
        "Backend & APIs",
        "Secure APIs, databases and payments that keep your app running.",
    ),
    (
        "fas fa-tools",
        "Maintenance & Support",
        "Updates for new OS releases, bug fixes and performance work after launch.",
    ),
];

const TESTIMONIALS: &[(&str, &str, &str)] = &[
    (
        "Jitendra turned our rough idea into a polished app in under three months. Communication was excellent throughout.",
        "Sarah Mitchell",
        "Founder, FitPulse",
    ),
    (
        "Our delivery app handles thousands of orders a day without a hitch. Highly recommended.",
        "Rahul Verma",
        "CTO, FoodieHub",
    ),
    (
        "Clear estimates, on-time delivery and great support after launch.",
        "Emily Chen",
        "Product Lead, EduLearn",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <section id="home" class="hero">
                <div class="container hero-content">
                    <Reveal class="hero-text">
                        <h1>{"I build mobile apps people love to use"}</h1>
                        <p>
                            {"Freelance iOS, Android and cross-platform developer helping startups and businesses go from idea to App Store."}
                        </p>
                        <div class="hero-buttons">
                            <Link<Route> to={Route::Contact} classes="btn btn-primary">
                                {"Start a Project"}
                            </Link<Route>>
                            <a href="#portfolio" class="btn btn-outline">{"View My Work"}</a>
                        </div>
                    </Reveal>
                    <Reveal class="hero-image">
                        <LazyImage src="https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=800" alt="App screens on a phone" />
                    </Reveal>
                </div>
            </section>

            <section id="services" class="services">
                <div class="container">
                    <Reveal class="section-header">
                        <h2>{"What I Do"}</h2>
                        <p>{"End-to-end app development, from the first sketch to the store listing."}</p>
                    </Reveal>
                    <div class="services-grid">
                        { for SERVICES.iter().map(|(icon, title, text)| html! {
                            <Reveal class="service-card">
                                <div class="service-icon"><i class={*icon}></i></div>
                                <h3>{ *title }</h3>
                                <p>{ *text }</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <Stats />
            <PortfolioShowcase />

            <section id="testimonials" class="testimonials">
                <div class="container">
                    <Reveal class="section-header">
                        <h2>{"What Clients Say"}</h2>
                    </Reveal>
                    <div class="testimonials-grid">
                        { for TESTIMONIALS.iter().map(|(quote, name, role)| html! {
                            <Reveal class="testimonial-card">
                                <p class="quote">{ *quote }</p>
                                <div class="author">
                                    <strong>{ *name }</strong>
                                    <span>{ *role }</span>
                                </div>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <Faq />

            <section class="cta">
                <Reveal class="container">
                    <h2>{"Have an app idea?"}</h2>
                    <p>{"Tell me about it and get a free estimate within 24 hours."}</p>
                    <div class="hero-buttons">
                        <Link<Route> to={Route::Contact} classes="btn btn-primary">
                            {"Get in Touch"}
                        </Link<Route>>
                        <Link<Route> to={Route::Shop} classes="btn btn-outline">
                            {"Browse Ready-made Apps"}
                        </Link<Route>>
                    </div>
                </Reveal>
            </section>
        </div>
    }
}
