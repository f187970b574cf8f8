use web_sys::{Element, KeyboardEvent, ScrollBehavior, ScrollToOptions, TouchEvent};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::site::carousel::{CarouselMetrics, Direction, Swipe};
use crate::site::portfolio::{project_matches, PORTFOLIO_FILTERS, PROJECTS};

const CARD_GAP: f64 = 24.0;

fn read_metrics(track: &Element) -> CarouselMetrics {
    CarouselMetrics {
        scroll_left: f64::from(track.scroll_left()),
        scroll_width: f64::from(track.scroll_width()),
        client_width: f64::from(track.client_width()),
    }
}

/// One card plus the gap after it.
fn card_step(track: &Element) -> f64 {
    track
        .first_element_child()
        .map(|card| f64::from(card.client_width()) + CARD_GAP)
        .unwrap_or_else(|| f64::from(track.client_width()))
}

fn slide(track: &Element, direction: Direction) {
    let target = read_metrics(track).target(direction, card_step(track));
    let options = ScrollToOptions::new();
    options.set_left(target);
    options.set_behavior(ScrollBehavior::Smooth);
    track.scroll_to_with_scroll_to_options(&options);
}

#[function_component(PortfolioShowcase)]
pub fn portfolio_showcase() -> Html {
    let filter = use_state(|| "all".to_string());
    let track = use_node_ref();
    let metrics = use_state(CarouselMetrics::default);
    let swipe = use_mut_ref(Swipe::default);

    let refresh = {
        let track = track.clone();
        let metrics = metrics.clone();
        Callback::from(move |_: ()| {
            if let Some(element) = track.cast::<Element>() {
                metrics.set(read_metrics(&element));
            }
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with_deps(
            move |_| {
                refresh.emit(());
                || ()
            },
            (*filter).clone(),
        );
    }

    let step = {
        let track = track.clone();
        Callback::from(move |direction: Direction| {
            if let Some(element) = track.cast::<Element>() {
                slide(&element, direction);
            }
        })
    };

    let on_touch_start = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                swipe.borrow_mut().start(f64::from(touch.client_x()));
            }
        })
    };

    let on_touch_end = {
        let swipe = swipe.clone();
        let step = step.clone();
        Callback::from(move |e: TouchEvent| {
            let direction = e
                .changed_touches()
                .get(0)
                .and_then(|touch| swipe.borrow_mut().finish(f64::from(touch.client_x())));
            if let Some(direction) = direction {
                step.emit(direction);
            }
        })
    };

    let on_key = {
        let step = step.clone();
        Callback::from(move |e: KeyboardEvent| {
            if let Some(direction) = Direction::from_key(&e.key()) {
                e.prevent_default();
                step.emit(direction);
            }
        })
    };

    let on_prev = {
        let step = step.clone();
        Callback::from(move |_: MouseEvent| step.emit(Direction::Prev))
    };
    let on_next = Callback::from(move |_: MouseEvent| step.emit(Direction::Next));
    let on_scroll = Callback::from(move |_: Event| refresh.emit(()));

    let progress = format!("width: {:.1}%;", metrics.progress() * 100.0);

    html! {
        <section id="portfolio" class="portfolio">
            <div class="container">
                <Reveal class="section-header">
                    <h2>{"Featured Work"}</h2>
                    <p>{"A selection of apps I've designed and shipped."}</p>
                </Reveal>

                <div class="portfolio-filters">
                    { for PORTFOLIO_FILTERS.iter().map(|(value, label)| {
                        let onclick = {
                            let filter = filter.clone();
                            Callback::from(move |_: MouseEvent| filter.set(value.to_string()))
                        };
                        html! {
                            <button
                                class={classes!("filter-btn", (*filter == *value).then(|| "active"))}
                                {onclick}
                            >
                                {*label}
                            </button>
                        }
                    }) }
                </div>

                <div class="carousel">
                    <button
                        class="carousel-btn prev"
                        aria-label="Previous project"
                        disabled={!metrics.can_go_prev()}
                        onclick={on_prev}
                    >
                        <i class="fas fa-chevron-left"></i>
                    </button>

                    <div
                        ref={track}
                        class="carousel-track"
                        tabindex="0"
                        onscroll={on_scroll}
                        ontouchstart={on_touch_start}
                        ontouchend={on_touch_end}
                        onkeydown={on_key}
                    >
                        { for PROJECTS.iter().filter(|p| project_matches(p, &filter)).map(|project| html! {
                            <article class="project-card" key={project.title}>
                                <div class="project-icon"><i class={project.icon}></i></div>
                                <h3>{project.title}</h3>
                                <p>{project.summary}</p>
                                <div class="project-tags">
                                    { for project.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
                                </div>
                            </article>
                        }) }
                    </div>

                    <button
                        class="carousel-btn next"
                        aria-label="Next project"
                        disabled={!metrics.can_go_next()}
                        onclick={on_next}
                    >
                        <i class="fas fa-chevron-right"></i>
                    </button>
                </div>

                <div class="carousel-progress">
                    <div class="carousel-progress-bar" style={progress}></div>
                </div>
            </div>
        </section>
    }
}
