use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::reveal::use_reveal;
use crate::site::counter::{
    format_counter, CounterAnimation, Stat, COUNTER_DURATION_MS, COUNTER_STEP_MS, STATS,
};

#[derive(Properties, PartialEq)]
struct StatCounterProps {
    stat: Stat,
}

/// Counts up once, the first time it scrolls into view.
#[function_component(StatCounter)]
fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());
    let step = use_state(|| 0u32);
    let animation = CounterAnimation::new(props.stat.target, COUNTER_DURATION_MS, COUNTER_STEP_MS);

    {
        let setter = step.setter();
        use_effect_with_deps(
            move |(visible, current): &(bool, u32)| {
                let next = *current + 1;
                let timeout = (*visible && !animation.is_done(*current))
                    .then(|| Timeout::new(COUNTER_STEP_MS, move || setter.set(next)));
                move || drop(timeout)
            },
            (visible, *step),
        );
    }

    html! {
        <div ref={node} class="stat">
            <span class="stat-number">{ format_counter(animation.value_at(*step), props.stat.suffix) }</span>
            <span class="stat-label">{ props.stat.label }</span>
        </div>
    }
}

#[function_component(Stats)]
pub fn stats() -> Html {
    html! {
        <section class="stats">
            <div class="container stats-grid">
                { for STATS.iter().map(|stat| html! { <StatCounter stat={*stat} /> }) }
            </div>
        </section>
    }
}
