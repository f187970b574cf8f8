use web_sys::MouseEvent;
use yew::prelude::*;

use crate::site::portfolio::Accordion;

const QUESTIONS: &[(&str, &str)] = &[
    (
        "How long does it take to build an app?",
        "Most apps take 8-20 weeks. A focused MVP can ship in about two months, while apps with custom backends and integrations need longer.",
    ),
    (
        "How much does app development cost?",
        "Projects usually start around $5,000 for an MVP. After a short call I send a fixed quote based on features and platforms.",
    ),
    (
        "Do you build for both iOS and Android?",
        "Yes. I build native apps in Swift and Kotlin as well as cross-platform apps with Flutter and React Native.",
    ),
    (
        "Will I own the source code?",
        "Yes. Once the project is paid you receive the full source code and all store accounts stay in your name.",
    ),
    (
        "Do you offer support after launch?",
        "Every project includes 30 days of free fixes after launch, and monthly maintenance plans are available after that.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle} aria-expanded={props.open.to_string()}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_state(Accordion::default);

    html! {
        <section id="faq" class="faq-section">
            <div class="container">
                <h2>{"Frequently Asked Questions"}</h2>
                { for QUESTIONS.iter().enumerate().map(|(index, (question, answer))| {
                    let on_toggle = {
                        let accordion = accordion.clone();
                        Callback::from(move |_| {
                            let mut next = *accordion;
                            next.toggle(index);
                            accordion.set(next);
                        })
                    };
                    html! {
                        <FaqItem
                            question={*question}
                            answer={*answer}
                            open={accordion.is_open(index)}
                            {on_toggle}
                        />
                    }
                }) }
            </div>
        </section>
    }
}
