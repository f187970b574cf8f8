use gloo_timers::future::TimeoutFuture;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::components::notification::{NoticeKind, Notify};
use crate::contact::support::{ticket_confirmation, SupportKind, SUBMIT_DELAY_MS};

#[derive(Properties, PartialEq)]
pub struct SupportModalProps {
    pub kind: SupportKind,
    pub notify: Notify,
    pub on_close: Callback<()>,
}

#[function_component(SupportModal)]
pub fn support_modal(props: &SupportModalProps) -> Html {
    let email = use_state(String::new);
    let prefix = props.kind.subject_prefix();
    let subject = use_state(move || prefix);
    let details = use_state(String::new);
    let submitting = use_state(|| false);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_subject = {
        let subject = subject.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            subject.set(input.value());
        })
    };
    let on_details = {
        let details = details.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            details.set(area.value());
        })
    };

    let onsubmit = {
        let submitting = submitting.clone();
        let notify = props.notify.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);
            let notify = notify.clone();
            let on_close = on_close.clone();
            spawn_local(async move {
                TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                let mut rng = SmallRng::from_entropy();
                notify.emit((NoticeKind::Success, ticket_confirmation(&mut rng)));
                on_close.emit(());
            });
        })
    };

    html! {
        <Modal title={props.kind.title()} on_close={props.on_close.clone()} class="support-modal">
            <form class="support-form" {onsubmit}>
                <div class="form-group">
                    <label for="supportEmail">{"Email"}</label>
                    <input
                        id="supportEmail"
                        type="email"
                        class="form-control"
                        required={true}
                        value={(*email).clone()}
                        oninput={on_email}
                    />
                </div>
                <div class="form-group">
                    <label for="supportSubject">{"Subject"}</label>
                    <input
                        id="supportSubject"
                        type="text"
                        class="form-control"
                        required={true}
                        value={(*subject).clone()}
                        oninput={on_subject}
                    />
                </div>
                <div class="form-group">
                    <label for="supportDetails">{"Details"}</label>
                    <textarea
                        id="supportDetails"
                        rows="5"
                        class="form-control"
                        required={true}
                        value={(*details).clone()}
                        oninput={on_details}
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    if *submitting {
                        <i class="fas fa-spinner fa-spin"></i>{" Submitting..."}
                    } else {
                        {"Submit Request"}
                    }
                </button>
            </form>
        </Modal>
    }
}
