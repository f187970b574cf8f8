use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::notification::Notify;
use crate::components::reveal::Reveal;
use crate::components::support_modal::SupportModal;
use crate::config::{CONTACT_EMAIL, CONTACT_PHONE};
use crate::contact::support::SupportKind;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub notify: Notify,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let support = use_state(|| None::<SupportKind>);

    let close_support = {
        let support = support.clone();
        Callback::from(move |_: ()| support.set(None))
    };

    html! {
        <div class="contact-page">
            <section class="contact-hero">
                <div class="container">
                    <h1>{"Let's Build Something Together"}</h1>
                    <p>{"Tell me about your project and I'll reply within 24 hours."}</p>
                </div>
            </section>

            <section class="contact-content">
                <div class="container contact-grid">
                    <Reveal class="contact-info">
                        <h2>{"Get in Touch"}</h2>
                        <div class="info-item">
                            <i class="fas fa-envelope"></i>
                            <a href={format!("mailto:{}", CONTACT_EMAIL)}>{ CONTACT_EMAIL }</a>
                        </div>
                        <div class="info-item">
                            <i class="fas fa-phone"></i>
                            <a href={format!("tel:{}", CONTACT_PHONE.replace(' ', ""))}>{ CONTACT_PHONE }</a>
                        </div>
                        <div class="info-item">
                            <i class="fas fa-clock"></i>
                            <span>{"Mon - Sat, 10:00 - 19:00 IST"}</span>
                        </div>
                    </Reveal>
                    <Reveal class="contact-form-wrapper">
                        <ContactForm notify={props.notify.clone()} />
                    </Reveal>
                </div>
            </section>

            <section class="support">
                <div class="container">
                    <h2>{"Already a Client?"}</h2>
                    <div class="support-grid">
                        { for SupportKind::ALL.iter().map(|kind| {
                            let kind = *kind;
                            let open = {
                                let support = support.clone();
                                Callback::from(move |_: MouseEvent| support.set(Some(kind)))
                            };
                            html! {
                                <Reveal class="support-card">
                                    <i class={kind.icon()}></i>
                                    <h3>{ kind.title() }</h3>
                                    <p>{ kind.blurb() }</p>
                                    <button class="btn btn-outline support-btn" onclick={open}>
                                        { kind.title() }
                                    </button>
                                </Reveal>
                            }
                        }) }
                    </div>
                </div>
            </section>

            if let Some(kind) = *support {
                <SupportModal
                    key={kind.title()}
                    {kind}
                    notify={props.notify.clone()}
                    on_close={close_support}
                />
            }
        </div>
    }
}
