use gloo_timers::future::TimeoutFuture;
use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::notification::{NoticeKind, Notify};
use crate::contact::draft::{
    budget_options, ContactDraft, PLATFORMS, PROJECT_TYPES, SENT_MESSAGE, TIMELINES,
};
use crate::contact::support::SUBMIT_DELAY_MS;
use crate::contact::validation::check_attachment;
use crate::storage::SiteStorage;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub notify: Notify,
}

pub enum ContactFormMsg {
    Edit(&'static str, String),
    Blur(&'static str),
    TogglePlatform(&'static str, bool),
    SetNewsletter(bool),
    Attach(HtmlInputElement),
    Submit,
    Sent,
}

pub struct ContactForm {
    draft: ContactDraft<SiteStorage>,
    sending: bool,
}

fn input_value(e: &Event) -> String {
    let target = e.target();
    if let Some(select) = target.clone().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
        return select.value();
    }
    if let Some(area) = target.clone().and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok()) {
        return area.value();
    }
    target
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

impl ContactForm {
    fn field_class(&self, field: &str) -> Classes {
        classes!(
            "form-control",
            self.draft.error(field).map(|_| "error"),
            self.draft.is_valid(field).then(|| "success"),
        )
    }

    fn view_error(&self, field: &str) -> Html {
        match self.draft.error(field) {
            Some(e) => html! { <span class="field-error">{ e.to_string() }</span> },
            None => html! {},
        }
    }

    /// Text-like input bound to `field`.
    fn view_input(&self, ctx: &Context<Self>, field: &'static str, kind: &'static str, placeholder: &'static str) -> Html {
        let oninput = ctx
            .link()
            .callback(move |e: InputEvent| ContactFormMsg::Edit(field, input_value(&e)));
        let onblur = ctx.link().callback(move |_: FocusEvent| ContactFormMsg::Blur(field));

        html! {
            <>
                <input
                    id={field}
                    name={field}
                    type={kind}
                    class={self.field_class(field)}
                    {placeholder}
                    value={self.draft.value(field).to_string()}
                    {oninput}
                    {onblur}
                />
                { self.view_error(field) }
            </>
        }
    }

    fn view_select(
        &self,
        ctx: &Context<Self>,
        field: &'static str,
        prompt: &'static str,
        options: &'static [(&'static str, &'static str)],
    ) -> Html {
        let onchange = ctx
            .link()
            .callback(move |e: Event| ContactFormMsg::Edit(field, input_value(&e)));
        let onblur = ctx.link().callback(move |_: FocusEvent| ContactFormMsg::Blur(field));
        let current = self.draft.value(field);

        html! {
            <>
                <select id={field} name={field} class={self.field_class(field)} {onchange} {onblur}>
                    <option value="" selected={current.is_empty()}>{ prompt }</option>
                    { for options.iter().map(|(value, label)| html! {
                        <option value={*value} selected={current == *value}>{ *label }</option>
                    }) }
                </select>
                { self.view_error(field) }
            </>
        }
    }
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ContactFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            draft: ContactDraft::load(SiteStorage::open()),
            sending: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let notify = &ctx.props().notify;
        match msg {
            ContactFormMsg::Edit(field, value) => {
                self.draft.set_value(field, value);
                true
            }
            ContactFormMsg::Blur(field) => {
                let _ = self.draft.validate(field);
                true
            }
            ContactFormMsg::TogglePlatform(platform, checked) => {
                self.draft.toggle_platform(platform, checked);
                true
            }
            ContactFormMsg::SetNewsletter(checked) => {
                self.draft.set_newsletter(checked);
                true
            }
            ContactFormMsg::Attach(input) => {
                let Some(file) = input.files().and_then(|files| files.get(0)) else {
                    return false;
                };
                match check_attachment(file.size()) {
                    Ok(()) => notify.emit((NoticeKind::Success, format!("File \"{}\" selected", file.name()))),
                    Err(e) => {
                        input.set_value("");
                        notify.emit((NoticeKind::Error, e.to_string()));
                    }
                }
                false
            }
            ContactFormMsg::Submit => {
                if self.sending {
                    return false;
                }
                match self.draft.check_submission() {
                    Ok(()) => {
                        self.sending = true;
                        ctx.link().send_future(async {
                            TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                            ContactFormMsg::Sent
                        });
                    }
                    Err(e) => {
                        warn!("Contact form rejected: {:?}", e);
                        notify.emit((NoticeKind::Error, e.user_message().to_string()));
                    }
                }
                true
            }
            ContactFormMsg::Sent => {
                info!("Contact message sent");
                self.sending = false;
                self.draft.reset();
                notify.emit((NoticeKind::Success, SENT_MESSAGE.to_string()));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });
        let on_message = link.callback(|e: InputEvent| ContactFormMsg::Edit("message", input_value(&e)));
        let on_message_blur = link.callback(|_: FocusEvent| ContactFormMsg::Blur("message"));
        let on_newsletter = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactFormMsg::SetNewsletter(input.checked())
        });
        let on_attach = link.callback(|e: Event| ContactFormMsg::Attach(e.target_unchecked_into()));
        let budgets = budget_options(self.draft.value("projectType"));

        html! {
            <form class="contact-form" novalidate={true} {onsubmit}>
                <div class="form-row">
                    <div class="form-group">
                        <label for="name">{"Full Name *"}</label>
                        { self.view_input(ctx, "name", "text", "John Doe") }
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email Address *"}</label>
                        { self.view_input(ctx, "email", "email", "john@example.com") }
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="phone">{"Phone Number"}</label>
                        { self.view_input(ctx, "phone", "tel", "+1 (555) 123-4567") }
                    </div>
                    <div class="form-group">
                        <label for="company">{"Company"}</label>
                        { self.view_input(ctx, "company", "text", "Your company") }
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label for="projectType">{"Project Type *"}</label>
                        { self.view_select(ctx, "projectType", "Select project type", PROJECT_TYPES) }
                    </div>
                    <div class="form-group">
                        <label for="budget">{"Budget Range"}</label>
                        { self.view_select(ctx, "budget", "Select budget range", budgets) }
                    </div>
                    <div class="form-group">
                        <label for="timeline">{"Timeline"}</label>
                        { self.view_select(ctx, "timeline", "Select timeline", TIMELINES) }
                    </div>
                </div>

                <fieldset class="form-group platforms">
                    <legend>{"Platforms *"}</legend>
                    { for PLATFORMS.iter().map(|(value, label)| {
                        let value: &'static str = value;
                        let onchange = link.callback(move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            ContactFormMsg::TogglePlatform(value, input.checked())
                        });
                        html! {
                            <label class="checkbox-label">
                                <input
                                    type="checkbox"
                                    name="platform"
                                    value={value}
                                    checked={self.draft.has_platform(value)}
                                    {onchange}
                                />
                                { *label }
                            </label>
                        }
                    }) }
                </fieldset>

                <div class="form-group">
                    <label for="message">{"Project Details *"}</label>
                    <textarea
                        id="message"
                        name="message"
                        rows="6"
                        class={self.field_class("message")}
                        placeholder="Tell me about your app idea..."
                        value={self.draft.value("message").to_string()}
                        oninput={on_message}
                        onblur={on_message_blur}
                    />
                    { self.view_error("message") }
                </div>

                <div class="form-group">
                    <label for="attachment">{"Attachment (max 10MB)"}</label>
                    <input id="attachment" type="file" onchange={on_attach} />
                </div>

                <label class="checkbox-label">
                    <input
                        type="checkbox"
                        name="newsletter"
                        checked={self.draft.newsletter()}
                        onchange={on_newsletter}
                    />
                    {"Send me occasional updates about new apps"}
                </label>

                <button type="submit" class="btn btn-primary submit-btn" disabled={self.sending}>
                    if self.sending {
                        <i class="fas fa-spinner fa-spin"></i>{" Sending..."}
                    } else {
                        <i class="fas fa-paper-plane"></i>{" Send Message"}
                    }
                </button>
            </form>
        }
    }
}
