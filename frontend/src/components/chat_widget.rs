use gloo_timers::future::TimeoutFuture;
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;

use crate::chat::responder::{QuickReply, Responder, QUICK_REPLY_DELAY_MS};
use crate::chat::session::ChatSession;

pub enum ChatWidgetMsg {
    Toggle,
    Close,
    SetInput(String),
    Submit,
    UseQuickReply(QuickReply),
    Reply(&'static str),
}

pub struct ChatWidget {
    open: bool,
    input: String,
    session: ChatSession,
    responder: Responder<SmallRng>,
    focus_pending: bool,
    input_ref: NodeRef,
    messages_ref: NodeRef,
}

impl ChatWidget {
    fn reply_later(ctx: &Context<Self>, reply: &'static str, delay_ms: u32) {
        ctx.link().send_future(async move {
            TimeoutFuture::new(delay_ms).await;
            ChatWidgetMsg::Reply(reply)
        });
    }
}

impl Component for ChatWidget {
    type Message = ChatWidgetMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            open: false,
            input: String::new(),
            session: ChatSession::default(),
            responder: Responder::new(SmallRng::from_entropy()),
            focus_pending: false,
            input_ref: NodeRef::default(),
            messages_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ChatWidgetMsg::Toggle => {
                self.open = !self.open;
                self.focus_pending = self.open;
                true
            }
            ChatWidgetMsg::Close => {
                self.open = false;
                true
            }
            ChatWidgetMsg::SetInput(value) => {
                self.input = value;
                true
            }
            ChatWidgetMsg::Submit => {
                let Some(text) = self.session.submit(&self.input) else {
                    return false;
                };
                self.input.clear();
                let reply = self.responder.reply(&text);
                let delay = self.responder.typing_delay_ms();
                debug!("Chat reply in {}ms", delay);
                Self::reply_later(ctx, reply, delay);
                true
            }
            ChatWidgetMsg::UseQuickReply(quick) => {
                self.session.use_quick_reply(quick.message());
                Self::reply_later(ctx, quick.response(), QUICK_REPLY_DELAY_MS);
                true
            }
            ChatWidgetMsg::Reply(text) => {
                self.session.deliver_reply(text);
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if let Some(list) = self.messages_ref.cast::<Element>() {
            list.set_scroll_top(list.scroll_height());
        }
        if self.focus_pending {
            self.focus_pending = false;
            if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
                let _ = input.focus();
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let toggle = link.callback(|_: MouseEvent| ChatWidgetMsg::Toggle);
        let close = link.callback(|_: MouseEvent| ChatWidgetMsg::Close);
        let oninput = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ChatWidgetMsg::SetInput(input.value())
        });
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ChatWidgetMsg::Submit
        });

        html! {
            <div class={classes!("chat-widget", self.open.then(|| "open"))}>
                <style>
                    {r#"
                        .chat-widget {
                            position: fixed;
                            bottom: 24px;
                            right: 24px;
                            z-index: 9000;
                        }
                        .chat-toggle {
                            width: 60px;
                            height: 60px;
                            border-radius: 50%;
                            border: none;
                            background: linear-gradient(135deg, #6366f1, #8b5cf6);
                            color: #fff;
                            font-size: 24px;
                            cursor: pointer;
                            box-shadow: 0 10px 25px rgba(99, 102, 241, 0.4);
                        }
                        .chat-window {
                            position: absolute;
                            bottom: 76px;
                            right: 0;
                            width: 340px;
                            max-height: 480px;
                            display: flex;
                            flex-direction: column;
                            background: #fff;
                            border-radius: 16px;
                            box-shadow: 0 20px 50px rgba(0, 0, 0, 0.2);
                            overflow: hidden;
                        }
                        .chat-header {
                            display: flex;
                            justify-content: space-between;
                            align-items: center;
                            padding: 14px 18px;
                            background: #6366f1;
                            color: #fff;
                        }
                        .chat-header button {
                            background: none;
                            border: none;
                            color: inherit;
                            font-size: 20px;
                            cursor: pointer;
                        }
                        .chat-messages {
                            flex: 1;
                            overflow-y: auto;
                            padding: 16px;
                            display: flex;
                            flex-direction: column;
                            gap: 10px;
                        }
                        .chat-message {
                            max-width: 80%;
                            padding: 10px 14px;
                            border-radius: 14px;
                            font-size: 14px;
                        }
                        .chat-message.user {
                            align-self: flex-end;
                            background: #6366f1;
                            color: #fff;
                        }
                        .chat-message.bot {
                            align-self: flex-start;
                            background: #f1f5f9;
                            color: #1e293b;
                        }
                        .chat-time {
                            display: block;
                            font-size: 11px;
                            opacity: 0.6;
                            margin-top: 4px;
                        }
                        .typing span {
                            display: inline-block;
                            width: 6px;
                            height: 6px;
                            margin: 0 2px;
                            border-radius: 50%;
                            background: #94a3b8;
                            animation: typingDot 1.2s infinite ease-in-out;
                        }
                        .typing span:nth-child(2) { animation-delay: 0.2s; }
                        .typing span:nth-child(3) { animation-delay: 0.4s; }
                        @keyframes typingDot {
                            0%, 80%, 100% { transform: scale(0.6); opacity: 0.4; }
                            40% { transform: scale(1); opacity: 1; }
                        }
                        .quick-replies {
                            display: flex;
                            flex-wrap: wrap;
                            gap: 8px;
                            padding: 0 16px 12px;
                        }
                        .quick-reply {
                            border: 1px solid #6366f1;
                            background: none;
                            color: #6366f1;
                            border-radius: 999px;
                            padding: 6px 12px;
                            font-size: 13px;
                            cursor: pointer;
                        }
                        .chat-input {
                            display: flex;
                            border-top: 1px solid #e2e8f0;
                        }
                        .chat-input input {
                            flex: 1;
                            border: none;
                            padding: 14px;
                            outline: none;
                        }
                        .chat-input button {
                            border: none;
                            background: none;
                            color: #6366f1;
                            padding: 0 16px;
                            cursor: pointer;
                        }
                    "#}
                </style>

                if self.open {
                    <div class="chat-window">
                        <div class="chat-header">
                            <span>{"Chat with Jitendra"}</span>
                            <button aria-label="Close chat" onclick={close}>{"×"}</button>
                        </div>
                        <div class="chat-messages" ref={self.messages_ref.clone()}>
                            { for self.session.messages().iter().map(|message| html! {
                                <div class={classes!("chat-message", message.sender.class())}>
                                    { &message.text }
                                    <span class="chat-time">{ message.time_label() }</span>
                                </div>
                            }) }
                            if self.session.is_typing() {
                                <div class="chat-message bot typing">
                                    <span></span><span></span><span></span>
                                </div>
                            }
                        </div>
                        if self.session.quick_replies_visible() {
                            <div class="quick-replies">
                                { for QuickReply::ALL.iter().map(|quick| {
                                    let quick = *quick;
                                    let onclick = link.callback(move |_: MouseEvent| ChatWidgetMsg::UseQuickReply(quick));
                                    html! {
                                        <button class="quick-reply" {onclick}>{ quick.message() }</button>
                                    }
                                }) }
                            </div>
                        }
                        <form class="chat-input" {onsubmit}>
                            <input
                                ref={self.input_ref.clone()}
                                type="text"
                                placeholder="Type your message..."
                                value={self.input.clone()}
                                {oninput}
                            />
                            <button type="submit" aria-label="Send"><i class="fas fa-paper-plane"></i></button>
                        </form>
                    </div>
                }

                <button class="chat-toggle" aria-label="Open chat" onclick={toggle}>
                    if self.open {
                        <i class="fas fa-times"></i>
                    } else {
                        <i class="fas fa-comments"></i>
                    }
                </button>
            </div>
        }
    }
}
