use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub const NOTICE_LIFETIME_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "notice-success",
            NoticeKind::Error => "notice-error",
            NoticeKind::Info => "notice-info",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            NoticeKind::Success => "fas fa-check-circle",
            NoticeKind::Error => "fas fa-exclamation-circle",
            NoticeKind::Info => "fas fa-info-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

/// Handed down from the app shell to anything that wants to show a toast.
pub type Notify = Callback<(NoticeKind, String)>;

pub enum NoticeAction {
    Push(NoticeKind, String),
    Dismiss(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeBoard {
    next_id: u32,
    pub notices: Vec<Notice>,
}

impl Reducible for NoticeBoard {
    type Action = NoticeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut board = (*self).clone();
        match action {
            NoticeAction::Push(kind, message) => {
                board.notices.push(Notice {
                    id: board.next_id,
                    kind,
                    message,
                });
                board.next_id = board.next_id.wrapping_add(1);
            }
            NoticeAction::Dismiss(id) => board.notices.retain(|n| n.id != id),
        }
        Rc::new(board)
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    notice: Notice,
    on_dismiss: Callback<u32>,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    let id = props.notice.id;

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id: &u32| {
                let id = *id;
                let timeout = Timeout::new(NOTICE_LIFETIME_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            id,
        );
    }

    let close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("notice", props.notice.kind.class())} role="status">
            <i class={props.notice.kind.icon()}></i>
            <span class="notice-message">{ &props.notice.message }</span>
            <button class="notice-close" aria-label="Dismiss" onclick={close}>{"×"}</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeCenterProps {
    pub notices: Vec<Notice>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(NoticeCenter)]
pub fn notice_center(props: &NoticeCenterProps) -> Html {
    html! {
        <div class="notice-center">
            <style>
                {r#"
                    .notice-center {
                        position: fixed;
                        top: 90px;
                        right: 20px;
                        z-index: 10000;
                        display: flex;
                        flex-direction: column;
                        gap: 12px;
                        max-width: 360px;
                    }
                    @keyframes noticeSlideIn {
                        from { transform: translateX(120%); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    .notice {
                        display: flex;
                        align-items: center;
                        gap: 12px;
                        padding: 14px 18px;
                        border-radius: 10px;
                        color: #fff;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
                        animation: noticeSlideIn 0.3s ease-out forwards;
                    }
                    .notice-success { background: #10b981; }
                    .notice-error { background: #ef4444; }
                    .notice-info { background: #3b82f6; }
                    .notice-message { flex: 1; }
                    .notice-close {
                        background: none;
                        border: none;
                        color: inherit;
                        font-size: 20px;
                        cursor: pointer;
                    }
                "#}
            </style>
            { for props.notices.iter().map(|notice| html! {
                <Toast
                    key={notice.id}
                    notice={notice.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                />
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(board: Rc<NoticeBoard>, kind: NoticeKind, message: &str) -> Rc<NoticeBoard> {
        board.reduce(NoticeAction::Push(kind, message.to_string()))
    }

    #[test]
    fn notices_stack_in_order_with_fresh_ids() {
        let board = Rc::new(NoticeBoard::default());
        let board = push(board, NoticeKind::Info, "Item already in cart!");
        let board = push(board, NoticeKind::Error, "Your cart is empty!");

        assert_eq!(board.notices.len(), 2);
        assert_eq!(board.notices[0].message, "Item already in cart!");
        assert_eq!(board.notices[1].kind, NoticeKind::Error);
        assert_ne!(board.notices[0].id, board.notices[1].id);
    }

    #[test]
    fn dismiss_removes_only_that_notice() {
        let board = Rc::new(NoticeBoard::default());
        let board = push(board, NoticeKind::Success, "one");
        let board = push(board, NoticeKind::Success, "two");
        let first = board.notices[0].id;

        let board = board.reduce(NoticeAction::Dismiss(first));
        assert_eq!(board.notices.len(), 1);
        assert_eq!(board.notices[0].message, "two");

        let board = board.reduce(NoticeAction::Dismiss(first));
        assert_eq!(board.notices.len(), 1);
    }
}
