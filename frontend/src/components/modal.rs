use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Overlay closed by its close button or a click on the backdrop.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <style>
                {r#"
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        background: rgba(15, 23, 42, 0.6);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 9500;
                        padding: 20px;
                    }
                    .modal {
                        background: #fff;
                        border-radius: 16px;
                        width: 100%;
                        max-width: 520px;
                        max-height: 90vh;
                        overflow-y: auto;
                        padding: 28px;
                        box-shadow: 0 25px 60px rgba(0, 0, 0, 0.3);
                    }
                    .modal-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 20px;
                    }
                    .modal-close {
                        background: none;
                        border: none;
                        font-size: 26px;
                        cursor: pointer;
                        color: #64748b;
                    }
                "#}
            </style>
            <div class={classes!("modal", props.class.clone())} onclick={keep_open}>
                <div class="modal-header">
                    <h3>{ props.title.clone() }</h3>
                    <button class="modal-close" aria-label="Close" onclick={close}>{"×"}</button>
                </div>
                { for props.children.iter() }
            </div>
        </div>
    }
}
