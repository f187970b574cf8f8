use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::dom;
use crate::site::scroll::back_to_top_visible;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state(|| back_to_top_visible(dom::scroll_y()));

    {
        let visible = visible.clone();
        use_event_with_window("scroll", move |_: Event| {
            visible.set(back_to_top_visible(dom::scroll_y()));
        });
    }

    html! {
        <button
            class={classes!("back-to-top", (*visible).then(|| "visible"))}
            aria-label="Back to top"
            onclick={|_: MouseEvent| dom::scroll_to_top()}
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
