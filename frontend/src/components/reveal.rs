use js_sys::Array;
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_MARGIN: &str = "0px 0px -50px 0px";
const LAZY_MARGIN: &str = "0px";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Calls `on_visible` the first time `element` intersects, then stops watching.
fn observe_once(
    element: &Element,
    root_margin: &str,
    on_visible: impl Fn() + 'static,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback = ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
        let intersecting = entries
            .iter()
            .any(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
        if intersecting {
            on_visible();
            observer.disconnect();
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(e) => {
            warn!("IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

#[hook]
fn use_first_intersection(node: NodeRef, root_margin: &'static str) -> bool {
    let seen = use_state(|| false);
    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let watch = match node.cast::<Element>() {
                    Some(element) => {
                        let setter = seen.setter();
                        let watch = observe_once(&element, root_margin, move || setter.set(true));
                        // Nothing to wait for without an observer.
                        if watch.is_none() {
                            seen.set(true);
                        }
                        watch
                    }
                    None => None,
                };
                move || {
                    if let Some((observer, _callback)) = watch {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }
    *seen
}

/// True once the referenced element has scrolled into view. Never goes back to false.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    use_first_intersection(node, REVEAL_MARGIN)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    html! {
        <div ref={node} class={classes!("reveal", visible.then(|| "revealed"), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Leaves `src` unset until the image first comes on screen.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let node = use_node_ref();
    let loaded = use_lazy(node.clone());

    html! {
        <img
            ref={node}
            class={classes!("lazy", loaded.then(|| "loaded"), props.class.clone())}
            src={loaded.then(|| props.src.clone())}
            alt={props.alt.clone()}
        />
    }
}

#[hook]
fn use_lazy(node: NodeRef) -> bool {
    use_first_intersection(node, LAZY_MARGIN)
}
