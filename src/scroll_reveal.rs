use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of the element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that gains a `visible` class once it enters the viewport.
/// Reveal is one-directional: the element is unobserved after the first
/// intersection and the observer is disconnected on unmount.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let node_ref = use_node_ref();
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with(node_ref.clone(), move |node_ref| {
            let mut observer_holder = None;
            let mut callback_holder = None;

            if let Some(element) = node_ref.cast::<Element>() {
                let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                    move |entries: js_sys::Array, observer: IntersectionObserver| {
                        for entry in entries.iter() {
                            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                                continue;
                            };
                            if entry.is_intersecting() {
                                revealed.set(true);
                                observer.unobserve(&entry.target());
                            }
                        }
                    },
                );

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from(REVEAL_THRESHOLD));

                if let Ok(observer) = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    observer.observe(&element);
                    observer_holder = Some(observer);
                }
                callback_holder = Some(callback);
            }

            move || {
                if let Some(observer) = observer_holder {
                    observer.disconnect();
                }
                drop(callback_holder);
            }
        });
    }

    html! {
        <div
            ref={node_ref}
            class={classes!(
                "scroll-reveal",
                (*revealed).then_some("visible"),
                props.class.clone()
            )}
        >
            { for props.children.iter() }
        </div>
    }
}
