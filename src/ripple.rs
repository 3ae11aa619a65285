use std::rc::Rc;

use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

pub const RIPPLE_LIFETIME_MS: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

/// Overlay sized to the larger control dimension, centered on the click
/// point in control-local coordinates.
pub fn ripple_geometry(
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
    width: f64,
    height: f64,
) -> RippleGeometry {
    let size = width.max(height);
    RippleGeometry {
        size,
        left: client_x - rect_left - size / 2.0,
        top: client_y - rect_top - size / 2.0,
    }
}

#[derive(Clone, PartialEq)]
struct Ripple {
    id: u64,
    geometry: RippleGeometry,
}

#[derive(Default)]
struct RippleState {
    ripples: Vec<Ripple>,
}

enum RippleAction {
    Spawn(Ripple),
    Clear(u64),
}

impl Reducible for RippleState {
    type Action = RippleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            RippleAction::Spawn(ripple) => {
                let mut ripples = self.ripples.clone();
                ripples.push(ripple);
                Rc::new(Self { ripples })
            }
            RippleAction::Clear(id) => Rc::new(Self {
                ripples: self
                    .ripples
                    .iter()
                    .filter(|r| r.id != id)
                    .cloned()
                    .collect(),
            }),
        }
    }
}

/// Click-ripple machinery shared by every control that hosts the effect
/// (action buttons, category buttons, the theme toggle). Returns the
/// trigger to merge into the control's `onclick` and the overlay spans to
/// render inside it. The hosting element must be positioned and clipped
/// (`relative overflow-hidden`) so the overlay stays within bounds.
#[hook]
pub fn use_ripples() -> (Callback<MouseEvent>, Html) {
    let state = use_reducer(RippleState::default);
    let ripple_seq = use_mut_ref(|| 0u64);

    let trigger = {
        let state = state.clone();
        let ripple_seq = ripple_seq.clone();
        Callback::from(move |event: MouseEvent| {
            let Some(target) = event
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
            else {
                return;
            };

            let rect = target.get_bounding_client_rect();
            let geometry = ripple_geometry(
                f64::from(event.client_x()),
                f64::from(event.client_y()),
                rect.left(),
                rect.top(),
                rect.width(),
                rect.height(),
            );

            let id = {
                let mut seq = ripple_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            state.dispatch(RippleAction::Spawn(Ripple { id, geometry }));

            let state = state.clone();
            Timeout::new(RIPPLE_LIFETIME_MS, move || {
                state.dispatch(RippleAction::Clear(id));
            })
            .forget();
        })
    };

    let overlay = state
        .ripples
        .iter()
        .map(|ripple| {
            let g = ripple.geometry;
            html! {
                <span
                    key={ripple.id.to_string()}
                    class="ripple"
                    style={format!(
                        "width: {:.0}px; height: {:.0}px; left: {:.1}px; top: {:.1}px;",
                        g.size, g.size, g.left, g.top
                    )}
                />
            }
        })
        .collect::<Html>();

    (trigger, overlay)
}

#[derive(Properties, PartialEq)]
pub struct RippleButtonProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RippleButton)]
pub fn ripple_button(props: &RippleButtonProps) -> Html {
    let (ripple, overlay) = use_ripples();

    let onclick = {
        let user_onclick = props.onclick.clone();
        Callback::from(move |event: MouseEvent| {
            ripple.emit(event.clone());
            user_onclick.emit(event);
        })
    };

    html! {
        <button
            type="button"
            class={classes!("relative", "overflow-hidden", props.class.clone())}
            onclick={onclick}
        >
            { for props.children.iter() }
            { overlay }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_uses_larger_dimension() {
        let g = ripple_geometry(0.0, 0.0, 0.0, 0.0, 120.0, 40.0);
        assert_eq!(g.size, 120.0);

        let g = ripple_geometry(0.0, 0.0, 0.0, 0.0, 40.0, 120.0);
        assert_eq!(g.size, 120.0);
    }

    #[test]
    fn ripple_centers_on_click_point() {
        // Click in the middle of a 100x50 control at (10, 20).
        let g = ripple_geometry(60.0, 45.0, 10.0, 20.0, 100.0, 50.0);
        assert_eq!(g.size, 100.0);
        assert_eq!(g.left, 0.0);
        assert_eq!(g.top, -25.0);
    }

    #[test]
    fn clear_of_unknown_id_is_noop() {
        let state = Rc::new(RippleState::default());
        let state = state.reduce(RippleAction::Spawn(Ripple {
            id: 1,
            geometry: ripple_geometry(0.0, 0.0, 0.0, 0.0, 10.0, 10.0),
        }));
        let state = state.reduce(RippleAction::Clear(99));
        assert_eq!(state.ripples.len(), 1);

        let state = state.reduce(RippleAction::Clear(1));
        assert!(state.ripples.is_empty());
    }
}
