use web_sys::window;
use yew::prelude::*;

/// Pointer offsets are divided by this before any depth scaling.
pub const PARALLAX_DIVISOR: f64 = 50.0;
pub const PARALLAX_DEPTH_STEP: f64 = 0.5;

const LAYER_GLYPHS: [&str; 3] = ["🐾", "🐕", "🐈"];

/// Offset of the pointer from the viewport center, scaled down for
/// subtle movement.
pub fn pointer_offset(client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) -> (f64, f64) {
    (
        (client_x - viewport_w / 2.0) / PARALLAX_DIVISOR,
        (client_y - viewport_h / 2.0) / PARALLAX_DIVISOR,
    )
}

/// Inline style translating one layer by its index-derived depth.
pub fn layer_transform((x, y): (f64, f64), index: usize) -> String {
    let depth = (index as f64 + 1.0) * PARALLAX_DEPTH_STEP;
    format!(
        "transform: translate({:.2}px, {:.2}px);",
        x * depth,
        y * depth
    )
}

pub fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

#[derive(Properties, PartialEq)]
pub struct ParallaxLayersProps {
    pub offset: (f64, f64),
}

/// Decorative header layers that drift with the pointer. The offset is fed
/// in by the document-level mousemove listener in the app shell.
#[function_component(ParallaxLayers)]
pub fn parallax_layers(props: &ParallaxLayersProps) -> Html {
    html! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            {
                LAYER_GLYPHS.iter().enumerate().map(|(index, glyph)| {
                    html! {
                        <div
                            class="parallax-layer absolute inset-0 flex items-center justify-center text-8xl opacity-10"
                            style={layer_transform(props.offset, index)}
                        >
                            { *glyph }
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_has_zero_offset() {
        assert_eq!(pointer_offset(640.0, 360.0, 1280.0, 720.0), (0.0, 0.0));
    }

    #[test]
    fn offset_scales_with_distance_from_center() {
        let (x, y) = pointer_offset(1280.0, 720.0, 1280.0, 720.0);
        assert_eq!(x, 640.0 / PARALLAX_DIVISOR);
        assert_eq!(y, 360.0 / PARALLAX_DIVISOR);

        let (x, y) = pointer_offset(0.0, 0.0, 1280.0, 720.0);
        assert!(x < 0.0 && y < 0.0);
    }

    #[test]
    fn deeper_layers_move_further() {
        let offset = (10.0, -4.0);
        assert_eq!(layer_transform(offset, 0), "transform: translate(5.00px, -2.00px);");
        assert_eq!(layer_transform(offset, 1), "transform: translate(10.00px, -4.00px);");
        assert_eq!(layer_transform(offset, 2), "transform: translate(15.00px, -6.00px);");
    }
}
