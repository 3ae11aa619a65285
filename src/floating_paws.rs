use yew::prelude::*;

pub const PAW_COUNT: usize = 5;
pub const PAW_GLYPHS: [&str; 5] = ["🐾", "🐕", "🐈", "🐦", "🐰"];
pub const PAW_MAX_DELAY_S: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingPaw {
    pub glyph: &'static str,
    pub left_vw: f64,
    pub top_vh: f64,
    pub delay_s: f64,
}

/// Ambient decoration: a handful of animated glyphs scattered over the
/// viewport. `rng` must yield values in `[0, 1)`.
pub fn spawn_paws(mut rng: impl FnMut() -> f64) -> Vec<FloatingPaw> {
    (0..PAW_COUNT)
        .map(|_| {
            let glyph_index = ((rng() * PAW_GLYPHS.len() as f64) as usize).min(PAW_GLYPHS.len() - 1);
            FloatingPaw {
                glyph: PAW_GLYPHS[glyph_index],
                left_vw: rng() * 100.0,
                top_vh: rng() * 100.0,
                delay_s: rng() * PAW_MAX_DELAY_S,
            }
        })
        .collect()
}

/// Spawned once at mount and never removed.
#[function_component(FloatingPaws)]
pub fn floating_paws() -> Html {
    let paws = use_state(|| spawn_paws(js_sys::Math::random));

    html! {
        <div class="pointer-events-none" aria-hidden="true">
            {
                paws.iter().map(|paw| {
                    html! {
                        <div
                            class="floating-paw"
                            style={format!(
                                "left: {:.2}vw; top: {:.2}vh; animation-delay: {:.2}s;",
                                paw.left_vw, paw.top_vh, paw.delay_s
                            )}
                        >
                            { paw.glyph }
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
    fn spawns_the_fixed_count() {
        let paws = spawn_paws(|| 0.0);
        assert_eq!(paws.len(), PAW_COUNT);
    }

    #[test]
    fn values_stay_in_range() {
        // Walk the unit interval deterministically.
        let mut next = 0.0_f64;
        let paws = spawn_paws(move || {
            next = (next + 0.37) % 1.0;
            next
        });

        for paw in &paws {
            assert!(PAW_GLYPHS.contains(&paw.glyph));
            assert!((0.0..100.0).contains(&paw.left_vw));
            assert!((0.0..100.0).contains(&paw.top_vh));
            assert!((0.0..PAW_MAX_DELAY_S).contains(&paw.delay_s));
        }
    }

    #[test]
    fn rng_at_upper_bound_keeps_glyph_index_valid() {
        let paws = spawn_paws(|| 0.999_999);
        assert_eq!(paws[0].glyph, PAW_GLYPHS[PAW_GLYPHS.len() - 1]);
    }
}
