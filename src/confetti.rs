use std::rc::Rc;

use yew::prelude::*;

pub const CONFETTI_COUNT: usize = 50;
pub const CONFETTI_LIFETIME_MS: u32 = 3000;
pub const CONFETTI_MAX_DELAY_S: f64 = 0.5;
pub const CONFETTI_COLORS: [&str; 5] = ["#ff6b6b", "#feca57", "#48dbfb", "#ff9ff3", "#54a0ff"];

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub id: u64,
    pub left_vw: f64,
    pub color: &'static str,
    pub delay_s: f64,
}

/// One burst of pieces with sequential ids starting at `first_id`.
/// `rng` must yield values in `[0, 1)`.
pub fn burst_pieces(first_id: u64, mut rng: impl FnMut() -> f64) -> Vec<ConfettiPiece> {
    (0..CONFETTI_COUNT)
        .map(|offset| {
            let color_index =
                ((rng() * CONFETTI_COLORS.len() as f64) as usize).min(CONFETTI_COLORS.len() - 1);
            ConfettiPiece {
                id: first_id + offset as u64,
                left_vw: rng() * 100.0,
                color: CONFETTI_COLORS[color_index],
                delay_s: rng() * CONFETTI_MAX_DELAY_S,
            }
        })
        .collect()
}

#[derive(Default)]
pub struct ConfettiState {
    pub pieces: Vec<ConfettiPiece>,
}

pub enum ConfettiAction {
    Burst(Vec<ConfettiPiece>),
    /// Expires one burst by its id range; other bursts keep animating.
    Expire {
        first_id: u64,
        count: usize,
    },
}

impl Reducible for ConfettiState {
    type Action = ConfettiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ConfettiAction::Burst(mut pieces) => {
                let mut all = self.pieces.clone();
                all.append(&mut pieces);
                Rc::new(Self { pieces: all })
            }
            ConfettiAction::Expire { first_id, count } => {
                let end = first_id + count as u64;
                Rc::new(Self {
                    pieces: self
                        .pieces
                        .iter()
                        .filter(|piece| piece.id < first_id || piece.id >= end)
                        .cloned()
                        .collect(),
                })
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfettiOverlayProps {
    pub pieces: Vec<ConfettiPiece>,
}

#[function_component(ConfettiOverlay)]
pub fn confetti_overlay(props: &ConfettiOverlayProps) -> Html {
    html! {
        <div class="pointer-events-none" aria-hidden="true">
            {
                props.pieces.iter().map(|piece| {
                    html! {
                        <div
                            key={piece.id.to_string()}
                            class="confetti"
                            style={format!(
                                "left: {:.2}vw; background: {}; animation-delay: {:.2}s;",
                                piece.left_vw, piece.color, piece.delay_s
                            )}
                        />
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_rng() -> impl FnMut() -> f64 {
        let mut next = 0.0_f64;
        move || {
            next = (next + 0.31) % 1.0;
            next
        }
    }

    #[test]
    fn burst_has_exactly_fifty_pieces() {
        let pieces = burst_pieces(0, fixed_rng());
        assert_eq!(pieces.len(), CONFETTI_COUNT);
    }

    #[test]
    fn pieces_draw_from_the_palette() {
        for piece in burst_pieces(0, fixed_rng()) {
            assert!(CONFETTI_COLORS.contains(&piece.color));
            assert!((0.0..100.0).contains(&piece.left_vw));
            assert!((0.0..CONFETTI_MAX_DELAY_S).contains(&piece.delay_s));
        }
    }

    #[test]
    fn expire_removes_only_its_own_burst() {
        let state = Rc::new(ConfettiState::default());
        let state = state.reduce(ConfettiAction::Burst(burst_pieces(0, fixed_rng())));
        let state = state.reduce(ConfettiAction::Burst(burst_pieces(
            CONFETTI_COUNT as u64,
            fixed_rng(),
        )));
        assert_eq!(state.pieces.len(), 2 * CONFETTI_COUNT);

        let state = state.reduce(ConfettiAction::Expire {
            first_id: 0,
            count: CONFETTI_COUNT,
        });
        assert_eq!(state.pieces.len(), CONFETTI_COUNT);
        assert!(state.pieces.iter().all(|p| p.id >= CONFETTI_COUNT as u64));

        // Expiring the same range again is a no-op.
        let state = state.reduce(ConfettiAction::Expire {
            first_id: 0,
            count: CONFETTI_COUNT,
        });
        assert_eq!(state.pieces.len(), CONFETTI_COUNT);
    }
}
