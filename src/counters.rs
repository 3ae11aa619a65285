use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Interval;
use yew::prelude::*;

pub const COUNTER_DURATION_MS: u32 = 2000;
pub const COUNTER_TICK_MS: u32 = 16;

/// Fixed-interval interpolation from zero up to a target. Values round
/// down until the final tick, which snaps exactly to the target.
pub struct CounterAnimation {
    target: u32,
    step: f64,
    current: f64,
}

impl CounterAnimation {
    pub fn new(target: u32) -> Self {
        let ticks = f64::from(COUNTER_DURATION_MS / COUNTER_TICK_MS);
        Self {
            target,
            step: f64::from(target) / ticks,
            current: 0.0,
        }
    }

    /// Advances one tick and returns the value to display plus whether
    /// the animation has completed.
    pub fn tick(&mut self) -> (u32, bool) {
        self.current += self.step;
        if self.current >= f64::from(self.target) {
            (self.target, true)
        } else {
            (self.current as u32, false)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub target: u32,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let displayed = use_state_eq(|| 0u32);

    {
        let displayed = displayed.clone();
        use_effect_with(props.target, move |&target| {
            let mut animation = CounterAnimation::new(target);
            let handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

            let running = handle.clone();
            let interval = Interval::new(COUNTER_TICK_MS, move || {
                let (value, done) = animation.tick();
                displayed.set(value);
                if done {
                    running.borrow_mut().take();
                }
            });
            *handle.borrow_mut() = Some(interval);

            move || {
                handle.borrow_mut().take();
            }
        });
    }

    html! {
        <span class={props.class.clone()}>{ *displayed }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(target: u32) -> Vec<u32> {
        let mut animation = CounterAnimation::new(target);
        let mut values = Vec::new();
        loop {
            let (value, done) = animation.tick();
            values.push(value);
            if done {
                break;
            }
            assert!(values.len() < 10_000, "animation never completed");
        }
        values
    }

    #[test]
    fn finishes_exactly_on_target() {
        for target in [0, 1, 7, 250, 1234] {
            let values = run_to_completion(target);
            assert_eq!(*values.last().unwrap(), target);
        }
    }

    #[test]
    fn displayed_values_never_decrease() {
        let values = run_to_completion(987);
        for pair in values.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
    }

    #[test]
    fn zero_target_completes_immediately() {
        let mut animation = CounterAnimation::new(0);
        assert_eq!(animation.tick(), (0, true));
    }

    #[test]
    fn runs_for_the_configured_duration() {
        let ticks = (COUNTER_DURATION_MS / COUNTER_TICK_MS) as usize;
        let values = run_to_completion(500);
        // All intermediate values are floored, so the run takes the full
        // tick budget, give or take float accumulation on the last step.
        assert!(values.len() >= ticks - 1 && values.len() <= ticks + 1);
    }
}
