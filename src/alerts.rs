use std::rc::Rc;

use yew::prelude::*;

use crate::types::Alert;

pub const ALERT_TTL_MS: u32 = 5000;

#[derive(Default)]
pub struct AlertList {
    pub alerts: Vec<Alert>,
}

pub enum AlertAction {
    Push(Alert),
    Dismiss(u64),
}

impl Reducible for AlertList {
    type Action = AlertAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AlertAction::Push(alert) => {
                let mut alerts = self.alerts.clone();
                alerts.push(alert);
                Rc::new(Self { alerts })
            }
            // Dismissing an id that already expired is a no-op, so the
            // auto-removal timer and the manual dismiss button can race
            // freely.
            AlertAction::Dismiss(id) => Rc::new(Self {
                alerts: self
                    .alerts
                    .iter()
                    .filter(|alert| alert.id != id)
                    .cloned()
                    .collect(),
            }),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AlertStackProps {
    pub alerts: Vec<Alert>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(AlertStack)]
pub fn alert_stack(props: &AlertStackProps) -> Html {
    html! {
        <div id="alertas" class="fixed top-4 right-4 z-50 space-y-2">
            {
                props.alerts.iter().map(|alert| {
                    let onclick = {
                        let on_dismiss = props.on_dismiss.clone();
                        let id = alert.id;
                        Callback::from(move |_| on_dismiss.emit(id))
                    };
                    html! {
                        <div
                            key={alert.id.to_string()}
                            class={classes!("alert", format!("alert-{}", alert.kind.tag()))}
                        >
                            <span>{ &alert.message }</span>
                            <button
                                type="button"
                                class="ml-4 font-bold"
                                aria-label="Cerrar"
                                onclick={onclick}
                            >
                                { "×" }
                            </button>
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
    use crate::types::AlertKind;

    fn alert(id: u64) -> Alert {
        Alert::new(id, format!("mensaje {id}"), AlertKind::default())
    }

    #[test]
    fn push_appends_in_order() {
        let list = Rc::new(AlertList::default());
        let list = list.reduce(AlertAction::Push(alert(1)));
        let list = list.reduce(AlertAction::Push(alert(2)));
        let ids: Vec<u64> = list.alerts.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let list = Rc::new(AlertList::default());
        let list = list.reduce(AlertAction::Push(alert(1)));
        let list = list.reduce(AlertAction::Push(alert(2)));
        let list = list.reduce(AlertAction::Dismiss(1));
        assert_eq!(list.alerts.len(), 1);
        assert_eq!(list.alerts[0].id, 2);
    }

    #[test]
    fn dismissing_a_gone_alert_is_safe() {
        let list = Rc::new(AlertList::default());
        let list = list.reduce(AlertAction::Push(alert(1)));
        let list = list.reduce(AlertAction::Dismiss(1));
        // Simulates the auto-expiry timer firing after a manual dismiss.
        let list = list.reduce(AlertAction::Dismiss(1));
        assert!(list.alerts.is_empty());
    }
}
