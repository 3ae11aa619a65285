use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::alerts::{AlertAction, AlertList, AlertStack, ALERT_TTL_MS};
use crate::category_picker::CategoryPicker;
use crate::confetti::{
    burst_pieces, ConfettiAction, ConfettiOverlay, ConfettiState, CONFETTI_COUNT,
    CONFETTI_LIFETIME_MS,
};
use crate::counters::AnimatedCounter;
use crate::drop_zone::DropZone;
use crate::floating_paws::FloatingPaws;
use crate::parallax::{pointer_offset, viewport_size, ParallaxLayers};
use crate::ripple::RippleButton;
use crate::scroll_reveal::ScrollReveal;
use crate::share::{share_report, share_text, ShareOutcome};
use crate::theme::ThemeToggle;
use crate::types::{Alert, AlertKind, Category, PetReport};

fn sample_reports() -> Vec<PetReport> {
    vec![
        PetReport::new("Luna", "Parque Central", "555-1234", Category::Perros),
        PetReport::new("Michi", "Av. Siempre Viva 742", "555-9876", Category::Gatos),
    ]
}

#[function_component(App)]
pub fn app() -> Html {
    let pointer = use_state_eq(|| (0.0, 0.0));
    let category = use_state_eq(|| Option::<Category>::None);
    let alerts = use_reducer(AlertList::default);
    let alert_seq = use_mut_ref(|| 0u64);
    let confetti = use_reducer(ConfettiState::default);
    let confetti_seq = use_mut_ref(|| 0u64);

    // Document-level parallax source; every layer derives from this one
    // offset.
    {
        let pointer = pointer.clone();
        use_effect_with((), move |_| {
            let document = gloo_utils::document();
            let listener = EventListener::new(&document, "mousemove", move |event| {
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    let (width, height) = viewport_size();
                    pointer.set(pointer_offset(
                        f64::from(mouse.client_x()),
                        f64::from(mouse.client_y()),
                        width,
                        height,
                    ));
                }
            });

            move || drop(listener)
        });
    }

    let push_alert = {
        let alerts = alerts.clone();
        let alert_seq = alert_seq.clone();
        Callback::from(move |(message, kind): (String, AlertKind)| {
            let id = {
                let mut seq = alert_seq.borrow_mut();
                *seq += 1;
                *seq
            };
            alerts.dispatch(AlertAction::Push(Alert::new(id, message, kind)));

            let alerts = alerts.clone();
            Timeout::new(ALERT_TTL_MS, move || {
                alerts.dispatch(AlertAction::Dismiss(id));
            })
            .forget();
        })
    };

    let on_dismiss = {
        let alerts = alerts.clone();
        Callback::from(move |id: u64| alerts.dispatch(AlertAction::Dismiss(id)))
    };

    let on_select_category = {
        let category = category.clone();
        Callback::from(move |selected: Category| category.set(Some(selected)))
    };

    // Confetti bursts accumulate; each one expires only its own pieces.
    let celebrate = {
        let confetti = confetti.clone();
        let confetti_seq = confetti_seq.clone();
        let push_alert = push_alert.clone();
        Callback::from(move |_: MouseEvent| {
            let first_id = {
                let mut seq = confetti_seq.borrow_mut();
                let id = *seq;
                *seq += CONFETTI_COUNT as u64;
                id
            };
            confetti.dispatch(ConfettiAction::Burst(burst_pieces(
                first_id,
                js_sys::Math::random,
            )));

            let confetti = confetti.clone();
            Timeout::new(CONFETTI_LIFETIME_MS, move || {
                confetti.dispatch(ConfettiAction::Expire {
                    first_id,
                    count: CONFETTI_COUNT,
                });
            })
            .forget();

            push_alert.emit((
                "¡Qué alegría! Otra mascota de vuelta en casa 🎉".to_string(),
                AlertKind::Success,
            ));
        })
    };

    let on_share = {
        let push_alert = push_alert.clone();
        Callback::from(move |report: PetReport| {
            let push_alert = push_alert.clone();
            spawn_local(async move {
                if share_report(&share_text(&report)).await == ShareOutcome::Copied {
                    push_alert.emit((
                        "Información copiada al portapapeles 📋".to_string(),
                        AlertKind::Success,
                    ));
                }
            });
        })
    };

    let on_submit = {
        let push_alert = push_alert.clone();
        Callback::from(move |_: MouseEvent| {
            push_alert.emit(("Reporte publicado 🐾".to_string(), AlertKind::Success));
        })
    };

    html! {
        <>
            <header class="relative bg-amber-50 dark:bg-gray-900 py-16 text-center">
                <ParallaxLayers offset={*pointer} />
                <div class="relative z-10">
                    <div class="flex justify-end px-6">
                        <ThemeToggle />
                    </div>
                    <h1 class="text-4xl font-bold">{ "🐾 Animales Perdidos" }</h1>
                    <p class="mt-2 text-lg">{ "Ayudemos a cada mascota a volver a casa" }</p>
                    <div class="mt-8 flex justify-center gap-12">
                        <div>
                            <AnimatedCounter target={120} class="text-3xl font-bold" />
                            <p class="text-sm">{ "Reportes" }</p>
                        </div>
                        <div>
                            <AnimatedCounter target={87} class="text-3xl font-bold" />
                            <p class="text-sm">{ "Encontrados" }</p>
                        </div>
                        <div>
                            <AnimatedCounter target={54} class="text-3xl font-bold" />
                            <p class="text-sm">{ "Reunidos" }</p>
                        </div>
                    </div>
                </div>
            </header>

            <main class="max-w-3xl mx-auto px-4 py-12 space-y-16">
                <ScrollReveal>
                    <section aria-labelledby="reportar">
                        <h2 id="reportar" class="text-2xl font-semibold mb-4">
                            { "Reportar una mascota" }
                        </h2>
                        <DropZone class="border-2 border-dashed rounded-xl p-8 text-center">
                            <p>{ "Arrastra una foto aquí o usa el selector" }</p>
                        </DropZone>
                        <div class="mt-4">
                            <CategoryPicker
                                selected={*category}
                                on_select={on_select_category}
                            />
                        </div>
                        <RippleButton
                            class={classes!("btn-huella", "mt-6", "px-6", "py-3", "rounded-full")}
                            onclick={on_submit}
                        >
                            { "Publicar reporte" }
                        </RippleButton>
                    </section>
                </ScrollReveal>

                <ScrollReveal>
                    <section aria-labelledby="recientes">
                        <h2 id="recientes" class="text-2xl font-semibold mb-4">
                            { "Reportes recientes" }
                        </h2>
                        <div class="space-y-4">
                            {
                                sample_reports().into_iter().map(|report| {
                                    let share = {
                                        let on_share = on_share.clone();
                                        let report = report.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            on_share.emit(report.clone());
                                        })
                                    };
                                    html! {
                                        <div class="rounded-xl border p-4 flex items-center justify-between">
                                            <div>
                                                <p class="font-semibold">{ &report.name }</p>
                                                <p class="text-sm">
                                                    { format!("📍 {}", report.location) }
                                                </p>
                                            </div>
                                            <div class="flex gap-2">
                                                <RippleButton
                                                    class={classes!("btn-huella-outline", "px-4", "py-2", "rounded-full")}
                                                    onclick={share}
                                                >
                                                    { "Compartir" }
                                                </RippleButton>
                                                <RippleButton
                                                    class={classes!("btn-huella", "px-4", "py-2", "rounded-full")}
                                                    onclick={celebrate.clone()}
                                                >
                                                    { "¡Lo encontré!" }
                                                </RippleButton>
                                            </div>
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    </section>
                </ScrollReveal>
            </main>

            <AlertStack alerts={alerts.alerts.clone()} on_dismiss={on_dismiss} />
            <ConfettiOverlay pieces={confetti.pieces.clone()} />
            <FloatingPaws />
        </>
    }
}
