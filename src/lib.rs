mod alerts;
mod app;
mod category_picker;
mod confetti;
mod counters;
mod drop_zone;
mod floating_paws;
mod parallax;
mod ripple;
mod scroll_reveal;
mod share;
mod theme;
mod types;

use app::App;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
