use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{console, Navigator, ShareData};

use crate::types::PetReport;

pub const SHARE_TITLE: &str = "Reporte de Animal Perdido";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The native share sheet completed.
    Shared,
    /// The user dismissed the share sheet, or the call was rejected.
    Cancelled,
    /// No native share; the text landed on the clipboard instead.
    Copied,
    /// Neither path was usable.
    Unavailable,
}

pub fn share_text(report: &PetReport) -> String {
    format!(
        "🐾 {}\n📍 Ubicación: {}\n📞 Contacto: {}",
        report.name, report.location, report.contact
    )
}

fn native_share_available(navigator: &Navigator) -> bool {
    Reflect::get(navigator.as_ref(), &JsValue::from_str("share"))
        .map(|value| value.is_function())
        .unwrap_or(false)
}

/// Offers the report through the platform share sheet, falling back to a
/// clipboard copy. Cancellation is logged, never surfaced.
pub async fn share_report(text: &str) -> ShareOutcome {
    let Some(window) = web_sys::window() else {
        return ShareOutcome::Unavailable;
    };
    let navigator = window.navigator();

    if native_share_available(&navigator) {
        let data = ShareData::new();
        data.set_title(SHARE_TITLE);
        data.set_text(text);

        match JsFuture::from(navigator.share_with_data(&data)).await {
            Ok(_) => ShareOutcome::Shared,
            Err(_) => {
                console::log_1(&"Compartir cancelado".into());
                ShareOutcome::Cancelled
            }
        }
    } else {
        match JsFuture::from(navigator.clipboard().write_text(text)).await {
            Ok(_) => ShareOutcome::Copied,
            Err(err) => {
                console::error_1(&err);
                ShareOutcome::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    #[test]
    fn share_text_has_the_expected_shape() {
        let report = PetReport::new(
            "Luna",
            "Parque Central",
            "555-1234",
            Category::Perros,
        );
        assert_eq!(
            share_text(&report),
            "🐾 Luna\n📍 Ubicación: Parque Central\n📞 Contacto: 555-1234"
        );
    }

    #[test]
    fn share_text_is_three_lines() {
        let report = PetReport::new("Michi", "Av. Siempre Viva", "contacto@mail.com", Category::Gatos);
        assert_eq!(share_text(&report).lines().count(), 3);
    }
}
