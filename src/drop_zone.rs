use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{console, DragEvent, Event, File, FileReader, HtmlInputElement, ProgressEvent};
use yew::prelude::*;

/// Only files declaring an image media type get a thumbnail.
pub fn is_previewable(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Ticket counter deciding which in-flight read may publish its result.
/// Only the most recently begun read is current; a completion holding an
/// older ticket is ignored.
#[derive(Debug, Default)]
pub struct ReadGeneration {
    current: u64,
}

impl ReadGeneration {
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.current
    }
}

/// Keeps a reader and its handlers alive until one of them fires or the
/// read is superseded.
struct PendingRead {
    reader: FileReader,
    _onload: Closure<dyn FnMut(ProgressEvent)>,
    _onerror: Closure<dyn FnMut(ProgressEvent)>,
}

#[derive(Properties, PartialEq)]
pub struct DropZoneProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Photo intake zone. Dropped files are forwarded to the nested file
/// input so form submission sees them; image files additionally get an
/// inline data-URL thumbnail. Reads are tagged through [`ReadGeneration`]
/// so a stale completion never overwrites a newer preview, and starting a
/// new read detaches and aborts the previous one.
#[function_component(DropZone)]
pub fn drop_zone(props: &DropZoneProps) -> Html {
    let drag_over = use_state_eq(|| false);
    let preview = use_state(|| Option::<AttrValue>::None);
    let input_ref = use_node_ref();
    let generation = use_mut_ref(ReadGeneration::default);
    let pending_read = use_mut_ref(|| Option::<PendingRead>::None);

    let start_preview: Rc<dyn Fn(File)> = {
        let preview = preview.clone();
        let generation = generation.clone();
        let pending_read = pending_read.clone();
        Rc::new(move |file: File| {
            if !is_previewable(&file.type_()) {
                return;
            }

            let ticket = generation.borrow_mut().begin();
            if let Some(stale) = pending_read.borrow_mut().take() {
                stale.reader.set_onload(None);
                stale.reader.set_onerror(None);
                stale.reader.abort();
            }

            let Ok(reader) = FileReader::new() else {
                return;
            };

            let onload = {
                let preview = preview.clone();
                let generation = generation.clone();
                let pending_read = pending_read.clone();
                Closure::<dyn FnMut(ProgressEvent)>::new(move |event: ProgressEvent| {
                    // Stale completions must not touch the holder: it may
                    // already belong to a newer read.
                    if !generation.borrow().is_current(ticket) {
                        return;
                    }
                    pending_read.borrow_mut().take();
                    let Some(reader) = event
                        .target()
                        .and_then(|target| target.dyn_into::<FileReader>().ok())
                    else {
                        return;
                    };
                    let Some(data_url) = reader.result().ok().and_then(|v| v.as_string()) else {
                        return;
                    };
                    preview.set(Some(AttrValue::from(data_url)));
                })
            };
            reader.set_onload(Some(onload.as_ref().unchecked_ref()));

            let onerror = {
                let pending_read = pending_read.clone();
                Closure::<dyn FnMut(ProgressEvent)>::new(move |_event: ProgressEvent| {
                    pending_read.borrow_mut().take();
                    console::warn_1(&"photo preview read failed".into());
                })
            };
            reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));

            if reader.read_as_data_url(&file).is_err() {
                console::warn_1(&"photo preview read failed".into());
                return;
            }

            *pending_read.borrow_mut() = Some(PendingRead {
                reader,
                _onload: onload,
                _onerror: onerror,
            });
        })
    };

    let ondragover = {
        let drag_over = drag_over.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            drag_over.set(true);
        })
    };

    let ondragleave = {
        let drag_over = drag_over.clone();
        Callback::from(move |_: DragEvent| drag_over.set(false))
    };

    let ondrop = {
        let drag_over = drag_over.clone();
        let input_ref = input_ref.clone();
        let start_preview = start_preview.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            drag_over.set(false);

            let Some(files) = event.data_transfer().and_then(|transfer| transfer.files()) else {
                return;
            };
            if files.length() == 0 {
                return;
            }

            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.set_files(Some(&files));
            }
            if let Some(file) = files.get(0) {
                start_preview(file);
            }
        })
    };

    let onchange = {
        let start_preview = start_preview.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                    start_preview(file);
                }
            }
        })
    };

    html! {
        <div
            class={classes!(
                "drop-zone",
                (*drag_over).then_some("drag-over"),
                props.class.clone()
            )}
            ondragover={ondragover}
            ondragleave={ondragleave}
            ondrop={ondrop}
        >
            { for props.children.iter() }
            <input
                ref={input_ref}
                type="file"
                accept="image/*"
                class="hidden"
                onchange={onchange}
            />
            if let Some(src) = (*preview).clone() {
                <img
                    class="photo-preview w-32 h-32 object-cover rounded-xl mx-auto mt-3"
                    src={src}
                    alt="Vista previa de la foto"
                />
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_types_are_previewable() {
        assert!(is_previewable("image/png"));
        assert!(is_previewable("image/jpeg"));
        assert!(is_previewable("image/svg+xml"));
    }

    #[test]
    fn non_image_types_are_skipped() {
        assert!(!is_previewable("application/pdf"));
        assert!(!is_previewable("text/plain"));
        assert!(!is_previewable(""));
        // No sniffing: the declared type decides.
        assert!(!is_previewable("IMAGE/PNG"));
    }

    #[test]
    fn only_the_latest_read_is_current() {
        let mut generation = ReadGeneration::default();

        let first = generation.begin();
        assert!(generation.is_current(first));

        // A second read starts before the first one completes; the
        // first ticket must no longer publish.
        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn tickets_are_strictly_increasing() {
        let mut generation = ReadGeneration::default();
        let mut previous = generation.begin();
        for _ in 0..10 {
            let next = generation.begin();
            assert!(next > previous);
            previous = next;
        }
    }
}
