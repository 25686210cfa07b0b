mod assistant;
mod dom;
mod logger;
mod models;
mod slug;
mod storage;
mod util;

use crate::assistant::FormAssistant;
use crate::logger::DiagLogger;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();

    let logger = DiagLogger::new();
    logger::install_global_observers(logger);

    // Wire the form behaviors once the document is ready. Scripts loaded as
    // modules usually run after parsing, but a plain `<script>` in the head
    // can still see the document mid-parse.
    match dom::document() {
        Some(doc) if doc.ready_state() == "loading" => {
            dom::listen(&doc, "DOMContentLoaded", move |_| {
                FormAssistant::install(logger);
            });
        }
        Some(_) => FormAssistant::install(logger),
        None => {}
    }
}
