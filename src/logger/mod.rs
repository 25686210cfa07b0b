use crate::dom;
use crate::models::ErrorRecord;
use crate::storage::record_error;
use crate::util::{now_iso, page_url};
use wasm_bindgen::JsValue;

/// Leveled diagnostic logger for the admin page.
///
/// One instance is constructed at startup and handed to each behavior; there
/// is no ambient global logging state. `error` additionally appends to the
/// session-scoped error trail so failures survive a page reload within the
/// same browser session.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DiagLogger;

impl DiagLogger {
    pub(crate) fn new() -> Self {
        Self
    }

    fn line(level: &str, msg: &str) -> JsValue {
        JsValue::from_str(&format!("[{}] [{level}] {msg}", now_iso()))
    }

    pub(crate) fn debug(&self, msg: &str) {
        web_sys::console::debug_1(&Self::line("DEBUG", msg));
    }

    pub(crate) fn info(&self, msg: &str) {
        web_sys::console::info_1(&Self::line("INFO", msg));
    }

    pub(crate) fn warn(&self, msg: &str) {
        web_sys::console::warn_1(&Self::line("WARN", msg));
    }

    pub(crate) fn error(&self, msg: &str) {
        web_sys::console::error_1(&Self::line("ERROR", msg));
        record_error(ErrorRecord {
            timestamp: now_iso(),
            message: msg.to_string(),
            url: page_url(),
        });
    }
}

/// Log uncaught exceptions and page lifecycle transitions.
///
/// The `error` listener observes only; default browser error surfacing still
/// runs afterwards.
pub(crate) fn install_global_observers(logger: DiagLogger) {
    let Some(win) = web_sys::window() else {
        return;
    };

    dom::listen(&win, "error", move |ev| {
        use wasm_bindgen::JsCast;
        let Some(ev) = ev.dyn_ref::<web_sys::ErrorEvent>() else {
            return;
        };
        let stack = js_sys::Reflect::get(&ev.error(), &JsValue::from_str("stack"))
            .ok()
            .and_then(|v| v.as_string());
        match stack {
            Some(stack) => logger.error(&format!("uncaught: {}\n{stack}", ev.message())),
            None => logger.error(&format!("uncaught: {}", ev.message())),
        }
    });

    if let Some(doc) = win.document() {
        let doc2 = doc.clone();
        dom::listen(&doc, "visibilitychange", move |_| {
            if doc2.hidden() {
                logger.info("page hidden");
            } else {
                logger.info("page visible");
            }
        });
    }

    dom::listen(&win, "online", move |_| {
        logger.info("connectivity restored");
    });

    dom::listen(&win, "offline", move |_| {
        logger.warn("connectivity lost");
    });

    dom::listen(&win, "beforeunload", move |_| {
        logger.info("leaving page");
    });
}
