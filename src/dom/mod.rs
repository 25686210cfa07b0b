use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

pub(crate) fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

pub(crate) fn element_by_id(id: &str) -> Option<web_sys::Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

pub(crate) fn input_by_id(id: &str) -> Option<web_sys::HtmlInputElement> {
    element_by_id(id).and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok())
}

/// Read the value of an `<input>` or `<textarea>` by id.
pub(crate) fn field_value(id: &str) -> Option<String> {
    let el = element_by_id(id)?;
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return Some(area.value());
    }
    None
}

/// Write the value of an `<input>` or `<textarea>` by id.
///
/// Returns false when the element is missing or not a form field, so callers
/// can skip behaviors whose markup is absent.
pub(crate) fn set_field_value(id: &str, value: &str) -> bool {
    let Some(el) = element_by_id(id) else {
        return false;
    };
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        input.set_value(value);
        return true;
    }
    if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.set_value(value);
        return true;
    }
    false
}

/// Attach a listener for the page lifetime.
///
/// The closure is intentionally leaked: listeners installed at page setup are
/// never removed before the page itself goes away.
pub(crate) fn listen(
    target: &web_sys::EventTarget,
    event_type: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) {
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(event_type, cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Walk up from an event's target to the nearest ancestor matching `selector`.
pub(crate) fn closest_from_event(ev: &web_sys::Event, selector: &str) -> Option<web_sys::Element> {
    let target = ev.target()?;
    let el = target.dyn_into::<web_sys::Element>().ok()?;
    el.closest(selector).ok().flatten()
}
