use crate::dom;
use crate::logger::DiagLogger;
use crate::models::{CategoryEditTarget, TagEditTarget};
use crate::slug::derive_slug;
use crate::util::truncate_chars;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};

const DELETE_PROMPT: &str =
    "Are you sure you want to delete this item? This action cannot be undone.";

/// Meta descriptions are capped for search-result snippets.
const META_DESCRIPTION_MAX: usize = 160;

/// Page controller: locates known admin form fields and attaches behavior.
///
/// Every behavior is optional; if its markup is absent on the current page the
/// wiring is silently skipped. Behaviors are wired independently so a fault in
/// one cannot keep the others from registering.
pub(crate) struct FormAssistant {
    logger: DiagLogger,
}

impl FormAssistant {
    pub(crate) fn install(logger: DiagLogger) {
        let assistant = Self { logger };

        assistant.guarded("slug deriver", Self::wire_slug_deriver);
        assistant.guarded("meta prefill", Self::wire_meta_prefill);
        assistant.guarded("delete confirmation", Self::wire_delete_gate);
        assistant.guarded("edit modals", Self::wire_edit_modals);
        assistant.guarded("form validation", Self::wire_form_validation);
        assistant.guarded("publish badge", Self::wire_publish_badge);

        logger.info("admin form assistant initialized");
    }

    /// Failure boundary around one behavior's setup.
    fn guarded(&self, name: &str, wire: fn(&Self) -> Result<(), JsValue>) {
        match wire(self) {
            Ok(()) => self.logger.debug(&format!("{name}: wired")),
            Err(e) => self.logger.error(&format!("{name}: setup failed: {e:?}")),
        }
    }

    /// Keep the slug field in sync with the title until the user claims it.
    ///
    /// The edit flag lives here, not in the markup; once the user types into
    /// the slug field directly, derivation stays off for the page lifetime.
    fn wire_slug_deriver(&self) -> Result<(), JsValue> {
        let (Some(title), Some(slug)) = (dom::input_by_id("title"), dom::input_by_id("slug"))
        else {
            return Ok(());
        };

        let edited = Rc::new(Cell::new(false));

        {
            let edited = Rc::clone(&edited);
            dom::listen(&slug, "input", move |_| edited.set(true));
        }

        let title_field = title.clone();
        dom::listen(&title, "input", move |_| {
            if edited.get() {
                return;
            }
            slug.set_value(&derive_slug(&title_field.value()));
        });

        Ok(())
    }

    /// Copy title/summary into the meta fields when those are still empty.
    ///
    /// Bound to `change` (commit), not `input`, so half-typed titles never
    /// land in the meta fields. Re-firing against a populated target is a
    /// no-op.
    fn wire_meta_prefill(&self) -> Result<(), JsValue> {
        if let Some(title) = dom::input_by_id("title") {
            if dom::element_by_id("meta_title").is_some() {
                let title_field = title.clone();
                dom::listen(&title, "change", move |_| {
                    let current = dom::field_value("meta_title").unwrap_or_default();
                    if current.is_empty() {
                        dom::set_field_value("meta_title", &title_field.value());
                    }
                });
            }
        }

        if let Some(summary) = dom::element_by_id("summary") {
            if dom::element_by_id("meta_description").is_some() {
                dom::listen(&summary, "change", move |_| {
                    let current = dom::field_value("meta_description").unwrap_or_default();
                    if !current.is_empty() {
                        return;
                    }
                    if let Some(text) = dom::field_value("summary") {
                        dom::set_field_value(
                            "meta_description",
                            &truncate_chars(&text, META_DESCRIPTION_MAX),
                        );
                    }
                });
            }
        }

        Ok(())
    }

    /// Delegated click gate for destructive actions.
    ///
    /// Delegation from the body covers delete buttons added after load.
    fn wire_delete_gate(&self) -> Result<(), JsValue> {
        let body = dom::document()
            .and_then(|d| d.body())
            .ok_or_else(|| JsValue::from_str("document body missing"))?;

        let logger = self.logger;
        dom::listen(&body, "click", move |ev| {
            if dom::closest_from_event(&ev, ".delete-confirm").is_none() {
                return;
            }

            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message(DELETE_PROMPT).ok())
                .unwrap_or(false);

            if !confirmed {
                ev.prevent_default();
                ev.stop_propagation();
                logger.debug("delete cancelled by user");
            }
        });

        Ok(())
    }

    /// Copy data attributes from category/tag edit triggers into the modal
    /// fields. Each target field is presence-checked on its own, so partial
    /// modal markup degrades to writing only the fields that exist.
    fn wire_edit_modals(&self) -> Result<(), JsValue> {
        let body = dom::document()
            .and_then(|d| d.body())
            .ok_or_else(|| JsValue::from_str("document body missing"))?;

        dom::listen(&body, "click", move |ev| {
            if let Some(btn) = dom::closest_from_event(&ev, ".edit-category-btn") {
                let target = CategoryEditTarget::from_attrs(
                    btn.get_attribute("data-category-id"),
                    btn.get_attribute("data-category-name"),
                    btn.get_attribute("data-category-desc"),
                );
                dom::set_field_value("edit-category-id", &target.id);
                dom::set_field_value("edit-category-name", &target.name);
                dom::set_field_value("edit-category-description", &target.description);
                return;
            }

            if let Some(btn) = dom::closest_from_event(&ev, ".edit-tag-btn") {
                let target = TagEditTarget::from_attrs(
                    btn.get_attribute("data-tag-id"),
                    btn.get_attribute("data-tag-name"),
                );
                dom::set_field_value("edit-tag-id", &target.id);
                dom::set_field_value("edit-tag-name", &target.name);
            }
        });

        Ok(())
    }

    /// Block submission of `.needs-validation` forms that fail native
    /// constraint validation, and flag them so validation styling shows.
    fn wire_form_validation(&self) -> Result<(), JsValue> {
        let doc = dom::document().ok_or_else(|| JsValue::from_str("document missing"))?;

        dom::listen(&doc, "submit", move |ev| {
            let Some(target) = ev.target() else {
                return;
            };
            let Ok(form) = target.dyn_into::<web_sys::HtmlFormElement>() else {
                return;
            };
            if !form.class_list().contains("needs-validation") {
                return;
            }

            if !form.check_validity() {
                ev.prevent_default();
                ev.stop_propagation();
            }
            let _ = form.class_list().add_1("was-validated");
        });

        Ok(())
    }

    /// Mirror the `published` checkbox onto the status badge.
    fn wire_publish_badge(&self) -> Result<(), JsValue> {
        let (Some(toggle), Some(status)) = (
            dom::input_by_id("published"),
            dom::element_by_id("publish-status"),
        ) else {
            return Ok(());
        };

        let checkbox = toggle.clone();
        dom::listen(&toggle, "change", move |_| {
            let (text, add, remove) = publish_badge(checkbox.checked());
            status.set_text_content(Some(text));
            let classes = status.class_list();
            let _ = classes.remove_1(remove);
            let _ = classes.add_1(add);
        });

        Ok(())
    }
}

/// Badge (text, class to add, class to remove) for a publish state.
pub(crate) fn publish_badge(published: bool) -> (&'static str, &'static str, &'static str) {
    if published {
        ("Published", "badge-success", "badge-secondary")
    } else {
        ("Draft", "badge-secondary", "badge-success")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_badge_published() {
        assert_eq!(
            publish_badge(true),
            ("Published", "badge-success", "badge-secondary")
        );
    }

    #[test]
    fn test_publish_badge_draft() {
        assert_eq!(
            publish_badge(false),
            ("Draft", "badge-secondary", "badge-success")
        );
    }
}
