//! Validates the contact form on submit and shows inline feedback.

use storefront_core::{ContactSubmission, FormFeedback};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use crate::{
    dom::{listen, DomError},
    markup::{CONTACT_FORM_ID, FORM_FEEDBACK_ID},
};

fn field_value(form: &HtmlFormElement, name: &str) -> String {
    let Some(field) = form
        .query_selector(&format!("[name=\"{name}\"]"))
        .ok()
        .flatten()
    else {
        return String::new();
    };
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = field.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

fn read_submission(form: &HtmlFormElement) -> ContactSubmission {
    ContactSubmission::new(
        &field_value(form, "name"),
        &field_value(form, "email"),
        &field_value(form, "reason"),
        &field_value(form, "message"),
    )
}

fn show_feedback(feedback: &Element, result: &FormFeedback) {
    feedback.set_text_content(Some(&result.text));
    let Some(feedback) = feedback.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = feedback.style();
    let _ = match result.tone.color() {
        Some(color) => style.set_property("color", color),
        None => style.remove_property("color").map(|_| ()),
    };
}

/// Intercepts `#contact-form` submissions. Returns `false` when the page has no contact form.
pub(crate) fn attach_contact_form(document: &Document) -> Result<bool, DomError> {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(false);
    };
    let feedback = document.get_element_by_id(FORM_FEEDBACK_ID);

    // Older engines dispatch a plain `Event` for submit.
    listen::<Event>(&form.clone(), "submit", move |ev| {
        ev.prevent_default();
        let result = read_submission(&form).feedback();
        if let Some(feedback) = &feedback {
            show_feedback(feedback, &result);
        }
        if result.clears_form() {
            form.reset();
        }
    })?;
    Ok(true)
}
