use crate::constants::{TOAST_CLASS, TOAST_DURATION_MS, TOAST_EXIT_MS, TOAST_SHOW_CLASS};
use crate::dom;

/// Show a transient notification for the default duration.
#[inline]
pub fn show(message: &str) {
    show_for(message, TOAST_DURATION_MS);
}

/// Append a toast to `<body>`, animate it in on the next frame and remove it
/// after `duration_ms` plus the exit animation. DOM failures are ignored.
pub fn show_for(message: &str, duration_ms: i32) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(el) = document.create_element("div") else {
        return;
    };
    el.set_class_name(TOAST_CLASS);
    el.set_text_content(Some(message));
    if body.append_child(&el).is_err() {
        return;
    }
    log::debug!("[toast] {}", message);

    let entering = el.clone();
    dom::request_frame(move || {
        _ = entering.class_list().add_1(TOAST_SHOW_CLASS);
    });
    dom::set_timeout(duration_ms, move || {
        _ = el.class_list().remove_1(TOAST_SHOW_CLASS);
        dom::set_timeout(TOAST_EXIT_MS, move || el.remove());
    });
}
