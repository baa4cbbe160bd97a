use super::Wiring;
use crate::audio;
use crate::constants::CONFIRM_TOAST;
use crate::{dom, toast};
use web_sys as web;

pub fn wire_confirm(w: &Wiring) {
    let Some(confirm) = &w.confirm else {
        return;
    };
    let w = w.clone();
    dom::listen(confirm, "click", move |_: web::Event| on_confirm(&w));
}

/// One-shot: relabel and disable the button, retry the music, burst confetti
/// from the button's center and play the tone.
fn on_confirm(w: &Wiring) {
    let Some(button) = &w.confirm else {
        return;
    };
    if w.controller.borrow().is_confirmed() {
        return;
    }
    let center = dom::rect_of(button).center();
    let Some(confirmed) = w.controller.borrow_mut().confirm(center) else {
        return;
    };
    log::info!(
        "[confirm] burst at ({:.0}, {:.0})",
        confirmed.burst_at.x,
        confirmed.burst_at.y
    );

    toast::show(CONFIRM_TOAST);
    audio::retry_on_confirm(w.track.clone());

    button.set_text_content(Some(confirmed.label));
    button.set_disabled(true);
    let style = button.style();
    _ = style.set_property("cursor", "default");
    _ = style.set_property("opacity", "0.98");

    audio::play_confirm_tone();
}
