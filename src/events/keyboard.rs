use super::pointer::handle_attempt;
use super::Wiring;
use crate::core::is_activation_key;
use crate::dom;
use web_sys as web;

pub fn wire_avoider_keys(w: &Wiring) {
    let Some(avoider) = &w.avoider else {
        return;
    };
    let w = w.clone();
    dom::listen(avoider, "keydown", move |ev: web::KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            handle_attempt(&w, &ev);
        }
    });
}
