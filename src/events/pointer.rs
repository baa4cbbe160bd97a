use super::Wiring;
use crate::animate;
use crate::constants::{GROW_CLASS, GROW_PULSE_MS, HOLD_REPEAT_MS, SCALE_VAR, SHAKE_CLASS};
use crate::core::DodgeMode;
use crate::dom;
use glam::Vec2;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub fn wire_hold(w: &Wiring) {
    let Some(avoider) = &w.avoider else {
        return;
    };
    for event in ["mousedown", "touchstart"] {
        let w = w.clone();
        dom::listen_active(avoider, event, move |ev: web::Event| start_hold(&w, &ev));
    }
    for event in ["mouseup", "touchend"] {
        let hold = w.hold.clone();
        dom::listen(&w.document, event, move |_: web::Event| {
            hold.borrow_mut().stop();
        });
    }
}

pub fn wire_attempts(w: &Wiring) {
    let Some(avoider) = &w.avoider else {
        return;
    };
    let on_click = w.clone();
    dom::listen(avoider, "click", move |ev: web::Event| {
        handle_attempt(&on_click, &ev)
    });
    let on_touch = w.clone();
    dom::listen_active(avoider, "touchend", move |ev: web::Event| {
        handle_attempt(&on_touch, &ev)
    });
    let blurred = avoider.clone();
    dom::listen(avoider, "focus", move |_: web::Event| {
        _ = blurred.blur();
    });
}

/// Proximity dodge. Only attached when the container opts in with `data-dodge="proximity"`.
pub fn wire_proximity(w: &Wiring) {
    if w.controller.borrow().config.mode != DodgeMode::Proximity {
        return;
    }
    let Some(container) = &w.container else {
        return;
    };
    log::info!("[dodge] proximity mode enabled");
    let on_move = w.clone();
    dom::listen(container, "mousemove", move |ev: web::MouseEvent| {
        dodge_pointer(
            &on_move,
            Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        );
    });
    let on_touch = w.clone();
    dom::listen(container, "touchstart", move |ev: web::TouchEvent| {
        if let Some(t) = ev.touches().get(0) {
            dodge_pointer(
                &on_touch,
                Vec2::new(t.client_x() as f32, t.client_y() as f32),
            );
        }
    });
}

/// Click, tap or keyboard activation of the avoider.
pub fn handle_attempt(w: &Wiring, ev: &web::Event) {
    ev.prevent_default();
    ev.stop_propagation();
    // The document never sees this release, so end any hold here.
    w.hold.borrow_mut().stop();
    shrink_once(w);
    if w.controller.borrow().config.mode == DodgeMode::Proximity {
        relocate_clear(w);
    }
}

fn start_hold(w: &Wiring, ev: &web::Event) {
    if ev.cancelable() {
        ev.prevent_default();
    }
    let ticker = w.clone();
    let started = w.hold.borrow_mut().start(|| {
        dom::Interval::new(HOLD_REPEAT_MS, move || shrink_once(&ticker))
    });
    if started {
        shrink_once(w);
    }
}

/// One throttled shrink step, written to the avoider's `--btn-scale`.
pub fn shrink_once(w: &Wiring) {
    let Some(avoider) = &w.avoider else {
        return;
    };
    let Some(scale) = w.controller.borrow_mut().shrink_avoider(instant::now()) else {
        return;
    };
    _ = avoider
        .style()
        .set_property(SCALE_VAR, &format!("{:.3}", scale));
    pulse_grow(w);
    log::debug!("[shrink] scale={:.3}", scale);
}

fn pulse_grow(w: &Wiring) {
    if let Some(confirm) = &w.confirm {
        dom::pulse_class(confirm, GROW_CLASS, GROW_PULSE_MS);
    }
}

fn dodge_pointer(w: &Wiring, pointer: Vec2) {
    let (Some(container), Some(avoider), Some(confirm)) = (&w.container, &w.avoider, &w.confirm)
    else {
        return;
    };
    let target = w.controller.borrow_mut().dodge_target(
        instant::now(),
        pointer,
        &dom::rect_of(container),
        &dom::rect_of(avoider),
        &dom::rect_of(confirm),
    );
    let Some(target) = target else {
        return;
    };
    dom::restart_class(avoider, SHAKE_CLASS);
    relocate(w, target);
    pulse_grow(w);
}

/// Jump to a spot that keeps clear of the confirmation.
fn relocate_clear(w: &Wiring) {
    let (Some(container), Some(avoider), Some(confirm)) = (&w.container, &w.avoider, &w.confirm)
    else {
        return;
    };
    if w.controller.borrow().avoider.animating {
        return;
    }
    let target = w.controller.borrow_mut().relocation_target(
        &dom::rect_of(container),
        &dom::rect_of(avoider),
        &dom::rect_of(confirm),
    );
    relocate(w, target);
}

fn relocate(w: &Wiring, target: Vec2) {
    let (Some(avoider), Some(container)) = (w.avoider.clone(), w.container.clone()) else {
        return;
    };
    let controller = w.controller.clone();
    let duration = controller.borrow().config.relocate_duration_ms;
    spawn_local(async move {
        animate::animate_to(&avoider, &container, target, duration, &controller).await;
        let a = controller.borrow().avoider;
        log::debug!("[dodge] settled at ({:.0}, {:.0})", a.left, a.top);
    });
}
