use crate::constants::MOVE_EASING;
use crate::core::{
    plan_move, settle_deadline_ms, transition_ms, translate3d, Controller, PendingSettle,
    SettleSignal,
};
use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

// Callbacks of one move. Both capture the `PendingMove`, so they are held here
// only until it settles.
struct MoveHandles {
    listener: Closure<dyn FnMut(web::TransitionEvent)>,
    timeout: Option<dom::Timeout>,
}

struct PendingMove {
    element: web::HtmlElement,
    controller: Rc<RefCell<Controller>>,
    resolve: js_sys::Function,
    settle: PendingSettle<MoveHandles>,
}

impl PendingMove {
    fn complete(&self, signal: SettleSignal<'_>) {
        let settled = self.settle.settle(signal, |handles| {
            _ = self.element.remove_event_listener_with_callback(
                "transitionend",
                handles.listener.as_ref().unchecked_ref(),
            );
            // One of them may be running right now; release both on a later task.
            dom::set_timeout(0, move || drop(handles));
        });
        if !settled {
            return;
        }
        let style = self.element.style();
        _ = style.set_property("transition", "");
        _ = style.set_property("transform", "");
        self.controller.borrow_mut().avoider.finish_move();
        _ = self.resolve.call0(&JsValue::NULL);
        log::debug!("[motion] settled by {:?}", signal);
    }
}

/// Move `element` to `target` (top-left relative to `container`) over
/// `duration_ms`.
///
/// The element jumps to its final `left`/`top` at once and is visually pulled
/// back with a transform that then transitions to zero. The returned future
/// resolves exactly once: on the `transform` transitionend or after
/// `duration_ms + 80`, whichever comes first. If another move is in flight this
/// returns immediately without touching the element.
pub async fn animate_to(
    element: &web::HtmlElement,
    container: &web::Element,
    target: Vec2,
    duration_ms: u32,
    controller: &Rc<RefCell<Controller>>,
) {
    let plan = plan_move(&dom::rect_of(container), &dom::rect_of(element), target);
    if !controller
        .borrow_mut()
        .avoider
        .begin_move(plan.target.x, plan.target.y)
    {
        log::debug!("[motion] move already in flight; skipped");
        return;
    }

    let style = element.style();
    _ = style.set_property("position", "absolute");
    _ = style.set_property("left", &format!("{}px", plan.target.x));
    _ = style.set_property("top", &format!("{}px", plan.target.y));
    _ = style.set_property(
        "transition",
        &format!("transform {}ms {}", transition_ms(duration_ms), MOVE_EASING),
    );
    _ = style.set_property("transform", &translate3d(plan.start_offset));
    // force reflow so the start offset is committed before the transition
    _ = element.offset_width();

    let mut executor = |resolve: js_sys::Function, _reject: js_sys::Function| {
        let pending = Rc::new(PendingMove {
            element: element.clone(),
            controller: controller.clone(),
            resolve,
            settle: PendingSettle::default(),
        });

        let on_end = pending.clone();
        let listener = Closure::wrap(Box::new(move |ev: web::TransitionEvent| {
            on_end.complete(SettleSignal::TransitionEnd(&ev.property_name()));
        }) as Box<dyn FnMut(web::TransitionEvent)>);
        _ = element
            .add_event_listener_with_callback("transitionend", listener.as_ref().unchecked_ref());

        let on_timeout = pending.clone();
        let timeout = dom::Timeout::new(settle_deadline_ms(duration_ms) as i32, move || {
            on_timeout.complete(SettleSignal::Timeout);
        });
        if timeout.is_none() {
            log::warn!("[motion] no fallback timer; settling on transitionend only");
        }
        pending.settle.arm(MoveHandles { listener, timeout });

        let settling = element.clone();
        dom::request_frame(move || {
            _ = settling
                .style()
                .set_property("transform", &translate3d(Vec2::ZERO));
        });
    };
    let promise = js_sys::Promise::new(&mut executor);
    _ = JsFuture::from(promise).await;
}
