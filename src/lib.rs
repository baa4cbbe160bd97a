#![cfg(target_arch = "wasm32")]
use crate::constants::{
    AVOIDER_ID, CANVAS_ID, CONFIRM_ID, CONTAINER_SELECTOR, MODE_ATTR, SCALE_VAR,
};
use crate::core::{Controller, DodgeMode, HoldState, InteractionConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod animate;
mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod toast;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::fit_canvas_to_viewport(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::fit_canvas_to_viewport(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    let found = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok());
    if found.is_none() {
        log::warn!("missing #{}; its handlers are disabled", id);
    }
    found
}

fn start_confetti(document: &web::Document, controller: &Rc<RefCell<Controller>>) {
    let Some(canvas) = element_by_id::<web::HtmlCanvasElement>(document, CANVAS_ID) else {
        return;
    };
    wire_canvas_resize(&canvas);
    match frame::FrameContext::new(canvas, controller.clone()) {
        Some(frame_ctx) => frame::start_loop(Rc::new(RefCell::new(frame_ctx))),
        None => log::warn!("no 2d context; confetti disabled"),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dodge-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container = document.query_selector(CONTAINER_SELECTOR).ok().flatten();
    if container.is_none() {
        log::warn!("missing {}; relocation disabled", CONTAINER_SELECTOR);
    }
    let avoider = element_by_id::<web::HtmlElement>(&document, AVOIDER_ID);
    let confirm = element_by_id::<web::HtmlButtonElement>(&document, CONFIRM_ID);

    let mode = DodgeMode::from_attr(
        container
            .as_ref()
            .and_then(|c| c.get_attribute(MODE_ATTR))
            .as_deref(),
    );
    let config = InteractionConfig {
        mode,
        ..InteractionConfig::default()
    };
    log::info!("[config] mode={:?}", config.mode);
    let controller = Rc::new(RefCell::new(Controller::new(
        config,
        js_sys::Date::now() as u64,
    )));

    if let Some(avoider) = &avoider {
        let scale = controller.borrow().avoider.scale;
        _ = avoider
            .style()
            .set_property(SCALE_VAR, &format!("{:.3}", scale));
    }

    start_confetti(&document, &controller);

    let track = audio::BackgroundTrack::load();
    if let Some(track) = &track {
        audio::start_autoplay(track.clone());
    }

    events::wire_all(events::Wiring {
        document,
        container,
        avoider,
        confirm,
        controller,
        hold: Rc::new(RefCell::new(HoldState::default())),
        track,
    });

    Ok(())
}
