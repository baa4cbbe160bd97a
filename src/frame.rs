use crate::core::constants::CONFETTI_ASPECT;
use crate::core::{Controller, Particle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame confetti pass touches.
pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,
    pub controller: Rc<RefCell<Controller>>,
}

impl FrameContext {
    /// Grab a 2D context for `canvas`. `None` means confetti is simply not drawn.
    pub fn new(
        canvas: web::HtmlCanvasElement,
        controller: Rc<RefCell<Controller>>,
    ) -> Option<Self> {
        let ctx2d = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas,
            ctx2d,
            controller,
        })
    }

    pub fn frame(&mut self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx2d.clear_rect(0.0, 0.0, w, h);
        let ctx2d = &self.ctx2d;
        self.controller
            .borrow_mut()
            .particles
            .step(h as f32, |p| draw_particle(ctx2d, p));
    }
}

fn draw_particle(ctx2d: &web::CanvasRenderingContext2d, p: &Particle) {
    let size = p.size as f64;
    ctx2d.save();
    _ = ctx2d.translate(p.position.x as f64, p.position.y as f64);
    _ = ctx2d.rotate(p.rotation_rad() as f64);
    ctx2d.set_fill_style_str(p.color);
    ctx2d.fill_rect(-size / 2.0, -size / 2.0, size, size * CONFETTI_ASPECT as f64);
    ctx2d.restore();
}

/// Self-rescheduling requestAnimationFrame loop. Runs for the page lifetime.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
