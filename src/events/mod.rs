use crate::audio::BackgroundTrack;
use crate::core::{Controller, HoldState};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub mod confirm;
pub mod keyboard;
pub mod pointer;

/// Handles shared by every listener. Elements missing from the page are
/// `None` and their handlers are never attached.
#[derive(Clone)]
pub struct Wiring {
    pub document: web::Document,
    pub container: Option<web::Element>,
    pub avoider: Option<web::HtmlElement>,
    pub confirm: Option<web::HtmlButtonElement>,
    pub controller: Rc<RefCell<Controller>>,
    pub hold: Rc<RefCell<HoldState<dom::Interval>>>,
    pub track: Option<Rc<BackgroundTrack>>,
}

pub fn wire_all(w: Wiring) {
    pointer::wire_hold(&w);
    pointer::wire_attempts(&w);
    pointer::wire_proximity(&w);
    keyboard::wire_avoider_keys(&w);
    confirm::wire_confirm(&w);
}
