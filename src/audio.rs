use crate::constants::{BG_MUSIC_PATH, MUSIC_BODY_CLASS};
use crate::core::constants::{
    BG_CONFIRM_VOLUME, BG_TARGET_VOLUME, FADE_TICK_MS, TONE_ATTACK_SEC, TONE_DECAY_SEC,
    TONE_FLOOR_GAIN, TONE_HZ, TONE_PEAK_GAIN, TONE_STOP_SEC,
};
use crate::core::{autoplay_notice, confirm_notice, FadeIn, PlaybackError, NOTICE_LOAD_FAILED};
use crate::{dom, toast};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

// Closing the tone context once its envelope is long finished.
const TONE_CONTEXT_LIFETIME_MS: i32 = 500;

/// Looping background music backed by an `<audio>` element.
pub struct BackgroundTrack {
    el: web::HtmlAudioElement,
    fade: RefCell<Option<dom::Interval>>,
}

impl BackgroundTrack {
    /// Create the element and start loading. Returns `None` if the browser
    /// refuses to construct it.
    pub fn load() -> Option<Rc<Self>> {
        let el = match web::HtmlAudioElement::new_with_src(BG_MUSIC_PATH) {
            Ok(el) => el,
            Err(e) => {
                log::error!("[audio] HtmlAudioElement error: {:?}", e);
                return None;
            }
        };
        el.set_loop(true);
        el.set_preload("auto");
        el.set_autoplay(true);
        el.set_volume(BG_TARGET_VOLUME);
        el.set_cross_origin(Some("anonymous"));
        el.set_muted(false);

        let on_error = el.clone();
        dom::listen(&el, "error", move |_: web::Event| {
            log::error!("[audio] load error: {:?}", on_error.error().map(|e| e.code()));
            toast::show(NOTICE_LOAD_FAILED);
        });
        let on_ready = el.clone();
        dom::listen(&el, "canplaythrough", move |_: web::Event| {
            log::debug!("[audio] canplaythrough readyState={}", on_ready.ready_state());
        });

        Some(Rc::new(Self {
            el,
            fade: RefCell::new(None),
        }))
    }

    pub async fn play(&self) -> Result<(), PlaybackError> {
        let promise = self.el.play().map_err(playback_error)?;
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(playback_error)
    }

    /// Ramp the volume from silence to `target` on a fixed tick.
    fn fade_in(self: &Rc<Self>, target: f64) {
        let mut ramp = FadeIn::new(target);
        self.el.set_volume(ramp.volume());
        let el = self.el.clone();
        let track = Rc::downgrade(self);
        let interval = dom::Interval::new(FADE_TICK_MS, move || match ramp.next() {
            Some(v) => el.set_volume(v),
            None => {
                // Drop the interval outside its own callback.
                let track = track.clone();
                dom::set_timeout(0, move || {
                    if let Some(t) = track.upgrade() {
                        t.stop_fade();
                    }
                });
            }
        });
        *self.fade.borrow_mut() = interval;
    }

    fn stop_fade(&self) {
        self.fade.borrow_mut().take();
    }

    fn log_state(&self) {
        log::info!(
            "[audio] paused={} muted={} volume={:.3} readyState={} src={}",
            self.el.paused(),
            self.el.muted(),
            self.el.volume(),
            self.el.ready_state(),
            self.el.src()
        );
    }
}

fn playback_error(e: JsValue) -> PlaybackError {
    let name = js_sys::Reflect::get(&e, &JsValue::from_str("name"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    PlaybackError::from_dom(&name, format!("{:?}", e))
}

/// Try to start the track right away. Browsers usually block this until a
/// gesture; the user is told to tap the confirmation instead.
pub fn start_autoplay(track: Rc<BackgroundTrack>) {
    spawn_local(async move {
        let outcome = track.play().await;
        match &outcome {
            Ok(()) => {
                log::info!("[audio] autoplay started");
                if let Some(body) = dom::window_document().and_then(|d| d.body()) {
                    _ = body.class_list().add_1(MUSIC_BODY_CLASS);
                }
                track.fade_in(BG_TARGET_VOLUME);
            }
            Err(e) => log::warn!("[audio] autoplay failed: {}", e),
        }
        if let Some(msg) = autoplay_notice(&outcome) {
            toast::show(msg);
        }
        track.log_state();
    });
}

/// Retry playback louder on the confirmation gesture and report the outcome.
pub fn retry_on_confirm(track: Option<Rc<BackgroundTrack>>) {
    let Some(track) = track else {
        toast::show(confirm_notice(&Err(PlaybackError::Unavailable)));
        return;
    };
    track.stop_fade();
    track.el.set_muted(false);
    track.el.set_volume(BG_CONFIRM_VOLUME);
    spawn_local(async move {
        let outcome = track.play().await;
        if let Err(e) = &outcome {
            log::warn!("[audio] play on confirm failed: {}", e);
        }
        toast::show(confirm_notice(&outcome));
    });
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

/// Short sawtooth blip for the confirmation. Silently skipped without WebAudio.
pub fn play_confirm_tone() {
    let ctx = match web::AudioContext::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            log::debug!("[audio] no AudioContext: {:?}", e);
            return;
        }
    };
    let Ok(osc) = web::OscillatorNode::new(&ctx) else {
        return;
    };
    let Ok(env) = create_gain(&ctx, TONE_FLOOR_GAIN, "Tone") else {
        return;
    };
    osc.set_type(web::OscillatorType::Sawtooth);
    osc.frequency().set_value(TONE_HZ);

    let now = ctx.current_time();
    _ = env.gain().set_value_at_time(TONE_FLOOR_GAIN, now);
    _ = env
        .gain()
        .exponential_ramp_to_value_at_time(TONE_PEAK_GAIN, now + TONE_ATTACK_SEC);
    _ = env
        .gain()
        .exponential_ramp_to_value_at_time(TONE_FLOOR_GAIN, now + TONE_DECAY_SEC);
    _ = osc.connect_with_audio_node(&env);
    _ = env.connect_with_audio_node(&ctx.destination());
    _ = osc.start();
    _ = osc.stop_with_when(now + TONE_STOP_SEC);

    dom::set_timeout(TONE_CONTEXT_LIFETIME_MS, move || {
        _ = ctx.close();
    });
}
