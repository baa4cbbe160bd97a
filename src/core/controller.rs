use super::constants::{
    DODGE_COOLDOWN_MS, DODGE_RADIUS, RELOCATE_DURATION_MS, SHRINK_FACTOR, SHRINK_MIN_SCALE,
    SHRINK_THROTTLE_MS,
};
use super::geometry::{away_position, distance_to_center, safe_position, AvoidParams, Rect};
use super::particles::ParticleSystem;
use super::session::{shrink_step, AvoiderState, DodgeMode, InteractionSession};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const CONFIRMED_LABEL: &str = "Yay! 🎮 Invite sent";

/// Tunables for the avoider/confirmation pair.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractionConfig {
    pub mode: DodgeMode,
    pub shrink_factor: f32,
    pub min_scale: f32,
    pub shrink_throttle_ms: f64,
    pub dodge_radius: f32,
    pub dodge_cooldown_ms: f64,
    pub relocate_duration_ms: u32,
    pub layout: AvoidParams,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            mode: DodgeMode::default(),
            shrink_factor: SHRINK_FACTOR,
            min_scale: SHRINK_MIN_SCALE,
            shrink_throttle_ms: SHRINK_THROTTLE_MS,
            dodge_radius: DODGE_RADIUS,
            dodge_cooldown_ms: DODGE_COOLDOWN_MS,
            relocate_duration_ms: RELOCATE_DURATION_MS,
            layout: AvoidParams::default(),
        }
    }
}

/// Result of a successful confirmation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Confirmed {
    pub label: &'static str,
    pub burst_at: Vec2,
}

/// All mutable page state, owned in one place and handed to event handlers by reference.
pub struct Controller {
    pub config: InteractionConfig,
    pub avoider: AvoiderState,
    pub session: InteractionSession,
    pub particles: ParticleSystem,
    layout_rng: StdRng,
    confirmed: bool,
}

impl Controller {
    pub fn new(config: InteractionConfig, seed: u64) -> Self {
        Self {
            config,
            avoider: AvoiderState::default(),
            session: InteractionSession::default(),
            particles: ParticleSystem::new(seed),
            layout_rng: StdRng::seed_from_u64(seed.wrapping_add(1)),
            confirmed: false,
        }
    }

    /// One throttled shrink attempt on the avoider. Returns the new scale when
    /// the step was applied.
    pub fn shrink_avoider(&mut self, now_ms: f64) -> Option<f32> {
        if !self
            .session
            .admit_shrink(now_ms, self.config.shrink_throttle_ms)
        {
            return None;
        }
        self.avoider.scale = shrink_step(
            self.avoider.scale,
            self.config.shrink_factor,
            self.config.min_scale,
        );
        Some(self.avoider.scale)
    }

    /// Target for a relocation that keeps clear of `avoid`.
    pub fn relocation_target(&mut self, container: &Rect, avoider: &Rect, avoid: &Rect) -> Vec2 {
        safe_position(
            container,
            avoider.size(),
            avoid,
            &self.config.layout,
            &mut self.layout_rng,
        )
    }

    /// Proximity mode: target for a dodge away from `pointer`, or `None` when the
    /// pointer is too far, a move is in flight, the cooldown has not elapsed, or
    /// the mode is off.
    pub fn dodge_target(
        &mut self,
        now_ms: f64,
        pointer: Vec2,
        container: &Rect,
        avoider: &Rect,
        avoid: &Rect,
    ) -> Option<Vec2> {
        if self.config.mode != DodgeMode::Proximity {
            return None;
        }
        let distance = distance_to_center(avoider, pointer);
        if !self.session.admit_dodge(
            now_ms,
            distance,
            self.config.dodge_radius,
            self.avoider.animating,
            self.config.dodge_cooldown_ms,
        ) {
            return None;
        }
        Some(away_position(
            container,
            avoider,
            avoid,
            pointer,
            &self.config.layout,
            &mut self.layout_rng,
        ))
    }

    /// One-shot confirmation: spawns the burst at `center` and hands back the new
    /// label. Later calls return `None` and change nothing.
    pub fn confirm(&mut self, center: Vec2) -> Option<Confirmed> {
        if self.confirmed {
            return None;
        }
        self.confirmed = true;
        self.particles.spawn(center);
        Some(Confirmed {
            label: CONFIRMED_LABEL,
            burst_at: center,
        })
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }
}
