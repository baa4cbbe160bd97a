use super::constants::{
    CONFETTI_BATCH, CONFETTI_GRAVITY, CONFETTI_LAUNCH_VY_MIN, CONFETTI_LAUNCH_VY_SPAN,
    CONFETTI_LIFE_MIN, CONFETTI_LIFE_SPAN, CONFETTI_OFFSCREEN_MARGIN, CONFETTI_PALETTE,
    CONFETTI_SIZE_MIN, CONFETTI_SIZE_SPAN, CONFETTI_SPIN_PER_VX, CONFETTI_SPREAD_VX,
};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One confetti piece. Units are CSS pixels and frames.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub rotation_deg: f32,
    pub color: &'static str,
    pub life: f32,
}

impl Particle {
    fn random<R: Rng + ?Sized>(origin: Vec2, rng: &mut R) -> Self {
        Self {
            position: origin,
            velocity: Vec2::new(
                (rng.gen::<f32>() - 0.5) * CONFETTI_SPREAD_VX,
                -(rng.gen::<f32>() * CONFETTI_LAUNCH_VY_SPAN) - CONFETTI_LAUNCH_VY_MIN,
            ),
            size: rng.gen::<f32>() * CONFETTI_SIZE_SPAN + CONFETTI_SIZE_MIN,
            rotation_deg: rng.gen::<f32>() * 360.0,
            color: CONFETTI_PALETTE[rng.gen_range(0..CONFETTI_PALETTE.len())],
            life: rng.gen::<f32>() * CONFETTI_LIFE_SPAN + CONFETTI_LIFE_MIN,
        }
    }

    /// Advance one frame: gravity, integration, spin, aging.
    #[inline]
    fn advance(&mut self) {
        self.velocity.y += CONFETTI_GRAVITY;
        self.position += self.velocity;
        self.rotation_deg += self.velocity.x * CONFETTI_SPIN_PER_VX;
        self.life -= 1.0;
    }

    #[inline]
    fn is_spent(&self, surface_height: f32) -> bool {
        self.position.y > surface_height + CONFETTI_OFFSCREEN_MARGIN || self.life <= 0.0
    }

    #[inline]
    pub fn rotation_rad(&self) -> f32 {
        self.rotation_deg.to_radians()
    }
}

/// Active confetti set. Only decays naturally; there is no cap on its length.
pub struct ParticleSystem {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleSystem {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Add a batch of particles bursting from `origin`.
    pub fn spawn(&mut self, origin: Vec2) {
        self.particles.reserve(CONFETTI_BATCH);
        for _ in 0..CONFETTI_BATCH {
            let p = Particle::random(origin, &mut self.rng);
            self.particles.push(p);
        }
    }

    /// Run one frame over every particle, handing each updated particle to
    /// `draw` before dropping those that expired or fell below the surface.
    pub fn step<F: FnMut(&Particle)>(&mut self, surface_height: f32, mut draw: F) {
        self.particles.retain_mut(|p| {
            p.advance();
            draw(p);
            !p.is_spent(surface_height)
        });
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
