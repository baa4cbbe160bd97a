// Layout, simulation and audio tuning shared by the core and the web shell.

// Avoidance layout
pub const AVOID_MARGIN: f32 = 8.0; // required gap between the two controls (px)
pub const CONTAINER_PADDING: f32 = 6.0; // keeps the avoider off the far container edges
pub const RANDOM_SAMPLE_ATTEMPTS: usize = 60;
pub const FALLBACK_OFFSET: f32 = 60.0; // last-resort offset from the avoided center

// Proximity dodge (alternate mode)
pub const DODGE_RADIUS: f32 = 140.0;
pub const DODGE_COOLDOWN_MS: f64 = 120.0;
pub const DODGE_DISTANCE_MIN: f32 = 120.0;
pub const DODGE_DISTANCE_MAX: f32 = 220.0;
pub const DODGE_DISTANCE_FRACTION: f32 = 0.22; // of the larger container side

// Shrink
pub const SHRINK_FACTOR: f32 = 0.88;
pub const SHRINK_MIN_SCALE: f32 = 0.28;
pub const SHRINK_THROTTLE_MS: f64 = 60.0;

// Motion
pub const RELOCATE_DURATION_MS: u32 = 360;
pub const MIN_TRANSITION_MS: u32 = 160;
pub const SETTLE_GRACE_MS: u32 = 80; // timeout slack past the transition

// Confetti
pub const CONFETTI_BATCH: usize = 20;
pub const CONFETTI_GRAVITY: f32 = 0.12; // px per frame^2
pub const CONFETTI_SPREAD_VX: f32 = 6.0; // vx in [-3, 3)
pub const CONFETTI_LAUNCH_VY_MIN: f32 = 2.0;
pub const CONFETTI_LAUNCH_VY_SPAN: f32 = 6.0; // vy in (-8, -2]
pub const CONFETTI_SIZE_MIN: f32 = 6.0;
pub const CONFETTI_SIZE_SPAN: f32 = 6.0;
pub const CONFETTI_LIFE_MIN: f32 = 60.0; // frames
pub const CONFETTI_LIFE_SPAN: f32 = 60.0;
pub const CONFETTI_SPIN_PER_VX: f32 = 2.0; // degrees per frame per px/frame
pub const CONFETTI_ASPECT: f32 = 0.6; // height / width of a drawn piece
pub const CONFETTI_OFFSCREEN_MARGIN: f32 = 30.0;
pub const CONFETTI_PALETTE: [&str; 4] = ["#ff4655", "#00d4ff", "#ffd166", "#6effb1"];

// Background track
pub const BG_TARGET_VOLUME: f64 = 0.12;
pub const BG_CONFIRM_VOLUME: f64 = 0.28;
pub const FADE_STEP: f64 = 0.02;
pub const FADE_TICK_MS: i32 = 45;

// Confirmation tone
pub const TONE_HZ: f32 = 720.0;
pub const TONE_FLOOR_GAIN: f32 = 0.0001; // exponential ramps cannot reach zero
pub const TONE_PEAK_GAIN: f32 = 0.06;
pub const TONE_ATTACK_SEC: f64 = 0.02;
pub const TONE_DECAY_SEC: f64 = 0.25;
pub const TONE_STOP_SEC: f64 = 0.28;
