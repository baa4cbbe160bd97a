// DOM hooks and presentation timings for the web shell.
// Ids and class names must match `index.html` and its stylesheet.

// Elements
pub const AVOIDER_ID: &str = "noBtn";
pub const CONFIRM_ID: &str = "yesBtn";
pub const CANVAS_ID: &str = "confetti";
pub const CONTAINER_SELECTOR: &str = ".buttons";
pub const MODE_ATTR: &str = "data-dodge";

// Classes and CSS hooks
pub const GROW_CLASS: &str = "grow";
pub const SHAKE_CLASS: &str = "shake";
pub const TOAST_CLASS: &str = "toast";
pub const TOAST_SHOW_CLASS: &str = "show";
pub const MUSIC_BODY_CLASS: &str = "has-bg-music";
pub const SCALE_VAR: &str = "--btn-scale";
pub const MOVE_EASING: &str = "cubic-bezier(.22,.9,.2,1)";

// Timings (ms)
pub const GROW_PULSE_MS: i32 = 700;
pub const HOLD_REPEAT_MS: i32 = 140;
pub const TOAST_DURATION_MS: i32 = 2000;
pub const TOAST_EXIT_MS: i32 = 280;

// Assets
pub const BG_MUSIC_PATH: &str = "bg-music.mp3";

// Copy
pub const CONFIRM_TOAST: &str = "Let's go!";
