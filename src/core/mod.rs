pub mod constants;
pub mod controller;
pub mod geometry;
pub mod motion;
pub mod particles;
pub mod playback;
pub mod session;

pub use controller::*;
pub use geometry::*;
pub use motion::*;
pub use particles::*;
pub use playback::*;
pub use session::*;
