pub mod clock;
pub mod driver;
pub mod fps;
pub mod updater;

pub use clock::Clock;
pub use driver::Driver;
pub use fps::{FrameRateSampler, FPS_WINDOW};
pub use updater::{advance, light_orbit, tick, update_object, BOUNDS, DRIFT_STEP};
