pub mod random;
pub mod renderer;

pub use random::*;
pub use renderer::*;
