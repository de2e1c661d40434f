//! Frame timing.
//!
//! One `FramerateCounter` per loop; call `tick()` once per unit of work and
//! report the returned rate whenever it is `Some`.

mod framerate;

pub use framerate::FramerateCounter;
