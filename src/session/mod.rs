/// The favicon animation loop.
pub mod favicon_animator;
/// Headless driver that replays a visibility timeline against the animator.
pub mod simulate;
/// Minimum-interval gate for icon publications.
pub mod throttle;
