/// Cloud geometry and per-frame motion.
pub mod cloud;
/// Gradient paints sampled in local shape coordinates.
pub mod paint;
