//! Animated cloud favicon.
//!
//! `favicloud` renders a small procedural cloud scene into an offscreen 64x64 surface and
//! periodically re-encodes it as a PNG data URI assigned to the page's `<link rel="icon">`.
//!
//! - Build a [`FaviconAnimator`] over a [`Document`] and a [`FrameScheduler`]
//! - Call [`FaviconAnimator::start`], then forward refresh callbacks to
//!   [`FaviconAnimator::on_frame`] and visibility changes to
//!   [`FaviconAnimator::on_visibility_change`]
//!
//! The headless host in [`host::headless`] drives the same loop without a browser; with the `web`
//! feature on `wasm32`, `host::web::install` wires it to the live DOM.
// `#[wasm_bindgen]` exports expand to unsafe glue.
#![cfg_attr(not(all(feature = "web", target_arch = "wasm32")), forbid(unsafe_code))]
#![deny(missing_docs)]

mod foundation;

/// Animator configuration.
pub mod config;
/// Surface encoding.
pub mod encode;
/// Host document and scheduler seams.
pub mod host;
/// Rasterization.
pub mod render;
/// Scene description.
pub mod scene;
/// Animation loop.
pub mod session;

pub use crate::config::FaviconConfig;
pub use crate::encode::png::{IconEncoder, PngDataUriEncoder, decode_png_data_uri, encode_png};
pub use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rgba8, Rgba8Premul, Vec2};
pub use crate::foundation::error::{FaviconError, FaviconResult};
pub use crate::host::{Document, FrameScheduler, IconLink};
pub use crate::render::cpu::CloudSurface;
pub use crate::session::favicon_animator::{AnimatorStats, FaviconAnimator, LoopState};
pub use crate::session::simulate::{Publication, SimulationPlan, SimulationReport, simulate};
pub use crate::session::throttle::Throttle;
