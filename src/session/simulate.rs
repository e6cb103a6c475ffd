use crate::{
    config::FaviconConfig,
    foundation::error::{FaviconError, FaviconResult},
    host::Document,
    host::headless::{HeadlessDocument, ManualScheduler},
    session::favicon_animator::{AnimatorStats, FaviconAnimator, LoopState},
};

/// A visibility timeline to replay against a headless page.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SimulationPlan {
    /// Stop once the clock passes this many milliseconds.
    pub duration_ms: f64,
    /// Spacing of display refreshes.
    pub frame_interval_ms: f64,
    /// Hide the page at this time.
    pub hide_at_ms: Option<f64>,
    /// Show the page again at this time (only meaningful after `hide_at_ms`).
    pub show_at_ms: Option<f64>,
}

impl Default for SimulationPlan {
    fn default() -> Self {
        Self {
            duration_ms: 1_000.0,
            frame_interval_ms: 1_000.0 / 60.0,
            hide_at_ms: None,
            show_at_ms: None,
        }
    }
}

impl SimulationPlan {
    /// Check that the timeline terminates.
    pub fn validate(&self) -> FaviconResult<()> {
        if !self.duration_ms.is_finite() || self.duration_ms < 0.0 {
            return Err(FaviconError::validation("duration_ms must be finite and >= 0"));
        }
        if !self.frame_interval_ms.is_finite() || self.frame_interval_ms <= 0.0 {
            return Err(FaviconError::validation(
                "frame_interval_ms must be finite and > 0",
            ));
        }
        for t in [self.hide_at_ms, self.show_at_ms].into_iter().flatten() {
            if !t.is_finite() || t < 0.0 {
                return Err(FaviconError::validation("visibility times must be finite and >= 0"));
            }
        }
        Ok(())
    }
}

/// One `href` assignment observed during a simulation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Publication {
    /// Clock value of the frame that published.
    pub time_ms: f64,
    /// The assigned data URI.
    pub href: String,
}

/// Outcome of [`simulate`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SimulationReport {
    /// Animator counters at the end of the run.
    pub stats: AnimatorStats,
    /// Loop state at the end of the run.
    pub final_state: LoopState,
    /// Frame callbacks delivered by the scheduler.
    pub frames_delivered: u64,
    /// Every `href` assignment, in order.
    pub publications: Vec<Publication>,
}

/// Drive a headless animator along `plan`.
///
/// The clock advances in `frame_interval_ms` steps. Visibility changes are applied (and forwarded
/// to the animator) before the frame at the same timestamp. A frame callback fires at a step only
/// if one was requested, mirroring a refresh scheduler that delivers a pending callback even when
/// the page has just been hidden.
pub fn simulate(cfg: &FaviconConfig, plan: &SimulationPlan) -> FaviconResult<SimulationReport> {
    plan.validate()?;

    let document = HeadlessDocument::new();
    let scheduler = ManualScheduler::new();
    let mut animator = FaviconAnimator::new(cfg, document.clone(), scheduler.clone())?;
    animator.start()?;

    let mut hide_at = plan.hide_at_ms;
    let mut show_at = plan.show_at_ms;
    let mut frames_delivered = 0u64;
    let mut publications = Vec::new();

    let mut step = 0u64;
    loop {
        let now = step as f64 * plan.frame_interval_ms;
        if now > plan.duration_ms {
            break;
        }
        step += 1;

        if hide_at.is_some_and(|t| now >= t) {
            hide_at = None;
            document.set_hidden(true);
            animator.on_visibility_change()?;
        }
        if hide_at.is_none() && show_at.is_some_and(|t| now >= t) && document.is_hidden() {
            show_at = None;
            document.set_hidden(false);
            animator.on_visibility_change()?;
        }

        if !scheduler.take_request() {
            continue;
        }
        frames_delivered += 1;
        let before = animator.link().assignments();
        animator.on_frame(now)?;
        let assigned = animator.link().assignments() - before;
        // A hidden frame can assign twice (throttled publish, then the final one); both carry the
        // same surface contents.
        if let Some(href) = animator.link().href() {
            for _ in 0..assigned {
                publications.push(Publication {
                    time_ms: now,
                    href: href.clone(),
                });
            }
        }
    }

    tracing::debug!(
        frames = frames_delivered,
        published = publications.len(),
        "simulation finished"
    );

    Ok(SimulationReport {
        stats: animator.stats(),
        final_state: animator.state(),
        frames_delivered,
        publications,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/session/simulate.rs"]
mod tests;
