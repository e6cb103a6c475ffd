use crate::{
    config::FaviconConfig,
    encode::png::{IconEncoder, PngDataUriEncoder},
    foundation::error::FaviconResult,
    host::{Document, FrameScheduler, IconLink},
    render::cpu::CloudSurface,
    session::throttle::Throttle,
};

/// Whether the animator keeps asking for frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopState {
    /// A frame request is outstanding or about to be made.
    Running,
    /// The page was hidden; nothing is scheduled until it becomes visible again.
    Paused,
}

/// Counters describing what the animator has done so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnimatorStats {
    /// Frames rendered into the surface.
    pub frames_rendered: u64,
    /// Successful `href` assignments.
    pub icons_published: u64,
    /// Publications skipped because encoding failed.
    pub encode_failures: u64,
    /// RUNNING -> PAUSED transitions.
    pub pauses: u64,
    /// PAUSED -> RUNNING transitions.
    pub resumes: u64,
}

/// Animates a favicon with procedural clouds.
///
/// The host drives it through two entry points: [`on_frame`](Self::on_frame) when a requested
/// refresh callback fires, and [`on_visibility_change`](Self::on_visibility_change) when the page
/// is shown or hidden. Each frame is rendered into an owned [`CloudSurface`]; the surface is
/// re-encoded and assigned to the icon link at most once per configured interval.
pub struct FaviconAnimator<D: Document, S: FrameScheduler> {
    document: D,
    scheduler: S,
    link: D::Link,
    surface: CloudSurface,
    encoder: Box<dyn IconEncoder>,
    throttle: Throttle,
    state: LoopState,
    stats: AnimatorStats,
}

impl<D: Document, S: FrameScheduler> std::fmt::Debug for FaviconAnimator<D, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaviconAnimator")
            .field("surface", &self.surface)
            .field("throttle", &self.throttle)
            .field("state", &self.state)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl<D: Document, S: FrameScheduler> FaviconAnimator<D, S> {
    /// Build an animator that publishes PNG data URIs.
    ///
    /// Finds the icon link by `cfg.link_id`, creating it if absent. Nothing is scheduled until
    /// [`start`](Self::start).
    pub fn new(cfg: &FaviconConfig, document: D, scheduler: S) -> FaviconResult<Self> {
        Self::with_encoder(cfg, document, scheduler, Box::new(PngDataUriEncoder))
    }

    /// Like [`new`](Self::new) with a custom encoder.
    pub fn with_encoder(
        cfg: &FaviconConfig,
        mut document: D,
        scheduler: S,
        encoder: Box<dyn IconEncoder>,
    ) -> FaviconResult<Self> {
        cfg.validate()?;
        let canvas = cfg.canvas()?;
        let link = match document.find_icon_link(&cfg.link_id) {
            Some(link) => link,
            None => {
                tracing::debug!(id = %cfg.link_id, "creating icon link");
                document.create_icon_link(&cfg.link_id, &cfg.link_rel)?
            }
        };
        Ok(Self {
            document,
            scheduler,
            link,
            surface: CloudSurface::new(canvas),
            encoder,
            throttle: Throttle::new(cfg.update_interval_ms),
            state: LoopState::Running,
            stats: AnimatorStats::default(),
        })
    }

    /// Request the first frame.
    pub fn start(&mut self) -> FaviconResult<()> {
        self.state = LoopState::Running;
        self.scheduler.request_frame()
    }

    /// Current loop state.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Counters so far.
    pub fn stats(&self) -> AnimatorStats {
        self.stats
    }

    /// The drawing surface.
    pub fn surface(&self) -> &CloudSurface {
        &self.surface
    }

    /// The icon link being updated.
    pub fn link(&self) -> &D::Link {
        &self.link
    }

    /// The host document.
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Throttle state.
    pub fn throttle(&self) -> Throttle {
        self.throttle
    }

    /// Refresh callback: render, maybe publish, then reschedule or pause.
    ///
    /// When the document is hidden, one final frame is published regardless of the throttle and
    /// no further frame is requested until [`on_visibility_change`](Self::on_visibility_change)
    /// sees the page visible again.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn on_frame(&mut self, time_ms: f64) -> FaviconResult<()> {
        self.surface.render_frame(time_ms)?;
        self.stats.frames_rendered += 1;
        self.maybe_publish(time_ms);

        if self.document.is_hidden() {
            self.publish_now();
            if self.state == LoopState::Running {
                self.stats.pauses += 1;
                tracing::debug!(time_ms, "document hidden, pausing favicon animation");
            }
            self.state = LoopState::Paused;
            return Ok(());
        }

        self.state = LoopState::Running;
        self.scheduler.request_frame()
    }

    /// Visibility callback: resume scheduling when a paused animator becomes visible.
    pub fn on_visibility_change(&mut self) -> FaviconResult<()> {
        if self.document.is_hidden() || self.state == LoopState::Running {
            return Ok(());
        }
        self.scheduler.request_frame()?;
        self.state = LoopState::Running;
        self.stats.resumes += 1;
        tracing::debug!("document visible, resuming favicon animation");
        Ok(())
    }

    /// Publish the current surface if the throttle allows it.
    ///
    /// The throttle advances even when encoding fails. Returns `true` if the link was updated.
    pub fn maybe_publish(&mut self, time_ms: f64) -> bool {
        if !self.throttle.is_due(time_ms) {
            return false;
        }
        let published = self.publish_now();
        self.throttle.mark(time_ms);
        published
    }

    /// Encode the surface and assign it to the link, ignoring the throttle.
    ///
    /// Encoding failures are counted and logged, never returned.
    pub fn publish_now(&mut self) -> bool {
        match self.try_encode() {
            Some(href) => {
                self.link.set_href(&href);
                self.stats.icons_published += 1;
                tracing::trace!(bytes = href.len(), "published favicon");
                true
            }
            None => false,
        }
    }

    fn try_encode(&mut self) -> Option<String> {
        match self.encoder.encode(&self.surface) {
            Ok(href) => Some(href),
            Err(err) => {
                self.stats.encode_failures += 1;
                tracing::warn!(%err, "favicon encode failed; keeping previous icon");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/favicon_animator.rs"]
mod tests;
