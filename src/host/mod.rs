//! Seams to the page the favicon lives in.
//!
//! The animator never talks to a browser directly: it finds or creates its icon link through
//! [`Document`], asks for the next repaint through [`FrameScheduler`], and is driven by the host
//! calling back into it.

use crate::foundation::error::FaviconResult;

/// In-memory host used by tests and the CLI simulator.
pub mod headless;
/// Browser host on top of `web-sys`.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

/// The document's favicon declaration (`<link rel="icon">`).
pub trait IconLink {
    /// Point the icon at `href`.
    fn set_href(&mut self, href: &str);
}

/// The page hosting the icon.
pub trait Document {
    /// Handle to an icon link element.
    type Link: IconLink;

    /// Look up an existing link by element id.
    fn find_icon_link(&self, id: &str) -> Option<Self::Link>;

    /// Create a link with the given id and `rel`, attached to the document head.
    fn create_icon_link(&mut self, id: &str, rel: &str) -> FaviconResult<Self::Link>;

    /// `true` while the page is not visible to the user.
    fn is_hidden(&self) -> bool;
}

/// Display refresh scheduler ("call me once before the next repaint").
///
/// After a request the host eventually calls
/// [`FaviconAnimator::on_frame`](crate::FaviconAnimator::on_frame) with a monotonically
/// increasing timestamp in milliseconds.
pub trait FrameScheduler {
    /// Ask for one frame callback.
    fn request_frame(&mut self) -> FaviconResult<()>;
}
