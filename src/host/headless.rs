use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    rc::Rc,
};

use crate::{
    foundation::error::{FaviconError, FaviconResult},
    host::{Document, FrameScheduler, IconLink},
};

#[derive(Debug, Default)]
struct LinkState {
    id: String,
    rel: String,
    href: Option<String>,
    assignments: u64,
}

/// Shared handle to an in-memory `<link>` element.
///
/// Clones observe the same element, so tests can keep a handle while the animator owns another.
#[derive(Clone, Debug, Default)]
pub struct HeadlessLink {
    inner: Rc<RefCell<LinkState>>,
}

impl HeadlessLink {
    /// Element id.
    pub fn id(&self) -> String {
        self.inner.borrow().id.clone()
    }

    /// Link relation.
    pub fn rel(&self) -> String {
        self.inner.borrow().rel.clone()
    }

    /// Current `href`, if ever assigned.
    pub fn href(&self) -> Option<String> {
        self.inner.borrow().href.clone()
    }

    /// Number of `href` assignments so far.
    pub fn assignments(&self) -> u64 {
        self.inner.borrow().assignments
    }
}

impl IconLink for HeadlessLink {
    fn set_href(&mut self, href: &str) {
        let mut state = self.inner.borrow_mut();
        state.href = Some(href.to_owned());
        state.assignments += 1;
    }
}

#[derive(Debug, Default)]
struct DocumentState {
    hidden: bool,
    head: BTreeMap<String, HeadlessLink>,
}

/// Shared handle to an in-memory document with a visibility flag and a `<head>`.
#[derive(Clone, Debug, Default)]
pub struct HeadlessDocument {
    inner: Rc<RefCell<DocumentState>>,
}

impl HeadlessDocument {
    /// Visible document with an empty head.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the visibility flag. Does not notify anyone; the caller forwards the change.
    pub fn set_hidden(&self, hidden: bool) {
        self.inner.borrow_mut().hidden = hidden;
    }

    /// Insert a pre-existing link into the head, as if declared in markup.
    pub fn insert_link(&self, id: &str, rel: &str) -> HeadlessLink {
        let link = HeadlessLink {
            inner: Rc::new(RefCell::new(LinkState {
                id: id.to_owned(),
                rel: rel.to_owned(),
                ..LinkState::default()
            })),
        };
        self.inner
            .borrow_mut()
            .head
            .insert(id.to_owned(), link.clone());
        link
    }

    /// Number of link elements in the head.
    pub fn link_count(&self) -> usize {
        self.inner.borrow().head.len()
    }
}

impl Document for HeadlessDocument {
    type Link = HeadlessLink;

    fn find_icon_link(&self, id: &str) -> Option<HeadlessLink> {
        self.inner.borrow().head.get(id).cloned()
    }

    fn create_icon_link(&mut self, id: &str, rel: &str) -> FaviconResult<HeadlessLink> {
        if id.is_empty() {
            return Err(FaviconError::host("link id must not be empty"));
        }
        if self.inner.borrow().head.contains_key(id) {
            return Err(FaviconError::host(format!("element id '{id}' already in use")));
        }
        Ok(self.insert_link(id, rel))
    }

    fn is_hidden(&self) -> bool {
        self.inner.borrow().hidden
    }
}

/// Scheduler that only records requests; the driver decides when frames fire.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    pending: Rc<Cell<u32>>,
    requested: Rc<Cell<u64>>,
}

impl ManualScheduler {
    /// Scheduler with no pending requests.
    pub fn new() -> Self {
        Self::default()
    }

    /// Outstanding frame requests.
    pub fn pending(&self) -> u32 {
        self.pending.get()
    }

    /// Total requests ever made.
    pub fn requested(&self) -> u64 {
        self.requested.get()
    }

    /// Consume one outstanding request; `false` if none was pending.
    pub fn take_request(&self) -> bool {
        match self.pending.get() {
            0 => false,
            n => {
                self.pending.set(n - 1);
                true
            }
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FaviconResult<()> {
        self.pending.set(self.pending.get().saturating_add(1));
        self.requested.set(self.requested.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/headless.rs"]
mod tests;
