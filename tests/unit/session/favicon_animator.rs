use super::*;
use crate::encode::png::PNG_DATA_URI_PREFIX;
use crate::foundation::error::FaviconError;
use crate::host::headless::{HeadlessDocument, ManualScheduler};

type Headless = FaviconAnimator<HeadlessDocument, ManualScheduler>;

fn animator() -> (Headless, HeadlessDocument, ManualScheduler) {
    let doc = HeadlessDocument::new();
    let sched = ManualScheduler::new();
    let anim = FaviconAnimator::new(&FaviconConfig::default(), doc.clone(), sched.clone()).unwrap();
    (anim, doc, sched)
}

struct FailingEncoder;

impl IconEncoder for FailingEncoder {
    fn encode(&mut self, _surface: &CloudSurface) -> FaviconResult<String> {
        Err(FaviconError::encode("surface is tainted"))
    }
}

#[test]
fn new_creates_the_link_once_and_reuses_it() {
    let (anim, doc, sched) = animator();
    assert_eq!(doc.link_count(), 1);
    assert_eq!(anim.link().rel(), "icon");
    assert_eq!(anim.link().href(), None);
    assert_eq!(anim.state(), LoopState::Running);
    assert_eq!(anim.throttle().last_ms(), 0.0);
    assert_eq!(sched.requested(), 0);

    let again =
        FaviconAnimator::new(&FaviconConfig::default(), doc.clone(), ManualScheduler::new())
            .unwrap();
    assert_eq!(doc.link_count(), 1);
    assert_eq!(again.link().id(), "dynamic-favicon");
}

#[test]
fn existing_link_is_adopted() {
    let doc = HeadlessDocument::new();
    let declared = doc.insert_link("dynamic-favicon", "shortcut icon");
    let mut anim =
        FaviconAnimator::new(&FaviconConfig::default(), doc.clone(), ManualScheduler::new())
            .unwrap();
    anim.on_frame(100.0).unwrap();
    assert_eq!(declared.assignments(), 1);
    assert_eq!(declared.rel(), "shortcut icon");
}

#[test]
fn start_requests_the_first_frame() {
    let (mut anim, _doc, sched) = animator();
    anim.start().unwrap();
    assert_eq!(sched.pending(), 1);
}

#[test]
fn publishes_at_most_once_per_interval() {
    let (mut anim, _doc, _sched) = animator();
    anim.surface.render_frame(100.0).unwrap();
    assert!(anim.maybe_publish(100.0));
    let first = anim.link().href().unwrap();
    assert!(first.starts_with(PNG_DATA_URI_PREFIX));

    anim.surface.render_frame(150.0).unwrap();
    assert!(!anim.maybe_publish(150.0));
    assert_eq!(anim.link().href().unwrap(), first);
    assert_eq!(anim.link().assignments(), 1);

    assert!(!anim.maybe_publish(190.0));
    assert!(anim.maybe_publish(190.5));
    assert_eq!(anim.link().assignments(), 2);
}

#[test]
fn first_frames_inside_the_initial_interval_do_not_publish() {
    let (mut anim, _doc, sched) = animator();
    for t in [16.0, 33.0, 50.0, 66.0, 83.0, 90.0] {
        anim.on_frame(t).unwrap();
    }
    assert_eq!(anim.link().assignments(), 0);
    assert_eq!(sched.pending(), 6);
    anim.on_frame(100.0).unwrap();
    assert_eq!(anim.link().assignments(), 1);
}

#[test]
fn encode_failure_is_swallowed_and_still_advances_the_throttle() {
    let doc = HeadlessDocument::new();
    let mut anim = FaviconAnimator::with_encoder(
        &FaviconConfig::default(),
        doc,
        ManualScheduler::new(),
        Box::new(FailingEncoder),
    )
    .unwrap();

    anim.on_frame(200.0).unwrap();
    assert_eq!(anim.link().href(), None);
    assert_eq!(anim.throttle().last_ms(), 200.0);
    assert_eq!(anim.stats().encode_failures, 1);
    assert_eq!(anim.stats().icons_published, 0);
    assert_eq!(anim.state(), LoopState::Running);
}

#[test]
fn hidden_document_gets_one_final_publish_and_pauses() {
    let (mut anim, doc, sched) = animator();
    anim.start().unwrap();
    assert!(sched.take_request());
    anim.on_frame(100.0).unwrap();
    assert!(sched.take_request());
    assert_eq!(anim.link().assignments(), 1);

    doc.set_hidden(true);
    anim.on_visibility_change().unwrap();
    assert_eq!(anim.state(), LoopState::Running);

    // 20ms later: throttled path skips, final publish still happens.
    anim.on_frame(120.0).unwrap();
    assert_eq!(anim.state(), LoopState::Paused);
    assert_eq!(anim.link().assignments(), 2);
    assert_eq!(anim.throttle().last_ms(), 100.0);
    assert_eq!(sched.pending(), 0);
    assert_eq!(anim.stats().pauses, 1);
}

#[test]
fn visibility_restored_resumes_scheduling_once() {
    let (mut anim, doc, sched) = animator();
    doc.set_hidden(true);
    anim.on_frame(100.0).unwrap();
    assert_eq!(anim.state(), LoopState::Paused);
    assert_eq!(sched.pending(), 0);

    anim.on_visibility_change().unwrap();
    assert_eq!(sched.pending(), 0, "still hidden");

    doc.set_hidden(false);
    anim.on_visibility_change().unwrap();
    anim.on_visibility_change().unwrap();
    assert_eq!(anim.state(), LoopState::Running);
    assert_eq!(sched.pending(), 1);
    assert_eq!(anim.stats().resumes, 1);

    assert!(sched.take_request());
    anim.on_frame(5_000.0).unwrap();
    assert_eq!(sched.pending(), 1);
}

#[test]
fn invalid_config_is_rejected_before_touching_the_document() {
    let doc = HeadlessDocument::new();
    let cfg = FaviconConfig {
        size: 0,
        ..FaviconConfig::default()
    };
    assert!(FaviconAnimator::new(&cfg, doc.clone(), ManualScheduler::new()).is_err());
    assert_eq!(doc.link_count(), 0);
}
