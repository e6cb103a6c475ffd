use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::{JsCast, JsValue, closure::Closure, prelude::wasm_bindgen};
use web_sys::{HtmlLinkElement, Window};

use crate::{
    config::FaviconConfig,
    foundation::error::{FaviconError, FaviconResult},
    host::{Document, FrameScheduler, IconLink},
    session::favicon_animator::FaviconAnimator,
};

type FrameCallback = Closure<dyn FnMut(f64)>;

fn js_err(context: &str, err: JsValue) -> FaviconError {
    FaviconError::host(format!("{context}: {err:?}"))
}

/// `<link>` element in the live DOM.
#[derive(Clone, Debug)]
pub struct WebIconLink(HtmlLinkElement);

impl IconLink for WebIconLink {
    fn set_href(&mut self, href: &str) {
        self.0.set_href(href);
    }
}

/// The live `window.document`.
#[derive(Clone, Debug)]
pub struct WebDocument(web_sys::Document);

impl Document for WebDocument {
    type Link = WebIconLink;

    fn find_icon_link(&self, id: &str) -> Option<WebIconLink> {
        self.0
            .get_element_by_id(id)?
            .dyn_into::<HtmlLinkElement>()
            .ok()
            .map(WebIconLink)
    }

    fn create_icon_link(&mut self, id: &str, rel: &str) -> FaviconResult<WebIconLink> {
        let el = self
            .0
            .create_element("link")
            .map_err(|e| js_err("create <link>", e))?;
        let link: HtmlLinkElement = el
            .dyn_into()
            .map_err(|_| FaviconError::host("created element is not a <link>"))?;
        link.set_id(id);
        link.set_rel(rel);
        let head = self
            .0
            .head()
            .ok_or_else(|| FaviconError::host("document has no <head>"))?;
        head.append_child(&link)
            .map_err(|e| js_err("append <link> to <head>", e))?;
        Ok(WebIconLink(link))
    }

    fn is_hidden(&self) -> bool {
        self.0.hidden()
    }
}

/// `window.requestAnimationFrame` with a callback installed after the animator exists.
#[derive(Clone)]
pub struct AnimationFrameScheduler {
    window: Window,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&mut self) -> FaviconResult<()> {
        let slot = self.callback.borrow();
        let cb = slot
            .as_ref()
            .ok_or_else(|| FaviconError::host("frame callback not installed"))?;
        self.window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|e| js_err("requestAnimationFrame", e))?;
        Ok(())
    }
}

/// Wire a favicon animator into the current page.
///
/// The animator, its frame callback and its `visibilitychange` listener live for the rest of the
/// page's lifetime.
pub fn install(cfg: &FaviconConfig) -> FaviconResult<()> {
    let window = web_sys::window().ok_or_else(|| FaviconError::host("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| FaviconError::host("window has no document"))?;

    let callback = Rc::new(RefCell::new(None::<FrameCallback>));
    let scheduler = AnimationFrameScheduler {
        window,
        callback: Rc::clone(&callback),
    };
    let animator = Rc::new(RefCell::new(FaviconAnimator::new(
        cfg,
        WebDocument(document.clone()),
        scheduler,
    )?));

    let on_frame = Rc::clone(&animator);
    *callback.borrow_mut() = Some(Closure::new(move |time_ms: f64| {
        if let Err(err) = on_frame.borrow_mut().on_frame(time_ms) {
            tracing::warn!(%err, "favicon frame failed");
        }
    }));

    let on_visibility = Rc::clone(&animator);
    let listener = Closure::<dyn FnMut()>::new(move || {
        if let Err(err) = on_visibility.borrow_mut().on_visibility_change() {
            tracing::warn!(%err, "favicon resume failed");
        }
    });
    document
        .add_event_listener_with_callback("visibilitychange", listener.as_ref().unchecked_ref())
        .map_err(|e| js_err("listen for visibilitychange", e))?;
    listener.forget();

    animator.borrow_mut().start()
}

/// JavaScript entry point: start the animation with the default configuration.
#[wasm_bindgen(js_name = startFaviconAnimation)]
pub fn start_favicon_animation() -> Result<(), JsValue> {
    install(&FaviconConfig::default()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// JavaScript entry point: start the animation with a JSON configuration.
#[wasm_bindgen(js_name = startFaviconAnimationWithConfig)]
pub fn start_favicon_animation_with_config(config_json: &str) -> Result<(), JsValue> {
    FaviconConfig::from_json_str(config_json)
        .and_then(|cfg| install(&cfg))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
