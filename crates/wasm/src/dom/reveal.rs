use std::cell::RefCell;
use std::rc::Weak;

use folio_core::Section;
use folio_core::html::{REVEAL_CLASS, REVEALED_CLASS};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::Inner;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// A native `IntersectionObserver` over every reveal region under a root.
/// Dropping it disconnects the observer.
pub struct RevealWatcher {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl RevealWatcher {
    pub fn observe(root: &Element, inner: Weak<RefCell<Inner>>, threshold: f64) -> Result<Self, JsValue> {
        let callback = ObserverCallback::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            let Some(inner) = inner.upgrade() else {
                return;
            };
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let Ok(section) = target.id().parse::<Section>() else {
                    continue;
                };
                let revealed = match inner.try_borrow_mut() {
                    Ok(mut inner) => inner.reveal.on_intersection(&section, entry.intersection_ratio()),
                    Err(_) => false,
                };
                if !revealed {
                    continue;
                }
                if let Err(err) = target.class_list().add_1(REVEALED_CLASS) {
                    log::warn!("failed to reveal #{section}: {err:?}");
                }
                observer.unobserve(&target);
                log::debug!("revealed #{section}");
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let regions = root.query_selector_all(&format!(".{REVEAL_CLASS}"))?;
        for index in 0..regions.length() {
            let Some(region) = regions.item(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
                continue;
            };
            // Already revealed regions stay as they are.
            if !region.class_list().contains(REVEALED_CLASS) {
                observer.observe(&region);
            }
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
