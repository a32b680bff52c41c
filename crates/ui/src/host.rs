//! Side effects on the embedding page.

use folio_core::DocumentAttrs;

/// Apply `lang` and `dir` to the root element of the hosting document.
#[cfg(target_arch = "wasm32")]
pub fn apply_document_attrs(attrs: DocumentAttrs) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        log::warn!("no document element, lang/dir not applied");
        return;
    };
    for (name, value) in [("lang", attrs.lang), ("dir", attrs.dir)] {
        if let Err(err) = root.set_attribute(name, value) {
            log::warn!("failed to set {name}={value}: {err:?}");
        }
    }
}

/// Native windows have no document; direction is handled by the layout.
#[cfg(not(target_arch = "wasm32"))]
pub fn apply_document_attrs(attrs: DocumentAttrs) {
    log::debug!("document attrs lang={} dir={}", attrs.lang, attrs.dir);
}
