pub mod host;

pub use host::DocumentHead;

use web_sys::Document;

thread_local! {
    static DOCUMENT: Document = {
        let window = web_sys::window().expect("No global window");
        window.document().expect("No document")
    };
}

/// Returns the cached [`Document`](web_sys::Document).
pub fn document() -> Document {
    DOCUMENT.with(|d| d.clone())
}

/// Generates a fresh element id for an injected style tag
/// (e.g. "head-style-9f3a1c07d2e45b68").
pub fn random_style_id() -> String {
    let bits = (js_sys::Math::random() * u64::MAX as f64) as u64;
    format!("head-style-{:x}", bits)
}
