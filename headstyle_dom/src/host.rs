use headstyle_core::StyleHost;
use headstyle_core::log::console_error;
use web_sys::{Document, Element};

/// [`StyleHost`] over a real [`Document`](web_sys::Document).
///
/// Style elements are looked up and appended inside the document's `<head>`.
/// A document without a head is reported as unavailable, which the
/// controller treats as a silent precondition failure; unexpected DOM
/// rejections are logged and absorbed the same way.
#[derive(Clone)]
pub struct DocumentHead {
    document: Document,
}

impl DocumentHead {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl StyleHost for DocumentHead {
    type Handle = Element;

    fn head_available(&self) -> bool {
        self.document.head().is_some()
    }

    fn find_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn is_connected(&self, handle: &Element) -> bool {
        handle.is_connected()
    }

    fn create_style(&self) -> Option<Element> {
        match self.document.create_element("style") {
            Ok(element) => Some(element),
            Err(err) => {
                console_error(format!("Failed to create style element: {:?}", err));
                None
            }
        }
    }

    fn configure(&self, handle: &Element, id: &str, media: Option<&str>) {
        handle.set_id(id);
        if let Some(media) = media {
            let _ = handle.set_attribute("media", media);
        }
    }

    fn append_to_head(&self, handle: &Element) -> bool {
        let Some(head) = self.document.head() else {
            return false;
        };
        match head.append_child(handle) {
            Ok(_) => true,
            Err(err) => {
                console_error(format!("Failed to append style to head: {:?}", err));
                false
            }
        }
    }

    fn set_css_text(&self, handle: &Element, css: &str) {
        handle.set_text_content(Some(css));
    }

    fn detach(&self, handle: &Element) {
        handle.remove();
    }
}
