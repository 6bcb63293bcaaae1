use std::rc::Rc;

use headstyle_core::StyleTagOptions;
use headstyle_dom::{DocumentHead, document, random_style_id};
use web_sys::Document;

/// A style tag handle bound to a real document head.
pub type StyleTag = headstyle_core::StyleTag<DocumentHead>;

/// Injects `css` into the global document's head with default options.
///
/// The returned handle is framework-agnostic: call
/// [`activate`](headstyle_core::StyleTag::activate) when the owning component
/// mounts and [`deactivate`](headstyle_core::StyleTag::deactivate) when it
/// unmounts.
///
/// ```rust,ignore
/// use headstyle::prelude::*;
///
/// let tag = use_style_tag(".banner { color: red }");
/// tag.activate();
///
/// tag.update_css(".banner { color: blue }");
///
/// tag.deactivate();
/// ```
pub fn use_style_tag(css: impl Into<String>) -> StyleTag {
    use_style_tag_with_options(css, StyleTagOptions::default())
}

/// Injects `css` into the global document's head with explicit options.
pub fn use_style_tag_with_options(css: impl Into<String>, options: StyleTagOptions) -> StyleTag {
    use_style_tag_in(document(), css, options)
}

/// Variant with an explicitly injected target document.
///
/// When no id and no generator were supplied, the random token generator is
/// installed so every invocation gets its own element.
pub fn use_style_tag_in(
    document: Document,
    css: impl Into<String>,
    mut options: StyleTagOptions,
) -> StyleTag {
    if options.id.is_none() && options.id_generator.is_none() {
        options.id_generator = Some(Rc::new(|| random_style_id()));
    }
    StyleTag::new(DocumentHead::new(document), css, options)
}
