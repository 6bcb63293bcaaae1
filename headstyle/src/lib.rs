pub mod style_tag;

pub use headstyle_core::{StyleCallback, StyleHost, StyleTagController, StyleTagOptions};
pub use headstyle_dom::{DocumentHead, document, random_style_id};
pub use style_tag::{StyleTag, use_style_tag, use_style_tag_in, use_style_tag_with_options};

pub mod prelude {
    pub use crate::style_tag::{
        StyleTag, use_style_tag, use_style_tag_in, use_style_tag_with_options,
    };
    pub use headstyle_core::log::*;
    pub use headstyle_core::{StyleHost, StyleTagOptions};
    pub use headstyle_dom::{DocumentHead, document};
}
