pub mod controller;
pub mod host;
pub mod log;
pub mod options;

pub use controller::{StyleTag, StyleTagController};
pub use host::StyleHost;
pub use options::{StyleCallback, StyleTagOptions};

pub mod prelude {
    pub use crate::controller::{StyleTag, StyleTagController};
    pub use crate::host::StyleHost;
    pub use crate::log::*;
    pub use crate::options::{StyleCallback, StyleTagOptions};
}
