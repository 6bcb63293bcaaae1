use std::rc::Rc;

/// A shared zero-argument callback, fired on load/unload transitions.
pub type StyleCallback = Rc<dyn Fn()>;

/// Options recognized by the style tag entry points.
///
/// All fields have defaults; setters chain:
///
/// ```rust
/// use headstyle_core::StyleTagOptions;
///
/// let options = StyleTagOptions::new()
///     .media("print")
///     .id("print-rules")
///     .manual(true);
/// assert!(options.manual);
/// ```
#[derive(Clone)]
pub struct StyleTagOptions {
    /// Media attribute applied to the element at creation.
    pub media: Option<String>,
    /// Auto-load on the first activation. Defaults to `true`.
    pub immediate: bool,
    /// Suppress auto-load even when `immediate` is set. Defaults to `false`.
    pub manual: bool,
    /// Stable identity for the style element. Generated once when absent.
    pub id: Option<String>,
    /// Fired exactly once per unloaded-to-loaded transition.
    pub on_load: Option<StyleCallback>,
    /// Fired exactly once per loaded-to-unloaded transition.
    pub on_unload: Option<StyleCallback>,
    /// Unload the element on deactivation. Defaults to `true`.
    pub delete_on_teardown: bool,
    /// Identity source used when `id` is absent. Injectable so tests can pin
    /// generated ids.
    pub id_generator: Option<Rc<dyn Fn() -> String>>,
}

impl Default for StyleTagOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleTagOptions {
    pub fn new() -> Self {
        Self {
            media: None,
            immediate: true,
            manual: false,
            id: None,
            on_load: None,
            on_unload: None,
            delete_on_teardown: true,
            id_generator: None,
        }
    }

    pub fn media(mut self, media: impl Into<String>) -> Self {
        self.media = Some(media.into());
        self
    }

    pub fn immediate(mut self, immediate: bool) -> Self {
        self.immediate = immediate;
        self
    }

    pub fn manual(mut self, manual: bool) -> Self {
        self.manual = manual;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn on_load(mut self, f: impl Fn() + 'static) -> Self {
        self.on_load = Some(Rc::new(f));
        self
    }

    pub fn on_unload(mut self, f: impl Fn() + 'static) -> Self {
        self.on_unload = Some(Rc::new(f));
        self
    }

    pub fn delete_on_teardown(mut self, delete: bool) -> Self {
        self.delete_on_teardown = delete;
        self
    }

    pub fn id_generator(mut self, f: impl Fn() -> String + 'static) -> Self {
        self.id_generator = Some(Rc::new(f));
        self
    }
}
