use std::cell::RefCell;
use std::rc::Rc;

use crate::host::StyleHost;
use crate::options::{StyleCallback, StyleTagOptions};

/// Fallback identity source when neither an explicit id nor a generator was
/// supplied. Counter-based, so ids stay deterministic under test.
fn next_fallback_id() -> String {
    std::thread_local! {
        static STYLE_COUNTER: std::cell::Cell<usize> = const { std::cell::Cell::new(0) };
    }
    let n = STYLE_COUNTER.with(|c| {
        let id = c.get();
        c.set(id + 1);
        id
    });
    format!("head-style-{}", n)
}

/// Owns at most one injected style element inside a [`StyleHost`] and tracks
/// whether it is currently attached.
///
/// States are `Unloaded` and `Loaded`. [`load`](Self::load) moves to `Loaded`
/// (guarded by head availability), [`unload`](Self::unload) moves back, and
/// [`update_css`](Self::update_css) mutates content without changing state.
/// Every operation is a total function: failed preconditions are silent
/// no-ops, never errors.
pub struct StyleTagController<H: StyleHost> {
    host: H,
    id: String,
    css: String,
    media: Option<String>,
    on_load: Option<StyleCallback>,
    on_unload: Option<StyleCallback>,
    immediate: bool,
    manual: bool,
    delete_on_teardown: bool,
    handle: Option<H::Handle>,
    loaded: bool,
    activated: bool,
}

impl<H: StyleHost> StyleTagController<H> {
    pub fn new(host: H, css: impl Into<String>, options: StyleTagOptions) -> Self {
        let StyleTagOptions {
            media,
            immediate,
            manual,
            id,
            on_load,
            on_unload,
            delete_on_teardown,
            id_generator,
        } = options;

        let id = id
            .or_else(|| id_generator.map(|generate| generate()))
            .unwrap_or_else(next_fallback_id);

        Self {
            host,
            id,
            css: css.into(),
            media,
            on_load,
            on_unload,
            immediate,
            manual,
            delete_on_teardown,
            handle: None,
            loaded: false,
            activated: false,
        }
    }

    /// Stable identity of the style element.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current CSS value. Reflects updates buffered while unloaded.
    pub fn css(&self) -> &str {
        &self.css
    }

    /// True iff the owned element exists and is attached to the head.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Attaches the style element and writes the current CSS into it.
    ///
    /// No-op when already loaded, when an element is already owned, or when
    /// the host has no usable head. An existing element with the same id is
    /// reused: if it is already connected it is adopted as-is (its media
    /// attribute is left untouched), otherwise it is reconfigured and
    /// appended.
    pub fn load(&mut self) {
        if self.loaded || self.handle.is_some() || !self.host.head_available() {
            return;
        }

        let handle = match self.host.find_by_id(&self.id) {
            Some(existing) => existing,
            None => match self.host.create_style() {
                Some(fresh) => fresh,
                None => return,
            },
        };

        if !self.host.is_connected(&handle) {
            self.host
                .configure(&handle, &self.id, self.media.as_deref());
            if !self.host.append_to_head(&handle) {
                return;
            }
        }

        self.host.set_css_text(&handle, &self.css);
        self.handle = Some(handle);

        if let Some(on_load) = &self.on_load {
            on_load();
        }

        self.loaded = true;
    }

    /// Detaches the owned style element and releases ownership.
    ///
    /// No-op when nothing is loaded and nothing is owned.
    pub fn unload(&mut self) {
        if !self.loaded && self.handle.is_none() {
            return;
        }

        if let Some(handle) = self.handle.take() {
            self.host.detach(&handle);
        }

        if let Some(on_unload) = &self.on_unload {
            on_unload();
        }

        self.loaded = false;
    }

    /// Stores a new CSS value. Applied to the attached element immediately
    /// when loaded, otherwise buffered until the next [`load`](Self::load).
    pub fn update_css(&mut self, value: impl Into<String>) {
        self.css = value.into();
        if self.loaded
            && let Some(handle) = &self.handle
        {
            self.host.set_css_text(handle, &self.css);
        }
    }

    /// Lifecycle notification: the owning component mounted.
    ///
    /// On the first call after construction (or after
    /// [`deactivate`](Self::deactivate)) this auto-loads unless configured
    /// `manual` or not `immediate`. Repeated calls are no-ops.
    pub fn activate(&mut self) {
        if self.activated {
            return;
        }
        self.activated = true;

        if self.immediate && !self.manual {
            self.load();
        }
    }

    /// Lifecycle notification: the owning component unmounted.
    ///
    /// Unloads when configured to delete on teardown (no-op safe regardless
    /// of current state) and re-arms [`activate`](Self::activate).
    pub fn deactivate(&mut self) {
        if self.delete_on_teardown {
            self.unload();
        }
        self.activated = false;
    }
}

/// Cheaply clonable shared handle over a [`StyleTagController`].
///
/// Clones share one controller, so a load through one clone is visible
/// through every other. Callbacks run while the controller is borrowed;
/// reentrant calls through the same handle degrade to no-ops instead of
/// panicking.
pub struct StyleTag<H: StyleHost> {
    inner: Rc<RefCell<StyleTagController<H>>>,
}

impl<H: StyleHost> Clone for StyleTag<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<H: StyleHost> StyleTag<H> {
    pub fn new(host: H, css: impl Into<String>, options: StyleTagOptions) -> Self {
        Self {
            inner: Rc::new(RefCell::new(StyleTagController::new(host, css, options))),
        }
    }

    pub fn id(&self) -> String {
        self.inner
            .try_borrow()
            .map(|inner| inner.id().to_string())
            .unwrap_or_default()
    }

    pub fn css(&self) -> String {
        self.inner
            .try_borrow()
            .map(|inner| inner.css().to_string())
            .unwrap_or_default()
    }

    pub fn is_loaded(&self) -> bool {
        self.inner
            .try_borrow()
            .map(|inner| inner.is_loaded())
            .unwrap_or(false)
    }

    pub fn load(&self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.load();
        }
    }

    pub fn unload(&self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.unload();
        }
    }

    pub fn update_css(&self, value: impl Into<String>) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.update_css(value);
        }
    }

    pub fn activate(&self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.activate();
        }
    }

    pub fn deactivate(&self) {
        if let Ok(mut inner) = self.inner.try_borrow_mut() {
            inner.deactivate();
        }
    }
}

// --- Tests ---
