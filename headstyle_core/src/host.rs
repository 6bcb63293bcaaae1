/// Operations a [`StyleTagController`](crate::StyleTagController) needs from
/// the container that owns dynamically injected style elements.
///
/// The controller never touches a document directly; everything flows through
/// this seam so the head container can be swapped out (a real
/// `web_sys::Document` in the browser, an in-memory stand-in under test).
///
/// All methods are infallible at the API level. DOM-level failures collapse to
/// `None` / `false` / no-op, which keeps every public controller operation a
/// total function on its current state.
pub trait StyleHost {
    /// Handle to a single style element owned by this host.
    type Handle: Clone;

    /// Whether a usable head container currently exists.
    fn head_available(&self) -> bool;

    /// Looks up an existing element by id.
    fn find_by_id(&self, id: &str) -> Option<Self::Handle>;

    /// Whether the element behind `handle` is attached to its document.
    fn is_connected(&self, handle: &Self::Handle) -> bool;

    /// Creates a bare, detached style element. `None` when the document
    /// cannot create one.
    fn create_style(&self) -> Option<Self::Handle>;

    /// Sets the element id and, when given, the media attribute.
    fn configure(&self, handle: &Self::Handle, id: &str, media: Option<&str>);

    /// Appends the element to the head. `false` when the head is gone or the
    /// append was rejected.
    fn append_to_head(&self, handle: &Self::Handle) -> bool;

    /// Writes the element's text content.
    fn set_css_text(&self, handle: &Self::Handle, css: &str);

    /// Removes the element from its parent, if any.
    fn detach(&self, handle: &Self::Handle);
}
