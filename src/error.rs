//! Wiring errors for controllers that depend on browser globals or page anchors.

/// Failure to attach a controller to the page.
///
/// Reported once at boot; the affected controller is skipped and the rest of
/// the page keeps working.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Not running in a browser window.
    #[error("no global window object")]
    NoWindow,
    /// The window carries no document.
    #[error("window has no document")]
    NoDocument,
    /// A required element is missing from the markup (or has the wrong type).
    #[error("required element missing: {0}")]
    MissingElement(String),
    /// The EmailJS widget script is not loaded on the page.
    #[error("email widget not loaded")]
    EmailWidgetUnavailable,
    /// The intersection observer could not be constructed.
    #[error("intersection observer unavailable")]
    ObserverUnavailable,
}
