use thiserror::Error;

/// Errors from the editor core.
///
/// A lookup miss is the only failure the core can produce, and it is
/// non-fatal: callers report it and keep going. A missing output device is
/// not an error at all; sends simply become no-ops.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControlError {
    #[error("unknown control id \"{0}\"")]
    UnknownControl(String),
}
