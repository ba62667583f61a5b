//! Parameter mapping core for the CZ-1 Mini CC editor.
//!
//! Three pieces: the [`registry`] of patch controls (id, CC address, default,
//! optional label table), the [`ranges`] module's piecewise range decoder,
//! and the [`session`] layer that turns a value change into one or two
//! outgoing control change messages plus a display label. Everything here is
//! transport-free; hosts plug in a real MIDI port through [`CcSend`].

pub mod cc;
pub mod error;
pub mod ranges;
pub mod registry;
pub mod session;

pub use error::ControlError;
pub use ranges::{Band, RangeTable};
pub use registry::{ControlDescriptor, Registry, SecondarySend};
pub use session::{CcSend, Session};
