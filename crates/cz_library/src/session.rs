//! Editor session: bridges control changes to the MIDI transport.
//!
//! The session owns the two pieces of mutable editor state, the currently
//! selected output and the last status label, so the core stays testable
//! without a live transport. Sends are fire-and-forget; with no output
//! selected they are silent no-ops.

use rand::Rng;

use crate::cc;
use crate::error::ControlError;
use crate::registry::Registry;

/// Non-blocking transport for a single 3-byte MIDI message.
pub trait CcSend {
    fn send(&mut self, message: [u8; 3]);
}

pub struct Session<'a, T: CcSend> {
    registry: &'a Registry,
    channel: u8,
    output: Option<T>,
    last_status: Option<String>,
}

impl<'a, T: CcSend> Session<'a, T> {
    /// `channel` is the MIDI channel (0-15) stamped into every status byte.
    pub fn new(registry: &'a Registry, channel: u8) -> Self {
        Self {
            registry,
            channel: channel & 0x0F,
            output: None,
            last_status: None,
        }
    }

    pub fn registry(&self) -> &Registry {
        self.registry
    }

    pub fn set_output(&mut self, output: T) {
        self.output = Some(output);
    }

    /// Deselects the output; subsequent sends are dropped.
    pub fn clear_output(&mut self) -> Option<T> {
        self.output.take()
    }

    pub fn has_output(&self) -> bool {
        self.output.is_some()
    }

    /// The status label produced by the most recent control change.
    pub fn last_status(&self) -> Option<&str> {
        self.last_status.as_deref()
    }

    fn send_cc(&mut self, address: u8, value: u8) {
        if let Some(output) = &mut self.output {
            output.send([
                cc::CONTROL_CHANGE | self.channel,
                address & 0x7F,
                value & 0x7F,
            ]);
        }
    }

    /// Handles one value change: always sends the primary `(address, value)`
    /// CC, then the derived secondary send if the control carries one, and
    /// returns the status label for display.
    pub fn control_changed(&mut self, id: &str, value: u8) -> Result<String, ControlError> {
        let Some(control) = self.registry.lookup(id).copied() else {
            return Err(ControlError::UnknownControl(id.to_string()));
        };

        self.send_cc(control.address, value);
        if let Some(secondary) = control.secondary {
            self.send_cc(secondary.address, secondary.derive.classify(value));
        }

        let status = match control.decode {
            Some(table) => format!("{}: {}", control.display, table.classify(value)),
            None => format!("{}: {}", control.display, value),
        };
        self.last_status = Some(status.clone());
        Ok(status)
    }

    /// Status label for a value without sending anything.
    pub fn decode(&self, id: &str, value: u8) -> Result<String, ControlError> {
        let Some(control) = self.registry.lookup(id) else {
            return Err(ControlError::UnknownControl(id.to_string()));
        };
        Ok(match control.decode {
            Some(table) => format!("{}: {}", control.display, table.classify(value)),
            None => format!("{}: {}", control.display, value),
        })
    }

    /// Sends every control's default value, in registration order.
    pub fn init_patch(&mut self) {
        let registry = self.registry;
        registry.reset_all(|address, value| self.send_cc(address, value));
    }

    /// Sends one uniform random value per control, in registration order.
    pub fn random_patch<R: Rng>(&mut self, rng: &mut R) {
        let registry = self.registry;
        registry.randomize_all(rng, |address, value| self.send_cc(address, value));
    }
}
