use serde::Deserialize;

#[derive(Deserialize, Debug)]
#[serde(default)]
pub(crate) struct Settings {
    /// MIDI client name registered with the OS.
    pub client_name: String,
    /// Name given to the connection to the selected output port.
    pub port_name: String,
    /// MIDI channel for control change messages (0 = channel 1).
    pub channel: u8,
    /// An output port is auto-selected when its name contains one of these
    /// substrings; otherwise the first available port is used.
    pub preferred_ports: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            client_name: "CZ-1 Mini Editor".to_string(),
            port_name: "CZ-1 Mini Editor Out".to_string(),
            channel: 0,
            preferred_ports: vec!["CZ-1".to_string(), "CZ1".to_string()],
        }
    }
}

impl Settings {
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.client_name.is_empty() {
            return Err("Client name must not be empty".to_string());
        }

        if self.port_name.is_empty() {
            return Err("Port name must not be empty".to_string());
        }

        if self.channel > 15 {
            return Err(format!(
                "MIDI channel should be 0 to 15 (found {})",
                self.channel
            ));
        }

        if self.preferred_ports.iter().any(|p| p.trim().is_empty()) {
            return Err("preferred_ports entries must not be empty".to_string());
        }

        Ok(())
    }
}
