//! Presence-driven automatic override.
//!
//! Wraps the scene engine's control surface: while enabled, a periodic
//! radar check (host cadence, ~500 ms) decides on/off instead of manual
//! commands. Presence is a plain input parameter each check; the
//! controller never touches the sensor itself, so a missing radar simply
//! means the host reports `presence = false`.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    color::Rgb,
    command::LightCommand,
    effect::ModeId,
};

/// Farthest detection distance that counts as presence (cm).
pub const PRESENCE_MAX_DISTANCE_CM: u16 = 2000;

/// Color forced while someone is present.
pub const PRESENCE_COLOR: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Brightness forced while someone is present.
pub const PRESENCE_BRIGHTNESS: u8 = 200;

/// Presence override controller.
#[derive(Debug, Clone)]
pub struct PresenceOverride {
    enabled: bool,
    last_manual_mode: ModeId,
}

impl Default for PresenceOverride {
    fn default() -> Self {
        Self::new()
    }
}

impl PresenceOverride {
    pub const fn new() -> Self {
        Self {
            enabled: false,
            last_manual_mode: ModeId::Off,
        }
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Mode captured when the override was last enabled.
    ///
    /// Captured but never restored automatically; a host that wants
    /// resume-on-disable semantics can read it and switch back itself.
    pub const fn last_manual_mode(&self) -> ModeId {
        self.last_manual_mode
    }

    /// Enable or disable the override.
    ///
    /// Enabling captures `current_mode` so a future manual-resume policy
    /// has something to restore. Disabling leaves the engine in whatever
    /// mode the last check forced.
    pub fn set_enabled(&mut self, enabled: bool, current_mode: ModeId) {
        if enabled && !self.enabled {
            self.last_manual_mode = current_mode;
        }
        self.enabled = enabled;

        #[cfg(feature = "esp32-log")]
        println!(
            "[presence] override {}",
            if enabled { "enabled" } else { "disabled" }
        );
    }

    /// Run one presence check.
    ///
    /// Returns the command to apply, or `None` when disabled or when the
    /// engine is already in the wanted state (avoids redundant writes).
    pub fn check(
        &self,
        presence: bool,
        distance_cm: u16,
        current_mode: ModeId,
    ) -> Option<LightCommand> {
        if !self.enabled {
            return None;
        }

        let in_range = presence && distance_cm > 0 && distance_cm <= PRESENCE_MAX_DISTANCE_CM;
        if in_range {
            if current_mode == ModeId::Off {
                return Some(LightCommand {
                    mode: Some(ModeId::Basic),
                    color: Some(PRESENCE_COLOR),
                    brightness: Some(PRESENCE_BRIGHTNESS),
                    ..LightCommand::default()
                });
            }
        } else if current_mode != ModeId::Off {
            return Some(LightCommand::with_mode(ModeId::Off));
        }

        None
    }

    /// Pre-process an inbound command.
    ///
    /// Consumes `presence_mode_enabled`, and drops the manual `led_is_on`
    /// shortcut while the override is enabled. Mode, brightness and color
    /// still pass through; the next periodic check may overwrite them,
    /// which matches the observed firmware behavior.
    pub fn filter_command(&mut self, command: LightCommand, current_mode: ModeId) -> LightCommand {
        let mut filtered = command;

        if let Some(enabled) = filtered.presence_mode_enabled.take() {
            self.set_enabled(enabled, current_mode);
        }

        if self.enabled {
            filtered.power = None;
        }

        filtered
    }
}
