use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;
use crate::command::{CommandReceiver, LightCommand};
use crate::effect::{FrameContext, ModeId, ModeSlot};
use crate::math8::scale8;

/// Default global brightness.
pub const DEFAULT_BRIGHTNESS: u8 = 128;

/// Hour-of-day assumed before the host has synchronized time.
const DEFAULT_HOUR: f32 = 12.0;

/// Configuration for the scene engine
#[derive(Debug, Clone, Copy)]
pub struct SceneEngineConfig {
    pub mode: ModeId,
    pub brightness: u8,
    pub color: Rgb,
    pub rng_seed: u64,
}

impl Default for SceneEngineConfig {
    fn default() -> Self {
        Self {
            mode: ModeId::Off,
            brightness: DEFAULT_BRIGHTNESS,
            color: Rgb {
                r: 255,
                g: 255,
                b: 255,
            },
            rng_seed: 0x00c0_ffee,
        }
    }
}

/// Snapshot of engine state for status reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightStatus {
    pub mode: ModeId,
    pub brightness: u8,
    pub color: Rgb,
}

/// Scene Engine - the main orchestrator
///
/// Owns the pixel buffer exclusively. Each call to [`SceneEngine::render`]
/// drains pending commands, runs the active scene when it is due, and
/// returns a brightness-scaled frame for the output sink.
pub struct SceneEngine<'a, const NUM_LEDS: usize, const COMMAND_CHANNEL_SIZE: usize> {
    // External dependencies and configuration
    commands: CommandReceiver<'a, COMMAND_CHANNEL_SIZE>,
    rng_seed: u64,

    // Internal state
    slot: ModeSlot,
    brightness: u8,
    color: Rgb,
    hour: f32,
    next_scene_frame: Instant,

    // Scenes draw into `frame_buffer`; brightness is applied only into
    // `out_buffer`, so a skipped frame is never scaled twice.
    frame_buffer: [Rgb; NUM_LEDS],
    out_buffer: [Rgb; NUM_LEDS],
}

impl<'a, const NUM_LEDS: usize, const COMMAND_CHANNEL_SIZE: usize>
    SceneEngine<'a, NUM_LEDS, COMMAND_CHANNEL_SIZE>
{
    /// Create a new scene engine reading commands from the channel.
    pub fn new(
        commands: CommandReceiver<'a, COMMAND_CHANNEL_SIZE>,
        config: &SceneEngineConfig,
    ) -> Self {
        Self {
            commands,
            rng_seed: config.rng_seed,
            slot: config.mode.to_slot(config.color, config.rng_seed),
            brightness: config.brightness,
            color: config.color,
            hour: DEFAULT_HOUR,
            next_scene_frame: Instant::from_millis(0),
            frame_buffer: [Rgb::default(); NUM_LEDS],
            out_buffer: [Rgb::default(); NUM_LEDS],
        }
    }

    /// Process one frame
    ///
    /// This is the main render loop step. Call this continuously.
    pub fn render(&mut self, now: Instant) -> &[Rgb] {
        self.process_commands();

        if now >= self.next_scene_frame {
            let ctx = FrameContext {
                now,
                hour: self.hour,
            };
            self.slot.render(&ctx, &mut self.frame_buffer);

            // Scenes with a coarse animation step are not re-rendered until
            // their interval elapses; the loop itself never blocks.
            self.next_scene_frame = match self.slot.frame_interval() {
                Some(interval) => now + interval,
                None => now,
            };
        }

        self.apply_brightness();
        &self.out_buffer
    }

    /// Process pending commands from the channel (non-blocking)
    fn process_commands(&mut self) {
        while let Ok(command) = self.commands.try_receive() {
            self.apply_command(&command);
        }
    }

    /// Apply one decoded control message.
    ///
    /// Field order matches the original dispatcher: power shortcut, mode,
    /// brightness, color. Color switches the scene to Basic.
    pub fn apply_command(&mut self, command: &LightCommand) {
        if let Some(power) = command.power {
            if power {
                if self.mode() == ModeId::Off {
                    self.set_mode(ModeId::Basic);
                }
            } else {
                self.set_mode(ModeId::Off);
            }
        }

        if let Some(mode) = command.mode {
            self.set_mode(mode);
        }

        if let Some(brightness) = command.brightness {
            self.set_brightness(brightness);
        }

        if let Some(color) = command.color {
            self.set_custom_color(color);
        }
    }

    /// Switch the active mode.
    ///
    /// The transition is atomic: the new scene starts from fresh state.
    /// Entering Off clears the buffer within the same frame, not the next.
    pub fn set_mode(&mut self, mode: ModeId) {
        self.slot = mode.to_slot(self.color, self.next_seed());
        if mode == ModeId::Off {
            self.frame_buffer = [Rgb::default(); NUM_LEDS];
        }
        // Render the new scene immediately regardless of the previous
        // scene's frame interval.
        self.next_scene_frame = Instant::from_millis(0);

        #[cfg(feature = "esp32-log")]
        println!("[scene] mode changed to: {}", mode.as_str());
    }

    /// Set the global brightness multiplier.
    ///
    /// Applied only in the output pass; per-pixel scene colors are untouched.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;

        #[cfg(feature = "esp32-log")]
        println!("[scene] brightness set to: {}", brightness);
    }

    /// Store a custom color and switch to Basic mode.
    pub fn set_custom_color(&mut self, color: Rgb) {
        self.color = color;
        if self.mode() == ModeId::Basic {
            self.slot.set_color(color);
        } else {
            self.set_mode(ModeId::Basic);
        }
    }

    /// Update the wall-clock hour-of-day (e.g. 14.5 for 14:30).
    pub fn set_hour_of_day(&mut self, hour: f32) {
        self.hour = hour;
    }

    /// Currently active mode.
    pub const fn mode(&self) -> ModeId {
        self.slot.id()
    }

    /// Current global brightness.
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Current custom color.
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// State snapshot for the status reporter.
    pub const fn status(&self) -> LightStatus {
        LightStatus {
            mode: self.slot.id(),
            brightness: self.brightness,
            color: self.color,
        }
    }

    /// Derive a fresh seed per scene switch so repeated entries into the
    /// same mode do not replay the identical animation.
    fn next_seed(&mut self) -> u64 {
        self.rng_seed = self.rng_seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
        self.rng_seed
    }

    fn apply_brightness(&mut self) {
        match self.brightness {
            255 => self.out_buffer = self.frame_buffer,
            0 => self.out_buffer = [Rgb::default(); NUM_LEDS],
            level => {
                for (out, src) in self.out_buffer.iter_mut().zip(&self.frame_buffer) {
                    out.r = scale8(src.r, level);
                    out.g = scale8(src.g, level);
                    out.b = scale8(src.b, level);
                }
            }
        }
    }
}
