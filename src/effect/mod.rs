//! Scene system with compile-time known mode variants
//!
//! All per-scene animation state lives in an enum to avoid heap
//! allocations. Each scene implements the `Effect` trait.

mod apocalypse;
mod basic;
mod meteor;
mod rain;
mod sky;

pub use apocalypse::ApocalypseEffect;
pub use basic::BasicEffect;
use embassy_time::{Duration, Instant};
pub use meteor::MeteorEffect;
pub use rain::RainEffect;
pub use sky::{SkyEffect, sun_color_temp, sun_intensity, sun_position_index};

use crate::color::Rgb;

const MODE_NAME_OFF: &str = "off";
const MODE_NAME_SKY_SIMULATION: &str = "sky_simulation";
const MODE_NAME_RAIN: &str = "rain";
const MODE_NAME_METEOR: &str = "meteor";
const MODE_NAME_APOCALYPSE: &str = "apocalypse";
const MODE_NAME_BASIC: &str = "basic";

const MODE_ID_OFF: u8 = 0;
const MODE_ID_SKY_SIMULATION: u8 = 1;
const MODE_ID_RAIN: u8 = 2;
const MODE_ID_METEOR: u8 = 3;
const MODE_ID_APOCALYPSE: u8 = 4;
const MODE_ID_BASIC: u8 = 5;

/// Per-frame inputs shared by all scenes.
///
/// `hour` is the wall-clock hour-of-day as a float (14.5 for 14:30),
/// derived by the host from synchronized time. The engine never reads a
/// clock itself.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    pub now: Instant,
    pub hour: f32,
}

pub trait Effect {
    /// Minimum interval between renders.
    ///
    /// Scenes with coarse animation steps (meteor trails, fire flicker)
    /// declare an interval; the engine skips re-rendering until it elapses
    /// instead of blocking the shared loop.
    const FRAME_INTERVAL: Option<Duration> = None;

    /// Render a single frame
    fn render(&mut self, ctx: &FrameContext, leds: &mut [Rgb]);
}

/// Known mode ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ModeId {
    Off = MODE_ID_OFF,
    SkySimulation = MODE_ID_SKY_SIMULATION,
    Rain = MODE_ID_RAIN,
    Meteor = MODE_ID_METEOR,
    Apocalypse = MODE_ID_APOCALYPSE,
    Basic = MODE_ID_BASIC,
}

/// Mode slot - enum containing all possible scenes with their state
#[derive(Debug, Clone)]
pub enum ModeSlot {
    /// Strip cleared, no per-frame work
    Off,
    /// Day/night sky with a moving sun highlight
    SkySimulation(SkyEffect),
    /// Stormy ambient with raindrops and lightning
    Rain(RainEffect),
    /// Meteor shower with fading trails
    Meteor(MeteorEffect),
    /// Fire flicker with smoke patches
    Apocalypse(ApocalypseEffect),
    /// Solid custom color
    Basic(BasicEffect),
}

impl Default for ModeSlot {
    fn default() -> Self {
        Self::Off
    }
}

impl ModeId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_OFF => Self::Off,
            MODE_ID_SKY_SIMULATION => Self::SkySimulation,
            MODE_ID_RAIN => Self::Rain,
            MODE_ID_METEOR => Self::Meteor,
            MODE_ID_APOCALYPSE => Self::Apocalypse,
            MODE_ID_BASIC => Self::Basic,
            _ => return None,
        })
    }

    /// Build a fresh slot for this mode.
    ///
    /// Switching modes always rebuilds the slot, so transient animation
    /// state never carries over between scenes.
    pub fn to_slot(self, color: Rgb, rng_seed: u64) -> ModeSlot {
        match self {
            Self::Off => ModeSlot::Off,
            Self::SkySimulation => ModeSlot::SkySimulation(SkyEffect::new()),
            Self::Rain => ModeSlot::Rain(RainEffect::new(rng_seed)),
            Self::Meteor => ModeSlot::Meteor(MeteorEffect::new(rng_seed)),
            Self::Apocalypse => ModeSlot::Apocalypse(ApocalypseEffect::new(rng_seed)),
            Self::Basic => ModeSlot::Basic(BasicEffect::new(color)),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => MODE_NAME_OFF,
            Self::SkySimulation => MODE_NAME_SKY_SIMULATION,
            Self::Rain => MODE_NAME_RAIN,
            Self::Meteor => MODE_NAME_METEOR,
            Self::Apocalypse => MODE_NAME_APOCALYPSE,
            Self::Basic => MODE_NAME_BASIC,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_OFF => Some(Self::Off),
            MODE_NAME_SKY_SIMULATION => Some(Self::SkySimulation),
            MODE_NAME_RAIN => Some(Self::Rain),
            MODE_NAME_METEOR => Some(Self::Meteor),
            MODE_NAME_APOCALYPSE => Some(Self::Apocalypse),
            MODE_NAME_BASIC => Some(Self::Basic),
            _ => None,
        }
    }
}

impl ModeSlot {
    /// Render the current scene
    pub fn render(&mut self, ctx: &FrameContext, leds: &mut [Rgb]) {
        match self {
            Self::Off => {}
            Self::SkySimulation(effect) => effect.render(ctx, leds),
            Self::Rain(effect) => effect.render(ctx, leds),
            Self::Meteor(effect) => effect.render(ctx, leds),
            Self::Apocalypse(effect) => effect.render(ctx, leds),
            Self::Basic(effect) => effect.render(ctx, leds),
        }
    }

    /// Get the mode ID for external observation
    pub const fn id(&self) -> ModeId {
        match self {
            Self::Off => ModeId::Off,
            Self::SkySimulation(_) => ModeId::SkySimulation,
            Self::Rain(_) => ModeId::Rain,
            Self::Meteor(_) => ModeId::Meteor,
            Self::Apocalypse(_) => ModeId::Apocalypse,
            Self::Basic(_) => ModeId::Basic,
        }
    }

    /// Minimum interval between renders for the active scene.
    ///
    /// Derived from each scene's `Effect::FRAME_INTERVAL` constant.
    pub const fn frame_interval(&self) -> Option<Duration> {
        match self {
            Self::Off => None,
            Self::SkySimulation(_) => SkyEffect::FRAME_INTERVAL,
            Self::Rain(_) => RainEffect::FRAME_INTERVAL,
            Self::Meteor(_) => MeteorEffect::FRAME_INTERVAL,
            Self::Apocalypse(_) => ApocalypseEffect::FRAME_INTERVAL,
            Self::Basic(_) => BasicEffect::FRAME_INTERVAL,
        }
    }

    /// Update the color of the current scene (Basic only).
    pub fn set_color(&mut self, color: Rgb) {
        if let Self::Basic(effect) = self {
            effect.set_color(color);
        }
    }
}
