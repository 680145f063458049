//! Apocalypse scene
//!
//! Fire flicker: every pixel gets an independent random red level, with
//! occasional darker bands simulating smoke drifting over the flames.

use embassy_time::Duration;

use super::{Effect, FrameContext};
use crate::{color::Rgb, math8::scale8, rng::TickRng};

/// Red channel flicker bounds.
const FLICKER_MIN: i32 = 50;
const FLICKER_MAX: i32 = 255;

/// Per-tick probability of a smoke band (percent).
const SMOKE_CHANCE: u8 = 20;

/// Smoke band width bounds (pixels).
const SMOKE_WIDTH_MIN: i32 = 3;
const SMOKE_WIDTH_MAX: i32 = 8;

/// Smoke fade amount (fadeToBlackBy semantics: scale by 255 - FADE).
const SMOKE_FADE: u8 = 150;

/// Apocalypse scene state.
#[derive(Debug, Clone)]
pub struct ApocalypseEffect {
    rng: TickRng,
}

impl ApocalypseEffect {
    pub const fn new(rng_seed: u64) -> Self {
        Self {
            rng: TickRng::new(rng_seed),
        }
    }
}

impl Effect for ApocalypseEffect {
    // Coarse animation step; flicker rate is independent of host loop speed.
    const FRAME_INTERVAL: Option<Duration> = Some(Duration::from_millis(30));

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&mut self, _ctx: &FrameContext, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }

        for led in leds.iter_mut() {
            let flicker = self.rng.range(FLICKER_MIN, FLICKER_MAX) as u8;
            *led = Rgb {
                r: flicker,
                g: flicker / 4,
                b: 0,
            };
        }

        // Smoke: darken a random contiguous band
        if self.rng.chance(SMOKE_CHANCE) {
            let pos = self.rng.index(leds.len());
            let width = self.rng.range(SMOKE_WIDTH_MIN, SMOKE_WIDTH_MAX) as usize;
            let end = (pos + width).min(leds.len());
            let keep = 255 - SMOKE_FADE;
            for led in &mut leds[pos..end] {
                led.r = scale8(led.r, keep);
                led.g = scale8(led.g, keep);
                led.b = scale8(led.b, keep);
            }
        }
    }
}
