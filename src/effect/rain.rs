//! Rain scene
//!
//! Stormy blue-gray ambient with per-pixel noise, occasional raindrop
//! specks and a two-state lightning machine (idle / flashing).

use embassy_time::Instant;

use super::{Effect, FrameContext};
use crate::{color::Rgb, rng::TickRng};

const BASE_COLOR: Rgb = Rgb { r: 5, g: 8, b: 15 };
const DROP_COLOR: Rgb = Rgb { r: 2, g: 5, b: 10 };

/// Per-tick probability of a raindrop speck (percent).
const DROP_CHANCE: u8 = 30;

/// Bounds for the random idle time between flashes (ms).
const FLASH_DELAY_MIN_MS: i32 = 3000;
const FLASH_DELAY_MAX_MS: i32 = 8000;

/// Initial flash brightness and per-tick decay.
const FLASH_BRIGHTNESS: i32 = 255;
const FLASH_DECAY: i32 = 30;

/// Pixels lit on each side of the flash center.
const FLASH_SPREAD: i32 = 15;

/// Rain scene state.
#[derive(Debug, Clone)]
pub struct RainEffect {
    rng: TickRng,
    last_flash: Instant,
    flashing: bool,
    flash_brightness: i32,
    flash_center: i32,
}

impl RainEffect {
    pub const fn new(rng_seed: u64) -> Self {
        Self {
            rng: TickRng::new(rng_seed),
            last_flash: Instant::from_millis(0),
            flashing: false,
            flash_brightness: 0,
            flash_center: 0,
        }
    }

    /// Whether a lightning flash is in progress.
    pub const fn is_flashing(&self) -> bool {
        self.flashing
    }

    /// Remaining flash brightness (0 when idle).
    pub const fn flash_brightness(&self) -> i32 {
        if self.flashing { self.flash_brightness } else { 0 }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn add_jitter(channel: u8, jitter: i32) -> u8 {
        (i32::from(channel) + jitter).clamp(0, 255) as u8
    }
}

impl Effect for RainEffect {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn render(&mut self, ctx: &FrameContext, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }
        let len = leds.len() as i32;

        // Stormy base with independent per-channel noise
        for led in leds.iter_mut() {
            *led = Rgb {
                r: Self::add_jitter(BASE_COLOR.r, self.rng.range(-2, 3)),
                g: Self::add_jitter(BASE_COLOR.g, self.rng.range(-2, 3)),
                b: Self::add_jitter(BASE_COLOR.b, self.rng.range(-3, 5)),
            };
        }

        // Raindrop specks; drops do not persist or move
        if self.rng.chance(DROP_CHANCE) {
            let pos = self.rng.index(leds.len());
            leds[pos] = DROP_COLOR;
        }

        // Lightning: idle -> flashing once the random delay has elapsed
        let elapsed_ms = ctx.now.duration_since(self.last_flash).as_millis();
        let delay_ms = self.rng.range(FLASH_DELAY_MIN_MS, FLASH_DELAY_MAX_MS) as u64;
        if !self.flashing && elapsed_ms > delay_ms {
            self.flashing = true;
            self.flash_brightness = FLASH_BRIGHTNESS;
            self.flash_center = self.rng.range(len / 3, len * 2 / 3);
            self.last_flash = ctx.now;
        }

        if self.flashing {
            let start = (self.flash_center - FLASH_SPREAD).max(0);
            let end = (self.flash_center + FLASH_SPREAD).min(len);
            for i in start..end {
                let distance = (i - self.flash_center).abs();
                let brightness = self.flash_brightness * (FLASH_SPREAD - distance) / FLASH_SPREAD;
                let add = brightness.clamp(0, 255) as u8;
                let led = &mut leds[i as usize];
                led.r = led.r.saturating_add(add);
                led.g = led.g.saturating_add(add);
                led.b = led.b.saturating_add(add.saturating_add(20));
            }

            self.flash_brightness -= FLASH_DECAY;
            if self.flash_brightness <= 0 {
                self.flashing = false;
            }
        }
    }
}
