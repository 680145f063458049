//! Meteor scene
//!
//! Three independent particles streaking along the strip. The whole frame
//! is faded toward black before drawing, which leaves motion trails.

use embassy_time::Duration;

use super::{Effect, FrameContext};
use crate::{color::Rgb, math8::scale8, rng::TickRng};

/// Number of concurrent meteors.
pub const METEOR_COUNT: usize = 3;

const HEAD_COLOR: Rgb = Rgb {
    r: 255,
    g: 200,
    b: 100,
};

/// Trail length behind the head.
const TRAIL_LEN: i32 = 7;

/// Frame fade amount (fadeToBlackBy semantics: scale by 255 - FADE).
const FADE: u8 = 64;

/// Respawn window behind the strip start and speed bounds (px/frame).
const RESPAWN_MIN: i32 = -20;
const SPEED_MIN: i32 = 2;
const SPEED_MAX: i32 = 4;

/// Meteor scene state.
#[derive(Debug, Clone)]
pub struct MeteorEffect {
    rng: TickRng,
    positions: [i32; METEOR_COUNT],
    speeds: [i32; METEOR_COUNT],
}

impl MeteorEffect {
    pub const fn new(rng_seed: u64) -> Self {
        Self {
            rng: TickRng::new(rng_seed),
            positions: [0, 20, 40],
            speeds: [2, 3, 2],
        }
    }

    /// Current particle positions (may be negative before entering the strip).
    pub const fn positions(&self) -> [i32; METEOR_COUNT] {
        self.positions
    }
}

impl Effect for MeteorEffect {
    // Coarse animation step; trails look the same regardless of host loop speed.
    const FRAME_INTERVAL: Option<Duration> = Some(Duration::from_millis(50));

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn render(&mut self, _ctx: &FrameContext, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }
        let len = leds.len() as i32;
        let keep = 255 - FADE;

        // Fade everything first so previous heads become trails
        for led in leds.iter_mut() {
            led.r = scale8(led.r, keep);
            led.g = scale8(led.g, keep);
            led.b = scale8(led.b, keep);
        }

        for m in 0..METEOR_COUNT {
            let pos = self.positions[m];
            if pos < len {
                if pos >= 0 {
                    leds[pos as usize] = HEAD_COLOR;
                }

                // Fading trail behind the head
                for j in 1..=TRAIL_LEN {
                    let trail_pos = pos - j;
                    if trail_pos >= 0 && trail_pos < len {
                        let div = (j + 1) as u8;
                        leds[trail_pos as usize] = Rgb {
                            r: HEAD_COLOR.r / div,
                            g: HEAD_COLOR.g / div,
                            b: HEAD_COLOR.b / div,
                        };
                    }
                }

                self.positions[m] += self.speeds[m];
            } else {
                // Respawn behind the strip with a new speed
                self.positions[m] = self.rng.range(RESPAWN_MIN, 0);
                self.speeds[m] = self.rng.range(SPEED_MIN, SPEED_MAX);
            }
        }
    }
}
