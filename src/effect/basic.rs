//! Basic solid color scene
//!
//! Fills all LEDs with the stored custom color every frame. Idempotent,
//! no animation state.

use super::{Effect, FrameContext};
use crate::color::Rgb;

/// Basic scene - fills all LEDs with one color
#[derive(Debug, Clone)]
pub struct BasicEffect {
    color: Rgb,
}

impl BasicEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }

    /// Replace the fill color; takes effect on the next frame.
    pub const fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }
}

impl Effect for BasicEffect {
    fn render(&mut self, _ctx: &FrameContext, leds: &mut [Rgb]) {
        for led in leds {
            *led = self.color;
        }
    }
}
