//! Day/night sky simulation
//!
//! A moving warm "sun" glow riding on a slowly-shifting ambient sky color.
//! Both colors come from the black-body model; the highlight profile is a
//! single impulse smoothed by the raised-cosine kernel. No lookup tables,
//! no per-frame state beyond the transient convolution buffers.

use super::{Effect, FrameContext};
use crate::{
    color::{Rgb, color_temperature_to_rgb},
    kernel::SunKernel,
};

/// Width of the convolution window.
///
/// Bounds the transient convolution buffers, which live in the effect
/// struct instead of being allocated per frame. On longer strips the sun
/// rotates within the first `MAX_SKY_LEDS` pixels and the remainder is
/// painted with the ambient color.
pub const MAX_SKY_LEDS: usize = 144;

/// Color of the night sky when the sun temperature is zero.
const NIGHT_AMBIENT: Rgb = Rgb { r: 0, g: 0, b: 10 };

/// Minimum highlight temperature; keeps the sun warm at dawn and dusk
/// even when the ambient is dark.
const MIN_SUN_TEMP: f32 = 2000.0;

/// Sun color temperature in Kelvin for an hour-of-day.
///
/// Piecewise-linear schedule: dawn warm light, midday neutral white, dusk
/// warm light, night off (0 K).
pub fn sun_color_temp(hour: f32) -> f32 {
    if !(6.0..=18.5).contains(&hour) {
        0.0
    } else if hour < 7.0 {
        2000.0 + 2000.0 * (hour - 6.0)
    } else if hour < 8.0 {
        4000.0 + 1500.0 * (hour - 7.0)
    } else if hour < 17.0 {
        5500.0
    } else if hour < 18.0 {
        5500.0 - 1500.0 * (hour - 17.0)
    } else {
        4000.0 - 2000.0 * (hour - 18.0)
    }
}

/// Pixel index of the sun for an hour-of-day.
///
/// One full rotation around the strip per 24 simulated hours, independent
/// of day/night: the sun keeps moving at night even though its intensity
/// is zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub fn sun_position_index(hour: f32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let wrapped = libm::fmodf(libm::fmodf(hour, 24.0) + 24.0, 24.0);
    let rotation = libm::fmodf(wrapped / 24.0, 1.0);
    (libm::floorf(rotation * len as f32) as usize) % len
}

/// Sun elevation approximated with a sine arch: 0 at hours 6 and 18,
/// peaking at 1.0 at hour 12. Zero at night.
pub fn sun_intensity(hour: f32) -> f32 {
    if !(6.0..=18.0).contains(&hour) {
        return 0.0;
    }
    let t = (hour - 6.0) / 12.0;
    let elevation = libm::sinf(core::f32::consts::PI * t);
    elevation.max(0.0)
}

/// Sky simulation scene state.
#[derive(Debug, Clone)]
pub struct SkyEffect {
    kernel: SunKernel,
    sun_signal: [f32; MAX_SKY_LEDS],
    convolved: [f32; MAX_SKY_LEDS],
}

impl Default for SkyEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl SkyEffect {
    pub fn new() -> Self {
        Self {
            kernel: SunKernel::default(),
            sun_signal: [0.0; MAX_SKY_LEDS],
            convolved: [0.0; MAX_SKY_LEDS],
        }
    }
}

impl Effect for SkyEffect {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render(&mut self, ctx: &FrameContext, leds: &mut [Rgb]) {
        let len = leds.len().min(MAX_SKY_LEDS);
        if len == 0 {
            return;
        }

        let sun_temp = sun_color_temp(ctx.hour);
        let sun_index = sun_position_index(ctx.hour, len);
        let intensity = sun_intensity(ctx.hour);

        self.kernel.convolve(
            sun_index,
            intensity,
            &mut self.sun_signal[..len],
            &mut self.convolved[..len],
        );

        let ambient = if sun_temp > 0.0 {
            color_temperature_to_rgb(sun_temp)
        } else {
            NIGHT_AMBIENT
        };
        let sun_color = color_temperature_to_rgb(sun_temp.max(MIN_SUN_TEMP));

        for (led, highlight) in leds[..len].iter_mut().zip(&self.convolved[..len]) {
            // Linear blend from ambient toward the sun color
            let mix = |a: u8, b: u8| -> u8 {
                (f32::from(a) + highlight * (f32::from(b) - f32::from(a))) as u8
            };
            *led = Rgb {
                r: mix(ambient.r, sun_color.r),
                g: mix(ambient.g, sun_color.g),
                b: mix(ambient.b, sun_color.b),
            };
        }

        // Strips longer than the convolution window still get lit: the sun
        // rotates within the window, the rest shows plain ambient.
        for led in leds[len..].iter_mut() {
            *led = ambient;
        }
    }
}
