//! Black-body radiation color model.
//!
//! Converts a color temperature to RGB from first principles: spectral
//! radiance at three representative wavelengths via Planck's law,
//! normalized and gamma-corrected. Used by the sky simulation for both
//! the ambient sky color and the sun highlight.

use super::Rgb;

// Physical constants
const PLANCK: f32 = 6.626e-34; // J*s
const LIGHT_SPEED: f32 = 3.0e8; // m/s
const BOLTZMANN: f32 = 1.381e-23; // J/K

// Representative wavelengths for the three channels (nm)
const LAMBDA_RED: f32 = 700.0;
const LAMBDA_GREEN: f32 = 546.0;
const LAMBDA_BLUE: f32 = 436.0;

const GAMMA: f32 = 1.0 / 2.2;

/// Spectral radiance at wavelength `lambda_nm` for temperature `temp_k`.
///
/// Relative scale: the leading constants of Planck's law cancel in the
/// per-channel normalization, so only `1 / (lambda^5 * (e^x - 1))` is kept.
pub fn planck_radiance(lambda_nm: f32, temp_k: f32) -> f32 {
    let lambda = lambda_nm * 1e-9;
    let exponent = (PLANCK * LIGHT_SPEED) / (lambda * BOLTZMANN * temp_k);

    // Deep Wien regime underflows e^x; treat as dark.
    if exponent > 50.0 {
        return 0.0;
    }

    let denominator = libm::expf(exponent) - 1.0;
    // Rayleigh-Jeans limit: avoid division blow-up.
    if denominator < 1e-10 {
        return 0.0;
    }

    1.0 / (libm::powf(lambda, 5.0) * denominator)
}

/// Convert a color temperature in Kelvin to a gamma-corrected RGB color.
///
/// The brightest channel maps to 255; invalid temperatures (where all
/// radiances vanish) map to black.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn color_temperature_to_rgb(temp_k: f32) -> Rgb {
    let radiance_r = planck_radiance(LAMBDA_RED, temp_k);
    let radiance_g = planck_radiance(LAMBDA_GREEN, temp_k);
    let radiance_b = planck_radiance(LAMBDA_BLUE, temp_k);

    let max_radiance = radiance_r.max(radiance_g).max(radiance_b);
    if max_radiance <= 0.0 {
        return Rgb { r: 0, g: 0, b: 0 };
    }

    let r_norm = libm::powf(radiance_r / max_radiance, GAMMA);
    let g_norm = libm::powf(radiance_g / max_radiance, GAMMA);
    let b_norm = libm::powf(radiance_b / max_radiance, GAMMA);

    Rgb {
        r: (r_norm * 255.0) as u8,
        g: (g_norm * 255.0) as u8,
        b: (b_norm * 255.0) as u8,
    }
}
