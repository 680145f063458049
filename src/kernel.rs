//! Sun highlight kernel and circular convolution.
//!
//! The sky simulation places a single impulse at the sun's position and
//! smooths it with a fixed raised-cosine window. The strip is treated as a
//! ring: the window wraps across both ends.

/// Largest supported kernel radius.
pub const MAX_KERNEL_RADIUS: usize = 15;

/// Default kernel radius.
pub const DEFAULT_KERNEL_RADIUS: usize = 8;

/// Fixed raised-cosine (Hann) smoothing kernel.
///
/// Weights are built once and read-only during rendering. The peak weight
/// (offset 0) is normalized to 1.0 and the window is symmetric.
#[derive(Debug, Clone)]
pub struct SunKernel {
    weights: [f32; 2 * MAX_KERNEL_RADIUS + 1],
    radius: usize,
}

impl Default for SunKernel {
    fn default() -> Self {
        Self::new(DEFAULT_KERNEL_RADIUS)
    }
}

impl SunKernel {
    /// Build a kernel with the given radius (clamped to `[1, MAX_KERNEL_RADIUS]`).
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
    pub fn new(radius: usize) -> Self {
        let radius = radius.clamp(1, MAX_KERNEL_RADIUS);
        let mut weights = [0.0f32; 2 * MAX_KERNEL_RADIUS + 1];

        for d in -(radius as i32)..=(radius as i32) {
            let w = 0.5 * (1.0 + libm::cosf(core::f32::consts::PI * d as f32 / radius as f32));
            weights[(d + radius as i32) as usize] = w;
        }

        // Hann already peaks at 1.0 at offset 0; normalize anyway so the
        // invariant holds for any window shape swapped in later.
        let peak = weights.iter().copied().fold(0.0f32, f32::max);
        if peak > 0.0 {
            for w in &mut weights[..=2 * radius] {
                *w /= peak;
            }
        }

        Self { weights, radius }
    }

    /// Kernel radius in pixels.
    pub const fn radius(&self) -> usize {
        self.radius
    }

    /// Weight at signed offset `d` from the center (0 outside the window).
    #[allow(clippy::cast_possible_wrap)]
    pub fn weight(&self, d: i32) -> f32 {
        let radius = self.radius as i32;
        if d < -radius || d > radius {
            return 0.0;
        }
        self.weights[(d + radius) as usize]
    }

    /// Circularly convolve an impulse of `amplitude` at `center`.
    ///
    /// `signal` is zeroed and gets the impulse; `convolved` receives the
    /// smoothed profile. Both buffers must have the strip length; the output
    /// wraps across the strip's two ends as if it were a ring.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn convolve(&self, center: usize, amplitude: f32, signal: &mut [f32], convolved: &mut [f32]) {
        let len = signal.len().min(convolved.len());
        if len == 0 {
            return;
        }

        signal[..len].fill(0.0);
        convolved[..len].fill(0.0);
        signal[center % len] = amplitude;

        let radius = self.radius as i32;
        let n = len as i32;
        for (pixel, out) in convolved[..len].iter_mut().enumerate() {
            let mut acc = 0.0f32;
            for d in -radius..=radius {
                let src = (pixel as i32 - d).rem_euclid(n) as usize;
                acc += signal[src] * self.weights[(d + radius) as usize];
            }
            *out = acc;
        }
    }
}
