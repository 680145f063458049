//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific
//! timers. The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::{OutputDriver, SceneEngine};

/// Default target frame rate.
///
/// Ambient scenes are slow; the per-scene minimum intervals (30-50 ms)
/// are coarser than this, so 30 FPS leaves headroom for command latency.
pub const DEFAULT_FPS: u32 = 30;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// Tracks frame deadlines with drift correction, runs the engine and
/// pushes every frame to the output driver (including unchanged frames),
/// then returns timing info so the caller can sleep appropriately.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(engine, driver);
///
/// loop {
///     let result = scheduler.tick(Instant::from_millis(now_ms()));
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver, const NUM_LEDS: usize, const COMMAND_CHANNEL_SIZE: usize>
{
    output: O,
    engine: SceneEngine<'a, NUM_LEDS, COMMAND_CHANNEL_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: OutputDriver, const NUM_LEDS: usize, const COMMAND_CHANNEL_SIZE: usize>
    FrameScheduler<'a, O, NUM_LEDS, COMMAND_CHANNEL_SIZE>
{
    /// Create a new frame scheduler with the default frame duration.
    pub fn new(engine: SceneEngine<'a, NUM_LEDS, COMMAND_CHANNEL_SIZE>, driver: O) -> Self {
        Self::with_frame_duration(engine, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        engine: SceneEngine<'a, NUM_LEDS, COMMAND_CHANNEL_SIZE>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            engine,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Drift correction: after a long stall, skip the backlog instead of
        // rendering a catch-up burst.
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        let frame = self.engine.render(now);
        self.output.write(frame);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &SceneEngine<'a, NUM_LEDS, COMMAND_CHANNEL_SIZE> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut SceneEngine<'a, NUM_LEDS, COMMAND_CHANNEL_SIZE> {
        &mut self.engine
    }
}
