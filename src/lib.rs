#![no_std]

pub mod color;
pub mod command;
pub mod effect;
pub mod frame_scheduler;
pub mod kernel;
pub mod math8;
pub mod presence;
pub mod renderer;
pub mod rng;

pub use command::{CommandChannel, CommandReceiver, CommandSender, LightCommand};
pub use effect::{FrameContext, ModeId, ModeSlot};
pub use frame_scheduler::FrameScheduler;
pub use kernel::SunKernel;
pub use presence::PresenceOverride;
pub use renderer::{LightStatus, SceneEngine, SceneEngineConfig};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The scene engine is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
