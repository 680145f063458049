//! Control surface: decoded commands and a portable bounded channel.
//!
//! The host decodes broker messages (JSON stays upstream) into
//! [`LightCommand`] values and queues them here. The channel is built on
//! `critical-section` and `heapless::Deque`, so senders may live in other
//! tasks or interrupt contexts while the engine drains it once per frame.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::{color::Rgb, effect::ModeId};

/// One decoded control message.
///
/// Field names track the broker payload keys: `led_is_on`, `led_mode`,
/// `brightness`, `color`, `presence_mode_enabled`. Every field is optional;
/// a message may carry any subset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LightCommand {
    /// Manual on/off shortcut (`led_is_on`). Ignored while the presence
    /// override is enabled.
    pub power: Option<bool>,
    /// Scene change (`led_mode`).
    pub mode: Option<ModeId>,
    /// Global brightness (`brightness`).
    pub brightness: Option<u8>,
    /// Custom color (`color`); switches the scene to Basic.
    pub color: Option<Rgb>,
    /// Toggle for the presence override (`presence_mode_enabled`).
    /// Consumed by [`crate::presence::PresenceOverride::filter_command`],
    /// never by the engine itself.
    pub presence_mode_enabled: Option<bool>,
}

impl LightCommand {
    /// Command that switches to a mode.
    pub const fn with_mode(mode: ModeId) -> Self {
        Self {
            power: None,
            mode: Some(mode),
            brightness: None,
            color: None,
            presence_mode_enabled: None,
        }
    }
}

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub LightCommand);

/// Error returned when trying to receive from an empty channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// A bounded, thread-safe command queue.
///
/// `SIZE` is the number of commands the queue can hold. Synchronization
/// uses critical sections, which keeps the channel portable across
/// embedded targets.
pub struct CommandChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<LightCommand, SIZE>>>,
}

impl<const SIZE: usize> CommandChannel<SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    ///
    /// Multiple senders can coexist; they share the same queue.
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { channel: self }
    }

    fn try_send(&self, command: LightCommand) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(TrySendError)
        })
    }

    fn try_receive(&self) -> Result<LightCommand, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }
}

impl<const SIZE: usize> Default for CommandChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`CommandChannel`].
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Try to queue a command.
    ///
    /// Returns `Err(TrySendError(command))` if the channel is full.
    pub fn try_send(&self, command: LightCommand) -> Result<(), TrySendError> {
        self.channel.try_send(command)
    }
}

/// A receiver handle for a [`CommandChannel`].
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    /// Try to take the next queued command.
    ///
    /// Returns `Err(TryReceiveError)` if the channel is empty.
    pub fn try_receive(&self) -> Result<LightCommand, TryReceiveError> {
        self.channel.try_receive()
    }
}
