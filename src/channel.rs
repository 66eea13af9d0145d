//! Command queue between the radio and the control loop
//!
//! The radio (or its interrupt handler) pushes decoded commands through a
//! [`CommandSender`]; the control loop drains one per tick through the
//! [`CommandReceiver`]. Access is guarded by `critical-section`, so the
//! queue can be shared from a `static`.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::{command::RemoteCommand, error::InputError, input::CommandSource};

/// Returned when the queue is full; carries the rejected command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull(pub RemoteCommand);

/// Bounded command queue
pub struct CommandChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<RemoteCommand, SIZE>>>,
}

impl<const SIZE: usize> CommandChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { channel: self }
    }

    /// Only the control loop should hold a receiver
    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { channel: self }
    }

    pub fn try_send(&self, command: RemoteCommand) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(QueueFull)
        })
    }

    pub fn try_receive(&self) -> Option<RemoteCommand> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Producer side of a [`CommandChannel`]
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    pub fn try_send(&self, command: RemoteCommand) -> Result<(), QueueFull> {
        self.channel.try_send(command)
    }
}

/// Consumer side of a [`CommandChannel`]
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    channel: &'a CommandChannel<SIZE>,
}

impl<const SIZE: usize> CommandSource for CommandReceiver<'_, SIZE> {
    fn poll(&mut self) -> Result<Option<RemoteCommand>, InputError> {
        Ok(self.channel.try_receive())
    }
}
