//! Animation sequencer
//!
//! Holds the fixed playlist and drives its current entry once per tick.
//! Entries only change on explicit request; there is no timed rotation.

use embassy_time::Instant;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    color::{BLACK, Rgb},
    effect::{EffectSlot, StepOutcome},
    error::ConfigError,
};

/// Maximum number of playlist entries
pub const MAX_ENTRIES: usize = 16;

/// Maximum number of effects playing together in one entry
pub const MAX_GROUP: usize = 4;

/// One playlist slot
#[derive(Debug, Clone)]
pub enum Entry<'a, const N: usize> {
    /// A single effect
    Single(EffectSlot<'a, N>),
    /// Effects stepped together and drawn in order into the same frame
    Group(Vec<EffectSlot<'a, N>, MAX_GROUP>),
}

impl<'a, const N: usize> Entry<'a, N> {
    pub fn single(effect: impl Into<EffectSlot<'a, N>>) -> Self {
        Self::Single(effect.into())
    }

    /// Build a group, rejecting empty or oversized member lists
    pub fn group<I>(members: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = EffectSlot<'a, N>>,
    {
        let error = ConfigError::InvalidGroup {
            capacity: MAX_GROUP,
        };
        let mut group = Vec::new();
        for member in members {
            group.push(member).map_err(|_| error)?;
        }
        if group.is_empty() {
            return Err(error);
        }
        Ok(Self::Group(group))
    }

    pub fn effects(&self) -> &[EffectSlot<'a, N>] {
        match self {
            Self::Single(effect) => core::slice::from_ref(effect),
            Self::Group(effects) => effects,
        }
    }

    pub fn effects_mut(&mut self) -> &mut [EffectSlot<'a, N>] {
        match self {
            Self::Single(effect) => core::slice::from_mut(effect),
            Self::Group(effects) => effects,
        }
    }
}

/// Ordered, non-empty list of entries with a wrapping cursor
#[derive(Debug, Clone)]
pub struct Playlist<'a, const N: usize> {
    entries: Vec<Entry<'a, N>, MAX_ENTRIES>,
    current: usize,
    /// Zero the frame before a newly entered entry draws
    auto_clear: bool,
    /// Start the next cycle when an entry completes instead of halting
    auto_reset: bool,
    /// The current entry has not drawn yet
    entering: bool,
}

impl<'a, const N: usize> Playlist<'a, N> {
    pub fn new<I>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = Entry<'a, N>>,
    {
        let mut list = Vec::new();
        for entry in entries {
            list.push(entry).map_err(|_| ConfigError::PlaylistTooLong {
                capacity: MAX_ENTRIES,
            })?;
        }
        if list.is_empty() {
            return Err(ConfigError::EmptyPlaylist);
        }
        Ok(Self {
            entries: list,
            current: 0,
            auto_clear: true,
            auto_reset: true,
            entering: true,
        })
    }

    #[must_use]
    pub fn with_auto_clear(mut self, auto_clear: bool) -> Self {
        self.auto_clear = auto_clear;
        self
    }

    #[must_use]
    pub fn with_auto_reset(mut self, auto_reset: bool) -> Self {
        self.auto_reset = auto_reset;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false, playlists cannot be empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub const fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Entry<'a, N> {
        &self.entries[self.current]
    }

    pub fn entries(&self) -> &[Entry<'a, N>] {
        &self.entries
    }

    /// Move to the next entry, wrapping after the last one
    pub fn advance_to_next(&mut self) {
        self.current = (self.current + 1) % self.entries.len();
        self.entering = true;

        #[cfg(feature = "esp32-log")]
        println!("[Playlist] advanced to entry {}", self.current);
    }

    /// Restart the current entry as if it had just been entered
    pub fn reset_current(&mut self) {
        self.entering = true;
    }

    /// Recompute every effect's speed from a new tempo
    pub fn apply_tempo(&mut self, tempo: f32) {
        for entry in &mut self.entries {
            for effect in entry.effects_mut() {
                effect.apply_tempo(tempo);
            }
        }
    }

    /// Step the current entry and draw it into `frame`
    pub fn tick(&mut self, now: Instant, frame: &mut [Rgb; N]) {
        let auto_reset = self.auto_reset;
        let entering = core::mem::take(&mut self.entering);
        if entering && self.auto_clear {
            frame.fill(BLACK);
        }

        let entry = &mut self.entries[self.current];
        for effect in entry.effects_mut() {
            if entering {
                effect.reset();
            }
            if effect.step(now) == StepOutcome::Completed {
                if auto_reset {
                    effect.restart();
                } else {
                    effect.halt();
                }
            }
        }
        for effect in entry.effects() {
            effect.render_into(frame);
        }
    }
}
