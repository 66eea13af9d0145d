//! Error types
//!
//! Configuration errors are fatal and surface from constructors, before the
//! control loop starts. Input errors are transient: the affected source is
//! skipped for one tick and polled again on the next.

use core::fmt;

/// Invalid static configuration (pixel maps, playlist layout)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Mapping length differs from the strip width
    LengthMismatch { expected: usize, actual: usize },
    /// Physical index is not below the strip width
    PixelOutOfRange { logical: usize, physical: usize },
    /// Physical index is addressed by more than one logical index
    DuplicatePixel { physical: usize },
    /// Playlist has no entries
    EmptyPlaylist,
    /// Playlist has more entries than it can store
    PlaylistTooLong { capacity: usize },
    /// Group has no members or more members than it can store
    InvalidGroup { capacity: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "pixel map has {actual} entries, expected {expected}")
            }
            Self::PixelOutOfRange { logical, physical } => {
                write!(f, "logical pixel {logical} maps to {physical}, outside the strip")
            }
            Self::DuplicatePixel { physical } => {
                write!(f, "physical pixel {physical} is mapped twice")
            }
            Self::EmptyPlaylist => f.write_str("playlist is empty"),
            Self::PlaylistTooLong { capacity } => {
                write!(f, "playlist holds at most {capacity} entries")
            }
            Self::InvalidGroup { capacity } => {
                write!(f, "group must hold between 1 and {capacity} effects")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Failure reading one of the input collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The device did not answer in time
    Timeout,
    /// Bus level failure (I2C NAK, UART framing)
    Bus,
    /// Data was received but could not be decoded
    Malformed,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => f.write_str("input timed out"),
            Self::Bus => f.write_str("input bus error"),
            Self::Malformed => f.write_str("malformed input"),
        }
    }
}

impl core::error::Error for InputError {}
