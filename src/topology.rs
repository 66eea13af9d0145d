//! Logical to physical pixel mapping
//!
//! The skates carry two parallel strips wired as one chain: it starts at the
//! back of the outside strip, runs to the front, then back down the inside.
//! Effects draw in logical order and a [`PixelMap`] decides where each
//! logical pixel lands on the chain.

use crate::color::Rgb;
use crate::error::ConfigError;

/// Number of pixels on the reference skates
pub const SKATE_PIXELS: usize = 34;

/// Starts at the back and runs along both sides at once
const REVERSE_ORDER: [u8; SKATE_PIXELS] = [
    0, 33, 1, 32, 2, 31, 3, 30, 4, 29, 5, 28, 6, 27, 7, 26, 8, 25, 9, 24, 10, 23, 11, 22, 12,
    21, 13, 20, 14, 19, 15, 18, 16, 17,
];

/// Starts at the front and runs to the back along both sides
const FORWARD_ORDER: [u8; SKATE_PIXELS] = [
    16, 17, 15, 18, 14, 19, 13, 20, 12, 21, 11, 22, 10, 23, 9, 24, 8, 25, 7, 26, 6, 27, 5, 28, 4,
    29, 3, 30, 2, 31, 1, 32, 0, 33,
];

/// Starts in the middle of both strips and radiates to the front and back
const RADIATE_ORDER: [u8; SKATE_PIXELS] = [
    8, 26, 9, 27, 7, 25, 10, 28, 6, 24, 11, 29, 5, 23, 12, 30, 4, 22, 13, 31, 3, 21, 14, 32, 2,
    20, 15, 33, 1, 19, 16, 0, 18, 17,
];

/// Named pixel orderings of the skates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Back to front along both strips
    Reverse,
    /// Front to back along both strips
    Forward,
    /// Physical chain order: outside strip, then inside strip
    Around,
    /// From the middle toward both ends
    Radiate,
}

impl Topology {
    pub const ALL: [Self; 4] = [Self::Reverse, Self::Forward, Self::Around, Self::Radiate];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reverse => "reverse",
            Self::Forward => "forward",
            Self::Around => "around",
            Self::Radiate => "radiate",
        }
    }
}

/// Lookup table from logical index to physical index
///
/// Always a permutation of `0..N`; constructors reject anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMap<const N: usize> {
    order: [u8; N],
}

impl<const N: usize> PixelMap<N> {
    /// Build a map from an explicit ordering
    pub fn new(order: [u8; N]) -> Result<Self, ConfigError> {
        validate(&order)?;
        Ok(Self { order })
    }

    /// Build a map from a slice, checking its length against `N`
    pub fn from_slice(order: &[u8]) -> Result<Self, ConfigError> {
        let order: [u8; N] = order.try_into().map_err(|_| ConfigError::LengthMismatch {
            expected: N,
            actual: order.len(),
        })?;
        Self::new(order)
    }

    /// Map every logical pixel onto the same physical pixel
    #[allow(clippy::cast_possible_truncation)]
    pub fn identity() -> Result<Self, ConfigError> {
        let mut order = [0u8; N];
        for (i, slot) in order.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self::new(order)
    }

    /// Number of pixels addressed by this map
    pub const fn width(&self) -> usize {
        N
    }

    /// Physical index of a logical pixel
    ///
    /// Returns `None` for indices outside the map.
    #[inline]
    pub fn resolve(&self, logical: usize) -> Option<usize> {
        self.order.get(logical).map(|&physical| usize::from(physical))
    }

    /// Write `color` at a logical position of `frame`
    ///
    /// Drawing outside the map is a bug in the caller: it trips a debug
    /// assertion and is dropped in release builds.
    #[inline]
    pub fn paint(&self, frame: &mut [Rgb; N], logical: usize, color: Rgb) {
        debug_assert!(logical < N, "logical pixel {logical} outside width {N}");
        if let Some(physical) = self.resolve(logical) {
            frame[physical] = color;
        }
    }
}

fn validate<const N: usize>(order: &[u8; N]) -> Result<(), ConfigError> {
    let mut seen = [false; N];
    for (logical, &physical) in order.iter().enumerate() {
        let physical = usize::from(physical);
        let Some(slot) = seen.get_mut(physical) else {
            return Err(ConfigError::PixelOutOfRange { logical, physical });
        };
        if *slot {
            return Err(ConfigError::DuplicatePixel { physical });
        }
        *slot = true;
    }
    Ok(())
}

/// The four skate maps, validated once at startup
#[derive(Debug, Clone)]
pub struct SkateTopologies {
    reverse: PixelMap<SKATE_PIXELS>,
    forward: PixelMap<SKATE_PIXELS>,
    around: PixelMap<SKATE_PIXELS>,
    radiate: PixelMap<SKATE_PIXELS>,
}

impl SkateTopologies {
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            reverse: PixelMap::new(REVERSE_ORDER)?,
            forward: PixelMap::new(FORWARD_ORDER)?,
            around: PixelMap::identity()?,
            radiate: PixelMap::new(RADIATE_ORDER)?,
        })
    }

    pub const fn get(&self, topology: Topology) -> &PixelMap<SKATE_PIXELS> {
        match topology {
            Topology::Reverse => &self.reverse,
            Topology::Forward => &self.forward,
            Topology::Around => &self.around,
            Topology::Radiate => &self.radiate,
        }
    }
}
