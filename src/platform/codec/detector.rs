// ============================================================================
// Word Width and Byte Order Detection
// Selects the limb codec matching the target's native word
// ============================================================================

use std::fmt;

/// Byte order of the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Least significant byte at the lowest address
    Little,
    /// Most significant byte at the lowest address
    Big,
}

impl Endianness {
    /// Byte order of the compilation target.
    pub const NATIVE: Endianness = if cfg!(target_endian = "big") {
        Endianness::Big
    } else {
        Endianness::Little
    };

    /// Detect the current byte order.
    #[inline]
    pub const fn detect() -> Self {
        Self::NATIVE
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Little => write!(f, "little-endian"),
            Endianness::Big => write!(f, "big-endian"),
        }
    }
}

/// Limb width used by the multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WordWidth {
    /// 32-bit limbs, 4 digits each
    Narrow,
    /// 64-bit limbs, 8 digits each
    Wide,
}

impl WordWidth {
    /// Pick the width matching the native word: `Wide` on 64-bit targets.
    #[inline]
    pub const fn detect() -> Self {
        if usize::BITS >= 64 {
            WordWidth::Wide
        } else {
            WordWidth::Narrow
        }
    }

    /// Decimal digits per limb.
    #[inline]
    pub const fn digits(self) -> usize {
        match self {
            WordWidth::Narrow => 4,
            WordWidth::Wide => 8,
        }
    }

    /// Normalization threshold of the matching codec.
    #[inline]
    pub const fn max_add_count(self) -> usize {
        use super::{LimbCodec, Word32, Word64};

        match self {
            WordWidth::Narrow => Word32::MAX_ADD_COUNT,
            WordWidth::Wide => Word64::MAX_ADD_COUNT,
        }
    }
}

impl Default for WordWidth {
    #[inline]
    fn default() -> Self {
        Self::detect()
    }
}

impl fmt::Display for WordWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordWidth::Narrow => write!(f, "32-bit (4 digits/limb)"),
            WordWidth::Wide => write!(f, "64-bit (8 digits/limb)"),
        }
    }
}
