// ============================================================================
// Limb Codecs
// Packing base-10 digit runs into native integers and back
//
// Implementations:
// - Word64: 8 digits per u64 (64-bit targets)
// - Word32: 4 digits per u32 (everything else)
//
// Both are always compiled; `WordWidth::detect()` picks one at the call site.
// ============================================================================

mod bcd;
mod detector;
mod traits;
mod word32;
mod word64;

pub use detector::{Endianness, WordWidth};
pub use traits::{Limb, LimbCodec};
pub use word32::Word32;
pub use word64::Word64;
