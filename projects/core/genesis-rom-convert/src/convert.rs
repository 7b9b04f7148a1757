//! Routing of conversion requests between ROM layouts.
//!
//! The routing table is fixed:
//!
//! | from          | to            | result                                 |
//! |---------------|---------------|----------------------------------------|
//! | X             | X             | source returned as is                  |
//! | SMD           | any           | [`ConvertError::UnsupportedFormat`]     |
//! | any           | SMD           | [`ConvertError::UnsupportedFormat`]     |
//! | Interleaved   | Linear        | [`interleaved_to_linear`]              |
//! | Linear        | Interleaved   | [`linear_to_interleaved`]              |
//! | anything else |               | [`ConvertError::UnsupportedConversion`] |

use crate::error::{ConvertError, ConvertResult};
use crate::format::FormatTag;
use crate::rom::RomImage;
use crate::transform::{interleaved_to_linear, linear_to_interleaved};
use alloc::borrow::Cow;

/// The operation selected for a `(from, to)` pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Route {
    /// Source and target are the same layout, nothing to do.
    Identity,
    /// Interleaved (`.md`) to linear (`.bin`).
    InterleavedToLinear,
    /// Linear (`.bin`) to interleaved (`.md`).
    LinearToInterleaved,
}

/// Looks up the operation for converting `from` into `to`, without touching any data.
///
/// This allows a request to be validated before a ROM is loaded.
///
/// # Errors
///
/// - [`ConvertError::UnsupportedFormat`] if either side is [`FormatTag::Smd`]
///   (unless both sides are the same).
/// - [`ConvertError::UnsupportedConversion`] for any other pair without a route.
pub fn route(from: FormatTag, to: FormatTag) -> ConvertResult<Route> {
    if from == to {
        return Ok(Route::Identity);
    }

    match (from, to) {
        (FormatTag::Smd, _) | (_, FormatTag::Smd) => {
            Err(ConvertError::UnsupportedFormat { from, to })
        }
        (FormatTag::Interleaved, FormatTag::Linear) => Ok(Route::InterleavedToLinear),
        (FormatTag::Linear, FormatTag::Interleaved) => Ok(Route::LinearToInterleaved),
        _ => Err(ConvertError::UnsupportedConversion { from, to }),
    }
}

/// Converts `rom` from the `from` layout into the `to` layout.
///
/// When `from == to` the very same instance is handed back as [`Cow::Borrowed`], without
/// allocating or copying. Otherwise a new ROM is returned as [`Cow::Owned`]. The source is never
/// modified, so it stays valid whatever the outcome.
///
/// # Errors
///
/// - [`ConvertError::UnsupportedFormat`] if either side is [`FormatTag::Smd`].
/// - [`ConvertError::UnsupportedConversion`] if there is no route between the layouts.
/// - [`ConvertError::MalformedInput`] if the ROM has an odd number of bytes.
///
/// # Examples
///
/// ```
/// use genesis_rom_convert::{convert, FormatTag, RomImage};
/// use std::borrow::Cow;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let rom = RomImage::from_slice(&[0x11, 0x22, 0x33, 0x44])?;
///
/// let linear = convert(&rom, FormatTag::Interleaved, FormatTag::Linear)?;
/// assert_eq!(linear.data(), &[0x22, 0x44, 0x11, 0x33]);
///
/// let same = convert(&rom, FormatTag::Linear, FormatTag::Linear)?;
/// assert!(matches!(same, Cow::Borrowed(_)));
/// # Ok(())
/// # }
/// ```
pub fn convert(rom: &RomImage, from: FormatTag, to: FormatTag) -> ConvertResult<Cow<'_, RomImage>> {
    let route = route(from, to)?;
    log::debug!("Converting {} byte ROM from {from} to {to} ({route:?})", rom.len());

    match route {
        Route::Identity => Ok(Cow::Borrowed(rom)),
        Route::InterleavedToLinear => interleaved_to_linear(rom).map(Cow::Owned),
        Route::LinearToInterleaved => linear_to_interleaved(rom).map(Cow::Owned),
    }
}
