//! ROM layout tags and file name based format inference.

use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;
use thiserror::Error;

#[cfg(feature = "std")]
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// The on-disk byte layout of a Genesis / Mega Drive ROM image.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, AllValues)]
pub enum FormatTag {
    /// Linear layout (`.bin`), bytes in CPU address order.
    Linear,
    /// Interleaved layout (`.md`), the two halves of the ROM alternate byte by byte.
    Interleaved,
    /// Super Magic Drive layout (`.smd`).
    ///
    /// Recognized so that it can be named, but never converted to or from.
    Smd,
    /// Anything that is not one of the above.
    Unknown,
}

/// A format name that does not name any known layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown ROM format: '{0}'. Valid formats are: bin, md, smd")]
pub struct ParseFormatError(pub alloc::string::String);

impl FormatTag {
    /// Parses a format name, ignoring case.
    ///
    /// Accepts the bare name (`bin`) as well as an extension with its dot (`.BIN`).
    /// Anything after the last dot is treated as the name, so `game.md` also parses.
    /// Unrecognized names produce [`FormatTag::Unknown`].
    pub fn parse(name: &str) -> Self {
        let name = match name.rsplit_once('.') {
            Some((_, after_dot)) => after_dot,
            None => name,
        };

        if name.eq_ignore_ascii_case("bin") {
            FormatTag::Linear
        } else if name.eq_ignore_ascii_case("md") {
            FormatTag::Interleaved
        } else if name.eq_ignore_ascii_case("smd") {
            FormatTag::Smd
        } else {
            FormatTag::Unknown
        }
    }

    /// File extension (including the dot) conventionally used for this layout.
    pub const fn extension(self) -> &'static str {
        match self {
            FormatTag::Linear => ".bin",
            FormatTag::Interleaved => ".md",
            FormatTag::Smd => ".smd",
            FormatTag::Unknown => ".???",
        }
    }

    /// Returns `true` for the layouts this crate can convert between.
    pub const fn is_convertible(self) -> bool {
        matches!(self, FormatTag::Linear | FormatTag::Interleaved)
    }

    /// Infers the layout of a file from the text after the last dot of its file name.
    ///
    /// Returns `default` when the file name has no dot, and [`FormatTag::Unknown`] when the
    /// extension is not recognized. A bare `.md` counts as an extension.
    #[cfg(feature = "std")]
    pub fn from_path(path: &Path, default: FormatTag) -> Self {
        let Some(name) = path.file_name() else {
            return default;
        };

        match name.to_string_lossy().rsplit_once('.') {
            Some((_, extension)) => FormatTag::parse(extension),
            None => default,
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for FormatTag {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match FormatTag::parse(s) {
            FormatTag::Unknown => Err(ParseFormatError(s.into())),
            tag => Ok(tag),
        }
    }
}

/// Makes sure the file name of `path` carries the extension of `format`.
///
/// The format of `path` is inferred with [`FormatTag::from_path`], defaulting to
/// [`FormatTag::Linear`] when there is no extension. If that differs from `format`, the
/// extension of `format` is appended to the file name.
///
/// # Returns
///
/// The (possibly) updated path, and `true` if it had to be changed.
#[cfg(feature = "std")]
pub fn ensure_extension(path: &Path, format: FormatTag) -> (PathBuf, bool) {
    if FormatTag::from_path(path, FormatTag::Linear) == format {
        return (path.to_path_buf(), false);
    }

    let mut name = OsString::from(path.as_os_str());
    name.push(format.extension());
    (PathBuf::from(name), true)
}
