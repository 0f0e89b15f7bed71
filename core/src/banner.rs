// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Banner images attached to an event, carried inline as data URLs.

use std::fmt;
use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Failures while attaching a banner image.
#[derive(Debug, thiserror::Error)]
pub enum BannerError {
    /// The file could not be read.
    #[error("Failed to read banner {}: {source}", .path.display())]
    Io {
        /// The banner file.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// The file is not an image format we recognize.
    #[error("Banner {} is not a PNG, JPEG, GIF, WebP or SVG image", .path.display())]
    NotAnImage {
        /// The banner file.
        path: PathBuf,
    },
}

/// An image file encoded as a `data:<mime>;base64,...` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    path: PathBuf,
    mime: &'static str,
    data_url: String,
}

impl Banner {
    /// Reads and encodes the image at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not an image.
    pub fn read(path: impl Into<PathBuf>) -> Result<Self, BannerError> {
        let path = path.into();
        match std::fs::read(&path) {
            Ok(bytes) => Self::from_bytes(path, &bytes),
            Err(source) => Err(BannerError::Io { path, source }),
        }
    }

    /// Encodes image bytes that were read from `path`.
    ///
    /// The media type is sniffed from the leading bytes, so a misnamed file
    /// is still recognized. SVG has no magic number and goes by extension.
    ///
    /// # Errors
    ///
    /// Returns [`BannerError::NotAnImage`] for anything else.
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: &[u8]) -> Result<Self, BannerError> {
        let path = path.into();
        let Some(mime) = sniff_mime(&path, bytes) else {
            return Err(BannerError::NotAnImage { path });
        };

        let data_url = format!("data:{mime};base64,{}", STANDARD.encode(bytes));
        tracing::debug!(path = %path.display(), mime, len = bytes.len(), "banner attached");
        Ok(Self {
            path,
            mime,
            data_url,
        })
    }

    /// The file the banner was read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The image media type, e.g. `image/png`.
    #[must_use]
    pub const fn mime(&self) -> &'static str {
        self.mime
    }

    /// The `data:` URL embedding the image.
    #[must_use]
    pub fn data_url(&self) -> &str {
        &self.data_url
    }
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path.display(), self.mime)
    }
}

/// Returns the media type of a `data:` URL.
#[must_use]
pub fn data_url_mime(url: &str) -> Option<&str> {
    let rest = url.strip_prefix("data:")?;
    let end = rest.find([';', ','])?;
    rest.get(..end).filter(|mime| !mime.is_empty())
}

fn sniff_mime(path: &Path, bytes: &[u8]) -> Option<&'static str> {
    const SIGNATURES: &[(&[u8], &str)] = &[
        (b"\x89PNG\r\n\x1a\n", "image/png"),
        (b"\xff\xd8\xff", "image/jpeg"),
        (b"GIF87a", "image/gif"),
        (b"GIF89a", "image/gif"),
    ];

    if let Some(&(_, mime)) = SIGNATURES.iter().find(|(magic, _)| bytes.starts_with(magic)) {
        return Some(mime);
    }
    if bytes.starts_with(b"RIFF") && bytes.get(8..12) == Some(b"WEBP".as_slice()) {
        return Some("image/webp");
    }

    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    is_svg.then_some("image/svg+xml")
}
