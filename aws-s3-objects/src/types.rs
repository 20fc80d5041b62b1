/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Largest gzip compression level
const MAX_COMPRESSION_LEVEL: u32 = 9;

/// The gzip compression level to use for compressed uploads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CompressionLevel {
    /// The codec's default trade-off between speed and size (level 6).
    #[default]
    Default,

    /// Optimize for speed (level 1).
    Fastest,

    /// Optimize for size (level 9).
    Best,

    /// Explicitly configured level from 0 (store only) to 9.
    ///
    /// Levels above 9 are treated as 9.
    Explicit(u32),
}

impl CompressionLevel {
    pub(crate) fn as_flate2(&self) -> flate2::Compression {
        match self {
            CompressionLevel::Default => flate2::Compression::default(),
            CompressionLevel::Fastest => flate2::Compression::fast(),
            CompressionLevel::Best => flate2::Compression::best(),
            CompressionLevel::Explicit(level) => {
                flate2::Compression::new(std::cmp::min(*level, MAX_COMPRESSION_LEVEL))
            }
        }
    }
}

/// Content encoding applied to an object body when it was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    /// Body is gzip compressed
    Gzip,
}

impl ContentEncoding {
    /// The `Content-Encoding` header value for this encoding
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentEncoding::Gzip => "gzip",
        }
    }

    pub(crate) fn from_header(value: &str) -> Option<ContentEncoding> {
        if value.eq_ignore_ascii_case("gzip") {
            Some(ContentEncoding::Gzip)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CompressionLevel, ContentEncoding};

    #[test]
    fn test_compression_level() {
        assert_eq!(6, CompressionLevel::Default.as_flate2().level());
        assert_eq!(1, CompressionLevel::Fastest.as_flate2().level());
        assert_eq!(9, CompressionLevel::Best.as_flate2().level());
        assert_eq!(3, CompressionLevel::Explicit(3).as_flate2().level());
        assert_eq!(9, CompressionLevel::Explicit(42).as_flate2().level());
    }

    #[test]
    fn test_content_encoding_header() {
        assert_eq!(Some(ContentEncoding::Gzip), ContentEncoding::from_header("GZIP"));
        assert_eq!(None, ContentEncoding::from_header("br"));
        assert_eq!("gzip", ContentEncoding::Gzip.as_str());
    }
}
