/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::io::{Read, Write};

use bytes::Bytes;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::Error;

/// Gzip compress `src` in full.
///
/// The codec runs on the blocking pool.
pub(crate) async fn gzip(src: Bytes, level: Compression) -> Result<Bytes, Error> {
    let handle = tokio::task::spawn_blocking(move || {
        let mut encoder = GzEncoder::new(Vec::with_capacity(src.len() / 2), level);
        encoder.write_all(&src)?;
        let compressed = encoder.finish()?;
        Ok::<Bytes, Error>(Bytes::from(compressed))
    });

    handle.await?
}

/// Decompress a gzip encoded `src` in full.
pub(crate) async fn gunzip(src: Bytes) -> Result<Bytes, Error> {
    let handle = tokio::task::spawn_blocking(move || {
        let mut decoder = GzDecoder::new(src.as_ref());
        // TODO - cap the decoded size, a small body can expand to an arbitrarily large buffer
        let mut dst = Vec::with_capacity(src.len() * 2);
        decoder.read_to_end(&mut dst)?;
        Ok::<Bytes, Error>(Bytes::from(dst))
    });

    handle.await?
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use flate2::Compression;

    use super::{gunzip, gzip};
    use crate::error::ErrorKind;

    #[tokio::test]
    async fn test_gzip_round_trip() {
        let src = Bytes::from("every adolescent dog goes bonkers early ".repeat(64));
        let compressed = gzip(src.clone(), Compression::default()).await.unwrap();
        assert!(compressed.len() < src.len());
        // gzip magic
        assert_eq!(&[0x1f, 0x8b], &compressed[..2]);

        assert_eq!(src, gunzip(compressed).await.unwrap());
    }

    #[tokio::test]
    async fn test_gzip_empty_input() {
        let compressed = gzip(Bytes::new(), Compression::default()).await.unwrap();
        assert!(!compressed.is_empty());
        assert!(gunzip(compressed).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_gunzip_invalid_input() {
        let err = gunzip(Bytes::from_static(b"definitely not gzip"))
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::IOError, err.kind());
    }
}
