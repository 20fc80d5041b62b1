/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;

use std::sync::Arc;

use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;

use crate::error;
use crate::io::compression;
use crate::metadata::{cache_control_for, content_type_for};
use crate::operation::invoke;
use crate::types::ContentEncoding;

/// Request type for writing a single object
pub use input::{PutObjectInput, PutObjectInputBuilder};

/// Operation struct for writing a single object
#[derive(Clone, Default, Debug)]
pub(crate) struct PutObject;

impl PutObject {
    /// Execute a single `PutObject` request with the body as given.
    ///
    /// Resolves with the key of the written object.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: PutObjectInput,
    ) -> Result<String, error::Error> {
        let PutObjectInput {
            bucket,
            key,
            body,
            metadata,
        } = input;
        let bucket = bucket.ok_or_else(|| error::invalid_input("bucket is required"))?;
        let key = key.ok_or_else(|| error::invalid_input("key is required"))?;

        put_object(&handle, bucket, key, body, metadata, None).await
    }

    /// Execute a single `PutObject` request, gzip compressing the body if that makes it
    /// smaller.
    ///
    /// Resolves with the key of the written object.
    pub(crate) async fn orchestrate_compressed(
        handle: Arc<crate::client::Handle>,
        input: PutObjectInput,
    ) -> Result<String, error::Error> {
        let PutObjectInput {
            bucket,
            key,
            body,
            metadata,
        } = input;
        let bucket = bucket.ok_or_else(|| error::invalid_input("bucket is required"))?;
        let key = key.ok_or_else(|| error::invalid_input("key is required"))?;

        let compressed = compression::gzip(body.clone(), handle.compression()).await?;
        let (body, encoding) = smaller_body(body, compressed);
        put_object(&handle, bucket, key, body, metadata, encoding).await
    }
}

/// Pick the body to send: the compressed form only if it is strictly smaller.
fn smaller_body(original: Bytes, compressed: Bytes) -> (Bytes, Option<ContentEncoding>) {
    tracing::trace!(
        original_len = original.len(),
        compressed_len = compressed.len(),
        "compressed object body"
    );
    if compressed.len() < original.len() {
        (compressed, Some(ContentEncoding::Gzip))
    } else {
        (original, None)
    }
}

async fn put_object(
    handle: &crate::client::Handle,
    bucket: String,
    key: String,
    body: Bytes,
    metadata: Option<std::collections::HashMap<String, String>>,
    encoding: Option<ContentEncoding>,
) -> Result<String, error::Error> {
    let span = tracing::debug_span!(
        "send-put-object",
        bucket = bucket.as_str(),
        key = key.as_str(),
        content_length = body.len(),
    );
    let request = handle
        .client()
        .put_object()
        .bucket(bucket)
        .key(key.clone())
        .body(ByteStream::from(body))
        .set_metadata(metadata)
        .content_type(content_type_for(&key))
        .cache_control(cache_control_for(&key))
        .set_content_encoding(encoding.map(|e| e.as_str().to_owned()))
        .send();

    invoke(span, request).await?;
    Ok(key)
}
