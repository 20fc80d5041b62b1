/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use bytes::Bytes;

use crate::error::Error;
use crate::io::compression;
use crate::operation::ObjectMetadata;
use crate::types::ContentEncoding;

/// A retrieved object: its metadata and the complete body.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct StoredObject {
    /// Object metadata
    pub metadata: ObjectMetadata,

    /// Object data as stored, i.e. still gzip compressed if it was written compressed
    pub body: Bytes,
}

impl StoredObject {
    pub(crate) fn new(metadata: ObjectMetadata, body: Bytes) -> Self {
        Self { metadata, body }
    }

    /// Object metadata
    pub fn metadata(&self) -> &ObjectMetadata {
        &self.metadata
    }

    /// Object data as stored
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Consume the object and return its data with any gzip content encoding removed.
    ///
    /// Bodies without a recognized content encoding are returned unchanged.
    pub async fn into_decoded_body(self) -> Result<Bytes, Error> {
        match self.metadata.encoding() {
            Some(ContentEncoding::Gzip) => compression::gunzip(self.body).await,
            None => Ok(self.body),
        }
    }
}
