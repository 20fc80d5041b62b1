/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::fmt;

use aws_smithy_types::error::operation::BuildError;
use bytes::Bytes;

/// Input type for writing a single object
#[non_exhaustive]
#[derive(Clone, Default)]
pub struct PutObjectInput {
    /// The bucket name to write the object to.
    pub bucket: Option<String>,

    /// Key (destination path) of the object.
    pub key: Option<String>,

    /// Object data.
    pub body: Bytes,

    /// User metadata to store with the object.
    pub metadata: Option<HashMap<String, String>>,
}

impl PutObjectInput {
    /// Creates a new builder-style object to manufacture [`PutObjectInput`](crate::operation::put_object::PutObjectInput).
    pub fn builder() -> PutObjectInputBuilder {
        PutObjectInputBuilder::default()
    }

    /// The bucket name to write the object to.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Key (destination path) of the object.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// Object data.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// User metadata to store with the object.
    pub fn metadata(&self) -> Option<&HashMap<String, String>> {
        self.metadata.as_ref()
    }
}

impl fmt::Debug for PutObjectInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("PutObjectInput");
        formatter.field("bucket", &self.bucket);
        formatter.field("key", &self.key);
        formatter.field("body_len", &self.body.len());
        formatter.field("metadata", &self.metadata);
        formatter.finish()
    }
}

/// A builder for [`PutObjectInput`](crate::operation::put_object::PutObjectInput).
#[non_exhaustive]
#[derive(Clone, Default, Debug)]
pub struct PutObjectInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) body: Option<Bytes>,
    pub(crate) metadata: Option<HashMap<String, String>>,
}

impl PutObjectInputBuilder {
    /// The bucket name to write the object to.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// The bucket name to write the object to.
    ///
    /// NOTE: A bucket name is required.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket name to write the object to.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Key (destination path) of the object.
    ///
    /// The key also determines the `Content-Type` and `Cache-Control` of the object.
    ///
    /// NOTE: A key is required.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Key (destination path) of the object.
    ///
    /// NOTE: A key is required.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// Key (destination path) of the object.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Object data. An unset body writes an empty object.
    pub fn body(mut self, input: impl Into<Bytes>) -> Self {
        self.body = Some(input.into());
        self
    }

    /// Object data.
    pub fn set_body(mut self, input: Option<Bytes>) -> Self {
        self.body = input;
        self
    }

    /// Object data.
    pub fn get_body(&self) -> &Option<Bytes> {
        &self.body
    }

    /// Adds a key-value pair to the user metadata stored with the object.
    pub fn metadata(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        let mut hash_map = self.metadata.unwrap_or_default();
        hash_map.insert(k.into(), v.into());
        self.metadata = Some(hash_map);
        self
    }

    /// User metadata to store with the object.
    pub fn set_metadata(mut self, input: Option<HashMap<String, String>>) -> Self {
        self.metadata = input;
        self
    }

    /// User metadata to store with the object.
    pub fn get_metadata(&self) -> &Option<HashMap<String, String>> {
        &self.metadata
    }

    /// Consumes the builder and constructs a [`PutObjectInput`](crate::operation::put_object::PutObjectInput).
    pub fn build(self) -> Result<PutObjectInput, BuildError> {
        if self.bucket.is_none() {
            return Err(BuildError::missing_field("bucket", "A bucket is required"));
        }

        if self.key.is_none() {
            return Err(BuildError::missing_field("key", "A key is required"));
        }

        Ok(PutObjectInput {
            bucket: self.bucket,
            key: self.key,
            body: self.body.unwrap_or_default(),
            metadata: self.metadata,
        })
    }
}
