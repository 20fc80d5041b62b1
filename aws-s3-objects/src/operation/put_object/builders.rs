/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;

use crate::error::Error;

use super::{PutObject, PutObjectInputBuilder};

/// Fluent builder for constructing a single object write
#[derive(Debug, Clone)]
pub struct PutObjectFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: PutObjectInputBuilder,
    compress: bool,
}

impl PutObjectFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
            compress: false,
        }
    }

    pub(crate) fn new_compressed(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            compress: true,
            ..Self::new(handle)
        }
    }

    /// Write the object, resolving with its key.
    pub async fn send(self) -> Result<String, Error> {
        let input = self.inner.build()?;
        if self.compress {
            PutObject::orchestrate_compressed(self.handle, input).await
        } else {
            PutObject::orchestrate(self.handle, input).await
        }
    }

    /// The bucket name to write the object to.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket name to write the object to.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket name to write the object to.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Key (destination path) of the object.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Key (destination path) of the object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// Key (destination path) of the object.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }

    /// Object data.
    pub fn body(mut self, input: impl Into<Bytes>) -> Self {
        self.inner = self.inner.body(input);
        self
    }

    /// Object data.
    pub fn set_body(mut self, input: Option<Bytes>) -> Self {
        self.inner = self.inner.set_body(input);
        self
    }

    /// Object data.
    pub fn get_body(&self) -> &Option<Bytes> {
        self.inner.get_body()
    }

    /// Adds a key-value pair to the user metadata stored with the object.
    pub fn metadata(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
        self.inner = self.inner.metadata(k, v);
        self
    }

    /// User metadata to store with the object.
    pub fn set_metadata(mut self, input: Option<HashMap<String, String>>) -> Self {
        self.inner = self.inner.set_metadata(input);
        self
    }

    /// User metadata to store with the object.
    pub fn get_metadata(&self) -> &Option<HashMap<String, String>> {
        self.inner.get_metadata()
    }
}

impl crate::operation::put_object::input::PutObjectInputBuilder {
    /// Write a single object with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<String, Error> {
        let mut fluent_builder = client.put_object();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }

    /// Write a single object with this input using the given client, gzip compressing the
    /// body when that makes it smaller.
    pub async fn send_compressed_with(self, client: &crate::Client) -> Result<String, Error> {
        let mut fluent_builder = client.put_object_compressed();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
