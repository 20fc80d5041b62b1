/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use crate::error::Error;
use crate::operation::ObjectMetadata;

use super::{HeadObject, HeadObjectInputBuilder};

/// Fluent builder for constructing a single `HeadObject` request
#[derive(Debug, Clone)]
pub struct HeadObjectFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: HeadObjectInputBuilder,
}

impl HeadObjectFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Retrieve the object metadata, `None` if the object does not exist.
    pub async fn send(self) -> Result<Option<ObjectMetadata>, Error> {
        let input = self.inner.build()?;
        HeadObject::orchestrate(self.handle, input).await
    }

    /// The bucket name containing the object.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// The bucket name containing the object.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket name containing the object.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Key of the object.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Key of the object.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// Key of the object.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }
}

impl crate::operation::head_object::input::HeadObjectInputBuilder {
    /// Send the request with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<Option<ObjectMetadata>, Error> {
        let mut fluent_builder = client.head_object();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
