/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_s3::types::Object;

use crate::error::Error;

use super::{ListObjects, ListObjectsInputBuilder, ListObjectsStream};

/// Fluent builder for listing objects
///
/// The builder can be cloned to list the same prefix again from the first page.
#[derive(Debug, Clone)]
pub struct ListObjectsFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: ListObjectsInputBuilder,
}

impl ListObjectsFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// List a single page of objects (at most 1,000), in the order S3 returns them.
    pub async fn send(self) -> Result<Vec<Object>, Error> {
        let input = self.inner.build()?;
        ListObjects::orchestrate(self.handle, input).await
    }

    /// List every object, lazily requesting one page at a time.
    pub fn into_stream(self) -> Result<ListObjectsStream, Error> {
        let input = self.inner.build()?;
        Ok(ListObjectsStream::new(self.handle, input))
    }

    /// Set the bucket name containing the objects.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket name containing the objects.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket name containing the objects.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Limit the response to keys that begin with the given prefix
    pub fn prefix(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.prefix(input);
        self
    }

    /// Limit the response to keys that begin with the given prefix
    pub fn set_prefix(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_prefix(input);
        self
    }

    /// Limit the response to keys that begin with the given prefix
    pub fn get_prefix(&self) -> &Option<String> {
        self.inner.get_prefix()
    }

    /// Character used to group keys
    pub fn delimiter(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.delimiter(input);
        self
    }

    /// Character used to group keys
    pub fn set_delimiter(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_delimiter(input);
        self
    }

    /// Character used to group keys
    pub fn get_delimiter(&self) -> &Option<String> {
        self.inner.get_delimiter()
    }
}

impl crate::operation::list_objects::input::ListObjectsInputBuilder {
    /// List a single page of objects with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<Vec<Object>, Error> {
        let mut fluent_builder = client.list_objects();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
