/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::sync::Arc;

use aws_sdk_s3::operation::delete_object::DeleteObjectOutput;

use crate::error::Error;

use super::{DeleteObject, DeleteObjectInputBuilder};

/// Fluent builder for constructing a single `DeleteObject` request
#[derive(Debug, Clone)]
pub struct DeleteObjectFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: DeleteObjectInputBuilder,
}

impl DeleteObjectFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Delete the object, resolving with the raw service response.
    pub async fn send(self) -> Result<DeleteObjectOutput, Error> {
        let input = self.inner.build()?;
        DeleteObject::orchestrate(self.handle, input).await
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

impl crate::operation::delete_object::input::DeleteObjectInputBuilder {
    /// Send the request with this input using the given client.
    pub async fn send_with(self, client: &crate::Client) -> Result<DeleteObjectOutput, Error> {
        let mut fluent_builder = client.delete_object();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
