/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_types::error::operation::BuildError;

/// Input type for listing objects
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct ListObjectsInput {
    /// The bucket name containing the objects.
    pub bucket: Option<String>,

    /// Limit the response to keys that begin with the given prefix
    pub prefix: Option<String>,

    /// Character used to group keys
    pub delimiter: Option<String>,
}

impl ListObjectsInput {
    /// Creates a new builder-style object to manufacture [`ListObjectsInput`](crate::operation::list_objects::ListObjectsInput).
    pub fn builder() -> ListObjectsInputBuilder {
        ListObjectsInputBuilder::default()
    }

    /// The bucket name containing the objects.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// Limit the response to keys that begin with the given prefix
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Character used to group keys
    pub fn delimiter(&self) -> Option<&str> {
        self.delimiter.as_deref()
    }
}

/// A builder for [`ListObjectsInput`](crate::operation::list_objects::ListObjectsInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct ListObjectsInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) prefix: Option<String>,
    pub(crate) delimiter: Option<String>,
}

impl ListObjectsInputBuilder {
    /// Set the bucket name containing the objects.
    ///
    /// NOTE: A bucket name is required.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket name containing the objects.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket name containing the objects.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Limit the response to keys that begin with the given prefix
    pub fn prefix(mut self, input: impl Into<String>) -> Self {
        self.prefix = Some(input.into());
        self
    }

    /// Limit the response to keys that begin with the given prefix
    pub fn set_prefix(mut self, input: Option<String>) -> Self {
        self.prefix = input;
        self
    }

    /// Limit the response to keys that begin with the given prefix
    pub fn get_prefix(&self) -> &Option<String> {
        &self.prefix
    }

    /// Character used to group keys.
    ///
    /// A single page only contains the keys up to the first delimiter after the prefix. When
    /// streaming, every common prefix reported by S3 is listed in turn.
    pub fn delimiter(mut self, input: impl Into<String>) -> Self {
        self.delimiter = Some(input.into());
        self
    }

    /// Character used to group keys
    pub fn set_delimiter(mut self, input: Option<String>) -> Self {
        self.delimiter = input;
        self
    }

    /// Character used to group keys
    pub fn get_delimiter(&self) -> &Option<String> {
        &self.delimiter
    }

    /// Consumes the builder and constructs a [`ListObjectsInput`](crate::operation::list_objects::ListObjectsInput).
    pub fn build(self) -> Result<ListObjectsInput, BuildError> {
        if self.bucket.is_none() {
            return Err(BuildError::missing_field("bucket", "A bucket is required"));
        }

        Ok(ListObjectsInput {
            bucket: self.bucket,
            prefix: self.prefix,
            delimiter: self.delimiter,
        })
    }
}
