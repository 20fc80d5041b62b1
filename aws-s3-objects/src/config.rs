/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::types::CompressionLevel;

/// Config loader
pub mod loader;

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Debug, Clone)]
pub struct Config {
    compression_level: CompressionLevel,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the gzip compression level used by compressed uploads
    pub fn compression_level(&self) -> &CompressionLevel {
        &self.compression_level
    }

    /// The Amazon S3 client instance that will be used to send requests to S3.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

/// Fluent style builder for [Config]
#[derive(Debug, Clone, Default)]
pub struct Builder {
    compression_level: CompressionLevel,
    client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// Set the gzip compression level used by compressed uploads.
    ///
    /// Default is [CompressionLevel::Default]
    pub fn compression_level(mut self, level: CompressionLevel) -> Self {
        self.compression_level = level;
        self
    }

    /// Set an explicit S3 client to use.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`](crate::config::Config)
    ///
    /// # Panics
    ///
    /// Panics if no S3 client was set.
    pub fn build(self) -> Config {
        Config {
            compression_level: self.compression_level,
            client: self.client.expect("client set"),
        }
    }
}
