/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::config::Builder;
use crate::types::CompressionLevel;
use crate::Config;

/// Load [`Config`] from the environment.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
}

impl ConfigLoader {
    /// Set the gzip compression level used by compressed uploads.
    ///
    /// Default is [CompressionLevel::Default]
    pub fn compression_level(mut self, level: CompressionLevel) -> Self {
        self.builder = self.builder.compression_level(level);
        self
    }

    /// Load the default configuration
    ///
    /// The S3 client is built from the shared AWS configuration (credentials, region,
    /// endpoint, retry settings) resolved from the environment.
    pub async fn load(self) -> Config {
        let shared_config = aws_config::from_env().load().await;
        let s3_client = aws_sdk_s3::Client::new(&shared_config);
        tracing::debug!(region = ?shared_config.region(), "loaded S3 client configuration");
        self.builder.client(s3_client).build()
    }
}
