/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod paginator;

use std::sync::Arc;

use aws_sdk_s3::types::Object;

use crate::error;
use crate::operation::invoke;

/// Request type for listing objects
pub use input::{ListObjectsInput, ListObjectsInputBuilder};
pub use paginator::ListObjectsStream;

/// Operation struct for listing objects
#[derive(Clone, Default, Debug)]
pub(crate) struct ListObjects;

impl ListObjects {
    /// Execute a single `ListObjectsV2` request.
    ///
    /// Only the first page is requested, at most 1,000 objects.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: ListObjectsInput,
    ) -> Result<Vec<Object>, error::Error> {
        let span = tracing::debug_span!(
            "send-list-objects-v2",
            bucket = ?input.bucket(),
            prefix = ?input.prefix()
        );
        let request = handle
            .client()
            .list_objects_v2()
            .set_bucket(input.bucket)
            .set_prefix(input.prefix)
            .set_delimiter(input.delimiter)
            .send();

        let output = invoke(span, request).await?;
        if output.is_truncated().unwrap_or(false) {
            tracing::debug!("listing truncated to a single page");
        }
        Ok(output.contents.unwrap_or_default())
    }
}
