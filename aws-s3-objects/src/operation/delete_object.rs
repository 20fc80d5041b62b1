/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;

use std::sync::Arc;

use aws_sdk_s3::operation::delete_object::DeleteObjectOutput;

use crate::error;
use crate::operation::invoke;

/// Request type for deleting a single object
pub use input::{DeleteObjectInput, DeleteObjectInputBuilder};

/// Operation struct for deleting a single object
#[derive(Clone, Default, Debug)]
pub(crate) struct DeleteObject;

impl DeleteObject {
    /// Execute a single `DeleteObject` request.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DeleteObjectInput,
    ) -> Result<DeleteObjectOutput, error::Error> {
        let span = tracing::debug_span!(
            "send-delete-object",
            bucket = ?input.bucket(),
            key = ?input.key()
        );
        let request = handle
            .client()
            .delete_object()
            .set_bucket(input.bucket)
            .set_key(input.key)
            .send();

        invoke(span, request).await
    }
}
