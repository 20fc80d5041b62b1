/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;

use std::sync::Arc;

use crate::error;
use crate::operation::{invoke, ObjectMetadata};

/// Request type for retrieving object metadata
pub use input::{HeadObjectInput, HeadObjectInputBuilder};

/// Operation struct for retrieving the metadata of a single object
#[derive(Clone, Default, Debug)]
pub(crate) struct HeadObject;

impl HeadObject {
    /// Execute a single `HeadObject` request.
    ///
    /// A `NotFound` error means the object does not exist and resolves to `None`.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: HeadObjectInput,
    ) -> Result<Option<ObjectMetadata>, error::Error> {
        let span = tracing::debug_span!(
            "send-head-object",
            bucket = ?input.bucket(),
            key = ?input.key()
        );
        let request = handle
            .client()
            .head_object()
            .set_bucket(input.bucket)
            .set_key(input.key)
            .send();

        let result = invoke(span, request).await.map(ObjectMetadata::from);
        error::absent_on(result, error::NOT_FOUND)
    }
}
