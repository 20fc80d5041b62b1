/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::future::Future;

use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use aws_smithy_runtime_api::client::orchestrator::HttpResponse;
use tracing::Instrument;

use crate::error;

/// Types for writing a single object
pub mod put_object;

/// Types for retrieving the metadata of a single object
pub mod head_object;

/// Types for retrieving a single object
pub mod get_object;

/// Types for listing objects under a prefix
pub mod list_objects;

/// Types for deleting a single object
pub mod delete_object;

mod object_meta;
pub use object_meta::ObjectMetadata;

/// Send exactly one SDK request and normalize its error.
///
/// No retries or timeouts are layered on top of what the SDK client is configured with.
pub(crate) async fn invoke<T, E, F>(span: tracing::Span, request: F) -> Result<T, error::Error>
where
    F: Future<Output = Result<T, SdkError<E, HttpResponse>>>,
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
{
    let result = request.instrument(span.clone()).await;
    span.in_scope(|| match &result {
        Ok(_) => tracing::trace!("request succeeded"),
        Err(err) => tracing::debug!(code = ?err.code(), "request failed"),
    });
    result.map_err(error::Error::from)
}
