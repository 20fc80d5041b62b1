/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;
mod input;
mod output;

use std::mem;
use std::sync::Arc;

use aws_sdk_s3::primitives::ByteStream;
use aws_smithy_types::body::SdkBody;
use tracing::Instrument;

use crate::error;
use crate::operation::{invoke, ObjectMetadata};

/// Request type for retrieving a single object
pub use input::{GetObjectInput, GetObjectInputBuilder};
/// Response type for retrieving a single object
pub use output::StoredObject;

/// Operation struct for retrieving a single object
#[derive(Clone, Default, Debug)]
pub(crate) struct GetObject;

impl GetObject {
    /// Execute a single `GetObject` request and collect the body.
    ///
    /// A `NoSuchKey` error means the object does not exist and resolves to `None`.
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: GetObjectInput,
    ) -> Result<Option<StoredObject>, error::Error> {
        let span = tracing::debug_span!(
            "send-get-object",
            bucket = ?input.bucket(),
            key = ?input.key()
        );
        let request = handle
            .client()
            .get_object()
            .set_bucket(input.bucket)
            .set_key(input.key)
            .send();

        let result = invoke(span.clone(), request).await;
        let Some(mut output) = error::absent_on(result, error::NO_SUCH_KEY)? else {
            return Ok(None);
        };

        let body = mem::replace(&mut output.body, ByteStream::new(SdkBody::empty()));
        let metadata = ObjectMetadata::from(&output);
        let body = body.collect().instrument(span).await?.into_bytes();

        Ok(Some(StoredObject::new(metadata, body)))
    }
}

#[cfg(test)]
mod tests {
    use std::pin::Pin;
    use std::task::{Context, Poll};

    use aws_sdk_s3::error::ProvideErrorMetadata;
    use aws_sdk_s3::operation::get_object::GetObjectOutput;
    use aws_sdk_s3::primitives::ByteStream;
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};
    use aws_smithy_types::body::SdkBody;
    use bytes::Bytes;

    use super::{GetObject, GetObjectInput};
    use crate::error::{BoxError, ErrorKind};
    use crate::test_util::{error_response, replay_client, test_handle};

    fn input() -> GetObjectInput {
        GetObjectInput::builder()
            .bucket("test-bucket")
            .key("docs/readme.txt")
            .build()
            .unwrap()
    }

    /// Body that yields `data` once and then fails
    #[derive(Debug)]
    struct FailingBody {
        data: Option<Bytes>,
    }

    impl http_body_1x::Body for FailingBody {
        type Data = Bytes;
        type Error = BoxError;

        fn poll_frame(
            mut self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
        ) -> Poll<Option<Result<http_body_1x::Frame<Self::Data>, Self::Error>>> {
            let result = match self.data.take() {
                Some(data) => Ok(http_body_1x::Frame::data(data)),
                None => Err(BoxError::from("simulated body read failure")),
            };
            Poll::Ready(Some(result))
        }
    }

    #[tokio::test]
    async fn test_get_object_present() {
        let get_object = mock!(aws_sdk_s3::Client::get_object)
            .match_requests(|r| r.key() == Some("docs/readme.txt"))
            .then_output(|| {
                GetObjectOutput::builder()
                    .content_length(11)
                    .content_type("application/octet-stream")
                    .cache_control("max-age=31536000")
                    .metadata("author", "dog")
                    .body(ByteStream::from_static(b"hello world"))
                    .build()
            });
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get_object]);

        let object = GetObject::orchestrate(test_handle(client), input())
            .await
            .unwrap()
            .expect("object exists");
        assert_eq!(&Bytes::from_static(b"hello world"), object.body());
        assert_eq!(Some(11), object.metadata().content_length);
        assert_eq!(
            Some("max-age=31536000"),
            object.metadata().cache_control.as_deref()
        );
        assert_eq!(Some("dog"), object.metadata().user_metadata("author"));
    }

    #[tokio::test]
    async fn test_get_object_no_such_key_is_absent() {
        let (client, http_client) = replay_client(vec![error_response(
            404,
            "NoSuchKey",
            "The specified key does not exist.",
        )]);

        let object = GetObject::orchestrate(test_handle(client), input())
            .await
            .unwrap();
        assert!(object.is_none());
        assert_eq!(1, http_client.actual_requests().count());
    }

    #[tokio::test]
    async fn test_get_object_no_such_bucket_is_an_error() {
        let (client, _) = replay_client(vec![error_response(
            404,
            "NoSuchBucket",
            "The specified bucket does not exist",
        )]);

        let err = GetObject::orchestrate(test_handle(client), input())
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::NotFound, err.kind());
        assert_eq!(Some("NoSuchBucket"), err.code());
    }

    #[tokio::test]
    async fn test_get_object_other_error() {
        let (client, _) = replay_client(vec![error_response(
            403,
            "InvalidObjectState",
            "The operation is not valid for the object's storage class",
        )]);

        let err = GetObject::orchestrate(test_handle(client), input())
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::ServiceError, err.kind());
        assert_eq!(Some("InvalidObjectState"), err.code());
    }

    #[tokio::test]
    async fn test_get_object_body_failure() {
        let body = FailingBody {
            data: Some(Bytes::from_static(b"hello")),
        };
        let (client, _) = replay_client(vec![http_02x::Response::builder()
            .status(200)
            .body(SdkBody::from_body_1_x(body))
            .unwrap()]);

        let err = GetObject::orchestrate(test_handle(client), input())
            .await
            .unwrap_err();
        assert_eq!(&ErrorKind::IOError, err.kind());
    }

    #[tokio::test]
    async fn test_decoded_body() {
        let compressed = {
            use std::io::Write;
            let mut encoder =
                flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
            encoder.write_all(b"{\"dogs\": 3}").unwrap();
            Bytes::from(encoder.finish().unwrap())
        };
        let get_object = mock!(aws_sdk_s3::Client::get_object).then_output(move || {
            GetObjectOutput::builder()
                .content_encoding("gzip")
                .body(ByteStream::from(compressed.clone()))
                .build()
        });
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&get_object]);

        let object = GetObject::orchestrate(test_handle(client), input())
            .await
            .unwrap()
            .expect("object exists");
        assert_eq!(&[0x1f, 0x8b], &object.body()[..2]);
        let decoded = object.into_decoded_body().await.unwrap();
        assert_eq!(Bytes::from_static(b"{\"dogs\": 3}"), decoded);
    }
}
