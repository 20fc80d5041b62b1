/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Helpers shared by unit tests.
//!
//! Error cases go through [`replay_client`] so the SDK deserializes a real HTTP response and
//! extracts the error code itself.

use std::sync::Arc;

use aws_config::Region;
use aws_smithy_runtime::client::http::test_util::{ReplayEvent, StaticReplayClient};
use aws_smithy_types::body::SdkBody;

use crate::client::Handle;

pub(crate) fn test_handle(client: aws_sdk_s3::Client) -> Arc<Handle> {
    let config = crate::Config::builder().client(client).build();
    crate::Client::new(config).handle.clone()
}

/// Placeholder request, assertions are made against the captured requests instead.
fn dummy_expected_request() -> http_02x::Request<SdkBody> {
    http_02x::Request::builder()
        .uri("https://not-used")
        .body(SdkBody::from(&b""[..]))
        .unwrap()
}

/// S3 client answering requests with `responses`, in order.
pub(crate) fn replay_client(
    responses: Vec<http_02x::Response<SdkBody>>,
) -> (aws_sdk_s3::Client, StaticReplayClient) {
    let events = responses
        .into_iter()
        .map(|resp| ReplayEvent::new(dummy_expected_request(), resp))
        .collect();
    let http_client = StaticReplayClient::new(events);

    let client = aws_sdk_s3::Client::from_conf(
        aws_sdk_s3::config::Config::builder()
            .http_client(http_client.clone())
            .region(Region::from_static("us-west-2"))
            .with_test_defaults()
            .build(),
    );
    (client, http_client)
}

/// S3 error response with an XML `<Error>` body.
pub(crate) fn error_response(
    status: u16,
    code: &str,
    message: &str,
) -> http_02x::Response<SdkBody> {
    let body = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
        <Error>
            <Code>{code}</Code>
            <Message>{message}</Message>
            <RequestId>K2H6N7ZGQT6WHCEG</RequestId>
        </Error>
"#
    );
    http_02x::Response::builder()
        .status(status)
        .header("Content-Type", "application/xml")
        .body(SdkBody::from(body))
        .unwrap()
}

/// Response without a body, as returned for `HEAD` requests.
pub(crate) fn empty_response(status: u16) -> http_02x::Response<SdkBody> {
    http_02x::Response::builder()
        .status(status)
        .body(SdkBody::empty())
        .unwrap()
}
