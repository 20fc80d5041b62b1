/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::HashMap;

use aws_sdk_s3::operation::get_object::GetObjectOutput;
use aws_sdk_s3::operation::head_object::HeadObjectOutput;
use aws_sdk_s3::operation::RequestId;

use crate::types::ContentEncoding;

/// Object metadata other than the body, as returned by either `HeadObject` or `GetObject`
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub struct ObjectMetadata {
    /// Indicates the server supports range requests, `bytes` for S3
    pub accept_ranges: Option<String>,
    /// When the object was last written
    pub last_modified: Option<::aws_smithy_types::DateTime>,
    /// Size of the body in bytes
    pub content_length: Option<i64>,
    /// Entity tag of the object
    pub e_tag: Option<String>,
    pub cache_control: Option<String>,
    pub content_encoding: Option<String>,
    pub content_type: Option<String>,
    /// User metadata attached when the object was written
    pub metadata: Option<HashMap<String, String>>,
    pub version_id: Option<String>,
    /// Whether the current version of the object is a delete marker
    pub delete_marker: Option<bool>,
    pub storage_class: Option<aws_sdk_s3::types::StorageClass>,
    pub expires_string: Option<String>,

    /// The request_id of the request that retrieved this metadata
    pub request_id: Option<String>,
}

impl ObjectMetadata {
    /// The user metadata value stored under `key`, if any
    pub fn user_metadata(&self, key: &str) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// The content encoding the body was written with, if it is one this library understands
    pub fn encoding(&self) -> Option<ContentEncoding> {
        self.content_encoding
            .as_deref()
            .and_then(ContentEncoding::from_header)
    }
}

impl From<&GetObjectOutput> for ObjectMetadata {
    fn from(value: &GetObjectOutput) -> Self {
        Self {
            accept_ranges: value.accept_ranges.clone(),
            last_modified: value.last_modified,
            content_length: value.content_length,
            e_tag: value.e_tag.clone(),
            cache_control: value.cache_control.clone(),
            content_encoding: value.content_encoding.clone(),
            content_type: value.content_type.clone(),
            metadata: value.metadata.clone(),
            version_id: value.version_id.clone(),
            delete_marker: value.delete_marker,
            storage_class: value.storage_class.clone(),
            expires_string: value.expires_string.clone(),
            request_id: value.request_id().map(str::to_owned),
        }
    }
}

impl From<HeadObjectOutput> for ObjectMetadata {
    fn from(value: HeadObjectOutput) -> Self {
        let request_id = value.request_id().map(str::to_owned);
        Self {
            accept_ranges: value.accept_ranges,
            last_modified: value.last_modified,
            content_length: value.content_length,
            e_tag: value.e_tag,
            cache_control: value.cache_control,
            content_encoding: value.content_encoding,
            content_type: value.content_type,
            metadata: value.metadata,
            version_id: value.version_id,
            delete_marker: value.delete_marker,
            storage_class: value.storage_class,
            expires_string: value.expires_string,
            request_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::head_object::HeadObjectOutput;

    use super::ObjectMetadata;
    use crate::types::ContentEncoding;

    #[test]
    fn test_from_head_object() {
        let output = HeadObjectOutput::builder()
            .content_length(42)
            .e_tag("\"abc\"")
            .content_type("text/html")
            .cache_control("no-cache")
            .content_encoding("gzip")
            .metadata("revision", "7")
            .build();

        let meta: ObjectMetadata = output.into();
        assert_eq!(Some(42), meta.content_length);
        assert_eq!(Some("\"abc\""), meta.e_tag.as_deref());
        assert_eq!(Some("text/html"), meta.content_type.as_deref());
        assert_eq!(Some("no-cache"), meta.cache_control.as_deref());
        assert_eq!(Some(ContentEncoding::Gzip), meta.encoding());
        assert_eq!(Some("7"), meta.user_metadata("revision"));
        assert_eq!(None, meta.user_metadata("missing"));
    }
}
