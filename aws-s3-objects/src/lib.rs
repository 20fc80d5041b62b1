/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! Convenience operations for single Amazon S3 objects.
//!
//! Each operation sends exactly one S3 request and applies a small amount of policy on top:
//!
//! * `Content-Type` and `Cache-Control` are inferred from the key when writing (see [`metadata`]).
//! * Bodies can be gzip compressed on the way in, and are only sent compressed when that makes
//!   them smaller.
//! * A missing object is `None` rather than an error for `head_object` and `get_object`.
//!
//! # Examples
//!
//! ```no_run
//! # async fn example() -> Result<(), aws_s3_objects::error::Error> {
//! let config = aws_s3_objects::from_env().load().await;
//! let client = aws_s3_objects::Client::new(config);
//!
//! client
//!     .put_object_compressed()
//!     .bucket("my-bucket")
//!     .key("site/data.json")
//!     .body(r#"{"dogs": 3}"#)
//!     .send()
//!     .await?;
//!
//! if let Some(object) = client.get_object().bucket("my-bucket").key("site/data.json").send().await? {
//!     let data = object.into_decoded_body().await?;
//!     # let _ = data;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! See the documentation for each client operation for more information:
//!
//! * [`put_object`](crate::Client::put_object) - write a single object
//! * [`put_object_compressed`](crate::Client::put_object_compressed) - write a single object, gzip compressed when smaller
//! * [`head_object`](crate::Client::head_object) - retrieve object metadata
//! * [`get_object`](crate::Client::get_object) - retrieve an object
//! * [`list_objects`](crate::Client::list_objects) - list objects under a prefix
//! * [`delete_object`](crate::Client::delete_object) - delete a single object

/// Error types emitted by `aws-s3-objects`
pub mod error;

/// Common types used by `aws-s3-objects`
pub mod types;

/// I/O helpers
pub(crate) mod io;

pub mod metadata;

/// Object operations client
pub mod client;

/// Object operations
pub mod operation;

/// Client configuration
pub mod config;

#[cfg(test)]
mod test_util;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
