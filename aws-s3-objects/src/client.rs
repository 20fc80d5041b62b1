/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::Config;
use std::sync::Arc;

/// Object operations client for Amazon Simple Storage Service.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Handle {
    /// The S3 client to use for SDK operations
    pub(crate) fn client(&self) -> &aws_sdk_s3::Client {
        self.config.client()
    }

    /// Get the concrete gzip level to use for compressed uploads
    pub(crate) fn compression(&self) -> flate2::Compression {
        self.config.compression_level().as_flate2()
    }
}

impl Client {
    /// Creates a new client from a config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Write a single object to S3.
    ///
    /// `Content-Type` and `Cache-Control` are inferred from the key, see
    /// [`metadata`](crate::metadata). Resolves with the key that was written.
    ///
    /// Constructs a fluent builder for the
    /// [`PutObject`](crate::operation::put_object::builders::PutObjectFluentBuilder) operation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use aws_s3_objects::error::Error;
    ///
    /// async fn publish(client: &aws_s3_objects::Client) -> Result<(), Error> {
    ///     let key = client
    ///         .put_object()
    ///         .bucket("my-bucket")
    ///         .key("site/index.html")
    ///         .body("<html></html>")
    ///         .metadata("revision", "42")
    ///         .send()
    ///         .await?;
    ///
    ///     assert_eq!("site/index.html", key);
    ///     Ok(())
    /// }
    /// ```
    pub fn put_object(&self) -> crate::operation::put_object::builders::PutObjectFluentBuilder {
        crate::operation::put_object::builders::PutObjectFluentBuilder::new(self.handle.clone())
    }

    /// Write a single object to S3, gzip compressing the body when that makes it smaller.
    ///
    /// The compressed body is only sent (with `Content-Encoding: gzip`) when it is strictly
    /// smaller than the original, otherwise the original body is sent without a content
    /// encoding.
    ///
    /// Constructs a fluent builder for the
    /// [`PutObject`](crate::operation::put_object::builders::PutObjectFluentBuilder) operation
    /// with compression enabled.
    pub fn put_object_compressed(
        &self,
    ) -> crate::operation::put_object::builders::PutObjectFluentBuilder {
        crate::operation::put_object::builders::PutObjectFluentBuilder::new_compressed(
            self.handle.clone(),
        )
    }

    /// Retrieve the metadata of a single object.
    ///
    /// Resolves with `None` when the object does not exist.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use aws_s3_objects::error::Error;
    ///
    /// async fn exists(client: &aws_s3_objects::Client, key: &str) -> Result<bool, Error> {
    ///     let meta = client
    ///         .head_object()
    ///         .bucket("my-bucket")
    ///         .key(key)
    ///         .send()
    ///         .await?;
    ///     Ok(meta.is_some())
    /// }
    /// ```
    pub fn head_object(&self) -> crate::operation::head_object::builders::HeadObjectFluentBuilder {
        crate::operation::head_object::builders::HeadObjectFluentBuilder::new(self.handle.clone())
    }

    /// Retrieve a single object, body and metadata.
    ///
    /// The entire body is read into memory. Resolves with `None` when the object does not
    /// exist.
    pub fn get_object(&self) -> crate::operation::get_object::builders::GetObjectFluentBuilder {
        crate::operation::get_object::builders::GetObjectFluentBuilder::new(self.handle.clone())
    }

    /// List the objects under a key prefix.
    ///
    /// [`send`](crate::operation::list_objects::builders::ListObjectsFluentBuilder::send)
    /// returns a single page of results, use
    /// [`into_stream`](crate::operation::list_objects::builders::ListObjectsFluentBuilder::into_stream)
    /// to walk every page.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use aws_s3_objects::error::Error;
    ///
    /// async fn keys(client: &aws_s3_objects::Client) -> Result<Vec<String>, Error> {
    ///     let mut stream = client
    ///         .list_objects()
    ///         .bucket("my-bucket")
    ///         .prefix("logs/")
    ///         .into_stream()?;
    ///
    ///     let mut keys = Vec::new();
    ///     while let Some(object) = stream.next().await {
    ///         keys.extend(object?.key);
    ///     }
    ///     Ok(keys)
    /// }
    /// ```
    pub fn list_objects(&self) -> crate::operation::list_objects::builders::ListObjectsFluentBuilder {
        crate::operation::list_objects::builders::ListObjectsFluentBuilder::new(self.handle.clone())
    }

    /// Delete a single object.
    ///
    /// Resolves with the raw `DeleteObject` response.
    pub fn delete_object(
        &self,
    ) -> crate::operation::delete_object::builders::DeleteObjectFluentBuilder {
        crate::operation::delete_object::builders::DeleteObjectFluentBuilder::new(
            self.handle.clone(),
        )
    }
}
