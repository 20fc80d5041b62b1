/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_sdk_s3::error::{ProvideErrorMetadata, SdkError};
use aws_smithy_types::error::ErrorMetadata;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error code S3 reports from `HeadObject` when the key does not exist.
///
/// `HEAD` responses carry no body, so the SDK synthesizes this code from the 404 status.
pub const NOT_FOUND: &str = "NotFound";

/// Error code S3 reports from `GetObject` when the key does not exist.
pub const NO_SUCH_KEY: &str = "NoSuchKey";

/// Error code S3 reports when the bucket does not exist.
pub const NO_SUCH_BUCKET: &str = "NoSuchBucket";

/// Errors returned by this library
///
/// Service errors keep the code and message reported by S3, see [`ProvideErrorMetadata`].
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
    meta: ErrorMetadata,
}

/// General categories of object operation errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input validation issues
    InputInvalid,

    /// I/O errors (e.g. compressing a body or reading a response body)
    IOError,

    /// Some kind of internal runtime issue (e.g. blocking task failure)
    RuntimeError,

    /// Resource not found (e.g. bucket or key not found) and not treated as an absent object
    /// by the operation that reported it
    NotFound,

    /// The service responded with an error
    ServiceError,

    /// The request could not be sent or no usable response was received
    RequestFailed,
}

impl Error {
    /// Creates a new [`Error`] from a known kind of error as well as an arbitrary error
    /// source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
            meta: ErrorMetadata::default(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::IOError => write!(f, "I/O error"),
            ErrorKind::RuntimeError => write!(f, "runtime error"),
            ErrorKind::NotFound => write!(f, "resource not found"),
            ErrorKind::ServiceError => write!(f, "service error"),
            ErrorKind::RequestFailed => write!(f, "request failed"),
        }?;
        match (self.meta.code(), self.meta.message()) {
            (Some(code), Some(message)) => write!(f, " ({code}: {message})"),
            (Some(code), None) => write!(f, " ({code})"),
            _ => Ok(()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl ProvideErrorMetadata for Error {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }

    fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    fn message(&self) -> Option<&str> {
        self.meta.message()
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::new(ErrorKind::RuntimeError, value)
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

impl From<aws_smithy_types::byte_stream::error::Error> for Error {
    fn from(value: aws_smithy_types::byte_stream::error::Error) -> Self {
        Self::new(ErrorKind::IOError, value)
    }
}

impl<E, R> From<SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: SdkError<E, R>) -> Self {
        let meta = value.meta().clone();
        let kind = match (&value, meta.code()) {
            (SdkError::ServiceError(_), Some(NOT_FOUND | NO_SUCH_KEY | NO_SUCH_BUCKET)) => {
                ErrorKind::NotFound
            }
            (SdkError::ServiceError(_), _) => ErrorKind::ServiceError,
            _ => ErrorKind::RequestFailed,
        };

        Error {
            kind,
            source: value.into(),
            meta,
        }
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

/// Treat an error carrying `absent_code` as the object not existing.
///
/// Any other error is returned unchanged.
pub(crate) fn absent_on<T>(result: Result<T, Error>, absent_code: &str) -> Result<Option<T>, Error> {
    match result {
        Ok(output) => Ok(Some(output)),
        Err(err) if err.code() == Some(absent_code) => {
            tracing::debug!(code = absent_code, "object does not exist");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
