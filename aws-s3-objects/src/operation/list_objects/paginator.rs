/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::collections::VecDeque;
use std::sync::Arc;

use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use aws_sdk_s3::types::Object;

use super::ListObjectsInput;
use crate::error::Error;
use crate::operation::invoke;

/// Position of the next `ListObjectsV2` request
#[derive(Debug, Clone, PartialEq)]
struct Cursor {
    prefix: Option<String>,
    continuation_token: Option<String>,
}

/// Walks `ListObjectsV2` pages for one listing.
///
/// Continuation tokens are followed first. Once a prefix is exhausted the common prefixes
/// collected along the way are listed in the order S3 reported them.
#[derive(Debug)]
struct ListObjectsPaginator {
    handle: Arc<crate::client::Handle>,
    input: ListObjectsInput,
    cursor: Option<Cursor>,
    pending_prefixes: VecDeque<String>,
}

impl ListObjectsPaginator {
    fn new(handle: Arc<crate::client::Handle>, input: ListObjectsInput) -> Self {
        let cursor = Cursor {
            prefix: input.prefix.clone(),
            continuation_token: None,
        };
        Self {
            handle,
            input,
            cursor: Some(cursor),
            pending_prefixes: VecDeque::new(),
        }
    }

    /// Move the cursor past the page `output` was returned for.
    fn advance(&mut self, output: &ListObjectsV2Output) {
        self.pending_prefixes.extend(
            output
                .common_prefixes()
                .iter()
                .filter_map(|p| p.prefix().map(str::to_owned)),
        );

        // a truncated page without a token cannot be continued
        let token = output
            .next_continuation_token()
            .filter(|_| output.is_truncated().unwrap_or(false));

        self.cursor = match (self.cursor.take(), token) {
            (Some(cursor), Some(token)) => Some(Cursor {
                continuation_token: Some(token.to_owned()),
                ..cursor
            }),
            _ => self.pending_prefixes.pop_front().map(|prefix| Cursor {
                prefix: Some(prefix),
                continuation_token: None,
            }),
        };
    }

    async fn next_page(&mut self) -> Option<Result<ListObjectsV2Output, Error>> {
        let cursor = self.cursor.clone()?;

        let span = tracing::debug_span!(
            "send-list-objects-v2",
            bucket = ?self.input.bucket(),
            prefix = ?cursor.prefix,
            continuation = cursor.continuation_token.is_some()
        );
        let request = self
            .handle
            .client()
            .list_objects_v2()
            .set_bucket(self.input.bucket.clone())
            .set_prefix(cursor.prefix)
            .set_continuation_token(cursor.continuation_token)
            .set_delimiter(self.input.delimiter.clone())
            .send();

        // on error the cursor stays put so the same page is requested again
        let output = invoke(span, request).await;
        if let Ok(output) = &output {
            self.advance(output);
        }
        Some(output)
    }
}

/// A lazy stream of every object under a prefix, across all `ListObjectsV2` pages.
///
/// Pages are requested one at a time as the previous one is consumed. When a delimiter is set
/// each common prefix reported by S3 is listed after the current prefix is exhausted.
#[derive(Debug)]
pub struct ListObjectsStream {
    paginator: ListObjectsPaginator,
    current_page: Option<std::vec::IntoIter<Object>>,
}

impl ListObjectsStream {
    pub(crate) fn new(handle: Arc<crate::client::Handle>, input: ListObjectsInput) -> Self {
        Self {
            paginator: ListObjectsPaginator::new(handle, input),
            current_page: None,
        }
    }

    /// Get the next object, requesting the next page if needed.
    ///
    /// Returns `None` once every page has been consumed. A failed page request is returned as
    /// an error, calling `next` again retries that page.
    pub async fn next(&mut self) -> Option<Result<Object, Error>> {
        loop {
            if let Some(object) = self.current_page.as_mut().and_then(Iterator::next) {
                return Some(Ok(object));
            }

            match self.paginator.next_page().await? {
                Ok(mut output) => {
                    self.current_page = output.contents.take().map(Vec::into_iter);
                }
                Err(err) => return Some(Err(err)),
            }
        }
    }

    /// Drain the stream, stopping at the first error.
    pub async fn try_collect(mut self) -> Result<Vec<Object>, Error> {
        let mut objects = Vec::new();
        while let Some(object) = self.next().await {
            objects.push(object?);
        }
        Ok(objects)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use aws_sdk_s3::error::ProvideErrorMetadata;
    use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
    use aws_sdk_s3::types::{CommonPrefix, Object};
    use aws_smithy_mocks_experimental::{mock, mock_client, RuleMode};

    use super::{Cursor, ListObjectsPaginator, ListObjectsStream};
    use crate::error::ErrorKind;
    use crate::operation::list_objects::ListObjectsInput;
    use crate::test_util::{error_response, replay_client, test_handle};

    /// Create a `ListObjectsV2` output
    fn list_resp(
        next_token: Option<&'static str>,
        prefix: &'static str,
        common_prefixes: Option<Vec<&'static str>>,
        keys: Vec<&'static str>,
    ) -> ListObjectsV2Output {
        let common_prefixes = common_prefixes.map(|p| {
            p.iter()
                .map(|v| CommonPrefix::builder().prefix(*v).build())
                .collect()
        });

        let contents = keys
            .iter()
            .map(|k| Object::builder().key(*k).build())
            .collect();

        ListObjectsV2Output::builder()
            .is_truncated(next_token.is_some())
            .set_next_continuation_token(next_token.map(str::to_owned))
            .prefix(prefix.to_owned())
            .set_common_prefixes(common_prefixes)
            .set_contents(Some(contents))
            .build()
    }

    fn paginator(prefix: Option<&str>) -> ListObjectsPaginator {
        let unused = mock!(aws_sdk_s3::Client::list_objects_v2)
            .then_output(|| ListObjectsV2Output::builder().build());
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&unused]);
        let input = ListObjectsInput::builder()
            .bucket("test-bucket")
            .set_prefix(prefix.map(str::to_owned))
            .build()
            .unwrap();
        ListObjectsPaginator::new(test_handle(client), input)
    }

    fn cursor(prefix: &str, token: Option<&str>) -> Option<Cursor> {
        Some(Cursor {
            prefix: Some(prefix.to_owned()),
            continuation_token: token.map(str::to_owned),
        })
    }

    // root has keys k1..k4 over two pages and common prefixes pre1 (two pages) and pre2
    #[test]
    fn test_advance() {
        let mut paginator = paginator(Some("root"));
        assert_eq!(cursor("root", None), paginator.cursor);

        paginator.advance(&list_resp(
            Some("token1"),
            "root",
            Some(vec!["pre1", "pre2"]),
            vec!["k1", "k2"],
        ));
        assert_eq!(cursor("root", Some("token1")), paginator.cursor);
        assert_eq!(
            VecDeque::from(["pre1".to_owned(), "pre2".to_owned()]),
            paginator.pending_prefixes
        );

        paginator.advance(&list_resp(None, "root", None, vec!["k3", "k4"]));
        assert_eq!(cursor("pre1", None), paginator.cursor);

        paginator.advance(&list_resp(Some("token2"), "pre1", None, vec!["pre1/k5"]));
        assert_eq!(cursor("pre1", Some("token2")), paginator.cursor);

        paginator.advance(&list_resp(None, "pre1", None, vec!["pre1/k6"]));
        assert_eq!(cursor("pre2", None), paginator.cursor);
        assert!(paginator.pending_prefixes.is_empty());

        paginator.advance(&list_resp(None, "pre2", None, vec!["pre2/k7"]));
        assert_eq!(None, paginator.cursor);
    }

    #[test]
    fn test_truncated_without_token_is_done() {
        let mut paginator = paginator(None);
        paginator.advance(&ListObjectsV2Output::builder().is_truncated(true).build());
        assert_eq!(None, paginator.cursor);
    }

    #[test]
    fn test_token_on_final_page_is_ignored() {
        let mut paginator = paginator(None);
        paginator.advance(
            &ListObjectsV2Output::builder()
                .is_truncated(false)
                .next_continuation_token("stale")
                .build(),
        );
        assert_eq!(None, paginator.cursor);
    }

    #[tokio::test]
    async fn test_object_stream() {
        let resp1 = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| {
                r.prefix() == Some("initial-prefix") && r.continuation_token().is_none()
            })
            .then_output(|| {
                list_resp(
                    Some("token1"),
                    "initial-prefix",
                    Some(vec!["pre1", "pre2"]),
                    vec!["k1", "k2"],
                )
            });
        let resp2 = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.continuation_token() == Some("token1"))
            .then_output(|| list_resp(None, "initial-prefix", None, vec!["k3", "k4"]));
        let resp3 = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.prefix() == Some("pre1") && r.continuation_token().is_none())
            .then_output(|| list_resp(Some("token2"), "pre1", None, vec!["pre1/k5", "pre1/k6"]));
        let resp4 = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.continuation_token() == Some("token2"))
            .then_output(|| list_resp(None, "pre1", None, vec!["pre1/k7", "pre1/k8"]));
        let resp5 = mock!(aws_sdk_s3::Client::list_objects_v2)
            .match_requests(|r| r.prefix() == Some("pre2"))
            .then_output(|| list_resp(None, "pre2", None, vec!["pre2/k9", "pre2/k10"]));
        let client = mock_client!(
            aws_sdk_s3,
            RuleMode::Sequential,
            &[&resp1, &resp2, &resp3, &resp4, &resp5]
        );

        let input = ListObjectsInput::builder()
            .bucket("test-bucket")
            .prefix("initial-prefix")
            .delimiter("/")
            .build()
            .unwrap();

        let stream = ListObjectsStream::new(test_handle(client), input);
        let keys: Vec<String> = stream
            .try_collect()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|obj| obj.key)
            .collect();

        assert_eq!(
            keys,
            vec![
                "k1", "k2", "k3", "k4", "pre1/k5", "pre1/k6", "pre1/k7", "pre1/k8", "pre2/k9",
                "pre2/k10"
            ]
        );
    }

    #[tokio::test]
    async fn test_object_stream_skips_empty_pages() {
        let resp1 = mock!(aws_sdk_s3::Client::list_objects_v2)
            .then_output(|| list_resp(Some("token1"), "", None, vec![]));
        let resp2 = mock!(aws_sdk_s3::Client::list_objects_v2)
            .then_output(|| list_resp(None, "", None, vec!["a"]));
        let client = mock_client!(aws_sdk_s3, RuleMode::Sequential, &[&resp1, &resp2]);

        let input = ListObjectsInput::builder()
            .bucket("test-bucket")
            .build()
            .unwrap();
        let mut stream = ListObjectsStream::new(test_handle(client), input);

        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(Some("a"), first.key());
        assert!(stream.next().await.is_none());
        // finished streams stay finished
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_object_stream_page_error() {
        let (client, _) = replay_client(vec![error_response(403, "AccessDenied", "Access Denied")]);

        let input = ListObjectsInput::builder()
            .bucket("test-bucket")
            .prefix("initial-prefix")
            .build()
            .unwrap();
        let mut stream = ListObjectsStream::new(test_handle(client), input);

        let err = stream.next().await.unwrap().unwrap_err();
        assert_eq!(&ErrorKind::ServiceError, err.kind());
        assert_eq!(Some("AccessDenied"), err.code());
        // the failed page is still pending
        assert_eq!(
            Some(Cursor {
                prefix: Some("initial-prefix".to_owned()),
                continuation_token: None,
            }),
            stream.paginator.cursor
        );
    }
}
