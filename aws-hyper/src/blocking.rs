/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Blocking facade over [`Client`](crate::Client)
//!
//! Each blocking client owns a current-thread tokio runtime and drives every call to completion
//! on the calling thread.

use crate::conn::Standard;
use crate::{BoxError, RetryConfig, SdkError, SdkSuccess};
use smithy_http::body::SdkBody;
use smithy_http::operation::Operation;
use smithy_http::response::ParseHttpResponse;
use smithy_http::retry::ClassifyResponse;
use smithy_types::retry::ProvideErrorKind;
use std::fmt::Debug;
use std::io;
use tokio::runtime::{Builder, Runtime};
use tower::Service;

/// Blocking AWS Service Client
///
/// ```rust,no_run
/// let client = aws_hyper::blocking::Client::https().expect("failed to start the runtime");
/// ```
pub struct Client<S = Standard> {
    runtime: Runtime,
    inner: crate::Client<S>,
}

impl Client<Standard> {
    /// A blocking client that sends requests over https
    pub fn https() -> Result<Self, io::Error> {
        Client::new(Standard::https())
    }
}

impl<S> Client<S> {
    /// A blocking client that dispatches through `connector`
    ///
    /// Fails when the runtime cannot be started.
    pub fn new(connector: S) -> Result<Self, io::Error> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Client {
            runtime,
            inner: crate::Client::new(connector),
        })
    }

    pub fn with_retry_config(self, config: RetryConfig) -> Self {
        Client {
            runtime: self.runtime,
            inner: self.inner.with_retry_config(config),
        }
    }
}

impl<S> Client<S>
where
    S: Service<http::Request<SdkBody>, Response = http::Response<hyper::Body>>
        + Send
        + Clone
        + 'static,
    S::Error: Into<BoxError> + Send + Sync + 'static,
    S::Future: Send + 'static,
{
    /// Send `input` and block until its response is parsed, retries included
    pub fn call<O, T, E, Retry>(&self, input: Operation<O, Retry>) -> Result<T, SdkError<E>>
    where
        O: ParseHttpResponse<hyper::Body, Output = Result<T, E>> + Send + Clone + 'static,
        E: ProvideErrorKind + Debug,
        Retry: ClassifyResponse<SdkSuccess<T>, SdkError<E>>,
    {
        self.runtime.block_on(self.inner.call(input))
    }

    pub fn call_raw<O, T, E, Retry>(
        &self,
        input: Operation<O, Retry>,
    ) -> Result<SdkSuccess<T>, SdkError<E>>
    where
        O: ParseHttpResponse<hyper::Body, Output = Result<T, E>> + Send + Clone + 'static,
        E: ProvideErrorKind + Debug,
        Retry: ClassifyResponse<SdkSuccess<T>, SdkError<E>>,
    {
        self.runtime.block_on(self.inner.call_raw(input))
    }
}

/// The continuation token for the next page
///
/// Pagination stops when the service omits the token or echoes the token that produced the
/// current page.
pub fn next_token(previous: Option<&str>, next: Option<&str>) -> Option<String> {
    match next {
        Some(next) if Some(next) != previous => Some(next.to_string()),
        _ => None,
    }
}

/// Iterator over the pages of a paginated operation
///
/// Every page is fetched lazily. Iteration ends after the last page or after the first error.
pub struct Paginator<'a, I, O, E> {
    next_input: Option<I>,
    fetch: Box<dyn FnMut(I) -> Result<O, E> + 'a>,
    advance: fn(&I, &O) -> Option<I>,
}

impl<'a, I, O, E> Paginator<'a, I, O, E> {
    /// `fetch` sends one request. `advance` builds the input of the next page from the current
    /// input & output, returning `None` after the last page.
    pub fn new(
        input: I,
        fetch: impl FnMut(I) -> Result<O, E> + 'a,
        advance: fn(&I, &O) -> Option<I>,
    ) -> Self {
        Paginator {
            next_input: Some(input),
            fetch: Box::new(fetch),
            advance,
        }
    }
}

impl<'a, I: Clone, O, E> Iterator for Paginator<'a, I, O, E> {
    type Item = Result<O, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.next_input.take()?;
        let page = (self.fetch)(input.clone());
        if let Ok(output) = &page {
            self.next_input = (self.advance)(&input, output);
        }
        Some(page)
    }
}

#[cfg(test)]
mod test {
    use crate::blocking::{next_token, Paginator};

    #[derive(Clone, Debug, PartialEq)]
    struct Page {
        marker: Option<String>,
    }

    #[test]
    fn tokens_stop_pagination() {
        assert_eq!(next_token(None, Some("a")), Some("a".to_string()));
        assert_eq!(next_token(Some("a"), Some("b")), Some("b".to_string()));
        assert_eq!(next_token(Some("a"), Some("a")), None);
        assert_eq!(next_token(Some("a"), None), None);
    }

    #[test]
    fn paginator_threads_tokens() {
        let mut pages = vec![Some("2"), Some("3"), None].into_iter();
        let mut seen = vec![];
        let paginator = Paginator::new(
            Page { marker: None },
            |input: Page| -> Result<Page, ()> {
                seen.push(input.marker.clone());
                Ok(Page {
                    marker: pages.next().flatten().map(str::to_string),
                })
            },
            |input, output| {
                next_token(input.marker.as_deref(), output.marker.as_deref())
                    .map(|marker| Page { marker: Some(marker) })
            },
        );
        assert_eq!(paginator.count(), 3);
        assert_eq!(seen, vec![None, Some("2".to_string()), Some("3".to_string())]);
    }

    #[test]
    fn repeated_tokens_end_pagination() {
        let paginator = Paginator::new(
            Page { marker: None },
            |_| -> Result<Page, ()> {
                Ok(Page {
                    marker: Some("same".to_string()),
                })
            },
            |input, output| {
                next_token(input.marker.as_deref(), output.marker.as_deref())
                    .map(|marker| Page { marker: Some(marker) })
            },
        );
        assert_eq!(paginator.count(), 2);
    }

    #[test]
    fn errors_end_pagination() {
        let paginator = Paginator::new(
            Page { marker: None },
            |_| -> Result<Page, &'static str> { Err("throttled") },
            |_, _| panic!("no next page after an error"),
        );
        let pages = paginator.collect::<Vec<_>>();
        assert_eq!(pages, vec![Err("throttled")]);
    }
}
