// SPDX-FileCopyrightText: 2024-2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{header::HeaderMap, Method, StatusCode};
use url::Url;

use crate::error::Result;

#[derive(Clone, Debug)]
pub(crate) struct Request {
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<Vec<u8>>,
}

impl Request {
    pub(crate) fn new(method: Method, url: Url, headers: HeaderMap) -> Self {
        Self {
            method,
            url,
            headers,
            body: None,
        }
    }

    pub(crate) fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Response {
    pub(crate) status: StatusCode,
    pub(crate) body: Vec<u8>,
}

/// Anything that can carry a request to the platform and hand back the status
/// and body of its answer.
#[async_trait]
pub(crate) trait Transport {
    async fn send(&self, req: Request) -> Result<Response>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn send(&self, req: Request) -> Result<Response> {
        debug!("Sending {} request to {}", req.method, req.url);

        let mut builder = self.request(req.method, req.url).headers(req.headers);
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let resp = builder.send().await?;
        let status = resp.status();
        let body = resp.bytes().await?.to_vec();
        debug!("Received response with status {}", status);

        Ok(Response { status, body })
    }
}

pub(crate) fn http_client(timeout: Option<Duration>) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
pub(crate) mod fake {
    use std::{
        collections::VecDeque,
        io,
        sync::{Mutex, PoisonError},
    };

    use async_trait::async_trait;
    use reqwest::StatusCode;

    use crate::error::{Error, Result};

    use super::{Request, Response, Transport};

    /// Records every request and answers from a queue of canned responses.
    pub(crate) struct FakeTransport {
        requests: Mutex<Vec<Request>>,
        responses: Mutex<VecDeque<Result<Response>>>,
    }

    impl FakeTransport {
        pub(crate) fn new<I: IntoIterator<Item = Result<Response>>>(responses: I) -> Self {
            Self {
                requests: Mutex::new(vec![]),
                responses: Mutex::new(responses.into_iter().collect()),
            }
        }

        pub(crate) fn requests(&self) -> Vec<Request> {
            self.requests
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn send(&self, req: Request) -> Result<Response> {
            self.requests
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(req);
            self.responses
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .pop_front()
                .unwrap_or_else(|| {
                    Err(Error::Io(io::Error::new(
                        io::ErrorKind::NotConnected,
                        "no response queued",
                    )))
                })
        }
    }

    pub(crate) fn response<B: Into<Vec<u8>>>(status: StatusCode, body: B) -> Result<Response> {
        Ok(Response {
            status,
            body: body.into(),
        })
    }

    pub(crate) fn connection_refused() -> Result<Response> {
        Err(Error::Io(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}
