//! `fetch` via `gloo-net` as an [`HttpTransport`].

use gloo_net::http::{Method, RequestBuilder, Response};

use crate::net::{HttpRequest, HttpTransport};

/// Sends requests with the browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl HttpTransport for FetchTransport {
    type Response = Response;
    type Error = gloo_net::Error;

    async fn send(&self, request: HttpRequest) -> Result<Response, gloo_net::Error> {
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|e| gloo_net::Error::GlooError(e.to_string()))?;

        let mut builder = RequestBuilder::new(&request.url).method(method);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let outgoing = match request.body {
            Some(body) => builder.body(body)?,
            None => builder.build()?,
        };
        outgoing.send().await
    }
}
