use std::time::Duration;

use reqwest::{Client, StatusCode};
use url::Url;

use crate::domain::SubmissionRecord;

/// Forwards accepted submissions to the spreadsheet-backed webhook.
pub struct WebhookClient {
    http_client: Client,
    url: Url,
}

impl WebhookClient {
    /// Creates a client that POSTs to `url`. Every request is abandoned after
    /// `timeout`.
    ///
    /// Returns an `Err` if the underlying HTTP client can't be initialised (e.g. no
    /// TLS backend is available).
    pub fn new(url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self { http_client, url })
    }

    /// Sends `record` as a JSON body and returns the webhook's response status.
    ///
    /// The response body is never read. Returns an `Err` only when the request
    /// couldn't be completed at all (connection failure, timeout). A non-2xx
    /// status is still `Ok` and left to the caller to report.
    pub async fn forward(&self, record: &SubmissionRecord) -> Result<StatusCode, reqwest::Error> {
        let response = self
            .http_client
            .post(self.url.clone())
            .json(record)
            .send()
            .await?;

        Ok(response.status())
    }
}
