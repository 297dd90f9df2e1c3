//! Blocking HTTP implementation of [`ProblemService`].

use std::time::Duration;

use anyhow::{Context, Result};
use leetex_core::{PAGE_SIZE, Problem, ProblemService, RequestError};
use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};
use serde::Deserialize;

const SEARCH_ENDPOINT: &str = "filter_solutions";
const GENERATE_ENDPOINT: &str = "generate_solution";

/// Connection settings for the problem backend.
#[derive(Debug, Clone)]
pub struct ClientOptions {
	/// Root of the API; endpoint names are appended to it.
	pub base_url: String,
	pub timeout: Duration,
}

impl Default for ClientOptions {
	fn default() -> Self {
		Self {
			base_url: "http://127.0.0.1:8000/api/".to_string(),
			timeout: Duration::from_secs(60),
		}
	}
}

/// Body the backend sends alongside a `404`.
#[derive(Debug, Deserialize)]
struct MessageBody {
	message: String,
}

pub struct HttpProblemService {
	client: Client,
	search_url: Url,
	generate_url: Url,
}

impl HttpProblemService {
	pub fn new(options: &ClientOptions) -> Result<Self> {
		let base = base_url(&options.base_url)?;
		let search_url = base
			.join(SEARCH_ENDPOINT)
			.context("failed to build search endpoint url")?;
		let generate_url = base
			.join(GENERATE_ENDPOINT)
			.context("failed to build generation endpoint url")?;
		let client = Client::builder()
			.timeout(options.timeout)
			.build()
			.context("failed to build HTTP client")?;
		Ok(Self {
			client,
			search_url,
			generate_url,
		})
	}

	fn get(&self, url: &Url, query: &[(&str, String)]) -> Result<(StatusCode, String), RequestError> {
		let response = self
			.client
			.get(url.clone())
			.query(query)
			.send()
			.map_err(network_error)?;
		read_body(response)
	}
}

impl ProblemService for HttpProblemService {
	fn search(&self, query: &str, offset: usize) -> Result<Vec<Problem>, RequestError> {
		let params = [("q", query.to_string()), ("offset", offset.to_string())];
		let (status, body) = self.get(&self.search_url, &params)?;
		match status {
			StatusCode::NOT_FOUND => {
				tracing::debug!(%query, offset, "search matched nothing");
				Ok(Vec::new())
			}
			status if status.is_success() => {
				let mut problems: Vec<Problem> = serde_json::from_str(&body)
					.map_err(|err| RequestError::MalformedPayload(err.to_string()))?;
				problems.truncate(PAGE_SIZE);
				tracing::debug!(%query, offset, count = problems.len(), "search completed");
				Ok(problems)
			}
			status => Err(unexpected_status(status)),
		}
	}

	fn generate(&self, problem_id: u64) -> Result<String, RequestError> {
		let params = [("pid", problem_id.to_string())];
		let (status, body) = self.get(&self.generate_url, &params)?;
		match status {
			StatusCode::NOT_FOUND => {
				let message = serde_json::from_str::<MessageBody>(&body)
					.map(|body| body.message)
					.unwrap_or_else(|_| format!("no solution found for problem {problem_id}"));
				Err(RequestError::NotFound(message))
			}
			status if status.is_success() => serde_json::from_str::<String>(&body)
				.map_err(|err| RequestError::MalformedPayload(err.to_string())),
			status => Err(unexpected_status(status)),
		}
	}
}

/// Parse `raw` and make sure it ends with `/` so endpoints join below it.
fn base_url(raw: &str) -> Result<Url> {
	let mut raw = raw.trim().to_string();
	if !raw.ends_with('/') {
		raw.push('/');
	}
	Url::parse(&raw).with_context(|| format!("invalid API base url `{raw}`"))
}

fn read_body(response: Response) -> Result<(StatusCode, String), RequestError> {
	let status = response.status();
	let body = response.text().map_err(network_error)?;
	Ok((status, body))
}

fn network_error(err: reqwest::Error) -> RequestError {
	tracing::warn!(error = %err, "request failed");
	RequestError::Network(err.to_string())
}

fn unexpected_status(status: StatusCode) -> RequestError {
	tracing::warn!(%status, "unexpected response status");
	RequestError::Network(format!("unexpected status {status}"))
}
