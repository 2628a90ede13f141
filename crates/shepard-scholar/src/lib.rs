//! Fetches opinion text from the scholar site.
//!
//! Opinions are pre-uploaded documents addressed by scholar id; one GET
//! per run, no retry. The HTML is reduced to visible text before it is
//! handed to the prompt builder.

use async_trait::async_trait;
use shepard_core::{error::Error, registry::CaseEntry, source::OpinionSource};
use tracing::info;

/// The scholar page wraps the opinion body in this container. Pages
/// without it (layout drift) fall back to whole-document extraction.
const OPINION_CONTAINER: &str = "#gs_opinion";

/// The scholar site rejects non-browser user agents.
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

pub struct ScholarClient {
    http: reqwest::Client,
    base_url: String,
}

impl ScholarClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl OpinionSource for ScholarClient {
    async fn fetch_opinion(&self, case: &CaseEntry) -> Result<String, Error> {
        let url = format!(
            "{}/scholar_case?case={}",
            self.base_url.trim_end_matches('/'),
            case.scholar_id
        );

        info!(case_name = case.case_name, url = %url, "fetching opinion page");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("HTTP {status} from {url}")));
        }

        let html = response
            .text()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        let text = extract_opinion_text(&html);
        if text.is_empty() {
            return Err(Error::Fetch(format!("no visible text at {url}")));
        }

        Ok(text)
    }
}

/// Reduce the opinion page to clean visible text.
///
/// Prefers the opinion container so navigation chrome and footers stay
/// out of the prompt; collapses blank lines either way.
fn extract_opinion_text(html: &str) -> String {
    use scraper::{Html, Selector};

    let fragment = Selector::parse(OPINION_CONTAINER)
        .ok()
        .and_then(|selector| {
            let document = Html::parse_document(html);
            document.select(&selector).next().map(|el| el.html())
        });

    let source = fragment.as_deref().unwrap_or(html);
    let text = html2text::from_read(source.as_bytes(), 100);

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
