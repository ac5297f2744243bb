use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;

use super::html::{attr_value, element_with_attr, elements_with_attr, strip_tags};
use super::{Author, Bib, Publication, PublicationStub, ScholarSource};
use crate::config::{ScholarConfig, MAX_PUBLICATION_LIMIT};
use crate::error::FetchError;

const USER_AGENT: &str = concat!("researcher-profile/", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Blocking client for the public scholar profile pages.
pub struct ScholarClient {
    http: Client,
    base_url: String,
}

impl ScholarClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(cfg: &ScholarConfig) -> Result<Self, FetchError> {
        Self::new(&cfg.base_url, Duration::from_secs(cfg.timeout_secs))
    }

    fn get(&self, query: &[(&str, &str)]) -> Result<(StatusCode, String), FetchError> {
        let url = format!("{}/citations", self.base_url);
        log::debug!("GET {url} {query:?}");
        let resp = self.http.get(&url).query(query).send()?;
        let status = resp.status();
        let body = resp.text()?;
        Ok((status, body))
    }
}

impl ScholarSource for ScholarClient {
    fn lookup_author(&self, author_id: &str) -> Result<Author, FetchError> {
        // One page covers every allowed `limit`.
        let page_size = MAX_PUBLICATION_LIMIT.to_string();
        let (status, body) = self.get(&[
            ("user", author_id),
            ("hl", "en"),
            ("cstart", "0"),
            ("pagesize", page_size.as_str()),
        ])?;
        match status {
            StatusCode::NOT_FOUND => Err(FetchError::AuthorNotFound(author_id.to_string())),
            s if !s.is_success() => Err(FetchError::FetchFailed(format!("profile page returned {s}"))),
            _ => parse_author_page(author_id, &body),
        }
    }

    fn fill_publication(&self, stub: &PublicationStub) -> Result<Publication, FetchError> {
        let (status, body) = self.get(&[
            ("view_op", "view_citation"),
            ("hl", "en"),
            ("citation_for_view", stub.id.as_str()),
        ])?;
        if !status.is_success() {
            return Err(FetchError::FetchFailed(format!(
                "citation page for '{}' returned {status}",
                stub.id
            )));
        }
        Ok(parse_publication_page(&body))
    }
}

// ---------------------------------------------------------------------------
// Page parsing
// ---------------------------------------------------------------------------

/// Profile page → author name plus listed publications.
///
/// Unknown ids come back as 404 and never reach this parser, so a page
/// without a profile name (captcha, consent wall, layout change) is a
/// service failure.
pub fn parse_author_page(author_id: &str, html: &str) -> Result<Author, FetchError> {
    let name = element_with_attr(html, r#"id="gsc_prf_in""#, 0)
        .map(|(_, inner, _)| strip_tags(inner))
        .filter(|n| !n.is_empty())
        .ok_or_else(|| unexpected_profile_page(author_id, html))?;

    let publications = elements_with_attr(html, r#"class="gsc_a_tr""#)
        .into_iter()
        .filter_map(|(_, row)| parse_publication_row(row))
        .collect();

    Ok(Author {
        id: author_id.to_string(),
        name,
        publications,
    })
}

fn unexpected_profile_page(author_id: &str, html: &str) -> FetchError {
    let lc = html.to_ascii_lowercase();
    let reason = if lc.contains("gs_captcha") || lc.contains("unusual traffic") {
        "request blocked by captcha"
    } else {
        "unexpected profile page"
    };
    log::warn!("Profile page for '{author_id}' has no profile name: {reason}");
    FetchError::FetchFailed(reason.to_string())
}

/// One `<tr class="gsc_a_tr">` row. Rows without a citation link are skipped.
fn parse_publication_row(row: &str) -> Option<PublicationStub> {
    let (open, inner, _) = element_with_attr(row, r#"class="gsc_a_at""#, 0)?;
    let href = attr_value(open, "href")?;
    let id = query_param(&href, "citation_for_view")?;

    let title = Some(strip_tags(inner)).filter(|t| !t.is_empty());
    let pub_year = element_with_attr(row, r#"class="gsc_a_y""#, 0)
        .and_then(|(_, cell, _)| year_in(&strip_tags(cell)));

    Some(PublicationStub {
        id,
        bib: Bib { title, pub_year },
    })
}

/// Citation page → title and publication year, each optional.
pub fn parse_publication_page(html: &str) -> Publication {
    let title = element_with_attr(html, r#"id="gsc_oci_title""#, 0)
        .map(|(_, inner, _)| strip_tags(inner))
        .filter(|t| !t.is_empty());

    let fields = elements_with_attr(html, r#"class="gsc_oci_field""#);
    let values = elements_with_attr(html, r#"class="gsc_oci_value""#);
    let pub_year = fields
        .iter()
        .zip(values.iter())
        .find(|((_, label), _)| strip_tags(label).eq_ignore_ascii_case("publication date"))
        .and_then(|(_, (_, value))| year_in(&strip_tags(value)));

    Publication {
        bib: Bib { title, pub_year },
    }
}

/// First run of exactly four digits, e.g. `2019/5/12` → `2019`.
fn year_in(text: &str) -> Option<String> {
    text.split(|c: char| !c.is_ascii_digit())
        .find(|run| run.len() == 4)
        .map(str::to_string)
}

fn query_param(href: &str, key: &str) -> Option<String> {
    let query = href.split_once('?')?.1;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.replace("%3A", ":").replace("%3a", ":"))
        .filter(|v| !v.is_empty())
}
