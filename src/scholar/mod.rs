//! Publication lookup against an academic-profile service.
//!
//! ```text
//!   author id ──► ScholarSource::lookup_author ──► Author { stubs }
//!                                                     │ first `limit`
//!                                                     ▼
//!                ScholarSource::fill_publication ──► Publication { bib }
//!                                                     │ default missing fields
//!                                                     ▼
//!                                              PublicationRecord
//! ```
pub mod html;
pub mod http;
pub mod task;

use std::fmt;
use std::thread;
use std::time::Duration;

use crate::error::FetchError;

pub const NO_TITLE: &str = "No title";
pub const UNKNOWN_YEAR: &str = "Unknown year";

// ---------------------------------------------------------------------------
// Raw records as the service returns them
// ---------------------------------------------------------------------------

/// Bibliographic fields; any of them may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bib {
    pub title: Option<String>,
    pub pub_year: Option<String>,
}

impl Bib {
    /// Fields of `self`, falling back to `other` where absent.
    pub fn or(self, other: &Bib) -> Bib {
        Bib {
            title: self.title.or_else(|| other.title.clone()),
            pub_year: self.pub_year.or_else(|| other.pub_year.clone()),
        }
    }
}

/// A publication entry from the author's list, before its detail lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicationStub {
    /// Service-side id used for the detail lookup.
    pub id: String,
    pub bib: Bib,
}

/// A publication after its detail lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Publication {
    pub bib: Bib,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub id: String,
    pub name: String,
    /// In the order the service lists them.
    pub publications: Vec<PublicationStub>,
}

// ---------------------------------------------------------------------------
// PublicationRecord – what the view shows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationRecord {
    pub title: String,
    pub year: Option<i32>,
}

impl PublicationRecord {
    pub fn from_bib(bib: &Bib) -> Self {
        let title = bib
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        let year = bib.pub_year.as_deref().and_then(|y| y.trim().parse().ok());

        if title.is_none() {
            log::debug!("publication without title, using '{NO_TITLE}'");
        }
        if year.is_none() {
            log::debug!("publication without usable year ({:?})", bib.pub_year);
        }

        Self {
            title: title.unwrap_or_else(|| NO_TITLE.to_string()),
            year,
        }
    }
}

impl fmt::Display for PublicationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(y) => write!(f, "{} - ({y})", self.title),
            None => write!(f, "{} - ({UNKNOWN_YEAR})", self.title),
        }
    }
}

// ---------------------------------------------------------------------------
// Source abstraction
// ---------------------------------------------------------------------------

/// The external academic-profile service.
pub trait ScholarSource: Send + Sync {
    /// Look up an author by id, including their publication list.
    fn lookup_author(&self, author_id: &str) -> Result<Author, FetchError>;

    /// Detail lookup for one publication.
    fn fill_publication(&self, stub: &PublicationStub) -> Result<Publication, FetchError>;
}

/// Fetch an author and detail-fill the first `limit` publications, in
/// service order. Any lookup failure aborts the whole fetch.
pub fn fetch_publications(
    source: &dyn ScholarSource,
    author_id: &str,
    limit: usize,
) -> Result<Vec<PublicationRecord>, FetchError> {
    let author_id = author_id.trim();
    if author_id.is_empty() {
        return Err(FetchError::AuthorNotFound(String::new()));
    }

    let author = source.lookup_author(author_id)?;
    log::info!(
        "Author '{}' ({}): {} publications on the first page, filling up to {limit}",
        author.name,
        author.id,
        author.publications.len()
    );

    let records = author
        .publications
        .iter()
        .take(limit)
        .map(|stub| {
            let filled = source.fill_publication(stub)?;
            Ok::<_, FetchError>(PublicationRecord::from_bib(&filled.bib.or(&stub.bib)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(records)
}

// ---------------------------------------------------------------------------
// Bounded retry
// ---------------------------------------------------------------------------

/// Wraps a source so each call makes at most `max_attempts` tries, sleeping
/// `backoff * attempt` (saturating) between them. Only `FetchFailed` is retried.
pub struct Retrying<S> {
    inner: S,
    max_attempts: u32,
    backoff: Duration,
}

impl<S: ScholarSource> Retrying<S> {
    pub fn new(inner: S, max_attempts: u32, backoff: Duration) -> Self {
        Self {
            inner,
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// Sleep before retry number `attempt`.
    fn delay(&self, attempt: u32) -> Duration {
        self.backoff.saturating_mul(attempt)
    }

    fn attempt<T>(&self, what: &str, mut call: impl FnMut() -> Result<T, FetchError>) -> Result<T, FetchError> {
        let mut attempt = 1;
        loop {
            match call() {
                Err(FetchError::FetchFailed(msg)) if attempt < self.max_attempts => {
                    log::warn!("{what}: attempt {attempt}/{} failed: {msg}", self.max_attempts);
                    thread::sleep(self.delay(attempt));
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}

impl<S: ScholarSource> ScholarSource for Retrying<S> {
    fn lookup_author(&self, author_id: &str) -> Result<Author, FetchError> {
        self.attempt("author lookup", || self.inner.lookup_author(author_id))
    }

    fn fill_publication(&self, stub: &PublicationStub) -> Result<Publication, FetchError> {
        self.attempt("publication lookup", || self.inner.fill_publication(stub))
    }
}
