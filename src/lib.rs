//! Scryfall API explorer.
//!
//! Queries the public Scryfall REST API, reduces the JSON responses into
//! small structural summaries, and writes them to disk as pretty-printed JSON.
//! Requests are sequential and paced by a fixed delay.
//!
//! # Quick start
//!
//! ```no_run
//! use scryfall_explorer::ScryfallExplorer;
//!
//! let explorer = ScryfallExplorer::builder().build().unwrap();
//!
//! let sets = explorer.explore_sets(20);
//! explorer.save(&sets, "sets_analysis.json").unwrap();
//!
//! let cards = explorer.explore_cards("inr", 5);
//! println!("{:?}", cards.summary().map(|c| c.total_cards));
//! ```

pub mod analysis;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod persist;

pub use client::ApiClient;
pub use config::ExplorerConfig;
pub use error::{ExplorerError, Result};
pub use models::{Analysis, CardSummary, CatalogSummary, SetSummary};
pub use persist::ResultPersister;

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// ScryfallExplorerBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`ScryfallExplorer`].
///
/// Starts from [`ExplorerConfig::default()`]; every setter overrides one field.
#[derive(Default)]
pub struct ScryfallExplorerBuilder {
    config: ExplorerConfig,
}

impl ScryfallExplorerBuilder {
    /// Set the API base URL. Defaults to `https://api.scryfall.com`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the `User-Agent` header sent with every request.
    ///
    /// Defaults to the KyberCorax pipeline identifier.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the pause applied before every request. Defaults to 100 ms.
    pub fn request_delay(mut self, delay: Duration) -> Self {
        self.config.request_delay = delay;
        self
    }

    /// Set the per-request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the directory analysis files are written to.
    ///
    /// Defaults to `data/exploration`, relative to the working directory.
    pub fn output_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.output_dir = path.as_ref().to_path_buf();
        self
    }

    /// Set the append-only log file used by
    /// [`init_logging()`](ScryfallExplorer::init_logging).
    ///
    /// Defaults to `logs/api_exploration.log`.
    pub fn log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.log_file = path.as_ref().to_path_buf();
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ExplorerConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the explorer and its HTTP client.
    ///
    /// No request is sent until an analysis method is called.
    pub fn build(self) -> Result<ScryfallExplorer> {
        let base = self.config.base_url.as_str();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ExplorerError::InvalidArgument(format!(
                "base URL must be http(s): {}",
                base
            )));
        }

        let client = ApiClient::new(&self.config)?;
        let persister = ResultPersister::new(&self.config.output_dir);
        Ok(ScryfallExplorer {
            config: self.config,
            client,
            persister,
        })
    }
}

// ---------------------------------------------------------------------------
// ScryfallExplorer
// ---------------------------------------------------------------------------

/// The main entry point: owns the HTTP client and the result persister.
///
/// Analyzers are exposed as lightweight borrowing wrappers.
pub struct ScryfallExplorer {
    config: ExplorerConfig,
    client: ApiClient,
    persister: ResultPersister,
}

impl ScryfallExplorer {
    /// Create a new builder for configuring the explorer.
    pub fn builder() -> ScryfallExplorerBuilder {
        ScryfallExplorerBuilder::default()
    }

    // -- Analyzer accessors ------------------------------------------------

    /// Access the set analyzer.
    ///
    /// Returns a lightweight wrapper that borrows the shared HTTP client.
    pub fn sets(&self) -> analysis::SetAnalyzer<'_> {
        analysis::SetAnalyzer::new(&self.client)
    }

    /// Access the card analyzer for `set:<code>` searches.
    pub fn cards(&self) -> analysis::CardAnalyzer<'_> {
        analysis::CardAnalyzer::new(&self.client)
    }

    /// Access the catalog analyzer (`/catalog/<type>`).
    pub fn catalogs(&self) -> analysis::CatalogAnalyzer<'_> {
        analysis::CatalogAnalyzer::new(&self.client)
    }

    // -- Shortcuts ---------------------------------------------------------

    /// Summarize the first `limit` sets of `/sets`.
    pub fn explore_sets(&self, limit: usize) -> Analysis<SetSummary> {
        self.sets().analyze(limit)
    }

    /// Summarize the first `limit` cards of page 1 of `set:<set_code>`.
    pub fn explore_cards(&self, set_code: &str, limit: usize) -> Analysis<CardSummary> {
        self.cards().analyze(set_code, limit)
    }

    /// Summarize `/catalog/<catalog_type>`, keeping `limit` sample items.
    pub fn explore_catalog(&self, catalog_type: &str, limit: usize) -> Analysis<CatalogSummary> {
        self.catalogs().analyze(catalog_type, limit)
    }

    /// Write `results` to `<output_dir>/<filename>`.
    pub fn save<T: Serialize + ?Sized>(&self, results: &T, filename: &str) -> Result<PathBuf> {
        self.persister.save(results, filename)
    }

    /// Install the console and file log sinks.
    ///
    /// Logs go to stdout and are appended to the configured `log_file`,
    /// whose directory is created if needed. Fails if a global subscriber is
    /// already installed.
    pub fn init_logging(&self) -> Result<()> {
        logging::init(&self.config.log_file)
    }

    /// Return the configuration the explorer was built with.
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Return a reference to the underlying [`ApiClient`] for raw requests.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

impl fmt::Display for ScryfallExplorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScryfallExplorer(base_url={}, delay={}ms, output_dir={})",
            self.client.base_url(),
            self.config.request_delay.as_millis(),
            self.persister.output_dir().display()
        )
    }
}
