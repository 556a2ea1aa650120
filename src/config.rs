use std::path::PathBuf;
use std::time::Duration;

pub const API_BASE: &str = "https://api.scryfall.com";
pub const USER_AGENT: &str = "KyberCorax-DataPipeline/1.0 (Educational Purpose)";

pub const SETS_ENDPOINT: &str = "/sets";
pub const CARD_SEARCH_ENDPOINT: &str = "/cards/search";
pub const CATALOG_ENDPOINT: &str = "/catalog";

/// Scryfall asks clients to stay under 10 requests per second.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(100);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Extra pause between consecutive catalog explorations.
pub const CATALOG_PAUSE: Duration = Duration::from_millis(200);

pub const DEFAULT_OUTPUT_DIR: &str = "data/exploration";
pub const DEFAULT_LOG_FILE: &str = "logs/api_exploration.log";

pub const DEFAULT_CATALOG_SAMPLE: usize = 10;

pub fn default_catalogs() -> Vec<&'static str> {
    vec!["creature-types", "card-names", "supertypes"]
}

/// Runtime configuration shared by the HTTP client and the persister.
///
/// Everything here is read-only once the explorer has been built.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Fixed pause applied before every outbound request.
    pub request_delay: Duration,
    pub timeout: Duration,
    pub output_dir: PathBuf,
    pub log_file: PathBuf,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            request_delay: DEFAULT_REQUEST_DELAY,
            timeout: DEFAULT_TIMEOUT,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}
