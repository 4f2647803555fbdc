use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use snip_config::Config;
use tokio::sync::RwLock;

pub struct AppState {
    /// Profile name settings are saved back to.
    pub profile: String,
    pub config: Arc<RwLock<Config>>,
    /// One snip at a time; re-triggers are dropped while this is set.
    pub snipping: AtomicBool,
}

impl AppState {
    pub fn new(profile: String, config: Config) -> Self {
        Self {
            profile,
            config: Arc::new(RwLock::new(config)),
            snipping: AtomicBool::new(false),
        }
    }
}
