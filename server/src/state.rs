use std::sync::Arc;

use reqwest::Client;
use tokio::sync::Mutex;

use super::{config::Config, fetch::CachedMenu, mailer::Mailer, rate_limit::RateLimiter};

pub struct State {
    pub config: Config,
    pub http: Client,
    pub menu_cache: Mutex<Option<CachedMenu>>,
    pub limiter: RateLimiter,
    pub mailer: Mailer,
}

impl State {
    pub fn new() -> Arc<Self> {
        let config = Config::load();

        let limiter = RateLimiter::new(config.rate_limit_window, config.rate_limit_max);
        let mailer = Mailer::new(&config);

        Arc::new(Self {
            http: Client::new(),
            menu_cache: Mutex::new(None),
            limiter,
            mailer,
            config,
        })
    }
}
