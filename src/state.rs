use std::{env, sync::Arc};

use crate::{config::Config, queue::VoteQueue, toggle::ErrorSim};

pub struct State {
    pub config: Config,
    pub hostname: String,
    pub error_sim: ErrorSim,
    pub queue: VoteQueue,
}

impl State {
    pub fn new() -> Arc<Self> {
        let config = Config::load();
        let queue = VoteQueue::connect(&config.redis_url());

        Arc::new(Self {
            hostname: hostname(),
            error_sim: ErrorSim::default(),
            config,
            queue,
        })
    }
}

/// System hostname, or "unknown" if it can't be determined.
fn hostname() -> String {
    env::var("HOSTNAME")
        .or_else(|_| env::var("HOST"))
        .unwrap_or_else(|_| "unknown".into())
}
