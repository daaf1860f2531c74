//! Vote queue: an append-only Redis list consumed by a downstream tallier.
//!
//! Appends are fire and forget. A single attempt per vote; a connection or
//! command failure surfaces as `AppError::QueueUnavailable` and is never
//! retried here.

use std::time::Duration;

use redis::{AsyncCommands, Client};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const VOTES_KEY: &str = "votes";

const QUEUE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize, Deserialize, Debug)]
pub struct VoteRecord {
    pub voter_id: String,
    pub vote: String,
}

#[derive(Clone)]
pub enum VoteQueue {
    Redis(Client),
    #[cfg(test)]
    Memory(std::sync::Arc<std::sync::Mutex<Vec<String>>>),
    #[cfg(test)]
    Unreachable,
}

impl VoteQueue {
    /// Builds the queue client. Does not connect; the first push does.
    pub fn connect(redis_url: &str) -> Self {
        Self::Redis(Client::open(redis_url).expect("Invalid redis URL"))
    }

    /// Appends one serialized record to the tail of the votes list.
    pub async fn push(&self, record: &VoteRecord) -> Result<(), AppError> {
        let payload = serde_json::to_string(record)?;

        match self {
            Self::Redis(client) => {
                let mut conn = client
                    .get_multiplexed_async_connection_with_timeouts(QUEUE_TIMEOUT, QUEUE_TIMEOUT)
                    .await?;
                conn.rpush::<_, _, ()>(VOTES_KEY, payload).await?;
            }

            #[cfg(test)]
            Self::Memory(appends) => appends.lock().unwrap().push(payload),

            #[cfg(test)]
            Self::Unreachable => {
                return Err(redis::RedisError::from((
                    redis::ErrorKind::IoError,
                    "connection refused",
                ))
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::error::AppError;

    use super::{VoteQueue, VoteRecord};

    #[tokio::test]
    async fn push_serializes_voter_id_and_vote() {
        let appends = Arc::new(Mutex::new(Vec::new()));
        let queue = VoteQueue::Memory(appends.clone());

        let record = VoteRecord {
            voter_id: "deadbeef".to_string(),
            vote: "Cats".to_string(),
        };
        queue.push(&record).await.unwrap();

        let appended = appends.lock().unwrap();
        assert_eq!(appended.len(), 1);

        let decoded: VoteRecord = serde_json::from_str(&appended[0]).unwrap();
        assert_eq!(decoded.voter_id, "deadbeef");
        assert_eq!(decoded.vote, "Cats");
    }

    #[tokio::test]
    async fn unreachable_queue_reports_queue_unavailable() {
        let record = VoteRecord {
            voter_id: "deadbeef".to_string(),
            vote: "Cats".to_string(),
        };

        let err = VoteQueue::Unreachable.push(&record).await.unwrap_err();
        assert!(matches!(err, AppError::QueueUnavailable(_)));
    }
}
