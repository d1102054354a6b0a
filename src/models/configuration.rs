use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::utils::time::hours_to_duration;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Configuration {
    pub id: Uuid,
    pub config_name: String,
    pub challenge_limit: f64,
    pub created_at: DateTime<Utc>,
}

/// Configuration rows the answer workflow understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    /// Hours a group may keep answering after checking in.
    TimeLimit,
    /// Wrong attempts allowed per question before submissions are refused.
    AnswerAttemptLimit,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [ConfigKey::TimeLimit, ConfigKey::AnswerAttemptLimit];

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::TimeLimit => "settimelimit",
            ConfigKey::AnswerAttemptLimit => "limitanswersatt",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }
}

/// Typed view of the limits stored in the `config` table, built fresh for
/// every evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeLimits {
    /// `None` when no time limit is configured.
    pub time_limit: Option<Duration>,
    pub max_wrong_attempts: u32,
}

impl ChallengeLimits {
    pub fn from_configurations(rows: &[Configuration], default_attempt_limit: u32) -> Self {
        let mut limits = Self {
            time_limit: None,
            max_wrong_attempts: default_attempt_limit,
        };
        for row in rows {
            match ConfigKey::from_name(&row.config_name) {
                Some(ConfigKey::TimeLimit) => {
                    limits.time_limit = Some(hours_to_duration(row.challenge_limit));
                }
                Some(ConfigKey::AnswerAttemptLimit) => {
                    // f64 -> u32 saturates; NaN becomes 0.
                    limits.max_wrong_attempts = row.challenge_limit.max(0.0) as u32;
                }
                None => {}
            }
        }
        limits
    }

    pub fn deadline(&self, checkin_dt: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.time_limit.map(|limit| checkin_dt + limit)
    }

    pub fn within_time_window(&self, checkin_dt: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        self.deadline(checkin_dt).map_or(true, |deadline| now <= deadline)
    }
}
