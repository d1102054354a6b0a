use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::configuration::Configuration;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ConfigPayload {
    #[validate(length(min = 1, max = 50))]
    pub config_name: String,
    #[validate(range(min = 0.0))]
    pub challenge_limit: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateConfigPayload {
    #[validate(length(min = 1, max = 50))]
    pub config_name: Option<String>,
    #[validate(range(min = 0.0))]
    pub challenge_limit: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConfigResponse {
    pub id: Uuid,
    pub config_name: String,
    pub challenge_limit: f64,
}

impl From<Configuration> for ConfigResponse {
    fn from(config: Configuration) -> Self {
        Self {
            id: config.id,
            config_name: config.config_name,
            challenge_limit: config.challenge_limit,
        }
    }
}
