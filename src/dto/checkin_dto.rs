use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::checkin::CheckIn;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CheckInPayload {
    pub group: Uuid,
    pub room: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckInResponse {
    pub id: Uuid,
    pub group: Uuid,
    pub room: Uuid,
    pub checkin_dt: DateTime<Utc>,
}

impl From<CheckIn> for CheckInResponse {
    fn from(checkin: CheckIn) -> Self {
        Self {
            id: checkin.id,
            group: checkin.group_id,
            room: checkin.room_id,
            checkin_dt: checkin.checkin_dt,
        }
    }
}
