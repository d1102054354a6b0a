use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Start of a group's clock in a room. One row per (group, room), never updated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CheckIn {
    pub id: Uuid,
    pub group_id: Uuid,
    pub room_id: Uuid,
    pub checkin_dt: DateTime<Utc>,
}
