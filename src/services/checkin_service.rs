use crate::error::Result;
use crate::models::checkin::CheckIn;
use crate::utils::time;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct CheckInService {
    pool: PgPool,
}

impl CheckInService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns `None` when the group already checked into the room; the
    /// original timestamp is left untouched.
    pub async fn check_in(&self, group_id: Uuid, room_id: Uuid) -> Result<Option<CheckIn>> {
        let row = sqlx::query_as::<_, CheckIn>(
            r#"
            INSERT INTO checkins (group_id, room_id, checkin_dt)
            VALUES ($1, $2, $3)
            ON CONFLICT (group_id, room_id) DO NOTHING
            RETURNING id, group_id, room_id, checkin_dt
            "#,
        )
        .bind(group_id)
        .bind(room_id)
        .bind(time::now())
        .fetch_optional(&self.pool)
        .await?;

        match &row {
            Some(c) => tracing::info!(group = %group_id, room = %room_id, at = %c.checkin_dt, "group checked in"),
            None => tracing::info!(group = %group_id, room = %room_id, "duplicate check-in ignored"),
        }
        Ok(row)
    }

    pub async fn find(&self, group_id: Uuid, room_id: Uuid) -> Result<Option<CheckIn>> {
        let row = sqlx::query_as::<_, CheckIn>(
            r#"
            SELECT id, group_id, room_id, checkin_dt
            FROM checkins
            WHERE group_id = $1 AND room_id = $2
            "#,
        )
        .bind(group_id)
        .bind(room_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
