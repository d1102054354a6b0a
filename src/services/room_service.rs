use crate::dto::room_dto::{CreateRoomPayload, UpdateRoomPayload};
use crate::error::Result;
use crate::models::room::Room;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct RoomService {
    pool: PgPool,
}

impl RoomService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts every room or none of them.
    pub async fn create(&self, payloads: Vec<CreateRoomPayload>) -> Result<Vec<Room>> {
        let mut tx = self.pool.begin().await?;
        let mut rooms = Vec::with_capacity(payloads.len());
        for payload in payloads {
            let room = sqlx::query_as::<_, Room>(
                r#"
                INSERT INTO rooms (room_name)
                VALUES ($1)
                RETURNING id, room_name, created_at
                "#,
            )
            .bind(payload.room_name)
            .fetch_one(&mut *tx)
            .await?;
            rooms.push(room);
        }
        tx.commit().await?;
        Ok(rooms)
    }

    pub async fn update(&self, id: Uuid, payload: UpdateRoomPayload) -> Result<Room> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            UPDATE rooms
            SET room_name = COALESCE($2, room_name)
            WHERE id = $1
            RETURNING id, room_name, created_at
            "#,
        )
        .bind(id)
        .bind(payload.room_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(room)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Room> {
        let room = sqlx::query_as::<_, Room>(
            r#"SELECT id, room_name, created_at FROM rooms WHERE id = $1"#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(room)
    }

    pub async fn list(&self) -> Result<Vec<Room>> {
        let rooms = sqlx::query_as::<_, Room>(
            r#"SELECT id, room_name, created_at FROM rooms ORDER BY created_at ASC, room_name ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rooms)
    }
}
