use crate::dto::group_dto::{CreateGroupPayload, UpdateGroupPayload};
use crate::error::Result;
use crate::models::group::Group;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct GroupService {
    pool: PgPool,
}

impl GroupService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts every group or none of them.
    pub async fn create(&self, payloads: Vec<CreateGroupPayload>) -> Result<Vec<Group>> {
        let mut tx = self.pool.begin().await?;
        let mut groups = Vec::with_capacity(payloads.len());
        for payload in payloads {
            let group = sqlx::query_as::<_, Group>(
                r#"
                INSERT INTO groups (group_name)
                VALUES ($1)
                RETURNING id, group_name, created_at
                "#,
            )
            .bind(payload.group_name)
            .fetch_one(&mut *tx)
            .await?;
            groups.push(group);
        }
        tx.commit().await?;
        Ok(groups)
    }

    pub async fn update(&self, id: Uuid, payload: UpdateGroupPayload) -> Result<Group> {
        let group = sqlx::query_as::<_, Group>(
            r#"
            UPDATE groups
            SET group_name = COALESCE($2, group_name)
            WHERE id = $1
            RETURNING id, group_name, created_at
            "#,
        )
        .bind(id)
        .bind(payload.group_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(group)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Group> {
        let group = sqlx::query_as::<_, Group>(
            r#"SELECT id, group_name, created_at FROM groups WHERE id = $1"#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(group)
    }

    pub async fn list(&self) -> Result<Vec<Group>> {
        let groups = sqlx::query_as::<_, Group>(
            r#"SELECT id, group_name, created_at FROM groups ORDER BY group_name ASC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(groups)
    }
}
