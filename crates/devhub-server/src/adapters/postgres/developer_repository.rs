//! PostgreSQL implementation of DeveloperRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use devhub::{Developer, DeveloperRepository, DomainError};

/// PostgreSQL implementation of DeveloperRepository
pub struct PgDeveloperRepository {
    pool: PgPool,
}

impl PgDeveloperRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct DeveloperRow {
    id: String,
    name: String,
    email: String,
    date_of_birth: NaiveDate,
}

impl From<DeveloperRow> for Developer {
    fn from(row: DeveloperRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            date_of_birth: row.date_of_birth,
        }
    }
}

#[async_trait]
impl DeveloperRepository for PgDeveloperRepository {
    async fn save(&self, developer: &Developer) -> Result<Developer, DomainError> {
        let row = sqlx::query_as::<_, DeveloperRow>(
            r#"
            INSERT INTO developers (id, name, email, date_of_birth)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name, email = EXCLUDED.email, date_of_birth = EXCLUDED.date_of_birth
            RETURNING id, name, email, date_of_birth
            "#,
        )
        .bind(&developer.id)
        .bind(&developer.name)
        .bind(&developer.email)
        .bind(developer.date_of_birth)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.into())
    }

    async fn find(&self) -> Result<Vec<Developer>, DomainError> {
        let rows = sqlx::query_as::<_, DeveloperRow>(
            "SELECT id, name, email, date_of_birth FROM developers ORDER BY created_at, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Developer>, DomainError> {
        let row = sqlx::query_as::<_, DeveloperRow>(
            "SELECT id, name, email, date_of_birth FROM developers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn remove(&self, developer: Developer) -> Result<Developer, DomainError> {
        let result = sqlx::query("DELETE FROM developers WHERE id = $1")
            .bind(&developer.id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        if result.rows_affected() == 0 {
            tracing::debug!("Developer {} was already gone at delete time", developer.id);
        }

        Ok(developer)
    }
}
