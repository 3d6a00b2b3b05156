use axum::async_trait;

use crate::db::PgStore;
use crate::scans::repo_types::{NewScan, ScanHistory};

#[async_trait]
pub trait ScanStore: Send + Sync {
    /// Most recent scans first, at most `limit` of them.
    async fn recent(&self, limit: i64) -> anyhow::Result<Vec<ScanHistory>>;
    async fn insert(&self, scan: NewScan) -> anyhow::Result<ScanHistory>;
    async fn count(&self) -> anyhow::Result<i64>;
    async fn delete_all(&self) -> anyhow::Result<u64>;
}

#[async_trait]
impl ScanStore for PgStore {
    async fn recent(&self, limit: i64) -> anyhow::Result<Vec<ScanHistory>> {
        let rows = sqlx::query_as::<_, ScanHistory>(
            r#"
            SELECT id, file_name, disease, confidence, severity, treatment, created_at
            FROM scan_history
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert(&self, scan: NewScan) -> anyhow::Result<ScanHistory> {
        let row = sqlx::query_as::<_, ScanHistory>(
            r#"
            INSERT INTO scan_history (file_name, disease, confidence, severity, treatment, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, file_name, disease, confidence, severity, treatment, created_at
            "#,
        )
        .bind(&scan.file_name)
        .bind(&scan.disease)
        .bind(&scan.confidence)
        .bind(&scan.severity)
        .bind(&scan.treatment)
        .bind(scan.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn count(&self) -> anyhow::Result<i64> {
        let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM scan_history")
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }

    async fn delete_all(&self) -> anyhow::Result<u64> {
        let res = sqlx::query("DELETE FROM scan_history")
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }
}
