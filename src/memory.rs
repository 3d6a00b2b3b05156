//! In-process document store used by tests.

use std::sync::Mutex;

use axum::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::auth::{
    repo::UserStore,
    repo_types::{NewUser, User},
};
use crate::scans::{
    repo::ScanStore,
    repo_types::{NewScan, ScanHistory},
};

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    scans: Mutex<Vec<ScanHistory>>,
}

impl MemoryStore {
    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: NewUser) -> anyhow::Result<Option<User>> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Ok(None);
        }
        let stored = User {
            id: Uuid::new_v4(),
            email: user.email,
            password: user.password,
            role: user.role,
            name: user.name,
            created_at: OffsetDateTime::now_utc(),
        };
        users.push(stored.clone());
        Ok(Some(stored))
    }
}

#[async_trait]
impl ScanStore for MemoryStore {
    async fn recent(&self, limit: i64) -> anyhow::Result<Vec<ScanHistory>> {
        let mut scans = self.scans.lock().unwrap().clone();
        scans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        scans.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(scans)
    }

    async fn insert(&self, scan: NewScan) -> anyhow::Result<ScanHistory> {
        let stored = ScanHistory {
            id: Uuid::new_v4(),
            file_name: scan.file_name,
            disease: scan.disease,
            confidence: scan.confidence,
            severity: scan.severity,
            treatment: scan.treatment,
            created_at: scan.created_at,
        };
        self.scans.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn count(&self) -> anyhow::Result<i64> {
        Ok(i64::try_from(self.scans.lock().unwrap().len())?)
    }

    async fn delete_all(&self) -> anyhow::Result<u64> {
        let mut scans = self.scans.lock().unwrap();
        let n = u64::try_from(scans.len())?;
        scans.clear();
        Ok(n)
    }
}
