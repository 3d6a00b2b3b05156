use tracing::debug;

use crate::auth::{
    dto::RegisterRequest,
    repo::UserStore,
    repo_types::{NewUser, User, DEFAULT_ROLE},
};

pub const EMAIL_TAKEN: &str = "Email already exists";
pub const REGISTERED: &str = "User registered successfully";

#[derive(Debug)]
pub enum Registration {
    Created(User),
    EmailTaken,
}

impl Registration {
    pub fn message(&self) -> &'static str {
        match self {
            Registration::Created(_) => REGISTERED,
            Registration::EmailTaken => EMAIL_TAKEN,
        }
    }
}

pub async fn register_user(
    users: &dyn UserStore,
    req: RegisterRequest,
) -> anyhow::Result<Registration> {
    if users.find_by_email(&req.email).await?.is_some() {
        return Ok(Registration::EmailTaken);
    }

    if let Some(role) = req.role.as_deref() {
        debug!(requested_role = %role, "ignoring client-supplied role");
    }

    let new_user = NewUser {
        email: req.email,
        password: req.password,
        role: DEFAULT_ROLE.to_string(),
        name: req.name,
    };

    // The unique index still guards concurrent registrations that pass the lookup.
    Ok(match users.insert(new_user).await? {
        Some(user) => Registration::Created(user),
        None => Registration::EmailTaken,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn req(email: &str, role: Option<&str>) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: "hunter2".to_string(),
            name: None,
            role: role.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn forces_farmer_role() {
        let store = MemoryStore::default();
        let out = register_user(&store, req("a@farm.io", Some("ADMIN")))
            .await
            .unwrap();
        match out {
            Registration::Created(u) => assert_eq!(u.role, "FARMER"),
            other => panic!("unexpected {:?}", other),
        }
        let stored = store.find_by_email("a@farm.io").await.unwrap().unwrap();
        assert_eq!(stored.role, DEFAULT_ROLE);
    }

    #[tokio::test]
    async fn duplicate_email_is_not_stored_twice() {
        let store = MemoryStore::default();
        let first = register_user(&store, req("dup@farm.io", None)).await.unwrap();
        assert_eq!(first.message(), REGISTERED);

        let second = register_user(&store, req("dup@farm.io", None)).await.unwrap();
        assert!(matches!(second, Registration::EmailTaken));
        assert_eq!(second.message(), EMAIL_TAKEN);
        assert_eq!(store.user_count(), 1);
    }

    #[tokio::test]
    async fn email_match_is_case_sensitive() {
        let store = MemoryStore::default();
        register_user(&store, req("Case@farm.io", None)).await.unwrap();
        let other = register_user(&store, req("case@farm.io", None)).await.unwrap();
        assert!(matches!(other, Registration::Created(_)));
        assert_eq!(store.user_count(), 2);
    }

    #[tokio::test]
    async fn password_is_stored_as_submitted() {
        let store = MemoryStore::default();
        register_user(&store, req("plain@farm.io", None)).await.unwrap();
        let stored = store.find_by_email("plain@farm.io").await.unwrap().unwrap();
        assert_eq!(stored.password, "hunter2");
    }
}
