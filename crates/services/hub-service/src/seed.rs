//! Development seed data.
//!
//! Wipes the users table and loads three known accounts so the user listing
//! has something to show on a fresh database.

use common::AppResult;
use domain::{NewUser, Password, User, UserRole};

use crate::repository::UserRepository;

/// (name, email, plain password, role)
pub const SEED_USERS: &[(&str, &str, &str, UserRole)] = &[
    ("Alice", "alice@example.com", "alicepass123", UserRole::Admin),
    ("Bob", "bob@example.com", "bobpass456", UserRole::Guest),
    ("Charlie", "charlie@example.com", "charliepass789", UserRole::Guest),
];

/// Replace all users with the seed accounts.
pub async fn seed_users(repo: &dyn UserRepository) -> AppResult<Vec<User>> {
    let result = load(repo).await;
    if let Err(e) = &result {
        tracing::error!("Error seeding database: {}", e);
    }
    result
}

async fn load(repo: &dyn UserRepository) -> AppResult<Vec<User>> {
    repo.delete_all().await?;
    tracing::info!("Existing data cleared.");

    let mut users = Vec::with_capacity(SEED_USERS.len());
    for &(name, email, plain, role) in SEED_USERS {
        let password = Password::new(plain)?;
        let user = repo
            .create(NewUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash: password.into_string(),
                role,
            })
            .await?;
        users.push(user);
    }

    tracing::info!("Created {} users successfully.", users.len());
    Ok(users)
}
