use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::models::{Gender, Profile};

/// Errors that can occur when interacting with the profile store
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Profile {0} already exists")]
    AlreadyExists(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid row data: {0}")]
    InvalidRow(String),
}

/// SQLite-backed profile store
///
/// Owns the connection pool and the profiles schema. The matching engine
/// never touches this directly - handlers fetch a snapshot here and hand
/// it to the matcher.
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Open the database and run pending migrations
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StorageError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Insert a new profile
    ///
    /// `profile_id` is unique; inserting a duplicate fails with
    /// `StorageError::AlreadyExists` rather than a bare driver error.
    pub async fn create_profile(&self, profile: &Profile) -> Result<(), StorageError> {
        let query = r#"
            INSERT INTO profiles (
                profile_id, name, contact_info, email, prefers_ac, room_capacity, gender,
                q1_sleep, q2_tidy, q3_noise, q4_friends_freq, q5_friday_pref,
                q6_overnight_guests, q7_conflict_style, q8_alone_time,
                q9_sports_games, q10_movies_music, self_description,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&profile.profile_id)
            .bind(&profile.name)
            .bind(&profile.contact_info)
            .bind(&profile.email)
            .bind(profile.prefers_ac)
            .bind(profile.room_capacity as i64)
            .bind(profile.gender.as_str())
            .bind(profile.q1_sleep as i64)
            .bind(profile.q2_tidy as i64)
            .bind(profile.q3_noise as i64)
            .bind(profile.q4_friends_freq as i64)
            .bind(profile.q5_friday_pref as i64)
            .bind(profile.q6_overnight_guests as i64)
            .bind(profile.q7_conflict_style as i64)
            .bind(profile.q8_alone_time as i64)
            .bind(profile.q9_sports_games as i64)
            .bind(profile.q10_movies_music as i64)
            .bind(&profile.self_description)
            .bind(profile.created_at)
            .bind(profile.updated_at)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => {
                tracing::debug!("Created profile {}", profile.profile_id);
                Ok(())
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(StorageError::AlreadyExists(profile.profile_id.clone()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Fetch a profile by its stable identifier
    pub async fn get_profile(&self, profile_id: &str) -> Result<Option<Profile>, StorageError> {
        let row = sqlx::query("SELECT * FROM profiles WHERE profile_id = ?")
            .bind(profile_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| profile_from_row(&r)).transpose()
    }

    /// Fetch the full profile pool, newest first
    pub async fn get_all_profiles(&self) -> Result<Vec<Profile>, StorageError> {
        let rows = sqlx::query("SELECT * FROM profiles ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(profile_from_row).collect()
    }

    /// Delete a profile; returns false when the id was unknown
    pub async fn delete_profile(&self, profile_id: &str) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM profiles WHERE profile_id = ?")
            .bind(profile_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Bump a profile's updated_at timestamp
    pub async fn touch_profile(&self, profile_id: &str) -> Result<(), StorageError> {
        sqlx::query("UPDATE profiles SET updated_at = ? WHERE profile_id = ?")
            .bind(chrono::Utc::now())
            .bind(profile_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StorageError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

fn profile_from_row(row: &SqliteRow) -> Result<Profile, StorageError> {
    let gender_text: String = row.get("gender");
    let gender = Gender::from_str(&gender_text).map_err(StorageError::InvalidRow)?;

    Ok(Profile {
        profile_id: row.get("profile_id"),
        name: row.get("name"),
        contact_info: row.get("contact_info"),
        email: row.get("email"),
        prefers_ac: row.get("prefers_ac"),
        room_capacity: row.get::<i64, _>("room_capacity") as u8,
        gender,
        q1_sleep: row.get::<i64, _>("q1_sleep") as u8,
        q2_tidy: row.get::<i64, _>("q2_tidy") as u8,
        q3_noise: row.get::<i64, _>("q3_noise") as u8,
        q4_friends_freq: row.get::<i64, _>("q4_friends_freq") as u8,
        q5_friday_pref: row.get::<i64, _>("q5_friday_pref") as u8,
        q6_overnight_guests: row.get::<i64, _>("q6_overnight_guests") as u8,
        q7_conflict_style: row.get::<i64, _>("q7_conflict_style") as u8,
        q8_alone_time: row.get::<i64, _>("q8_alone_time") as u8,
        q9_sports_games: row.get::<i64, _>("q9_sports_games") as u8,
        q10_movies_music: row.get::<i64, _>("q10_movies_music") as u8,
        self_description: row.get("self_description"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn test_profile(id: &str) -> Profile {
        let now = chrono::Utc::now();
        Profile {
            profile_id: id.to_string(),
            name: format!("Person {}", id),
            contact_info: "555-0000".to_string(),
            email: format!("{}@example.com", id),
            prefers_ac: true,
            room_capacity: 2,
            gender: Gender::Female,
            q1_sleep: 3,
            q2_tidy: 4,
            q3_noise: 2,
            q4_friends_freq: 3,
            q5_friday_pref: 2,
            q6_overnight_guests: 1,
            q7_conflict_style: 4,
            q8_alone_time: 3,
            q9_sports_games: 5,
            q10_movies_music: 4,
            self_description: Some("early riser".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    async fn in_memory_storage() -> SqliteStorage {
        // A single connection keeps every query on the same in-memory database
        SqliteStorage::connect("sqlite::memory:", 1)
            .await
            .expect("in-memory database should open")
    }

    #[tokio::test]
    async fn create_and_fetch_round_trip() {
        let storage = in_memory_storage().await;
        let profile = test_profile("S1");

        storage.create_profile(&profile).await.unwrap();
        let fetched = storage.get_profile("S1").await.unwrap().unwrap();

        assert_eq!(fetched.name, profile.name);
        assert_eq!(fetched.gender, Gender::Female);
        assert_eq!(fetched.q9_sports_games, 5);
        assert_eq!(fetched.self_description.as_deref(), Some("early riser"));
    }

    #[tokio::test]
    async fn duplicate_profile_id_is_rejected() {
        let storage = in_memory_storage().await;

        storage.create_profile(&test_profile("S1")).await.unwrap();
        let err = storage.create_profile(&test_profile("S1")).await.unwrap_err();

        assert!(matches!(err, StorageError::AlreadyExists(id) if id == "S1"));
    }

    #[tokio::test]
    async fn missing_profile_is_none() {
        let storage = in_memory_storage().await;
        assert!(storage.get_profile("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let storage = in_memory_storage().await;
        storage.create_profile(&test_profile("S1")).await.unwrap();

        assert!(storage.delete_profile("S1").await.unwrap());
        assert!(!storage.delete_profile("S1").await.unwrap());
        assert!(storage.get_profile("S1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn lists_all_profiles() {
        let storage = in_memory_storage().await;
        storage.create_profile(&test_profile("S1")).await.unwrap();
        storage.create_profile(&test_profile("S2")).await.unwrap();

        let all = storage.get_all_profiles().await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
