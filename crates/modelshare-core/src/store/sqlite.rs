//! SQLite-backed data service.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

use super::DataService;
use crate::error::{ModelShareError, Result};
use crate::models::{
    Image, Model, ModelFile, ModelId, ModelRank, ModelType, ModelVersion, NewModel,
    NewModelVersion, NewReview, NewUser, Post, Review, ReviewFilter, ReviewQuery, ReviewSort, Tag,
    User, UserId, UserQuery, UserSummary, UserUpdate, VersionId,
};

/// Local data service over a single SQLite database.
///
/// Thread-safe via internal mutex on the connection. Versions are returned
/// in creation order (ascending id).
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
    db_path: Option<PathBuf>,
}

impl SqliteStore {
    /// Open (or create) the database at `db_path`.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref();

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| ModelShareError::io_with_path(e, parent))?;
            }
        }

        let conn = Connection::open(db_path).map_err(|e| ModelShareError::Database {
            message: format!("Failed to open database {}: {}", db_path.display(), e),
            source: Some(e),
        })?;

        let store = Self::from_connection(conn, Some(db_path.to_path_buf()))?;
        info!("Opened ModelShare database at {}", db_path.display());
        Ok(store)
    }

    /// Create a throwaway in-memory database.
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?, None)
    }

    fn from_connection(conn: Connection, db_path: Option<PathBuf>) -> Result<Self> {
        Self::configure_connection(&conn)?;
        Self::ensure_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            db_path,
        })
    }

    /// Path of the backing file, `None` for in-memory stores.
    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    fn configure_connection(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "
            PRAGMA journal_mode=WAL;
            PRAGMA busy_timeout=30000;
            PRAGMA synchronous=NORMAL;
            PRAGMA foreign_keys=ON;
            ",
        )
        .map_err(|e| ModelShareError::Database {
            message: format!("Failed to set pragmas: {}", e),
            source: Some(e),
        })
    }

    fn ensure_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                username TEXT UNIQUE,
                email TEXT UNIQUE,
                image TEXT,
                show_nsfw INTEGER NOT NULL DEFAULT 0,
                blur_nsfw INTEGER NOT NULL DEFAULT 1
            );

            CREATE TABLE IF NOT EXISTS models (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT,
                model_type TEXT NOT NULL,
                trained_words_json TEXT NOT NULL DEFAULT '[]',
                user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                download_count INTEGER NOT NULL DEFAULT 0,
                updated_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS tags (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                color TEXT
            );

            CREATE TABLE IF NOT EXISTS model_tags (
                model_id INTEGER NOT NULL REFERENCES models(id) ON DELETE CASCADE,
                tag_id INTEGER NOT NULL REFERENCES tags(id) ON DELETE CASCADE,
                PRIMARY KEY (model_id, tag_id)
            );

            CREATE TABLE IF NOT EXISTS model_versions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                model_id INTEGER NOT NULL REFERENCES models(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                size_kb REAL NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_versions_model ON model_versions(model_id);

            CREATE TABLE IF NOT EXISTS model_files (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                version_id INTEGER NOT NULL REFERENCES model_versions(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                url TEXT NOT NULL,
                size_kb REAL NOT NULL DEFAULT 0
            );

            CREATE TABLE IF NOT EXISTS posts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                version_id INTEGER NOT NULL REFERENCES model_versions(id) ON DELETE CASCADE,
                title TEXT
            );

            CREATE TABLE IF NOT EXISTS images (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                version_id INTEGER NOT NULL REFERENCES model_versions(id) ON DELETE CASCADE,
                name TEXT,
                url TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS reviews (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                model_id INTEGER NOT NULL REFERENCES models(id) ON DELETE CASCADE,
                model_version_id INTEGER REFERENCES model_versions(id) ON DELETE SET NULL,
                user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                rating INTEGER NOT NULL,
                text TEXT,
                nsfw INTEGER NOT NULL DEFAULT 0,
                image_count INTEGER NOT NULL DEFAULT 0,
                like_count INTEGER NOT NULL DEFAULT 0,
                dislike_count INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_reviews_model ON reviews(model_id);
            "#,
        )
        .map_err(|e| ModelShareError::Database {
            message: format!("Failed to initialize schema: {}", e),
            source: Some(e),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| ModelShareError::Database {
            message: "Failed to acquire connection lock".to_string(),
            source: None,
        })
    }

    // ========================================
    // Seeding
    // ========================================

    pub fn insert_user(&self, user: &NewUser) -> Result<User> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO users (name, username, email, image) VALUES (?1, ?2, ?3, ?4)",
            params![user.name, user.username, user.email, user.image],
        )
        .map_err(|e| constraint_to_validation(e, "user"))?;
        let id = conn.last_insert_rowid();
        fetch_user(&conn, id)
    }

    pub fn insert_model(&self, model: &NewModel) -> Result<ModelId> {
        let mut conn = self.lock()?;
        fetch_user(&conn, model.user_id)?;

        let trained_words = serde_json::to_string(&model.trained_words)?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO models (name, description, model_type, trained_words_json, user_id, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                model.name,
                model.description,
                model.model_type.as_str(),
                trained_words,
                model.user_id,
                timestamp(Utc::now()),
            ],
        )?;
        let model_id = tx.last_insert_rowid();

        for tag in &model.tags {
            tx.execute(
                "INSERT OR IGNORE INTO tags (name, color) VALUES (?1, ?2)",
                params![tag.name, tag.color],
            )?;
            tx.execute(
                "INSERT OR IGNORE INTO model_tags (model_id, tag_id)
                 SELECT ?1, id FROM tags WHERE name = ?2",
                params![model_id, tag.name],
            )?;
        }
        tx.commit()?;

        debug!("Inserted model {} ({})", model_id, model.name);
        Ok(model_id)
    }

    /// Insert a version with its files, posts and images.
    pub fn insert_model_version(
        &self,
        model_id: ModelId,
        version: &NewModelVersion,
    ) -> Result<ModelVersion> {
        let mut conn = self.lock()?;
        let exists: Option<i64> = conn
            .query_row("SELECT id FROM models WHERE id = ?1", params![model_id], |row| {
                row.get(0)
            })
            .optional()?;
        if exists.is_none() {
            return Err(ModelShareError::not_found("model", model_id));
        }

        let now = timestamp(Utc::now());
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO model_versions (model_id, name, size_kb, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![model_id, version.name, version.size_kb, now],
        )?;
        let version_id = tx.last_insert_rowid();

        for file in &version.files {
            tx.execute(
                "INSERT INTO model_files (version_id, name, url, size_kb) VALUES (?1, ?2, ?3, ?4)",
                params![version_id, file.name, file.url, file.size_kb],
            )?;
        }
        for title in &version.posts {
            tx.execute(
                "INSERT INTO posts (version_id, title) VALUES (?1, ?2)",
                params![version_id, title],
            )?;
        }
        for image in &version.images {
            tx.execute(
                "INSERT INTO images (version_id, name, url) VALUES (?1, ?2, ?3)",
                params![version_id, image.name, image.url],
            )?;
        }
        tx.execute(
            "UPDATE models SET updated_at = ?2 WHERE id = ?1",
            params![model_id, now],
        )?;
        tx.commit()?;

        debug!("Inserted version {} for model {}", version_id, model_id);
        let versions = fetch_versions(&conn, model_id)?;
        versions
            .into_iter()
            .find(|v| v.id == version_id)
            .ok_or_else(|| ModelShareError::not_found("model version", version_id))
    }

    pub fn insert_review(&self, review: &NewReview) -> Result<Review> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO reviews (model_id, model_version_id, user_id, rating, text, nsfw,
                                  image_count, like_count, dislike_count, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                review.model_id,
                review.model_version_id,
                review.user_id,
                review.rating,
                review.text,
                review.nsfw,
                review.image_count,
                review.like_count,
                review.dislike_count,
                timestamp(Utc::now()),
            ],
        )
        .map_err(|e| constraint_to_validation(e, "review"))?;
        let id = conn.last_insert_rowid();
        conn.query_row(
            &format!("SELECT {} FROM reviews WHERE id = ?1", REVIEW_COLUMNS),
            params![id],
            row_to_review,
        )
        .map_err(Into::into)
    }

    /// Count one download of a model.
    pub fn record_download(&self, model_id: ModelId) -> Result<()> {
        let conn = self.lock()?;
        let changed = conn.execute(
            "UPDATE models SET download_count = download_count + 1 WHERE id = ?1",
            params![model_id],
        )?;
        if changed == 0 {
            return Err(ModelShareError::not_found("model", model_id));
        }
        Ok(())
    }
}

#[async_trait]
impl DataService for SqliteStore {
    async fn get_model_by_id(&self, id: ModelId) -> Result<Model> {
        let conn = self.lock()?;
        fetch_model(&conn, id)
    }

    async fn delete_model(&self, id: ModelId) -> Result<ModelId> {
        let conn = self.lock()?;
        let changed = conn.execute("DELETE FROM models WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(ModelShareError::not_found("model", id));
        }
        info!("Deleted model {}", id);
        Ok(id)
    }

    async fn delete_model_version(&self, id: VersionId) -> Result<VersionId> {
        let mut conn = self.lock()?;
        let model_id: Option<ModelId> = conn
            .query_row(
                "SELECT model_id FROM model_versions WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .optional()?;
        let Some(model_id) = model_id else {
            return Err(ModelShareError::not_found("model version", id));
        };

        let tx = conn.transaction()?;
        tx.execute("DELETE FROM model_versions WHERE id = ?1", params![id])?;
        tx.execute(
            "UPDATE models SET updated_at = ?2 WHERE id = ?1",
            params![model_id, timestamp(Utc::now())],
        )?;
        tx.commit()?;

        info!("Deleted version {} of model {}", id, model_id);
        Ok(id)
    }

    async fn list_reviews(&self, query: &ReviewQuery) -> Result<Vec<Review>> {
        let conn = self.lock()?;

        let mut sql = format!("SELECT {} FROM reviews WHERE model_id = ?1", REVIEW_COLUMNS);
        if !query.has_filter(ReviewFilter::Nsfw) {
            sql.push_str(" AND nsfw = 0");
        }
        if query.has_filter(ReviewFilter::IncludesImages) {
            sql.push_str(" AND image_count > 0");
        }
        sql.push_str(match query.sort {
            ReviewSort::Newest => " ORDER BY created_at DESC, id DESC",
            ReviewSort::MostLiked => " ORDER BY like_count DESC, id DESC",
            ReviewSort::MostDisliked => " ORDER BY dislike_count DESC, id DESC",
        });

        let mut stmt = conn.prepare(&sql)?;
        let reviews = stmt
            .query_map(params![query.model_id], row_to_review)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(reviews)
    }

    async fn list_users(&self, query: &UserQuery) -> Result<Vec<UserSummary>> {
        let conn = self.lock()?;

        let mut where_clause = String::from("WHERE 1=1");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
        if let Some(email) = &query.email {
            where_clause.push_str(" AND email = ?");
            params_vec.push(Box::new(email.clone()));
        }

        // Name matching folds case in Rust: SQLite's lower() is ASCII-only.
        let needle = query
            .query
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        let mut sql = format!(
            "SELECT id, name, username, email, image FROM users {} ORDER BY id",
            where_clause
        );
        if let (Some(limit), None) = (query.limit, &needle) {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        let mut stmt = conn.prepare(&sql)?;
        let params_refs: Vec<&dyn rusqlite::ToSql> =
            params_vec.iter().map(|p| p.as_ref()).collect();
        let users = stmt
            .query_map(params_refs.as_slice(), row_to_summary)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let Some(needle) = needle else {
            return Ok(users);
        };
        let limit = query.limit.map_or(usize::MAX, |l| l as usize);
        Ok(users
            .into_iter()
            .filter(|user| {
                user.name
                    .as_deref()
                    .is_some_and(|name| name.to_lowercase().contains(&needle))
            })
            .take(limit)
            .collect())
    }

    async fn get_user_by_id(&self, id: UserId) -> Result<User> {
        let conn = self.lock()?;
        fetch_user(&conn, id)
    }

    async fn update_user(&self, update: &UserUpdate) -> Result<User> {
        let conn = self.lock()?;
        let changed = conn
            .execute(
                "UPDATE users SET
                    username = COALESCE(?2, username),
                    show_nsfw = COALESCE(?3, show_nsfw),
                    blur_nsfw = COALESCE(?4, blur_nsfw)
                 WHERE id = ?1",
                params![update.id, update.username, update.show_nsfw, update.blur_nsfw],
            )
            .map_err(|e| constraint_to_validation(e, "username"))?;
        if changed == 0 {
            return Err(ModelShareError::not_found("user", update.id));
        }
        fetch_user(&conn, update.id)
    }

    async fn delete_user(&self, id: UserId) -> Result<User> {
        let conn = self.lock()?;
        let user = fetch_user(&conn, id)?;
        conn.execute("DELETE FROM users WHERE id = ?1", params![id])?;
        info!("Deleted user {}", id);
        Ok(user)
    }
}

const REVIEW_COLUMNS: &str = "id, model_id, model_version_id, user_id, rating, text, nsfw, \
                              image_count, like_count, dislike_count, created_at";

/// Fixed-width RFC 3339 so text ordering matches time ordering.
fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored timestamp; `column` locates the bad value in the error.
fn parse_timestamp(column: usize, value: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}

fn constraint_to_validation(err: rusqlite::Error, field: &str) -> ModelShareError {
    if let rusqlite::Error::SqliteFailure(failure, message) = &err {
        if failure.code == rusqlite::ErrorCode::ConstraintViolation {
            return ModelShareError::Validation {
                field: field.to_string(),
                message: message
                    .clone()
                    .unwrap_or_else(|| "constraint violation".to_string()),
            };
        }
    }
    err.into()
}

fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        username: row.get(2)?,
        email: row.get(3)?,
        image: row.get(4)?,
        show_nsfw: row.get(5)?,
        blur_nsfw: row.get(6)?,
    })
}

fn row_to_summary(row: &Row) -> rusqlite::Result<UserSummary> {
    Ok(UserSummary {
        id: row.get(0)?,
        name: row.get(1)?,
        username: row.get(2)?,
        email: row.get(3)?,
        image: row.get(4)?,
    })
}

fn row_to_review(row: &Row) -> rusqlite::Result<Review> {
    let created_at: String = row.get(10)?;
    Ok(Review {
        id: row.get(0)?,
        model_id: row.get(1)?,
        model_version_id: row.get(2)?,
        user_id: row.get(3)?,
        rating: row.get(4)?,
        text: row.get(5)?,
        nsfw: row.get(6)?,
        image_count: row.get(7)?,
        like_count: row.get(8)?,
        dislike_count: row.get(9)?,
        created_at: parse_timestamp(10, &created_at)?,
    })
}

fn fetch_user(conn: &Connection, id: UserId) -> Result<User> {
    conn.query_row(
        "SELECT id, name, username, email, image, show_nsfw, blur_nsfw FROM users WHERE id = ?1",
        params![id],
        row_to_user,
    )
    .optional()?
    .ok_or_else(|| ModelShareError::not_found("user", id))
}

fn fetch_model(conn: &Connection, id: ModelId) -> Result<Model> {
    let row = conn
        .query_row(
            "SELECT id, name, description, model_type, trained_words_json, user_id,
                    download_count, updated_at
             FROM models WHERE id = ?1",
            params![id],
            |row| {
                Ok((
                    row.get::<_, ModelId>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, UserId>(5)?,
                    row.get::<_, i64>(6)?,
                    row.get::<_, String>(7)?,
                ))
            },
        )
        .optional()?;

    let Some((id, name, description, model_type, trained_words_json, user_id, downloads, updated_at)) =
        row
    else {
        return Err(ModelShareError::not_found("model", id));
    };

    let model_type = model_type
        .parse::<ModelType>()
        .map_err(|e| ModelShareError::Database {
            message: format!("{} (model {})", e, id),
            source: None,
        })?;
    let trained_words: Vec<String> = serde_json::from_str(&trained_words_json)?;
    let user = UserSummary::from(&fetch_user(conn, user_id)?);

    let mut stmt = conn.prepare(
        "SELECT t.id, t.name, t.color FROM tags t
         JOIN model_tags mt ON mt.tag_id = t.id
         WHERE mt.model_id = ?1 ORDER BY t.name",
    )?;
    let tags = stmt
        .query_map(params![id], |row| {
            Ok(Tag {
                id: row.get(0)?,
                name: row.get(1)?,
                color: row.get(2)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let (rating, rating_count): (Option<f64>, i64) = conn.query_row(
        "SELECT AVG(rating), COUNT(*) FROM reviews WHERE model_id = ?1",
        params![id],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    Ok(Model {
        id,
        name,
        description,
        model_type,
        trained_words,
        updated_at: parse_timestamp(7, &updated_at)?,
        user,
        tags,
        rank: Some(ModelRank {
            download_count_all_time: downloads.max(0) as u64,
            rating_all_time: rating.unwrap_or(0.0),
            rating_count_all_time: rating_count.max(0) as u64,
        }),
        model_versions: fetch_versions(conn, id)?,
    })
}

fn fetch_versions(conn: &Connection, model_id: ModelId) -> Result<Vec<ModelVersion>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, size_kb, created_at FROM model_versions
         WHERE model_id = ?1 ORDER BY id",
    )?;
    let rows = stmt
        .query_map(params![model_id], |row| {
            Ok((
                row.get::<_, VersionId>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, f64>(2)?,
                row.get::<_, String>(3)?,
            ))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut files_stmt =
        conn.prepare("SELECT id, name, url, size_kb FROM model_files WHERE version_id = ?1 ORDER BY id")?;
    let mut posts_stmt = conn.prepare("SELECT id, title FROM posts WHERE version_id = ?1 ORDER BY id")?;
    let mut images_stmt =
        conn.prepare("SELECT id, name, url FROM images WHERE version_id = ?1 ORDER BY id")?;

    let mut versions = Vec::with_capacity(rows.len());
    for (id, name, size_kb, created_at) in rows {
        let files = files_stmt
            .query_map(params![id], |row| {
                Ok(ModelFile {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    url: row.get(2)?,
                    size_kb: row.get(3)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        let posts = posts_stmt
            .query_map(params![id], |row| {
                Ok(Post {
                    id: row.get(0)?,
                    title: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        let images = images_stmt
            .query_map(params![id], |row| {
                Ok(Image {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    url: row.get(2)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        versions.push(ModelVersion {
            id,
            model_id,
            name,
            files,
            posts,
            images,
            size_kb,
            created_at: parse_timestamp(3, &created_at)?,
        });
    }
    Ok(versions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::models::{NewModelFile, NewTag};
    use tempfile::TempDir;

    fn seeded() -> (SqliteStore, User, ModelId) {
        let store = SqliteStore::in_memory().unwrap();
        let user = store
            .insert_user(&NewUser {
                name: Some("Ada Lovelace".into()),
                username: Some("ada".into()),
                email: Some("ada@example.com".into()),
                image: None,
            })
            .unwrap();
        let model_id = store
            .insert_model(&NewModel {
                name: "Analytical".into(),
                description: Some("A test model".into()),
                model_type: ModelType::TextualInversion,
                trained_words: vec!["engine".into()],
                user_id: user.id,
                tags: vec![NewTag {
                    name: "anime".into(),
                    color: None,
                }],
            })
            .unwrap();
        (store, user, model_id)
    }

    fn complete_version(name: &str) -> NewModelVersion {
        NewModelVersion {
            name: name.into(),
            size_kb: 2048.0,
            files: vec![NewModelFile {
                name: format!("{name}.safetensors"),
                url: format!("https://files.example/{name}"),
                size_kb: 2048.0,
            }],
            posts: vec![Some("Showcase".into())],
            images: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_versions_in_creation_order() {
        let (store, user, model_id) = seeded();
        let v1 = store
            .insert_model_version(model_id, &NewModelVersion {
                name: "v1".into(),
                ..Default::default()
            })
            .unwrap();
        let v2 = store.insert_model_version(model_id, &complete_version("v2")).unwrap();

        let model = store.get_model_by_id(model_id).await.unwrap();
        let ids: Vec<_> = model.model_versions.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![v1.id, v2.id]);
        assert!(model.model_versions[0].files.is_empty());
        assert_eq!(model.model_versions[1].files.len(), 1);
        assert_eq!(model.model_versions[1].posts.len(), 1);
        assert_eq!(model.user.id, user.id);
        assert_eq!(model.tags[0].name, "anime");
        assert_eq!(model.trained_words, vec!["engine".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_model_is_not_found() {
        let store = SqliteStore::in_memory().unwrap();
        let err = store.get_model_by_id(99).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_corrupt_model_row_is_internal_error() {
        let (store, _, model_id) = seeded();
        store
            .lock()
            .unwrap()
            .execute(
                "UPDATE models SET trained_words_json = '{bad' WHERE id = ?1",
                params![model_id],
            )
            .unwrap();
        let err = store.get_model_by_id(model_id).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::InternalServerError);

        store
            .lock()
            .unwrap()
            .execute(
                "UPDATE models SET trained_words_json = '[]', updated_at = 'garbage' WHERE id = ?1",
                params![model_id],
            )
            .unwrap();
        let err = store.get_model_by_id(model_id).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::InternalServerError);
    }

    #[tokio::test]
    async fn test_corrupt_review_timestamp_is_internal_error() {
        let (store, user, model_id) = seeded();
        store
            .insert_review(&NewReview {
                model_id,
                model_version_id: None,
                user_id: user.id,
                rating: 4,
                text: None,
                nsfw: false,
                image_count: 0,
                like_count: 0,
                dislike_count: 0,
            })
            .unwrap();
        store
            .lock()
            .unwrap()
            .execute("UPDATE reviews SET created_at = 'yesterday'", [])
            .unwrap();

        let err = store
            .list_reviews(&ReviewQuery::new(model_id))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InternalServerError);
    }

    #[test]
    fn test_insert_model_owner_lookup_errors() {
        let store = SqliteStore::in_memory().unwrap();
        let new_model = |user_id| NewModel {
            name: "Orphan".into(),
            description: None,
            model_type: ModelType::Checkpoint,
            trained_words: Vec::new(),
            user_id,
            tags: Vec::new(),
        };

        let err = store.insert_model(&new_model(42)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFound);

        // A broken owner row surfaces as a storage failure, not a missing user.
        let user = store.insert_user(&NewUser::default()).unwrap();
        store
            .lock()
            .unwrap()
            .execute(
                "UPDATE users SET show_nsfw = 'sometimes' WHERE id = ?1",
                params![user.id],
            )
            .unwrap();
        let err = store.insert_model(&new_model(user.id)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InternalServerError);
    }

    #[tokio::test]
    async fn test_delete_version_cascades() {
        let (store, _, model_id) = seeded();
        let v1 = store.insert_model_version(model_id, &complete_version("v1")).unwrap();
        let v2 = store.insert_model_version(model_id, &complete_version("v2")).unwrap();

        assert_eq!(store.delete_model_version(v1.id).await.unwrap(), v1.id);
        let model = store.get_model_by_id(model_id).await.unwrap();
        assert_eq!(model.model_versions.len(), 1);
        assert_eq!(model.model_versions[0].id, v2.id);

        let err = store.delete_model_version(v1.id).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_delete_model() {
        let (store, _, model_id) = seeded();
        store.insert_model_version(model_id, &complete_version("v1")).unwrap();
        assert_eq!(store.delete_model(model_id).await.unwrap(), model_id);
        assert!(store.get_model_by_id(model_id).await.is_err());
        assert!(store.delete_model(model_id).await.is_err());
    }

    #[tokio::test]
    async fn test_review_filters_and_sort() {
        let (store, user, model_id) = seeded();
        let review = |nsfw: bool, images: u32, likes: u32| NewReview {
            model_id,
            model_version_id: None,
            user_id: user.id,
            rating: 5,
            text: None,
            nsfw,
            image_count: images,
            like_count: likes,
            dislike_count: 0,
        };
        let plain = store.insert_review(&review(false, 0, 1)).unwrap();
        let with_images = store.insert_review(&review(false, 2, 7)).unwrap();
        let nsfw = store.insert_review(&review(true, 1, 3)).unwrap();

        let default = store.list_reviews(&ReviewQuery::new(model_id)).await.unwrap();
        let ids: Vec<_> = default.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![with_images.id, plain.id]);

        let mut query = ReviewQuery::new(model_id);
        query.filter_by = vec![ReviewFilter::Nsfw, ReviewFilter::IncludesImages];
        query.sort = ReviewSort::MostLiked;
        let ids: Vec<_> = store
            .list_reviews(&query)
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![with_images.id, nsfw.id]);
    }

    #[tokio::test]
    async fn test_rank_aggregates_reviews() {
        let (store, user, model_id) = seeded();
        for rating in [4, 5] {
            store
                .insert_review(&NewReview {
                    model_id,
                    model_version_id: None,
                    user_id: user.id,
                    rating,
                    text: None,
                    nsfw: false,
                    image_count: 0,
                    like_count: 0,
                    dislike_count: 0,
                })
                .unwrap();
        }
        store.record_download(model_id).unwrap();

        let rank = store.get_model_by_id(model_id).await.unwrap().rank.unwrap();
        assert_eq!(rank.rating_count_all_time, 2);
        assert_eq!(rank.rating_all_time, 4.5);
        assert_eq!(rank.download_count_all_time, 1);
    }

    #[tokio::test]
    async fn test_user_queries() {
        let (store, ada, _) = seeded();
        store
            .insert_user(&NewUser {
                name: Some("Charles Babbage".into()),
                username: Some("charles".into()),
                email: Some("charles@example.com".into()),
                image: None,
            })
            .unwrap();

        let all = store.list_users(&UserQuery::default()).await.unwrap();
        assert_eq!(all.len(), 2);

        let by_name = store
            .list_users(&UserQuery {
                query: Some("LOVE".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, ada.id);

        let by_email = store
            .list_users(&UserQuery {
                email: Some("charles@example.com".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_email[0].username.as_deref(), Some("charles"));

        let limited = store
            .list_users(&UserQuery {
                limit: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(limited.len(), 1);
    }

    #[tokio::test]
    async fn test_user_name_search_folds_unicode_case() {
        let (store, _, _) = seeded();
        let emile = store
            .insert_user(&NewUser {
                name: Some("ÉMILE Zola".into()),
                username: Some("zola".into()),
                ..Default::default()
            })
            .unwrap();
        store
            .insert_user(&NewUser {
                name: Some("Émile Durkheim".into()),
                username: Some("durkheim".into()),
                ..Default::default()
            })
            .unwrap();

        let found = store
            .list_users(&UserQuery {
                query: Some("émile".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, emile.id);

        let limited = store
            .list_users(&UserQuery {
                query: Some("ÉMILE".into()),
                limit: Some(1),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].id, emile.id);
    }

    #[tokio::test]
    async fn test_update_and_delete_user() {
        let (store, ada, _) = seeded();
        let updated = store
            .update_user(&UserUpdate {
                id: ada.id,
                show_nsfw: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(updated.show_nsfw);
        assert!(updated.blur_nsfw);
        assert_eq!(updated.username.as_deref(), Some("ada"));

        let err = store
            .update_user(&UserUpdate {
                id: 404,
                username: Some("ghost".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFound);

        let deleted = store.delete_user(ada.id).await.unwrap();
        assert_eq!(deleted.id, ada.id);
        assert!(store.get_user_by_id(ada.id).await.is_err());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_validation_error() {
        let (store, _, _) = seeded();
        let other = store
            .insert_user(&NewUser {
                username: Some("grace".into()),
                ..Default::default()
            })
            .unwrap();
        let err = store
            .update_user(&UserUpdate {
                id: other.id,
                username: Some("ada".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::BadRequest);
    }

    #[tokio::test]
    async fn test_file_database_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("modelshare.sqlite");
        let model_id = {
            let store = SqliteStore::open(&path).unwrap();
            let user = store.insert_user(&NewUser::default()).unwrap();
            store
                .insert_model(&NewModel {
                    name: "Persisted".into(),
                    description: None,
                    model_type: ModelType::Checkpoint,
                    trained_words: Vec::new(),
                    user_id: user.id,
                    tags: Vec::new(),
                })
                .unwrap()
        };

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.db_path(), Some(path.as_path()));
        let model = store.get_model_by_id(model_id).await.unwrap();
        assert_eq!(model.name, "Persisted");
    }
}
