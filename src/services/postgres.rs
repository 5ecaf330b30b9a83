use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;
use uuid::Uuid;

use crate::models::{Biography, CoatType, DogRecord, Gender, RawTemperament, TemperamentTrait};
use crate::services::store::{DogStore, StoreError};

/// PostgreSQL-backed dog store
///
/// Reads dogs, owners, colours, biographies and temperament ratings and
/// assembles them into `DogRecord`s for the matching engine.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }
}

#[async_trait]
impl DogStore for PostgresClient {
    async fn get_dog(&self, dog_id: Uuid, owner_id: Uuid) -> Result<Option<DogRecord>, StoreError> {
        let query = format!(
            "{} WHERE d.id = $1 AND d.owner_id = $2 AND d.is_deleted = FALSE",
            select_dogs_sql()
        );

        let row = sqlx::query(&query)
            .bind(dog_id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(dog_from_row).transpose()
    }

    async fn get_candidate_pool(&self, exclude_dog_id: Uuid) -> Result<Vec<DogRecord>, StoreError> {
        let query = format!(
            "{} WHERE d.id <> $1 AND {}",
            select_dogs_sql(),
            candidate_filter_sql()
        );

        let rows = sqlx::query(&query)
            .bind(exclude_dog_id)
            .fetch_all(&self.pool)
            .await?;

        let dogs = rows.iter().map(dog_from_row).collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Loaded {} candidates excluding dog {}", dogs.len(), exclude_dog_id);

        Ok(dogs)
    }

    /// Health check for the database connection
    async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

/// Base SELECT joining everything a `DogRecord` needs
fn select_dogs_sql() -> String {
    let rating_columns = TemperamentTrait::ALL
        .iter()
        .map(|t| format!("t.{}", t.column()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"
        SELECT
            d.id, d.name, d.owner_id, o.name AS owner_name,
            d.breed, d.weight_lbs, d.gender, d.birthday, d.profile_image,
            ARRAY(SELECT c.color FROM dog_colors c WHERE c.dog_id = d.id ORDER BY c.color) AS colors,
            b.about,
            t.dog_id IS NOT NULL AS has_temperament,
            {rating_columns},
            t.hair_or_fur, t.housebroken
        FROM dogs d
        JOIN owners o ON o.id = d.owner_id
        LEFT JOIN biographies b ON b.dog_id = d.id
        LEFT JOIN temperaments t ON t.dog_id = d.id
        "#
    )
}

/// The completed-profile precondition for the candidate pool
fn candidate_filter_sql() -> String {
    let mut conditions = vec![
        "d.is_deleted = FALSE".to_string(),
        "btrim(COALESCE(d.breed, '')) <> ''".to_string(),
        "d.birthday IS NOT NULL".to_string(),
        "btrim(COALESCE(d.profile_image, '')) <> ''".to_string(),
        "d.weight_lbs > 0".to_string(),
        "d.gender IS NOT NULL".to_string(),
        "EXISTS (SELECT 1 FROM dog_colors c WHERE c.dog_id = d.id AND btrim(c.color) <> '')".to_string(),
        "btrim(COALESCE(b.about, '')) <> ''".to_string(),
    ];

    conditions.extend(
        TemperamentTrait::ALL
            .iter()
            .map(|t| format!("t.{} BETWEEN 1 AND 10", t.column())),
    );

    conditions.join(" AND ")
}

fn dog_from_row(row: &PgRow) -> Result<DogRecord, StoreError> {
    let gender = row
        .try_get::<Option<String>, _>("gender")?
        .map(|g| g.parse::<Gender>())
        .transpose()
        .map_err(StoreError::InvalidRow)?;

    let temperament = if row.try_get::<bool, _>("has_temperament")? {
        Some(temperament_from_row(row)?)
    } else {
        None
    };

    Ok(DogRecord {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        owner_id: row.try_get("owner_id")?,
        owner_name: row.try_get("owner_name")?,
        breed: row.try_get("breed")?,
        weight_lbs: row.try_get("weight_lbs")?,
        gender,
        birthday: row.try_get("birthday")?,
        profile_image: row.try_get("profile_image")?,
        colors: row.try_get("colors")?,
        biography: Some(Biography {
            about: row.try_get("about")?,
        }),
        temperament,
    })
}

fn temperament_from_row(row: &PgRow) -> Result<RawTemperament, StoreError> {
    let mut temperament = RawTemperament::default();

    for t in TemperamentTrait::ALL {
        let value: Option<i16> = row.try_get(t.column())?;
        // Out-of-range values are treated as unrated
        temperament.set_rating(t, value.and_then(|v| u8::try_from(v).ok()));
    }

    temperament.hair_or_fur = match row.try_get::<Option<String>, _>("hair_or_fur")?.as_deref() {
        Some("hair") => Some(CoatType::Hair),
        Some("fur") => Some(CoatType::Fur),
        Some(other) => return Err(StoreError::InvalidRow(format!("unknown coat type: {}", other))),
        None => None,
    };
    temperament.housebroken = row.try_get("housebroken")?;

    Ok(temperament)
}
