//! Beer Repository Implementation
//!
//! MySQL implementation of the BeerRepository trait.

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::domain::{Beer, BeerRepository};
use crate::shared::error::AppError;

const LIST_ERROR: &str = "error trying to get beers from database";
const GET_ERROR: &str = "error trying to get beer from database";
const SAVE_ERROR: &str = "error trying to save beer in database";

/// Database row representation matching the beer table schema.
///
/// `name`, `brewery` and `price` are nullable columns; a NULL fails to decode
/// and surfaces as a read error.
#[derive(Debug, sqlx::FromRow)]
struct BeerRow {
    id: i64,
    name: String,
    brewery: String,
    country: String,
    price: f64,
    currency: String,
}

impl BeerRow {
    /// Convert database row to domain Beer entity.
    fn into_beer(self) -> Beer {
        Beer {
            id: self.id,
            name: self.name,
            brewery: self.brewery,
            country: self.country,
            price: self.price,
            currency: self.currency,
        }
    }
}

/// MySQL beer repository implementation.
#[derive(Clone)]
pub struct MySqlBeerRepository {
    pool: MySqlPool,
}

impl MySqlBeerRepository {
    /// Create a new MySqlBeerRepository with the given connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BeerRepository for MySqlBeerRepository {
    async fn list(&self) -> Result<Vec<Beer>, AppError> {
        let rows = sqlx::query_as::<_, BeerRow>(
            r#"
            SELECT id, name, brewery, country, price, currency
            FROM beer
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_read_error(LIST_ERROR, e))?;

        Ok(rows.into_iter().map(BeerRow::into_beer).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Beer, AppError> {
        let row = sqlx::query_as::<_, BeerRow>(
            r#"
            SELECT id, name, brewery, country, price, currency
            FROM beer
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_read_error(GET_ERROR, e))?;

        found_or_not_found(row)
    }

    async fn save(&self, beer: &Beer) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO beer (id, name, brewery, country, price, currency)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(beer.id)
        .bind(&beer.name)
        .bind(&beer.brewery)
        .bind(&beer.country)
        .bind(beer.price)
        .bind(&beer.currency)
        .execute(&self.pool)
        .await
        .map_err(|e| map_save_error(beer.id, e))?;

        Ok(())
    }
}

fn found_or_not_found(row: Option<BeerRow>) -> Result<Beer, AppError> {
    row.map(BeerRow::into_beer)
        .ok_or_else(|| AppError::NotFound("beer not found".into()))
}

fn map_read_error(message: &str, e: sqlx::Error) -> AppError {
    tracing::error!(error = %e, "{}", message);
    AppError::Internal(message.into())
}

fn map_save_error(beer_id: i64, e: sqlx::Error) -> AppError {
    tracing::error!(beer_id, error = %e, "Failed to save beer");

    match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(format!("beer id {} already exists", beer_id))
        }
        _ => AppError::Internal(SAVE_ERROR.into()),
    }
}
