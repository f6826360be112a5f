use std::sync::Arc;

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::{debug, info};

use crate::{
    enrichment::{Enrichment, join_platforms},
    entities::movie,
    error::{CatalogError, CatalogResult},
    models::{GenreEntry, MovieRecord, MovieSummary},
};

/// Persistence for watchlist entries.
#[derive(Clone)]
pub struct CatalogStore {
    db: DatabaseConnection,
    enrichment: Arc<dyn Enrichment>,
}

impl CatalogStore {
    pub fn new(db: DatabaseConnection, enrichment: Arc<dyn Enrichment>) -> Self {
        Self { db, enrichment }
    }

    /// Looks up current platforms for `title`, then stores a new entry.
    pub async fn create(&self, title: &str, genre: &str) -> CatalogResult<MovieRecord> {
        require("title", title)?;
        require("genre", genre)?;

        let platforms = self.enrichment.lookup_platforms(title).await;
        let record = MovieRecord::new(title, genre, join_platforms(&platforms));

        movie::Entity::insert(record.clone().into_active_model()).exec(&self.db).await?;

        info!(title = %record.title, genre = %record.genre, platform = %record.platform, "movie added");
        Ok(record)
    }

    pub async fn list_all(&self) -> CatalogResult<Vec<MovieSummary>> {
        let rows: Vec<(String, String, String)> = movie::Entity::find()
            .select_only()
            .columns([movie::Column::Title, movie::Column::Genre, movie::Column::Platform])
            .order_by_asc(movie::Column::Id)
            .into_tuple()
            .all(&self.db)
            .await?;

        debug!(count = rows.len(), "listed movies");
        Ok(rows.into_iter().map(MovieSummary::from).collect())
    }

    /// Removes every entry whose title equals `title` exactly. Returns the
    /// number of rows removed; `NotFound` when nothing matched.
    pub async fn delete(&self, title: &str) -> CatalogResult<u64> {
        require("title", title)?;

        let res = movie::Entity::delete_many()
            .filter(movie::Column::Title.eq(title))
            .exec(&self.db)
            .await?;

        if res.rows_affected == 0 {
            debug!(title = %title, "no movie to delete");
            return Err(CatalogError::NotFound(title.to_string()));
        }

        info!(title = %title, removed = res.rows_affected, "movie deleted");
        Ok(res.rows_affected)
    }

    pub async fn filter_by_genre(&self, genre: &str) -> CatalogResult<Vec<GenreEntry>> {
        require("genre", genre)?;

        let rows: Vec<(String, String)> = movie::Entity::find()
            .select_only()
            .columns([movie::Column::Title, movie::Column::Genre])
            .filter(movie::Column::Genre.eq(genre))
            .order_by_asc(movie::Column::Id)
            .into_tuple()
            .all(&self.db)
            .await?;

        debug!(genre = %genre, count = rows.len(), "filtered movies");
        Ok(rows.into_iter().map(GenreEntry::from).collect())
    }
}

fn require(field: &str, value: &str) -> CatalogResult<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::Validation(format!("{field} is required")));
    }
    Ok(())
}
