use std::{collections::HashMap, num::NonZeroU32, sync::Arc};

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    enrichment::{Enrichment, filter_known_platforms},
    error::AppResult,
    models::{DESCRIPTION_FALLBACK, MovieInfo, NOT_AVAILABLE},
};

pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    image_base_url: String,
    region: String,
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl TmdbClient {
    pub fn new(
        client: reqwest::Client,
        api_key: String,
        base_url: String,
        image_base_url: String,
        region: String,
        rps: u32,
    ) -> Self {
        if api_key.trim().is_empty() {
            warn!("no TMDB_API_KEY provided - platform and info lookups will use fallbacks");
        }

        let rps = NonZeroU32::new(rps).unwrap_or(NonZeroU32::MIN);
        let limiter = Arc::new(RateLimiter::direct(Quota::per_second(rps)));
        Self { client, api_key, base_url, image_base_url, region, limiter }
    }

    /// First search hit for `title`, ranked by the API.
    pub async fn search_movie(&self, title: &str) -> AppResult<Option<SearchMovie>> {
        self.limiter.until_ready().await;

        let url = format!("{}/search/movie", self.base_url.trim_end_matches('/'));
        let resp: SearchResponse = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str()), ("query", title)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(resp.results.into_iter().next())
    }

    pub async fn get_watch_providers(&self, tmdb_id: i64) -> AppResult<WatchProvidersResponse> {
        self.limiter.until_ready().await;

        let url =
            format!("{}/movie/{}/watch/providers", self.base_url.trim_end_matches('/'), tmdb_id);

        let resp = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(resp)
    }

    /// `None` when the title has no match or the region has no listing.
    async fn resolve_platforms(&self, title: &str) -> AppResult<Option<Vec<String>>> {
        let Some(movie) = self.search_movie(title).await? else {
            debug!(title = %title, "no TMDB search result");
            return Ok(None);
        };

        debug!(title = %title, tmdb_id = movie.id, "fetching watch providers");
        let providers = self.get_watch_providers(movie.id).await?;

        let Some(region) = providers.results.get(&self.region) else {
            debug!(title = %title, region = %self.region, "no watch providers for region");
            return Ok(None);
        };

        Ok(Some(filter_known_platforms(region.provider_names())))
    }

    async fn resolve_info(&self, title: &str) -> AppResult<Option<MovieInfo>> {
        let Some(movie) = self.search_movie(title).await? else {
            debug!(title = %title, "no TMDB search result");
            return Ok(None);
        };

        let description = movie
            .overview
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DESCRIPTION_FALLBACK.to_string());

        let poster_url = self.poster_url(movie.poster_path.as_deref());
        Ok(Some(MovieInfo { poster_url, description }))
    }

    fn poster_url(&self, poster_path: Option<&str>) -> Option<String> {
        let path = poster_path.map(str::trim).filter(|p| !p.is_empty())?;
        Some(format!("{}{}", self.image_base_url.trim_end_matches('/'), path))
    }
}

#[async_trait::async_trait]
impl Enrichment for TmdbClient {
    async fn lookup_platforms(&self, title: &str) -> Vec<String> {
        match self.resolve_platforms(title).await {
            Ok(Some(platforms)) => platforms,
            Ok(None) => vec![NOT_AVAILABLE.to_string()],
            Err(err) => {
                warn!(title = %title, error = %err, "platform lookup failed");
                vec![NOT_AVAILABLE.to_string()]
            },
        }
    }

    async fn lookup_info(&self, title: &str) -> MovieInfo {
        match self.resolve_info(title).await {
            Ok(Some(info)) => info,
            Ok(None) => MovieInfo::unavailable(),
            Err(err) => {
                warn!(title = %title, error = %err, "info lookup failed");
                MovieInfo::unavailable()
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchMovie>,
}

#[derive(Debug, Deserialize)]
pub struct SearchMovie {
    pub id: i64,
    pub poster_path: Option<String>,
    pub overview: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WatchProvidersResponse {
    #[serde(default)]
    pub results: HashMap<String, RegionProviders>,
}

/// Provider listing for one region. Rent and buy offers are not read.
#[derive(Debug, Default, Deserialize)]
pub struct RegionProviders {
    #[serde(default)]
    pub flatrate: Vec<Provider>,
    #[serde(default)]
    pub free: Vec<Provider>,
    #[serde(default)]
    pub ads: Vec<Provider>,
}

impl RegionProviders {
    pub fn provider_names(&self) -> impl Iterator<Item = &str> {
        self.flatrate
            .iter()
            .chain(&self.free)
            .chain(&self.ads)
            .map(|p| p.provider_name.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct Provider {
    pub provider_name: String,
}
