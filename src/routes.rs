use std::sync::Arc;

use axum::{
    Router,
    extract::{Form, Query, State},
    response::Html,
    routing::get,
};
use tracing::error;

use crate::{
    AppState,
    error::{AppResult, CatalogError},
    models::{AddMovieRequest, DeleteMovieRequest, GenreQuery, InfoQuery},
    templates::{self, Notice},
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/movies", get(list_movies).post(add_movie))
        .route("/movies/new", get(new_movie))
        .route("/movies/delete", get(delete_form).post(delete_movie))
        .route("/movies/genre", get(filter_movies))
        .route("/movies/info", get(movie_info))
        .with_state(state)
}

pub async fn index() -> Html<String> {
    Html(templates::index_page())
}

pub async fn new_movie() -> Html<String> {
    Html(templates::add_movie_page(None))
}

pub async fn add_movie(
    State(state): State<Arc<AppState>>,
    Form(req): Form<AddMovieRequest>,
) -> Html<String> {
    let title = req.title.trim();
    let genre = req.genre.trim();

    let notice = match state.catalog.create(title, genre).await {
        Ok(record) => Notice::success(format!("Movie '{}' saved successfully!", record.title)),
        Err(CatalogError::Validation(_)) => Notice::warning("Both Title and Genre are required!"),
        Err(err) => {
            error!(title = %title, error = %err, "failed to add movie");
            Notice::error("Failed to save the movie!")
        },
    };

    Html(templates::add_movie_page(Some(&notice)))
}

pub async fn list_movies(State(state): State<Arc<AppState>>) -> Html<String> {
    let movies = state.catalog.list_all().await.unwrap_or_else(|err| {
        error!(error = %err, "failed to list movies");
        Vec::new()
    });

    Html(templates::movies_page(&movies))
}

pub async fn delete_form() -> Html<String> {
    Html(templates::delete_movie_page(None))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    Form(req): Form<DeleteMovieRequest>,
) -> Html<String> {
    let title = req.title.trim();

    let notice = match state.catalog.delete(title).await {
        Ok(_) => Notice::success(format!("Movie '{title}' deleted successfully!")),
        Err(CatalogError::Validation(_)) => Notice::warning("Movie title is required!"),
        Err(CatalogError::NotFound(_)) => Notice::error(format!("Movie '{title}' not found!")),
        Err(err) => {
            error!(title = %title, error = %err, "failed to delete movie");
            Notice::error(format!("Movie '{title}' not found!"))
        },
    };

    Html(templates::delete_movie_page(Some(&notice)))
}

pub async fn filter_movies(
    State(state): State<Arc<AppState>>,
    Query(q): Query<GenreQuery>,
) -> Html<String> {
    let genre = q.genre.as_deref().map(str::trim).unwrap_or_default();
    if genre.is_empty() {
        return Html(templates::genre_picker_page());
    }

    let movies = state.catalog.filter_by_genre(genre).await.unwrap_or_else(|err| {
        error!(genre = %genre, error = %err, "failed to filter movies");
        Vec::new()
    });

    Html(templates::genre_results_page(genre, &movies))
}

pub async fn movie_info(
    State(state): State<Arc<AppState>>,
    Query(q): Query<InfoQuery>,
) -> AppResult<Html<String>> {
    let title = q.title.trim();
    if title.is_empty() {
        return Err(anyhow::anyhow!("Please select a movie!").into());
    }

    let info = state.enrichment.lookup_info(title).await;
    Ok(Html(templates::movie_info_page(title, &info)))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use sea_orm::{ConnectionTrait, DatabaseConnection};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::{
        CatalogStore,
        tests::{StubEnrichment, memory_db},
    };

    async fn app_with_db() -> (Router, DatabaseConnection) {
        let enrichment = Arc::new(
            StubEnrichment::default()
                .with("Inception", &["Netflix"])
                .with("Up", &["Disney Plus", "Hulu"]),
        );
        let db = memory_db().await;
        let catalog = CatalogStore::new(db.clone(), enrichment.clone());
        (router(Arc::new(AppState { catalog, enrichment })), db)
    }

    async fn app() -> Router {
        app_with_db().await.0
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, String) {
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
        send(app, Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn post_form(app: &Router, uri: &str, form: &str) -> (StatusCode, String) {
        let req = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        send(app, req).await
    }

    #[tokio::test]
    async fn test_index_links_every_action() {
        let app = app().await;
        let (status, body) = get(&app, "/").await;

        assert_eq!(status, StatusCode::OK);
        for href in ["/movies/new", "/movies", "/movies/delete", "/movies/genre"] {
            assert!(body.contains(&format!("href=\"{href}\"")), "missing {href}");
        }
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let app = app().await;

        let (_, body) = post_form(&app, "/movies", "title=Inception&genre=SciFi").await;
        assert!(body.contains("saved successfully!"));

        let (_, body) = get(&app, "/movies").await;
        assert!(body.contains("Inception"));
        assert!(body.contains("Genre: SciFi"));
        assert!(body.contains("Platforms: Netflix"));
    }

    #[tokio::test]
    async fn test_add_requires_title_and_genre() {
        let app = app().await;

        let (_, body) = post_form(&app, "/movies", "title=Inception").await;
        assert!(body.contains("Both Title and Genre are required!"));

        let (_, body) = post_form(&app, "/movies", "title=+&genre=Drama").await;
        assert!(body.contains("Both Title and Genre are required!"));

        let (_, body) = get(&app, "/movies").await;
        assert!(body.contains("No movies found in the database!"));
    }

    #[tokio::test]
    async fn test_delete_flow() {
        let app = app().await;
        post_form(&app, "/movies", "title=Up&genre=Animated").await;

        let (_, body) = post_form(&app, "/movies/delete", "title=Down").await;
        assert!(body.contains("not found!"));

        let (_, body) = post_form(&app, "/movies/delete", "title=Up").await;
        assert!(body.contains("deleted successfully!"));

        let (_, body) = post_form(&app, "/movies/delete", "title=").await;
        assert!(body.contains("Movie title is required!"));

        let (_, body) = get(&app, "/movies").await;
        assert!(body.contains("No movies found in the database!"));
    }

    #[tokio::test]
    async fn test_filter_by_genre() {
        let app = app().await;
        post_form(&app, "/movies", "title=A&genre=Horror").await;
        post_form(&app, "/movies", "title=B&genre=Comedy").await;

        let (_, body) = get(&app, "/movies/genre").await;
        assert!(body.contains("Select a Genre to Filter:"));

        let (_, body) = get(&app, "/movies/genre?genre=Horror").await;
        assert!(body.contains("<li class=\"py-2\">A</li>"));
        assert!(!body.contains("<li class=\"py-2\">B</li>"));

        let (_, body) = get(&app, "/movies/genre?genre=Musical").await;
        assert!(body.contains("No movies found for genre"));
    }

    #[tokio::test]
    async fn test_movie_info() {
        let app = app().await;

        let (status, body) = get(&app, "/movies/info?title=Blade%20Runner").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("src=\"https://img.test/Blade_Runner.jpg\""));
        assert!(body.contains("About Blade Runner."));

        let (_, body) = get(&app, "/movies/info?title=").await;
        assert!(body.contains("Please select a movie!"));
    }

    #[tokio::test]
    async fn test_missing_title_fields_show_validation_notice() {
        let app = app().await;

        let (status, body) = post_form(&app, "/movies", "genre=Drama").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Both Title and Genre are required!"));

        let (status, body) = post_form(&app, "/movies/delete", "").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Movie title is required!"));

        let (status, body) = get(&app, "/movies/info").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Please select a movie!"));
    }

    #[tokio::test]
    async fn test_store_failure_notices() {
        let (app, db) = app_with_db().await;
        post_form(&app, "/movies", "title=Up&genre=Animated").await;
        db.execute_unprepared("DROP TABLE movies").await.unwrap();

        let (_, body) = post_form(&app, "/movies", "title=Inception&genre=SciFi").await;
        assert!(body.contains("Failed to save the movie!"));
        assert!(!body.contains("saved successfully!"));

        let (_, body) = post_form(&app, "/movies/delete", "title=Up").await;
        assert!(body.contains("not found!"));

        let (_, body) = get(&app, "/movies").await;
        assert!(body.contains("No movies found in the database!"));

        let (_, body) = get(&app, "/movies/genre?genre=Animated").await;
        assert!(body.contains("No movies found for genre"));
    }
}
