use maud::{DOCTYPE, Markup, html};

use crate::models::{GENRES, GenreEntry, MovieInfo, MovieSummary};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const BUTTON: &str =
    "block w-full rounded-md bg-pink-300 px-4 py-2 text-center font-semibold text-black hover:bg-pink-400";
const INPUT: &str = "mt-2 w-full rounded-md border border-gray-300 px-3 py-2 focus:border-pink-500 focus:outline-none focus:ring-1 focus:ring-pink-500";

pub fn index_page() -> String {
    page(
        "Movie Watchlist",
        html! {
            h1 class="text-3xl font-bold text-gray-900" { "Movie Watchlist" }
            div class="mt-8 space-y-3" {
                a class=(BUTTON) href="/movies/new" { "Add a Movie" }
                a class=(BUTTON) href="/movies" { "View Movies" }
                a class=(BUTTON) href="/movies/delete" { "Delete a Movie" }
                a class=(BUTTON) href="/movies/genre" { "Filter Movies by Genre" }
            }
        },
    )
}

pub fn add_movie_page(notice: Option<&Notice>) -> String {
    page(
        "Add a Movie",
        html! {
            h1 class="text-2xl font-bold text-gray-900" { "Add a Movie" }
            (notice_box(notice))
            form class="mt-6 space-y-6" method="post" action="/movies" {
                div {
                    label class="block text-sm font-medium text-gray-700" for="title" { "Title:" }
                    input class=(INPUT) name="title" id="title";
                }
                fieldset {
                    legend class="block text-sm font-medium text-gray-700" { "Select Genre:" }
                    div class="mt-2 grid grid-cols-3 gap-2" {
                        @for genre in GENRES {
                            label class="flex items-center gap-2 text-sm text-gray-700" {
                                input type="radio" name="genre" value=(genre);
                                (genre)
                            }
                        }
                    }
                }
                button class=(BUTTON) type="submit" { "Save Movie" }
            }
            (back_link())
        },
    )
}

pub fn movies_page(movies: &[MovieSummary]) -> String {
    page(
        "All Movies",
        html! {
            h1 class="text-2xl font-bold text-gray-900" { "All Movies" }
            @if movies.is_empty() {
                (notice_box(Some(&Notice::warning("No movies found in the database!"))))
            } @else {
                ul class="mt-6 divide-y divide-gray-200 font-mono text-sm" {
                    @for movie in movies {
                        li class="py-2 whitespace-pre" {
                            a class="text-gray-900 hover:text-pink-600" href=(info_href(&movie.title)) {
                                (format!("{:<30}", movie.title))
                                " | Genre: " (format!("{:<10}", movie.genre))
                                " | Platforms: " (display_platform(&movie.platform))
                            }
                        }
                    }
                }
            }
            (back_link())
        },
    )
}

pub fn delete_movie_page(notice: Option<&Notice>) -> String {
    page(
        "Delete a Movie",
        html! {
            h1 class="text-2xl font-bold text-gray-900" { "Delete a Movie" }
            (notice_box(notice))
            form class="mt-6 space-y-6" method="post" action="/movies/delete" {
                div {
                    label class="block text-sm font-medium text-gray-700" for="title" { "Title of Movie to Delete:" }
                    input class=(INPUT) name="title" id="title";
                }
                button class=(BUTTON) type="submit" { "Delete Movie" }
            }
            (back_link())
        },
    )
}

pub fn genre_picker_page() -> String {
    page(
        "Filter Movies by Genre",
        html! {
            h1 class="text-2xl font-bold text-gray-900" { "Filter Movies by Genre" }
            p class="mt-2 text-gray-600" { "Select a Genre to Filter:" }
            div class="mt-6 grid grid-cols-2 gap-2" {
                @for genre in GENRES {
                    a class=(BUTTON) href=(format!("/movies/genre?genre={}", urlencoding::encode(genre))) { (genre) }
                }
            }
            (back_link())
        },
    )
}

pub fn genre_results_page(genre: &str, movies: &[GenreEntry]) -> String {
    page(
        &format!("Movies in Genre: {genre}"),
        html! {
            h1 class="text-2xl font-bold text-gray-900" { "Movies in Genre: " (genre) }
            @if movies.is_empty() {
                (notice_box(Some(&Notice::warning(format!("No movies found for genre '{genre}'!")))))
            } @else {
                ul class="mt-6 divide-y divide-gray-200 font-mono text-sm" {
                    @for movie in movies {
                        li class="py-2" { (movie.title) }
                    }
                }
            }
            a class="mt-6 inline-block text-pink-600 hover:text-pink-800" href="/movies/genre" { "Pick another genre" }
        },
    )
}

pub fn movie_info_page(title: &str, info: &MovieInfo) -> String {
    page(
        &format!("Info for {title}"),
        html! {
            h1 class="text-2xl font-bold text-gray-900" { "Info for " (title) }
            div class="mt-6" {
                @if let Some(url) = &info.poster_url {
                    img class="max-h-[300px] max-w-[200px] rounded shadow" src=(url) alt=(format!("Poster for {title}"));
                } @else {
                    p class="text-gray-500" { "Poster not found!" }
                }
            }
            p class="mt-6 text-gray-700" { (info.description) }
            a class="mt-6 inline-block text-pink-600 hover:text-pink-800" href="/movies" { "Back to movies" }
        },
    )
}

pub fn error_page(message: String) -> String {
    page(
        "Error",
        html! {
            h1 class="text-2xl font-bold text-gray-900" { "Error" }
            p class="mt-4 text-gray-700" { (message) }
            (back_link())
        },
    )
}

/// Outcome message shown above a form.
#[derive(Clone, Debug)]
pub struct Notice {
    kind: NoticeKind,
    message: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum NoticeKind {
    Success,
    Warning,
    Error,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }
}

fn notice_box(notice: Option<&Notice>) -> Markup {
    let Some(notice) = notice else {
        return html! {};
    };

    let style = match notice.kind {
        NoticeKind::Success => "border-green-500 bg-green-50 text-green-800",
        NoticeKind::Warning => "border-yellow-500 bg-yellow-50 text-yellow-800",
        NoticeKind::Error => "border-red-500 bg-red-50 text-red-800",
    };

    html! {
        div class=(format!("mt-6 rounded-md border-l-4 p-4 {style}")) role="alert" { (notice.message) }
    }
}

fn display_platform(platform: &str) -> &str {
    if platform.is_empty() { "None" } else { platform }
}

fn info_href(title: &str) -> String {
    format!("/movies/info?title={}", urlencoding::encode(title))
}

fn back_link() -> Markup {
    html! {
        a class="mt-6 inline-block text-pink-600 hover:text-pink-800" href="/" { "Back" }
    }
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body {
                div class="min-h-screen bg-gray-50" {
                    div class="max-w-2xl mx-auto px-6 py-12" {
                        div class="bg-white shadow rounded-lg p-8" { (body) }
                    }
                }
            }
        }
    }
    .into_string()
}
