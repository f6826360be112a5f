use crate::models::{KNOWN_PLATFORMS, MovieInfo};

/// Resolves a free-text title to display metadata from a remote catalog.
///
/// Both lookups are best effort: a failed request yields the documented
/// fallback value instead of an error, so enrichment never blocks the
/// catalog flows that depend on it.
#[async_trait::async_trait]
pub trait Enrichment: Send + Sync {
    /// Known streaming platforms carrying `title`, or `["Not Available"]`
    /// when the title or its regional listing cannot be resolved.
    async fn lookup_platforms(&self, title: &str) -> Vec<String>;

    /// Poster reference and synopsis for `title`.
    async fn lookup_info(&self, title: &str) -> MovieInfo;
}

/// Keeps allow-listed provider names, first occurrence only.
pub fn filter_known_platforms<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut platforms: Vec<String> = Vec::new();
    for name in names {
        let known = KNOWN_PLATFORMS.iter().any(|k| *k == name);
        if known && !platforms.iter().any(|p| p == name) {
            platforms.push(name.to_string());
        }
    }
    platforms
}

pub fn join_platforms(platforms: &[String]) -> String {
    platforms.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NOT_AVAILABLE;

    #[test]
    fn test_filter_known_platforms_drops_unknown_and_duplicates() {
        let names = ["Netflix", "Mubi", "Max", "Netflix", "Crunchyroll", "Hulu"];
        assert_eq!(filter_known_platforms(names), vec!["Netflix", "Max", "Hulu"]);
    }

    #[test]
    fn test_filter_known_platforms_is_case_sensitive() {
        assert!(filter_known_platforms(["netflix", "HULU", "Apple TV+"]).is_empty());
    }

    #[test]
    fn test_join_platforms() {
        let platforms = vec!["Netflix".to_string(), "Disney Plus".to_string()];
        assert_eq!(join_platforms(&platforms), "Netflix, Disney Plus");
        assert_eq!(join_platforms(&[NOT_AVAILABLE.to_string()]), NOT_AVAILABLE);
        assert_eq!(join_platforms(&[]), "");
    }
}
