//! GitHub REST API payloads.

use serde::{Deserialize, Serialize};

/// Fallback text for a profile without a name.
pub const NO_NAME: &str = "Nome não informado";
/// Fallback text for a profile without a bio.
pub const NO_BIO: &str = "Bio não informada";
/// Fallback text for a profile without a location.
pub const NO_LOCATION: &str = "N/A";

/// A repository as returned by search and by `users/<u>/repos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A user as returned by user search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubUser {
    pub id: u64,
    pub login: String,
    #[serde(default)]
    pub avatar_url: String,
}

/// Envelope of a `search/*` response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage<T> {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Combined result of one accepted search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub repositories: Vec<Repository>,
    pub users: Vec<GithubUser>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.repositories.is_empty() && self.users.is_empty()
    }

    /// Total number of selectable rows (repositories first, then users).
    pub fn len(&self) -> usize {
        self.repositories.len() + self.users.len()
    }
}

/// A user profile from `users/<u>`.
///
/// Unknown fields are kept in `extra` so the full payload can be written
/// back to storage unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub followers: u64,
    #[serde(default)]
    pub following: u64,
    #[serde(default)]
    pub public_repos: u64,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

impl Profile {
    pub fn display_name(&self) -> &str {
        non_blank(&self.name).unwrap_or(NO_NAME)
    }

    pub fn display_bio(&self) -> &str {
        non_blank(&self.bio).unwrap_or(NO_BIO)
    }

    pub fn display_location(&self) -> &str {
        non_blank(&self.location).unwrap_or(NO_LOCATION)
    }

    /// Name if present, otherwise the login.
    pub fn title(&self) -> &str {
        non_blank(&self.name).unwrap_or(&self.login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn octocat() -> serde_json::Value {
        json!({
            "login": "octocat",
            "id": 583231,
            "name": "The Octocat",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "bio": null,
            "followers": 10,
            "following": 2,
            "public_repos": 8,
            "location": "San Francisco",
            "html_url": "https://github.com/octocat",
            "company": "@github"
        })
    }

    #[test]
    fn test_profile_decodes_and_keeps_extra_fields() {
        let profile: Profile = serde_json::from_value(octocat()).unwrap();
        assert_eq!(profile.login, "octocat");
        assert_eq!(profile.followers, 10);
        assert_eq!(profile.extra.get("company"), Some(&json!("@github")));
        assert_eq!(profile.extra.get("id"), Some(&json!(583231)));

        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back["company"], "@github");
        assert_eq!(back["html_url"], "https://github.com/octocat");
    }

    #[test]
    fn test_null_bio_falls_back() {
        let profile: Profile = serde_json::from_value(octocat()).unwrap();
        assert_eq!(profile.display_bio(), NO_BIO);
        assert_eq!(profile.display_name(), "The Octocat");
        assert_eq!(profile.display_location(), "San Francisco");
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let profile: Profile = serde_json::from_value(json!({"login": "ghost"})).unwrap();
        assert_eq!(profile.display_name(), NO_NAME);
        assert_eq!(profile.display_location(), NO_LOCATION);
        assert_eq!(profile.title(), "ghost");
        assert_eq!(profile.public_repos, 0);
    }

    #[test]
    fn test_blank_name_falls_back() {
        let profile: Profile =
            serde_json::from_value(json!({"login": "ghost", "name": "  "})).unwrap();
        assert_eq!(profile.display_name(), NO_NAME);
    }

    #[test]
    fn test_search_page_decodes() {
        let page: SearchPage<Repository> = serde_json::from_value(json!({
            "total_count": 1,
            "incomplete_results": false,
            "items": [{
                "id": 1,
                "name": "hello-world",
                "html_url": "https://github.com/octocat/hello-world",
                "description": null,
                "stargazers_count": 3
            }]
        }))
        .unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].name, "hello-world");
        assert_eq!(page.items[0].description, None);
    }

    #[test]
    fn test_search_results_len() {
        let results = SearchResults {
            repositories: vec![Repository {
                id: 1,
                name: "a".into(),
                html_url: "u".into(),
                description: None,
            }],
            users: vec![GithubUser {
                id: 2,
                login: "b".into(),
                avatar_url: String::new(),
            }],
        };
        assert_eq!(results.len(), 2);
        assert!(!results.is_empty());
        assert!(SearchResults::default().is_empty());
    }
}
