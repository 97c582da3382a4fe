use serde::Deserialize;

/// A repository as GitHub's "list starred repositories" endpoint returns it.
/// Only the fields the service projects are kept; the rest are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRepository {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub topics: Vec<String>,
    /// A missing flag counts as public.
    #[serde(default)]
    pub private: bool,
    pub license: Option<License>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct License {
    pub name: String,
}

/// The reduced view of a starred repository exposed to clients.
///
/// Fields are declared in their output order; `license` sits before `topics`
/// and is left out entirely when the source had no license.
#[derive(Debug, Clone, PartialEq)]
pub struct EssentialRepository {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub license: Option<String>,
    pub topics: Vec<String>,
}

impl From<&RawRepository> for EssentialRepository {
    fn from(raw: &RawRepository) -> Self {
        Self {
            name: raw.name.clone(),
            description: raw.description.clone(),
            url: raw.html_url.clone(),
            license: raw.license.as_ref().map(|license| license.name.clone()),
            topics: raw.topics.clone(),
        }
    }
}

/// Projects the public entries of `raw`, keeping their relative order.
pub fn to_essential(raw: &[RawRepository]) -> Vec<EssentialRepository> {
    raw.iter()
        .filter(|repo| !repo.private)
        .map(EssentialRepository::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn raw(name: &str, private: bool, license: Option<&str>) -> RawRepository {
        RawRepository {
            name: name.to_string(),
            description: Some(format!("{name} description")),
            html_url: format!("https://github.com/octo/{name}"),
            topics: vec!["rust".to_string(), "cli".to_string()],
            private,
            license: license.map(|name| License { name: name.to_string() }),
        }
    }

    #[test]
    fn test_private_repositories_are_dropped() {
        let input = vec![raw("a", true, None), raw("b", true, Some("MIT"))];

        assert!(to_essential(&input).is_empty());
    }

    #[test]
    fn test_public_repositories_keep_relative_order() {
        let input = vec![raw("a", false, None), raw("b", true, None), raw("c", false, None), raw("d", false, None)];

        let names: Vec<String> = to_essential(&input).into_iter().map(|repo| repo.name).collect();

        assert_eq!(names, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_projection_fields() {
        let essential = EssentialRepository::from(&raw("tokio", false, Some("MIT License")));

        assert_eq!(
            essential,
            EssentialRepository {
                name: "tokio".to_string(),
                description: Some("tokio description".to_string()),
                url: "https://github.com/octo/tokio".to_string(),
                license: Some("MIT License".to_string()),
                topics: vec!["rust".to_string(), "cli".to_string()],
            }
        );
    }

    #[test]
    fn test_input_is_left_untouched() {
        let input = vec![raw("a", false, Some("MIT")), raw("b", true, None)];

        let _ = to_essential(&input);

        assert_eq!(input.len(), 2);
        assert!(input[1].private);
        assert_eq!(input[0].license.as_ref().map(|l| l.name.as_str()), Some("MIT"));
    }

    #[test]
    fn test_deserialize_github_payload() {
        let payload = json!([
            {
                "id": 1,
                "name": "a",
                "full_name": "octo/a",
                "private": false,
                "description": null,
                "html_url": "u1",
                "topics": [],
                "license": {"key": "mit", "name": "MIT", "spdx_id": "MIT"}
            },
            {"name": "b", "description": "no flags", "html_url": "u2", "license": null}
        ]);

        let repos: Vec<RawRepository> = serde_json::from_value(payload).unwrap();

        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].license.as_ref().unwrap().name, "MIT");
        assert!(repos[0].description.is_none());
        assert!(!repos[1].private);
        assert!(repos[1].topics.is_empty());
        assert!(repos[1].license.is_none());
    }
}
