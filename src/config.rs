//! Configuration resolution for the Gemnasium commands.
//!
//! A `Config` is built once per invocation from three layers, highest
//! priority first: `GEMNASIUM_*` environment variables, command-line options,
//! and the persisted project configuration file.

use std::collections::BTreeMap;

/// Gemnasium host used when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://gemnasium.com";

/// Web UI host shown to users of the default instance
pub const DEFAULT_UI_BASE_URL: &str = "https://beta.gemnasium.com";

const API_PREFIX: &str = "/api/v2";

/// Persisted property keys
pub const BASE_URL_KEY: &str = "baseUrl";
pub const API_KEY_KEY: &str = "apiKey";
pub const PROJECT_BRANCH_KEY: &str = "projectBranch";
pub const PROJECT_SLUG_KEY: &str = "projectSlug";
pub const PROJECT_REVISION_KEY: &str = "projectRevision";
pub const IGNORED_SCOPES_KEY: &str = "ignoredScopes";

/// Environment variable names
pub const BASE_URL_ENV: &str = "GEMNASIUM_BASE_URL";
pub const API_KEY_ENV: &str = "GEMNASIUM_API_KEY";
pub const PROJECT_BRANCH_ENV: &str = "GEMNASIUM_PROJECT_BRANCH";
pub const PROJECT_SLUG_ENV: &str = "GEMNASIUM_PROJECT_SLUG";
pub const PROJECT_REVISION_ENV: &str = "GEMNASIUM_PROJECT_REVISION";
pub const IGNORED_SCOPES_ENV: &str = "GEMNASIUM_IGNORED_SCOPES";

/// Flat key/value view of the persisted configuration file
pub type PropertyMap = BTreeMap<String, String>;

/// One layer of configuration values; any field may be unset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigValues {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub project_branch: Option<String>,
    pub project_slug: Option<String>,
    pub project_revision: Option<String>,
    pub ignored_scopes: Option<String>,
}

impl ConfigValues {
    /// Reads the layer stored in the project configuration file
    pub fn from_properties(properties: &PropertyMap) -> Self {
        let get = |key: &str| properties.get(key).cloned();
        Self {
            base_url: get(BASE_URL_KEY),
            api_key: get(API_KEY_KEY),
            project_branch: get(PROJECT_BRANCH_KEY),
            project_slug: get(PROJECT_SLUG_KEY),
            project_revision: get(PROJECT_REVISION_KEY),
            ignored_scopes: get(IGNORED_SCOPES_KEY),
        }
    }

    /// Reads the `GEMNASIUM_*` layer out of environment pairs
    ///
    /// Takes the pairs explicitly so callers pass `std::env::vars()` and tests
    /// pass fixtures.
    pub fn from_env_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut values = Self::default();
        for (key, value) in vars {
            let slot = match key.as_ref() {
                BASE_URL_ENV => &mut values.base_url,
                API_KEY_ENV => &mut values.api_key,
                PROJECT_BRANCH_ENV => &mut values.project_branch,
                PROJECT_SLUG_ENV => &mut values.project_slug,
                PROJECT_REVISION_ENV => &mut values.project_revision,
                IGNORED_SCOPES_ENV => &mut values.ignored_scopes,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        values
    }
}

/// Resolved configuration for one invocation
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
    api_key: Option<String>,
    project_branch: Option<String>,
    project_slug: Option<String>,
    project_revision: Option<String>,
    ignored_scopes: Option<String>,
}

impl Config {
    /// Merges the three layers, field by field
    ///
    /// The first non-empty value wins in the order environment, parameter,
    /// persisted. Only the base URL has a built-in default.
    pub fn resolve(env: &ConfigValues, params: &ConfigValues, persisted: &ConfigValues) -> Self {
        fn pick(
            env: &Option<String>,
            param: &Option<String>,
            persisted: &Option<String>,
        ) -> Option<String> {
            [env, param, persisted]
                .into_iter()
                .flatten()
                .find(|value| !value.is_empty())
                .cloned()
        }

        let base_url = pick(&env.base_url, &params.base_url, &persisted.base_url)
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            api_key: pick(&env.api_key, &params.api_key, &persisted.api_key),
            project_branch: pick(
                &env.project_branch,
                &params.project_branch,
                &persisted.project_branch,
            ),
            project_slug: pick(
                &env.project_slug,
                &params.project_slug,
                &persisted.project_slug,
            ),
            project_revision: pick(
                &env.project_revision,
                &params.project_revision,
                &persisted.project_revision,
            ),
            ignored_scopes: pick(
                &env.ignored_scopes,
                &params.ignored_scopes,
                &persisted.ignored_scopes,
            ),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn project_branch(&self) -> Option<&str> {
        self.project_branch.as_deref()
    }

    pub fn project_slug(&self) -> Option<&str> {
        self.project_slug.as_deref()
    }

    pub fn project_revision(&self) -> Option<&str> {
        self.project_revision.as_deref()
    }

    pub fn ignored_scopes(&self) -> Option<&str> {
        self.ignored_scopes.as_deref()
    }

    /// Ignored scopes split on commas, trimmed, without blanks or duplicates
    pub fn ignored_scope_list(&self) -> Vec<String> {
        let mut scopes: Vec<String> = Vec::new();
        for scope in self.ignored_scopes.as_deref().unwrap_or_default().split(',') {
            let scope = scope.trim();
            if !scope.is_empty() && !scopes.iter().any(|s| s == scope) {
                scopes.push(scope.to_string());
            }
        }
        scopes
    }

    pub fn api_base_url(&self) -> String {
        format!("{}{}", self.base_url, API_PREFIX)
    }

    /// Web UI base URL
    ///
    /// The default instance serves its UI from a separate beta host; custom
    /// instances serve it from the base URL itself.
    pub fn ui_base_url(&self) -> &str {
        if self.base_url == DEFAULT_BASE_URL {
            DEFAULT_UI_BASE_URL
        } else {
            &self.base_url
        }
    }

    pub fn project_url(&self, slug: &str) -> String {
        format!("{}/projects/{}", self.ui_base_url(), slug)
    }

    pub fn commit_url(&self, slug: &str, commit_sha: &str) -> String {
        format!("{}/projects/{}/commits/{}", self.ui_base_url(), slug, commit_sha)
    }

    /// API key with everything but the last four characters hidden
    ///
    /// Keys of four characters or fewer are hidden entirely.
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key.as_deref().map(|key| {
            let chars: Vec<char> = key.chars().collect();
            if chars.len() <= 4 {
                return "*".repeat(chars.len());
            }
            let hidden = chars.len() - 4;
            let shown: String = chars[hidden..].iter().collect();
            format!("{}{}", "*".repeat(hidden), shown)
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("api_key", &self.masked_api_key())
            .field("project_branch", &self.project_branch)
            .field("project_slug", &self.project_slug)
            .field("project_revision", &self.project_revision)
            .field("ignored_scopes", &self.ignored_scopes)
            .finish()
    }
}
