use crate::config::Config;
use crate::ports::outbound::{
    DependencyFilePayload, GemnasiumApi, NewProject, ProjectInfo, RevisionInfo,
};
use crate::shared::error::GemnasiumError;
use crate::shared::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde::Deserialize;

const BRANCH_HEADER: &str = "X-Gms-Branch";
const REVISION_HEADER: &str = "X-Gms-Revision";

/// Placeholder username of the Basic credential; the API key is the password
const AUTH_USERNAME: &str = "X";

/// Outcome of a request that reached the server
///
/// Non-2xx responses are values, not errors, so each operation decides how
/// to surface them.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ApiResponse {
    Success { body: String },
    Failure { status: u16, message: String },
}

impl ApiResponse {
    fn into_body(self) -> Result<String> {
        match self {
            ApiResponse::Success { body } => Ok(body),
            ApiResponse::Failure { status, message } => {
                Err(GemnasiumError::Http { status, message }.into())
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CreatedProject {
    #[serde(default)]
    slug: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CreatedCommit {
    #[serde(default)]
    commit_sha: Option<String>,
}

/// Base64 token of the Basic credential `X:<api key>`
pub fn basic_token(api_key: &str) -> String {
    STANDARD.encode(format!("{}:{}", AUTH_USERNAME, api_key))
}

/// Extracts `message` from an error body, or "unknown"
fn parse_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|error| error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| GemnasiumError::protocol(e.to_string()).into())
}

/// GemnasiumClient adapter for the Gemnasium v2 HTTP API
///
/// This adapter implements the GemnasiumApi port with a blocking reqwest
/// client. Authenticated calls fail with a validation error when no API key
/// is configured.
pub struct GemnasiumClient {
    client: Client,
    api_base_url: String,
    api_key: Option<String>,
}

impl GemnasiumClient {
    /// Creates a client for the given API base URL (e.g. `https://gemnasium.com/api/v2`)
    pub fn new(api_base_url: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("gemnasium-maven/{}", version);
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            api_base_url: api_base_url.into(),
            api_key: api_key.filter(|key| !key.is_empty()),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_base_url(), config.api_key().map(str::to_string))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    fn authorization(&self) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GemnasiumError::validation("please provide your Gemnasium apiKey"))?;
        Ok(format!("Basic {}", basic_token(api_key)))
    }

    /// Sends the request and reads the whole body
    ///
    /// Only transport failures are errors here.
    fn execute(&self, request: RequestBuilder, url: &str) -> Result<ApiResponse> {
        let network_error = |e: reqwest::Error| GemnasiumError::Network {
            url: url.to_string(),
            details: e.to_string(),
        };

        let response = request.send().map_err(network_error)?;
        let status = response.status();
        let body = response.text().map_err(network_error)?;

        if status.is_success() {
            Ok(ApiResponse::Success { body })
        } else {
            Ok(ApiResponse::Failure {
                status: status.as_u16(),
                message: parse_error_message(&body),
            })
        }
    }
}

impl GemnasiumApi for GemnasiumClient {
    /// Credentials are sent when configured; the ping itself needs none
    fn ping(&self) -> Result<String> {
        let url = self.url("/ping");
        let mut request = self.client.get(&url);
        if self.api_key.is_some() {
            request = request.header(AUTHORIZATION, self.authorization()?);
        }
        self.execute(request, &url)?.into_body()
    }

    fn create_project(&self, team_slug: &str, project: &NewProject) -> Result<String> {
        let url = self.url(&format!(
            "/teams/{}/projects",
            urlencoding::encode(team_slug)
        ));
        let request = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.authorization()?)
            .json(project);

        let body = self.execute(request, &url)?.into_body()?;
        let created: CreatedProject = parse_json(&body)?;

        created
            .slug
            .filter(|slug| !slug.is_empty())
            .ok_or_else(|| GemnasiumError::protocol("no slug was returned by the API").into())
    }

    fn upload_dependency_files(
        &self,
        project_slug: &str,
        revision: &RevisionInfo,
        files: &[DependencyFilePayload],
    ) -> Result<String> {
        let url = self.url(&format!(
            "/projects/{}/dependency_files",
            urlencoding::encode(project_slug)
        ));
        let mut request = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.authorization()?)
            .json(files);

        if let Some(branch) = revision.branch.as_deref().filter(|b| !b.is_empty()) {
            request = request.header(BRANCH_HEADER, branch);
        }
        if let Some(rev) = revision.revision.as_deref().filter(|r| !r.is_empty()) {
            request = request.header(REVISION_HEADER, rev);
        }

        let body = self.execute(request, &url)?.into_body()?;
        let commit: CreatedCommit = parse_json(&body)?;

        commit
            .commit_sha
            .filter(|sha| !sha.is_empty())
            .ok_or_else(|| GemnasiumError::protocol("no new commit was returned by the API").into())
    }

    fn fetch_project(&self, project_slug: &str) -> Result<ProjectInfo> {
        let url = self.url(&format!("/projects/{}", urlencoding::encode(project_slug)));
        let request = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.authorization()?);

        let body = self.execute(request, &url)?.into_body()?;
        parse_json(&body)
    }
}
