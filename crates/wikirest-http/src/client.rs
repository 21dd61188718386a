//! The resource client: one method per resource operation

use crate::error::ClientError;
use crate::session::Session;
use crate::transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};
use wikirest_core::{parse_list, resolve, ResourceKind};

/// Default `Accept` / `Content-Type` for page content
pub const WIKI_MARKUP: &str = "text/x.wiki-markup";

/// Default `Accept` for list reads and non-page single reads
pub const PLAIN_TEXT: &str = "text/plain";

/// Maximum length of response body to log on failure
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Client for one logical session against a wiki server
///
/// Each operation resolves a route, performs one blocking round trip
/// through the injected [`Transport`], and classifies the status code:
///
/// - single-resource GET: 200 and 404 both return the body (absence is a
///   defined empty result, not an error)
/// - list GET: 200 returns the parsed newline-delimited list, 404 an
///   empty list
/// - writes: 201 and 204 are the only success statuses
/// - anything else fails with [`ClientError::RequestFailed`]
pub struct WikiClient {
    session: Session,
    transport: Box<dyn Transport>,
}

impl WikiClient {
    /// Create a client using the default blocking reqwest transport
    pub fn new(session: Session) -> Result<Self, ClientError> {
        Ok(Self {
            session,
            transport: Box::new(ReqwestTransport::new()?),
        })
    }

    /// Create a client over a caller-supplied transport
    ///
    /// Lets the integrator decide pooling and timeout policy, and lets
    /// tests substitute a scripted double.
    pub fn with_transport(session: Session, transport: Box<dyn Transport>) -> Self {
        Self { session, transport }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable access for reconfiguring the session between calls
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    // ---- reads -----------------------------------------------------------

    /// Fetch a page body
    ///
    /// Returns the body for both 200 and 404; an absent page answers with
    /// its not-found body rather than an error.
    pub fn get_page(&self, pname: &str) -> Result<String, ClientError> {
        let mut params = self.workspace_params();
        params.push(("pname", pname));
        self.get_single(ResourceKind::Page, &params, Some(WIKI_MARKUP))
    }

    /// Fetch a workspace-scoped attachment body
    ///
    /// No default `Accept` is sent; the server answers with the stored
    /// content type.
    pub fn get_attachment(&self, attachment_id: &str) -> Result<String, ClientError> {
        let mut params = self.workspace_params();
        params.push(("attachment_id", attachment_id));
        self.get_single(ResourceKind::WorkspaceAttachment, &params, None)
    }

    /// Fetch an attachment scoped to one page
    pub fn get_page_attachment(
        &self,
        pname: &str,
        attachment_id: &str,
    ) -> Result<String, ClientError> {
        let mut params = self.workspace_params();
        params.push(("pname", pname));
        params.push(("attachment_id", attachment_id));
        self.get_single(ResourceKind::PageAttachment, &params, None)
    }

    /// Fetch the current workspace's representation
    pub fn get_workspace(&self) -> Result<String, ClientError> {
        let params = self.workspace_params();
        self.get_single(ResourceKind::Workspace, &params, Some(PLAIN_TEXT))
    }

    /// Fetch one user's representation
    pub fn get_user(&self, user_id: &str) -> Result<String, ClientError> {
        self.get_single(ResourceKind::User, &[("user_id", user_id)], Some(PLAIN_TEXT))
    }

    /// List page names in the current workspace
    pub fn get_pages(&self) -> Result<Vec<String>, ClientError> {
        let params = self.workspace_params();
        self.get_list(ResourceKind::Pages, &params)
    }

    /// List the tags on one page
    pub fn get_pagetags(&self, pname: &str) -> Result<Vec<String>, ClientError> {
        let mut params = self.workspace_params();
        params.push(("pname", pname));
        self.get_list(ResourceKind::PageTags, &params)
    }

    /// List the attachments on one page
    pub fn get_page_attachments(&self, pname: &str) -> Result<Vec<String>, ClientError> {
        let mut params = self.workspace_params();
        params.push(("pname", pname));
        self.get_list(ResourceKind::PageAttachments, &params)
    }

    /// List the workspaces visible to the current credentials
    pub fn get_workspaces(&self) -> Result<Vec<String>, ClientError> {
        self.get_list(ResourceKind::Workspaces, &[])
    }

    /// List the tags in the current workspace
    pub fn get_workspacetags(&self) -> Result<Vec<String>, ClientError> {
        let params = self.workspace_params();
        self.get_list(ResourceKind::WorkspaceTags, &params)
    }

    /// List the attachments in the current workspace
    pub fn get_workspace_attachments(&self) -> Result<Vec<String>, ClientError> {
        let params = self.workspace_params();
        self.get_list(ResourceKind::WorkspaceAttachments, &params)
    }

    /// List the users of the current workspace
    pub fn get_workspace_users(&self) -> Result<Vec<String>, ClientError> {
        let params = self.workspace_params();
        self.get_list(ResourceKind::WorkspaceUsers, &params)
    }

    /// List all users known to the server
    pub fn get_users(&self) -> Result<Vec<String>, ClientError> {
        self.get_list(ResourceKind::Users, &[])
    }

    // ---- writes ----------------------------------------------------------

    /// Create or replace a page with wiki-markup content
    pub fn put_page(&self, pname: &str, content: &str) -> Result<String, ClientError> {
        let mut params = self.workspace_params();
        params.push(("pname", pname));
        let url = self.url(ResourceKind::Page, &params, None)?;
        let response = self.send(
            Method::Put,
            url,
            None,
            Some(WIKI_MARKUP.to_string()),
            Some(content.as_bytes().to_vec()),
        )?;
        self.classify_write(response).map(|response| response.body)
    }

    /// Tag a page
    pub fn put_pagetag(&self, pname: &str, tag: &str) -> Result<String, ClientError> {
        self.write_tag(Method::Put, ResourceKind::PageTag, Some(pname), tag)
    }

    /// Remove a tag from a page
    pub fn delete_pagetag(&self, pname: &str, tag: &str) -> Result<String, ClientError> {
        self.write_tag(Method::Delete, ResourceKind::PageTag, Some(pname), tag)
    }

    /// Tag the current workspace
    pub fn put_workspacetag(&self, tag: &str) -> Result<String, ClientError> {
        self.write_tag(Method::Put, ResourceKind::WorkspaceTag, None, tag)
    }

    /// Remove a tag from the current workspace
    pub fn delete_workspacetag(&self, tag: &str) -> Result<String, ClientError> {
        self.write_tag(Method::Delete, ResourceKind::WorkspaceTag, None, tag)
    }

    /// Upload an attachment to a page
    ///
    /// POSTs to the page's attachments collection with a
    /// `name=<attachment_id>` query parameter. On success the server
    /// names the stored attachment in the `Location` header; the decoded
    /// trailing identifier is returned.
    pub fn post_attachment(
        &self,
        pname: &str,
        attachment_id: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<String, ClientError> {
        let mut params = self.workspace_params();
        params.push(("pname", pname));
        let query = format!("name={}", urlencoding::encode(attachment_id));
        let url = self.url(ResourceKind::PageAttachments, &params, Some(&query))?;

        let response = self.send(
            Method::Post,
            url,
            None,
            Some(content_type.to_string()),
            Some(body),
        )?;
        let response = self.classify_write(response)?;

        response
            .location
            .as_deref()
            .and_then(attachment_id_from_location)
            .ok_or(ClientError::MissingLocation)
    }

    // ---- pipeline --------------------------------------------------------

    /// Route parameters from the session; an unset workspace is omitted
    /// so that workspace-scoped routes fail with a missing-parameter
    /// error instead of producing a bad path
    fn workspace_params(&self) -> Vec<(&str, &str)> {
        let mut params = Vec::new();
        if !self.session.workspace().is_empty() {
            params.push(("ws", self.session.workspace()));
        }
        params
    }

    fn url(
        &self,
        kind: ResourceKind,
        params: &[(&str, &str)],
        query: Option<&str>,
    ) -> Result<String, ClientError> {
        let path = resolve(kind, params)?;
        let base = self.session.server().trim_end_matches('/');
        Ok(match query {
            Some(query) => format!("{base}{path}?{query}"),
            None => format!("{base}{path}"),
        })
    }

    fn send(
        &self,
        method: Method,
        url: String,
        accept: Option<String>,
        content_type: Option<String>,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse, ClientError> {
        let request = HttpRequest {
            method,
            url,
            accept,
            content_type,
            body,
            username: self.session.username().to_string(),
            password: self.session.password().to_string(),
        };
        Ok(self.transport.send(&request)?)
    }

    fn get_single(
        &self,
        kind: ResourceKind,
        params: &[(&str, &str)],
        default_accept: Option<&str>,
    ) -> Result<String, ClientError> {
        let url = self.url(kind, params, None)?;
        let accept = self.accept_for(default_accept);
        let response = self.send(Method::Get, url, accept, None, None)?;

        match response.status {
            200 | 404 => Ok(response.body),
            status => Err(self.fail(status, response.body)),
        }
    }

    fn get_list(
        &self,
        kind: ResourceKind,
        params: &[(&str, &str)],
    ) -> Result<Vec<String>, ClientError> {
        let query = self.session.query_string();
        let url = self.url(kind, params, query.as_deref())?;
        let accept = self.accept_for(Some(PLAIN_TEXT));
        let response = self.send(Method::Get, url, accept, None, None)?;

        match response.status {
            200 => Ok(parse_list(&response.body)),
            404 => Ok(Vec::new()),
            status => Err(self.fail(status, response.body)),
        }
    }

    fn write_tag(
        &self,
        method: Method,
        kind: ResourceKind,
        pname: Option<&str>,
        tag: &str,
    ) -> Result<String, ClientError> {
        let mut params = self.workspace_params();
        if let Some(pname) = pname {
            params.push(("pname", pname));
        }
        params.push(("tag", tag));
        let url = self.url(kind, &params, None)?;
        let response = self.send(method, url, None, None, None)?;
        self.classify_write(response).map(|response| response.body)
    }

    /// 201 and 204 are the only success statuses for writes; a 200 from
    /// the server is a protocol violation and fails like any other code
    fn classify_write(&self, response: HttpResponse) -> Result<HttpResponse, ClientError> {
        match response.status {
            201 | 204 => Ok(response),
            status => Err(self.fail(status, response.body)),
        }
    }

    fn fail(&self, status: u16, body: String) -> ClientError {
        tracing::error!("request failed: {} - {}", status, truncate_for_log(&body));
        ClientError::RequestFailed { status, body }
    }

    /// Session override wins; otherwise the per-operation default
    fn accept_for(&self, default_accept: Option<&str>) -> Option<String> {
        self.session
            .accept()
            .or(default_accept)
            .map(str::to_string)
    }
}

/// The decoded attachment identifier from a `Location` header
fn attachment_id_from_location(location: &str) -> Option<String> {
    let (_, id) = location.rsplit_once("/attachments/")?;
    urlencoding::decode(id).ok().map(|decoded| decoded.into_owned())
}

/// Truncate a response body for error logging
fn truncate_for_log(body: &str) -> String {
    if body.chars().count() > MAX_LOG_BODY_LENGTH {
        let truncated: String = body.chars().take(MAX_LOG_BODY_LENGTH).collect();
        format!("{}... [truncated, {} bytes total]", truncated, body.len())
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod location_parsing {
        use super::*;

        #[test]
        fn decodes_the_trailing_identifier() {
            let id = attachment_id_from_location(
                "http://wiki.test/data/workspaces/dev/attachments/my%20file",
            );
            assert_eq!(id.as_deref(), Some("my file"));
        }

        #[test]
        fn takes_the_last_attachments_segment() {
            let id = attachment_id_from_location("/attachments/x/attachments/final%2Fcut");
            assert_eq!(id.as_deref(), Some("final/cut"));
        }

        #[test]
        fn rejects_locations_without_the_marker() {
            assert_eq!(attachment_id_from_location("/data/workspaces/dev"), None);
        }
    }

    #[test]
    fn truncation_reports_original_length() {
        let body = "x".repeat(300);
        let logged = truncate_for_log(&body);
        assert!(logged.starts_with(&"x".repeat(MAX_LOG_BODY_LENGTH)));
        assert!(logged.ends_with("[truncated, 300 bytes total]"));
    }
}
