//! Session configuration for the resource client

/// Configuration for one logical session against a wiki server
///
/// Nothing is validated at set time; an unset workspace surfaces as a
/// route error when a workspace-scoped operation is attempted. List
/// modifiers apply only to list-returning reads and are interpolated
/// verbatim — escaping query values is the caller's responsibility.
#[derive(Debug, Clone, Default)]
pub struct Session {
    server: String,
    username: String,
    password: String,
    workspace: String,
    accept: Option<String>,
    filter: Option<String>,
    query: Option<String>,
    order: Option<String>,
    count: Option<u32>,
}

impl Session {
    /// Create a session for the given server base URL
    ///
    /// A trailing slash on the base URL is tolerated.
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            ..Self::default()
        }
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn set_server(&mut self, server: impl Into<String>) {
        self.server = server.into();
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Set the Basic authentication credentials carried on every request
    pub fn set_credentials(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.username = username.into();
        self.password = password.into();
    }

    pub fn workspace(&self) -> &str {
        &self.workspace
    }

    /// Set the workspace scoping subsequent operations
    pub fn set_workspace(&mut self, workspace: impl Into<String>) {
        self.workspace = workspace.into();
    }

    pub fn accept(&self) -> Option<&str> {
        self.accept.as_deref()
    }

    /// Override the `Accept` header for reads; `None` restores the
    /// per-operation defaults
    pub fn set_accept(&mut self, accept: Option<String>) {
        self.accept = accept;
    }

    /// Restrict list reads to entries matching the server-side filter
    pub fn set_filter(&mut self, filter: Option<String>) {
        self.filter = filter;
    }

    /// Free-text search applied to list reads
    pub fn set_query(&mut self, query: Option<String>) {
        self.query = query;
    }

    /// Ordering applied to list reads
    pub fn set_order(&mut self, order: Option<String>) {
        self.order = order;
    }

    /// Cap the number of entries returned by list reads
    pub fn set_count(&mut self, count: Option<u32>) {
        self.count = count;
    }

    /// The query string for list reads, if any modifier is set
    ///
    /// Modifiers join with `;` in the fixed order
    /// `filter`, `query`, `order`, `count`.
    pub fn query_string(&self) -> Option<String> {
        let mut parts = Vec::new();

        if let Some(filter) = &self.filter {
            parts.push(format!("filter={filter}"));
        }
        if let Some(query) = &self.query {
            parts.push(format!("query={query}"));
        }
        if let Some(order) = &self.order {
            parts.push(format!("order={order}"));
        }
        if let Some(count) = self.count {
            parts.push(format!("count={count}"));
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(";"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_modifiers_means_no_query_string() {
        let session = Session::new("http://wiki.test");
        assert_eq!(session.query_string(), None);
    }

    #[test]
    fn modifiers_join_in_fixed_order() {
        let mut session = Session::new("http://wiki.test");
        session.set_count(Some(20));
        session.set_filter(Some("recent changes".to_string()));
        session.set_order(Some("newest".to_string()));

        assert_eq!(
            session.query_string().unwrap(),
            "filter=recent changes;order=newest;count=20"
        );
    }

    #[test]
    fn free_text_query_is_interpolated_verbatim() {
        let mut session = Session::new("http://wiki.test");
        session.set_query(Some("tag:welcome".to_string()));
        assert_eq!(session.query_string().unwrap(), "query=tag:welcome");
    }

    #[test]
    fn clearing_a_modifier_removes_it() {
        let mut session = Session::new("http://wiki.test");
        session.set_filter(Some("x".to_string()));
        session.set_filter(None);
        assert_eq!(session.query_string(), None);
    }

    #[test]
    fn credentials_default_to_empty_strings() {
        let session = Session::new("http://wiki.test");
        assert_eq!(session.username(), "");
        assert_eq!(session.password(), "");
    }
}
