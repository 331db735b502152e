//! Execution context for cleanup routines.

/// Per-invocation settings shared by all cleanup routines.
#[derive(Debug, Clone)]
pub struct Context {
    /// Remote OS user whose home-directory files are removed.
    pub os_user: String,
    /// Raw `notebook_multiple_clusters` flag; "true" enables Livy teardown.
    pub multiple_clusters: Option<String>,
}

impl Context {
    /// Create a context for the given remote user.
    pub fn new(os_user: impl Into<String>) -> Self {
        Self {
            os_user: os_user.into(),
            multiple_clusters: None,
        }
    }

    /// Set the multiple-clusters flag value.
    pub fn multiple_clusters(mut self, value: Option<String>) -> Self {
        self.multiple_clusters = value;
        self
    }

    /// Whether the attached Livy job server should also be torn down.
    pub fn multiple_clusters_enabled(&self) -> bool {
        self.multiple_clusters.as_deref() == Some("true")
    }

    /// Absolute path under the remote user's home directory.
    pub fn home_path(&self, rest: &str) -> String {
        format!("/home/{}/{}", self.os_user, rest)
    }
}
