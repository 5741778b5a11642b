//! Read-only host context handed to renderers.
//!
//! The host context carries the WordPress admin base URL and the capability
//! flags of the current user. It is built once from configuration and never
//! mutated by the palette; renderers only read it to build navigation targets.

use std::collections::BTreeSet;

/// Admin URL used when none is configured.
pub const DEFAULT_ADMIN_URL: &str = "http://localhost/wp-admin/";

/// Capabilities assumed when none are configured.
pub const DEFAULT_CAPABILITIES: &[&str] = &["edit_posts", "install_plugins", "activate_plugins"];

/// Base admin URL plus capability flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostContext {
    admin_url: String,
    capabilities: BTreeSet<String>,
}

impl HostContext {
    /// Creates a context, normalising `admin_url` so it always ends with `/`.
    ///
    /// # Example
    ///
    /// ```
    /// use wp_palette::domain::HostContext;
    ///
    /// let ctx = HostContext::new("https://example.com/wp-admin", ["edit_posts"]);
    /// assert_eq!(ctx.admin_url(), "https://example.com/wp-admin/");
    /// assert!(ctx.can("edit_posts"));
    /// assert!(!ctx.can("install_plugins"));
    /// ```
    #[must_use]
    pub fn new<I, S>(admin_url: &str, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let trimmed = admin_url.trim();
        let admin_url = if trimmed.is_empty() {
            DEFAULT_ADMIN_URL.to_string()
        } else if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{trimmed}/")
        };

        Self {
            admin_url,
            capabilities: capabilities.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn admin_url(&self) -> &str {
        &self.admin_url
    }

    /// Returns whether the host granted the named capability.
    #[must_use]
    pub fn can(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }

    /// Joins an admin-relative path (e.g. `plugins.php`) onto the base URL.
    #[must_use]
    pub fn admin_path(&self, path: &str) -> String {
        format!("{}{}", self.admin_url, path.trim_start_matches('/'))
    }

    /// Edit screen for a post or page.
    #[must_use]
    pub fn edit_post_url(&self, id: u64) -> String {
        self.admin_path(&format!("post.php?post={id}&action=edit"))
    }

    /// Post list filtered by a search term.
    #[must_use]
    pub fn search_posts_url(&self, query: &str) -> String {
        self.admin_path(&format!("edit.php?s={}", urlencoding::encode(query)))
    }

    /// Page list filtered by a search term.
    #[must_use]
    pub fn search_pages_url(&self, query: &str) -> String {
        self.admin_path(&format!(
            "edit.php?post_type=page&s={}",
            urlencoding::encode(query)
        ))
    }
}

impl Default for HostContext {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_URL, DEFAULT_CAPABILITIES.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_url_contains_post_id() {
        let ctx = HostContext::new("https://site.test/wp-admin/", Vec::<String>::new());
        assert_eq!(
            ctx.edit_post_url(42),
            "https://site.test/wp-admin/post.php?post=42&action=edit"
        );
    }

    #[test]
    fn search_urls_encode_the_query() {
        let ctx = HostContext::default();
        assert_eq!(
            ctx.search_posts_url("hello world&co"),
            "http://localhost/wp-admin/edit.php?s=hello%20world%26co"
        );
        assert_eq!(
            ctx.search_pages_url("about"),
            "http://localhost/wp-admin/edit.php?post_type=page&s=about"
        );
    }

    #[test]
    fn blank_admin_url_falls_back_to_default() {
        let ctx = HostContext::new("   ", ["edit_posts"]);
        assert_eq!(ctx.admin_url(), DEFAULT_ADMIN_URL);
        assert_eq!(ctx.admin_path("/plugins.php"), "http://localhost/wp-admin/plugins.php");
    }
}
