//! Search result entities.
//!
//! Entities are created per query from provider output, replace the previous
//! result set wholesale, and are dropped when the query changes or the bar
//! closes. Identifiers are optional on purpose: a record missing its id or
//! slug still decodes, and the renderers fall back instead of failing the
//! whole list.

use std::fmt;

/// Result categories, in the order used when no other order is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Commands,
    Posts,
    Pages,
    Plugins,
    InstalledPlugins,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::Commands,
        Self::Posts,
        Self::Pages,
        Self::Plugins,
        Self::InstalledPlugins,
    ];

    /// Configuration name of the category (`installed-plugins`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Commands => "commands",
            Self::Posts => "posts",
            Self::Pages => "pages",
            Self::Plugins => "plugins",
            Self::InstalledPlugins => "installed-plugins",
        }
    }

    /// Heading shown above the group in the result list.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Commands => "Commands",
            Self::Posts => "Posts",
            Self::Pages => "Pages",
            Self::Plugins => "Plugin Directory",
            Self::InstalledPlugins => "Installed Plugins",
        }
    }

    /// Parses a configuration name, accepting `_` in place of `-`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|c| c.name() == normalized)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of an entity inside its category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityKey {
    Id(u64),
    Slug(String),
}

/// A post or page row as returned by `wp post list`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Post {
    pub id: Option<u64>,
    pub title: Option<String>,
    /// Raw WordPress status (`publish`, `draft`, `private`, ...).
    pub status: Option<String>,
}

/// Pages share the post shape; they differ only in the variant that wraps them.
pub type Page = Post;

/// A plugin from the plugin directory search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Plugin {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub installed: bool,
    pub active: bool,
}

/// A plugin already installed on the site.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InstalledPlugin {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub active: bool,
}

impl InstalledPlugin {
    /// Display name, preferring the plugin title over the slug.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .or(self.slug.as_deref())
    }
}

/// Tagged union over every searchable entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResultItem {
    Post(Post),
    Page(Page),
    Plugin(Plugin),
    InstalledPlugin(InstalledPlugin),
}

impl SearchResultItem {
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Post(_) => Category::Posts,
            Self::Page(_) => Category::Pages,
            Self::Plugin(_) => Category::Plugins,
            Self::InstalledPlugin(_) => Category::InstalledPlugins,
        }
    }

    /// Identity used for deduplication; `None` for malformed records.
    #[must_use]
    pub fn key(&self) -> Option<EntityKey> {
        match self {
            Self::Post(post) | Self::Page(post) => post.id.map(EntityKey::Id),
            Self::Plugin(Plugin { slug, .. }) | Self::InstalledPlugin(InstalledPlugin { slug, .. }) => slug
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(|s| EntityKey::Slug(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.name()), Some(category));
        }
        assert_eq!(Category::parse(" Installed_Plugins "), Some(Category::InstalledPlugins));
        assert_eq!(Category::parse("themes"), None);
    }

    #[test]
    fn empty_slug_has_no_key() {
        let item = SearchResultItem::Plugin(Plugin {
            slug: Some(String::new()),
            ..Plugin::default()
        });
        assert_eq!(item.key(), None);
    }

    #[test]
    fn installed_plugin_prefers_title() {
        let plugin = InstalledPlugin {
            slug: Some("akismet".into()),
            title: Some("Akismet Anti-spam".into()),
            active: true,
        };
        assert_eq!(plugin.display_name(), Some("Akismet Anti-spam"));

        let untitled = InstalledPlugin { title: Some(" ".into()), ..plugin };
        assert_eq!(untitled.display_name(), Some("akismet"));
    }
}
