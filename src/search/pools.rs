//! Candidate pools and the entries they flatten into.

use crate::domain::{Category, Command, EntityKey, InstalledPlugin, Page, Plugin, Post, SearchResultItem};

/// One row of the composed result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultEntry {
    Command(Command),
    Item(SearchResultItem),
}

impl ResultEntry {
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Command(_) => Category::Commands,
            Self::Item(item) => item.category(),
        }
    }

    /// Deduplication key within the category.
    #[must_use]
    pub fn key(&self) -> Option<EntityKey> {
        match self {
            Self::Command(command) => Some(EntityKey::Slug(command.id.to_string())),
            Self::Item(item) => item.key(),
        }
    }
}

/// Already-filtered candidates per category, each pre-ranked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pools {
    pub commands: Vec<Command>,
    pub posts: Vec<Post>,
    pub pages: Vec<Page>,
    pub plugins: Vec<Plugin>,
    pub installed: Vec<InstalledPlugin>,
}

impl Pools {
    /// Entries of one category, in pool order.
    #[must_use]
    pub fn entries(&self, category: Category) -> Vec<ResultEntry> {
        match category {
            Category::Commands => self.commands.iter().cloned().map(ResultEntry::Command).collect(),
            Category::Posts => self
                .posts
                .iter()
                .cloned()
                .map(|p| ResultEntry::Item(SearchResultItem::Post(p)))
                .collect(),
            Category::Pages => self
                .pages
                .iter()
                .cloned()
                .map(|p| ResultEntry::Item(SearchResultItem::Page(p)))
                .collect(),
            Category::Plugins => self
                .plugins
                .iter()
                .cloned()
                .map(|p| ResultEntry::Item(SearchResultItem::Plugin(p)))
                .collect(),
            Category::InstalledPlugins => self
                .installed
                .iter()
                .cloned()
                .map(|p| ResultEntry::Item(SearchResultItem::InstalledPlugin(p)))
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::Commands => self.commands.len(),
            Category::Posts => self.posts.len(),
            Category::Pages => self.pages.len(),
            Category::Plugins => self.plugins.len(),
            Category::InstalledPlugins => self.installed.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        Category::ALL.into_iter().all(|c| self.len(c) == 0)
    }

    /// Drops the pools that come from remote searches.
    pub fn clear_remote(&mut self) {
        self.posts.clear();
        self.pages.clear();
        self.plugins.clear();
    }
}

/// Category precedence used when merging pools.
///
/// Configurable: the order is read from the `category_order` option. Names
/// that are not categories are ignored and any category left out is appended
/// in default order, so no pool is ever hidden by a typo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOrder(Vec<Category>);

impl CategoryOrder {
    /// Parses a comma-separated list such as `"posts,commands"`.
    ///
    /// # Example
    ///
    /// ```
    /// use wp_palette::domain::Category;
    /// use wp_palette::search::CategoryOrder;
    ///
    /// let order = CategoryOrder::parse("plugins, posts, bogus");
    /// assert_eq!(order.as_slice()[..3], [Category::Plugins, Category::Posts, Category::Commands]);
    /// assert_eq!(order.as_slice().len(), 5);
    /// ```
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        let mut order: Vec<Category> = Vec::with_capacity(Category::ALL.len());
        for category in spec.split(',').filter_map(Category::parse) {
            if !order.contains(&category) {
                order.push(category);
            }
        }
        for category in Category::ALL {
            if !order.contains(&category) {
                order.push(category);
            }
        }
        Self(order)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Category] {
        &self.0
    }
}

impl Default for CategoryOrder {
    fn default() -> Self {
        Self(Category::ALL.to_vec())
    }
}
