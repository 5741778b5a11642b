//! Static palette commands.
//!
//! Commands are the always-available entries shown when the query is empty.
//! They are declared once in [`builtin_commands`], grouped by category in the
//! order they should appear, and never mutated afterwards.

/// What a command does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    /// Navigate to an admin-relative path such as `post-new.php`.
    Navigate(&'static str),
    /// Re-read the installed plugin list from the site.
    RefreshPlugins,
}

/// A static, always-available palette action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Stable identifier, unique within the command list.
    pub id: &'static str,
    pub title: &'static str,
    /// Extra search terms matched alongside the title, in priority order.
    pub keywords: &'static [&'static str],
    /// Display group; the declared list is already grouped by it.
    pub category: &'static str,
    pub action: CommandAction,
}

impl Command {
    const fn navigate(
        id: &'static str,
        title: &'static str,
        keywords: &'static [&'static str],
        category: &'static str,
        path: &'static str,
    ) -> Self {
        Self {
            id,
            title,
            keywords,
            category,
            action: CommandAction::Navigate(path),
        }
    }
}

const BUILTIN: &[Command] = &[
    Command::navigate("dashboard", "Dashboard", &["home", "admin"], "Navigation", "index.php"),
    Command::navigate("updates", "Updates", &["upgrade", "core"], "Navigation", "update-core.php"),
    Command::navigate("media", "Media Library", &["images", "uploads", "files"], "Navigation", "upload.php"),
    Command::navigate("comments", "Comments", &["moderation", "discussion"], "Navigation", "edit-comments.php"),
    Command::navigate("posts", "All Posts", &["articles", "blog"], "Content", "edit.php"),
    Command::navigate("new-post", "Add New Post", &["create", "write", "article"], "Content", "post-new.php"),
    Command::navigate("pages", "All Pages", &["site"], "Content", "edit.php?post_type=page"),
    Command::navigate("new-page", "Add New Page", &["create"], "Content", "post-new.php?post_type=page"),
    Command::navigate("plugins", "Installed Plugins", &["extensions", "addons"], "Plugins", "plugins.php"),
    Command::navigate("new-plugin", "Add New Plugin", &["install", "directory"], "Plugins", "plugin-install.php"),
    Command {
        id: "refresh-plugins",
        title: "Refresh Plugin List",
        keywords: &["reload", "sync"],
        category: "Plugins",
        action: CommandAction::RefreshPlugins,
    },
    Command::navigate("themes", "Themes", &["appearance", "design"], "Appearance", "themes.php"),
    Command::navigate("customize", "Customize", &["customizer", "appearance"], "Appearance", "customize.php"),
    Command::navigate("menus", "Menus", &["navigation", "appearance"], "Appearance", "nav-menus.php"),
    Command::navigate("users", "All Users", &["accounts", "people"], "Users", "users.php"),
    Command::navigate("profile", "Profile", &["account", "me"], "Users", "profile.php"),
    Command::navigate("settings-general", "General Settings", &["options", "site title"], "Settings", "options-general.php"),
    Command::navigate("settings-reading", "Reading Settings", &["homepage", "front page"], "Settings", "options-reading.php"),
    Command::navigate("settings-permalinks", "Permalinks", &["urls", "rewrite", "slug"], "Settings", "options-permalink.php"),
    Command::navigate("tools", "Tools", &["import", "export"], "Tools", "tools.php"),
    Command::navigate("site-health", "Site Health", &["status", "debug"], "Tools", "site-health.php"),
];

/// Returns the static command list in declared order.
#[must_use]
pub fn builtin_commands() -> Vec<Command> {
    BUILTIN.to_vec()
}
