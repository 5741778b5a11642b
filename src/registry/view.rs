//! Presentation values produced in render mode.

use std::fmt;

/// Icon shown at the start of a row; the terminal UI maps it to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Command,
    Post,
    Page,
    Plugin,
    InstalledPlugin,
    Search,
}

/// Status badge computed from entity state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Badge {
    Published,
    Draft,
    Private,
    Pending,
    Scheduled,
    /// Any other post status, capitalised for display.
    Status(String),
    Install,
    Activate,
    Active,
    Inactive,
    Installing,
    Activating,
    Deactivating,
    Failed,
}

impl Badge {
    /// Maps a raw WordPress post status to a badge.
    #[must_use]
    pub fn for_post_status(status: &str) -> Option<Self> {
        let status = status.trim();
        Some(match status {
            "" => return None,
            "publish" => Self::Published,
            "draft" | "auto-draft" => Self::Draft,
            "private" => Self::Private,
            "pending" => Self::Pending,
            "future" => Self::Scheduled,
            other => {
                let mut chars = other.chars();
                let first = chars.next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
                Self::Status(format!("{first}{}", chars.as_str()))
            }
        })
    }

    /// Badges that reflect a failure the user can retry.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Published => "Published",
            Self::Draft => "Draft",
            Self::Private => "Private",
            Self::Pending => "Pending",
            Self::Scheduled => "Scheduled",
            Self::Status(s) => s,
            Self::Install => "Install",
            Self::Activate => "Activate",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Installing => "Installing",
            Self::Activating => "Activating",
            Self::Deactivating => "Deactivating",
            Self::Failed => "Failed",
        };
        f.write_str(label)
    }
}

/// Display fragment for one result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub icon: Icon,
    pub title: String,
    pub badge: Option<Badge>,
    /// Short description of what Enter does.
    pub hint: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_statuses_map_to_badges() {
        assert_eq!(Badge::for_post_status("publish"), Some(Badge::Published));
        assert_eq!(Badge::for_post_status("draft"), Some(Badge::Draft));
        assert_eq!(Badge::for_post_status("private"), Some(Badge::Private));
        assert_eq!(Badge::for_post_status("future").map(|b| b.to_string()), Some("Scheduled".into()));
        assert_eq!(Badge::for_post_status("inherit").map(|b| b.to_string()), Some("Inherit".into()));
        assert_eq!(Badge::for_post_status("  "), None);
    }
}
