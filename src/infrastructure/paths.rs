//! Path helpers for the Zellij sandbox.

use std::path::PathBuf;

/// Directory for trace files: `/host/.local/share/zellij/wp-palette`.
///
/// In Zellij's plugin environment `/host` points to the cwd of the last
/// focused terminal, or the folder where Zellij was started, so this usually
/// resolves to `~/.local/share/zellij/wp-palette`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("wp-palette")
}

/// Maps `~` paths from the configuration onto the sandbox's `/host` mount.
///
/// # Examples
///
/// ```
/// use wp_palette::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/palette.toml"), "/etc/palette.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
