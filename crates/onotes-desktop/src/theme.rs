//! Theme configuration for the desktop app

use std::sync::OnceLock;

/// Cached system dark mode preference (detected once at startup)
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    /// Follow the operating system preference
    #[must_use]
    pub fn system() -> Self {
        if *SYSTEM_DARK_MODE.get_or_init(detect_system_dark_mode) {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Value for the root `data-theme` attribute
    #[must_use]
    pub const fn attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode() -> bool {
    match std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
    {
        Ok(output) => String::from_utf8_lossy(&output.stdout)
            .trim()
            .eq_ignore_ascii_case("dark"),
        Err(e) => {
            tracing::warn!("Failed to detect system theme: {}", e);
            false
        }
    }
}

#[cfg(not(target_os = "macos"))]
fn detect_system_dark_mode() -> bool {
    let is_dark = std::env::var("GTK_THEME")
        .map(|theme| theme.to_lowercase().contains("dark"))
        .unwrap_or(false);
    tracing::debug!(
        "System theme: {}",
        if is_dark { "dark" } else { "light" }
    );
    is_dark
}

/// Color palette for the application
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_app: &'static str,
    pub bg_panel: &'static str,
    pub bg_sidebar: &'static str,
    pub bg_hover: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub error: &'static str,
    pub success: &'static str,
}

pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_app: "#f4f4f5",
    bg_panel: "#ffffff",
    bg_sidebar: "#fafafa",
    bg_hover: "#ececee",
    text_primary: "#18181b",
    text_muted: "#71717a",
    border: "#e4e4e7",
    accent: "#18181b",
    accent_text: "#fafafa",
    error: "#dc2626",
    success: "#16a34a",
};

pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_app: "#09090b",
    bg_panel: "#18181b",
    bg_sidebar: "#111113",
    bg_hover: "#27272a",
    text_primary: "#fafafa",
    text_muted: "#a1a1aa",
    border: "#27272a",
    accent: "#fafafa",
    accent_text: "#18181b",
    error: "#f87171",
    success: "#4ade80",
};
