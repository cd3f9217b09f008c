//! Compile-time settings shared by the loaders, stores and page chrome.

/// Relative URL of the artwork list.
pub const GALLERY_PATH: &str = "gallery.json";

/// Relative URL of the content translation table.
pub const TRANSLATIONS_PATH: &str = "translation.json";

/// Durable storage key holding `"light"` or `"dark"`.
pub const THEME_KEY: &str = "theme";

/// Durable storage key holding `"en"` or `"ar"`.
pub const LANGUAGE_KEY: &str = "language";

/// Vertical scroll offset after which the header switches to its compact look.
pub const SCROLL_THRESHOLD: f64 = 50.0;

// Body / root classes
pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const ACTIVE_CLASS: &str = "active";
