//! Module for shared constants used across the codebase

pub mod defaults {
    /// Default Caesar shift
    pub const CAESAR_SHIFT: i64 = 3;

    /// Default indentation used when pretty printing JSON
    pub const JSON_INDENT: u8 = 2;

    /// Default width of a tab when expanding it to spaces
    pub const TAB_WIDTH: u8 = 4;

    /// Default replacement for spaces
    pub const SPACE_REPLACEMENT: &str = "_";

    /// Default average number of words between two random insertions
    pub const CURSE_EVERY: u32 = 3;
}

pub mod config {
    /// Name of the main configuration file
    pub const DEFAULT_CONF_FILE: &str = "textkit.toml";

    /// Default time format used to stamp generated files
    pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

pub mod sitemap {
    /// Namespace of the sitemap 0.9 schema
    pub const XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

    /// Default output path of the generated sitemap
    pub const DEFAULT_OUTPUT: &str = "public/sitemap.xml";

    /// Default base URL of the site
    pub const DEFAULT_BASE_URL: &str = "https://textkit.example.com";

    /// Path prefix for tool pages
    pub const TOOLS_PREFIX: &str = "tools";

    /// Path prefix for blog posts
    pub const BLOG_PREFIX: &str = "blog";

    /// Static sections always present in the sitemap
    pub const SECTIONS: [&str; 2] = ["blog", "roadmap"];
}
