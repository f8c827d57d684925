//! `[build]` section configuration.
//!
//! Contains the directory layout, minification switch and the targets of
//! the critical-CSS / lazy-load substitutions.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// `[build]` section in slidedeck.toml - asset pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// slides = "slides"                 # Slide pages (*.html)
/// output = "dist"                   # Output directory
/// assets = ["Recursos"]            # Copied verbatim, with css/ and js/
/// minify = true
///
/// [build.inline]
/// stylesheet = "../css/styles.css"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Slide pages directory.
    #[serde(default = "defaults::build::slides")]
    #[educe(Default = defaults::build::slides())]
    pub slides: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Stylesheet directory.
    #[serde(default = "defaults::build::css")]
    #[educe(Default = defaults::build::css())]
    pub css: PathBuf,

    /// Script directory.
    #[serde(default = "defaults::build::js")]
    #[educe(Default = defaults::build::js())]
    pub js: PathBuf,

    /// Landing page, minified into the output root.
    #[serde(default = "defaults::build::index")]
    #[educe(Default = defaults::build::index())]
    pub index: PathBuf,

    /// Extra static directories copied into the output root.
    #[serde(default = "defaults::build::assets")]
    #[educe(Default = defaults::build::assets())]
    pub assets: Vec<PathBuf>,

    /// Minify HTML output.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub minify: bool,

    /// File replacing the built-in critical CSS block.
    #[serde(default = "defaults::build::critical_css")]
    #[educe(Default = defaults::build::critical_css())]
    pub critical_css: Option<PathBuf>,

    /// Tags rewritten in every slide page.
    #[serde(default)]
    pub inline: InlineConfig,
}

impl BuildConfig {
    /// Directories copied verbatim: the asset directories, then css, then js.
    pub fn static_dirs(&self) -> Vec<&Path> {
        self.assets
            .iter()
            .chain([&self.css, &self.js])
            .map(PathBuf::as_path)
            .collect()
    }
}

/// `[build.inline]` section - hrefs matched by the slide substitutions.
///
/// Each entry is matched literally against the tag the slide pages use,
/// e.g. `<link rel="stylesheet" href="../css/styles.css">`.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct InlineConfig {
    /// Primary stylesheet, replaced by inlined critical CSS plus a preload.
    #[serde(default = "defaults::build::inline::stylesheet")]
    #[educe(Default = defaults::build::inline::stylesheet())]
    pub stylesheet: String,

    /// Secondary stylesheets, replaced by preload-then-swap links.
    #[serde(default = "defaults::build::inline::lazy_stylesheets")]
    #[educe(Default = defaults::build::inline::lazy_stylesheets())]
    pub lazy_stylesheets: Vec<String>,

    /// Scripts that get a `defer` attribute.
    #[serde(default = "defaults::build::inline::defer_scripts")]
    #[educe(Default = defaults::build::inline::defer_scripts())]
    pub defer_scripts: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_build_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.build.slides, PathBuf::from("slides"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.build.index, PathBuf::from("index.html"));
        assert_eq!(
            config.build.static_dirs(),
            vec![
                Path::new("Recursos"),
                Path::new("css"),
                Path::new("js")
            ]
        );
        assert!(config.build.minify);
        assert!(config.build.critical_css.is_none());
        assert_eq!(config.build.inline.stylesheet, "../css/styles.css");
        assert_eq!(config.build.inline.lazy_stylesheets.len(), 2);
        assert_eq!(
            config.build.inline.defer_scripts,
            vec!["../js/slide-navigation.js"]
        );
    }

    #[test]
    fn test_build_config_overrides() {
        let config = r#"
            [build]
            output = "public"
            assets = []
            css = "styles"
            minify = false

            [build.inline]
            lazy_stylesheets = []
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(
            config.build.static_dirs(),
            vec![Path::new("styles"), Path::new("js")]
        );
        assert!(!config.build.minify);
        assert!(config.build.inline.lazy_stylesheets.is_empty());
        assert_eq!(config.build.inline.stylesheet, "../css/styles.css");
    }

    #[test]
    fn test_unknown_field_rejection() {
        let config = r#"
            [build]
            tailwind = true
        "#;
        assert!(toml::from_str::<SiteConfig>(config).is_err());
    }
}
