//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn slides() -> PathBuf {
        "slides".into()
    }

    pub fn output() -> PathBuf {
        "dist".into()
    }

    pub fn css() -> PathBuf {
        "css".into()
    }

    pub fn js() -> PathBuf {
        "js".into()
    }

    pub fn index() -> PathBuf {
        "index.html".into()
    }

    pub fn assets() -> Vec<PathBuf> {
        vec!["Recursos".into()]
    }

    pub fn critical_css() -> Option<PathBuf> {
        None
    }

    pub mod inline {
        pub fn stylesheet() -> String {
            "../css/styles.css".into()
        }

        pub fn lazy_stylesheets() -> Vec<String> {
            vec!["../css/animations.css".into(), "../css/components.css".into()]
        }

        pub fn defer_scripts() -> Vec<String> {
            vec!["../js/slide-navigation.js".into()]
        }
    }
}

// ============================================================================
// [nav] Section Defaults
// ============================================================================

pub mod nav {
    pub fn total() -> u32 {
        4
    }

    pub fn slides() -> Option<Vec<u32>> {
        None
    }

    pub fn fallback() -> u32 {
        1
    }

    pub fn swipe_threshold() -> f64 {
        50.0
    }

    pub fn transition_ms() -> u64 {
        300
    }
}
