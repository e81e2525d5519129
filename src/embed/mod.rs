//! Embedded static resources.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `asset` - Embedded asset types with content-hash filenames
//! - `page` - Page stylesheet and runtime bootstrap (minified by `build.rs`)
//! - `init` - `starfolio.toml` written by `starfolio init`
//!
//! # Usage
//!
//! ```ignore
//! use embed::page::{BOOTSTRAP_JS, PAGE_CSS, RuntimeVars};
//!
//! let css_name = PAGE_CSS.write(&NoVars, &output_dir)?;
//! let js = BOOTSTRAP_JS.render(&RuntimeVars::new("pkg/starfolio.js"));
//! ```

mod asset;
mod template;

pub use asset::EmbeddedAsset;
pub use template::{NoVars, Template, TemplateVars};

pub mod page {
    use super::{EmbeddedAsset, NoVars, Template, TemplateVars};
    use crate::utils::html;

    /// Page stylesheet, emitted as `starfolio.<hash>.css`.
    pub const PAGE_CSS: EmbeddedAsset<NoVars> = EmbeddedAsset::new(
        "starfolio",
        "css",
        include_str!(concat!(env!("OUT_DIR"), "/page.min.css")),
    );

    /// Variables for bootstrap.js.
    pub struct RuntimeVars<'a> {
        pub module: &'a str,
    }

    impl<'a> RuntimeVars<'a> {
        pub const fn new(module: &'a str) -> Self {
            Self { module }
        }

        /// ES module specifier for `module`.
        ///
        /// Bare paths (`pkg/starfolio.js`) are not valid import specifiers,
        /// so they are made page-relative.
        pub fn specifier(&self) -> String {
            let module = self.module.trim();
            let is_qualified = module.starts_with('/')
                || module.starts_with("./")
                || module.starts_with("../")
                || module.contains("://");
            if is_qualified {
                module.to_string()
            } else {
                format!("./{module}")
            }
        }
    }

    impl TemplateVars for RuntimeVars<'_> {
        fn apply(&self, content: &str) -> String {
            content.replace(
                "__STARFOLIO_RUNTIME__",
                &html::escape_script_str(&self.specifier()),
            )
        }
    }

    /// Inline module script that loads the wasm runtime and calls `mount()`.
    pub const BOOTSTRAP_JS: Template<RuntimeVars<'static>> =
        Template::new(include_str!(concat!(env!("OUT_DIR"), "/bootstrap.min.js")));
}

pub mod init {
    use super::{Template, TemplateVars};

    /// Variables for the `starfolio.toml` template.
    pub struct InitVars {
        pub version: &'static str,
    }

    impl Default for InitVars {
        fn default() -> Self {
            Self {
                version: env!("CARGO_PKG_VERSION"),
            }
        }
    }

    impl TemplateVars for InitVars {
        fn apply(&self, content: &str) -> String {
            content.replace("__VERSION__", self.version)
        }
    }

    /// Commented default configuration.
    pub const CONFIG_TOML: Template<InitVars> = Template::new(include_str!("starfolio.toml"));
}

#[cfg(test)]
mod tests {
    use super::page::{BOOTSTRAP_JS, PAGE_CSS, RuntimeVars};
    use super::*;

    #[test]
    fn test_runtime_specifier() {
        assert_eq!(RuntimeVars::new("pkg/starfolio.js").specifier(), "./pkg/starfolio.js");
        assert_eq!(RuntimeVars::new("/pkg/app.js").specifier(), "/pkg/app.js");
        assert_eq!(RuntimeVars::new("../app.js").specifier(), "../app.js");
        assert_eq!(
            RuntimeVars::new("https://cdn.example.com/app.js").specifier(),
            "https://cdn.example.com/app.js"
        );
    }

    #[test]
    fn test_bootstrap_injects_module() {
        let js = BOOTSTRAP_JS.render(&RuntimeVars::new("pkg/starfolio.js"));
        assert!(js.contains("./pkg/starfolio.js"));
        assert!(!js.contains("__STARFOLIO_RUNTIME__"));
        assert!(js.contains("mount"));
    }

    #[test]
    fn test_bootstrap_escapes_module() {
        let js = BOOTSTRAP_JS.render(&RuntimeVars::new("x\"</script><script>alert(1)//.js"));
        assert!(!js.contains("</script>"));
        assert!(js.contains(r#"./x\"\u003c/script>"#));
    }

    #[test]
    fn test_page_css_is_minified() {
        let css = PAGE_CSS.render(&NoVars);
        assert!(css.contains(".star"));
        assert!(css.contains("twinkle"));
        assert!(!css.contains("\n\n"));
        assert_eq!(PAGE_CSS.extension(), "css");
    }

    #[test]
    fn test_init_template_version() {
        let toml = init::CONFIG_TOML.render(&init::InitVars::default());
        assert!(toml.contains(env!("CARGO_PKG_VERSION")));
        assert!(!toml.contains("__VERSION__"));
    }
}
