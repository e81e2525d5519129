//! Asset minification for JS and CSS files.
//!
//! Uses oxc for JavaScript and lightningcss for CSS.

use std::path::Path;

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;

/// Files the copy phase can minify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Minifiable {
    Css,
    JavaScript,
}

impl Minifiable {
    /// Classify by extension. Files already named `*.min.css` / `*.min.js`
    /// are left alone.
    pub fn from_path(path: &Path) -> Option<Self> {
        let stem = path.file_stem()?.to_str()?;
        if stem.ends_with(".min") {
            return None;
        }
        match path.extension()?.to_str()? {
            "css" => Some(Self::Css),
            "js" | "mjs" => Some(Self::JavaScript),
            _ => None,
        }
    }

    /// Minify `source`, or `None` if it does not parse.
    pub fn minify(self, source: &str) -> Option<String> {
        match self {
            Self::Css => minify_css(source),
            Self::JavaScript => minify_js(source),
        }
    }
}

/// Minify JavaScript source code.
pub fn minify_js(source: &str) -> Option<String> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, SourceType::mjs()).parse();
    if !ret.errors.is_empty() {
        return None;
    }
    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);
    let code = Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code;
    Some(code)
}

/// Minify CSS source code.
pub fn minify_css(source: &str) -> Option<String> {
    let stylesheet = StyleSheet::parse(source, ParserOptions::default()).ok()?;
    let result = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..PrinterOptions::default()
        })
        .ok()?;
    Some(result.code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(Minifiable::from_path(Path::new("a/site.css")), Some(Minifiable::Css));
        assert_eq!(Minifiable::from_path(Path::new("app.js")), Some(Minifiable::JavaScript));
        assert_eq!(Minifiable::from_path(Path::new("vendor.min.js")), None);
        assert_eq!(Minifiable::from_path(Path::new("avt.jpg")), None);
        assert_eq!(Minifiable::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn test_minify_css() {
        let css = minify_css("body {\n  color: #ffffff;\n}\n").unwrap();
        assert!(!css.contains('\n'));
        assert!(css.starts_with("body{"));
    }

    #[test]
    fn test_minify_js() {
        let js = minify_js("// note\nexport function add(first, second) {\n  return first + second;\n}\n")
            .unwrap();
        assert!(!js.contains("// note"));
        assert!(js.len() < 60);
    }

    #[test]
    fn test_invalid_js_is_none() {
        assert!(minify_js("function (").is_none());
    }
}
