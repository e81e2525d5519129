//! Build script for minifying the embedded stylesheet and runtime bootstrap.

use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use oxc::allocator::Allocator;
use oxc::codegen::{Codegen, CodegenOptions, CommentOptions};
use oxc::mangler::MangleOptions;
use oxc::minifier::{CompressOptions, Minifier, MinifierOptions};
use oxc::parser::Parser;
use oxc::span::SourceType;
use std::fs;
use std::path::Path;

const RUNTIME_PLACEHOLDER: &str = "__STARFOLIO_RUNTIME__";

fn main() {
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir);

    minify_css_file("src/embed/page.css", &out_path.join("page.min.css"));
    minify_bootstrap_file("src/embed/bootstrap.js", &out_path.join("bootstrap.min.js"));

    println!("cargo:rerun-if-changed=src/embed/page.css");
    println!("cargo:rerun-if-changed=src/embed/bootstrap.js");
}

fn minify_js(source: &str) -> String {
    let allocator = Allocator::default();
    let source_type = SourceType::mjs();

    let ret = Parser::new(&allocator, source, source_type).parse();
    assert!(ret.errors.is_empty(), "Parse errors: {:?}", ret.errors);

    let mut program = ret.program;
    let options = MinifierOptions {
        mangle: Some(MangleOptions::default()),
        compress: Some(CompressOptions::smallest()),
    };
    let ret = Minifier::new(options).minify(&allocator, &mut program);

    Codegen::new()
        .with_options(CodegenOptions {
            minify: true,
            comments: CommentOptions::disabled(),
            ..CodegenOptions::default()
        })
        .with_scoping(ret.scoping)
        .build(&program)
        .code
}

fn minify_bootstrap_file(input: &str, output: &Path) {
    let source = fs::read_to_string(input).expect("Failed to read bootstrap.js");

    let count = source.matches(RUNTIME_PLACEHOLDER).count();
    assert_eq!(
        count, 1,
        "bootstrap.js must contain exactly one {} placeholder",
        RUNTIME_PLACEHOLDER
    );

    let code = minify_js(&source);
    assert!(
        code.contains(RUNTIME_PLACEHOLDER),
        "minifier dropped the {} placeholder",
        RUNTIME_PLACEHOLDER
    );
    fs::write(output, code).expect("Failed to write minified bootstrap JS");
}

fn minify_css(source: &str) -> String {
    let stylesheet =
        StyleSheet::parse(source, ParserOptions::default()).expect("Failed to parse CSS");
    stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to minify CSS")
        .code
}

fn minify_css_file(input: &str, output: &Path) {
    let source = fs::read_to_string(input).expect("Failed to read CSS file");
    let code = minify_css(&source);
    fs::write(output, code).expect("Failed to write minified CSS");
}
