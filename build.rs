use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const ENTRY: &str = "assets/css/main.css";
const OUTPUT_DIR: &str = "assets/dist";
const OUTPUT: &str = "assets/dist/bundle.css";

fn main() {
    println!("cargo:rerun-if-changed=assets/css/");

    if let Err(e) = bundle_css() {
        panic!("CSS bundling failed: {e}");
    }
}

/// Resolve `@import`s from the entry stylesheet, minify, write the bundle
fn bundle_css() -> Result<(), String> {
    fs::create_dir_all(OUTPUT_DIR).map_err(|e| format!("create {OUTPUT_DIR}: {e}"))?;

    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY))
        .map_err(|e| format!("bundle {ENTRY}: {e}"))?;

    stylesheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("minify: {e}"))?;

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("print: {e}"))?;

    fs::write(OUTPUT, css.code).map_err(|e| format!("write {OUTPUT}: {e}"))?;
    Ok(())
}
