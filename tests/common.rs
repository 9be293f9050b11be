#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use refract_site::catalog::*;
use refract_site::models::*;

pub const SVG: &str =
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><rect width="10" height="10"/></svg>"#;

pub const TITLES: [&str; 8] = [
    "Feature 0",
    "Feature 1",
    "Feature 2",
    "Feature 3",
    "Feature 4",
    "Feature 5",
    "Feature 6",
    "Feature 7",
];

const DESCRIPTION: RichText = RichText::new(&[Inline::Text("Does one thing well.")]);

pub fn record(title: &'static str, icon: &'static str) -> FeatureRecord {
    FeatureRecord::new(title, IconRef::new(icon), DESCRIPTION)
}

pub fn scenario_records() -> Vec<FeatureRecord> {
    vec![
        record("Build Fast", "a.svg"),
        record("Stay Focused", "b.svg"),
        record("Code Less", "c.svg"),
    ]
}

pub fn numbered_records(count: usize) -> Vec<FeatureRecord> {
    TITLES[..count]
        .iter()
        .map(|title| record(title, "icon.svg"))
        .collect()
}

/// Resolves records against in-memory markup instead of an asset directory.
pub fn resolved(records: &[FeatureRecord]) -> ResolvedCatalog {
    let features: Vec<_> = records
        .iter()
        .map(|record| ResolvedFeature {
            record: *record,
            icon: Icon::new(record.icon.as_str(), SVG),
        })
        .collect();

    ResolvedCatalog::new(features)
}

pub fn write_icons(dir: &Path, files: &[&str]) {
    fs::create_dir_all(dir).expect("create icon dir");
    for file in files {
        fs::write(dir.join(file), SVG).expect("write icon");
    }
}

/// Static directory holding every icon of the built-in catalog and a stylesheet.
pub fn builtin_static_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    let icons: Vec<_> = FEATURE_LIST.iter().map(|r| r.icon.as_str()).collect();

    write_icons(&dir.path().join("img"), &icons);
    fs::create_dir_all(dir.path().join("css")).expect("create css dir");
    fs::write(dir.path().join("css/custom.css"), ".features {}").expect("write css");

    dir
}

/// Splits rendered section HTML into one chunk per feature block.
pub fn blocks(html: &str) -> Vec<&str> {
    html.split("data-feature-index=").skip(1).collect()
}

/// Visible text of the single `<p>` in a feature block, with tags, hydration markers and
/// entities removed.
pub fn paragraph_text(block: &str) -> String {
    let start = block.find("<p>").expect("block has a paragraph") + "<p>".len();
    let end = start + block[start..].find("</p>").expect("paragraph is closed");

    let mut text = String::new();
    let mut in_tag = false;
    for c in block[start..end].chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
