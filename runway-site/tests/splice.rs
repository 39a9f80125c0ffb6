use runway_catalog::{Catalog, Category, Model};
use runway_site::{SiteError, splice_page};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MEN_PAGE: &str = r#"<!DOCTYPE html>
<html lang="es">
<body data-page-category="men">
    <main>
        <h1>HOMBRES</h1>
        <div id="model-grid" class="model-grid-container">
            <!-- Model cards will be generated here -->
            <a href="portfolio.html?id=old" class="model-card">stale</a>
        </div>
    </main>
    <footer>© Agencia</footer>
</body>
</html>
"#;

fn model(id: &str, name: &str, category: Category) -> Model {
    Model {
        id: id.to_string(),
        name: name.to_string(),
        category,
        thumbnail_url: format!("/models/{id}.webp"),
        details: json!({ "ESTATURA": 1.8, "BUSTO": 84.0 })
            .as_object()
            .cloned()
            .unwrap(),
        portfolio_images: Vec::new(),
        polaroids: None,
        videos: None,
        extra: Default::default(),
    }
}

fn catalog() -> Catalog {
    Catalog::new(vec![
        model("sergei", "SERGEI", Category::Men),
        model("fanny", "FANNY", Category::Women),
        model("tomas", "TOMÁS", Category::Men),
    ])
}

fn write_page(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn splice_writes_only_matching_category() {
    let tmp = TempDir::new().unwrap();
    let path = write_page(tmp.path(), "men.html", MEN_PAGE);

    let report = splice_page(&path, &catalog(), Category::Men, false).unwrap();
    assert_eq!(report.cards, 2);
    assert!(report.changed);

    let html = fs::read_to_string(&path).unwrap();
    assert!(html.contains("portfolio.html?id=sergei"));
    assert!(html.contains("portfolio.html?id=tomas"));
    assert!(!html.contains("FANNY"));
    assert!(!html.contains("stale"));
    // BUSTO is not in the men's order.
    assert!(!html.contains("BUSTO"));
    assert!(html.find("SERGEI").unwrap() < html.find("TOMÁS").unwrap());
}

#[test]
fn splice_keeps_surroundings_byte_identical() {
    let tmp = TempDir::new().unwrap();
    let path = write_page(tmp.path(), "men.html", MEN_PAGE);
    splice_page(&path, &catalog(), Category::Men, false).unwrap();

    let html = fs::read_to_string(&path).unwrap();
    let head_end = MEN_PAGE.find("<!-- Model cards will be generated here -->").unwrap()
        + "<!-- Model cards will be generated here -->".len();
    assert_eq!(&html[..head_end], &MEN_PAGE[..head_end]);
    let tail_start = MEN_PAGE.rfind("</div>\n    </main>").unwrap();
    assert!(html.ends_with(&MEN_PAGE[tail_start..]));
}

#[test]
fn resplice_is_byte_identical() {
    let tmp = TempDir::new().unwrap();
    let path = write_page(tmp.path(), "women.html", &MEN_PAGE.replace("men", "women"));

    splice_page(&path, &catalog(), Category::Women, false).unwrap();
    let first = fs::read(&path).unwrap();

    let report = splice_page(&path, &catalog(), Category::Women, false).unwrap();
    assert!(!report.changed);
    assert_eq!(fs::read(&path).unwrap(), first);
    assert!(String::from_utf8(first).unwrap().contains("portfolio.html?id=daniela"));
}

#[test]
fn missing_marker_leaves_file_untouched() {
    let tmp = TempDir::new().unwrap();
    let page = MEN_PAGE.replace("<!-- Model cards will be generated here -->", "");
    let path = write_page(tmp.path(), "men.html", &page);

    let err = splice_page(&path, &catalog(), Category::Men, false).unwrap_err();
    assert!(matches!(err, SiteError::MarkerNotFound(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), page);
}

#[test]
fn dry_run_does_not_write() {
    let tmp = TempDir::new().unwrap();
    let path = write_page(tmp.path(), "men.html", MEN_PAGE);

    let report = splice_page(&path, &catalog(), Category::Men, true).unwrap();
    assert!(report.changed);
    assert_eq!(report.cards, 2);
    assert_eq!(fs::read_to_string(&path).unwrap(), MEN_PAGE);
}

#[test]
fn missing_page_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = splice_page(&tmp.path().join("nope.html"), &catalog(), Category::Men, false)
        .unwrap_err();
    assert!(matches!(err, SiteError::Io { .. }));
}
