//! HTML card fragments for the model grid.

use runway_catalog::{Catalog, Category, Model};

use crate::attributes::attribute_lines;
use crate::slug::resolve_slug;

/// Models whose card gets the `zoom-in` presentation class.
pub const ZOOM_IN_NAMES: &[&str] = &["ANASTASIIA", "IVANNA"];

/// Shown by the browser when the thumbnail fails to load.
pub const FALLBACK_IMAGE_URL: &str = "https://via.placeholder.com/300x400?text=Image+Not+Found";

const DETAIL_INDENT: &str = "                            ";

/// Render one model card.
///
/// `category` selects the attribute order. Every card ends with a newline so
/// cards concatenate directly.
pub fn render_card(model: &Model, category: Category) -> String {
    let slug = resolve_slug(model);
    let zoom_class = if ZOOM_IN_NAMES.contains(&model.name.as_str()) {
        " zoom-in"
    } else {
        ""
    };
    let name = escape_html(&model.name);
    let thumbnail = escape_html(&model.thumbnail_url);

    let mut details = String::new();
    for attribute in attribute_lines(&model.details, category) {
        details.push_str(DETAIL_INDENT);
        details.push_str("<p>");
        details.push_str(&escape_html(&attribute.line()));
        details.push_str("</p>\n");
    }

    format!(
        r#"            <a href="portfolio.html?id={slug}" class="model-card{zoom_class}">
                <div class="model-image-wrapper">
                    <img src="{thumbnail}" alt="{name}" loading="lazy" onerror="this.onerror=null;this.src='{FALLBACK_IMAGE_URL}';">
                    <div class="model-card-overlay">
                        <div class="model-details">
{details}                        </div>
                    </div>
                </div>
                <span class="model-card-name">{name}</span>
            </a>
"#,
        slug = escape_html(&slug.value),
    )
}

/// Render every card for `category`, in catalog order.
///
/// Returns the concatenated markup and the number of cards.
pub fn render_cards(catalog: &Catalog, category: Category) -> (String, usize) {
    let mut html = String::new();
    let mut count = 0;
    for model in catalog.by_category(category) {
        html.push_str(&render_card(model, category));
        count += 1;
    }
    (html, count)
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
