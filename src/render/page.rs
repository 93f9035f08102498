//! Full HTML document around the listing container.
//!
//! The page carries the two filter controls with the current selection
//! marked, the container itself and a footer with snapshot timestamps.

use crate::model::{Dataset, FilterState};
use crate::render::container::ListingContainer;
use crate::utils::{escape_html, format_loaded_at};

pub const PRICE_RANGES: [&str; 5] = ["", "$", "$$", "$$$", "$$$$"];

/// Everything the page needs for one paint.
pub struct PageView<'a> {
    pub filters: &'a FilterState,
    pub homepage: &'a Dataset,
    pub catalog: &'a Dataset,
    pub container: &'a ListingContainer,
}

/// Distinct districts of the catalog, ordered by their leading number when
/// they have one ("2nd" before "10th").
pub fn district_options(catalog: &Dataset) -> Vec<String> {
    let mut districts: Vec<String> = catalog
        .records
        .iter()
        .filter_map(|r| r.arrondissement.clone())
        .collect();
    districts.sort_by_key(|d| (leading_number(d), d.clone()));
    districts.dedup();
    districts
}

fn leading_number(s: &str) -> u32 {
    let digits: String = s.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(u32::MAX)
}

fn render_select(id: &str, options: &[(String, String)], selected: &str) -> String {
    let mut html = format!("<select id=\"{}\">\n", id);
    for (value, label) in options {
        let mark = if value == selected { " selected" } else { "" };
        html.push_str(&format!(
            "  <option value=\"{}\"{}>{}</option>\n",
            escape_html(value),
            mark,
            escape_html(label)
        ));
    }
    html.push_str("</select>");
    html
}

pub fn render_page(view: &PageView<'_>) -> String {
    let mut districts = vec![(String::new(), "All arrondissements".to_string())];
    districts.extend(district_options(view.catalog).into_iter().map(|d| (d.clone(), d)));
    // keep a typed-in district selectable even if the catalog has no such value
    if !view.filters.district.is_empty()
        && !districts.iter().any(|(v, _)| *v == view.filters.district)
    {
        districts.push((view.filters.district.clone(), view.filters.district.clone()));
    }

    let prices: Vec<(String, String)> = PRICE_RANGES
        .iter()
        .map(|p| {
            let label = if p.is_empty() { "All prices" } else { p };
            (p.to_string(), label.to_string())
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Restaurants</title>
</head>
<body>
<form class="filters">
{district_select}
{price_select}
</form>
{container}
<footer>Homepage data: {homepage_at} · Catalog data: {catalog_at}</footer>
</body>
</html>
"#,
        district_select = render_select("arrondissement", &districts, &view.filters.district),
        price_select = render_select("priceRange", &prices, &view.filters.price_range),
        container = view.container.to_html(),
        homepage_at = format_loaded_at(view.homepage.loaded_at),
        catalog_at = format_loaded_at(view.catalog.loaded_at),
    )
}
