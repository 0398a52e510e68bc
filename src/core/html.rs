// src/core/html.rs
//
// Thin helpers over `scraper` for walking tables. Tag matching is
// case-insensitive; html5ever already lowercases names but saved pages
// sometimes reach us through other tooling.

use scraper::{CaseSensitivity, ElementRef, Html, Selector};

use crate::core::sanitize::normalize_ws;

pub fn parse_selector(css: &str) -> Result<Selector, String> {
    Selector::parse(css).map_err(|e| format!("{e:?}"))
}

/// First element matching `selector` that carries every class in `classes`.
/// Classes are compared against the `class` attribute, not parsed as CSS,
/// so names like `2col` that are not CSS identifiers still match.
pub fn find_first_with_classes<'a>(
    doc: &'a Html,
    selector: &Selector,
    classes: &[&str],
) -> Option<ElementRef<'a>> {
    doc.select(selector).find(|el| {
        classes
            .iter()
            .all(|c| el.value().has_class(c, CaseSensitivity::CaseSensitive))
    })
}

/// Direct element children of `el` named `tag`.
pub fn child_elements<'a>(el: ElementRef<'a>, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(move |c| c.value().name().eq_ignore_ascii_case(tag))
}

/// `<tr>` rows of every `<tbody>` directly under `table`, in document order.
/// `<thead>`/`<tfoot>` rows are not body rows.
pub fn body_rows<'a>(table: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    child_elements(table, "tbody")
        .flat_map(|tbody| child_elements(tbody, "tr"))
        .collect()
}

/// `<td>` cells of a row.
pub fn row_cells<'a>(tr: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    child_elements(tr, "td").collect()
}

/// Visible text of an element: entities decoded, each text node collapsed
/// and trimmed, then joined with no separator (`B <span>+</span>` is `B+`).
pub fn cell_text(el: ElementRef<'_>) -> String {
    el.text().map(normalize_ws).collect()
}
