//! HTML parsing helpers shared by the site adapters.
//!
//! Thin wrappers over [`scraper`] that turn selector compile failures into
//! [`ScrapeError::Selector`] and cover the bits of DOM navigation the
//! adapters need (first match, sibling elements, normalized text).

use crate::error::{Result, ScrapeError};
use crate::utils::{collapse_whitespace, nfkd};
use scraper::{ElementRef, Html, Selector};

/// Compile a CSS selector.
pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// First element in the document matching `css`.
pub fn select_one<'a>(doc: &'a Html, css: &str) -> Result<Option<ElementRef<'a>>> {
    let sel = selector(css)?;
    Ok(doc.select(&sel).next())
}

/// All elements in the document matching `css`, in document order.
pub fn select_all<'a>(doc: &'a Html, css: &str) -> Result<Vec<ElementRef<'a>>> {
    let sel = selector(css)?;
    Ok(doc.select(&sel).collect())
}

/// First descendant of `el` matching `css`.
pub fn select_one_in<'a>(el: ElementRef<'a>, css: &str) -> Result<Option<ElementRef<'a>>> {
    let sel = selector(css)?;
    Ok(el.select(&sel).next())
}

/// All descendants of `el` matching `css`.
pub fn select_all_in<'a>(el: ElementRef<'a>, css: &str) -> Result<Vec<ElementRef<'a>>> {
    let sel = selector(css)?;
    Ok(el.select(&sel).collect())
}

/// Concatenated text of an element and its descendants, untouched.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>()
}

/// Element text, trimmed.
pub fn trimmed_text(el: ElementRef<'_>) -> String {
    text_of(el).trim().to_string()
}

/// Element text in NFKD form with whitespace runs collapsed.
///
/// Hebrew sites pad dates and breadcrumbs with non-breaking spaces; NFKD
/// folds those into plain spaces.
pub fn normalized_text(el: ElementRef<'_>) -> String {
    collapse_whitespace(&nfkd(&text_of(el)))
}

/// The next sibling that is an element, skipping text and comments.
pub fn next_element_sibling(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings().find_map(ElementRef::wrap)
}

/// The previous sibling that is an element, skipping text and comments.
pub fn prev_element_sibling(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.prev_siblings().find_map(ElementRef::wrap)
}

/// The element immediately preceding `el` in document order.
///
/// That is the deepest last element inside the nearest preceding sibling
/// subtree (the sibling itself when it has no child elements), or else the
/// parent.
pub fn previous_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.prev_siblings()
        .find_map(|node| node.descendants().filter_map(ElementRef::wrap).last())
        .or_else(|| el.parent().and_then(ElementRef::wrap))
}

/// Child elements of `el`.
pub fn child_elements(el: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    el.children().filter_map(ElementRef::wrap).collect()
}

/// The `href` attribute of an anchor, if any.
pub fn href(el: ElementRef<'_>) -> Option<&str> {
    el.value().attr("href")
}
