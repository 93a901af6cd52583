//! Search page rendering: title string and HTML body fragment.
//!
//! The page is rendered as a fragment (title + body); the server wraps it
//! in the outer page shell. All user-controlled text is escaped here, at
//! the rendering layer — the raw term flows unescaped through search and
//! title construction.

use crate::result_set::SearchResultSet;
use crate::types::ResultCategory;

/// One search page: the term that was queried and the aggregated results.
///
/// Mirrors the title/body split of the site's page controllers: one method
/// produces the title string, one the body markup.
#[derive(Debug)]
pub struct SearchPage {
    term: String,
    results: SearchResultSet,
}

impl SearchPage {
    /// Creates a page for `term` with the aggregated `results`.
    pub fn new(term: impl Into<String>, results: SearchResultSet) -> Self {
        Self {
            term: term.into(),
            results,
        }
    }

    /// The page title, with the raw term interpolated.
    pub fn title(&self) -> String {
        format!("Search results for '{}':", self.term)
    }

    /// The page body as an HTML fragment.
    ///
    /// Each non-empty category renders, in the fixed [`ResultCategory::all`]
    /// order, as an `<h1>` heading followed by a `<ul>` of links; the whole
    /// lot is wrapped in a `div.innerContent` container. If every category
    /// is empty the body is a single no-results paragraph instead.
    pub fn body(&self) -> String {
        if self.results.is_empty() {
            return "<p>No results found.</p>".to_string();
        }

        let mut html = String::from("<div class=\"innerContent\">");
        for category in ResultCategory::all() {
            let entries = self.results.category(*category);
            if entries.is_empty() {
                continue;
            }
            html.push_str("<h1>");
            html.push_str(&escape_html(category.label()));
            html.push_str("</h1><ul>");
            for (name, path) in entries {
                html.push_str("<li><a href=\"");
                html.push_str(&escape_html(path));
                html.push_str("\">");
                html.push_str(&escape_html(name));
                html.push_str("</a></li>");
            }
            html.push_str("</ul>");
        }
        html.push_str("</div>");
        html
    }
}

/// Escapes text for interpolation into HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GuideProduct;

    #[test]
    fn title_interpolates_raw_term() {
        let page = SearchPage::new("vec", SearchResultSet::new());
        assert_eq!(page.title(), "Search results for 'vec':");
    }

    #[test]
    fn title_keeps_term_unescaped() {
        // Escaping is the body renderer's job; the title string is wrapped
        // by the outer template which escapes it there.
        let page = SearchPage::new("a/b <x>", SearchResultSet::new());
        assert_eq!(page.title(), "Search results for 'a/b <x>':");
    }

    #[test]
    fn empty_results_render_no_results_paragraph() {
        let page = SearchPage::new("zzzznomatch", SearchResultSet::new());
        assert_eq!(page.body(), "<p>No results found.</p>");
    }

    #[test]
    fn non_empty_category_renders_heading_and_list() {
        let mut results = SearchResultSet::new();
        results.add(ResultCategory::HackClasses, "Vector", "/hack/class/Vector");
        let page = SearchPage::new("vector", results);
        let body = page.body();

        assert!(body.starts_with("<div class=\"innerContent\">"));
        assert!(body.ends_with("</div>"));
        assert!(body.contains("<h1>Hack Classes</h1>"));
        assert!(body.contains("<li><a href=\"/hack/class/Vector\">Vector</a></li>"));
        assert!(!body.contains("No results found."));
    }

    #[test]
    fn empty_categories_render_no_heading() {
        let mut results = SearchResultSet::new();
        results.add(ResultCategory::PhpFunctions, "strlen", "/php/strlen");
        let page = SearchPage::new("strlen", results);
        let body = page.body();

        assert!(body.contains("<h1>PHP Functions</h1>"));
        assert!(!body.contains("<h1>Hack Classes</h1>"));
        assert!(!body.contains("<h1>Hack Guides</h1>"));
    }

    #[test]
    fn categories_render_in_fixed_display_order() {
        let mut results = SearchResultSet::new();
        // Insert in reverse display order.
        results.add(ResultCategory::PhpFunctions, "strlen", "/p");
        results.add(ResultCategory::HackClasses, "Vector", "/c");
        results.add_guide_result(GuideProduct::Hack, "collections", "hack-arrays");
        let page = SearchPage::new("x", results);
        let body = page.body();

        let guides = body.find("<h1>Hack Guides</h1>").expect("guides heading");
        let classes = body.find("<h1>Hack Classes</h1>").expect("classes heading");
        let functions = body.find("<h1>PHP Functions</h1>").expect("functions heading");
        assert!(guides < classes);
        assert!(classes < functions);
    }

    #[test]
    fn list_entries_sorted_by_name() {
        let mut results = SearchResultSet::new();
        results.add(ResultCategory::HackFunctions, "zip", "/z");
        results.add(ResultCategory::HackFunctions, "filter", "/f");
        let page = SearchPage::new("x", results);
        let body = page.body();
        assert!(body.find("filter").expect("filter") < body.find("zip").expect("zip"));
    }

    #[test]
    fn names_and_paths_are_escaped() {
        let mut results = SearchResultSet::new();
        results.add(
            ResultCategory::HackClasses,
            "Vector<T> & friends",
            "/hack/class/Vector\"onmouseover=\"x",
        );
        let page = SearchPage::new("x", results);
        let body = page.body();

        assert!(body.contains("Vector&lt;T&gt; &amp; friends"));
        assert!(body.contains("/hack/class/Vector&quot;onmouseover=&quot;x"));
        assert!(!body.contains("<T>"));
    }

    #[test]
    fn escape_html_covers_all_entities() {
        assert_eq!(escape_html("a&b"), "a&amp;b");
        assert_eq!(escape_html("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_html("it's"), "it&#39;s");
        assert_eq!(escape_html("plain text"), "plain text");
    }
}
