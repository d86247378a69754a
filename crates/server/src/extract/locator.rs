//! Document locators: rules that read one candidate value from a parsed page.

use scraper::{ElementRef, Html, Selector};

/// A rule that reads a candidate value from one place in a parsed document.
///
/// Locators are evaluated against the first element matching their CSS
/// selector. A locator yields `None` when nothing matches or the value it
/// reads is empty, which sends the chain on to the next candidate.
#[derive(Debug, Clone, Copy)]
pub enum Locator {
    /// The `content` attribute of a metadata element.
    Meta(&'static str),
    /// The element's text content.
    Text(&'static str),
    /// The element's text content, falling back to its `content` attribute.
    TextOrContent(&'static str),
    /// An image source: `src`, then the deferred-load `data-src`, then the
    /// lazy-load `data-lazy-src` attribute, in that order.
    ImgSrc(&'static str),
}

impl Locator {
    /// Read this locator's raw candidate value from the document.
    pub fn read(self, doc: &Html) -> Option<String> {
        let value = match self {
            Self::Meta(css) => attr(doc, css, "content"),
            Self::Text(css) => text(doc, css),
            Self::TextOrContent(css) => text(doc, css)
                // Blank text must not mask the content attribute on the
                // same element (microdata price markup carries the value
                // there and leaves the element empty)
                .filter(|t| !t.trim().is_empty())
                .or_else(|| attr(doc, css, "content")),
            Self::ImgSrc(css) => {
                let el = select_first(doc, css)?;
                non_empty(el.value().attr("src"))
                    .or_else(|| non_empty(el.value().attr("data-src")))
                    .or_else(|| non_empty(el.value().attr("data-lazy-src")))
            }
        }?;
        // Mirror the truthiness gate on raw candidates: an empty read falls
        // through to the next locator rather than reaching the validator.
        (!value.is_empty()).then_some(value)
    }
}

/// Evaluate a locator chain left-to-right, short-circuiting on the first
/// candidate the `candidate` function accepts.
///
/// This is the whole extraction strategy: locators are ordered from
/// structured metadata (highest confidence) down to generic heuristics, and
/// `candidate` does the field's normalization plus validation in one step,
/// returning `None` to reject.
pub fn first_valid<T>(
    doc: &Html,
    locators: &[Locator],
    candidate: impl Fn(String) -> Option<T>,
) -> Option<T> {
    locators
        .iter()
        .filter_map(|locator| locator.read(doc))
        .find_map(candidate)
}

fn select_first<'a>(doc: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    // Selectors are static and known-valid; an unparseable one simply
    // contributes no candidate.
    let selector = Selector::parse(css).ok()?;
    doc.select(&selector).next()
}

fn attr(doc: &Html, css: &str, name: &str) -> Option<String> {
    select_first(doc, css)?.value().attr(name).map(String::from)
}

fn text(doc: &Html, css: &str) -> Option<String> {
    Some(select_first(doc, css)?.text().collect::<String>())
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_reads_content_attribute() {
        let doc = Html::parse_document(
            r#"<html><head><meta property="og:title" content="A Thing"></head></html>"#,
        );
        let value = Locator::Meta(r#"meta[property="og:title"]"#).read(&doc);
        assert_eq!(value.as_deref(), Some("A Thing"));
    }

    #[test]
    fn test_text_reads_first_match_only() {
        let doc = Html::parse_document("<html><body><h1>First</h1><h1>Second</h1></body></html>");
        let value = Locator::Text("h1").read(&doc);
        assert_eq!(value.as_deref(), Some("First"));
    }

    #[test]
    fn test_empty_candidate_falls_through() {
        let doc = Html::parse_document("<html><body><h1></h1></body></html>");
        assert_eq!(Locator::Text("h1").read(&doc), None);
    }

    #[test]
    fn test_text_or_content_falls_back_to_content_attribute() {
        let doc = Html::parse_document(
            r#"<html><body><span itemprop="price" content="48.00"></span></body></html>"#,
        );
        let value = Locator::TextOrContent(r#"[itemprop="price"]"#).read(&doc);
        assert_eq!(value.as_deref(), Some("48.00"));
    }

    #[test]
    fn test_text_or_content_whitespace_text_falls_back() {
        let doc = Html::parse_document(
            r#"<html><body><span itemprop="price" content="19.95">  </span></body></html>"#,
        );
        let value = Locator::TextOrContent(r#"[itemprop="price"]"#).read(&doc);
        assert_eq!(value.as_deref(), Some("19.95"));
    }

    #[test]
    fn test_text_or_content_prefers_text_when_present() {
        let doc = Html::parse_document(
            r#"<html><body><span itemprop="price" content="48.00">$52.00</span></body></html>"#,
        );
        let value = Locator::TextOrContent(r#"[itemprop="price"]"#).read(&doc);
        assert_eq!(value.as_deref(), Some("$52.00"));
    }

    #[test]
    fn test_img_src_lazy_load_order() {
        let doc = Html::parse_document(
            r#"<html><body><img class="p" data-lazy-src="/lazy.jpg" data-src="/deferred.jpg"></body></html>"#,
        );
        // data-src outranks data-lazy-src when src is absent
        let value = Locator::ImgSrc("img.p").read(&doc);
        assert_eq!(value.as_deref(), Some("/deferred.jpg"));
    }

    #[test]
    fn test_first_valid_short_circuits() {
        let doc = Html::parse_document(
            "<html><body><h1>no</h1><h2>yes</h2><h3>also</h3></body></html>",
        );
        let result = first_valid(
            &doc,
            &[Locator::Text("h1"), Locator::Text("h2"), Locator::Text("h3")],
            |raw| (raw == "yes").then_some(raw),
        );
        assert_eq!(result.as_deref(), Some("yes"));
    }

    #[test]
    fn test_first_valid_exhausted_chain() {
        let doc = Html::parse_document("<html><body></body></html>");
        let result = first_valid(&doc, &[Locator::Text("h1")], Some);
        assert_eq!(result, None);
    }
}
