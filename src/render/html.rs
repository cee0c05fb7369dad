use std::borrow::Cow;

use super::Surface;
use crate::constants::{ARTICLE_CLASS, GENERATE_LABEL, INPUT_LABEL, PAGE_TITLE, PARAGRAPH_CLASS};
use anyhow::Result;

/// Renders the generator page as a standalone HTML document.
///
/// Paragraphs are injected as raw markup unless `escape` is set.
#[derive(Debug, Clone)]
pub struct HtmlSurface {
    escape: bool,
    output: String,
}

impl HtmlSurface {
    pub fn new(escape: bool) -> Self {
        Self {
            escape,
            output: build_page(&[], escape),
        }
    }

    pub fn document(&self) -> &str {
        &self.output
    }
}

impl Surface for HtmlSurface {
    fn replace_all(
        &mut self,
        items: &[&str],
    ) -> Result<()> {
        self.output = build_page(items, self.escape);
        Ok(())
    }
}

/// Escapes `& < > " '` when `escape` is true, otherwise borrows the input.
pub fn maybe_escape_text(
    text: &str,
    escape: bool,
) -> Cow<'_, str> {
    if !escape || !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Builds the `<article>` holding one paragraph element per item.
pub fn build_article(
    items: &[&str],
    escape: bool,
) -> String {
    let mut html = String::new();
    html.push_str(&format!("<article class=\"{ARTICLE_CLASS}\">\n"));
    for item in items {
        let body = maybe_escape_text(item, escape);
        html.push_str(&format!("  <p class=\"{PARAGRAPH_CLASS}\">{body}</p>\n"));
    }
    html.push_str("</article>\n");
    html
}

/// Builds the full page: header, count form and the paragraph article.
pub fn build_page(
    items: &[&str],
    escape: bool,
) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\">\n");
    html.push_str("<head>\n");
    html.push_str("  <meta charset=\"utf-8\" />\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\" />\n");
    html.push_str("  <title>Lorem Ipsum Generator</title>\n");
    html.push_str("</head>\n");
    html.push_str("<body>\n");
    html.push_str("<main class=\"lorem-ipsum-page\">\n");
    html.push_str("<section class=\"header-app\">\n");
    html.push_str("  <div class=\"header-app__content\">\n");
    html.push_str(&format!(
        "    <h1 class=\"header-app__title\">{PAGE_TITLE}</h1>\n"
    ));
    html.push_str("  </div>\n");
    html.push_str("</section>\n");
    html.push_str("<section class=\"lorem-ipsum\">\n");
    html.push_str("<form class=\"lorem-ipsum__form\">\n");
    html.push_str("  <div class=\"lorem-ipsum__content\">\n");
    html.push_str(&format!(
        "    <p class=\"lorem-ipsum__label\">{INPUT_LABEL}</p>\n"
    ));
    html.push_str(&format!(
        "    <input type=\"number\" class=\"lorem-ipsum__input\" value=\"{}\" />\n",
        items.len()
    ));
    html.push_str("  </div>\n");
    html.push_str(&format!(
        "  <button type=\"submit\" aria-label=\"generate\" class=\"lorem-ipsum__btn-generate\">{GENERATE_LABEL}</button>\n"
    ));
    html.push_str("</form>\n");
    html.push_str(&build_article(items, escape));
    html.push_str("</section>\n");
    html.push_str("</main>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_rewrites_special_chars() {
        assert_eq!(
            maybe_escape_text("a < b && \"c\" > 'd'", true),
            "a &lt; b &amp;&amp; &quot;c&quot; &gt; &#39;d&#39;"
        );
        assert!(matches!(
            maybe_escape_text("<b>raw</b>", false),
            Cow::Borrowed(_)
        ));
        assert!(matches!(
            maybe_escape_text("nothing special", true),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn empty_article_has_no_paragraphs() {
        let html = build_article(&[], false);
        assert_eq!(html, "<article class=\"lorem-ipsum__paragraphs\">\n</article>\n");
    }

    #[test]
    fn new_surface_renders_empty_page() {
        let surface = HtmlSurface::new(false);
        assert!(surface.document().contains(PAGE_TITLE));
        assert!(!surface.document().contains("<p class=\"lorem-ipsum__paragraph\">"));
    }
}
