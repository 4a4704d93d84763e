use markdown::{CompileOptions, Options, ParseOptions};

/// GFM enables footnotes: `[^id]` references are resolved against
/// definitions anywhere in the body, in any order. Post authors are trusted,
/// so raw HTML in the body is passed through instead of being escaped or
/// tag-filtered.
fn render_options() -> Options {
    Options {
        parse: ParseOptions::gfm(),
        compile: CompileOptions {
            allow_dangerous_html: true,
            allow_dangerous_protocol: true,
            gfm_tagfilter: false,
            ..CompileOptions::gfm()
        },
    }
}

/// Converts a markdown body to HTML.
///
/// This function is total. `to_html_with_options` can only fail for MDX
/// constructs, which are not enabled here, so the fallback to plain
/// CommonMark is a degrade path rather than an error path.
pub fn render_markdown(md_text: &str) -> String {
    match markdown::to_html_with_options(md_text, &render_options()) {
        Ok(html) => html,
        Err(_) => markdown::to_html(md_text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_paragraphs() {
        let html = render_markdown("First paragraph.\n\nSecond paragraph.");
        assert_eq!(html, "<p>First paragraph.</p>\n<p>Second paragraph.</p>");
    }

    #[test]
    fn test_render_inline_markup() {
        let html = render_markdown("Some __bold__ and *italic* text.");
        assert_eq!(html, "<p>Some <strong>bold</strong> and <em>italic</em> text.</p>");
    }

    #[test]
    fn test_render_footnote() {
        let md = "A claim[^1] needing a source.\n\n[^1]: The source in question.\n";
        let html = render_markdown(md);
        // Inline marker
        assert!(html.contains("data-footnote-ref"), "no footnote reference in: {}", html);
        // Definition block at the end of the document
        assert!(html.contains("footnotes"), "no footnote section in: {}", html);
        assert!(html.contains("The source in question."));
    }

    #[test]
    fn test_render_footnote_definition_order_is_free() {
        let md = "[^b]: second def\n\nUses[^a] both[^b].\n\n[^a]: first def\n";
        let html = render_markdown(md);
        assert!(html.contains("first def"));
        assert!(html.contains("second def"));
    }

    #[test]
    fn test_render_passes_html_through() {
        let html = render_markdown("Before\n\n<div class=\"x\">raw</div>\n\nAfter");
        assert!(html.contains("<div class=\"x\">raw</div>"));
    }

    #[test]
    fn test_render_never_fails_on_junk() {
        let html = render_markdown("[unclosed ![markup **everywhere\n\n> ---");
        assert!(!html.is_empty());
    }
}
