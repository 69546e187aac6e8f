//! HTML to visible text, one block per line.
//!
//! The extractor expects text shaped like a browser's rendered `innerText`:
//! each table cell, list item or block element on its own line.
//!
//! Only `script`, `style`, `noscript`, `template` and `head` are dropped, by
//! tag name. Elements hidden with the `hidden` attribute or by CSS are still
//! read.

use scraper::{ElementRef, Html, Node, Selector};

/// Tags whose content never reaches the output.
const SKIPPED: &[&str] = &["script", "style", "noscript", "template", "head"];

const BLOCKS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "footer", "form",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav", "ol", "p", "pre",
    "section", "table", "tbody", "td", "tfoot", "th", "thead", "tr", "ul",
];

pub fn visible_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let body = Selector::parse("body")
        .ok()
        .and_then(|sel| doc.select(&sel).next())
        .unwrap_or_else(|| doc.root_element());

    let mut out = String::with_capacity(html.len() / 4);
    collect(body, &mut out);

    out.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn collect(element: ElementRef, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => push_collapsed(out, text),
            Node::Element(el) => {
                let name = el.name();
                if SKIPPED.contains(&name) {
                    continue;
                }
                if name == "br" {
                    out.push('\n');
                    continue;
                }
                let block = BLOCKS.contains(&name);
                if block {
                    out.push('\n');
                }
                if let Some(inner) = ElementRef::wrap(child) {
                    collect(inner, out);
                }
                if block {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}

/// Source formatting whitespace collapses to single spaces, as in rendered text.
fn push_collapsed(out: &mut String, text: &str) {
    let mut last_space = out.ends_with(' ') || out.ends_with('\n') || out.is_empty();
    for c in text.chars() {
        if c.is_whitespace() {
            if !last_space {
                out.push(' ');
                last_space = true;
            }
        } else {
            out.push(c);
            last_space = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_cells_become_lines() {
        let html = "<html><body><table><tr><td>1</td><td>Jan\n   Peeters</td><td>1850</td></tr></table></body></html>";
        assert_eq!(visible_text(html), "1\nJan Peeters\n1850");
    }

    #[test]
    fn test_scripts_are_skipped() {
        let html = "<body><script>var x = 1;</script><div>12 items</div></body>";
        assert_eq!(visible_text(html), "12 items");
    }

    #[test]
    fn test_hidden_attribute_is_not_evaluated() {
        let html = "<body><div hidden>Menu</div><div style=\"display:none\">Login</div><p>6</p></body>";
        assert_eq!(visible_text(html), "Menu\nLogin\n6");
    }

    #[test]
    fn test_inline_elements_stay_on_one_line() {
        let html = "<body><p><span>Anna</span> <b>Smit</b></p><p>6</p></body>";
        assert_eq!(visible_text(html), "Anna Smit\n6");
    }
}
