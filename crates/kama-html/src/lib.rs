use kama_core::{DocumentQuery, Maybe};
use ego_tree::NodeRef;
use scraper::{ElementRef, Html, Node, Selector};

/// Parsed HTML document implementing the core's query capability.
///
/// The trait is implemented for `&HtmlPage`, so node handles borrow the parsed
/// tree and the page can be shared by a whole extraction chain.
pub struct HtmlPage {
    html: Html,
}

impl HtmlPage {
    pub fn parse(document: &str) -> Self {
        Self {
            html: Html::parse_document(document),
        }
    }
}

/// Selectors are program constants; failing to parse one is a defect, not a
/// query miss.
fn selector(text: &str) -> Selector {
    Selector::parse(text).unwrap_or_else(|e| panic!("invalid selector {text:?}: {e}"))
}

impl<'a> DocumentQuery for &'a HtmlPage {
    type Node = NodeRef<'a, Node>;

    fn search(self, sel: &str) -> Vec<Self::Node> {
        let sel = selector(sel);
        self.html.select(&sel).map(|el| *el).collect()
    }

    fn search_in(self, node: Self::Node, sel: &str) -> Vec<Self::Node> {
        let Some(el) = ElementRef::wrap(node) else {
            return Vec::new();
        };
        let sel = selector(sel);
        el.select(&sel).map(|el| *el).collect()
    }

    fn text(self, node: Self::Node) -> String {
        match ElementRef::wrap(node) {
            Some(el) => el.text().collect(),
            None => match node.value().as_text() {
                Some(t) => t.text.to_string(),
                None => String::new(),
            },
        }
    }

    fn own_text(self, node: Self::Node) -> String {
        if node.value().as_text().is_some() {
            return self.text(node);
        }
        node.children()
            .filter_map(|child| child.value().as_text())
            .map(|t| t.text.to_string())
            .collect()
    }

    fn attr(self, node: Self::Node, name: &str) -> Maybe<String> {
        let Some(el) = ElementRef::wrap(node) else {
            return Maybe::absent();
        };
        match el.value().attr(name) {
            Some(value) => Maybe::from_text(value),
            None => Maybe::absent(),
        }
    }

    fn next_sibling(self, node: Self::Node) -> Maybe<Self::Node> {
        Maybe::from_option(node.next_sibling())
    }

    fn node_name(self, node: Self::Node) -> Maybe<String> {
        Maybe::from_option(
            node.value()
                .as_element()
                .map(|el| el.name().to_ascii_lowercase()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
        <html><body>
          <h2 class="label">Onyomi</h2>
          <table class="definition"><tr><td data-row="1">スイ</td><td>as in suizenji</td></tr></table>
          <h2 class="label">Kunyomi</h2>
          <div><span>み*ず</span><span>water</span></div>
        </body></html>
    "#;

    #[test]
    fn search_returns_document_order() {
        let page = HtmlPage::parse(DOC);
        let doc = &page;
        let headings = doc.search("h2.label");
        assert_eq!(headings.len(), 2);
        assert_eq!(doc.text(headings[0]).trim(), "Onyomi");
        assert_eq!(doc.text(headings[1]).trim(), "Kunyomi");
    }

    #[test]
    fn text_concatenates_descendants_and_own_text_does_not() {
        let page = HtmlPage::parse(DOC);
        let doc = &page;
        let div = doc.find("div").into_option().unwrap();
        assert_eq!(doc.text(div), "み*ずwater");
        assert_eq!(doc.own_text(div), "");
    }

    #[test]
    fn attr_is_normalized_through_maybe() {
        let page = HtmlPage::parse(DOC);
        let doc = &page;
        let cell = doc.find("td").into_option().unwrap();
        assert_eq!(
            doc.attr(cell, "data-row").into_option().as_deref(),
            Some("1")
        );
        assert!(doc.attr(cell, "missing").is_absent());
    }

    #[test]
    fn sibling_walk_includes_text_nodes() {
        let page = HtmlPage::parse(DOC);
        let doc = &page;
        let heading = doc.search("h2.label")[0];

        // One step lands on the whitespace between heading and table.
        let step1 = doc.next_sibling(heading).into_option().unwrap();
        assert!(doc.node_name(step1).is_absent());

        // The second step is the table itself.
        let step2 = doc.next_sibling(step1).into_option().unwrap();
        assert_eq!(doc.node_name(step2).into_option().as_deref(), Some("table"));
    }

    #[test]
    #[should_panic(expected = "invalid selector")]
    fn bad_selector_is_a_defect() {
        let page = HtmlPage::parse(DOC);
        let doc = &page;
        let _ = doc.search("][");
    }
}
