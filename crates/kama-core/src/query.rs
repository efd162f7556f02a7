use crate::maybe::Maybe;

/// Read-only query capability over one parsed document.
///
/// Extractors never see a concrete HTML tree: they receive any `DocumentQuery`
/// and an opaque node handle. The trait is implemented for `&Page` types so
/// handles may borrow the parsed document, and both are `Copy` so one document
/// can be handed to a whole chain of extractors.
pub trait DocumentQuery: Copy {
    type Node: Copy;

    /// All nodes matching a CSS selector, in document order.
    fn search(self, selector: &str) -> Vec<Self::Node>;

    /// All nodes matching a CSS selector under `node`, in document order.
    fn search_in(self, node: Self::Node, selector: &str) -> Vec<Self::Node>;

    /// Concatenated text of the node and its descendants.
    fn text(self, node: Self::Node) -> String;

    /// Text of the node's direct text children only.
    fn own_text(self, node: Self::Node) -> String;

    fn attr(self, node: Self::Node, name: &str) -> Maybe<String>;

    /// The next raw sibling, text nodes included. Structure-sensitive walks
    /// (heading → table) count these steps exactly, so element-only skipping
    /// must not happen here.
    fn next_sibling(self, node: Self::Node) -> Maybe<Self::Node>;

    /// Element name (lowercase), absent for text and comment nodes.
    fn node_name(self, node: Self::Node) -> Maybe<String>;

    /// First match of a selector, if any.
    fn find(self, selector: &str) -> Maybe<Self::Node> {
        Maybe::from_option(self.search(selector).into_iter().next())
    }

    /// First match of a selector under `node`, if any.
    fn find_in(self, node: Self::Node, selector: &str) -> Maybe<Self::Node> {
        Maybe::from_option(self.search_in(node, selector).into_iter().next())
    }
}
