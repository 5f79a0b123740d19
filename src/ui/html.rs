use html_escaper::Escape;
use std::fmt::{self, Display, Formatter};

/// A minimal rendered tree: elements with children, and text leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element { tag: &'static str, children: Vec<Node> },
    Text(String),
}

impl Node {
    pub fn element(tag: &'static str, children: Vec<Node>) -> Self {
        Node::Element { tag, children }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Element holding a single text leaf, e.g. `<h2>Zona: A</h2>`.
    pub fn text_element(tag: &'static str, content: impl Into<String>) -> Self {
        Node::element(tag, vec![Node::text(content)])
    }

    pub fn to_html(&self) -> String {
        self.to_string()
    }

    /// Concatenated text of every leaf, without markup.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(s) => out.push_str(s),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Every element with the given tag, in document order.
    #[cfg(test)]
    pub fn find_all(&self, tag: &str) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect_tag(tag, &mut found);
        found
    }

    #[cfg(test)]
    fn collect_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a Node>) {
        if let Node::Element { tag: t, children } = self {
            if *t == tag {
                found.push(self);
            }
            for child in children {
                child.collect_tag(tag, found);
            }
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(s) => s.as_str().escape(f, false),
            Node::Element { tag, children } => {
                write!(f, "<{tag}>")?;
                for child in children {
                    write!(f, "{child}")?;
                }
                write!(f, "</{tag}>")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_escaped_in_html_but_not_in_text_content() {
        let node = Node::text_element("p", "<b>&");
        assert_eq!(node.to_html(), "<p>&lt;b&gt;&amp;</p>");
        assert_eq!(node.text_content(), "<b>&");
    }

    #[test]
    fn quotes_are_escaped() {
        let node = Node::text_element("h2", r#"Zona: "Norte" d'Honor"#);
        assert_eq!(node.to_html(), "<h2>Zona: &quot;Norte&quot; d&apos;Honor</h2>");
    }

    #[test]
    fn find_all_walks_in_document_order() {
        let tree = Node::element(
            "div",
            vec![
                Node::text_element("h2", "one"),
                Node::element("div", vec![Node::text_element("h2", "two")]),
            ],
        );
        let headings: Vec<String> = tree.find_all("h2").iter().map(|n| n.text_content()).collect();
        assert_eq!(headings, vec!["one", "two"]);
    }
}
