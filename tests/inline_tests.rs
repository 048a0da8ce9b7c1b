use mdpages::inline::{tokenize, InlineToken, TokenKind};
use mdpages::{tokens_to_nodes, Error, LeafNode, Node, ParentNode};

fn render_inline(text: &str) -> String {
    let children = tokens_to_nodes(&tokenize(text).unwrap()).unwrap();
    ParentNode::new("p", children).unwrap().render().unwrap()
}

#[test]
fn test_bold_and_code() {
    assert_eq!(
        tokenize("This is **text** with `code`").unwrap(),
        vec![
            InlineToken::plain("This is "),
            InlineToken::new("text", TokenKind::Bold),
            InlineToken::plain(" with "),
            InlineToken::new("code", TokenKind::Code),
        ]
    );
}

#[test]
fn test_link_does_not_rematch_image() {
    let tokens = tokenize("![a](u1) and [b](u2)").unwrap();
    assert_eq!(
        tokens,
        vec![
            InlineToken::image("a", "u1"),
            InlineToken::plain(" and "),
            InlineToken::link("b", "u2"),
        ]
    );
    assert_eq!(
        tokens.iter().filter(|t| t.kind == TokenKind::Link).count(),
        1
    );
}

#[test]
fn test_trailing_text_after_link() {
    assert_eq!(
        tokenize("[a](b) tail").unwrap(),
        vec![InlineToken::link("a", "b"), InlineToken::plain(" tail")]
    );
}

#[test]
fn test_image_alt_with_bold_syntax_is_split_first() {
    // Delimiter passes run before link extraction.
    assert_eq!(
        tokenize("![**x**](u)").unwrap(),
        vec![
            InlineToken::plain("!["),
            InlineToken::new("x", TokenKind::Bold),
            InlineToken::plain("](u)"),
        ]
    );
}

#[test]
fn test_unmatched_delimiters() {
    for text in ["bad `code", "one **bold", "an _italic", "`a` `b"] {
        assert!(
            matches!(tokenize(text), Err(Error::UnmatchedDelimiter { .. })),
            "expected unmatched delimiter for {text:?}"
        );
    }
}

#[test]
fn test_rendered_inline() {
    assert_eq!(
        render_inline("_a_ **b** `c` [d](e) ![f](g)"),
        r#"<p><i>a</i> <b>b</b> <code>c</code> <a href="e">d</a> <img src="g" alt="f"></img></p>"#
    );
}

#[test]
fn test_no_escaping() {
    assert_eq!(render_inline("a < b & c"), "<p>a < b & c</p>");
}

#[test]
fn test_plain_leaf_renders_verbatim() {
    let nodes = tokens_to_nodes(&[InlineToken::plain("x <y>")]).unwrap();
    assert_eq!(nodes, vec![Node::Leaf(LeafNode::text("x <y>"))]);
}
