//! Black-box coverage of SPEC_FULL.md §8's literal-I/O boundary scenarios
//! (A–F), driven entirely through the public `parse`/`Engine` API.

use marco_md_engine::{BlockData, BlockId, BlockTag, Document, InlineArena, InlineId, InlineTag};

fn children(doc: &Document, id: BlockId) -> Vec<BlockId> {
    match &doc.blocks.get(id).data {
        BlockData::Container { children } => children.clone(),
        BlockData::Leaf { .. } => Vec::new(),
    }
}

fn only_child(doc: &Document, id: BlockId) -> BlockId {
    let kids = children(doc, id);
    assert_eq!(kids.len(), 1, "expected exactly one child of block {id}, got {kids:?}");
    kids[0]
}

/// Flatten a leaf's resolved inline tree into its literal text, descending
/// through container inlines (Emphasis/Strong/Root) and taking the literal
/// payload of leaf inlines. Used to check the surviving text (§8 property 5)
/// without caring about exactly which wrapper nodes produced it.
fn inline_text(arena: &InlineArena, id: InlineId) -> String {
    match &arena.get(id).tag {
        InlineTag::Text(s) => s.clone(),
        InlineTag::CodeSpan(s) => s.clone(),
        InlineTag::RawHtml(s) => s.clone(),
        InlineTag::Autolink { url, .. } => url.clone(),
        InlineTag::SoftBreak => " ".to_string(),
        InlineTag::HardBreak => "\n".to_string(),
        InlineTag::Delimiter(_) => unreachable!("delimiters never survive resolve_leaf"),
        InlineTag::Root | InlineTag::Emphasis | InlineTag::Strong => {
            arena.children(id).iter().map(|&c| inline_text(arena, c)).collect()
        }
    }
}

fn leaf_text(doc: &Document, leaf: BlockId) -> String {
    let tree = doc.inline_tree(leaf).expect("leaf has an inline tree");
    inline_text(tree, tree.root())
}

#[test]
fn scenario_a_atx_heading() {
    let doc = marco_md_engine::parse("# Hello\n").unwrap();
    let heading = only_child(&doc, 0);
    assert_eq!(doc.blocks.get(heading).tag, BlockTag::AtxHeading { level: 1 });
    assert_eq!(leaf_text(&doc, heading), "Hello");
}

#[test]
fn scenario_b_blockquote_lazy_continuation_then_sibling_paragraph() {
    let doc = marco_md_engine::parse("> quoted\n> still\n\nout\n").unwrap();
    let top = children(&doc, 0);
    assert_eq!(top.len(), 2, "expected [BlockQuote, Paragraph] at the root, got {top:?}");

    let quote = top[0];
    assert_eq!(doc.blocks.get(quote).tag, BlockTag::BlockQuote);
    let quoted_para = only_child(&doc, quote);
    assert_eq!(doc.blocks.get(quoted_para).tag, BlockTag::Paragraph);
    assert_eq!(leaf_text(&doc, quoted_para), "quoted still");

    let out_para = top[1];
    assert_eq!(doc.blocks.get(out_para).tag, BlockTag::Paragraph);
    assert_eq!(leaf_text(&doc, out_para), "out");
}

#[test]
fn scenario_c_fenced_code_block() {
    let doc = marco_md_engine::parse("```x\ny\n```\n").unwrap();
    let code = only_child(&doc, 0);
    match &doc.blocks.get(code).tag {
        BlockTag::FencedCode { info, fence_char, .. } => {
            assert_eq!(info.as_deref(), Some("x"));
            assert_eq!(*fence_char, '`');
        }
        other => panic!("expected FencedCode, got {other:?}"),
    }
    let body = doc.blocks.line_group(code).expect("fenced code is a leaf");
    assert_eq!(body.joined(), "y");
}

#[test]
fn scenario_d_indented_line_is_lazy_paragraph_continuation_not_code() {
    // Per §8 scenario D: a paragraph already open absorbs an indented line
    // as lazy continuation rather than yielding to an indented code block.
    let doc = marco_md_engine::parse("a\n    b\n").unwrap();
    let top = children(&doc, 0);
    assert_eq!(top.len(), 1, "expected a single Paragraph, got {top:?}");
    assert_eq!(doc.blocks.get(top[0]).tag, BlockTag::Paragraph);
    assert_eq!(leaf_text(&doc, top[0]), "a b");
}

#[test]
fn scenario_e_bullet_list_with_two_items() {
    let doc = marco_md_engine::parse("- a\n- b\n").unwrap();
    let list = only_child(&doc, 0);
    assert_eq!(
        doc.blocks.get(list).tag,
        BlockTag::List { ordered: false, start: None, tight: true }
    );
    let items = children(&doc, list);
    assert_eq!(items.len(), 2);
    for (item, expected) in items.iter().zip(["a", "b"]) {
        assert!(matches!(doc.blocks.get(*item).tag, BlockTag::ListItem { .. }));
        let para = only_child(&doc, *item);
        assert_eq!(doc.blocks.get(para).tag, BlockTag::Paragraph);
        assert_eq!(leaf_text(&doc, para), expected);
    }
}

#[test]
fn scenario_f_emphasis_and_strong() {
    let doc = marco_md_engine::parse("*em* and **strong**").unwrap();
    let para = only_child(&doc, 0);
    let tree = doc.inline_tree(para).unwrap();
    let kids = tree.children(tree.root());
    assert_eq!(kids.len(), 3, "expected [Emph, Literal, Strong], got {kids:?}");

    assert_eq!(tree.get(kids[0]).tag, InlineTag::Emphasis);
    assert_eq!(inline_text(tree, kids[0]), "em");

    assert_eq!(tree.get(kids[1]).tag, InlineTag::Text(" and ".to_string()));

    assert_eq!(tree.get(kids[2]).tag, InlineTag::Strong);
    assert_eq!(inline_text(tree, kids[2]), "strong");
}
