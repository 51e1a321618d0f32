use jotmark_core::{Options, parse};
use pretty_assertions::assert_eq;

fn render(source: &str, options: Options) -> String {
    parse(source, None, Some(&options))
}

#[test]
fn disabled_inline_keeps_markers() {
    let options = Options {
        inline: false,
        ..Default::default()
    };
    assert_eq!(render("*a* **b** ~~c~~", options), "*a* **b** ~~c~~");
}

#[test]
fn disabled_headings_keep_source() {
    let options = Options {
        headings: false,
        ..Default::default()
    };
    assert_eq!(render("# Title", options), "# Title");
}

#[test]
fn disabled_links_keep_brackets() {
    let options = Options {
        links: false,
        ..Default::default()
    };
    assert_eq!(render("[a](b.test) *c*", options), "[a](b.test) <em>c</em>");
}

#[test]
fn disabled_images_keep_source() {
    let options = Options {
        images: false,
        ..Default::default()
    };
    assert_eq!(render("![a](b.png)", options), "![a](b.png)");
}

#[test]
fn disabled_code_keeps_backticks() {
    let options = Options {
        code: false,
        ..Default::default()
    };
    assert_eq!(render("`x`", options), "`x`");
}

#[test]
fn disabled_indent_blocks_render_inline_content() {
    let options = Options {
        indent_blocks: false,
        ..Default::default()
    };
    assert_eq!(render("    indented", options.clone()), "indented");
    assert_eq!(render("  some *em*", options.clone()), "some <em>em</em>");
    assert_eq!(
        render("text\n\n  [a](b.test) `c`", options),
        "text<br />  <a href=\"http://b.test\">a</a> <code>c</code>"
    );
}

#[test]
fn disabled_quotes_and_lists_keep_markers() {
    let options = Options {
        quotes_and_lists: false,
        ..Default::default()
    };
    assert_eq!(render("> a", options), "> a");
}

#[test]
fn emoji_replaces_every_code_form() {
    let options = Options {
        replace_code_with_emoji: Some("💻".to_string()),
        ..Default::default()
    };
    assert_eq!(
        render("a `b` c\n\n```\nd\n```", options.clone()),
        "a 💻 c<br />💻"
    );
    assert_eq!(render("    poem", options), "💻");
}

#[test]
fn options_reach_nested_renders() {
    let options = Options {
        inline: false,
        ..Default::default()
    };
    assert_eq!(
        render("* *a*\n* b", options),
        "<ul><li>*a*</li><li>b</li></ul>"
    );
}
