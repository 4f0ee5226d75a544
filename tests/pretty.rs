use prettahtml::{BreakingSet, Fragment, PrettyPrinter, RuleTables};

fn render(src: &str) -> String {
    let printer = PrettyPrinter::new();
    let mut state = printer.begin("test.html");
    printer.normalize(&mut state, src, 1).unwrap()
}

#[test]
fn text_between_tags() {
    let html = "<html><div><p> \n\t\r white \n\t\r space \n\t\r</p></div>\n\
                \t <div><p> \n\t\r around  \n\t\r brackets \n\t\r </p></div></html>\n\t\r";
    assert_eq!(
        render(html),
        "<html>\n  <div>\n    <p>white space</p>\n  </div>\n  <div>\n    <p>around brackets</p>\n  </div>\n</html>"
    );
}

#[test]
fn whitespace_inside_tag_brackets() {
    let html = "  \n\t\r  <  \n\t\r  a href=\"#\"  \n\t\r  >  \n\t\r\n\
                \t blah  <  \n\t\r  /  \n\t\r  a  \n\t\r  >  \n\t\r  ";
    assert_eq!(render(html), "<a href=\"#\">blah</a>");
}

#[test]
fn whitespace_between_attributes() {
    let html = "<a  \n\t\r  href=\"#\"  \n\t\r class=\"t\"><img \n\t\r src=\"#\"\n\t\r ></a>";
    assert_eq!(render(html), "<a href=\"#\" class=\"t\">\n  <img src=\"#\">\n</a>");
}

#[test]
fn equals_tightened_inside_tags_only() {
    let html = "<a href  \n\t\r  = \n\t\r \"#\"> blah  \n\t\r =  \n\t\rblah</a>";
    // Inside the tag `=` and the quote are tightened; in text content the
    // `=` keeps its collapsed spacing.
    assert_eq!(render(html), "<a href=\"#\">blah = blah</a>");
}

#[test]
fn list_items_nest() {
    let html = "  \n\t\r  < \n\t\r ul \n\t\r >  \n\t\r\n\
                \t < \n\t\r li \n\t\r >  \n\t\r  <img src=\"blah\">  \n\t\r\n\
                \t < \n\t\r / \n\t\r li \n\t\r >  \n\t\r\n\
                \t < \n\t\r / \n\t\r ul \n\t\r >  \n\t\r  ";
    assert_eq!(
        render(html),
        "<ul>\n  <li>\n    <img src=\"blah\">\n  </li>\n</ul>"
    );
}

#[test]
fn void_and_self_closing_tags() {
    let html = " <html>  \n\t\r<meta link=\"\"/>  \n\t\r <meta link=\"\"> \n\t\r\n\
                \t \n\t\r < img src=\"#\"/ >  \n\t\r </html>  ";
    assert_eq!(
        render(html),
        "<html>\n  <meta link=\"\"/>\n  <meta link=\"\">\n  <img src=\"#\"/>\n</html>"
    );
}

#[test]
fn br_stays_inline() {
    let html = "<html><div><p>1\n\t\r  <\n\t\r /\n\t\r br\n\t\r > \n\t\r one</p></div>\n\
                \t <div><p>2  \n\t\r <\n\t\r br\n\t\r > \n\t\r  two</p></div>\n\
                \t <div><p>3  \n\t\r < \n\t\r br \n\t\r / \n\t\r > \n\t\r  three</p></div></html>";
    assert_eq!(
        render(html),
        "<html>\n  <div>\n    <p>1</br>one</p>\n  </div>\n  <div>\n    <p>2<br>two</p>\n  </div>\n  <div>\n    <p>3<br/>three</p>\n  </div>\n</html>"
    );
}

#[test]
fn script_body_is_verbatim() {
    let html = "<html><script> \n     alert(\"blah\"); \n  </script></html>";
    assert_eq!(
        render(html),
        "<html>\n  <script> \n     alert(\"blah\"); \n  </script>\n</html>"
    );
}

#[test]
fn pre_body_is_verbatim_even_when_blank() {
    assert_eq!(render("<pre>\n  \n</pre>"), "<pre>\n  \n</pre>");
}

#[test]
fn sibling_paragraphs_share_a_depth() {
    assert_eq!(render("<p>one<p>two</p>"), "<p>one\n<p>two</p>");
}

#[test]
fn implicitly_closed_list_items_share_a_depth() {
    assert_eq!(
        render("<ul><li>x<li>y</li></ul>"),
        "<ul>\n  <li>x\n  <li>y</li>\n</ul>"
    );
}

#[test]
fn table_rows_and_cells() {
    assert_eq!(
        render("<table><tr><td>x</td></tr></table>"),
        "<table>\n  <tr>\n    <td>x</td>\n  </tr>\n</table>"
    );
}

#[test]
fn text_only_fragments_collapse_only() {
    assert_eq!(render("plain \t\r\n  text"), "plain text");
    // Without a tag in sight, `=` keeps its collapsed spacing.
    assert_eq!(render("a  =  b"), "a = b");
    assert_eq!(render(" \t\r\n "), "");
}

#[test]
fn standalone_void_element_stays_on_one_line() {
    let printer = PrettyPrinter::new();
    let mut state = printer.begin("t");
    assert_eq!(
        printer.normalize(&mut state, "<img src=\"#\"/>", 1).unwrap(),
        "<img src=\"#\"/>"
    );
    assert_eq!(state.depth(), 0);
    assert!(state.is_balanced());
}

#[test]
fn output_is_a_fixed_point() {
    let inputs = [
        "<html><div><p> white \n space </p></div></html>",
        "<ul><li>x<li>y</li></ul>",
        "<a href = \"#\"> blah </a>",
        "<html><script> x < y </script></html>",
    ];
    for input in inputs {
        let once = render(input);
        assert_eq!(render(&once), once, "not stable for {input:?}");
    }
}

#[test]
fn state_carries_across_fragments() {
    let printer = PrettyPrinter::new();
    let mut state = printer.begin("page.html");
    let mut out = String::new();
    out.push_str(&printer.normalize(&mut state, "<ul>", 1).unwrap());
    assert_eq!(state.depth(), 1);
    out.push_str(&printer.normalize(&mut state, "<li>a</li>", 2).unwrap());
    out.push_str(&printer.normalize(&mut state, "</ul>", 3).unwrap());
    assert_eq!(out, "<ul>\n  <li>a</li>\n</ul>");
    assert!(state.is_balanced());
}

#[test]
fn closing_fragment_stays_inline_after_matching_open() {
    let printer = PrettyPrinter::new();
    let mut state = printer.begin("page.html");
    let mut out = String::new();
    out.push_str(&printer.normalize(&mut state, "<div><p>x", 1).unwrap());
    out.push_str(&printer.normalize(&mut state, "</p></div>", 2).unwrap());
    assert_eq!(out, "<div>\n  <p>x</p>\n</div>");
}

#[test]
fn pass_through_fragments_are_untouched() {
    let printer = PrettyPrinter::new();
    let out = printer
        .render_fragments(
            "page.j2",
            [
                Fragment::Literal { text: "<div>", line: 1 },
                Fragment::PassThrough("{{  user.name  }}"),
                Fragment::Literal { text: "</div>", line: 1 },
            ],
        )
        .unwrap();
    assert_eq!(out, "<div>{{  user.name  }}</div>");
}

#[test]
fn fragments_indent_across_pass_through_blocks() {
    let printer = PrettyPrinter::new();
    let out = printer
        .render_fragments(
            "list.j2",
            [
                Fragment::Literal { text: "<ul>", line: 1 },
                Fragment::PassThrough("{% for it in items %}"),
                Fragment::Literal { text: "<li>", line: 2 },
                Fragment::PassThrough("{{ it }}"),
                Fragment::Literal { text: "</li>", line: 2 },
                Fragment::PassThrough("{% endfor %}"),
                Fragment::Literal { text: "</ul>", line: 3 },
            ],
        )
        .unwrap();
    assert_eq!(out, "<ul>{% for it in items %}\n  <li>{{ it }}</li>{% endfor %}\n</ul>");
}

#[test]
fn unmatched_close_reports_tag_and_location() {
    let printer = PrettyPrinter::new();
    let mut state = printer.begin("broken.html");
    let err = printer
        .normalize(&mut state, "</div>", 7)
        .unwrap_err();
    assert_eq!(err.tag, "div");
    assert_eq!(err.line, 7);
    assert_eq!(err.template, "broken.html");
}

#[test]
fn close_underflow_only_on_an_empty_stack() {
    let printer = PrettyPrinter::new();
    let mut state = printer.begin("page.html");
    // A stray close inside an open element is absorbed.
    printer
        .normalize(&mut state, "<div></span>x</div>", 1)
        .unwrap();
    assert!(state.is_balanced());
    // The same close with nothing open is an error.
    let mut state = printer.begin("page.html");
    assert!(printer.normalize(&mut state, "</span>", 1).is_err());
}

#[test]
fn custom_indent_unit() {
    let printer = PrettyPrinter::new().with_indent_unit("\t");
    let mut state = printer.begin("t");
    assert_eq!(
        printer.normalize(&mut state, "<ul><li>x</li></ul>", 1).unwrap(),
        "<ul>\n\t<li>x</li>\n</ul>"
    );
}

#[test]
fn custom_rule_tables() {
    let rules = RuleTables::empty()
        .void(["icon"])
        .isolated(["verbatim"])
        .block(["card"])
        .breaking("card", BreakingSet::any_block());
    let printer = PrettyPrinter::with_rules(rules);
    let mut state = printer.begin("t");
    assert_eq!(
        printer
            .normalize(&mut state, "<card>a<card>b</card>", 1)
            .unwrap(),
        "<card>a\n<card>b</card>"
    );
    let mut state = printer.begin("t");
    assert_eq!(
        printer
            .normalize(&mut state, "<verbatim>  keep   this  </verbatim>", 1)
            .unwrap(),
        "<verbatim>  keep   this  </verbatim>"
    );
    let mut state = printer.begin("t");
    printer.normalize(&mut state, "<icon>", 1).unwrap();
    assert!(state.is_balanced());
}

#[test]
fn names_are_case_sensitive() {
    let printer = PrettyPrinter::new();
    let mut state = printer.begin("t");
    // `PRE` is not in the isolated table, so its body is normalized.
    assert_eq!(
        printer
            .normalize(&mut state, "<PRE>  a   b  </PRE>", 1)
            .unwrap(),
        "<PRE>a b</PRE>"
    );
}
