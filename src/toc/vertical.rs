use crate::headings::Heading;
use crate::toc::entry;

/// Build the vertical (two-column definition-list) layout.
///
/// Same traversal contract as the horizontal builder: one forward pass,
/// one list box per unmarked master heading, children appended to the open
/// box until the next master. The column split itself is the stylesheet's
/// job; every box lands in one shared container.
///
/// Unlike the horizontal layout, visibility is checked for master headings
/// too: a hidden master opens no box and its children are dropped until the
/// next master, even when they are individually visible.
pub fn build(headings: &[Heading], master: usize, lowest: usize) -> String {
    let mut html = String::from("<div class=\"toc toc-vertical\">\n");
    let mut box_open = false;
    let mut ignore_children = false;

    for heading in headings {
        if heading.level == 0 || heading.level < master || heading.level > lowest {
            continue;
        }

        if heading.level == master {
            if box_open {
                html.push_str("</dl>\n");
                box_open = false;
            }

            if heading.ignored || !heading.visible || heading.id.is_empty() {
                ignore_children = heading.ignored || !heading.visible;
                continue;
            }

            html.push_str(&format!(
                "<dl class=\"toc-box\">\n<dt>{}</dt>\n",
                entry(&heading.id, &heading.text)
            ));
            box_open = true;
            ignore_children = false;
        } else {
            if ignore_children || !box_open {
                continue;
            }
            if heading.ignored || heading.id.is_empty() || !heading.visible {
                continue;
            }

            html.push_str(&format!("<dd>{}</dd>\n", entry(&heading.id, &heading.text)));
        }
    }

    if box_open {
        html.push_str("</dl>\n");
    }

    html.push_str("</div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(level: usize, id: &str, text: &str) -> Heading {
        Heading {
            level,
            id: id.to_string(),
            text: text.to_string(),
            visible: true,
            ignored: false,
            span: 0..0,
            open_end: 0,
            body_end: 0,
        }
    }

    fn hidden(level: usize, id: &str, text: &str) -> Heading {
        Heading {
            visible: false,
            ..h(level, id, text)
        }
    }

    fn ignored(level: usize, id: &str, text: &str) -> Heading {
        Heading {
            ignored: true,
            ..h(level, id, text)
        }
    }

    #[test]
    fn test_boxes_and_children() {
        let headings = vec![
            h(2, "a", "A"),
            h(3, "a1", "A1"),
            h(2, "b", "B"),
            h(3, "b1", "B1"),
            h(3, "b2", "B2"),
        ];

        let html = build(&headings, 2, 3);

        assert_eq!(html.matches("<dl class=\"toc-box\">").count(), 2);
        assert_eq!(html.matches("<dt>").count(), 2);
        assert_eq!(html.matches("<dd>").count(), 3);

        let second_box = html.rfind("<dl class=\"toc-box\">").unwrap();
        assert!(html.find("#a1").unwrap() < second_box);
        assert!(html.find("#b1").unwrap() > second_box);
    }

    #[test]
    fn test_hidden_master_cascades() {
        // A master that does not render produces no box, and its children
        // are dropped with it even when individually visible.
        let headings = vec![
            hidden(2, "a", "A"),
            h(3, "b", "B"),
            h(2, "c", "C"),
            h(3, "d", "D"),
        ];

        let html = build(&headings, 2, 3);

        assert!(!html.contains("#a"));
        assert!(!html.contains("#b"));
        assert!(html.contains("#c"));
        assert!(html.contains("#d"));
        assert_eq!(html.matches("<dl").count(), 1);
    }

    #[test]
    fn test_ignored_master_cascades() {
        let headings = vec![
            h(2, "a", "A"),
            ignored(2, "c", "C"),
            h(3, "d", "D"),
        ];

        let html = build(&headings, 2, 3);

        assert!(html.contains("#a"));
        assert!(!html.contains("#c"));
        assert!(!html.contains("#d"));
    }

    #[test]
    fn test_hidden_child_skipped() {
        let headings = vec![h(2, "a", "A"), hidden(3, "b", "B")];

        let html = build(&headings, 2, 3);

        assert!(html.contains("#a"));
        assert!(!html.contains("#b"));
    }

    #[test]
    fn test_empty_input() {
        let html = build(&[], 2, 3);
        assert_eq!(html, "<div class=\"toc toc-vertical\">\n</div>");
    }
}
