use crate::headings::Heading;
use crate::toc::entry;

/// Build the horizontal (grouped table) layout.
///
/// Single forward pass over the headings in document order. Each unmarked
/// master-level heading opens a table row with the master link on the left
/// and its children collected on the right. An ignore-marked master closes
/// the current row and suppresses every deeper heading until the next
/// unmarked master, so stray children can never attach to an earlier group.
///
/// Visibility is only checked for children here; a hidden master still gets
/// its row. The vertical builder is stricter, and the difference is
/// deliberate (see DESIGN.md).
pub fn build(headings: &[Heading], master: usize, lowest: usize) -> String {
    let mut html = String::from("<table class=\"toc toc-horizontal\">\n");
    let mut group_open = false;
    let mut ignore_children = false;

    for heading in headings {
        if heading.level == 0 || heading.level < master || heading.level > lowest {
            continue;
        }

        if heading.level == master {
            if group_open {
                html.push_str("</td></tr>\n");
                group_open = false;
            }

            if heading.ignored || heading.id.is_empty() {
                // No group is opened; an ignored master additionally drops
                // its whole subtree.
                ignore_children = heading.ignored;
                continue;
            }

            html.push_str(&format!(
                "<tr><td class=\"toc-master\">{}</td><td class=\"toc-children\">",
                entry(&heading.id, &heading.text)
            ));
            group_open = true;
            ignore_children = false;
        } else {
            if ignore_children || !group_open {
                continue;
            }
            if heading.ignored || heading.id.is_empty() || !heading.visible {
                continue;
            }

            html.push(' ');
            html.push_str(&entry(&heading.id, &heading.text));
        }
    }

    if group_open {
        html.push_str("</td></tr>\n");
    }

    html.push_str("</table>");
    html
}
