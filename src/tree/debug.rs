//! Rendering and integrity checking for troubleshooting.

use super::{NodeId, SuffixTree};

impl SuffixTree {
    /// Render the tree as a box-drawing diagram.
    ///
    /// Word-end nodes are marked with `*`. Read-only; intended for debugging
    /// and the demonstration binary, not for machine consumption.
    pub fn render(&self) -> String {
        let children = self.node(NodeId::ROOT).children();
        if children.is_empty() {
            return "<empty tree>\n".to_string();
        }
        let mut out = String::new();
        for (i, &child) in children.iter().enumerate() {
            let last = i + 1 == children.len();
            self.render_node(child, "", last, &mut out);
        }
        out
    }

    fn render_node(&self, id: NodeId, indent: &str, last: bool, out: &mut String) {
        let node = self.node(id);
        out.push_str(indent);
        out.push_str(if last { "└─" } else { "├─" });
        if node.value().is_ascii_graphic() {
            out.push(node.value() as char);
        } else {
            out.push_str(&format!("0x{:02x}", node.value()));
        }
        if node.is_word_end() {
            out.push('*');
        }
        out.push('\n');

        let child_indent = format!("{}{}", indent, if last { "  " } else { "│ " });
        let children = node.children();
        for (i, &child) in children.iter().enumerate() {
            let last = i + 1 == children.len();
            self.render_node(child, &child_indent, last, out);
        }
    }

    /// Verify tree integrity - returns a list of issues found.
    ///
    /// Checks sibling uniqueness, parent/child agreement, and id ordering
    /// (every node's parent must have been created before it).
    pub fn verify_integrity(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let len = self.len();

        let root = self.node(NodeId::ROOT);
        if root.parent().is_some() {
            issues.push("root has a parent".to_string());
        }

        let mut child_seen = vec![false; len];
        for i in 0..len {
            let id = NodeId::new(i);
            let node = self.node(id);

            // Sibling uniqueness
            let children = node.children();
            for a in 0..children.len() {
                for b in (a + 1)..children.len() {
                    if self.node(children[a]).value() == self.node(children[b]).value() {
                        issues.push(format!(
                            "node {} has duplicate child value {:#04x}",
                            i,
                            self.node(children[a]).value()
                        ));
                    }
                }
            }

            for &child in children {
                if child.index() >= len {
                    issues.push(format!("node {} has out-of-range child {}", i, child.index()));
                    continue;
                }
                if child <= id {
                    issues.push(format!(
                        "child {} was created before its parent {}",
                        child.index(),
                        i
                    ));
                }
                if self.node(child).parent() != Some(id) {
                    issues.push(format!(
                        "child {} does not point back at parent {}",
                        child.index(),
                        i
                    ));
                }
                if child_seen[child.index()] {
                    issues.push(format!("node {} is a child of two parents", child.index()));
                }
                child_seen[child.index()] = true;
            }
        }

        // Every node except the root must be reachable as exactly one child.
        for (i, seen) in child_seen.iter().enumerate().skip(1) {
            if !seen {
                issues.push(format!("node {} is unreachable", i));
            }
        }

        issues
    }
}
