//! Draws a tree as rows of text with every key centered over the span of its
//! children.
//!
//! Subtrees are laid out bottom-up: both children are drawn first, then their
//! rows are glued side by side around the parent's row. Whenever the left
//! subtree has rows, the parent's row is repeated between the left and right
//! row of each of them before it is emitted once on its own.
//!
//! ```
//! use bst_render::Tree;
//!
//! let mut tree = Tree::new(5);
//! tree.insert(3);
//! tree.insert(7);
//!
//! assert_eq!(tree.render(), vec!["3   5   7", "  5"]);
//! ```

use std::convert::TryFrom;
use std::fmt;

use tracing::trace;

use crate::tree::Node;

/// A drawn subtree along with the geometry its parent needs to place itself.
#[derive(Debug, Default)]
struct Layout {
    lines: Vec<String>,
    /// Column where this subtree's root label begins.
    label_start: usize,
    /// Column just past this subtree's root label.
    label_end: usize,
    width: usize,
}

impl Layout {
    fn height(&self) -> usize {
        self.lines.len()
    }
}

/// Renders the subtree rooted at `root` into rows, top to bottom. An absent
/// root renders no rows.
///
/// The blank margin shared by every row is removed, as are trailing spaces, so
/// a lone node renders as just its key.
///
/// # Examples
///
/// ```
/// use bst_render::{render, Tree};
///
/// let tree = Tree::new(5);
/// assert_eq!(render::render(tree.root()), vec!["5"]);
/// ```
pub fn render<K>(root: Option<&Node<K>>) -> Vec<String>
where
    K: fmt::Display,
{
    let lines = layout(root).lines;

    let margin = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start_matches(' ').len())
        .min()
        .unwrap_or(0);
    trace!(rows = lines.len(), margin, "rendered tree");

    lines
        .iter()
        .map(|line| line.get(margin..).unwrap_or("").trim_end().to_string())
        .collect()
}

fn layout<K>(node: Option<&Node<K>>) -> Layout
where
    K: fmt::Display,
{
    let Some(node) = node else {
        return Layout::default();
    };

    let mut left = layout(node.left());
    let mut right = layout(node.right());

    let label = node.key().to_string();
    let label_width = label.chars().count();

    // Center over the children, but never start left of the left child's label.
    let centered = (left.label_start + right.label_end + 2) as isize - label_width as isize;
    let centered = usize::try_from(centered.div_euclid(2)).unwrap_or(0);
    let label_start = (left.label_end + 1).max(centered);
    let label_end = label_start + label_width;
    let width = (left.label_start + right.width + 1).max(label_end);

    let left_rows = left.height();
    let rows = left_rows.max(right.height());
    left.lines.resize(rows, spaces(width));
    right.lines.resize(rows, spaces(width));

    let slot = label_end - label_start;
    let mut row = spaces(left.label_end + 1);
    row.push_str(&label);
    row.push_str(&spaces((right.label_end + 1).saturating_sub(slot)));
    if label_width % 2 == 1 && slot % 2 == 0 {
        if let Some(last) = row.pop() {
            row.push(' ');
            row.push(last);
        }
    }
    let row = spaces(width - label_end) + &row;

    let mut lines = Vec::with_capacity(rows + 1);
    for (l, r) in left.lines.iter().zip(&right.lines).take(left_rows) {
        lines.push(format!("{}{}{}", l, row, r));
    }
    lines.push(row);
    let gap = spaces(width);
    for (l, r) in left.lines.iter().zip(&right.lines).skip(left_rows) {
        lines.push(format!("{}{}{}", l, gap, r));
    }

    Layout {
        lines,
        label_start,
        label_end,
        width,
    }
}

fn spaces(n: usize) -> String {
    " ".repeat(n)
}
