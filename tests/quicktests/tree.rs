use bst_render::{InsertOutcome, Node, Tree};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same keys in both.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                bst.delete(k);
                set.remove(k);
            }
        }
    }
}

/// Keys in ascending order, read through the public node accessors.
fn in_order<K: Clone>(tree: &Tree<K>) -> Vec<K> {
    let mut keys = Vec::new();
    let mut stack: Vec<&Node<K>> = Vec::new();
    let mut current = tree.root();
    while current.is_some() || !stack.is_empty() {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        if let Some(node) = stack.pop() {
            keys.push(node.key().clone());
            current = node.right();
        }
    }
    keys
}

fn build(root: i8, xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new(root);
    for x in xs {
        tree.insert(*x);
    }
    tree
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(root: i8, ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new(root);
        let mut set = BTreeSet::new();
        set.insert(root);

        do_ops(&ops, &mut tree, &mut set);
        tree.size() == set.len() && in_order(&tree) == set.into_iter().collect::<Vec<_>>()
    }

    fn size_counts_distinct_keys(root: i8, xs: Vec<i8>) -> bool {
        let tree = build(root, &xs);
        let distinct: BTreeSet<_> = xs.iter().chain(Some(&root)).collect();

        tree.size() == distinct.len()
    }

    fn duplicate_insert_changes_nothing(root: i8, xs: Vec<i8>) -> bool {
        let mut tree = build(root, &xs);
        let before = in_order(&tree);

        xs.iter().chain(Some(&root)).all(|x| tree.insert(*x) == InsertOutcome::AlreadyPresent)
            && in_order(&tree) == before
    }

    fn in_order_is_sorted_regardless_of_insert_order(root: i8, xs: Vec<i8>) -> bool {
        let forwards = build(root, &xs);
        let backwards = {
            let mut reversed = xs.clone();
            reversed.reverse();
            build(root, &reversed)
        };

        let keys = in_order(&forwards);
        keys.windows(2).all(|pair| pair[0] < pair[1]) && keys == in_order(&backwards)
    }

    fn contains(root: i8, xs: Vec<i8>) -> bool {
        let tree = build(root, &xs);
        xs.iter().all(|x| tree.contains(x))
    }

    fn with_deletions(root: i8, xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = build(root, &xs);
        let size = tree.size();
        let mut removed = BTreeSet::new();
        for delete in &deletes {
            if tree.contains(delete) {
                removed.insert(*delete);
            }
            tree.delete(delete);
        }

        let still_present: Vec<_> = xs
            .iter()
            .chain(Some(&root))
            .filter(|x| !deletes.contains(*x))
            .collect();

        deletes.iter().all(|x| tree.search(x).0.is_none())
            && still_present.iter().all(|x| tree.contains(x))
            && tree.size() == size - removed.len()
    }

    fn deleting_twice_is_a_noop(root: i8, xs: Vec<i8>, key: i8) -> bool {
        let mut tree = build(root, &xs);
        tree.delete(&key);
        let size = tree.size();
        tree.delete(&key);

        tree.size() == size && !tree.contains(&key)
    }

    fn render_shows_every_key(root: i8, xs: Vec<i8>) -> bool {
        let tree = build(root, &xs);
        let rows = tree.render();
        let text = rows.join("\n");

        rows.iter().any(|row| !row.is_empty() && !row.starts_with(' '))
            && in_order(&tree).iter().all(|key| text.contains(&key.to_string()))
    }
}
