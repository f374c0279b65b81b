//! End-to-end walk through the public API with one fixed value set.

use balanced_bst::tree::{SearchMode, Tree};

#[test]
fn full_lifecycle() {
    let mut tree = Tree::from_values(vec![8, 4, 13, 2, 6, 11, 16, 9]);

    // Balanced construction over the sorted input, lower-bias middle.
    assert_eq!(tree.level_order(), [&8, &4, &11, &2, &6, &9, &13, &16]);
    assert_eq!(tree.in_order(), [&2, &4, &6, &8, &9, &11, &13, &16]);
    assert_eq!(tree.height(), Some(3));

    // Left height 1, right height 2: exactly one apart, so balanced under
    // the strict rule.
    assert_eq!(tree.is_balanced(), Some(true));

    // Inserts attach leaves without rebalancing.
    tree.insert(5);
    tree.insert(17);
    assert_eq!(tree.find(&5), Some(&5));
    assert_eq!(tree.find(&17), Some(&17));
    assert_eq!(tree.in_order(), [&2, &4, &5, &6, &8, &9, &11, &13, &16, &17]);

    // Deleting a leaf, a one-child node, and a two-children node.
    assert!(tree.delete(&5));
    assert!(tree.delete(&16));
    assert!(tree.delete(&8));
    assert!(!tree.delete(&8));
    assert_eq!(tree.in_order(), [&2, &4, &6, &9, &11, &13, &17]);

    // Skew the tree, then rebuild it balanced.
    for x in 20..30 {
        tree.insert(x);
    }
    let before = tree.in_order().into_iter().copied().collect::<Vec<_>>();
    assert_eq!(tree.height(), Some(13));

    tree = tree.rebalance().expect("tree is not empty");
    assert_eq!(tree.height(), Some(4));
    assert_eq!(tree.in_order().into_iter().copied().collect::<Vec<_>>(), before);
}

#[test]
fn search_modes_agree_on_a_valid_tree() {
    let mut tree = Tree::from_values((0..100).collect());

    for value in [0, 37, 99, 100] {
        let exhaustive = tree.find(&value).copied();
        tree.set_search_mode(SearchMode::Pruned);
        assert_eq!(tree.find(&value).copied(), exhaustive);
        tree.set_search_mode(SearchMode::Exhaustive);
    }
}
