mod cases;

use cases::{Adaptor, TEST_CASES, tree};
use pretty_assertions::assert_eq;
use sprig::{TreeAdaptor, TreeError};

#[test]
fn test_rewrite_cases() {
    for case in TEST_CASES.iter() {
        let mut adaptor = Adaptor::new();
        let result = (case.rewrite)(&mut adaptor)
            .unwrap_or_else(|err| panic!("case {} failed: {err}", case.name));
        let rendered = result.map(|node| adaptor.to_string_tree(node));
        assert_eq!(rendered.as_deref(), case.expected, "case {}", case.name);
        if let Some(node) = result {
            adaptor
                .verify(node)
                .unwrap_or_else(|err| panic!("case {} left a broken tree: {err}", case.name));
        }
    }
}

#[test]
fn test_case_names_are_unique() {
    let mut names: Vec<_> = TEST_CASES.iter().map(|case| case.name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), TEST_CASES.len());
}

#[test]
fn test_tree_builder_round_trips() {
    let mut adaptor = Adaptor::new();
    for pattern in ["a", "(r a b)", "(r (a b) (c (d e)))"] {
        let node = tree(&mut adaptor, pattern);
        assert_eq!(adaptor.to_string_tree(node), pattern);
    }
}

#[test]
fn test_malformed_root_is_reported() {
    let mut adaptor = Adaptor::new();
    let new_root = tree(&mut adaptor, "(nil x y)");
    let old_root = tree(&mut adaptor, "(a b)");

    let err = adaptor.become_root(new_root, Some(old_root)).unwrap_err();

    assert_eq!(err, TreeError::MalformedRoot { children: 2 });
    assert_eq!(
        err.to_string(),
        "more than one node as root: nil root has 2 children, expected exactly 1"
    );
    assert_eq!(adaptor.to_string_tree(new_root), "x y");
    assert_eq!(adaptor.to_string_tree(old_root), "(a b)");
}

#[test]
fn test_nil_wrapper_without_old_root_stays_nil() {
    let mut adaptor = Adaptor::new();
    let new_root = tree(&mut adaptor, "(nil r)");

    let root = adaptor.become_root(new_root, None).unwrap();

    assert_eq!(root, new_root);
    assert!(adaptor.is_nil(root));
}
