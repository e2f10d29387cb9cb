use once_cell::sync::Lazy;
use sprig::{CommonToken, CommonTreeAdaptor, MIN_TOKEN_TYPE, NodeId, Result, TreeAdaptor};

pub type Adaptor = CommonTreeAdaptor<CommonToken, &'static str>;

pub struct TestCase {
    pub name: &'static str,
    /// Runs the rewrite and returns the rule result.
    pub rewrite: fn(&mut Adaptor) -> Result<Option<NodeId>>,
    /// Expected `to_string_tree` of the result, `None` for an empty rule.
    pub expected: Option<&'static str>,
}

/// Builds a tree from its LISP form, e.g. `(r a (nil b c))`.
///
/// `nil` names a nil node. Type codes are derived from the first letter.
pub fn tree(adaptor: &mut Adaptor, pattern: &str) -> NodeId {
    let tokens: Vec<String> = pattern
        .replace('(', " ( ")
        .replace(')', " ) ")
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let mut position = 0;
    let node = parse(adaptor, &tokens, &mut position);
    assert_eq!(position, tokens.len(), "trailing input in {pattern:?}");
    node
}

fn parse(adaptor: &mut Adaptor, tokens: &[String], position: &mut usize) -> NodeId {
    let token = &tokens[*position];
    *position += 1;
    if token != "(" {
        return node(adaptor, token);
    }
    let root = node(adaptor, &tokens[*position]);
    *position += 1;
    while tokens[*position] != ")" {
        let child = parse(adaptor, tokens, position);
        adaptor.add_child(root, child).unwrap();
    }
    *position += 1;
    root
}

fn node(adaptor: &mut Adaptor, text: &str) -> NodeId {
    if text == "nil" {
        return adaptor.empty_node();
    }
    let kind = MIN_TOKEN_TYPE + i32::from(text.as_bytes()[0]);
    adaptor.create(CommonToken::new(kind, text))
}

pub static TEST_CASES: Lazy<Vec<TestCase>> = Lazy::new(|| {
    vec![
        TestCase {
            name: "flatten_nil_old_root",
            rewrite: |adaptor| {
                let new_root = tree(adaptor, "r");
                let old_root = tree(adaptor, "(nil a b c)");
                adaptor.become_root(new_root, Some(old_root)).map(Some)
            },
            expected: Some("(r a b c)"),
        },
        TestCase {
            name: "concrete_old_root_becomes_child",
            rewrite: |adaptor| {
                let new_root = tree(adaptor, "r");
                let old_root = tree(adaptor, "(a b c)");
                adaptor.become_root(new_root, Some(old_root)).map(Some)
            },
            expected: Some("(r (a b c))"),
        },
        TestCase {
            name: "unwrap_nil_new_root_over_nil_list",
            rewrite: |adaptor| {
                let new_root = tree(adaptor, "(nil r)");
                let old_root = tree(adaptor, "(nil a b c)");
                adaptor.become_root(new_root, Some(old_root)).map(Some)
            },
            expected: Some("(r a b c)"),
        },
        TestCase {
            name: "unwrap_nil_new_root_over_subtree",
            rewrite: |adaptor| {
                let new_root = tree(adaptor, "(nil r)");
                let old_root = tree(adaptor, "(a b c)");
                adaptor.become_root(new_root, Some(old_root)).map(Some)
            },
            expected: Some("(r (a b c))"),
        },
        TestCase {
            name: "no_old_root",
            rewrite: |adaptor| {
                let new_root = tree(adaptor, "r");
                adaptor.become_root(new_root, None).map(Some)
            },
            expected: Some("r"),
        },
        TestCase {
            name: "no_old_root_keeps_nil_wrapper",
            rewrite: |adaptor| {
                let new_root = tree(adaptor, "(nil r)");
                adaptor.become_root(new_root, None).map(Some)
            },
            expected: Some("r"),
        },
        TestCase {
            name: "root_with_children",
            rewrite: |adaptor| {
                // a : A B C -> ^(A B C) ;
                let root_0 = adaptor.empty_node();
                let root_1 = adaptor.empty_node();
                let a = tree(adaptor, "A");
                let root_1 = adaptor.become_root(a, Some(root_1))?;
                let b = tree(adaptor, "B");
                let c = tree(adaptor, "C");
                adaptor.add_child(root_1, b)?;
                adaptor.add_child(root_1, c)?;
                adaptor.add_child(root_0, root_1)?;
                Ok(adaptor.rule_post_processing(root_0))
            },
            expected: Some("(A B C)"),
        },
        TestCase {
            name: "flat_list_result",
            rewrite: |adaptor| {
                // list : A B ;
                let root_0 = adaptor.empty_node();
                let a = tree(adaptor, "A");
                let b = tree(adaptor, "B");
                adaptor.add_child(root_0, a)?;
                adaptor.add_child(root_0, b)?;
                Ok(adaptor.rule_post_processing(root_0))
            },
            expected: Some("A B"),
        },
        TestCase {
            name: "empty_rule",
            rewrite: |adaptor| {
                let root_0 = adaptor.empty_node();
                Ok(adaptor.rule_post_processing(root_0))
            },
            expected: None,
        },
        TestCase {
            name: "splice_nil_child",
            rewrite: |adaptor| {
                let root = tree(adaptor, "(r z)");
                let list = tree(adaptor, "(nil a b)");
                adaptor.add_child(root, list)?;
                Ok(Some(root))
            },
            expected: Some("(r z a b)"),
        },
        TestCase {
            name: "replace_middle_children",
            rewrite: |adaptor| {
                let parent = tree(adaptor, "(p a b c d)");
                let with = tree(adaptor, "(nil x y)");
                adaptor.replace_children(parent, 1, 2, with)?;
                Ok(Some(parent))
            },
            expected: Some("(p a x y d)"),
        },
        TestCase {
            name: "replace_with_subtree",
            rewrite: |adaptor| {
                let parent = tree(adaptor, "(p a b c)");
                let with = tree(adaptor, "(x y)");
                adaptor.replace_children(parent, 0, 1, with)?;
                Ok(Some(parent))
            },
            expected: Some("(p (x y) c)"),
        },
        TestCase {
            name: "duplicate_reference",
            rewrite: |adaptor| {
                // e : ID -> ^(ID $e $e) ;
                let e = tree(adaptor, "(f a (g b))");
                let copy = adaptor.dup_tree(e);
                let root = tree(adaptor, "e");
                adaptor.add_child(root, e)?;
                adaptor.add_child(root, copy)?;
                Ok(Some(root))
            },
            expected: Some("(e (f a (g b)) (f a (g b)))"),
        },
        TestCase {
            name: "nested_operator_roots",
            rewrite: |adaptor| {
                // expr : INT (PLUS^ INT)* ;
                let mut root_0 = adaptor.empty_node();
                let one = tree(adaptor, "1");
                adaptor.add_child(root_0, one)?;
                for operand in ["2", "3"] {
                    let plus = tree(adaptor, "+");
                    root_0 = adaptor.become_root(plus, Some(root_0))?;
                    let operand = tree(adaptor, operand);
                    adaptor.add_child(root_0, operand)?;
                }
                Ok(adaptor.rule_post_processing(root_0))
            },
            expected: Some("(+ (+ 1 2) 3)"),
        },
    ]
});
