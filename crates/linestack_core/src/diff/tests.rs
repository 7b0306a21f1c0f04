use super::*;
use crate::text::split_lines;

fn blocks(a: &str, b: &str) -> Vec<DiffBlock> {
    diff_lines(&split_lines(a), &split_lines(b), &DiffOptions::default())
}

/// Apply `blocks` to `a`, taking replacement lines from `b`.
fn rebuild<'a>(a: &[&'a str], b: &[&'a str], blocks: &[DiffBlock]) -> Vec<&'a str> {
    let mut rebuilt = Vec::new();
    let mut cursor = 0;
    for block in blocks {
        assert!(block.a1 >= cursor, "blocks overlap: {:?}", blocks);
        rebuilt.extend_from_slice(&a[cursor..block.a1]);
        rebuilt.extend_from_slice(&b[block.b1..block.b2]);
        cursor = block.a2;
    }
    rebuilt.extend_from_slice(&a[cursor..]);
    rebuilt
}

#[test]
fn identical_inputs_have_no_blocks() {
    assert!(blocks("", "").is_empty());
    assert!(blocks("a\nb\n", "a\nb\n").is_empty());
}

#[test]
fn modification_is_a_single_block() {
    assert_eq!(
        blocks("a\nb\nc\n", "a\nx\nc\n"),
        vec![DiffBlock {
            a1: 1,
            a2: 2,
            b1: 1,
            b2: 2
        }]
    );
}

#[test]
fn insertion_and_deletion_have_empty_sides() {
    assert_eq!(
        blocks("a\nc\n", "a\nb\nc\n"),
        vec![DiffBlock {
            a1: 1,
            a2: 1,
            b1: 1,
            b2: 2
        }]
    );
    assert_eq!(
        blocks("a\nb\nc\n", "a\nc\n"),
        vec![DiffBlock {
            a1: 1,
            a2: 2,
            b1: 1,
            b2: 1
        }]
    );
}

#[test]
fn separated_changes_stay_separate_and_ordered() {
    let found = blocks("a\nb\nc\nd\ne\n", "A\nb\nc\nd\nE\n");
    assert_eq!(
        found,
        vec![
            DiffBlock {
                a1: 0,
                a2: 1,
                b1: 0,
                b2: 1
            },
            DiffBlock {
                a1: 4,
                a2: 5,
                b1: 4,
                b2: 5
            },
        ]
    );
}

#[test]
fn every_algorithm_reconstructs_the_new_side() {
    let a = split_lines("one\ntwo\nthree\nfour\n");
    let b = split_lines("zero\none\nthree\n3.5\nfour\nfive\n");
    for algorithm in [DiffAlgorithm::Myers, DiffAlgorithm::Patience, DiffAlgorithm::Lcs] {
        let options = DiffOptions {
            algorithm,
            timeout: None,
        };
        let found = diff_lines(&a, &b, &options);
        assert_eq!(rebuild(&a, &b, &found), b, "algorithm: {}", algorithm);
    }
}

#[test]
fn leading_delete_before_duplicated_line_keeps_positions_aligned() {
    // Myers reports a delete, an equal run and an insert whose start offsets
    // do not line up with the preceding ops.
    let a = ["d\n", "a\n"];
    let b = ["a\n", "a\n", "ed\n", "c\n"];
    for algorithm in [DiffAlgorithm::Myers, DiffAlgorithm::Patience, DiffAlgorithm::Lcs] {
        let options = DiffOptions {
            algorithm,
            timeout: None,
        };
        let found = diff_lines(&a, &b, &options);
        assert_eq!(rebuild(&a, &b, &found), b, "algorithm: {}", algorithm);
        for block in &found {
            assert!(block.a2 <= a.len() && block.b2 <= b.len(), "{:?}", found);
        }
    }
}

#[test]
fn algorithm_parses_case_insensitively() {
    assert_eq!("Myers".parse::<DiffAlgorithm>(), Ok(DiffAlgorithm::Myers));
    assert_eq!(" patience ".parse::<DiffAlgorithm>(), Ok(DiffAlgorithm::Patience));
    assert_eq!("LCS".parse::<DiffAlgorithm>(), Ok(DiffAlgorithm::Lcs));
    assert_eq!(
        "histogram".parse::<DiffAlgorithm>(),
        Err(LineLogError::UnknownDiffAlgorithm("histogram".to_string()))
    );
}
