use zipfold::{ReduceConfig, reduce};

struct Case {
    name: &'static str,
    input: &'static [(&'static str, &'static str)],
    expected: &'static [(&'static str, &'static str)],
}

#[test]
fn golden_corpus_regression() {
    let cases = [
        Case {
            name: "single_range",
            input: &[("94133", "94133")],
            expected: &[("94133", "94133")],
        },
        Case {
            name: "disjoint_ordered_pair",
            input: &[("94133", "94133"), ("94200", "94299")],
            expected: &[("94133", "94133"), ("94200", "94299")],
        },
        Case {
            name: "overlap_one_apart",
            input: &[("94000", "94133"), ("94001", "94134")],
            expected: &[("94000", "94134")],
        },
        Case {
            name: "shared_boundary",
            input: &[("94000", "94133"), ("94133", "94299")],
            expected: &[("94000", "94299")],
        },
        Case {
            name: "adjacent_stays_separate",
            input: &[("94000", "94133"), ("94134", "94299"), ("94600", "94699")],
            expected: &[("94000", "94133"), ("94134", "94299"), ("94600", "94699")],
        },
        Case {
            name: "unordered_disjoint",
            input: &[("94134", "94299"), ("94600", "94699"), ("94000", "94133")],
            expected: &[("94000", "94133"), ("94134", "94299"), ("94600", "94699")],
        },
        Case {
            name: "unordered_with_low_block",
            input: &[("94600", "94699"), ("94000", "94133"), ("00000", "12345")],
            expected: &[("00000", "12345"), ("94000", "94133"), ("94600", "94699")],
        },
        Case {
            name: "point_extends_into_block",
            input: &[("94133", "94133"), ("94133", "94299"), ("94600", "94699")],
            expected: &[("94133", "94299"), ("94600", "94699")],
        },
        Case {
            name: "boundary_merge_then_disjoint",
            input: &[("94000", "94133"), ("94133", "94299"), ("94600", "94699")],
            expected: &[("94000", "94299"), ("94600", "94699")],
        },
        Case {
            name: "overlap_past_boundary",
            input: &[("94000", "94134"), ("94133", "94299"), ("94600", "94699")],
            expected: &[("94000", "94299"), ("94600", "94699")],
        },
        Case {
            name: "point_duplicates",
            input: &[("94133", "94133"), ("94133", "94133"), ("94226", "94399")],
            expected: &[("94133", "94133"), ("94226", "94399")],
        },
        Case {
            name: "restriction_pair_with_tail_overlap",
            input: &[("94133", "94133"), ("94200", "94299"), ("94226", "94399")],
            expected: &[("94133", "94133"), ("94200", "94399")],
        },
        Case {
            name: "unordered_overlapping_blocks",
            input: &[
                ("94600", "94699"),
                ("94000", "94133"),
                ("94133", "94299"),
                ("00000", "12345"),
            ],
            expected: &[("00000", "12345"), ("94000", "94299"), ("94600", "94699")],
        },
        Case {
            name: "nested_collapse",
            input: &[("94133", "94299"), ("94134", "94298")],
            expected: &[("94133", "94299")],
        },
        Case {
            name: "reversed_bounds_in_the_middle",
            input: &[
                ("94600", "94699"),
                ("94133", "94000"),
                ("94133", "94299"),
                ("00000", "12345"),
            ],
            expected: &[("00000", "12345"), ("94000", "94299"), ("94600", "94699")],
        },
        Case {
            name: "containment_with_adjacent_tail",
            input: &[("10000", "50000"), ("20000", "30000"), ("30001", "40000")],
            expected: &[("10000", "50000")],
        },
        Case {
            name: "containment_with_overlapping_tail",
            input: &[("10000", "50000"), ("20000", "30000"), ("29999", "40000")],
            expected: &[("10000", "50000")],
        },
        Case {
            name: "unordered_containment",
            input: &[("29999", "40000"), ("10000", "50000"), ("20000", "30000")],
            expected: &[("10000", "50000")],
        },
        Case {
            name: "whitespace_noise_in_bounds",
            input: &[
                ("29999  ", "40000"),
                ("10000", "   50000"),
                ("    20000", "30000"),
            ],
            expected: &[("10000", "50000")],
        },
        Case {
            name: "leading_zeros_preserved",
            input: &[("00000", "00010"), ("00005", "00020")],
            expected: &[("00000", "00020")],
        },
    ];

    let cfg = ReduceConfig::default();
    for case in cases {
        let ranges = reduce(case.input, &cfg)
            .unwrap_or_else(|e| panic!("case {} failed: {e}", case.name));

        let rendered: Vec<(String, String)> = ranges
            .iter()
            .map(|r| (r.low().to_string(), r.high().to_string()))
            .collect();
        let expected: Vec<(String, String)> = case
            .expected
            .iter()
            .map(|(low, high)| (low.to_string(), high.to_string()))
            .collect();
        assert_eq!(rendered, expected, "range mismatch for {}", case.name);
    }
}

#[test]
fn corpus_outputs_serialize_as_string_pairs() {
    let cfg = ReduceConfig::default();
    let ranges = reduce(&[("94001", "94134"), ("94000", "94133")], &cfg).expect("input reduces");
    let json = serde_json::to_value(&ranges).expect("serialize");
    assert_eq!(json, serde_json::json!([["94000", "94134"]]));
}
