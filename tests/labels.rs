//! Integration tests for the label codec.

use pu_ensemble::error::FitError;
use pu_ensemble::labels::LabelCodec;

// ---------------------------------------------------------------------------
// Codec invariants
// ---------------------------------------------------------------------------

#[test]
fn unlabelled_maps_to_zero() {
    let y = vec![-1, 1, 1, 2, 2, -1];
    let codec = LabelCodec::fit(&y, -1).unwrap();
    assert_eq!(codec.encode(-1), Some(0));
    assert_eq!(codec.k(), 2);
    assert_eq!(codec.unlabelled(), -1);
}

#[test]
fn encode_decode_round_trip() {
    let y = vec![4, -1, 8, 4, 15, -1, 16];
    let codec = LabelCodec::fit(&y, -1).unwrap();
    for &v in &y {
        let code = codec.encode(v).expect("value seen during fit");
        assert_eq!(codec.decode(code), v, "round trip for raw value {}", v);
    }
}

#[test]
fn codes_are_assigned_in_ascending_raw_order() {
    // Stable assignment: repeated fits over the same data are reproducible
    // and the order does not depend on row order.
    let codec_a = LabelCodec::fit(&[-1, 30, 10, 20], -1).unwrap();
    let codec_b = LabelCodec::fit(&[20, -1, 30, -1, 10], -1).unwrap();
    for raw in [10, 20, 30] {
        assert_eq!(codec_a.encode(raw), codec_b.encode(raw));
    }
    assert_eq!(codec_a.encode(10), Some(1));
    assert_eq!(codec_a.encode(20), Some(2));
    assert_eq!(codec_a.encode(30), Some(3));
}

#[test]
fn labels_are_sorted() {
    let codec = LabelCodec::fit(&[5, 2, -1, 9, 2], -1).unwrap();
    assert_eq!(codec.labels(), vec![-1, 2, 5, 9]);
}

#[test]
fn single_positive_class_is_accepted() {
    // K = 1 is a legal, if trivial, decomposition.
    let codec = LabelCodec::fit(&[-1, 1, -1, 1], -1).unwrap();
    assert_eq!(codec.k(), 1);
}

#[test]
fn unseen_value_encodes_to_none() {
    let codec = LabelCodec::fit(&[-1, 1, 2], -1).unwrap();
    assert_eq!(codec.encode(99), None);
}

// ---------------------------------------------------------------------------
// Rejection of malformed input
// ---------------------------------------------------------------------------

#[test]
fn missing_unlabelled_value_is_rejected() {
    let err = LabelCodec::fit(&[1, 2, 3], -1).unwrap_err();
    assert!(matches!(err, FitError::InvalidTrainingSet(-1)), "got {}", err);
}

#[test]
fn only_unlabelled_rows_is_degenerate() {
    let err = LabelCodec::fit(&[-1, -1, -1], -1).unwrap_err();
    assert!(matches!(err, FitError::DegenerateProblem(1)), "got {}", err);
}

#[test]
fn empty_column_is_rejected() {
    let err = LabelCodec::fit(&[], -1).unwrap_err();
    assert!(matches!(err, FitError::InvalidTrainingSet(-1)), "got {}", err);
}
