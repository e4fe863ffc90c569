//! Tests for the single-cell cleaning functions

use crate::app::services::extract::cleaners::{clean_symmetrical, clean_taps};
use crate::app::services::extract::{amps_to_kiloamps, microsiemens_to_siemens, reciprocal_siemens};
use crate::app::services::workbook::Cell;
use crate::Error;

#[test]
fn test_clean_symmetrical_recognizes_asym() {
    let cell = Cell::Text("asymmetrical".into());
    assert_eq!(clean_symmetrical(&cell), Some(false));

    let cell = Cell::Text("ASYM".into());
    assert_eq!(clean_symmetrical(&cell), Some(false));
}

#[test]
fn test_clean_symmetrical_defaults_to_symmetric() {
    let cell = Cell::Text("Symmetric".into());
    assert_eq!(clean_symmetrical(&cell), Some(true));
}

#[test]
fn test_clean_symmetrical_missing_stays_missing() {
    assert_eq!(clean_symmetrical(&Cell::Empty), None);
}

#[test]
fn test_clean_taps_parses_angle_bracket_form() {
    let cell = Cell::Text("<-10;+10>".into());
    assert_eq!(clean_taps(&cell).unwrap(), (Some(-10), Some(10)));
}

#[test]
fn test_clean_taps_parses_slash_form() {
    let cell = Cell::Text("-13/+13".into());
    assert_eq!(clean_taps(&cell).unwrap(), (Some(-13), Some(13)));
}

#[test]
fn test_clean_taps_missing_and_zero_mean_no_range() {
    assert_eq!(clean_taps(&Cell::Empty).unwrap(), (None, None));
    assert_eq!(clean_taps(&Cell::Number(0.0)).unwrap(), (None, None));
    assert_eq!(clean_taps(&Cell::Text("0".into())).unwrap(), (None, None));
}

#[test]
fn test_clean_taps_wrong_token_count_fails() {
    let err = clean_taps(&Cell::Text("<-10;0;+10>".into())).unwrap_err();
    match err {
        Error::MalformedField { message, .. } => {
            assert!(message.contains("expected 2 tap tokens, found 3"));
        }
        other => panic!("Expected MalformedField, got {:?}", other),
    }

    assert!(clean_taps(&Cell::Text("<+10>".into())).is_err());
}

#[test]
fn test_clean_taps_non_integer_token_fails() {
    assert!(clean_taps(&Cell::Text("<low;high>".into())).is_err());
}

#[test]
fn test_clean_taps_inverted_range_fails() {
    let err = clean_taps(&Cell::Text("<10;-10>".into())).unwrap_err();
    match err {
        Error::MalformedField { message, .. } => assert!(message.contains("inverted")),
        other => panic!("Expected MalformedField, got {:?}", other),
    }
}

#[test]
fn test_amps_to_kiloamps_exact() {
    assert_eq!(
        amps_to_kiloamps(vec![Some(1000.0), None, Some(1500.0)]),
        vec![Some(1.0), None, Some(1.5)]
    );
}

#[test]
fn test_microsiemens_to_siemens_exact() {
    assert_eq!(
        microsiemens_to_siemens(vec![Some(1_000_000.0), None]),
        vec![Some(1.0), None]
    );
}

#[test]
fn test_reciprocal_siemens_inverts_and_propagates_missing() {
    assert_eq!(
        reciprocal_siemens("Reactance_X(Ω)", vec![Some(2.0), None, Some(4.0)]).unwrap(),
        vec![Some(0.5), None, Some(0.25)]
    );
}

#[test]
fn test_reciprocal_siemens_rejects_zero() {
    let err = reciprocal_siemens("Reactance_X(Ω)", vec![Some(0.0)]).unwrap_err();
    match err {
        Error::MalformedField { field, message, .. } => {
            assert_eq!(field, "Reactance_X(Ω)");
            assert!(message.contains("no reciprocal"));
        }
        other => panic!("Expected MalformedField, got {:?}", other),
    }
}
