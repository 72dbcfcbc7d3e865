//! Tests for error types.
//!
//! ## Test Organization
//!
//! 1. **Classification** - Every variant maps onto its kind
//! 2. **Display** - Messages carry the offending context

use smoothers::internals::primitives::errors::{ErrorKind, SmoothError};

// ============================================================================
// Classification Tests
// ============================================================================

/// Test dimension errors are classified together.
#[test]
fn test_kind_dimension() {
    assert_eq!(SmoothError::EmptyInput.kind(), ErrorKind::DimensionMismatch);
    assert_eq!(
        SmoothError::MismatchedInputs { x_len: 1, y_len: 2 }.kind(),
        ErrorKind::DimensionMismatch
    );
    assert_eq!(
        SmoothError::TooFewPoints { got: 1, min: 2 }.kind(),
        ErrorKind::DimensionMismatch
    );
}

/// Test parameter errors are classified together.
#[test]
fn test_kind_parameter() {
    let errors = [
        SmoothError::ParameterOutOfRange {
            name: "k".into(),
            value: 50.0,
            min: 1.0,
            max: 20.0,
        },
        SmoothError::NonIntegerParameter {
            name: "n".into(),
            value: 2.5,
        },
        SmoothError::InvalidParameter {
            name: "lambda".into(),
            value: -1.0,
            reason: "must be finite and non-negative",
        },
        SmoothError::DuplicateParameter {
            parameter: "k".into(),
        },
    ];
    for e in errors {
        assert_eq!(e.kind(), ErrorKind::InvalidParameter, "{e}");
    }
}

/// Test numeric and lookup errors.
#[test]
fn test_kind_numeric_and_lookup() {
    assert_eq!(
        SmoothError::SingularSystem { size: 3 }.kind(),
        ErrorKind::NumericError
    );
    assert_eq!(
        SmoothError::ZeroVariance("x".into()).kind(),
        ErrorKind::NumericError
    );
    assert_eq!(SmoothError::ZeroWeight.kind(), ErrorKind::NumericError);
    assert_eq!(
        SmoothError::InvalidNumericValue("x[0]=NaN".into()).kind(),
        ErrorKind::NumericError
    );
    assert_eq!(
        SmoothError::UnknownSmoother("nope".into()).kind(),
        ErrorKind::NotFound
    );
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test messages include their context.
#[test]
fn test_display_messages() {
    let msg = SmoothError::MismatchedInputs { x_len: 3, y_len: 4 }.to_string();
    assert!(msg.contains('3') && msg.contains('4'));

    let msg = SmoothError::ParameterOutOfRange {
        name: "span".into(),
        value: 40.0,
        min: 2.0,
        max: 20.0,
    }
    .to_string();
    assert!(msg.contains("span") && msg.contains("40") && msg.contains("20"));

    let msg = SmoothError::UnknownSmoother("smooth-type-foo".into()).to_string();
    assert!(msg.contains("smooth-type-foo"));
}

/// Test the error works as a boxed std error.
#[test]
fn test_std_error() {
    let boxed: Box<dyn std::error::Error> = Box::new(SmoothError::ZeroWeight);
    assert!(!boxed.to_string().is_empty());
}
