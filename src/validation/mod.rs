//! Request validation.
//!
//! Every request type implements [`RequestValidator`]. Validation is pure
//! and never panics; a rejected request comes back as
//! [`CrowdinError::Validation`] naming the field or pair of fields at fault.

use crate::errors::{CrowdinError, CrowdinResult, ValidationError};
use tracing::debug;

/// A request that can check its own field rules before it is sent.
pub trait RequestValidator {
    /// Check the request's field rules
    fn validate(&self) -> CrowdinResult<()>;
}

/// Either kind of project build request.
///
/// Lets [`crate::services::translations::TranslationsService::build_project`]
/// accept a regular or a pseudo-translation build through one signature.
pub trait BuildProjectTranslationRequest: serde::Serialize {
    /// Check the build-specific rules
    fn validate_build_request(&self) -> CrowdinResult<()>;
}

/// Validate a request that may be absent.
pub fn validate_request<R: RequestValidator + ?Sized>(request: Option<&R>) -> CrowdinResult<()> {
    match request {
        Some(request) => request.validate(),
        None => Err(ValidationError::MissingRequest.into()),
    }
}

/// Run `validate` on `request`, logging the failure against `request_type`.
pub(crate) fn checked<R: RequestValidator + ?Sized>(
    request_type: &'static str,
    request: &R,
) -> CrowdinResult<()> {
    request.validate().map_err(|err| {
        debug!(request_type, error = %err, "Request rejected by validation");
        err
    })
}

/// Same as [`checked`] for the build-specific rules.
pub(crate) fn checked_build<R: BuildProjectTranslationRequest + ?Sized>(
    request_type: &'static str,
    request: &R,
) -> CrowdinResult<()> {
    request.validate_build_request().map_err(|err| {
        debug!(request_type, error = %err, "Request rejected by validation");
        err
    })
}

pub(crate) fn require_nonzero(field: &'static str, value: i64) -> CrowdinResult<()> {
    if value == 0 {
        return Err(ValidationError::Required { field }.into());
    }
    Ok(())
}

pub(crate) fn require_non_empty<T>(field: &'static str, values: &[T]) -> CrowdinResult<()> {
    if values.is_empty() {
        return Err(ValidationError::Required { field }.into());
    }
    Ok(())
}

pub(crate) fn require_text(field: &'static str, value: &str) -> CrowdinResult<()> {
    if value.is_empty() {
        return Err(ValidationError::Required { field }.into());
    }
    Ok(())
}

/// An identifier placed in the URL path must be one non-empty segment.
/// Separators and query characters are percent-encoded when the segment is
/// appended; only `.` and `..` need rejecting.
pub(crate) fn require_path_segment(field: &'static str, value: &str) -> CrowdinResult<()> {
    require_text(field, value)?;
    if matches!(value, "." | "..") {
        return Err(ValidationError::InvalidType {
            field,
            expected: "a single path segment",
        }
        .into());
    }
    Ok(())
}

/// Both flags enabled at once is an error; any other combination passes.
pub(crate) fn exclusive_flags(
    first: (&'static str, Option<bool>),
    second: (&'static str, Option<bool>),
) -> CrowdinResult<()> {
    if first.1 == Some(true) && second.1 == Some(true) {
        return Err(ValidationError::ConflictingFlags {
            first: first.0,
            second: second.0,
        }
        .into());
    }
    Ok(())
}

/// Both identifiers set (positive) at once is an error.
pub(crate) fn exclusive_ids(
    first: (&'static str, Option<i64>),
    second: (&'static str, Option<i64>),
) -> CrowdinResult<()> {
    let is_set = |id: Option<i64>| matches!(id, Some(id) if id > 0);
    if is_set(first.1) && is_set(second.1) {
        return Err(ValidationError::ConflictingFields {
            first: first.0,
            second: second.0,
        }
        .into());
    }
    Ok(())
}

pub(crate) fn within_range(field: &'static str, value: i64, min: i64, max: i64) -> CrowdinResult<()> {
    if value < min || value > max {
        return Err(CrowdinError::Validation(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    struct AlwaysValid;

    impl RequestValidator for AlwaysValid {
        fn validate(&self) -> CrowdinResult<()> {
            Ok(())
        }
    }

    #[derive(serde::Serialize)]
    struct RangedBuild {
        percent: i64,
    }

    impl BuildProjectTranslationRequest for RangedBuild {
        fn validate_build_request(&self) -> CrowdinResult<()> {
            within_range("lengthTransformation", self.percent, -50, 100)
        }
    }

    #[test]
    fn test_checked_build_passes_errors_through() {
        assert!(checked_build("RangedBuild", &RangedBuild { percent: 10 }).is_ok());

        let err = checked_build("RangedBuild", &RangedBuild { percent: 101 }).unwrap_err();
        assert_eq!(
            err.as_validation().and_then(|e| e.field()),
            Some("lengthTransformation")
        );
    }

    #[test]
    fn test_validate_request_none() {
        let err = validate_request::<AlwaysValid>(None).unwrap_err();
        assert_eq!(err.as_validation(), Some(&ValidationError::MissingRequest));
        assert!(validate_request(Some(&AlwaysValid)).is_ok());
    }

    #[test_case(None, None, true)]
    #[test_case(Some(true), None, true)]
    #[test_case(None, Some(true), true)]
    #[test_case(Some(false), Some(true), true)]
    #[test_case(Some(true), Some(false), true)]
    #[test_case(Some(false), Some(false), true)]
    #[test_case(Some(true), Some(true), false)]
    fn test_exclusive_flags(a: Option<bool>, b: Option<bool>, ok: bool) {
        assert_eq!(exclusive_flags(("a", a), ("b", b)).is_ok(), ok);
    }

    #[test_case(None, None, true)]
    #[test_case(Some(1), None, true)]
    #[test_case(None, Some(2), true)]
    #[test_case(Some(0), Some(2), true)]
    #[test_case(Some(1), Some(2), false)]
    fn test_exclusive_ids(a: Option<i64>, b: Option<i64>, ok: bool) {
        assert_eq!(exclusive_ids(("a", a), ("b", b)).is_ok(), ok);
    }

    #[test_case("uk", true)]
    #[test_case("50fb3506-4127", true)]
    #[test_case("../x", true)]
    #[test_case("", false)]
    #[test_case(".", false)]
    #[test_case("..", false)]
    fn test_require_path_segment(value: &str, ok: bool) {
        assert_eq!(require_path_segment("languageId", value).is_ok(), ok);
    }

    #[test]
    fn test_within_range_bounds() {
        assert!(within_range("x", -50, -50, 100).is_ok());
        assert!(within_range("x", 100, -50, 100).is_ok());
        assert!(within_range("x", -51, -50, 100).is_err());
        assert!(within_range("x", 101, -50, 100).is_err());
    }
}
