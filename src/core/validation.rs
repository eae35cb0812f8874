use crate::core::error_map::ErrorMap;
use crate::core::field::FieldId;
use crate::core::form_data::FormData;
use crate::core::validators::{self, Validator};

pub const NAME_REQUIRED: &str = "Name is required";
pub const IDENTITY_NUMBER_REQUIRED: &str = "Identity Number is required";
pub const EMAIL_INVALID: &str = "Valid email is required";
pub const DATE_OF_BIRTH_REQUIRED: &str = "Date of Birth is required";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub errors: ErrorMap,
    pub is_valid: bool,
}

/// Rules for one field, checked in order; the first failure wins.
pub fn rules_for(field: FieldId) -> Vec<Validator> {
    match field {
        FieldId::Name => vec![validators::required(NAME_REQUIRED)],
        FieldId::IdentityNumber => vec![validators::required(IDENTITY_NUMBER_REQUIRED)],
        FieldId::Email => vec![
            validators::required(EMAIL_INVALID),
            validators::email(EMAIL_INVALID),
        ],
        FieldId::DateOfBirth => vec![validators::present(DATE_OF_BIRTH_REQUIRED)],
    }
}

pub fn validate_field(field: FieldId, value: &str) -> Result<(), String> {
    for validator in rules_for(field) {
        validator(value)?;
    }
    Ok(())
}

/// Checks every field independently and reports all failures at once.
pub fn validate(data: &FormData) -> Validation {
    let errors: ErrorMap = FieldId::ALL
        .into_iter()
        .filter_map(|field| {
            validate_field(field, data.get(field))
                .err()
                .map(|message| (field.key(), message))
        })
        .collect();

    let is_valid = errors.is_empty();
    Validation { errors, is_valid }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn complete() -> FormData {
        FormData::new()
            .with(FieldId::Name, "Ada Lovelace")
            .with(FieldId::IdentityNumber, "3174000000000001")
            .with(FieldId::Email, "ada@example.org")
            .with(FieldId::DateOfBirth, "1815-12-10")
    }

    #[test]
    fn complete_form_is_valid() {
        let validation = validate(&complete());
        assert!(validation.is_valid);
        assert!(validation.errors.is_empty());
    }

    #[test]
    fn empty_form_reports_every_field() {
        let validation = validate(&FormData::new());
        assert!(!validation.is_valid);
        assert_eq!(
            validation.errors,
            ErrorMap::new()
                .with("name", NAME_REQUIRED)
                .with("identityNumber", IDENTITY_NUMBER_REQUIRED)
                .with("email", EMAIL_INVALID)
                .with("dateOfBirth", DATE_OF_BIRTH_REQUIRED)
        );
    }

    #[rstest]
    #[case(FieldId::Name, "   ", NAME_REQUIRED)]
    #[case(FieldId::IdentityNumber, "\t", IDENTITY_NUMBER_REQUIRED)]
    #[case(FieldId::Email, " ", EMAIL_INVALID)]
    #[case(FieldId::Email, "ada.example.org", EMAIL_INVALID)]
    #[case(FieldId::Email, "ada@example", EMAIL_INVALID)]
    #[case(FieldId::DateOfBirth, "", DATE_OF_BIRTH_REQUIRED)]
    fn single_bad_field_is_the_only_error(
        #[case] field: FieldId,
        #[case] value: &str,
        #[case] message: &str,
    ) {
        let validation = validate(&complete().with(field, value));
        assert!(!validation.is_valid);
        assert_eq!(validation.errors, ErrorMap::new().with(field.key(), message));
    }

    #[test]
    fn future_dates_are_accepted() {
        let validation = validate(&complete().with(FieldId::DateOfBirth, "2999-01-01"));
        assert!(validation.is_valid);
    }

    #[test]
    fn identity_number_has_no_format_check() {
        let validation = validate(&complete().with(FieldId::IdentityNumber, "not-a-number"));
        assert!(validation.is_valid);
    }

    #[test]
    fn validation_is_idempotent() {
        let data = complete().with(FieldId::Email, "broken").with(FieldId::Name, "");
        assert_eq!(validate(&data), validate(&data));
    }
}
