use crate::core::field::FieldId;
use serde::{Deserialize, Serialize};

/// Current values of the registration inputs, serialized exactly as the
/// request body of `POST /api/register`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub name: String,
    pub identity_number: String,
    pub email: String,
    /// `YYYY-MM-DD`, or empty when not chosen yet.
    pub date_of_birth: String,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::IdentityNumber => &self.identity_number,
            FieldId::Email => &self.email,
            FieldId::DateOfBirth => &self.date_of_birth,
        }
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let slot = match field {
            FieldId::Name => &mut self.name,
            FieldId::IdentityNumber => &mut self.identity_number,
            FieldId::Email => &mut self.email,
            FieldId::DateOfBirth => &mut self.date_of_birth,
        };
        *slot = value.into();
    }

    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        FieldId::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::FormData;
    use crate::core::field::FieldId;

    #[test]
    fn serializes_with_wire_keys() {
        let data = FormData::new()
            .with(FieldId::Name, "Ada")
            .with(FieldId::IdentityNumber, "3201")
            .with(FieldId::Email, "ada@example.org")
            .with(FieldId::DateOfBirth, "1990-12-10");

        let json = serde_json::to_value(&data).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "identityNumber": "3201",
                "email": "ada@example.org",
                "dateOfBirth": "1990-12-10",
            })
        );
    }

    #[test]
    fn reset_clears_every_field() {
        let mut data = FormData::new().with(FieldId::Email, "x@y.z");
        assert!(!data.is_empty());
        data.reset();
        assert!(data.is_empty());
    }
}
