use std::fmt;
use std::str::FromStr;

/// One of the four registration inputs. The wire key is what the REST
/// endpoint and the error map use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    IdentityNumber,
    Email,
    DateOfBirth,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [
        FieldId::Name,
        FieldId::IdentityNumber,
        FieldId::Email,
        FieldId::DateOfBirth,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::IdentityNumber => "identityNumber",
            FieldId::Email => "email",
            FieldId::DateOfBirth => "dateOfBirth",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::IdentityNumber => "Identity Number",
            FieldId::Email => "Email Address",
            FieldId::DateOfBirth => "Date of Birth",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FieldId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("unknown field '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::FieldId;

    #[test]
    fn keys_parse_back_to_fields() {
        for field in FieldId::ALL {
            assert_eq!(field.key().parse::<FieldId>(), Ok(field));
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!("date_of_birth".parse::<FieldId>().is_err());
        assert_eq!(FieldId::from_key("Email"), None);
    }
}
