use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::profile::fields;

bitflags! {
    /// Which of the built-in profile fields a profile step includes.
    ///
    /// Bit 0 and everything above bit 4 are reserved. Raw values carrying
    /// them are kept as given and ignored when fields are materialized.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ProfileStepOptions: u32 {
        const INCLUDE_GIVEN_NAME = 1 << 1;
        const INCLUDE_FAMILY_NAME = 1 << 2;
        const INCLUDE_GENDER = 1 << 3;
        const INCLUDE_DOB = 1 << 4;
    }
}

impl ProfileStepOptions {
    pub const DEFAULT: Self = Self::empty();

    pub fn from_raw(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }

    pub fn has_reserved_bits(self) -> bool {
        self.bits() & !Self::all().bits() != 0
    }

    pub fn includes(self, field: ProfileField) -> bool {
        self.contains(field.flag())
    }

    /// Enabled fields in declaration order.
    pub fn fields(self) -> impl Iterator<Item = ProfileField> {
        ProfileField::ALL
            .into_iter()
            .filter(move |field| self.includes(*field))
    }
}

/// Serializes as the list of enabled field names, or as the raw bits when
/// reserved bits are set so the value survives a round trip.
impl Serialize for ProfileStepOptions {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.has_reserved_bits() {
            serializer.serialize_u32(self.bits())
        } else {
            serializer.collect_seq(self.fields())
        }
    }
}

impl From<ProfileField> for ProfileStepOptions {
    fn from(field: ProfileField) -> Self {
        field.flag()
    }
}

impl FromIterator<ProfileField> for ProfileStepOptions {
    fn from_iter<I: IntoIterator<Item = ProfileField>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::DEFAULT, |options, field| options | field.flag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    GivenName,
    FamilyName,
    Gender,
    #[serde(rename = "dob", alias = "date_of_birth")]
    DateOfBirth,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [
        ProfileField::GivenName,
        ProfileField::FamilyName,
        ProfileField::Gender,
        ProfileField::DateOfBirth,
    ];

    pub fn flag(self) -> ProfileStepOptions {
        match self {
            Self::GivenName => ProfileStepOptions::INCLUDE_GIVEN_NAME,
            Self::FamilyName => ProfileStepOptions::INCLUDE_FAMILY_NAME,
            Self::Gender => ProfileStepOptions::INCLUDE_GENDER,
            Self::DateOfBirth => ProfileStepOptions::INCLUDE_DOB,
        }
    }

    pub fn identifier(self) -> &'static str {
        match self {
            Self::GivenName => fields::GIVEN_NAME_IDENTIFIER,
            Self::FamilyName => fields::FAMILY_NAME_IDENTIFIER,
            Self::Gender => fields::GENDER_IDENTIFIER,
            Self::DateOfBirth => fields::DOB_IDENTIFIER,
        }
    }

    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.identifier() == identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::{ProfileField, ProfileStepOptions};

    #[test]
    fn flag_values_are_fixed() {
        assert_eq!(ProfileStepOptions::DEFAULT.bits(), 0);
        assert_eq!(ProfileStepOptions::INCLUDE_GIVEN_NAME.bits(), 2);
        assert_eq!(ProfileStepOptions::INCLUDE_FAMILY_NAME.bits(), 4);
        assert_eq!(ProfileStepOptions::INCLUDE_GENDER.bits(), 8);
        assert_eq!(ProfileStepOptions::INCLUDE_DOB.bits(), 16);
        assert_eq!(ProfileStepOptions::default(), ProfileStepOptions::DEFAULT);
    }

    #[test]
    fn reserved_bits_are_retained_but_not_fields() {
        let options = ProfileStepOptions::from_raw(1 | 8 | 64);
        assert_eq!(options.bits(), 73);
        assert!(options.has_reserved_bits());
        assert_eq!(options.fields().collect::<Vec<_>>(), vec![ProfileField::Gender]);
        assert!(!ProfileStepOptions::all().has_reserved_bits());
    }

    #[test]
    fn collects_from_fields() {
        let options: ProfileStepOptions =
            [ProfileField::DateOfBirth, ProfileField::GivenName].into_iter().collect();
        assert_eq!(
            options,
            ProfileStepOptions::INCLUDE_GIVEN_NAME | ProfileStepOptions::INCLUDE_DOB
        );
        assert_eq!(
            options.fields().collect::<Vec<_>>(),
            vec![ProfileField::GivenName, ProfileField::DateOfBirth]
        );
    }

    #[test]
    fn field_names_in_yaml() {
        let fields: Vec<ProfileField> =
            serde_yaml::from_str("[given_name, family_name, gender, dob, date_of_birth]")
                .expect("fields");
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[3], ProfileField::DateOfBirth);
        assert_eq!(fields[4], ProfileField::DateOfBirth);
    }

    #[test]
    fn serializes_reserved_bits_as_number() {
        let plain = ProfileStepOptions::INCLUDE_GENDER | ProfileStepOptions::INCLUDE_DOB;
        assert_eq!(
            serde_json::to_value(plain).expect("json"),
            serde_json::json!(["gender", "dob"])
        );
        let raw = ProfileStepOptions::from_raw(1 | 16);
        assert_eq!(serde_json::to_value(raw).expect("json"), serde_json::json!(17));
    }

    #[test]
    fn identifiers_map_back_to_fields() {
        for field in ProfileField::ALL {
            assert_eq!(ProfileField::from_identifier(field.identifier()), Some(field));
        }
        assert_eq!(ProfileField::from_identifier("email"), None);
    }
}
