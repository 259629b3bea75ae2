//! The closed catalogue of property shapes this crate understands.

use std::str::FromStr;
use strum::{Display, EnumString, IntoStaticStr};

/// The kind of value a database column holds.
///
/// The service keeps adding property kinds, so any wire type string outside
/// this set is classified as [PropertyType::Unknown] instead of failing.
#[derive(Debug, Clone, Copy, Display, EnumString, IntoStaticStr, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum PropertyType {
    Text,
    RichText,
    Select,
    Title,
    Date,
    Checkbox,
    Number,
    Url,
    Unknown,
}

impl PropertyType {
    /// Map a wire type string onto a [PropertyType], falling back to [PropertyType::Unknown].
    pub fn classify(wire_type: &str) -> Self {
        Self::from_str(wire_type).unwrap_or(Self::Unknown)
    }

    /// whether `wire_type` names a member of the catalogue
    pub fn is_known(wire_type: &str) -> bool {
        Self::from_str(wire_type).is_ok()
    }

    /// The wire literal of this type, which is also the key its payload lives under.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// whether values of this type can be written
    pub fn has_encoder(&self) -> bool {
        !matches!(self, Self::Url | Self::Unknown)
    }
}

/// One column of a database as discovered when connecting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    pub name: String,
    pub property_type: PropertyType,
}

impl PropertyDefinition {
    pub fn new(name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            property_type,
        }
    }
}

/// The ordered column definitions of one database.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseSchema {
    definitions: Vec<PropertyDefinition>,
}

impl DatabaseSchema {
    pub fn new(definitions: Vec<PropertyDefinition>) -> Self {
        Self { definitions }
    }

    pub fn definitions(&self) -> &[PropertyDefinition] {
        &self.definitions
    }

    pub fn property_type(&self, name: &str) -> Option<PropertyType> {
        self.definitions
            .iter()
            .find(|definition| definition.name == name)
            .map(|definition| definition.property_type)
    }

    /// column names in the order the service listed them
    pub fn column_names(&self) -> Vec<String> {
        self.definitions
            .iter()
            .map(|definition| definition.name.clone())
            .collect()
    }
}

impl FromIterator<PropertyDefinition> for DatabaseSchema {
    fn from_iter<T: IntoIterator<Item = PropertyDefinition>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
