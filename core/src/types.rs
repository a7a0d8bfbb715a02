//! The todo item entity.
//!
//! # Design
//! `id` is assigned by the caller, never by the store. Input field names are
//! matched without regard to case (`ID`, `Name`, `nAmE` all bind), the way
//! older clients send them; output always uses the lower-case names. Unknown
//! fields are ignored.

use std::fmt;

use serde::{
    de::{self, IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};

use crate::error::StoreError;

/// A single todo item.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: i32,
    pub name: String,
    /// Serialized as `null` when absent.
    pub description: Option<String>,
}

impl TodoItem {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Checks the fields a stored item must carry.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::Validation(
                "The Name field is required.".to_string(),
            ));
        }
        Ok(())
    }
}

const FIELDS: &[&str] = &["id", "name", "description"];

enum Field {
    Id,
    Name,
    Description,
    Other,
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldVisitor;

        impl Visitor<'_> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a todo item field name")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Field, E> {
                Ok(match value.to_ascii_lowercase().as_str() {
                    "id" => Field::Id,
                    "name" => Field::Name,
                    "description" => Field::Description,
                    _ => Field::Other,
                })
            }
        }

        deserializer.deserialize_identifier(FieldVisitor)
    }
}

impl<'de> Deserialize<'de> for TodoItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ItemVisitor;

        impl<'de> Visitor<'de> for ItemVisitor {
            type Value = TodoItem;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a todo item object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<TodoItem, A::Error> {
                let mut id = None;
                let mut name = None;
                let mut description = None;

                while let Some(field) = map.next_key::<Field>()? {
                    match field {
                        Field::Id => {
                            if id.is_some() {
                                return Err(de::Error::duplicate_field("id"));
                            }
                            id = Some(map.next_value()?);
                        }
                        Field::Name => {
                            if name.is_some() {
                                return Err(de::Error::duplicate_field("name"));
                            }
                            name = Some(map.next_value()?);
                        }
                        Field::Description => {
                            if description.is_some() {
                                return Err(de::Error::duplicate_field("description"));
                            }
                            description = Some(map.next_value::<Option<String>>()?);
                        }
                        Field::Other => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                Ok(TodoItem {
                    id: id.ok_or_else(|| de::Error::missing_field("id"))?,
                    name: name.ok_or_else(|| de::Error::missing_field("name"))?,
                    description: description.flatten(),
                })
            }
        }

        deserializer.deserialize_struct("TodoItem", FIELDS, ItemVisitor)
    }
}
