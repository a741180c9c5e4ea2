//! Concept record - one Frayer model card

use serde::{Deserialize, Serialize};

/// One glossary entry
///
/// `name` is both the display label and the identity; identity comparisons are
/// case-insensitive (see [`name_key`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub name: String,
    pub definition: String,
    pub characteristics: String,
    pub examples: String,
    pub non_examples: String,
}

/// Identifies one of the editable fields of a [`Concept`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConceptField {
    Name,
    Definition,
    Characteristics,
    Examples,
    NonExamples,
}

impl ConceptField {
    /// All fields in column order
    pub const ALL: [ConceptField; 5] = [
        ConceptField::Name,
        ConceptField::Definition,
        ConceptField::Characteristics,
        ConceptField::Examples,
        ConceptField::NonExamples,
    ];
}

impl Concept {
    pub fn new(
        name: impl Into<String>,
        definition: impl Into<String>,
        characteristics: impl Into<String>,
        examples: impl Into<String>,
        non_examples: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            definition: definition.into(),
            characteristics: characteristics.into(),
            examples: examples.into(),
            non_examples: non_examples.into(),
        }
    }

    /// Concept with only a name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Case-folded identity of this concept
    pub fn key(&self) -> String {
        name_key(&self.name)
    }

    /// Whether `name` identifies this concept (case-insensitive)
    pub fn has_name(&self, name: &str) -> bool {
        self.key() == name_key(name)
    }

    /// Copy with every field trimmed
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            definition: self.definition.trim().to_string(),
            characteristics: self.characteristics.trim().to_string(),
            examples: self.examples.trim().to_string(),
            non_examples: self.non_examples.trim().to_string(),
        }
    }

    /// Fields in column order
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.name,
            &self.definition,
            &self.characteristics,
            &self.examples,
            &self.non_examples,
        ]
    }

    pub fn field(&self, field: ConceptField) -> &str {
        match field {
            ConceptField::Name => &self.name,
            ConceptField::Definition => &self.definition,
            ConceptField::Characteristics => &self.characteristics,
            ConceptField::Examples => &self.examples,
            ConceptField::NonExamples => &self.non_examples,
        }
    }

    pub fn set_field(&mut self, field: ConceptField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ConceptField::Name => self.name = value,
            ConceptField::Definition => self.definition = value,
            ConceptField::Characteristics => self.characteristics = value,
            ConceptField::Examples => self.examples = value,
            ConceptField::NonExamples => self.non_examples = value,
        }
    }
}

/// Case-folded form of a name, used as the store key
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}
