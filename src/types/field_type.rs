//! JVM field descriptors and their Java source names.

use std::str::{Chars, FromStr};

use itertools::Itertools;

/// A primitive type in Java.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, derive_more::Display)]
pub enum PrimitiveType {
    /// The `boolean` type.
    #[display("boolean")]
    Boolean,
    /// The `char` type.
    #[display("char")]
    Char,
    /// The `float` type.
    #[display("float")]
    Float,
    /// The `double` type.
    #[display("double")]
    Double,
    /// The `byte` type.
    #[display("byte")]
    Byte,
    /// The `short` type.
    #[display("short")]
    Short,
    /// The `int` type.
    #[display("int")]
    Int,
    /// The `long` type.
    #[display("long")]
    Long,
}

impl TryFrom<char> for PrimitiveType {
    type Error = InvalidDescriptor;

    fn try_from(descriptor: char) -> Result<Self, Self::Error> {
        match descriptor {
            'Z' => Ok(Self::Boolean),
            'C' => Ok(Self::Char),
            'F' => Ok(Self::Float),
            'D' => Ok(Self::Double),
            'B' => Ok(Self::Byte),
            'S' => Ok(Self::Short),
            'I' => Ok(Self::Int),
            'J' => Ok(Self::Long),
            unexpected => Err(InvalidDescriptor(unexpected.to_string())),
        }
    }
}

/// The type of a parameter or a non-void return slot.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum FieldType {
    /// A primitive type.
    Base(PrimitiveType),
    /// A reference type, carrying the binary (slash separated) class name.
    Object(String),
    /// An array type.
    Array(Box<FieldType>),
}

impl FieldType {
    /// Wraps the type into an array type with one more dimension.
    #[must_use]
    pub fn into_array_type(self) -> Self {
        Self::Array(Box::new(self))
    }

    /// Renders the fully qualified dotted source name, e.g. `java.lang.String[]`.
    #[must_use]
    pub fn source_name(&self) -> String {
        match self {
            Self::Base(it) => it.to_string(),
            Self::Object(binary_name) => binary_name.replace('/', "."),
            Self::Array(inner) => format!("{}[]", inner.source_name()),
        }
    }

    /// Parses one field type from a descriptor prefix and advances the cursor
    /// past it, leaving any following descriptors unread.
    pub(crate) fn parse_single(
        prefix: char,
        remaining: &mut Chars<'_>,
    ) -> Result<FieldType, InvalidDescriptor> {
        if let Ok(p) = PrimitiveType::try_from(prefix) {
            Ok(FieldType::Base(p))
        } else {
            match prefix {
                'L' => {
                    let binary_name: String = remaining.take_while_ref(|c| *c != ';').collect();
                    match remaining.next() {
                        Some(';') => Ok(FieldType::Object(binary_name)),
                        _ => Err(InvalidDescriptor(format!("L{binary_name}"))),
                    }
                }
                '[' => {
                    let next_prefix = remaining
                        .next()
                        .ok_or_else(|| InvalidDescriptor("[".to_owned()))?;
                    Self::parse_single(next_prefix, remaining).map(FieldType::into_array_type)
                }
                unexpected => Err(InvalidDescriptor(unexpected.to_string())),
            }
        }
    }
}

impl FromStr for FieldType {
    type Err = InvalidDescriptor;

    fn from_str(descriptor: &str) -> Result<Self, Self::Err> {
        let mut chars = descriptor.chars();
        let prefix = chars
            .next()
            .ok_or_else(|| InvalidDescriptor(descriptor.to_owned()))?;
        let parsed = Self::parse_single(prefix, &mut chars)
            .map_err(|_| InvalidDescriptor(descriptor.to_owned()))?;
        match chars.next() {
            None => Ok(parsed),
            Some(_) => Err(InvalidDescriptor(descriptor.to_owned())),
        }
    }
}

/// An error indicating that a type descriptor is invalid.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid descriptor: {0}")]
pub struct InvalidDescriptor(pub String);
