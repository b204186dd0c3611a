//! The canonical member signature model shared by all three parsers.

pub mod generics;
pub mod modifiers;
pub mod parsing;
pub(crate) mod tokenizer;

use std::fmt::Display;
use std::hash::{Hash, Hasher};

use itertools::Itertools;
use tracing::debug;

use crate::types::VOID;

pub use generics::{ClassContext, GenericsMap};
pub use modifiers::{Modifier, ModifierFlags};
pub use parsing::{SignatureError, SignatureResult};

/// One member signature reconciled from any of the supported formats.
///
/// Two signatures are equal when owning type, member name, return type, and
/// parameter types (in order) all agree. Modifiers are excluded from
/// equality: listings of the same member produced by different tools may
/// disagree on textual flags such as `synchronized`.
#[derive(Debug, Clone, Eq)]
pub struct MemberSignature {
    owning_type: String,
    modifiers: Vec<Modifier>,
    modifier_flags: ModifierFlags,
    return_type: Option<String>,
    member_name: Option<String>,
    parameter_types: Vec<String>,
}

impl MemberSignature {
    /// The JVM internal name of instance initializers.
    pub const CONSTRUCTOR_NAME: &'static str = "<init>";
    /// The JVM internal name of static initializer blocks.
    pub const STATIC_INITIALIZER_NAME: &'static str = "<clinit>";

    /// Builds a signature from pieces the caller already holds and runs the
    /// usual completion rules on them.
    #[must_use]
    pub fn from_parts(
        owning_type: impl Into<String>,
        member_name: impl Into<String>,
        return_type: impl Into<String>,
        parameter_types: Vec<String>,
    ) -> Self {
        let mut unfinished = UnfinishedSignature::new(owning_type);
        unfinished.member_name = Some(member_name.into());
        unfinished.return_type = Some(return_type.into());
        unfinished.parameter_types = parameter_types;
        let original = format!(
            "{},{},{}",
            unfinished.owning_type,
            unfinished.member_name.as_deref().unwrap_or_default(),
            unfinished.return_type.as_deref().unwrap_or_default(),
        );
        unfinished.finish(&original)
    }

    /// The fully qualified dotted name of the declaring class.
    #[must_use]
    pub fn owning_type(&self) -> &str {
        &self.owning_type
    }

    /// The package part of the declaring class name, empty for the default
    /// package.
    #[must_use]
    pub fn package_name(&self) -> &str {
        match self.owning_type.rsplit_once('.') {
            Some((package, _)) => package,
            None => "",
        }
    }

    /// The recognized modifiers in canonical order.
    #[must_use]
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// The bit encoded form of [`Self::modifiers`].
    #[must_use]
    pub fn modifier_flags(&self) -> ModifierFlags {
        self.modifier_flags
    }

    /// The fully qualified dotted return type, `void` for constructors and
    /// static initializers. `None` when the originating grammar recovered no
    /// return slot.
    #[must_use]
    pub fn return_type(&self) -> Option<&str> {
        self.return_type.as_deref()
    }

    /// The member name: a method name, the simple class name for
    /// constructors, or `<clinit>` for static initializers.
    #[must_use]
    pub fn member_name(&self) -> Option<&str> {
        self.member_name.as_deref()
    }

    /// The fully qualified dotted parameter types in declaration order.
    #[must_use]
    pub fn parameter_types(&self) -> &[String] {
        &self.parameter_types
    }

    /// Whether a member name was recovered. A signature without one is a
    /// degraded identity that callers should surface instead of matching.
    #[must_use]
    pub fn is_identified(&self) -> bool {
        self.member_name.is_some()
    }

    /// Whether this signature denotes a constructor.
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        self.member_name.as_deref() == Some(simple_name(&self.owning_type))
            && self.return_type.as_deref() == Some(VOID)
    }

    /// Whether this signature denotes a static initializer block.
    #[must_use]
    pub fn is_static_initializer(&self) -> bool {
        self.member_name.as_deref() == Some(Self::STATIC_INITIALIZER_NAME)
    }
}

impl PartialEq for MemberSignature {
    fn eq(&self, other: &Self) -> bool {
        self.owning_type == other.owning_type
            && self.member_name == other.member_name
            && self.return_type == other.return_type
            && self.parameter_types == other.parameter_types
    }
}

impl Hash for MemberSignature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owning_type.hash(state);
        self.member_name.hash(state);
        self.return_type.hash(state);
        self.parameter_types.hash(state);
    }
}

impl Display for MemberSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{}({})",
            self.owning_type,
            self.member_name.as_deref().unwrap_or("<unidentified>"),
            self.parameter_types.iter().join(","),
        )
    }
}

/// A signature under construction by one of the format parsers.
///
/// Every parser funnels through [`UnfinishedSignature::finish`], which
/// applies the completion rules shared by all formats.
#[derive(Debug, Default)]
pub(crate) struct UnfinishedSignature {
    pub(crate) owning_type: String,
    pub(crate) modifiers: Vec<Modifier>,
    pub(crate) modifier_flags: ModifierFlags,
    pub(crate) return_type: Option<String>,
    pub(crate) member_name: Option<String>,
    pub(crate) parameter_types: Vec<String>,
}

impl UnfinishedSignature {
    pub(crate) fn new(owning_type: impl Into<String>) -> Self {
        Self {
            owning_type: owning_type.into(),
            ..Self::default()
        }
    }

    /// Completes the signature: constructors get their canonical name and
    /// `void` return, synthetic bridge constructor parameters are dropped,
    /// and a missing member name is reported on the diagnostic channel.
    pub(crate) fn finish(mut self, original: &str) -> MemberSignature {
        self.complete(original);
        MemberSignature {
            owning_type: self.owning_type,
            modifiers: self.modifiers,
            modifier_flags: self.modifier_flags,
            return_type: self.return_type,
            member_name: self.member_name,
            parameter_types: self.parameter_types,
        }
    }

    fn complete(&mut self, original: &str) {
        let denotes_constructor = match self.member_name.as_deref() {
            Some(name) => {
                name == MemberSignature::CONSTRUCTOR_NAME
                    || name == self.owning_type
                    || name == simple_name(&self.owning_type)
            }
            None => {
                debug!(signature = original, "no member name recovered");
                false
            }
        };
        if denotes_constructor {
            self.member_name = Some(simple_name(&self.owning_type).to_owned());
            self.return_type = Some(VOID.to_owned());
        }
        self.parameter_types.retain(|parameter| {
            if is_synthetic_bridge_parameter(parameter) {
                debug!(parameter = parameter.as_str(), "dropping synthetic bridge constructor parameter");
                false
            } else {
                true
            }
        });
    }
}

/// The unqualified simple name of a dotted class name.
fn simple_name(fully_qualified: &str) -> &str {
    match fully_qualified.rsplit_once('.') {
        Some((_, simple)) => simple,
        None => fully_qualified,
    }
}

/// Whether a parameter type looks like the synthetic anonymous class
/// parameter javac injects into bridge constructors, e.g. `pkg.Outer$1`.
fn is_synthetic_bridge_parameter(parameter: &str) -> bool {
    match parameter.rsplit_once('$') {
        Some((prefix, suffix)) => {
            !prefix.is_empty() && !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}
