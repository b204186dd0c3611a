//! The fixed table of member modifiers recognized across all formats.

use std::fmt::Display;

use bitflags::bitflags;

bitflags! {
    /// Bit encoding of the recognized modifiers, using the JVM access flag
    /// values, for fast comparison and tallying.
    #[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
    pub struct ModifierFlags: u16 {
        /// Declared `public`; may be accessed from outside its package.
        const PUBLIC = 0x0001;
        /// Declared `private`; accessible only within the defining class.
        const PRIVATE = 0x0002;
        /// Declared `protected`; may be accessed within subclasses.
        const PROTECTED = 0x0004;
        /// Declared `static`.
        const STATIC = 0x0008;
        /// Declared `final`; must not be overridden.
        const FINAL = 0x0010;
        /// Declared `synchronized`; invocation is wrapped by a monitor use.
        const SYNCHRONIZED = 0x0020;
        /// Declared `native`; implemented in a language other than Java.
        const NATIVE = 0x0100;
        /// Declared `abstract`; no implementation is provided.
        const ABSTRACT = 0x0400;
        /// Declared `strictfp`; floating point is FP-strict.
        const STRICT = 0x0800;
    }
}

/// A modifier keyword that may open a member declaration.
///
/// Variants are declared in canonical order, the order modifier keywords
/// appear in a declaration and the order every parsed modifier set keeps,
/// regardless of input order.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Modifier {
    /// `public`
    Public,
    /// `protected`
    Protected,
    /// `private`
    Private,
    /// `abstract`
    Abstract,
    /// `static`
    Static,
    /// `final`
    Final,
    /// `synchronized`
    Synchronized,
    /// `native`
    Native,
    /// `strictfp`
    Strictfp,
}

impl Modifier {
    /// All recognized modifiers in canonical order.
    pub const ALL: [Modifier; 9] = [
        Modifier::Public,
        Modifier::Protected,
        Modifier::Private,
        Modifier::Abstract,
        Modifier::Static,
        Modifier::Final,
        Modifier::Synchronized,
        Modifier::Native,
        Modifier::Strictfp,
    ];

    /// The keyword as it appears in a declaration.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Abstract => "abstract",
            Self::Static => "static",
            Self::Final => "final",
            Self::Synchronized => "synchronized",
            Self::Native => "native",
            Self::Strictfp => "strictfp",
        }
    }

    /// The access flag bit of this modifier.
    #[must_use]
    pub const fn flag(self) -> ModifierFlags {
        match self {
            Self::Public => ModifierFlags::PUBLIC,
            Self::Protected => ModifierFlags::PROTECTED,
            Self::Private => ModifierFlags::PRIVATE,
            Self::Abstract => ModifierFlags::ABSTRACT,
            Self::Static => ModifierFlags::STATIC,
            Self::Final => ModifierFlags::FINAL,
            Self::Synchronized => ModifierFlags::SYNCHRONIZED,
            Self::Native => ModifierFlags::NATIVE,
            Self::Strictfp => ModifierFlags::STRICT,
        }
    }

    /// Looks up a modifier by its declaration keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|it| it.keyword() == keyword)
    }
}

impl Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}
