//! Resolution of generic type parameters declared on a method or on the
//! enclosing class chain.

use super::tokenizer::split_top_level;

/// The erasure of a type parameter bound by nothing.
const UNBOUNDED_ERASURE: &str = "java.lang.Object";

/// An insertion ordered mapping from type parameter name to its erasure
/// bound, if any.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenericsMap {
    entries: Vec<(String, Option<String>)>,
}

impl GenericsMap {
    /// Parses a generics declaration body, without the outer braces.
    ///
    /// `T extends java.lang.Number, U` records `T -> java.lang.Number` and
    /// `U -> unbounded`. Entries are split on top level commas only, never
    /// inside a nested angle bracket span, and slashes in package qualified
    /// bounds become dots.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        let mut result = Self::default();
        for entry in split_top_level(body) {
            let entry = entry.replace('/', ".");
            match entry.split_once(" extends ") {
                Some((name, bound)) => {
                    result.bind(name.trim(), Some(bound.trim().to_owned()));
                }
                None => result.bind(entry.trim(), None),
            }
        }
        result
    }

    /// Records a binding, keeping declaration order.
    pub fn bind<N: Into<String>>(&mut self, name: N, bound: Option<String>) {
        self.entries.push((name.into(), bound));
    }

    /// Whether no parameters are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The binding recorded for `name`. The outer `Option` tells whether the
    /// name is bound at all, the inner one carries its erasure bound.
    #[must_use]
    pub fn binding(&self, name: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(bound_name, _)| bound_name == name)
            .map(|(_, bound)| bound.as_deref())
    }

    /// Iterates over `(name, bound)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(name, bound)| (name.as_str(), bound.as_deref()))
    }
}

/// One class in the enclosing class chain supplied by the host's class
/// model.
///
/// Each class exposes at most a generics mapping and a reference to the
/// class it is declared in. Resolution walks outward from the innermost
/// class and stops at the first mapping that binds the name.
#[derive(Debug, Default, Clone)]
pub struct ClassContext {
    generics: Option<GenericsMap>,
    parent: Option<Box<ClassContext>>,
}

impl ClassContext {
    /// A context with no generics mapping and no enclosing class.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the generics mapping declared on this class.
    #[must_use]
    pub fn with_generics(mut self, generics: GenericsMap) -> Self {
        self.generics = Some(generics);
        self
    }

    /// Sets the class this one is declared in.
    #[must_use]
    pub fn with_parent(mut self, parent: ClassContext) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    fn lookup(&self, name: &str) -> Option<Option<&str>> {
        let mut current = Some(self);
        while let Some(context) = current {
            if let Some(found) = context.generics.as_ref().and_then(|it| it.binding(name)) {
                return Some(found);
            }
            current = context.parent.as_deref();
        }
        None
    }
}

/// Resolves a type token against the method scope generics and the
/// enclosing class chain.
///
/// The method scope wins over every class scope; the chain is walked
/// outward and stops at the first class binding the token. An unbounded
/// parameter resolves to its erasure, `java.lang.Object`. A token no scope
/// binds keeps its outer type name but loses a surviving bracketed generic
/// suffix, which is erasable by construction.
#[must_use]
pub fn resolve_type_variable(
    token: &str,
    method_generics: Option<&GenericsMap>,
    class_chain: Option<&ClassContext>,
) -> String {
    if let Some(bound) = method_generics.and_then(|it| it.binding(token)) {
        return bound.unwrap_or(UNBOUNDED_ERASURE).to_owned();
    }
    if let Some(bound) = class_chain.and_then(|it| it.lookup(token)) {
        return bound.unwrap_or(UNBOUNDED_ERASURE).to_owned();
    }
    strip_generic_suffix(token)
}

/// Removes the first balanced `<...>` span, keeping whatever follows it.
fn strip_generic_suffix(token: &str) -> String {
    let Some(start) = token.find('<') else {
        return token.to_owned();
    };
    let mut depth = 0u32;
    for (offset, c) in token[start..].char_indices() {
        match c {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + 1;
                    return format!("{}{}", &token[..start], &token[end..]);
                }
            }
            _ => {}
        }
    }
    token.to_owned()
}
