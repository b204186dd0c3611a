//! The bytecode listing header grammar.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::signature::generics::{ClassContext, GenericsMap, resolve_type_variable};
use crate::signature::modifiers::Modifier;
use crate::signature::tokenizer::{split_top_level, strip_parameter_name};
use crate::signature::{MemberSignature, UnfinishedSignature};
use crate::types::VOID;

/// Leading text of a static initializer entry in a bytecode listing.
const STATIC_INITIALIZER_MARKER: &str = "static {}";

/// Modifiers, method generics, return type, member name, parameters.
/// One optional group per recognized modifier keeps the groups positional,
/// and the generics group expects the braces substituted by
/// [`isolate_generics`] so angle brackets cannot derail the rest.
static BYTECODE_HEADER: Lazy<Regex> = Lazy::new(|| {
    let mut pattern = String::from("^[ ]*");
    for modifier in Modifier::ALL {
        pattern.push_str(&format!("({} )?", modifier.keyword()));
    }
    pattern.push_str(r"(\{.*\} )?");
    pattern.push_str(r"(.* )?");
    pattern.push_str(r"([0-9\p{L}$_<>.]+)");
    pattern.push_str(r"(\(.*\))");
    Regex::new(&pattern).unwrap()
});

impl MemberSignature {
    /// Parses a bytecode listing header line, such as
    /// `public final java.lang.String getName();`.
    ///
    /// The grammar is deliberately lenient: every group is optional and a
    /// line that matches nothing meaningful still produces a signature, with
    /// [`MemberSignature::is_identified`] reporting the degraded case.
    /// Generic type parameters declared on the method or on the enclosing
    /// class chain are resolved to their erasure bounds.
    #[must_use]
    pub fn from_bytecode_header(
        owning_type: &str,
        header: &str,
        class_context: Option<&ClassContext>,
    ) -> Self {
        let rewritten;
        let header = if has_class_generics(header) {
            rewritten = isolate_generics(header);
            rewritten.as_str()
        } else {
            header
        };

        let mut signature = UnfinishedSignature::new(owning_type);

        if header.trim_start().starts_with(STATIC_INITIALIZER_MARKER) {
            signature.member_name = Some(Self::STATIC_INITIALIZER_NAME.to_owned());
            signature.return_type = Some(VOID.to_owned());
            return signature.finish(header);
        }

        if let Some(captures) = BYTECODE_HEADER.captures(header) {
            let modifier_count = Modifier::ALL.len();
            for (index, modifier) in Modifier::ALL.into_iter().enumerate() {
                if captures.get(index + 1).is_some() {
                    signature.modifiers.push(modifier);
                    signature.modifier_flags |= modifier.flag();
                }
            }

            let method_generics = captures.get(modifier_count + 1).map(|generics| {
                let braced = generics.as_str().trim();
                GenericsMap::parse(&braced[1..braced.len() - 1])
            });

            if let Some(return_slot) = captures.get(modifier_count + 2) {
                signature.return_type = Some(resolve_type_variable(
                    return_slot.as_str().trim(),
                    method_generics.as_ref(),
                    class_context,
                ));
            }
            if let Some(name) = captures.get(modifier_count + 3) {
                signature.member_name = Some(name.as_str().to_owned());
            }
            if let Some(parameters) = captures.get(modifier_count + 4) {
                let block = parameters.as_str();
                for segment in split_top_level(&block[1..block.len() - 1]) {
                    signature.parameter_types.push(resolve_type_variable(
                        strip_parameter_name(segment),
                        method_generics.as_ref(),
                        class_context,
                    ));
                }
            }
        }

        signature.finish(header)
    }
}

/// Whether the header carries a generics declaration that the composed
/// grammar would misread as comparison operators.
fn has_class_generics(header: &str) -> bool {
    header.contains(" extends ") || header.contains(" super ")
}

/// Replaces the first top level `<...>` span with `{...}` so the composed
/// grammar can treat it as one opaque generics declaration.
fn isolate_generics(header: &str) -> String {
    let mut rewritten = String::with_capacity(header.len());
    let mut depth = 0i32;
    let mut replaced = false;
    for c in header.chars() {
        match c {
            '<' => {
                if depth == 0 && !replaced {
                    rewritten.push('{');
                } else {
                    rewritten.push('<');
                }
                depth += 1;
            }
            '>' => {
                depth -= 1;
                if depth == 0 && !replaced {
                    rewritten.push('}');
                    replaced = true;
                } else {
                    rewritten.push('>');
                }
            }
            other => rewritten.push(other),
        }
    }
    rewritten
}
