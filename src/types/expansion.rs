//! Expansion of internal type tokens into fully qualified dotted names.

use std::str::FromStr;

use super::VOID;
use super::field_type::{FieldType, InvalidDescriptor};

/// Expands one internal or abbreviated type token into its fully qualified
/// dotted form.
///
/// Descriptor tokens (`I`, `[Ljava/lang/String;`) become their source names,
/// slash qualified names become dotted, and already expanded names are
/// returned unchanged, so the expansion is idempotent.
#[must_use]
pub fn expand_type_token(token: &str) -> String {
    if token == "V" {
        return VOID.to_owned();
    }
    match FieldType::from_str(token) {
        Ok(parsed) => parsed.source_name(),
        Err(_) => token.replace('/', "."),
    }
}

/// Splits a concatenated descriptor block into individual expanded type
/// names.
///
/// `I[Ljava/lang/String;J` yields `["int", "java.lang.String[]", "long"]`;
/// a `V` entry expands to `void`; an empty block yields no names.
pub fn expand_descriptor_block(block: &str) -> Result<Vec<String>, InvalidDescriptor> {
    let mut chars = block.chars();
    let mut names = Vec::new();
    while let Some(prefix) = chars.next() {
        if prefix == 'V' {
            names.push(VOID.to_owned());
        } else {
            let parsed = FieldType::parse_single(prefix, &mut chars)
                .map_err(|_| InvalidDescriptor(block.to_owned()))?;
            names.push(parsed.source_name());
        }
    }
    Ok(names)
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn expands_descriptors() {
        assert_eq!(expand_type_token("I"), "int");
        assert_eq!(expand_type_token("V"), "void");
        assert_eq!(expand_type_token("Ljava/lang/String;"), "java.lang.String");
        assert_eq!(expand_type_token("[[I"), "int[][]");
    }

    #[test]
    fn expands_slash_qualified_names() {
        assert_eq!(expand_type_token("java/util/Map"), "java.util.Map");
    }

    #[test]
    fn leaves_expanded_names_alone() {
        assert_eq!(expand_type_token("int"), "int");
        assert_eq!(expand_type_token("java.lang.String[]"), "java.lang.String[]");
    }

    #[test]
    fn splits_descriptor_blocks() {
        assert_eq!(
            expand_descriptor_block("I[Ljava/lang/String;J").unwrap(),
            vec!["int", "java.lang.String[]", "long"],
        );
    }

    #[test]
    fn empty_block_has_no_names() {
        assert_eq!(expand_descriptor_block("").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn rejects_broken_blocks() {
        assert!(expand_descriptor_block("ILjava/lang").is_err());
    }

    fn arb_descriptor() -> impl Strategy<Value = String> {
        let class_name = prop::string::string_regex(r"[A-Za-z][A-Za-z0-9_$]*(/[A-Za-z][A-Za-z0-9_$]*){0,3}")
            .expect("The regex is invalid");
        let base = prop_oneof![
            prop::sample::select(vec!["Z", "C", "F", "D", "B", "S", "I", "J"])
                .prop_map(str::to_owned),
            class_name.prop_map(|name| format!("L{name};")),
        ];
        (0u8..4, base).prop_map(|(dimensions, element)| {
            format!("{}{element}", "[".repeat(usize::from(dimensions)))
        })
    }

    proptest! {
        #[test]
        fn expansion_never_keeps_slashes(descriptor in arb_descriptor()) {
            prop_assert!(!expand_type_token(&descriptor).contains('/'));
        }

        #[test]
        fn expansion_is_idempotent(descriptor in arb_descriptor()) {
            let expanded = expand_type_token(&descriptor);
            prop_assert_eq!(expand_type_token(&expanded), expanded.clone());
        }

        #[test]
        fn block_splits_into_one_name_per_descriptor(
            descriptors in prop::collection::vec(arb_descriptor(), 0..8),
        ) {
            let block = descriptors.concat();
            let names = expand_descriptor_block(&block).unwrap();
            prop_assert_eq!(names.len(), descriptors.len());
        }
    }
}
