//! The compact log compilation signature grammar.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{SignatureError, SignatureResult, assign_params_and_return};
use crate::signature::{MemberSignature, UnfinishedSignature};

/// `owner/path#memberName (paramDescriptorBlock)returnDescriptor`
static LOG_SIGNATURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9\p{L}$_/.]+)#([0-9\p{L}$_<>]+) (\(.*\))(.*)$").unwrap());

impl MemberSignature {
    /// Parses a compact log compilation signature, such as
    /// `java/lang/String#charAt (I)C`.
    ///
    /// # Errors
    /// [`SignatureError::MalformedLogSignature`] when the four field shape
    /// does not match, [`SignatureError::InvalidDescriptor`] when a type
    /// slot cannot be expanded.
    pub fn from_log_compilation(input: &str) -> SignatureResult<Self> {
        let captures = LOG_SIGNATURE
            .captures(input)
            .ok_or_else(|| SignatureError::MalformedLogSignature(input.to_owned()))?;

        let mut signature = UnfinishedSignature::new(captures[1].replace('/', "."));
        signature.member_name = Some(captures[2].to_owned());

        let block = &captures[3];
        let parameter_block = &block[1..block.len() - 1];
        assign_params_and_return(&mut signature, parameter_block, &captures[4])?;

        Ok(signature.finish(input))
    }
}

#[cfg(test)]
mod test {
    use crate::signature::{MemberSignature, SignatureError};

    #[test]
    fn parses_a_plain_method() {
        let signature = MemberSignature::from_log_compilation("a/b/C#foo (I)V").unwrap();
        assert_eq!(signature.owning_type(), "a.b.C");
        assert_eq!(signature.member_name(), Some("foo"));
        assert_eq!(signature.parameter_types(), ["int"]);
        assert_eq!(signature.return_type(), Some("void"));
    }

    #[test]
    fn owning_type_never_keeps_slashes() {
        let signature = MemberSignature::from_log_compilation(
            "java/util/AbstractMap#get (Ljava/lang/Object;)Ljava/lang/Object;",
        )
        .unwrap();
        assert_eq!(signature.owning_type(), "java.util.AbstractMap");
        assert_eq!(signature.parameter_types(), ["java.lang.Object"]);
        assert_eq!(signature.return_type(), Some("java.lang.Object"));
    }

    #[test]
    fn parameter_count_matches_descriptor_count() {
        let signature = MemberSignature::from_log_compilation(
            "a/b/C#bar (I[Ljava/lang/String;J)Z",
        )
        .unwrap();
        assert_eq!(
            signature.parameter_types(),
            ["int", "java.lang.String[]", "long"],
        );
        assert_eq!(signature.return_type(), Some("boolean"));
    }

    #[test]
    fn constructor_marker_is_normalized() {
        let signature =
            MemberSignature::from_log_compilation("a/b/C#<init> (Ljava/lang/String;)V").unwrap();
        assert_eq!(signature.member_name(), Some("C"));
        assert_eq!(signature.return_type(), Some("void"));
        assert!(signature.is_constructor());
    }

    #[test]
    fn ambiguous_return_slot_defaults_to_void() {
        let signature = MemberSignature::from_log_compilation("a/b/C#baz ()II").unwrap();
        assert_eq!(signature.return_type(), Some("void"));
    }

    #[test]
    fn rejects_signatures_without_parameter_block() {
        let error = MemberSignature::from_log_compilation("a/b/C#foo").unwrap_err();
        assert!(matches!(error, SignatureError::MalformedLogSignature(_)));
    }

    #[test]
    fn rejects_free_text() {
        assert!(MemberSignature::from_log_compilation("not a signature").is_err());
    }
}
