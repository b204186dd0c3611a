//! The assembly dump header grammar.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::{SignatureError, SignatureResult, assign_params_and_return};
use crate::signature::{MemberSignature, UnfinishedSignature};

/// `<prefix> 'memberName' '(params)returnType' in 'ownerPath'`
static ASSEMBLY_SIGNATURE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*)\s'(.*)'\s'(\(.*\))(.*)'\sin\s'(.*)'").unwrap());

impl MemberSignature {
    /// Parses a quoted assembly dump header, such as
    /// `# {method} 'charAt' '(I)C' in 'java/lang/String'`.
    ///
    /// HTML entity escaped apostrophes are normalized before matching.
    ///
    /// # Errors
    /// [`SignatureError::MalformedAssemblySignature`] when the fixed shape
    /// does not match, [`SignatureError::InvalidDescriptor`] when a type
    /// slot cannot be expanded.
    pub fn from_assembly(line: &str) -> SignatureResult<Self> {
        let unescaped = line.replace("&apos;", "'");

        let captures = ASSEMBLY_SIGNATURE
            .captures(&unescaped)
            .ok_or_else(|| SignatureError::MalformedAssemblySignature(line.to_owned()))?;

        for (index, group) in captures.iter().enumerate().skip(1) {
            trace!(index, group = ?group.map(|it| it.as_str()), "assembly signature group");
        }

        let mut signature = UnfinishedSignature::new(captures[5].replace('/', "."));
        signature.member_name = Some(captures[2].to_owned());

        let block = &captures[3];
        let parameter_block = &block[1..block.len() - 1];
        assign_params_and_return(&mut signature, parameter_block, &captures[4])?;

        Ok(signature.finish(line))
    }
}

#[cfg(test)]
mod test {
    use crate::signature::{MemberSignature, SignatureError};

    #[test]
    fn parses_a_method_header() {
        let signature = MemberSignature::from_assembly(
            "# {method} {0x00007f7d69053f80} 'charAt' '(I)C' in 'java/lang/String'",
        )
        .unwrap();
        assert_eq!(signature.owning_type(), "java.lang.String");
        assert_eq!(signature.member_name(), Some("charAt"));
        assert_eq!(signature.parameter_types(), ["int"]);
        assert_eq!(signature.return_type(), Some("char"));
    }

    #[test]
    fn normalizes_entity_escaped_quotes() {
        let signature = MemberSignature::from_assembly(
            "# {method} &apos;hashCode&apos; &apos;()I&apos; in &apos;java/lang/Object&apos;",
        )
        .unwrap();
        assert_eq!(signature.owning_type(), "java.lang.Object");
        assert_eq!(signature.member_name(), Some("hashCode"));
        assert!(signature.parameter_types().is_empty());
        assert_eq!(signature.return_type(), Some("int"));
    }

    #[test]
    fn constructor_marker_is_normalized() {
        let signature = MemberSignature::from_assembly(
            "# {method} {0x0000ffff6c05b2f8} '<init>' '(Ljava/lang/String;I)V' in 'a/b/C'",
        )
        .unwrap();
        assert_eq!(signature.member_name(), Some("C"));
        assert_eq!(signature.return_type(), Some("void"));
        assert_eq!(signature.parameter_types(), ["java.lang.String", "int"]);
    }

    #[test]
    fn rejects_lines_without_the_quoted_shape() {
        let error =
            MemberSignature::from_assembly("[Disassembly] 0x7f: mov %eax,%ebx").unwrap_err();
        assert!(matches!(error, SignatureError::MalformedAssemblySignature(_)));
    }
}
