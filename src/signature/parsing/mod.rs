//! The three format grammars and their shared error taxonomy.

mod assembly;
mod bytecode_header;
mod log_compilation;

use crate::types::VOID;
use crate::types::expansion::expand_descriptor_block;
use crate::types::field_type::InvalidDescriptor;

use super::UnfinishedSignature;

/// An error raised when an input line does not match its declared grammar.
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    /// The compact log compilation descriptor does not have the
    /// `owner#member (params)return` shape.
    #[error("malformed log compilation signature: {0}")]
    MalformedLogSignature(String),
    /// The quoted assembly header line does not have the expected shape.
    #[error("malformed assembly signature: {0}")]
    MalformedAssemblySignature(String),
    /// A parameter or return slot holds an invalid type descriptor.
    #[error("failed to expand type descriptor: {0}")]
    InvalidDescriptor(#[from] InvalidDescriptor),
}

/// A [`Result`] type for signature parsing.
pub type SignatureResult<T> = Result<T, SignatureError>;

/// Expands a raw parameter descriptor block and return slot into the
/// signature.
///
/// The return slot must yield exactly one type name; an empty or ambiguous
/// slot falls back to `void`.
pub(crate) fn assign_params_and_return(
    signature: &mut UnfinishedSignature,
    parameter_block: &str,
    return_slot: &str,
) -> SignatureResult<()> {
    signature.parameter_types = expand_descriptor_block(parameter_block)?;
    let mut return_names = expand_descriptor_block(return_slot)?;
    signature.return_type = Some(if return_names.len() == 1 {
        return_names.remove(0)
    } else {
        VOID.to_owned()
    });
    Ok(())
}
