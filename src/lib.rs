#![warn(missing_debug_implementations, rust_2018_idioms, missing_docs)]
//! Reconciliation of JVM JIT log member signatures.
//!
//! A JIT compilation log names the same class member in several textual
//! forms: the compact descriptor of the compilation log itself, the header
//! line of a bytecode listing, and the quoted header of an assembly dump.
//! `jitlens` parses each form into one canonical
//! [`MemberSignature`](signature::MemberSignature) so compilation events,
//! bytecode, inlining decisions, and disassembly can be cross referenced per
//! member.
//!
//! ```
//! use jitlens::signature::MemberSignature;
//!
//! let from_log = MemberSignature::from_log_compilation("java/lang/String#charAt (I)C")?;
//! let from_bytecode =
//!     MemberSignature::from_bytecode_header("java.lang.String", "public char charAt(int);", None);
//! assert_eq!(from_log, from_bytecode);
//! # Ok::<(), jitlens::signature::SignatureError>(())
//! ```

/// Module containing the canonical member signature and its format parsers.
pub mod signature;
/// Module containing compilation statistics counters.
pub mod stats;
/// Module containing the JVM type token layer.
pub mod types;
