//! Error types for contract execution.

use crate::call_flags::CallFlags;
use fvs_primitives::{Address, PrimitiveError};
use thiserror::Error;

/// Classification of a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller is not allowed to perform the operation.
    Authorization,
    /// A supplied value is outside its declared domain.
    Validation,
    /// The call could not be executed at all (unknown target, bad arguments,
    /// missing call rights, corrupt storage).
    Execution,
}

/// Error raised by a contract call. Every error aborts the call and discards
/// its pending storage writes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Owner-only method invoked by someone else.
    #[error("Ownable: caller is not the owner")]
    Unauthorized,

    /// A numeric parameter is outside the domain accepted by `contract`.
    #[error("{contract}: Invalid value")]
    InvalidValue {
        /// Name of the contract that rejected the value.
        contract: &'static str,
    },

    /// Argument count or type does not match the method signature.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The target contract does not expose the requested method.
    #[error("Method not found: {contract}.{method}")]
    MethodNotFound {
        /// Name of the target contract.
        contract: String,
        /// Requested method.
        method: String,
    },

    /// No contract is deployed at the address.
    #[error("Contract not found: {0}")]
    ContractNotFound(Address),

    /// A contract is already deployed at the derived address.
    #[error("Contract already exists: {0}")]
    ContractAlreadyExists(Address),

    /// The current call frame lacks the rights the operation needs.
    #[error("Missing call flags for {operation}: required {required}, granted {granted}")]
    MissingCallFlags {
        /// Operation that was attempted.
        operation: String,
        /// Flags the operation needs.
        required: CallFlags,
        /// Flags held by the calling frame.
        granted: CallFlags,
    },

    /// Nested calls went deeper than the engine allows.
    #[error("Call depth exceeded: limit is {0}")]
    CallDepthExceeded(usize),

    /// Stored bytes could not be decoded.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Primitive conversion failed.
    #[error(transparent)]
    Primitive(#[from] PrimitiveError),
}

impl Error {
    /// Returns the kind of failure this error represents.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Unauthorized => ErrorKind::Authorization,
            Error::InvalidValue { .. } => ErrorKind::Validation,
            _ => ErrorKind::Execution,
        }
    }

    /// Shorthand for `kind() == ErrorKind::Authorization`.
    pub fn is_authorization(&self) -> bool {
        self.kind() == ErrorKind::Authorization
    }

    /// Shorthand for `kind() == ErrorKind::Validation`.
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

/// Result type for contract operations.
pub type Result<T> = std::result::Result<T, Error>;
