//! Base native contract trait and types.

use crate::application_engine::ApplicationEngine;
use crate::call_flags::CallFlags;
use crate::contract_value::ContractValue;
use crate::{Error, Result};

/// Trait for contracts hosted by the [`ContractSystem`](crate::ContractSystem).
///
/// Implementations keep no state of their own: everything lives in storage
/// scoped to the executing address, so one instance may back any number of
/// deployments.
pub trait NativeContract: Send + Sync {
    /// Gets the name of the contract.
    fn name(&self) -> &str;

    /// Gets the methods the contract exposes.
    fn methods(&self) -> &[ContractMethod];

    /// Runs the constructor. Called exactly once, inside the deployment call,
    /// with the deployer as caller.
    fn initialize(&self, engine: &mut ApplicationEngine<'_>, args: &[ContractValue])
        -> Result<()>;

    /// Invokes a method. The engine has already checked the method exists,
    /// the argument count and the call flags.
    fn invoke(
        &self,
        engine: &mut ApplicationEngine<'_>,
        method: &str,
        args: &[ContractValue],
    ) -> Result<ContractValue>;

    /// Finds a method by name.
    fn find_method(&self, name: &str) -> Option<&ContractMethod> {
        self.methods().iter().find(|m| m.name == name)
    }
}

/// Represents a method in a native contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractMethod {
    /// The name of the method.
    pub name: &'static str,

    /// Number of arguments the method takes.
    pub parameters: usize,

    /// Whether the method is safe (read-only).
    pub safe: bool,

    /// The required call flags for this method.
    pub required_call_flags: CallFlags,
}

impl ContractMethod {
    /// Creates a new contract method.
    pub const fn new(
        name: &'static str,
        parameters: usize,
        safe: bool,
        required_call_flags: CallFlags,
    ) -> Self {
        Self {
            name,
            parameters,
            safe,
            required_call_flags,
        }
    }

    /// Creates a new safe (read-only) method.
    pub const fn safe(name: &'static str, parameters: usize) -> Self {
        Self::new(name, parameters, true, CallFlags::READ_STATES)
    }

    /// Creates a new unsafe (state-changing) method.
    pub const fn unsafe_method(name: &'static str, parameters: usize) -> Self {
        Self::new(name, parameters, false, CallFlags::STATES)
    }
}

/// Checks a constructor's argument count.
pub(crate) fn expect_arguments(
    contract: &str,
    args: &[ContractValue],
    expected: usize,
) -> Result<()> {
    if args.len() != expected {
        return Err(Error::InvalidArgument(format!(
            "{contract} constructor takes {expected} arguments, got {}",
            args.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_method_new() {
        let method = ContractMethod::new("test", 2, true, CallFlags::NONE);
        assert_eq!(method.name, "test");
        assert_eq!(method.parameters, 2);
        assert!(method.safe);
        assert_eq!(method.required_call_flags, CallFlags::NONE);
    }

    #[test]
    fn test_contract_method_safe() {
        let method = ContractMethod::safe("get", 0);
        assert!(method.safe);
        assert_eq!(method.required_call_flags, CallFlags::READ_STATES);
    }

    #[test]
    fn test_contract_method_unsafe() {
        let method = ContractMethod::unsafe_method("set", 1);
        assert!(!method.safe);
        assert_eq!(method.required_call_flags, CallFlags::STATES);
    }

    #[test]
    fn test_expect_arguments() {
        assert!(expect_arguments("X", &[], 0).is_ok());
        let err = expect_arguments("X", &[ContractValue::Void], 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: X constructor takes 3 arguments, got 1"
        );
    }
}
