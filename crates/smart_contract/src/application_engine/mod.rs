//! Per-call execution context.
//!
//! An [`ApplicationEngine`] lives for exactly one top-level call. It owns the
//! write overlay the call executes against and the stack of call frames, so
//! the identity of the caller is always an explicit part of the frame rather
//! than ambient state.

mod storage;

use crate::call_flags::CallFlags;
use crate::contract_value::ContractValue;
use crate::native::NativeContract;
use crate::storage::{ChangeSet, DataCache, MemoryStore};
use crate::{Error, Result};
use fvs_primitives::Address;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Deployed contracts by address.
pub type ContractTable = HashMap<Address, Arc<dyn NativeContract>>;

/// Maximum nesting of contract-to-contract calls.
pub const MAX_CALL_DEPTH: usize = 16;

/// One level of the call stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallFrame {
    /// Who made this call: an account for the entry frame, a contract for
    /// nested frames.
    pub caller: Address,
    /// The contract whose code and storage this frame runs.
    pub executing: Address,
    /// Rights held by this frame.
    pub flags: CallFlags,
}

/// Execution context for a single top-level call.
pub struct ApplicationEngine<'a> {
    contracts: &'a ContractTable,
    snapshot: DataCache<'a>,
    entry: CallFrame,
    nested: Vec<CallFrame>,
}

impl<'a> ApplicationEngine<'a> {
    /// Creates an engine whose entry frame is `entry`.
    pub(crate) fn new(contracts: &'a ContractTable, store: &'a MemoryStore, entry: CallFrame) -> Self {
        Self {
            contracts,
            snapshot: DataCache::new(store),
            entry,
            nested: Vec::new(),
        }
    }

    /// The frame currently executing.
    pub fn frame(&self) -> &CallFrame {
        self.nested.last().unwrap_or(&self.entry)
    }

    /// Identity that invoked the currently executing contract.
    pub fn caller(&self) -> Address {
        self.frame().caller
    }

    /// Address of the currently executing contract.
    pub fn executing(&self) -> Address {
        self.frame().executing
    }

    /// Rights of the current frame.
    pub fn call_flags(&self) -> CallFlags {
        self.frame().flags
    }

    /// Number of frames on the stack.
    pub fn depth(&self) -> usize {
        self.nested.len() + 1
    }

    /// Looks up a deployed contract.
    pub fn contract(&self, address: &Address) -> Option<Arc<dyn NativeContract>> {
        self.contracts.get(address).cloned()
    }

    /// Fails unless the current frame holds `required`.
    pub fn require_flags(&self, required: CallFlags, operation: &str) -> Result<()> {
        let granted = self.call_flags();
        if !granted.contains(required) {
            return Err(Error::MissingCallFlags {
                operation: operation.to_string(),
                required,
                granted,
            });
        }
        Ok(())
    }

    /// Calls `method` on the contract at `target` with at most `flags` rights.
    ///
    /// The callee sees the current contract as its caller and the writes made
    /// so far in this call.
    pub fn call_contract(
        &mut self,
        target: Address,
        method: &str,
        args: &[ContractValue],
        flags: CallFlags,
    ) -> Result<ContractValue> {
        self.require_flags(CallFlags::ALLOW_CALL, "call_contract")?;
        if self.depth() >= MAX_CALL_DEPTH {
            return Err(Error::CallDepthExceeded(MAX_CALL_DEPTH));
        }

        let contract = self
            .contract(&target)
            .ok_or(Error::ContractNotFound(target))?;

        let frame = CallFrame {
            caller: self.executing(),
            executing: target,
            flags: self.call_flags() & flags,
        };
        self.nested.push(frame);
        let result = self.dispatch(contract.as_ref(), method, args);
        self.nested.pop();
        result
    }

    /// Validates the method against the contract's method table and runs it
    /// in the current frame.
    pub(crate) fn dispatch(
        &mut self,
        contract: &dyn NativeContract,
        method: &str,
        args: &[ContractValue],
    ) -> Result<ContractValue> {
        let descriptor = *contract
            .find_method(method)
            .ok_or_else(|| Error::MethodNotFound {
                contract: contract.name().to_string(),
                method: method.to_string(),
            })?;

        if args.len() != descriptor.parameters {
            return Err(Error::InvalidArgument(format!(
                "{}.{} takes {} arguments, got {}",
                contract.name(),
                method,
                descriptor.parameters,
                args.len()
            )));
        }

        self.require_flags(descriptor.required_call_flags, method)?;

        debug!(
            target: "fvs",
            contract = contract.name(),
            address = %self.executing(),
            caller = %self.caller(),
            method,
            depth = self.depth(),
            "dispatching call"
        );

        contract.invoke(self, method, args)
    }

    /// Consumes the engine, returning the writes made during the call.
    pub(crate) fn into_changes(self) -> ChangeSet {
        self.snapshot.into_changes()
    }
}
