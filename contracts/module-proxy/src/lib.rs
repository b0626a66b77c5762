#![no_std]

use soroban_sdk::{contracterror, Address, Bytes, BytesN, Env, Vec};

/// Interface every routable module implements. `module_manifest` doubles as
/// the liveness probe for configuration targets; `handle` is the uniform
/// dispatch entry point.
#[soroban_sdk::contractclient(name = "ModuleClient")]
pub trait ProxyModule {
    fn module_manifest(env: Env) -> Vec<BytesN<4>>;
    fn handle(env: Env, caller: Address, selector: BytesN<4>, payload: Bytes) -> Bytes;
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    Unauthorized = 1,
    EmptyBatch = 2,
    EmptySelectorSet = 3,
    TargetHasNoCode = 4,
    InvalidSentinelUsage = 5,
    SelectorAlreadyMapped = 6,
    SelectorNotMapped = 7,
    SelectorMappedToSameModule = 8,
    NoPendingNomination = 9,
    UnknownSelector = 10,
}

mod constants;
mod contract;
mod events;
mod helpers;
mod storage;

pub use contract::{ModuleProxy, ModuleProxyClient};
pub use storage::{AdminState, ModuleConfigAction, ModuleCut};
