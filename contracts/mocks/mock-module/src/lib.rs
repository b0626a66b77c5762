#![no_std]

use soroban_sdk::{contract, contractimpl, contracttype, Address, Bytes, BytesN, Env, Vec};

#[contracttype]
enum DataKey {
    FailOnHandle,
    Calls,
    LastCaller,
    LastSelector,
    LastPayload,
}

/// Test double for a routable module: answers the manifest probe, records
/// every forwarded call, echoes the payload back, and can be armed to fail.
#[contract]
pub struct MockModule;

#[contractimpl]
impl MockModule {
    pub fn module_manifest(env: Env) -> Vec<BytesN<4>> {
        Vec::new(&env)
    }

    pub fn set_fail(env: Env, fail: bool) {
        env.storage().persistent().set(&DataKey::FailOnHandle, &fail);
    }

    pub fn handle(env: Env, caller: Address, selector: BytesN<4>, payload: Bytes) -> Bytes {
        if env
            .storage()
            .persistent()
            .get(&DataKey::FailOnHandle)
            .unwrap_or(false)
        {
            panic!("module failure");
        }
        let calls: u32 = env
            .storage()
            .persistent()
            .get(&DataKey::Calls)
            .unwrap_or(0u32);
        env.storage().persistent().set(&DataKey::Calls, &(calls + 1));
        env.storage().persistent().set(&DataKey::LastCaller, &caller);
        env.storage()
            .persistent()
            .set(&DataKey::LastSelector, &selector);
        env.storage()
            .persistent()
            .set(&DataKey::LastPayload, &payload);
        payload
    }

    pub fn calls(env: Env) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::Calls)
            .unwrap_or(0u32)
    }

    pub fn last_caller(env: Env) -> Option<Address> {
        env.storage().persistent().get(&DataKey::LastCaller)
    }

    pub fn last_selector(env: Env) -> Option<BytesN<4>> {
        env.storage().persistent().get(&DataKey::LastSelector)
    }

    pub fn last_payload(env: Env) -> Option<Bytes> {
        env.storage().persistent().get(&DataKey::LastPayload)
    }
}
