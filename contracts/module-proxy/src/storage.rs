use soroban_sdk::{contracttype, Address, BytesN, Env, Vec};

use crate::constants::*;

#[contracttype]
pub enum DataKey {
    AdminState,
    ModuleOf(BytesN<4>),      // selector -> owning module
    ModuleSelectors(Address), // module -> owned selectors; absent when unregistered
    Modules,                  // Vec<Address> of registered modules
    Initialized,
}

/// Administrator lifecycle as a single state value: either settled on the
/// current admin, or mid-handoff with a nominated successor.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AdminState {
    Active(Address),
    NominationPending(Address, Address), // (current, pending)
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ModuleConfigAction {
    Add,
    Replace,
    Remove,
}

/// One entry of a configuration batch. `module_address` must be `None` for
/// `Remove` and `Some` for `Add`/`Replace`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModuleCut {
    pub module_address: Option<Address>,
    pub action: ModuleConfigAction,
    pub function_selectors: Vec<BytesN<4>>,
}

pub fn admin_state(env: &Env) -> AdminState {
    env.storage()
        .persistent()
        .get(&DataKey::AdminState)
        .expect("admin not set")
}

pub fn set_admin_state(env: &Env, state: &AdminState) {
    env.storage().persistent().set(&DataKey::AdminState, state);
    bump_core_ttl(env);
}

pub fn current_admin(env: &Env) -> Address {
    match admin_state(env) {
        AdminState::Active(current) => current,
        AdminState::NominationPending(current, _) => current,
    }
}

pub fn nominated_successor(env: &Env) -> Option<Address> {
    match admin_state(env) {
        AdminState::Active(_) => None,
        AdminState::NominationPending(_, pending) => Some(pending),
    }
}

pub fn module_of(env: &Env, selector: &BytesN<4>) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::ModuleOf(selector.clone()))
}

pub fn set_module_of(env: &Env, selector: &BytesN<4>, module: &Address) {
    let key = DataKey::ModuleOf(selector.clone());
    env.storage().persistent().set(&key, module);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn clear_module_of(env: &Env, selector: &BytesN<4>) {
    env.storage()
        .persistent()
        .remove(&DataKey::ModuleOf(selector.clone()));
}

pub fn module_selectors(env: &Env, module: &Address) -> Vec<BytesN<4>> {
    env.storage()
        .persistent()
        .get(&DataKey::ModuleSelectors(module.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn has_module_selectors(env: &Env, module: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::ModuleSelectors(module.clone()))
}

pub fn set_module_selectors(env: &Env, module: &Address, selectors: &Vec<BytesN<4>>) {
    let key = DataKey::ModuleSelectors(module.clone());
    env.storage().persistent().set(&key, selectors);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn clear_module_selectors(env: &Env, module: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::ModuleSelectors(module.clone()));
}

pub fn registered_modules(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Modules)
        .unwrap_or(Vec::new(env))
}

pub fn set_registered_modules(env: &Env, modules: &Vec<Address>) {
    env.storage().persistent().set(&DataKey::Modules, modules);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Modules, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn bump_core_ttl(env: &Env) {
    if env.storage().instance().has(&DataKey::Initialized) {
        env.storage()
            .instance()
            .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    let persistent = env.storage().persistent();
    if persistent.has(&DataKey::AdminState) {
        persistent.extend_ttl(&DataKey::AdminState, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    if persistent.has(&DataKey::Modules) {
        persistent.extend_ttl(&DataKey::Modules, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}
