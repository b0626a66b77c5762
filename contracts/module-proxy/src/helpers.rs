use soroban_sdk::{Address, BytesN, Env, Map, Vec};

use crate::storage::*;
use crate::{Error, ModuleClient};

pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    bump_core_ttl(env);
    if *caller != current_admin(env) {
        return Err(Error::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}

/// A target is a valid callable module iff it answers the manifest probe.
/// Missing contract, missing function, and malformed return all reject.
pub fn module_answers_probe(env: &Env, module: &Address) -> bool {
    matches!(
        ModuleClient::new(env, module).try_module_manifest(),
        Ok(Ok(_))
    )
}

pub fn validate_cut_shape(env: &Env, cut: &Vec<ModuleCut>) -> Result<(), Error> {
    if cut.is_empty() {
        return Err(Error::EmptyBatch);
    }
    for entry in cut.iter() {
        if entry.function_selectors.is_empty() {
            return Err(Error::EmptySelectorSet);
        }
        match entry.action {
            ModuleConfigAction::Add | ModuleConfigAction::Replace => {
                let module = entry
                    .module_address
                    .clone()
                    .ok_or(Error::InvalidSentinelUsage)?;
                if !module_answers_probe(env, &module) {
                    return Err(Error::TargetHasNoCode);
                }
            }
            ModuleConfigAction::Remove => {
                if entry.module_address.is_some() {
                    return Err(Error::InvalidSentinelUsage);
                }
            }
        }
    }
    Ok(())
}

/// Working copy of the routing table. Actions are simulated against the
/// overlay; nothing touches storage until `commit`, so a rejected batch
/// leaves the table exactly as it was.
pub struct RoutingDelta {
    owners: Map<BytesN<4>, Option<Address>>, // staged owner per touched selector
    selector_sets: Map<Address, Vec<BytesN<4>>>, // staged set per touched module
}

impl RoutingDelta {
    pub fn new(env: &Env) -> Self {
        RoutingDelta {
            owners: Map::new(env),
            selector_sets: Map::new(env),
        }
    }

    pub fn owner_of(&self, env: &Env, selector: &BytesN<4>) -> Option<Address> {
        match self.owners.get(selector.clone()) {
            Some(staged) => staged,
            None => module_of(env, selector),
        }
    }

    fn selectors_of(&self, env: &Env, module: &Address) -> Vec<BytesN<4>> {
        self.selector_sets
            .get(module.clone())
            .unwrap_or_else(|| module_selectors(env, module))
    }

    fn assign(&mut self, env: &Env, selector: &BytesN<4>, module: &Address) {
        if let Some(prev) = self.owner_of(env, selector) {
            let pruned = without_selector(env, &self.selectors_of(env, &prev), selector);
            self.selector_sets.set(prev, pruned);
        }
        let mut set = self.selectors_of(env, module);
        set.push_back(selector.clone());
        self.selector_sets.set(module.clone(), set);
        self.owners.set(selector.clone(), Some(module.clone()));
    }

    fn unassign(&mut self, env: &Env, selector: &BytesN<4>) {
        if let Some(prev) = self.owner_of(env, selector) {
            let pruned = without_selector(env, &self.selectors_of(env, &prev), selector);
            self.selector_sets.set(prev, pruned);
        }
        self.owners.set(selector.clone(), None);
    }

    /// Writes the staged state in one pass, keeping the reverse index and
    /// the registered-module list in lock-step with the primary mapping.
    pub fn commit(self, env: &Env) {
        for (selector, owner) in self.owners.iter() {
            match owner {
                Some(module) => set_module_of(env, &selector, &module),
                None => clear_module_of(env, &selector),
            }
        }
        let mut modules = registered_modules(env);
        for (module, selectors) in self.selector_sets.iter() {
            let was_registered = has_module_selectors(env, &module);
            if selectors.is_empty() {
                clear_module_selectors(env, &module);
                if was_registered {
                    modules = without_module(env, &modules, &module);
                }
            } else {
                set_module_selectors(env, &module, &selectors);
                if !was_registered {
                    modules.push_back(module.clone());
                }
            }
        }
        set_registered_modules(env, &modules);
    }
}

/// Simulates the whole cut against a fresh overlay, enforcing per-action
/// preconditions in order. First violation rejects the batch.
pub fn simulate_cut(env: &Env, cut: &Vec<ModuleCut>) -> Result<RoutingDelta, Error> {
    let mut delta = RoutingDelta::new(env);
    for entry in cut.iter() {
        match entry.action {
            ModuleConfigAction::Add => {
                let module = entry
                    .module_address
                    .clone()
                    .ok_or(Error::InvalidSentinelUsage)?;
                for selector in entry.function_selectors.iter() {
                    if delta.owner_of(env, &selector).is_some() {
                        return Err(Error::SelectorAlreadyMapped);
                    }
                    delta.assign(env, &selector, &module);
                }
            }
            ModuleConfigAction::Replace => {
                let module = entry
                    .module_address
                    .clone()
                    .ok_or(Error::InvalidSentinelUsage)?;
                for selector in entry.function_selectors.iter() {
                    match delta.owner_of(env, &selector) {
                        None => return Err(Error::SelectorNotMapped),
                        Some(current) if current == module => {
                            return Err(Error::SelectorMappedToSameModule)
                        }
                        Some(_) => delta.assign(env, &selector, &module),
                    }
                }
            }
            ModuleConfigAction::Remove => {
                for selector in entry.function_selectors.iter() {
                    if delta.owner_of(env, &selector).is_none() {
                        return Err(Error::SelectorNotMapped);
                    }
                    delta.unassign(env, &selector);
                }
            }
        }
    }
    Ok(delta)
}

fn without_selector(env: &Env, set: &Vec<BytesN<4>>, selector: &BytesN<4>) -> Vec<BytesN<4>> {
    let mut out = Vec::new(env);
    for s in set.iter() {
        if s != *selector {
            out.push_back(s);
        }
    }
    out
}

fn without_module(env: &Env, modules: &Vec<Address>, module: &Address) -> Vec<Address> {
    let mut out = Vec::new(env);
    for m in modules.iter() {
        if m != *module {
            out.push_back(m);
        }
    }
    out
}
