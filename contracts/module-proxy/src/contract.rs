use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, Vec};

use crate::events::{AdminChanged, ModuleConfigUpdated, SuccessorNominated};
use crate::helpers::*;
use crate::storage::*;
use crate::{Error, ModuleClient};

#[contract]
pub struct ModuleProxy;

#[contractimpl]
impl ModuleProxy {
    pub fn __constructor(env: Env, admin: Address) {
        admin.require_auth();
        env.storage()
            .persistent()
            .set(&DataKey::AdminState, &AdminState::Active(admin.clone()));
        env.storage().instance().set(&DataKey::Initialized, &true);
        bump_core_ttl(&env);
        AdminChanged { admin }.publish(&env);
    }

    /// Applies an ordered cut atomically. Every action is validated against
    /// a working copy of the routing table; nothing is written unless the
    /// whole batch validates.
    pub fn configure_modules(env: Env, caller: Address, cut: Vec<ModuleCut>) -> Result<(), Error> {
        require_admin(&env, &caller)?;
        validate_cut_shape(&env, &cut)?;
        let delta = simulate_cut(&env, &cut)?;
        delta.commit(&env);
        for entry in cut.iter() {
            ModuleConfigUpdated {
                action: entry.action.clone(),
                module: entry.module_address.clone(),
                function_selectors: entry.function_selectors.clone(),
            }
            .publish(&env);
        }
        Ok(())
    }

    /// Resolves the selector and forwards the call verbatim to the owning
    /// module. The module's outcome, success value or failure, propagates
    /// to the original caller unchanged; no forwarding is attempted for an
    /// unmapped selector.
    pub fn dispatch(
        env: Env,
        caller: Address,
        selector: BytesN<4>,
        payload: Bytes,
    ) -> Result<Bytes, Error> {
        let module = module_of(&env, &selector).ok_or(Error::UnknownSelector)?;
        Ok(ModuleClient::new(&env, &module).handle(&caller, &selector, &payload))
    }

    /// Admin only. Overwrites any prior pending nomination; the handoff
    /// completes only when the nominee calls `accept_administration`.
    pub fn nominate_successor(env: Env, caller: Address, successor: Address) -> Result<(), Error> {
        require_admin(&env, &caller)?;
        let previous_pending = nominated_successor(&env);
        set_admin_state(
            &env,
            &AdminState::NominationPending(caller.clone(), successor.clone()),
        );
        SuccessorNominated {
            current: caller,
            previous_pending,
            pending: successor,
        }
        .publish(&env);
        Ok(())
    }

    pub fn accept_administration(env: Env, caller: Address) -> Result<(), Error> {
        bump_core_ttl(&env);
        match admin_state(&env) {
            AdminState::Active(_) => Err(Error::NoPendingNomination),
            AdminState::NominationPending(_, pending) => {
                if caller != pending {
                    return Err(Error::Unauthorized);
                }
                caller.require_auth();
                set_admin_state(&env, &AdminState::Active(pending.clone()));
                AdminChanged { admin: pending }.publish(&env);
                Ok(())
            }
        }
    }

    // Lens: unrestricted reads, exact and immediately consistent with the
    // last committed cut.

    pub fn module_address(env: Env, selector: BytesN<4>) -> Option<Address> {
        module_of(&env, &selector)
    }

    pub fn module_addresses(env: Env) -> Vec<Address> {
        registered_modules(&env)
    }

    pub fn module_function_selectors(env: Env, module: Address) -> Vec<BytesN<4>> {
        module_selectors(&env, &module)
    }

    pub fn admin(env: Env) -> Address {
        current_admin(&env)
    }

    pub fn pending_admin(env: Env) -> Option<Address> {
        nominated_successor(&env)
    }
}
