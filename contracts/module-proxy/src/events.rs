use soroban_sdk::{contractevent, Address, BytesN, Vec};

use crate::storage::ModuleConfigAction;

/// Emitted at construction and whenever a handoff completes.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChanged {
    #[topic]
    pub admin: Address,
}

/// Records a nomination, including any pending value it overwrote.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SuccessorNominated {
    #[topic]
    pub current: Address,
    pub previous_pending: Option<Address>,
    pub pending: Address,
}

/// One event per committed cut action.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModuleConfigUpdated {
    pub action: ModuleConfigAction,
    pub module: Option<Address>,
    pub function_selectors: Vec<BytesN<4>>,
}
