use crate::restrictions::{self, TransferCheck};
use soroban_sdk::{Env, String, contract, contractclient, contractimpl};

/// Interface the token calls through its stored rules address. Any contract
/// implementing it can be swapped in with `upgrade_transfer_rules`, which is
/// how restriction logic evolves without migrating balances.
#[contractclient(name = "RulesClient")]
pub trait TransferRulesInterface {
    /// Restriction code for the proposed transfer snapshot. 0 means allowed.
    fn detect_transfer_restriction(e: Env, check: TransferCheck) -> u32;

    /// Human-readable diagnostic for a restriction code.
    fn message_for_transfer_restriction(e: Env, code: u32) -> String;
}

/// The production rule set.
#[contract]
pub struct TransferRules;

#[contractimpl]
impl TransferRulesInterface for TransferRules {
    fn detect_transfer_restriction(_e: Env, check: TransferCheck) -> u32 {
        restrictions::detect(&check)
    }

    fn message_for_transfer_restriction(e: Env, code: u32) -> String {
        restrictions::message(&e, code)
    }
}
