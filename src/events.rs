use crate::storage_types::Role;
use soroban_sdk::{Address, Env, Symbol, symbol_short};

const ROLE_CHANGE: Symbol = symbol_short!("role_chg");
const MAX_BALANCE: Symbol = symbol_short!("max_bal");
const TIMELOCK: Symbol = symbol_short!("timelock");
const RM_TIMELOCK: Symbol = symbol_short!("rm_lock");
const TRANSFER_GROUP: Symbol = symbol_short!("group");
const FROZEN: Symbol = symbol_short!("frozen");
const ALLOW_GROUP: Symbol = symbol_short!("allow_grp");
const PAUSED: Symbol = symbol_short!("paused");
const UPGRADE: Symbol = symbol_short!("upgrade");

pub fn role_change(e: &Env, grantor: &Address, grantee: &Address, role: Role, status: bool) {
    e.events().publish(
        (ROLE_CHANGE, grantor.clone()),
        (grantee.clone(), role, status),
    );
}

pub fn address_max_balance(e: &Env, admin: &Address, account: &Address, value: i128) {
    e.events()
        .publish((MAX_BALANCE, admin.clone(), account.clone()), value);
}

pub fn address_timelock(
    e: &Env,
    admin: &Address,
    account: &Address,
    locked_until: u64,
    value: i128,
) {
    e.events().publish(
        (TIMELOCK, admin.clone(), account.clone()),
        (locked_until, value),
    );
}

pub fn address_timelock_removed(e: &Env, admin: &Address, account: &Address, locked_until: u64) {
    e.events()
        .publish((RM_TIMELOCK, admin.clone(), account.clone()), locked_until);
}

pub fn address_transfer_group(e: &Env, admin: &Address, account: &Address, value: u64) {
    e.events()
        .publish((TRANSFER_GROUP, admin.clone(), account.clone()), value);
}

pub fn address_frozen(e: &Env, admin: &Address, account: &Address, status: bool) {
    e.events()
        .publish((FROZEN, admin.clone(), account.clone()), status);
}

pub fn allow_group_transfer(
    e: &Env,
    admin: &Address,
    from_group: u64,
    to_group: u64,
    transfer_after: u64,
) {
    e.events().publish(
        (ALLOW_GROUP, admin.clone()),
        (from_group, to_group, transfer_after),
    );
}

pub fn paused(e: &Env, admin: &Address, status: bool) {
    e.events().publish((PAUSED, admin.clone()), status);
}

pub fn upgrade_rules(e: &Env, admin: &Address, old_rules: &Address, new_rules: &Address) {
    e.events().publish(
        (UPGRADE, admin.clone()),
        (old_rules.clone(), new_rules.clone()),
    );
}
