use crate::storage_types::DataKey;
use soroban_sdk::{Address, Env};

pub fn read_transfer_group(e: &Env, account: &Address) -> u64 {
    e.storage()
        .persistent()
        .get(&DataKey::TransferGroup(account.clone()))
        .unwrap_or(0)
}

pub fn write_transfer_group(e: &Env, account: &Address, group: u64) {
    e.storage()
        .persistent()
        .set(&DataKey::TransferGroup(account.clone()), &group);
}

pub fn read_max_balance(e: &Env, account: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::MaxBalance(account.clone()))
        .unwrap_or(0)
}

pub fn write_max_balance(e: &Env, account: &Address, max: i128) {
    e.storage()
        .persistent()
        .set(&DataKey::MaxBalance(account.clone()), &max);
}

pub fn read_frozen(e: &Env, account: &Address) -> bool {
    e.storage()
        .persistent()
        .get(&DataKey::Frozen(account.clone()))
        .unwrap_or(false)
}

pub fn write_frozen(e: &Env, account: &Address, status: bool) {
    e.storage()
        .persistent()
        .set(&DataKey::Frozen(account.clone()), &status);
}

/// Earliest timestamp at which `from_group` may send to `to_group`.
/// 0 means the pair has never been authorized.
pub fn read_group_transfer_after(e: &Env, from_group: u64, to_group: u64) -> u64 {
    e.storage()
        .persistent()
        .get(&DataKey::GroupTransfer(from_group, to_group))
        .unwrap_or(0)
}

pub fn write_group_transfer_after(e: &Env, from_group: u64, to_group: u64, transfer_after: u64) {
    e.storage()
        .persistent()
        .set(&DataKey::GroupTransfer(from_group, to_group), &transfer_after);
}
