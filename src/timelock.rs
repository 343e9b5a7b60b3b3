use crate::storage_types::{DataKey, TimeLock};
use soroban_sdk::{Address, Env, Vec};

pub fn read_locks(e: &Env, account: &Address) -> Vec<TimeLock> {
    e.storage()
        .persistent()
        .get(&DataKey::LocksUntil(account.clone()))
        .unwrap_or(Vec::new(e))
}

fn write_locks(e: &Env, account: &Address, locks: &Vec<TimeLock>) {
    e.storage()
        .persistent()
        .set(&DataKey::LocksUntil(account.clone()), locks);
}

/// Adds a lock, merging into an existing entry with the same timestamp
/// instead of appending a duplicate. Returns the total amount now locked
/// until that timestamp.
pub fn add_lock(e: &Env, account: &Address, locked_until: u64, amount: i128) -> i128 {
    let mut locks = read_locks(e, account);
    for i in 0..locks.len() {
        let mut lock = locks.get_unchecked(i);
        if lock.locked_until == locked_until {
            lock.balance_locked += amount;
            let total = lock.balance_locked;
            locks.set(i, lock);
            write_locks(e, account, &locks);
            return total;
        }
    }
    locks.push_back(TimeLock {
        locked_until,
        balance_locked: amount,
    });
    write_locks(e, account, &locks);
    amount
}

pub fn remove_lock_by_index(e: &Env, account: &Address, index: u32) -> TimeLock {
    let mut locks = read_locks(e, account);
    if index >= locks.len() {
        panic!("Timelock index outside range");
    }
    let removed = locks.get_unchecked(index);
    locks.remove_unchecked(index);
    write_locks(e, account, &locks);
    removed
}

pub fn remove_lock_by_timestamp(e: &Env, account: &Address, timestamp: u64) -> TimeLock {
    let locks = read_locks(e, account);
    for i in 0..locks.len() {
        if locks.get_unchecked(i).locked_until == timestamp {
            return remove_lock_by_index(e, account, i);
        }
    }
    panic!("Timelock timestamp not found");
}

pub fn total_locks(e: &Env, account: &Address) -> u32 {
    read_locks(e, account).len()
}

pub fn lock_at_index(e: &Env, account: &Address, index: u32) -> TimeLock {
    let locks = read_locks(e, account);
    if index >= locks.len() {
        panic!("Timelock index outside range");
    }
    locks.get_unchecked(index)
}

/// Sum of the still-active reservations. Entries whose timestamp has passed
/// stay in storage but no longer count.
pub fn locked_balance(e: &Env, account: &Address, now: u64) -> i128 {
    let locks = read_locks(e, account);
    let mut total: i128 = 0;
    for lock in locks.iter() {
        if lock.locked_until > now {
            total += lock.balance_locked;
        }
    }
    total
}
