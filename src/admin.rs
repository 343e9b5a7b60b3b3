use crate::events;
use crate::storage_types::{DataKey, Role};
use soroban_sdk::{Address, Env};

pub fn has_role(e: &Env, role: Role, account: &Address) -> bool {
    e.storage()
        .persistent()
        .get(&DataKey::Role(role, account.clone()))
        .unwrap_or(false)
}

fn write_role(e: &Env, role: Role, account: &Address, status: bool) {
    e.storage()
        .persistent()
        .set(&DataKey::Role(role, account.clone()), &status);
}

pub fn read_contract_admin_count(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&DataKey::ContractAdminCount)
        .unwrap_or(0)
}

fn write_contract_admin_count(e: &Env, count: u32) {
    e.storage()
        .instance()
        .set(&DataKey::ContractAdminCount, &count);
}

/// Sets the role flag without any authorization check. Used once by the
/// constructor to seed the initial contract admin, who appears in the audit
/// trail as their own grantor.
pub fn seed_contract_admin(e: &Env, account: &Address) {
    write_role(e, Role::ContractAdmin, account, true);
    write_contract_admin_count(e, 1);
    events::role_change(e, account, account, Role::ContractAdmin, true);
}

/// Granting a role the grantee already holds is a no-op that still emits the
/// role change, so the audit trail records the attempt. The contract admin
/// count moves only when the flag actually flips.
pub fn grant_role(e: &Env, grantor: &Address, grantee: &Address, role: Role) {
    let already = has_role(e, role, grantee);
    if !already {
        write_role(e, role, grantee, true);
        if role == Role::ContractAdmin {
            write_contract_admin_count(e, read_contract_admin_count(e) + 1);
        }
    }
    events::role_change(e, grantor, grantee, role, true);
}

pub fn revoke_role(e: &Env, grantor: &Address, grantee: &Address, role: Role) {
    let held = has_role(e, role, grantee);
    if held {
        if role == Role::ContractAdmin {
            let count = read_contract_admin_count(e);
            if count <= 1 {
                panic!("Must have at least one contract admin");
            }
            write_contract_admin_count(e, count - 1);
        }
        write_role(e, role, grantee, false);
    }
    events::role_change(e, grantor, grantee, role, false);
}

pub fn require_contract_admin(e: &Env, caller: &Address) {
    if !has_role(e, Role::ContractAdmin, caller) {
        panic!("DOES NOT HAVE CONTRACT OWNER ROLE");
    }
}

pub fn require_transfer_admin(e: &Env, caller: &Address) {
    if !has_role(e, Role::TransferAdmin, caller) {
        panic!("DOES NOT HAVE TRANSFER ADMIN ROLE");
    }
}

pub fn require_wallets_or_transfer_admin(e: &Env, caller: &Address) {
    if !has_role(e, Role::WalletsAdmin, caller) && !has_role(e, Role::TransferAdmin, caller) {
        panic!("DOES NOT HAVE WALLETS ADMIN OR TRANSFER ADMIN ROLE");
    }
}

pub fn require_wallets_or_reserve_admin(e: &Env, caller: &Address) {
    if !has_role(e, Role::WalletsAdmin, caller) && !has_role(e, Role::ReserveAdmin, caller) {
        panic!("DOES NOT HAVE WALLETS ADMIN OR RESERVE ADMIN ROLE");
    }
}

pub fn require_reserve_admin(e: &Env, caller: &Address) {
    if !has_role(e, Role::ReserveAdmin, caller) {
        panic!("DOES NOT HAVE RESERVE ADMIN ROLE");
    }
}
