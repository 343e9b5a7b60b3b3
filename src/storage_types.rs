use soroban_sdk::{Address, contracttype};

#[derive(Clone)]
#[contracttype]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

/// One reserved slice of an account's balance. The amount stays
/// untransferable until the ledger timestamp passes `locked_until`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimeLock {
    pub locked_until: u64,
    pub balance_locked: i128,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    ContractAdmin,
    TransferAdmin,
    WalletsAdmin,
    ReserveAdmin,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Paused,
    ContractAdminCount,
    Role(Role, Address),
    Balance(Address),
    Allowance(AllowanceDataKey),
    /// Per-owner approval nonce consumed by safe_approve.
    AllowanceNonce(Address),
    MaxBalance(Address),
    TransferGroup(Address),
    Frozen(Address),
    LocksUntil(Address),
    /// (from_group, to_group) -> earliest allowed transfer timestamp.
    GroupTransfer(u64, u64),
}
