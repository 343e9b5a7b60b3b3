use crate::storage_types::DataKey;
use soroban_sdk::{Address, Env, contracttype};

#[contracttype]
#[derive(Clone)]
pub struct TokenConfig {
    pub transfer_rules: Address,
    pub reserve_admin: Address,
    pub total_supply: i128,
    pub max_total_supply: i128,
}

pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

pub fn read_config(e: &Env) -> TokenConfig {
    e.storage().instance().get(&DataKey::Config).unwrap()
}

pub fn write_config(e: &Env, config: &TokenConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}

pub fn read_paused(e: &Env) -> bool {
    e.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn write_paused(e: &Env, paused: bool) {
    e.storage().instance().set(&DataKey::Paused, &paused);
}
