#![no_std]

mod admin;
mod allowance;
mod balance;
mod config;
mod contract;
mod events;
mod groups;
mod metadata;
mod restrictions;
mod rules;
mod storage_types;
mod swap;
mod timelock;


pub use crate::contract::{RestrictedToken, RestrictedTokenClient};
pub use crate::rules::{TransferRules, TransferRulesClient};
pub use crate::swap::{RestrictedSwap, RestrictedSwapClient};
