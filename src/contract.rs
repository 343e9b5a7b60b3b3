use crate::admin;
use crate::allowance::{read_allowance, read_nonce, spend_allowance, write_allowance};
use crate::balance::{check_nonnegative_amount, read_balance, receive_balance, spend_balance};
use crate::config::{self, TokenConfig};
use crate::events;
use crate::groups;
use crate::metadata;
use crate::restrictions::{self, TransferCheck};
use crate::rules::RulesClient;
use crate::storage_types::{Role, TimeLock};
use crate::timelock;
use soroban_sdk::{Address, Env, String, contract, contractimpl};
use soroban_token_sdk::TokenUtils;
use soroban_token_sdk::metadata::TokenMetadata;

#[contract]
pub struct RestrictedToken;

#[contractimpl]
impl RestrictedToken {
    /// Initialize the token with its rule set, initial admins and reserve.
    ///
    /// The entire initial supply is allocated to the reserve admin, which is
    /// the only account that can move tokens out once the transfer admin has
    /// opened a group window for it.
    pub fn initialize(
        env: Env,
        transfer_rules: Address,
        contract_admin: Address,
        reserve_admin: Address,
        symbol: String,
        name: String,
        decimals: u32,
        total_supply: i128,
        max_total_supply: i128,
    ) {
        if config::has_config(&env) {
            panic!("Contract already initialized");
        }
        check_nonnegative_amount(total_supply);
        check_nonnegative_amount(max_total_supply);
        if total_supply > max_total_supply {
            panic!("Cannot mint more than the max total supply");
        }

        config::write_config(
            &env,
            &TokenConfig {
                transfer_rules,
                reserve_admin: reserve_admin.clone(),
                total_supply,
                max_total_supply,
            },
        );
        metadata::write_metadata(
            &env,
            TokenMetadata {
                decimal: decimals,
                name,
                symbol,
            },
        );

        admin::seed_contract_admin(&env, &contract_admin);
        admin::grant_role(&env, &contract_admin, &reserve_admin, Role::ReserveAdmin);

        receive_balance(&env, &reserve_admin, total_supply);
        TokenUtils::new(&env)
            .events()
            .mint(contract_admin, reserve_admin, total_supply);
    }

    // ------------------------------------------------------------------
    // Metadata and ledger queries
    // ------------------------------------------------------------------

    pub fn name(env: Env) -> String {
        metadata::read_name(&env)
    }

    pub fn symbol(env: Env) -> String {
        metadata::read_symbol(&env)
    }

    pub fn decimals(env: Env) -> u32 {
        metadata::read_decimal(&env)
    }

    pub fn total_supply(env: Env) -> i128 {
        config::read_config(&env).total_supply
    }

    pub fn max_total_supply(env: Env) -> i128 {
        config::read_config(&env).max_total_supply
    }

    pub fn balance_of(env: Env, account: Address) -> i128 {
        read_balance(&env, &account)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        read_allowance(&env, &owner, &spender).amount
    }

    pub fn allowance_nonce(env: Env, owner: Address) -> u64 {
        read_nonce(&env, &owner)
    }

    pub fn is_paused(env: Env) -> bool {
        config::read_paused(&env)
    }

    pub fn transfer_rules_address(env: Env) -> Address {
        config::read_config(&env).transfer_rules
    }

    // ------------------------------------------------------------------
    // Restriction queries (open to any caller)
    // ------------------------------------------------------------------

    pub fn detect_transfer_restriction(env: Env, from: Address, to: Address, amount: i128) -> u32 {
        let rules = config::read_config(&env).transfer_rules;
        let check = Self::build_check(&env, &from, &to, amount);
        RulesClient::new(&env, &rules).detect_transfer_restriction(&check)
    }

    pub fn message_for_transfer_restriction(env: Env, code: u32) -> String {
        let rules = config::read_config(&env).transfer_rules;
        RulesClient::new(&env, &rules).message_for_transfer_restriction(&code)
    }

    /// True when the group window between the two accounts' groups is open at
    /// `at_time`. Used by off-chain tooling to pre-flight transfers.
    pub fn get_allow_transfer(env: Env, from: Address, to: Address, at_time: u64) -> bool {
        let from_group = groups::read_transfer_group(&env, &from);
        let to_group = groups::read_transfer_group(&env, &to);
        Self::get_allow_group_transfer(env, from_group, to_group, at_time)
    }

    pub fn get_allow_group_transfer(env: Env, from_group: u64, to_group: u64, at_time: u64) -> bool {
        let transfer_after = groups::read_group_transfer_after(&env, from_group, to_group);
        transfer_after != 0 && transfer_after <= at_time
    }

    pub fn get_allow_group_transfer_time(env: Env, from_group: u64, to_group: u64) -> u64 {
        groups::read_group_transfer_after(&env, from_group, to_group)
    }

    // ------------------------------------------------------------------
    // Permission queries
    // ------------------------------------------------------------------

    pub fn get_transfer_group(env: Env, account: Address) -> u64 {
        groups::read_transfer_group(&env, &account)
    }

    pub fn get_max_balance(env: Env, account: Address) -> i128 {
        groups::read_max_balance(&env, &account)
    }

    pub fn get_frozen_status(env: Env, account: Address) -> bool {
        groups::read_frozen(&env, &account)
    }

    pub fn get_currently_locked_balance(env: Env, account: Address) -> i128 {
        timelock::locked_balance(&env, &account, env.ledger().timestamp())
    }

    pub fn get_currently_unlocked_balance(env: Env, account: Address) -> i128 {
        let locked = timelock::locked_balance(&env, &account, env.ledger().timestamp());
        read_balance(&env, &account) - locked
    }

    pub fn get_total_locks_until(env: Env, account: Address) -> u32 {
        timelock::total_locks(&env, &account)
    }

    pub fn get_lock_until_index_lookup(env: Env, account: Address, index: u32) -> TimeLock {
        timelock::lock_at_index(&env, &account, index)
    }

    pub fn check_contract_admin(env: Env, account: Address) -> bool {
        admin::has_role(&env, Role::ContractAdmin, &account)
    }

    pub fn check_transfer_admin(env: Env, account: Address) -> bool {
        admin::has_role(&env, Role::TransferAdmin, &account)
    }

    pub fn check_wallets_admin(env: Env, account: Address) -> bool {
        admin::has_role(&env, Role::WalletsAdmin, &account)
    }

    pub fn check_reserve_admin(env: Env, account: Address) -> bool {
        admin::has_role(&env, Role::ReserveAdmin, &account)
    }

    pub fn contract_admin_count(env: Env) -> u32 {
        admin::read_contract_admin_count(&env)
    }

    // ------------------------------------------------------------------
    // Role administration (contract admin)
    // ------------------------------------------------------------------

    pub fn grant_contract_admin(env: Env, caller: Address, account: Address) {
        Self::grant(&env, &caller, &account, Role::ContractAdmin);
    }

    pub fn revoke_contract_admin(env: Env, caller: Address, account: Address) {
        Self::revoke(&env, &caller, &account, Role::ContractAdmin);
    }

    pub fn grant_transfer_admin(env: Env, caller: Address, account: Address) {
        Self::grant(&env, &caller, &account, Role::TransferAdmin);
    }

    pub fn revoke_transfer_admin(env: Env, caller: Address, account: Address) {
        Self::revoke(&env, &caller, &account, Role::TransferAdmin);
    }

    pub fn grant_wallets_admin(env: Env, caller: Address, account: Address) {
        Self::grant(&env, &caller, &account, Role::WalletsAdmin);
    }

    pub fn revoke_wallets_admin(env: Env, caller: Address, account: Address) {
        Self::revoke(&env, &caller, &account, Role::WalletsAdmin);
    }

    pub fn grant_reserve_admin(env: Env, caller: Address, account: Address) {
        Self::grant(&env, &caller, &account, Role::ReserveAdmin);
    }

    pub fn revoke_reserve_admin(env: Env, caller: Address, account: Address) {
        Self::revoke(&env, &caller, &account, Role::ReserveAdmin);
    }

    pub fn pause(env: Env, caller: Address) {
        caller.require_auth();
        admin::require_contract_admin(&env, &caller);
        config::write_paused(&env, true);
        events::paused(&env, &caller, true);
    }

    pub fn unpause(env: Env, caller: Address) {
        caller.require_auth();
        admin::require_contract_admin(&env, &caller);
        config::write_paused(&env, false);
        events::paused(&env, &caller, false);
    }

    // ------------------------------------------------------------------
    // Transfer policy administration
    // ------------------------------------------------------------------

    pub fn set_allow_group_transfer(
        env: Env,
        caller: Address,
        from_group: u64,
        to_group: u64,
        transfer_after: u64,
    ) {
        caller.require_auth();
        admin::require_transfer_admin(&env, &caller);
        groups::write_group_transfer_after(&env, from_group, to_group, transfer_after);
        events::allow_group_transfer(&env, &caller, from_group, to_group, transfer_after);
    }

    pub fn upgrade_transfer_rules(env: Env, caller: Address, new_rules: Address) {
        caller.require_auth();
        admin::require_transfer_admin(&env, &caller);
        let mut config = config::read_config(&env);
        let old_rules = config.transfer_rules.clone();
        config.transfer_rules = new_rules.clone();
        config::write_config(&env, &config);
        events::upgrade_rules(&env, &caller, &old_rules, &new_rules);
    }

    // ------------------------------------------------------------------
    // Per-account permissions (wallets admin)
    // ------------------------------------------------------------------

    pub fn set_max_balance(env: Env, caller: Address, account: Address, max: i128) {
        caller.require_auth();
        admin::require_wallets_or_transfer_admin(&env, &caller);
        check_nonnegative_amount(max);
        groups::write_max_balance(&env, &account, max);
        events::address_max_balance(&env, &caller, &account, max);
    }

    pub fn set_transfer_group(env: Env, caller: Address, account: Address, group: u64) {
        caller.require_auth();
        admin::require_wallets_or_transfer_admin(&env, &caller);
        groups::write_transfer_group(&env, &account, group);
        events::address_transfer_group(&env, &caller, &account, group);
    }

    pub fn freeze(env: Env, caller: Address, account: Address, status: bool) {
        caller.require_auth();
        admin::require_wallets_or_reserve_admin(&env, &caller);
        groups::write_frozen(&env, &account, status);
        events::address_frozen(&env, &caller, &account, status);
    }

    /// Returns the total amount locked until `locked_until` after merging.
    pub fn add_lock_until(
        env: Env,
        caller: Address,
        account: Address,
        locked_until: u64,
        amount: i128,
    ) -> i128 {
        caller.require_auth();
        admin::require_wallets_or_transfer_admin(&env, &caller);
        check_nonnegative_amount(amount);
        let total = timelock::add_lock(&env, &account, locked_until, amount);
        events::address_timelock(&env, &caller, &account, locked_until, total);
        total
    }

    pub fn remove_lock_until_index_lookup(env: Env, caller: Address, account: Address, index: u32) {
        caller.require_auth();
        admin::require_wallets_or_transfer_admin(&env, &caller);
        let removed = timelock::remove_lock_by_index(&env, &account, index);
        events::address_timelock_removed(&env, &caller, &account, removed.locked_until);
    }

    pub fn remove_lock_until_timestamp_lookup(
        env: Env,
        caller: Address,
        account: Address,
        timestamp: u64,
    ) {
        caller.require_auth();
        admin::require_wallets_or_transfer_admin(&env, &caller);
        let removed = timelock::remove_lock_by_timestamp(&env, &account, timestamp);
        events::address_timelock_removed(&env, &caller, &account, removed.locked_until);
    }

    /// Compound setter used by the batch permissioning tool: one call per
    /// spreadsheet row. Emits the same events the atomic setters would.
    pub fn set_address_permissions(
        env: Env,
        caller: Address,
        account: Address,
        group: u64,
        lock_until: u64,
        lock_amount: i128,
        max_balance: i128,
        frozen: bool,
    ) {
        caller.require_auth();
        admin::require_wallets_or_transfer_admin(&env, &caller);
        Self::apply_address_permissions(
            &env,
            &caller,
            &account,
            group,
            lock_until,
            lock_amount,
            max_balance,
            frozen,
        );
    }

    /// Batch-tool variant that also moves tokens from the caller to the
    /// freshly permissioned account in the same atomic call.
    pub fn set_address_permissions_and_transfer(
        env: Env,
        caller: Address,
        account: Address,
        group: u64,
        lock_until: u64,
        lock_amount: i128,
        max_balance: i128,
        frozen: bool,
        amount: i128,
    ) {
        caller.require_auth();
        admin::require_wallets_or_transfer_admin(&env, &caller);
        Self::apply_address_permissions(
            &env,
            &caller,
            &account,
            group,
            lock_until,
            lock_amount,
            max_balance,
            frozen,
        );
        check_nonnegative_amount(amount);
        Self::do_transfer(&env, &caller, &account, amount);
    }

    // ------------------------------------------------------------------
    // Supply administration (reserve admin)
    // ------------------------------------------------------------------

    pub fn mint(env: Env, caller: Address, to: Address, amount: i128) {
        caller.require_auth();
        admin::require_reserve_admin(&env, &caller);
        check_nonnegative_amount(amount);

        let mut config = config::read_config(&env);
        if config.total_supply + amount > config.max_total_supply {
            panic!("Cannot mint more than the max total supply");
        }
        config.total_supply += amount;
        config::write_config(&env, &config);

        receive_balance(&env, &to, amount);
        TokenUtils::new(&env).events().mint(caller, to, amount);
    }

    pub fn burn_from(env: Env, caller: Address, account: Address, amount: i128) {
        caller.require_auth();
        admin::require_reserve_admin(&env, &caller);
        check_nonnegative_amount(amount);

        if read_balance(&env, &account) < amount {
            panic!("Insufficent tokens to burn");
        }
        spend_balance(&env, &account, amount);

        let mut config = config::read_config(&env);
        config.total_supply -= amount;
        config::write_config(&env, &config);

        TokenUtils::new(&env).events().burn(account, amount);
    }

    // ------------------------------------------------------------------
    // Transfers and allowances
    // ------------------------------------------------------------------

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(amount);
        Self::do_transfer(&env, &from, &to, amount);
    }

    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(amount);
        spend_allowance(&env, &from, &spender, amount);
        Self::do_transfer(&env, &from, &to, amount);
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) {
        from.require_auth();
        check_nonnegative_amount(amount);
        write_allowance(&env, &from, &spender, amount, expiration_ledger);
        TokenUtils::new(&env)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    /// Race-safe approve: the caller states the allowance and nonce it
    /// believes are current, and the call fails if either moved underneath
    /// it. Any allowance mutation, including a spend through transfer_from,
    /// advances the nonce.
    pub fn safe_approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
        expected_allowance: i128,
        expected_nonce: u64,
    ) {
        from.require_auth();
        check_nonnegative_amount(amount);
        if read_allowance(&env, &from, &spender).amount != expected_allowance {
            panic!("Expected allowance does not match current allowance");
        }
        if read_nonce(&env, &from) != expected_nonce {
            panic!("Expected nonce does not match current nonce");
        }
        write_allowance(&env, &from, &spender, amount, expiration_ledger);
        TokenUtils::new(&env)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    pub fn increase_allowance(env: Env, from: Address, spender: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(amount);
        let allowance = read_allowance(&env, &from, &spender);
        let expiration_ledger = if allowance.amount > 0 {
            allowance.expiration_ledger
        } else {
            u32::MAX
        };
        let new_amount = allowance.amount + amount;
        write_allowance(&env, &from, &spender, new_amount, expiration_ledger);
        TokenUtils::new(&env)
            .events()
            .approve(from, spender, new_amount, expiration_ledger);
    }

    pub fn decrease_allowance(env: Env, from: Address, spender: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(amount);
        let allowance = read_allowance(&env, &from, &spender);
        let new_amount = if allowance.amount > amount {
            allowance.amount - amount
        } else {
            0
        };
        write_allowance(&env, &from, &spender, new_amount, allowance.expiration_ledger);
        TokenUtils::new(&env)
            .events()
            .approve(from, spender, new_amount, allowance.expiration_ledger);
    }

    // Helper functions

    fn grant(env: &Env, caller: &Address, account: &Address, role: Role) {
        caller.require_auth();
        admin::require_contract_admin(env, caller);
        admin::grant_role(env, caller, account, role);
    }

    fn revoke(env: &Env, caller: &Address, account: &Address, role: Role) {
        caller.require_auth();
        admin::require_contract_admin(env, caller);
        admin::revoke_role(env, caller, account, role);
    }

    fn apply_address_permissions(
        env: &Env,
        caller: &Address,
        account: &Address,
        group: u64,
        lock_until: u64,
        lock_amount: i128,
        max_balance: i128,
        frozen: bool,
    ) {
        check_nonnegative_amount(lock_amount);
        check_nonnegative_amount(max_balance);

        groups::write_transfer_group(env, account, group);
        events::address_transfer_group(env, caller, account, group);

        if lock_amount > 0 {
            let total = timelock::add_lock(env, account, lock_until, lock_amount);
            events::address_timelock(env, caller, account, lock_until, total);
        }

        groups::write_max_balance(env, account, max_balance);
        events::address_max_balance(env, caller, account, max_balance);

        groups::write_frozen(env, account, frozen);
        events::address_frozen(env, caller, account, frozen);
    }

    fn build_check(env: &Env, from: &Address, to: &Address, amount: i128) -> TransferCheck {
        let now = env.ledger().timestamp();
        let from_group = groups::read_transfer_group(env, from);
        let to_group = groups::read_transfer_group(env, to);
        TransferCheck {
            amount,
            now,
            paused: config::read_paused(env),
            to_is_token_contract: *to == env.current_contract_address(),
            sender_unlocked_balance: read_balance(env, from)
                - timelock::locked_balance(env, from, now),
            sender_frozen: groups::read_frozen(env, from),
            recipient_frozen: groups::read_frozen(env, to),
            recipient_balance: read_balance(env, to),
            recipient_max_balance: groups::read_max_balance(env, to),
            group_transfer_after: groups::read_group_transfer_after(env, from_group, to_group),
        }
    }

    /// Single choke point for every transfer-class balance movement. The
    /// rules verdict gates the mutation; a nonzero code aborts the whole
    /// invocation before any balance is touched.
    fn do_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
        let rules = config::read_config(env).transfer_rules;
        let check = Self::build_check(env, from, to, amount);
        let code = RulesClient::new(env, &rules).detect_transfer_restriction(&check);
        restrictions::fail_with(code);

        spend_balance(env, from, amount);
        receive_balance(env, to, amount);
        TokenUtils::new(env)
            .events()
            .transfer(from.clone(), to.clone(), amount);
    }
}
