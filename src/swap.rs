use crate::contract::RestrictedTokenClient;
use soroban_sdk::{Address, Env, Symbol, contract, contractimpl, contracttype, symbol_short, token};

const SWAP_NEW: Symbol = symbol_short!("swap_new");
const SWAP_FUND: Symbol = symbol_short!("swap_fund");
const SWAP_DONE: Symbol = symbol_short!("swap_done");
const SWAP_VOID: Symbol = symbol_short!("swap_void");

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SwapStatus {
    Open,
    Complete,
    Canceled,
}

/// One two-party exchange: the restricted token against an arbitrary token.
/// Both legs sit in escrow inside this contract until the second leg funds,
/// then the swap settles in that same invocation.
#[contracttype]
#[derive(Clone)]
pub struct Swap {
    pub restricted_sender: Address,
    pub restricted_amount: i128,
    pub payment_token: Address,
    pub payment_sender: Address,
    pub payment_amount: i128,
    pub restricted_funded: bool,
    pub payment_funded: bool,
    pub status: SwapStatus,
}

#[contracttype]
#[derive(Clone)]
pub enum SwapDataKey {
    RestrictedToken,
    Admin,
    SwapCount,
    Swap(u32),
}

#[contract]
pub struct RestrictedSwap;

#[contractimpl]
impl RestrictedSwap {
    pub fn initialize(env: Env, restricted_token: Address, admin: Address) {
        if env.storage().instance().has(&SwapDataKey::RestrictedToken) {
            panic!("Contract already initialized");
        }
        env.storage()
            .instance()
            .set(&SwapDataKey::RestrictedToken, &restricted_token);
        env.storage().instance().set(&SwapDataKey::Admin, &admin);
    }

    pub fn configure_swap(
        env: Env,
        caller: Address,
        restricted_sender: Address,
        restricted_amount: i128,
        payment_token: Address,
        payment_sender: Address,
        payment_amount: i128,
    ) -> u32 {
        caller.require_auth();
        if caller != Self::read_admin(&env) {
            panic!("DOES NOT HAVE SWAP ADMIN ROLE");
        }
        if restricted_amount <= 0 || payment_amount <= 0 {
            panic!("Swap amounts must be positive");
        }

        let swap_id = Self::swap_count(env.clone()) + 1;
        env.storage().instance().set(&SwapDataKey::SwapCount, &swap_id);
        env.storage().persistent().set(
            &SwapDataKey::Swap(swap_id),
            &Swap {
                restricted_sender: restricted_sender.clone(),
                restricted_amount,
                payment_token,
                payment_sender,
                payment_amount,
                restricted_funded: false,
                payment_funded: false,
                status: SwapStatus::Open,
            },
        );

        env.events()
            .publish((SWAP_NEW, caller), (swap_id, restricted_sender));
        swap_id
    }

    /// The restricted leg funds through the token's own transfer path, so
    /// the policy engine vets the sender on the way into escrow.
    pub fn fund_restricted(env: Env, swap_id: u32) {
        let mut swap = Self::get_swap(env.clone(), swap_id);
        if swap.status != SwapStatus::Open {
            panic!("Swap is not open");
        }
        if swap.restricted_funded {
            panic!("Swap leg already funded");
        }
        swap.restricted_sender.require_auth();

        let restricted = Self::read_restricted_token(&env);
        RestrictedTokenClient::new(&env, &restricted).transfer(
            &swap.restricted_sender,
            &env.current_contract_address(),
            &swap.restricted_amount,
        );

        swap.restricted_funded = true;
        env.events()
            .publish((SWAP_FUND, swap.restricted_sender.clone()), swap_id);
        Self::store_and_maybe_settle(&env, swap_id, swap);
    }

    pub fn fund_payment(env: Env, swap_id: u32) {
        let mut swap = Self::get_swap(env.clone(), swap_id);
        if swap.status != SwapStatus::Open {
            panic!("Swap is not open");
        }
        if swap.payment_funded {
            panic!("Swap leg already funded");
        }
        swap.payment_sender.require_auth();

        token::Client::new(&env, &swap.payment_token).transfer(
            &swap.payment_sender,
            &env.current_contract_address(),
            &swap.payment_amount,
        );

        swap.payment_funded = true;
        env.events()
            .publish((SWAP_FUND, swap.payment_sender.clone()), swap_id);
        Self::store_and_maybe_settle(&env, swap_id, swap);
    }

    /// Cancels an open swap and refunds whichever legs already funded.
    pub fn cancel_swap(env: Env, caller: Address, swap_id: u32) {
        caller.require_auth();
        let mut swap = Self::get_swap(env.clone(), swap_id);
        if swap.status != SwapStatus::Open {
            panic!("Swap is not open");
        }
        if caller != Self::read_admin(&env)
            && caller != swap.restricted_sender
            && caller != swap.payment_sender
        {
            panic!("Swap can only be canceled by a party or the admin");
        }

        let escrow = env.current_contract_address();
        if swap.restricted_funded {
            let restricted = Self::read_restricted_token(&env);
            RestrictedTokenClient::new(&env, &restricted).transfer(
                &escrow,
                &swap.restricted_sender,
                &swap.restricted_amount,
            );
        }
        if swap.payment_funded {
            token::Client::new(&env, &swap.payment_token).transfer(
                &escrow,
                &swap.payment_sender,
                &swap.payment_amount,
            );
        }

        swap.status = SwapStatus::Canceled;
        env.storage()
            .persistent()
            .set(&SwapDataKey::Swap(swap_id), &swap);
        env.events().publish((SWAP_VOID, caller), swap_id);
    }

    pub fn get_swap(env: Env, swap_id: u32) -> Swap {
        match env.storage().persistent().get(&SwapDataKey::Swap(swap_id)) {
            Some(swap) => swap,
            None => panic!("Swap not found"),
        }
    }

    pub fn swap_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&SwapDataKey::SwapCount)
            .unwrap_or(0)
    }

    pub fn get_restricted_token(env: Env) -> Address {
        Self::read_restricted_token(&env)
    }

    // Helper functions

    fn read_admin(env: &Env) -> Address {
        env.storage().instance().get(&SwapDataKey::Admin).unwrap()
    }

    fn read_restricted_token(env: &Env) -> Address {
        env.storage()
            .instance()
            .get(&SwapDataKey::RestrictedToken)
            .unwrap()
    }

    fn store_and_maybe_settle(env: &Env, swap_id: u32, mut swap: Swap) {
        if swap.restricted_funded && swap.payment_funded {
            let escrow = env.current_contract_address();
            let restricted = Self::read_restricted_token(env);
            // Both outbound legs run the restricted transfer path again, so
            // a recipient who lost eligibility since funding aborts the
            // settlement and leaves the escrow intact.
            RestrictedTokenClient::new(env, &restricted).transfer(
                &escrow,
                &swap.payment_sender,
                &swap.restricted_amount,
            );
            token::Client::new(env, &swap.payment_token).transfer(
                &escrow,
                &swap.restricted_sender,
                &swap.payment_amount,
            );
            swap.status = SwapStatus::Complete;
            env.events().publish((SWAP_DONE, escrow), swap_id);
        }
        env.storage()
            .persistent()
            .set(&SwapDataKey::Swap(swap_id), &swap);
    }
}
