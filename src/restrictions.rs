use soroban_sdk::{Env, String, contracttype};

pub const SUCCESS: u32 = 0;
pub const GREATER_THAN_RECIPIENT_MAX_BALANCE: u32 = 1;
pub const SENDER_TOKENS_LOCKED: u32 = 2;
pub const DO_NOT_SEND_TO_TOKEN_CONTRACT: u32 = 3;
pub const DO_NOT_SEND_TO_EMPTY_ADDRESS: u32 = 4;
pub const SENDER_ADDRESS_IS_FROZEN: u32 = 5;
pub const ALL_TRANSFERS_PAUSED: u32 = 6;
pub const TRANSFER_GROUP_NOT_APPROVED: u32 = 7;
pub const TRANSFER_GROUP_NOT_ALLOWED_UNTIL_LATER: u32 = 8;
pub const RECIPIENT_ADDRESS_IS_FROZEN: u32 = 9;

/// Snapshot of everything a transfer decision depends on. The token gathers
/// it from storage and hands it to the rules contract by value, so the rules
/// stay a pure function and never call back into the token.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferCheck {
    pub amount: i128,
    pub now: u64,
    pub paused: bool,
    pub to_is_token_contract: bool,
    pub sender_unlocked_balance: i128,
    pub sender_frozen: bool,
    pub recipient_frozen: bool,
    pub recipient_balance: i128,
    /// 0 means the recipient has no balance ceiling.
    pub recipient_max_balance: i128,
    /// Group window for (sender group, recipient group); 0 means never
    /// authorized.
    pub group_transfer_after: u64,
}

/// First matching code wins. The order is part of the contract surface:
/// callers distinguish restrictions by which message they get back.
///
/// Code 4 (empty recipient) has no branch here because an `Address` cannot
/// be empty on this platform; the code keeps its slot in the message table.
pub fn detect(check: &TransferCheck) -> u32 {
    if check.recipient_max_balance != 0
        && check.recipient_balance + check.amount > check.recipient_max_balance
    {
        return GREATER_THAN_RECIPIENT_MAX_BALANCE;
    }
    if check.sender_unlocked_balance < check.amount {
        return SENDER_TOKENS_LOCKED;
    }
    if check.to_is_token_contract {
        return DO_NOT_SEND_TO_TOKEN_CONTRACT;
    }
    if check.sender_frozen {
        return SENDER_ADDRESS_IS_FROZEN;
    }
    if check.recipient_frozen {
        return RECIPIENT_ADDRESS_IS_FROZEN;
    }
    if check.paused {
        return ALL_TRANSFERS_PAUSED;
    }
    if check.group_transfer_after == 0 {
        return TRANSFER_GROUP_NOT_APPROVED;
    }
    if check.group_transfer_after > check.now {
        return TRANSFER_GROUP_NOT_ALLOWED_UNTIL_LATER;
    }
    SUCCESS
}

pub fn message(e: &Env, code: u32) -> String {
    let text = match code {
        SUCCESS => "SUCCESS",
        GREATER_THAN_RECIPIENT_MAX_BALANCE => "GREATER THAN RECIPIENT MAX BALANCE",
        SENDER_TOKENS_LOCKED => "SENDER TOKENS LOCKED",
        DO_NOT_SEND_TO_TOKEN_CONTRACT => "DO NOT SEND TO TOKEN CONTRACT",
        DO_NOT_SEND_TO_EMPTY_ADDRESS => "DO NOT SEND TO EMPTY ADDRESS",
        SENDER_ADDRESS_IS_FROZEN => "SENDER ADDRESS IS FROZEN",
        ALL_TRANSFERS_PAUSED => "ALL TRANSFERS PAUSED",
        TRANSFER_GROUP_NOT_APPROVED => "TRANSFER GROUP NOT APPROVED",
        TRANSFER_GROUP_NOT_ALLOWED_UNTIL_LATER => "TRANSFER GROUP NOT ALLOWED UNTIL LATER",
        RECIPIENT_ADDRESS_IS_FROZEN => "RECIPIENT ADDRESS IS FROZEN",
        _ => "UNKNOWN ERROR CODE",
    };
    String::from_str(e, text)
}

/// Aborts the invocation with the restriction's fixed message. Panic
/// messages must be literals so external tooling can match on them.
pub fn fail_with(code: u32) {
    match code {
        SUCCESS => (),
        GREATER_THAN_RECIPIENT_MAX_BALANCE => panic!("GREATER THAN RECIPIENT MAX BALANCE"),
        SENDER_TOKENS_LOCKED => panic!("SENDER TOKENS LOCKED"),
        DO_NOT_SEND_TO_TOKEN_CONTRACT => panic!("DO NOT SEND TO TOKEN CONTRACT"),
        DO_NOT_SEND_TO_EMPTY_ADDRESS => panic!("DO NOT SEND TO EMPTY ADDRESS"),
        SENDER_ADDRESS_IS_FROZEN => panic!("SENDER ADDRESS IS FROZEN"),
        ALL_TRANSFERS_PAUSED => panic!("ALL TRANSFERS PAUSED"),
        TRANSFER_GROUP_NOT_APPROVED => panic!("TRANSFER GROUP NOT APPROVED"),
        TRANSFER_GROUP_NOT_ALLOWED_UNTIL_LATER => {
            panic!("TRANSFER GROUP NOT ALLOWED UNTIL LATER")
        }
        RECIPIENT_ADDRESS_IS_FROZEN => panic!("RECIPIENT ADDRESS IS FROZEN"),
        _ => panic!("UNKNOWN ERROR CODE"),
    }
}
