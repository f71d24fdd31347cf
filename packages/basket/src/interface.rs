use soroban_sdk::{ contractclient, Address, Env, Vec };

use crate::error::ErrorCode;

/// Swap venue used to convert the base token into basket assets and to value holdings.
///
/// `path` is an ordered hop list starting at the input token and ending at the output
/// token. Swaps follow a push model: the caller moves `amount_in` of `path[0]` to the
/// adapter before calling `swap`, and the adapter pays the output to `recipient`.
#[contractclient(name = "ExchangeAdapterClient")]
pub trait ExchangeAdapterInterface {
    /// Expected output for `amount_in` along `path`, without side effects.
    fn quote(env: Env, amount_in: i128, path: Vec<Address>) -> Result<i128, ErrorCode>;

    /// Executes the swap and returns the amount paid to `recipient`. Fails if the output
    /// is below `min_out` or the ledger time is past `deadline`.
    fn swap(
        env: Env,
        amount_in: i128,
        path: Vec<Address>,
        recipient: Address,
        min_out: i128,
        deadline: u64
    ) -> Result<i128, ErrorCode>;
}
