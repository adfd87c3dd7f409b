use anyhow::Result;
use clap::Args;
use perc20::amount::to_base_units;
use perc20::{Address, TokenClient};

/// Default recipient of the transfer workflow.
const DEFAULT_RECIPIENT: &str = "0x16af037878a6cAce2Ea29d39A3757aC2F6F7aac1";

#[derive(Args)]
pub struct TransferSubCommand {
    /// Recipient address
    #[arg(short, long, default_value = DEFAULT_RECIPIENT)]
    to: Address,
    /// Amount in whole tokens
    #[arg(short, long, default_value_t = 1)]
    amount: u64,
}

/// Transfers tokens from the first node account to the recipient.
pub async fn transfer(client: &TokenClient, sub_command_args: &TransferSubCommand) -> Result<()> {
    let value = to_base_units(sub_command_args.amount);

    let from = client.first_account().await?;

    let receipt = client.transfer(from, sub_command_args.to, value).await?;

    println!("Transaction hash: {}", receipt.transaction_hash);
    println!("Transaction submitted! Transaction details: {receipt:#?}");
    println!("{}", success_line(sub_command_args.to));
    println!("Transaction hash: {}", receipt.transaction_hash);

    Ok(())
}

fn success_line(to: Address) -> String {
    format!("Transaction completed successfully! ✅  Token transferred to {to}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_recipient_is_a_valid_address() {
        DEFAULT_RECIPIENT.parse::<Address>().expect("valid address");
    }

    #[test]
    fn default_amount_is_one_token_in_base_units() {
        assert_eq!(to_base_units(1).to_string(), "1000000000000000000");
    }

    #[test]
    fn success_line_uses_the_singular_label() {
        let to = DEFAULT_RECIPIENT.parse::<Address>().expect("valid address");
        let line = success_line(to);

        assert!(line.starts_with("Transaction completed successfully! ✅  Token transferred to 0x"));
        assert!(line
            .to_lowercase()
            .ends_with("16af037878a6cace2ea29d39a3757ac2f6f7aac1"));
    }
}
