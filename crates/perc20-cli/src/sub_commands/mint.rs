use anyhow::Result;
use perc20::TokenClient;

/// Mints a batch of tokens to the first account exposed by the node.
pub async fn mint(client: &TokenClient) -> Result<()> {
    let from = client.first_account().await?;

    let receipt = client.mint(from).await?;

    println!("Transaction hash: {}", receipt.transaction_hash);
    println!("Transaction submitted! Transaction details: {receipt:#?}");
    println!("Transaction completed successfully! ✅  Tokens minted to {from}");
    println!("Transaction hash: {}", receipt.transaction_hash);

    Ok(())
}
