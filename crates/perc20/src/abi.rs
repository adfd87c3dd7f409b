//! Interface description of the PERC20 sample token.
//!
//! Generated from the contract's ABI with alloy's `sol!` macro. The write
//! workflows only ever invoke `mint` and `transfer`; the read surface is
//! carried because it is part of the deployed contract's interface.

use alloy::sol;

sol! {
    /// ERC-20 style sample token with a public faucet-like `mint`.
    #[sol(rpc)]
    interface IPERC20 {
        /// Credits a fixed batch of tokens to the caller.
        function mint() external;

        /// Moves `value` base units from the caller to `to`.
        function transfer(address to, uint256 value) external returns (bool);

        function balanceOf(address owner) external view returns (uint256);

        function decimals() external view returns (uint8);

        event Transfer(address indexed from, address indexed to, uint256 value);
    }
}
