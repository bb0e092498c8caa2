//! Contract bindings for the BITR token and the Bitredict pool.

use alloy_sol_types::sol;

sol! {
    #[sol(rpc)]
    contract IERC20 {
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
        function balanceOf(address account) external view returns (uint256);
    }
}

sol! {
    #[sol(rpc)]
    contract IBitredictPool {
        function createPool(
            bytes32 predictedOutcome,
            uint256 odds,
            uint256 creatorStake,
            uint256 eventStartTime,
            uint256 eventEndTime,
            string league,
            string category,
            string region,
            bool isPrivate,
            uint256 maxBetPerUser,
            bool useBitr,
            uint8 oracleType,
            bytes32 marketId
        ) external payable returns (uint256);
    }
}
