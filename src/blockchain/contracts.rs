//! Contract bindings generated with `abigen!` from human-readable ABI fragments.

use ethers::contract::abigen;

abigen!(
    RegistrationWorkflows,
    r#"[
        struct InitParams { string name; string symbol; string baseURI; string contractURI; uint32 maxSupply; uint256 mintFee; address mintFeeToken; address mintFeeRecipient; address owner; bool mintOpen; bool isPublicMinting; }
        function createCollection(InitParams spgNftInitParams) external returns (address spgNftContract)
        event CollectionCreated(address indexed spgNftContract)
    ]"#
);

abigen!(
    SpgNft,
    r#"[
        function mintFeeToken() external view returns (address)
        function mintFee() external view returns (uint256)
    ]"#
);

abigen!(
    MockErc20Token,
    r#"[
        function approve(address spender, uint256 value) external returns (bool)
        function mint(address to, uint256 amount) external
    ]"#
);
