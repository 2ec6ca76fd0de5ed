pub mod chain;
pub mod contracts;
pub mod ethereum;
pub mod traits;

pub use ethereum::EthereumWorkflowsClient;
pub use traits::{CollectionWorkflows, PreparedCall, SpgNftReader};
