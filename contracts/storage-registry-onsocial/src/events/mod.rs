mod builder;
mod types;

mod challenge;
mod contract;
mod node;
mod reward;
mod uploader;

pub use challenge::*;
pub use contract::*;
pub use node::*;
pub use reward::*;
pub use uploader::*;

pub(crate) const STANDARD: &str = "onsocial";
pub(crate) const VERSION: &str = "1.0.0";
pub(crate) const PREFIX: &str = "EVENT_JSON:";

pub(crate) const NODE: &str = "NODE_UPDATE";
pub(crate) const CHALLENGE: &str = "CHALLENGE_UPDATE";
pub(crate) const REWARD: &str = "REWARD_UPDATE";
pub(crate) const UPLOADER: &str = "UPLOADER_UPDATE";
pub(crate) const CONTRACT: &str = "CONTRACT_UPDATE";
