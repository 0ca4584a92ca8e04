use near_sdk::NearToken;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const NANOS_PER_MINUTE: u64 = 60_000_000_000;
pub const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

// --- Config defaults ---

pub const DEFAULT_REWARD_PER_UNIT_PER_PERIOD: u128 = 1_000_000;
pub const DEFAULT_MIN_ALLOCATED_CAPACITY: u64 = 1;
pub const DEFAULT_MAX_ALLOCATED_CAPACITY: u64 = 1_000_000;
pub const DEFAULT_CHALLENGE_TIMEOUT_NS: u64 = 10 * NANOS_PER_MINUTE;
pub const DEFAULT_PERIOD_LENGTH_NS: u64 = NANOS_PER_HOUR;
pub const DEFAULT_UPLOADER_PRICE_PER_UNIT: u128 = 1_000_000_000_000_000_000_000; // 0.001 NEAR

// --- Input limits ---

pub const MAX_CHALLENGE_ID_LEN: usize = 128;
pub const MAX_CHUNK_ID_LEN: usize = 256;
pub const MAX_PROOF_LEN: usize = 16_384;
pub const MAX_ENDPOINT_LEN: usize = 512;
pub const MAX_PEER_ADDRS: usize = 16;
pub const MAX_PEER_ADDR_LEN: usize = 256;

pub const MAX_RESOLVE_BATCH: usize = 100;
pub const DEFAULT_PAGE_LIMIT: u64 = 50;
pub const MAX_PAGE_LIMIT: u64 = 100;

// --- Upgrade ---

pub const GAS_MIGRATE_TGAS: u64 = 200;
