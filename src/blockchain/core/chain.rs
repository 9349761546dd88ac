use crate::blockchain::core::validation::validate_chain;
use crate::crypto::{sha256_hex, BlockHash};
use crate::error::ChainError;
use serde_json::Value;
use std::fmt;

// Genesis literals. The sentinel stands in for the digest of the
// (nonexistent) predecessor of the genesis block.
pub const GENESIS_TIMESTAMP: &str = "2017-01-23";
pub const GENESIS_PAYLOAD: &str = "forecho";
pub const PREV_HASH_SENTINEL: &str = "0";

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Block {
    pub index: u64,
    pub timestamp: String,
    /// Arbitrary payload; the chain never interprets it.
    pub data: Value,
    /// Digest of the preceding block, or the sentinel for genesis.
    pub prev_hash: BlockHash,
    /// Digest over this block's own fields; goes stale if a field is
    /// mutated without a `reseal`.
    pub hash: BlockHash,
}

impl Block {
    /// Creates a sealed block with the sentinel `prev_hash`. The hash is
    /// provisional: `Chain::add_block` relinks the block and reseals it.
    pub fn new(index: u64, timestamp: impl Into<String>, data: Value) -> Self {
        Self::with_prev_hash(index, timestamp, data, PREV_HASH_SENTINEL)
    }

    pub fn with_prev_hash(
        index: u64,
        timestamp: impl Into<String>,
        data: Value,
        prev_hash: impl Into<BlockHash>,
    ) -> Self {
        let mut block = Block {
            index,
            timestamp: timestamp.into(),
            data,
            prev_hash: prev_hash.into(),
            hash: BlockHash::new(),
        };
        block.hash = block.calculate_hash();
        block
    }

    /// Convenience constructor stamping today's UTC date.
    pub fn new_now(index: u64, data: Value) -> Self {
        let timestamp = chrono::Utc::now().format("%Y-%m-%d").to_string();
        Self::new(index, timestamp, data)
    }

    /// Computes the block's digest from its current field values.
    ///
    /// The preimage is the UTF-8 concatenation, with no separators, of
    /// the decimal `index`, the `prev_hash`, the `timestamp` and the
    /// canonical payload encoding. The canonical encoding is compact JSON
    /// with object keys in lexicographic order and no whitespace, so that
    /// logically equal payloads always digest identically: strings keep
    /// their quotes (`"forecho"`), numbers are bare (`1`), objects are
    /// compact (`{"amount":1}`).
    ///
    /// Pure function of the current fields; never mutates the block.
    pub fn calculate_hash(&self) -> BlockHash {
        let mut preimage = String::new();
        preimage.push_str(&self.index.to_string());
        preimage.push_str(&self.prev_hash);
        preimage.push_str(&self.timestamp);
        preimage.push_str(&serde_json::to_string(&self.data).unwrap_or_default());
        sha256_hex(preimage.as_bytes())
    }

    /// Recomputes and stores the digest from the current field values.
    /// Callers that mutate a sealed block must reseal it themselves.
    pub fn reseal(&mut self) {
        self.hash = self.calculate_hash();
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "block #{} [{}] prev={} hash={}",
            self.index,
            self.timestamp,
            abbrev(&self.prev_hash),
            abbrev(&self.hash)
        )
    }
}

/// Shortens a digest for one-line output; the sentinel passes through.
fn abbrev(digest: &str) -> String {
    if digest.len() > 16 {
        format!("{}...", &digest[..13])
    } else {
        digest.to_string()
    }
}

// Chain struct and implementation

/// Append-only sequence of hash-linked blocks. Position 0 is always the
/// genesis block; the sequence never shrinks or reorders.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Chain {
    pub blocks: Vec<Block>,
}

impl Chain {
    /// Creates a chain holding exactly the genesis block.
    pub fn new() -> Self {
        Chain {
            blocks: vec![Self::create_genesis_block()],
        }
    }

    /// Builds the fixed genesis block from the hardcoded literals.
    pub fn create_genesis_block() -> Block {
        Block::with_prev_hash(
            0,
            GENESIS_TIMESTAMP,
            Value::from(GENESIS_PAYLOAD),
            PREV_HASH_SENTINEL,
        )
    }

    pub fn latest_block(&self) -> &Block {
        self.blocks
            .last()
            .expect("chain always contains the genesis block")
    }

    /// Links `block` to the current tip and appends it. Overwrites
    /// `block.prev_hash` with the tip's digest and reseals, superseding
    /// whatever provisional hash the caller computed at construction.
    pub fn add_block(&mut self, mut block: Block) {
        block.prev_hash = self.latest_block().hash.clone();
        block.reseal();
        tracing::debug!("appended {}", block);
        self.blocks.push(block);
    }

    /// Walks the chain and reports the first integrity violation found.
    pub fn validate(&self) -> Result<(), ChainError> {
        validate_chain(&self.blocks)
    }

    /// Boolean form of `validate`.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}
