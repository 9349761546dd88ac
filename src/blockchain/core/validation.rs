use crate::blockchain::core::chain::Block;
use crate::error::ChainError;

/// Checks a single block against its predecessor: the stored hash must
/// match a fresh recomputation, then the stored `prev_hash` must equal
/// the predecessor's stored hash.
pub fn validate_link(prev: &Block, block: &Block) -> Result<(), ChainError> {
    let computed = block.calculate_hash();
    if block.hash != computed {
        return Err(ChainError::InvalidBlockHash {
            index: block.index,
            stored: block.hash.clone(),
            computed,
        });
    }

    if block.prev_hash != prev.hash {
        return Err(ChainError::InvalidBlockLinkage {
            index: block.index,
            expected: prev.hash.clone(),
            actual: block.prev_hash.clone(),
        });
    }

    Ok(())
}

/// Walks the sequence front to back and stops at the first violation.
/// The genesis block anchors the walk and is never checked itself, so a
/// single-block chain is always valid.
pub fn validate_chain(blocks: &[Block]) -> Result<(), ChainError> {
    for pair in blocks.windows(2) {
        if let Err(err) = validate_link(&pair[0], &pair[1]) {
            tracing::warn!("chain validation failed: {}", err);
            return Err(err);
        }
    }
    Ok(())
}
