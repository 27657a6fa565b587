//! # Hashing
//!
//! One hash function, used everywhere: BLAKE3. Transaction hashes, Merkle
//! leaves, Merkle nodes -- all the same 256-bit digest. Fast on every
//! platform, parallelizable, and immune to length extension, so there is
//! no double-hashing ritual anywhere in this crate.
//!
//! The Merkle reduction here is the one the aggregate transaction binds
//! its inner transactions with; its exact edge-case behavior (empty list,
//! single leaf, odd level) is consensus-relevant and pinned by tests.

use crate::model::Hash256;

/// Computes the BLAKE3 hash of the input data.
pub fn hash256(data: &[u8]) -> Hash256 {
    Hash256(*blake3::hash(data).as_bytes())
}

/// Hashes multiple byte slices as if concatenated, without the temporary
/// buffer. Feeding parts sequentially into the hasher gives the identical
/// digest to hashing `part0 ‖ part1 ‖ ...`.
pub fn hash256_multi(parts: &[&[u8]]) -> Hash256 {
    let mut hasher = blake3::Hasher::new();
    for part in parts {
        hasher.update(part);
    }
    Hash256(*hasher.finalize().as_bytes())
}

/// Computes the Merkle root over an ordered list of leaf digests.
///
/// The reduction, exactly:
///
/// - An empty list yields the all-zero digest, with no hash invocation.
/// - While more than one digest remains, pairs are processed left to
///   right; each pair is concatenated and hashed into one parent. An odd
///   digest at the end of a level is paired with itself.
/// - A single leaf is therefore its own root -- it never gets re-hashed.
///
/// The root depends on leaf order. That is intentional: the aggregate
/// transaction uses this root to commit to the exact sequence of its
/// inner transactions, not just their set.
pub fn merkle_root(leaves: &[Hash256]) -> Hash256 {
    if leaves.is_empty() {
        return Hash256::zero();
    }

    let mut level: Vec<Hash256> = leaves.to_vec();
    while level.len() > 1 {
        let mut next = Vec::with_capacity((level.len() + 1) / 2);
        for chunk in level.chunks(2) {
            let left = &chunk[0];
            let right = if chunk.len() == 2 { &chunk[1] } else { &chunk[0] };
            next.push(hash256_multi(&[left.as_bytes(), right.as_bytes()]));
        }
        level = next;
    }
    level[0]
}
