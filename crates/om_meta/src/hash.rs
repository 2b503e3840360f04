//! Hash containers for the registry tables, based on *hashbrown* and *foldhash*.

use core::any::TypeId;
use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHashState

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x6F6D_4D45_5441_2E31);

/// Hash state with a fixed seed, results only depend on the input.
#[derive(Copy, Clone, Default, Debug)]
pub(crate) struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FoldHasher<'static>;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// TypeIdHashState

/// Passes the `u64` written by `TypeId::hash` straight through.
#[derive(Copy, Clone, Default, Debug)]
pub(crate) struct TypeIdHasher {
    hash: u64,
}

impl Hasher for TypeIdHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    // `TypeId` writes a single `u64`, other input is folded.
    fn write(&mut self, bytes: &[u8]) {
        self.hash = FIXED_HASH_STATE.hash_one(bytes);
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

#[derive(Copy, Clone, Default, Debug)]
pub(crate) struct TypeIdHashState;

impl BuildHasher for TypeIdHashState {
    type Hasher = TypeIdHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        TypeIdHasher { hash: 0 }
    }
}

// -----------------------------------------------------------------------------
// Aliases

pub(crate) type HashMap<K, V> = hashbrown::HashMap<K, V, FixedHashState>;

/// Class tables are keyed by the owner's [`TypeId`].
pub(crate) type TypeIdMap<V> = hashbrown::HashMap<TypeId, V, TypeIdHashState>;
