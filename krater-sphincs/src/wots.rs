//! WOTS+ public-key recovery.
//!
//! Verification never walks a chain from its secret end; it resumes each
//! chain at the digit encoded by the message and runs it to the top, then
//! compresses the chain heads under a `WotsPk` address. A forged digit lands
//! on the wrong chain head, which surfaces as a hypertree root mismatch.

use alloc::vec::Vec;

use crate::address::{Address, AddressType};
use crate::hash::HashEngine;
use crate::params::{LG_W, N, W, WOTS_LEN, WOTS_LEN1};
use crate::utils::{append_wots_checksum, base_2b};
use crate::words::HashOutput;

/// A WOTS+ signature: one intermediate chain node per digit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WotsSignature {
    /// Chain nodes, one per message or checksum digit.
    pub chains: [HashOutput; WOTS_LEN],
}

/// Encode a 16-byte message as base-w digits plus checksum digits.
#[must_use]
pub fn message_digits(msg: &[u8; N]) -> Vec<u32> {
    append_wots_checksum(base_2b(msg, LG_W, WOTS_LEN1))
}

/// Recover the WOTS+ compressed public key from a signature over `msg`.
///
/// `adrs` carries the layer, tree, and keypair of the signing leaf and must
/// be of type `WotsHash`; the final compression reuses those coordinates
/// under a `WotsPk` address.
pub fn wots_pk_from_sig<E: HashEngine>(
    engine: &E,
    sig: &WotsSignature,
    msg: &[u8; N],
    adrs: &mut Address,
) -> HashOutput {
    let digits = message_digits(msg);
    let mut heads = [[0u32; 4]; WOTS_LEN];

    for (i, (&digit, chain)) in digits.iter().zip(sig.chains.iter()).enumerate() {
        adrs.set_wots_chain_addr(i as u8);
        let mut node = *chain;
        for step in digit..(W as u32) - 1 {
            adrs.set_wots_hash_addr(step as u8);
            node = engine.f(adrs, &node);
        }
        heads[i] = node;
    }

    let pk_adrs = adrs.with_type(AddressType::WotsPk);
    engine.t(&pk_adrs, &heads)
}
