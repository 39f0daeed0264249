//! `gea-core`: the GEA1 and GEA2 GPRS keystream generators.
//!
//! Given a 64-bit key, a 32-bit IV, and a 1-bit direction flag, [`gea1`]
//! and [`gea2`] produce an arbitrary-length keystream. Encrypt or decrypt
//! by XORing the keystream with plaintext or ciphertext byte-for-byte;
//! the cipher is symmetric and self-inverse.
//!
//! Framing, packet handling, and I/O are out of scope: this crate's
//! contract is pure, deterministic keystream bytes from fixed-size
//! inputs.
//!
//! GEA1 reproduces a known, deliberate weakness in its key schedule
//! (effective key space around 2^40 despite the 64-bit key). This is
//! historical-interop software, not a cipher to rely on for
//! confidentiality; see the module docs on [`gea1`] for details.

pub mod filter;
pub mod gea1;
pub mod gea2;
pub mod lfsr;
pub mod regs;
pub mod seed;
pub mod types;

pub use gea1::{gea1, gea1_generate, gea1_init, Gea1Ctx};
pub use gea2::{gea2, gea2_generate, gea2_init, Gea2Ctx};
pub use types::GeaInput;
