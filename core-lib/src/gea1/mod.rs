//! GEA1: the initialization register `S`, context, and keystream drivers.
//!
//! GEA1's `S` → `(A, B, C)` loading carries a deliberate weakness
//! (the "T-32 division property") that shrinks its effective key space to
//! around 2^40 despite the nominal 64-bit key. This implementation
//! reproduces the loading exactly; it must never be "corrected", or the
//! keystream would no longer match the standard.

mod sreg;

use crate::lfsr::{clock, filtered_output};
use crate::regs::{A_FIN, A_LEN, A_TAPS, B_FIN, B_LEN, B_TAPS, C_FIN, C_LEN, C_TAPS};
use crate::seed::seed_bits;
use crate::types::GeaInput;
use tracing::{instrument, warn};

/// The number of trailing zero bits clocked into `S` after `(iv, dir,
/// key)`, per §4.3 of the algorithm description.
const S_PADDING_BITS: u32 = 128;

/// GEA1 algorithm state: the initialization register `S` and the three
/// keystream LFSRs `A`, `B`, `C`. Lives for the duration of a single
/// `gea1_init` / `gea1_generate` pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gea1Ctx {
    /// 64-bit initialization register; scratch during init, unused during
    /// generation.
    s: u64,
    /// 31-bit keystream register.
    a: u64,
    /// 32-bit keystream register.
    b: u64,
    /// 33-bit keystream register.
    c: u64,
}

impl Gea1Ctx {
    #[must_use]
    pub const fn new() -> Self {
        Self { s: 0, a: 0, b: 0, c: 0 }
    }
}

/// Seed a zero-initialized GEA1 context from `input`.
#[instrument(level = "debug", skip(ctx))]
pub fn gea1_init(ctx: &mut Gea1Ctx, input: &GeaInput) {
    for b in seed_bits(input.iv, input.dir, input.key) {
        ctx.s = sreg::clock(ctx.s, b);
    }
    for _ in 0..S_PADDING_BITS {
        ctx.s = sreg::clock(ctx.s, 0);
    }

    let s_a = ctx.s;
    let s_b = sreg::rotl64(ctx.s, 16);
    let s_c = sreg::rotl64(ctx.s, 32);

    for i in (0..64).rev() {
        ctx.a = clock(ctx.a, A_LEN, A_TAPS, (s_a >> i) & 1);
        ctx.b = clock(ctx.b, B_LEN, B_TAPS, (s_b >> i) & 1);
        ctx.c = clock(ctx.c, C_LEN, C_TAPS, (s_c >> i) & 1);
    }

    fixup(&mut ctx.a, A_LEN, "A");
    fixup(&mut ctx.b, B_LEN, "B");
    fixup(&mut ctx.c, C_LEN, "C");
}

/// Force the top bit of a keystream register if seeding left it at the
/// zero fixed point.
fn fixup(reg: &mut u64, len: u32, name: &str) {
    if *reg == 0 {
        warn!(register = name, "GEA1 null state fix-up triggered");
        *reg = 1 << (len - 1);
    }
}

/// Emit `ks.len()` keystream bytes from a seeded GEA1 context.
///
/// Precondition: `ks` is all-zero on entry, since this routine ORs bits
/// into it.
#[instrument(level = "debug", skip(ctx, ks), fields(len = ks.len()))]
pub fn gea1_generate(ctx: &mut Gea1Ctx, ks: &mut [u8]) {
    debug_assert!(
        ks.iter().all(|&byte| byte == 0),
        "gea1_generate requires a zeroed output buffer"
    );
    for byte in ks.iter_mut() {
        for j in 0..8 {
            let bit = filtered_output(ctx.a, A_FIN)
                ^ filtered_output(ctx.b, B_FIN)
                ^ filtered_output(ctx.c, C_FIN);
            *byte |= bit << j;

            ctx.a = clock(ctx.a, A_LEN, A_TAPS, 0);
            ctx.b = clock(ctx.b, B_LEN, B_TAPS, 0);
            ctx.c = clock(ctx.c, C_LEN, C_TAPS, 0);
        }
    }
}

/// Produce `ks.len()` bytes of GEA1 keystream for `input` in one call.
pub fn gea1(input: &GeaInput, ks: &mut [u8]) {
    ks.fill(0);
    let mut ctx = Gea1Ctx::new();
    gea1_init(&mut ctx, input);
    gea1_generate(&mut ctx, ks);
}
