//! GEA2: the initialization register `W`, context, and keystream drivers.

mod wreg;

use crate::lfsr::{clock, filtered_output};
use crate::regs::{
    A_FIN, A_LEN, A_TAPS, B_FIN, B_LEN, B_TAPS, C_FIN, C_LEN, C_TAPS, D_FIN, D_LEN, D_TAPS,
};
use crate::seed::seed_bits;
use crate::types::GeaInput;
use tracing::{instrument, warn};
use wreg::WReg;

/// The number of trailing zero bits clocked into `W` after `(iv, dir,
/// key)`, per §4.4 of the algorithm description.
const W_PADDING_BITS: u32 = 194;

/// GEA2 algorithm state: the initialization register `W` and the four
/// keystream LFSRs `A`, `B`, `C`, `D`. Lives for the duration of a single
/// `gea2_init` / `gea2_generate` pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gea2Ctx {
    /// 97-bit initialization register; scratch during init, unused during
    /// generation.
    w: WReg,
    /// 31-bit keystream register.
    a: u64,
    /// 32-bit keystream register.
    b: u64,
    /// 33-bit keystream register.
    c: u64,
    /// 29-bit keystream register.
    d: u64,
}

impl Gea2Ctx {
    #[must_use]
    pub const fn new() -> Self {
        Self { w: WReg::new(), a: 0, b: 0, c: 0, d: 0 }
    }
}

/// Seed a zero-initialized GEA2 context from `input`.
#[instrument(level = "debug", skip(ctx))]
pub fn gea2_init(ctx: &mut Gea2Ctx, input: &GeaInput) {
    for b in seed_bits(input.iv, input.dir, input.key) {
        ctx.w = ctx.w.clock(b);
    }
    for _ in 0..W_PADDING_BITS {
        ctx.w = ctx.w.clock(0);
    }

    let w_a = ctx.w.rotl16();
    let w_b = ctx.w.rotl33();
    let w_c = ctx.w.rotl51();
    let w_d = ctx.w;

    for i in (0..33).rev() {
        ctx.a = clock(ctx.a, A_LEN, A_TAPS, (w_a.hi >> i) & 1);
        ctx.b = clock(ctx.b, B_LEN, B_TAPS, (w_b.hi >> i) & 1);
        ctx.c = clock(ctx.c, C_LEN, C_TAPS, (w_c.hi >> i) & 1);
        ctx.d = clock(ctx.d, D_LEN, D_TAPS, (w_d.hi >> i) & 1);
    }
    for i in (0..64).rev() {
        ctx.a = clock(ctx.a, A_LEN, A_TAPS, (w_a.lo >> i) & 1);
        ctx.b = clock(ctx.b, B_LEN, B_TAPS, (w_b.lo >> i) & 1);
        ctx.c = clock(ctx.c, C_LEN, C_TAPS, (w_c.lo >> i) & 1);
        ctx.d = clock(ctx.d, D_LEN, D_TAPS, (w_d.lo >> i) & 1);
    }

    fixup(&mut ctx.a, A_LEN, "A");
    fixup(&mut ctx.b, B_LEN, "B");
    fixup(&mut ctx.c, C_LEN, "C");
    fixup(&mut ctx.d, D_LEN, "D");
}

/// Force the top bit of a keystream register if seeding left it at the
/// zero fixed point.
fn fixup(reg: &mut u64, len: u32, name: &str) {
    if *reg == 0 {
        warn!(register = name, "GEA2 null state fix-up triggered");
        *reg = 1 << (len - 1);
    }
}

/// Emit `ks.len()` keystream bytes from a seeded GEA2 context.
///
/// Precondition: `ks` is all-zero on entry, since this routine ORs bits
/// into it.
#[instrument(level = "debug", skip(ctx, ks), fields(len = ks.len()))]
pub fn gea2_generate(ctx: &mut Gea2Ctx, ks: &mut [u8]) {
    debug_assert!(
        ks.iter().all(|&byte| byte == 0),
        "gea2_generate requires a zeroed output buffer"
    );
    for byte in ks.iter_mut() {
        for j in 0..8 {
            let bit = filtered_output(ctx.a, A_FIN)
                ^ filtered_output(ctx.b, B_FIN)
                ^ filtered_output(ctx.c, C_FIN)
                ^ filtered_output(ctx.d, D_FIN);
            *byte |= bit << j;

            ctx.a = clock(ctx.a, A_LEN, A_TAPS, 0);
            ctx.b = clock(ctx.b, B_LEN, B_TAPS, 0);
            ctx.c = clock(ctx.c, C_LEN, C_TAPS, 0);
            ctx.d = clock(ctx.d, D_LEN, D_TAPS, 0);
        }
    }
}

/// Produce `ks.len()` bytes of GEA2 keystream for `input` in one call.
pub fn gea2(input: &GeaInput, ks: &mut [u8]) {
    ks.fill(0);
    let mut ctx = Gea2Ctx::new();
    gea2_init(&mut ctx, input);
    gea2_generate(&mut ctx, ks);
}
