//! Fixed design parameters (length, tap mask, F-input tap positions) for
//! the four keystream LFSRs. A, B, C feed GEA1; A, B, C, D feed GEA2.

pub const A_LEN: u32 = 31;
pub const A_TAPS: u64 = 0x2C7646EE;
pub const A_FIN: [u32; 7] = [8, 30, 17, 9, 5, 28, 23];

pub const B_LEN: u32 = 32;
pub const B_TAPS: u64 = 0x510781C7;
pub const B_FIN: [u32; 7] = [19, 4, 31, 30, 2, 10, 26];

pub const C_LEN: u32 = 33;
pub const C_TAPS: u64 = 0x245F670A;
pub const C_FIN: [u32; 7] = [22, 2, 0, 29, 13, 32, 28];

pub const D_LEN: u32 = 29;
pub const D_TAPS: u64 = 0x09FD59A5;
pub const D_FIN: [u32; 7] = [16, 5, 25, 28, 18, 1, 11];
