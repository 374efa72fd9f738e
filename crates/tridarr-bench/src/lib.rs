//! Benchmark profiles for tridarr.
//!
//! - [`reference_profile`]: 32 × 32 × 32 (32K elements, 1057 blocks)
//! - [`stress_profile`]: 100 × 100 × 100 (1M elements, 10101 blocks)
//! - [`wide_rows_profile`]: few blocks, long rows
//! - [`many_rows_profile`]: many blocks, single-element rows

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tridarr_core::Dims;

/// Balanced cube used as the baseline.
pub fn reference_profile() -> Dims {
    Dims::new(32, 32, 32)
}

/// Same shape as [`reference_profile`] at ~30x the element count.
pub fn stress_profile() -> Dims {
    Dims::new(100, 100, 100)
}

/// Allocation cost dominated by element fill.
pub fn wide_rows_profile() -> Dims {
    Dims::new(4, 4, 32_768)
}

/// Allocation cost dominated by block count.
pub fn many_rows_profile() -> Dims {
    Dims::new(256, 256, 1)
}

/// Every profile, labelled for criterion group names.
pub fn all_profiles() -> [(&'static str, Dims); 4] {
    [
        ("reference", reference_profile()),
        ("stress", stress_profile()),
        ("wide_rows", wide_rows_profile()),
        ("many_rows", many_rows_profile()),
    ]
}
