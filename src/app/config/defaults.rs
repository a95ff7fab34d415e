// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

/// Default number of categories shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Minimum allowed page size.
pub const MIN_PAGE_SIZE: usize = 1;

/// Maximum allowed page size.
pub const MAX_PAGE_SIZE: usize = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_PAGE_SIZE > 0);
    assert!(MAX_PAGE_SIZE >= MIN_PAGE_SIZE);
    assert!(DEFAULT_PAGE_SIZE >= MIN_PAGE_SIZE);
    assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);
};
