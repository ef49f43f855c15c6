//! Tracks whether the indicator is already bound to the page

use std::cell::Cell;

thread_local! {
    static MOUNTED: Cell<bool> = const { Cell::new(false) };
}

/// Mark the page as mounted. Returns `false` if it already was.
pub fn try_claim() -> bool {
    MOUNTED.with(|mounted| !mounted.replace(true))
}

/// Allow a later mount, e.g. after binding to the page failed
pub fn release() {
    MOUNTED.with(|mounted| mounted.set(false));
}
