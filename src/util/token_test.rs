#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_is_none_without_a_browser() {
    assert!(load().is_none());
}

#[test]
fn store_and_clear_are_noops_but_callable() {
    store("tok123");
    clear();
    assert!(load().is_none());
}
