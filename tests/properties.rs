//! Property tests for folio.
//!
//! Properties use randomized input generation to protect invariants like
//! "never panics" and "output stays within bounds".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/rendering.rs"]
mod rendering;

#[path = "properties/navigation.rs"]
mod navigation;
