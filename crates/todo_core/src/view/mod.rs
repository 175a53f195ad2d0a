//! Read-only projections of the item store.

pub mod filter_view;
