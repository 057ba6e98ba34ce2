//! Reusable rendering components for the vitals dashboard.

pub mod banners;
pub mod header;
