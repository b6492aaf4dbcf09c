//! Journal services: aggregation, history filtering, CSV export, and
//! screenshot storage.

pub mod export;
pub mod filter;
pub mod images;
pub mod stats;
