//! Catalog administration backend core.
//!
//! Four aggregate modules (category, genre, cast member, video) built on a
//! shared kernel: accumulate/fail-fast validation, the either-result use
//! case contract, and the generic search/pagination pair. Persistence and
//! transport stay behind the gateway and publisher ports.

pub mod modules;
pub mod shared;
