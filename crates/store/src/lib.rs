//! Persistence for brands and the active theme.
//!
//! A demo platform runs on a laptop, not a database cluster: state is a
//! JSON snapshot on local disk, loaded once at startup and rewritten
//! atomically after every mutation. [`BrandStore`] is the single owner
//! of mutable state; the API layer holds it behind an `Arc` and every
//! handler goes through its methods.

pub mod brands;
pub mod error;
pub mod kv;

pub use brands::BrandStore;
pub use error::StoreError;
pub use kv::KvStore;
