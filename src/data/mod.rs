//! Sample history and channel bookkeeping.

pub mod channels;
pub mod ring;
pub mod store;
