/// Constant boolean types used by the response envelopes.
mod bools;

pub use self::bools::*;
