//! Encoding domain module

mod invocation;
mod profile;
mod run_date;

pub use invocation::{output_stem, EncoderInvocation};
pub use profile::{BitrateFlag, DateTag, Encoder, EncoderProfile, TagFlags};
pub use run_date::RunDate;
