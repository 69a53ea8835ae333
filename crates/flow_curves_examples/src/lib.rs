#![forbid(unsafe_code)]

mod fields;
mod report;

pub use fields::{noise_like_field, swirl_field, waves_field};
pub use report::{init_tracing, print_rows_csv, print_summary};
