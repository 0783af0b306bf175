mod broadcast;
mod core;
mod gemm;
mod matrix_math;
mod stats;
mod types;
pub use self::types::*;
