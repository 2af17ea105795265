//! 시세 피드 도메인 모델.

mod quote;
mod summary;

pub use quote::*;
pub use summary::*;
