//! 피드 전반에서 사용되는 공통 타입.

mod category;
mod decimal;
mod instrument;

pub use category::*;
pub use decimal::*;
pub use instrument::*;
