//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod encoding;
pub mod export;
pub mod progress;
pub mod storage;

pub use encoding::*;
pub use export::*;
pub use progress::*;
pub use storage::*;
