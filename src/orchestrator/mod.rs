//! 编排层（Orchestration Layer）
//!
//! ```text
//! converter::App
//!     ↓
//! models::loaders (读取解析)
//!     ↓
//! services (分类选择 / 补全 / 导出)
//! ```

pub mod converter;

pub use converter::{App, RunSummary};
