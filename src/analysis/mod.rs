//! 计划分析模块
//!
//! 只读的计划树分析，不做任何改写。
//! 当前包含字段使用分析，其结果供联邦化规则做列裁剪。

pub mod field_usage;

pub use field_usage::{FieldUsageAnalyzer, FieldUsageReport};
