//! 投影裁剪规则模块

pub mod prune_scan_columns;

pub use prune_scan_columns::PruneScanColumnsRule;
