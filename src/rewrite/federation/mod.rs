//! 联邦化规则模块
//!
//! 把逻辑表扫描改写为跨物理分区的连接。

pub mod scan_federation;

pub use scan_federation::ScanFederationRule;
