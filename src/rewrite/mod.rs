//! 计划重写模块
//!
//! 该模块包含启发式重写框架与具体规则，在宿主基于代价的
//! 搜索之前应用。规则不依赖代价计算，总是产生等价的计划。
//!
//! # 模块结构
//!
//! - `pattern`: 模式匹配定义
//! - `result`: 重写错误与结果定义
//! - `rule`: 重写规则 trait 定义
//! - `traversal`: 共享的先序遍历基座
//! - `plan_rewriter`: 计划重写器实现
//! - `program`: 程序入口与进程级一次性注册
//! - `federation`: 扫描联邦化规则
//! - `projection_pushdown`: 投影裁剪规则

pub mod pattern;
pub mod result;
pub mod rule;
pub mod traversal;

pub mod plan_rewriter;
pub mod program;

// 具体规则模块
pub mod federation;
pub mod projection_pushdown;

pub use pattern::{MatchNode, Pattern};
pub use result::{RewriteError, RewriteResult, TransformResult};
pub use rule::RewriteRule;
pub use traversal::{walk_pre_order, walk_with_visitor, NodeVisitor, WalkControl};

pub use plan_rewriter::PlanRewriter;
pub use program::{install, ProgramChain, RewriteProgram};

pub use federation::ScanFederationRule;
pub use projection_pushdown::PruneScanColumnsRule;
