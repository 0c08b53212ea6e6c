//! 重写结果定义
//!
//! 定义重写规则的错误与返回结果类型。
//! 规则不命中返回 Ok(None)，是正常路径，不是错误；
//! 只有结构性不变量被破坏时才返回 Err。

use crate::plan::nodes::plan_node_enum::PlanNodeEnum;

/// 重写错误类型
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("无效的计划结构: {0}")]
    InvalidPlanStructure(String),

    #[error("重写失败: {0}")]
    RewriteFailed(String),

    #[error("不支持的节点类型: {0}")]
    UnsupportedNodeType(String),
}

impl RewriteError {
    pub fn invalid_plan_structure(msg: impl Into<String>) -> Self {
        Self::InvalidPlanStructure(msg.into())
    }

    pub fn rewrite_failed(msg: impl Into<String>) -> Self {
        Self::RewriteFailed(msg.into())
    }

    pub fn unsupported_node_type(name: impl Into<String>) -> Self {
        Self::UnsupportedNodeType(name.into())
    }
}

/// 重写结果类型
pub type RewriteResult<T> = std::result::Result<T, RewriteError>;

/// 转换结果
///
/// 记录重写规则产生的等价替换子树
#[derive(Debug, Clone)]
pub struct TransformResult {
    /// 替换原节点的新子树
    pub new_node: PlanNodeEnum,
}

impl TransformResult {
    /// 以替换子树创建转换结果
    pub fn new(new_node: PlanNodeEnum) -> Self {
        Self { new_node }
    }
}
