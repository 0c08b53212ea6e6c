//! 重写规则 trait 定义
//!
//! 所有启发式重写规则必须实现此 trait。
//! 规则通过模式匹配识别计划树的特定结构，然后应用转换。
//! 规则是纯函数：不命中时无副作用，命中时产生等价替换子树，
//! 由宿主负责代价重估。

use crate::plan::nodes::plan_node_enum::PlanNodeEnum;
use crate::rewrite::pattern::Pattern;
use crate::rewrite::result::{RewriteResult, TransformResult};

/// 重写规则 trait
pub trait RewriteRule: std::fmt::Debug + Send + Sync {
    /// 规则名称
    fn name(&self) -> &'static str;

    /// 返回规则的模式
    fn pattern(&self) -> Pattern;

    /// 应用重写规则
    ///
    /// # 返回
    /// - `Ok(Some(result))`: 重写成功，返回替换子树
    /// - `Ok(None)`: 规则不命中，保持原节点
    /// - `Err(e)`: 结构性不变量被破坏
    fn apply(&self, node: &PlanNodeEnum) -> RewriteResult<Option<TransformResult>>;

    /// 检查规则是否匹配当前节点
    fn matches(&self, node: &PlanNodeEnum) -> bool {
        self.pattern().matches(node)
    }
}
