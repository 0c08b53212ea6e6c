//! 计划重写器实现
//!
//! 管理所有启发式重写规则，自底向上按顺序应用到计划树。
//! 子节点先于父节点重写，保证规则看到的子树已是最终形态。
//! 节点不可变：重写总是用构造函数重建节点，列名信息随之刷新。

use crate::plan::nodes::plan_node_enum::PlanNodeEnum;
use crate::plan::nodes::plan_node_traits::{BinaryInputNode, MultipleInputNode, SingleInputNode};
use crate::plan::nodes::{AggregateNode, FilterNode, JoinNode, ProjectNode, UnionNode};
use crate::rewrite::result::RewriteResult;
use crate::rewrite::rule::RewriteRule;

/// 计划重写器
///
/// 持有有序规则列表，按注册顺序在每个节点上尝试应用
#[derive(Debug, Default)]
pub struct PlanRewriter {
    rules: Vec<Box<dyn RewriteRule>>,
}

impl PlanRewriter {
    /// 创建新的计划重写器
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// 添加重写规则
    pub fn add_rule<R: RewriteRule + 'static>(&mut self, rule: R) {
        log::debug!("注册重写规则: {}", rule.name());
        self.rules.push(Box::new(rule));
    }

    /// 已注册规则数量
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// 应用所有重写规则
    ///
    /// 递归遍历计划树，对所有匹配的节点应用重写规则
    pub fn rewrite(&self, node: PlanNodeEnum) -> RewriteResult<PlanNodeEnum> {
        // 先递归重写子节点
        let mut node = self.rewrite_children(node)?;

        // 按顺序尝试应用所有规则
        for rule in &self.rules {
            if !rule.matches(&node) {
                continue;
            }
            if let Some(result) = rule.apply(&node)? {
                log::debug!(
                    "规则 {} 命中: {} -> {}",
                    rule.name(),
                    node.digest(),
                    result.new_node.digest()
                );
                node = result.new_node;
            }
        }

        Ok(node)
    }

    /// 递归重写子节点并重建当前节点
    fn rewrite_children(&self, node: PlanNodeEnum) -> RewriteResult<PlanNodeEnum> {
        let node = match node {
            PlanNodeEnum::Scan(_) => node,
            PlanNodeEnum::Project(n) => {
                let input = self.rewrite(n.input().clone())?;
                PlanNodeEnum::Project(ProjectNode::new(input, n.columns().to_vec()))
            }
            PlanNodeEnum::Filter(n) => {
                let input = self.rewrite(n.input().clone())?;
                PlanNodeEnum::Filter(FilterNode::new(input, n.predicate().clone()))
            }
            PlanNodeEnum::Join(n) => {
                let left = self.rewrite(n.left_input().clone())?;
                let right = self.rewrite(n.right_input().clone())?;
                PlanNodeEnum::Join(JoinNode::new(left, right, n.kind(), n.condition().cloned()))
            }
            PlanNodeEnum::Aggregate(n) => {
                let input = self.rewrite(n.input().clone())?;
                PlanNodeEnum::Aggregate(AggregateNode::new(
                    input,
                    n.group_keys().to_vec(),
                    n.aggregates().to_vec(),
                ))
            }
            PlanNodeEnum::Union(n) => {
                let mut inputs = Vec::with_capacity(n.inputs().len());
                for child in n.inputs() {
                    inputs.push(self.rewrite((**child).clone())?);
                }
                PlanNodeEnum::Union(UnionNode::new(inputs, n.distinct()))
            }
        };

        Ok(node)
    }
}
