//! 裁剪扫描列的规则
//!
//! # 转换示例
//!
//! Before:
//! ```text
//!   Project(a)
//!       |
//!   Scan(t[a, b, c])
//! ```
//!
//! After:
//! ```text
//!   Project(a)
//!       |
//!   Scan(t[a])
//! ```
//!
//! # 适用条件
//!
//! - 当前节点为 Project 节点，子节点为 Scan 节点
//! - 投影表达式引用的列是扫描列的真子集
//!
//! 扫描只通过公开构造函数重建。列已最窄或投影引用不明时放弃。

use crate::plan::nodes::plan_node_enum::PlanNodeEnum;
use crate::plan::nodes::plan_node_traits::{PlanNode, SingleInputNode};
use crate::plan::nodes::{ProjectNode, ScanNode};
use crate::rewrite::pattern::Pattern;
use crate::rewrite::result::{RewriteResult, TransformResult};
use crate::rewrite::rule::RewriteRule;

/// 裁剪扫描列的规则
#[derive(Debug, Default)]
pub struct PruneScanColumnsRule;

impl PruneScanColumnsRule {
    /// 创建规则实例
    pub fn new() -> Self {
        Self
    }
}

impl RewriteRule for PruneScanColumnsRule {
    fn name(&self) -> &'static str {
        "PruneScanColumnsRule"
    }

    fn pattern(&self) -> Pattern {
        Pattern::with_project_matcher().with_dependency_name("Scan")
    }

    fn apply(&self, node: &PlanNodeEnum) -> RewriteResult<Option<TransformResult>> {
        let project = match node.as_project() {
            Some(p) => p,
            None => return Ok(None),
        };
        let scan = match project.input().as_scan() {
            Some(s) => s,
            None => return Ok(None),
        };

        // 收集投影表达式引用的所有列
        let mut referenced: Vec<String> = Vec::new();
        for column in project.columns() {
            for name in column.expression.column_refs() {
                if !referenced.contains(&name) {
                    referenced.push(name);
                }
            }
        }

        let narrowed: Vec<String> = scan
            .columns()
            .iter()
            .filter(|c| referenced.contains(*c))
            .cloned()
            .collect();

        // 已最窄或引用不明时放弃
        if narrowed.is_empty() || narrowed.len() == scan.columns().len() {
            return Ok(None);
        }

        let new_scan = ScanNode::new(scan.table().clone(), narrowed).into_enum();
        let new_project = ProjectNode::new(new_scan, project.columns().to_vec()).into_enum();
        Ok(Some(TransformResult::new(new_project)))
    }
}
