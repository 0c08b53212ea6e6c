//! PlanNode 枚举定义
//!
//! 封闭的代数计划节点集合：Scan、Project、Filter、Join、Aggregate、Union。
//! 节点按值持有子节点，重写总是产生新节点，不做原地修改。

use std::fmt;

use super::aggregate_node::AggregateNode;
use super::filter_node::FilterNode;
use super::join_node::JoinNode;
use super::plan_node_traits::{BinaryInputNode, MultipleInputNode, SingleInputNode};
use super::project_node::ProjectNode;
use super::scan_node::ScanNode;
use super::union_node::UnionNode;

/// PlanNode 枚举，包含所有可能的节点类型
///
/// 这个枚举避免了动态分发的开销，并让遍历代码可以对封闭的
/// 节点语法做穷尽匹配
#[derive(Debug, Clone)]
pub enum PlanNodeEnum {
    /// 表扫描节点
    Scan(ScanNode),
    /// 投影节点
    Project(ProjectNode),
    /// 过滤节点
    Filter(FilterNode),
    /// 连接节点
    Join(JoinNode),
    /// 聚合节点
    Aggregate(AggregateNode),
    /// 并集节点
    Union(UnionNode),
}

impl PlanNodeEnum {
    /// 节点ID
    pub fn id(&self) -> i64 {
        match self {
            PlanNodeEnum::Scan(n) => n.id(),
            PlanNodeEnum::Project(n) => n.id(),
            PlanNodeEnum::Filter(n) => n.id(),
            PlanNodeEnum::Join(n) => n.id(),
            PlanNodeEnum::Aggregate(n) => n.id(),
            PlanNodeEnum::Union(n) => n.id(),
        }
    }

    /// 节点类型名称
    pub fn name(&self) -> &'static str {
        match self {
            PlanNodeEnum::Scan(n) => n.type_name(),
            PlanNodeEnum::Project(n) => n.type_name(),
            PlanNodeEnum::Filter(n) => n.type_name(),
            PlanNodeEnum::Join(n) => n.type_name(),
            PlanNodeEnum::Aggregate(n) => n.type_name(),
            PlanNodeEnum::Union(n) => n.type_name(),
        }
    }

    /// 输出列名列表
    pub fn col_names(&self) -> &[String] {
        match self {
            PlanNodeEnum::Scan(n) => n.col_names(),
            PlanNodeEnum::Project(n) => n.col_names(),
            PlanNodeEnum::Filter(n) => n.col_names(),
            PlanNodeEnum::Join(n) => n.col_names(),
            PlanNodeEnum::Aggregate(n) => n.col_names(),
            PlanNodeEnum::Union(n) => n.col_names(),
        }
    }

    /// 按顺序返回所有子节点
    pub fn children(&self) -> Vec<&PlanNodeEnum> {
        match self {
            PlanNodeEnum::Scan(_) => Vec::new(),
            PlanNodeEnum::Project(n) => vec![n.input()],
            PlanNodeEnum::Filter(n) => vec![n.input()],
            PlanNodeEnum::Join(n) => vec![n.left_input(), n.right_input()],
            PlanNodeEnum::Aggregate(n) => vec![n.input()],
            PlanNodeEnum::Union(n) => n.inputs().iter().map(|input| &**input).collect(),
        }
    }

    pub fn is_scan(&self) -> bool {
        matches!(self, PlanNodeEnum::Scan(_))
    }

    pub fn is_project(&self) -> bool {
        matches!(self, PlanNodeEnum::Project(_))
    }

    pub fn is_filter(&self) -> bool {
        matches!(self, PlanNodeEnum::Filter(_))
    }

    pub fn is_join(&self) -> bool {
        matches!(self, PlanNodeEnum::Join(_))
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, PlanNodeEnum::Aggregate(_))
    }

    pub fn is_union(&self) -> bool {
        matches!(self, PlanNodeEnum::Union(_))
    }

    pub fn as_scan(&self) -> Option<&ScanNode> {
        match self {
            PlanNodeEnum::Scan(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_project(&self) -> Option<&ProjectNode> {
        match self {
            PlanNodeEnum::Project(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionNode> {
        match self {
            PlanNodeEnum::Union(n) => Some(n),
            _ => None,
        }
    }

    /// 渲染与节点ID无关的递归摘要串
    ///
    /// 摘要用于日志输出和结构等价性比较：两棵树结构相同当且仅当
    /// 摘要串相同
    pub fn digest(&self) -> String {
        match self {
            PlanNodeEnum::Scan(n) => {
                format!("Scan({}[{}])", n.table(), n.columns().join(","))
            }
            PlanNodeEnum::Project(n) => {
                let columns: Vec<String> = n.columns().iter().map(|c| c.to_string()).collect();
                format!("Project[{}]({})", columns.join(", "), n.input().digest())
            }
            PlanNodeEnum::Filter(n) => {
                format!("Filter({})({})", n.predicate(), n.input().digest())
            }
            PlanNodeEnum::Join(n) => {
                let condition = n
                    .condition()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "true".to_string());
                format!(
                    "Join:{}({})({}, {})",
                    n.kind().as_str(),
                    condition,
                    n.left_input().digest(),
                    n.right_input().digest()
                )
            }
            PlanNodeEnum::Aggregate(n) => {
                let groups: Vec<String> = n.group_keys().iter().map(|g| g.to_string()).collect();
                let aggs: Vec<String> = n.aggregates().iter().map(|a| a.to_string()).collect();
                format!(
                    "Aggregate[{}][{}]({})",
                    groups.join(", "),
                    aggs.join(", "),
                    n.input().digest()
                )
            }
            PlanNodeEnum::Union(n) => {
                let inputs: Vec<String> =
                    n.inputs().iter().map(|input| input.digest()).collect();
                let name = if n.distinct() { "Union" } else { "UnionAll" };
                format!("{}({})", name, inputs.join(", "))
            }
        }
    }
}

impl fmt::Display for PlanNodeEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digest())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NamedColumn, TableRef};

    fn scan(cols: &[&str]) -> PlanNodeEnum {
        PlanNodeEnum::Scan(ScanNode::new(
            TableRef::new("db", "t"),
            cols.iter().map(|c| c.to_string()).collect(),
        ))
    }

    #[test]
    fn test_children_order() {
        let join = PlanNodeEnum::Join(JoinNode::inner_on_columns(
            scan(&["k", "x"]),
            scan(&["k", "y"]),
            &["k".to_string()],
        ));

        let children = join.children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].col_names(), &["k".to_string(), "x".to_string()]);
    }

    #[test]
    fn test_digest_ignores_ids() {
        let build = || {
            PlanNodeEnum::Project(ProjectNode::new(
                scan(&["a", "b"]),
                vec![NamedColumn::column("a")],
            ))
        };

        // 两次构造的节点ID不同，摘要相同
        assert_eq!(build().digest(), build().digest());
        assert_eq!(build().digest(), "Project[a](Scan(db.t[a,b]))");
    }
}
