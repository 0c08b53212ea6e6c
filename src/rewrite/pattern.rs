//! 模式匹配定义
//!
//! 提供计划节点的模式匹配功能，用于重写规则识别特定计划结构。
//! 模式按节点类型名称匹配当前节点，并可递归约束子节点。

use crate::plan::nodes::plan_node_enum::PlanNodeEnum;

/// 模式结构体
///
/// 包含当前节点的匹配条件和子节点的模式列表
#[derive(Debug, Clone, Default)]
pub struct Pattern {
    /// 当前节点的匹配条件，None 表示匹配任何节点
    pub node: Option<MatchNode>,
    /// 子节点的模式列表
    pub dependencies: Vec<Pattern>,
}

impl Pattern {
    /// 创建空模式（匹配任何节点）
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用指定匹配条件创建模式
    pub fn with_node(node: MatchNode) -> Self {
        Self {
            node: Some(node),
            dependencies: Vec::new(),
        }
    }

    /// 使用节点名称创建模式
    pub fn new_with_name(name: &'static str) -> Self {
        Self::with_node(MatchNode::Single(name))
    }

    /// 使用多个可能的节点名称创建模式
    pub fn multi(node_names: Vec<&'static str>) -> Self {
        Self::with_node(MatchNode::Multi(node_names))
    }

    /// 添加子节点模式
    pub fn with_dependency(mut self, dependency: Pattern) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// 使用节点名称添加子节点模式
    pub fn with_dependency_name(mut self, name: &'static str) -> Self {
        self.dependencies.push(Self::new_with_name(name));
        self
    }

    /// 检查模式是否匹配给定的计划节点
    ///
    /// 每个子模式必须匹配至少一个子节点
    pub fn matches(&self, plan_node: &PlanNodeEnum) -> bool {
        if let Some(ref node) = self.node {
            if !node.matches(plan_node.name()) {
                return false;
            }
        }

        let children = plan_node.children();
        self.dependencies
            .iter()
            .all(|dep| children.iter().any(|child| dep.matches(child)))
    }

    // ==================== 便捷构造方法 ====================

    /// 创建匹配 Scan 节点的模式
    pub fn with_scan_matcher() -> Self {
        Self::new_with_name("Scan")
    }

    /// 创建匹配 Project 节点的模式
    pub fn with_project_matcher() -> Self {
        Self::new_with_name("Project")
    }

    /// 创建匹配 Filter 节点的模式
    pub fn with_filter_matcher() -> Self {
        Self::new_with_name("Filter")
    }

    /// 创建匹配 Join 节点的模式
    pub fn with_join_matcher() -> Self {
        Self::new_with_name("Join")
    }

    /// 创建匹配 Union 节点的模式
    pub fn with_union_matcher() -> Self {
        Self::new_with_name("Union")
    }
}

/// 节点匹配枚举
///
/// 定义如何匹配单个计划节点
#[derive(Debug, Clone)]
pub enum MatchNode {
    /// 匹配单个特定名称的节点
    Single(&'static str),
    /// 匹配多个可能名称中的任意一个
    Multi(Vec<&'static str>),
    /// 匹配任何节点
    Any,
}

impl MatchNode {
    /// 检查节点名称是否匹配
    pub fn matches(&self, node_name: &str) -> bool {
        match self {
            MatchNode::Single(name) => *name == node_name,
            MatchNode::Multi(names) => names.contains(&node_name),
            MatchNode::Any => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NamedColumn, TableRef};
    use crate::plan::nodes::project_node::ProjectNode;
    use crate::plan::nodes::scan_node::ScanNode;

    fn scan_node() -> PlanNodeEnum {
        PlanNodeEnum::Scan(ScanNode::new(
            TableRef::new("db", "t"),
            vec!["a".to_string()],
        ))
    }

    #[test]
    fn test_pattern_matches_name() {
        let pattern = Pattern::with_project_matcher();
        let project =
            PlanNodeEnum::Project(ProjectNode::new(scan_node(), vec![NamedColumn::column("a")]));

        assert!(pattern.matches(&project));
        assert!(!pattern.matches(&scan_node()));
    }

    #[test]
    fn test_pattern_with_dependency() {
        let pattern = Pattern::with_project_matcher().with_dependency_name("Scan");
        let project =
            PlanNodeEnum::Project(ProjectNode::new(scan_node(), vec![NamedColumn::column("a")]));

        assert!(pattern.matches(&project));

        // Project -> Project -> Scan 不匹配 Project -> Scan 模式
        let nested = PlanNodeEnum::Project(ProjectNode::new(
            project,
            vec![NamedColumn::column("a")],
        ));
        assert!(!pattern.matches(&nested));
    }

    #[test]
    fn test_match_node_multi() {
        let matcher = MatchNode::Multi(vec!["Project", "Filter"]);
        assert!(matcher.matches("Project"));
        assert!(matcher.matches("Filter"));
        assert!(!matcher.matches("Scan"));
    }

    #[test]
    fn test_match_node_any() {
        assert!(MatchNode::Any.matches("Project"));
        assert!(MatchNode::Any.matches("Scan"));
    }
}
