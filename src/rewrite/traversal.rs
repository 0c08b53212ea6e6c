//! 计划树遍历
//!
//! 共享的先序深度优先遍历基座。提前终止通过显式的控制值
//! 沿递归栈向上传递，而不是抛出控制流信号。

use crate::plan::nodes::plan_node_enum::PlanNodeEnum;

/// 遍历控制值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkControl {
    /// 继续遍历
    Continue,
    /// 停止整个遍历
    Stop,
}

/// 先序深度优先遍历，每个节点恰好访问一次
///
/// 回调返回 [`WalkControl::Stop`] 时立即终止整个遍历，
/// 剩余节点不再访问
pub fn walk_pre_order<F>(node: &PlanNodeEnum, f: &mut F) -> WalkControl
where
    F: FnMut(&PlanNodeEnum) -> WalkControl,
{
    if let WalkControl::Stop = f(node) {
        return WalkControl::Stop;
    }

    for child in node.children() {
        if let WalkControl::Stop = walk_pre_order(child, f) {
            return WalkControl::Stop;
        }
    }

    WalkControl::Continue
}

/// 节点访问者 trait
///
/// 需要携带状态的遍历方使用；只需变体相关逻辑的调用方
/// 可以直接用闭包调 [`walk_pre_order`]
pub trait NodeVisitor {
    /// 访问节点，返回是否继续遍历
    fn visit(&mut self, node: &PlanNodeEnum) -> WalkControl;
}

/// 用访问者做先序遍历
pub fn walk_with_visitor(node: &PlanNodeEnum, visitor: &mut dyn NodeVisitor) -> WalkControl {
    walk_pre_order(node, &mut |n| visitor.visit(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NamedColumn, TableRef};
    use crate::plan::nodes::project_node::ProjectNode;
    use crate::plan::nodes::scan_node::ScanNode;

    fn project_over_scan() -> PlanNodeEnum {
        let scan = PlanNodeEnum::Scan(ScanNode::new(
            TableRef::new("db", "t"),
            vec!["a".to_string()],
        ));
        PlanNodeEnum::Project(ProjectNode::new(scan, vec![NamedColumn::column("a")]))
    }

    #[test]
    fn test_pre_order_visits_every_node_once() {
        let tree = project_over_scan();
        let mut names = Vec::new();

        walk_pre_order(&tree, &mut |node| {
            names.push(node.name());
            WalkControl::Continue
        });

        assert_eq!(names, vec!["Project", "Scan"]);
    }

    #[test]
    fn test_stop_short_circuits() {
        let tree = project_over_scan();
        let mut visited = 0;

        let control = walk_pre_order(&tree, &mut |_| {
            visited += 1;
            WalkControl::Stop
        });

        assert_eq!(control, WalkControl::Stop);
        assert_eq!(visited, 1);
    }
}
