//! 投影节点实现
//!
//! ProjectNode 按命名表达式列表投影输入数据流，输出列名为各表达式的别名

use crate::core::NamedColumn;
use crate::define_plan_node;
use crate::plan::node_id_generator::next_node_id;
use crate::plan::nodes::plan_node_enum::PlanNodeEnum;

define_plan_node! {
    pub struct ProjectNode {
        columns: Vec<NamedColumn>,
    }
    enum: Project
    input: SingleInputNode
}

impl ProjectNode {
    /// 创建新的投影节点
    pub fn new(input: PlanNodeEnum, columns: Vec<NamedColumn>) -> Self {
        let col_names: Vec<String> = columns.iter().map(|col| col.alias.clone()).collect();

        Self {
            id: next_node_id(),
            input: Box::new(input),
            columns,
            col_names,
        }
    }

    /// 投影的命名列列表
    pub fn columns(&self) -> &[NamedColumn] {
        &self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TableRef;
    use crate::plan::nodes::plan_node_traits::SingleInputNode;
    use crate::plan::nodes::scan_node::ScanNode;

    #[test]
    fn test_project_col_names_follow_aliases() {
        let scan = ScanNode::new(
            TableRef::new("db", "t"),
            vec!["a".to_string(), "b".to_string()],
        );
        let project = ProjectNode::new(
            PlanNodeEnum::Scan(scan),
            vec![NamedColumn::column("a"), NamedColumn::column("b")],
        );

        assert_eq!(project.col_names(), &["a".to_string(), "b".to_string()]);
        assert_eq!(project.input().name(), "Scan");
    }
}
