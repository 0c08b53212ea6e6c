//! 并集节点实现
//!
//! UnionNode 按顺序持有任意多个输入分支。
//! distinct 为 false 时等价于 UNION ALL 语义。
//! 输出列取第一个输入的列名。

use crate::plan::node_id_generator::next_node_id;
use crate::plan::nodes::plan_node_enum::PlanNodeEnum;
use crate::plan::nodes::plan_node_traits::{MultipleInputNode, PlanNode};

/// 并集节点
#[derive(Debug, Clone)]
pub struct UnionNode {
    id: i64,
    inputs: Vec<Box<PlanNodeEnum>>,
    distinct: bool,
    col_names: Vec<String>,
}

impl UnionNode {
    /// 创建新的并集节点
    pub fn new(inputs: Vec<PlanNodeEnum>, distinct: bool) -> Self {
        let col_names = inputs
            .first()
            .map(|input| input.col_names().to_vec())
            .unwrap_or_default();

        Self {
            id: next_node_id(),
            inputs: inputs.into_iter().map(Box::new).collect(),
            distinct,
            col_names,
        }
    }

    /// 是否去重
    pub fn distinct(&self) -> bool {
        self.distinct
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn type_name(&self) -> &'static str {
        "Union"
    }

    pub fn col_names(&self) -> &[String] {
        &self.col_names
    }
}

impl PlanNode for UnionNode {
    fn id(&self) -> i64 {
        self.id()
    }

    fn name(&self) -> &'static str {
        self.type_name()
    }

    fn col_names(&self) -> &[String] {
        self.col_names()
    }

    fn into_enum(self) -> PlanNodeEnum {
        PlanNodeEnum::Union(self)
    }
}

impl MultipleInputNode for UnionNode {
    fn inputs(&self) -> &[Box<PlanNodeEnum>] {
        &self.inputs
    }

    fn add_input(&mut self, input: PlanNodeEnum) {
        if self.inputs.is_empty() {
            self.col_names = input.col_names().to_vec();
        }
        self.inputs.push(Box::new(input));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TableRef;
    use crate::plan::nodes::scan_node::ScanNode;

    fn scan(table: &str) -> PlanNodeEnum {
        PlanNodeEnum::Scan(ScanNode::new(
            TableRef::new("db", table),
            vec!["a".to_string()],
        ))
    }

    #[test]
    fn test_union_inputs_ordered() {
        let union = UnionNode::new(vec![scan("t1"), scan("t2"), scan("t3")], false);

        assert_eq!(union.input_count(), 3);
        assert_eq!(union.col_names(), &["a".to_string()]);
        assert!(!union.distinct());
    }
}
