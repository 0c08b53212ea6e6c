//! 过滤节点实现
//!
//! FilterNode 按谓词表达式过滤输入数据流，输出列与输入相同

use crate::core::Expression;
use crate::define_plan_node;
use crate::plan::node_id_generator::next_node_id;
use crate::plan::nodes::plan_node_enum::PlanNodeEnum;

define_plan_node! {
    pub struct FilterNode {
        predicate: Expression,
    }
    enum: Filter
    input: SingleInputNode
}

impl FilterNode {
    /// 创建新的过滤节点
    pub fn new(input: PlanNodeEnum, predicate: Expression) -> Self {
        let col_names = input.col_names().to_vec();

        Self {
            id: next_node_id(),
            input: Box::new(input),
            predicate,
            col_names,
        }
    }

    /// 过滤谓词
    pub fn predicate(&self) -> &Expression {
        &self.predicate
    }
}
