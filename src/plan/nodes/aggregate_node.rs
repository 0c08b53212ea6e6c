//! 聚合节点实现
//!
//! AggregateNode 按分组键对输入数据流做聚合计算，
//! 输出列为分组键别名加各聚合调用的别名

use crate::core::{AggregateCall, NamedColumn};
use crate::define_plan_node;
use crate::plan::node_id_generator::next_node_id;
use crate::plan::nodes::plan_node_enum::PlanNodeEnum;

define_plan_node! {
    pub struct AggregateNode {
        group_keys: Vec<NamedColumn>,
        aggregates: Vec<AggregateCall>,
    }
    enum: Aggregate
    input: SingleInputNode
}

impl AggregateNode {
    /// 创建新的聚合节点
    pub fn new(
        input: PlanNodeEnum,
        group_keys: Vec<NamedColumn>,
        aggregates: Vec<AggregateCall>,
    ) -> Self {
        let mut col_names: Vec<String> =
            group_keys.iter().map(|key| key.alias.clone()).collect();
        col_names.extend(aggregates.iter().map(|agg| agg.alias.clone()));

        Self {
            id: next_node_id(),
            input: Box::new(input),
            group_keys,
            aggregates,
            col_names,
        }
    }

    /// 分组键列表
    pub fn group_keys(&self) -> &[NamedColumn] {
        &self.group_keys
    }

    /// 聚合调用列表
    pub fn aggregates(&self) -> &[AggregateCall] {
        &self.aggregates
    }
}
