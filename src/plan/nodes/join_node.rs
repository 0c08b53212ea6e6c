//! 连接节点实现
//!
//! JoinNode 携带连接类型与连接条件。条件为列等值的合取；
//! 交叉连接没有条件。输出列为左输入列接右输入列。

use crate::core::{BinaryOp, Expression};
use crate::plan::node_id_generator::next_node_id;
use crate::plan::nodes::plan_node_enum::PlanNodeEnum;
use crate::plan::nodes::plan_node_traits::{BinaryInputNode, PlanNode};

/// 连接类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Full,
    Cross,
}

impl JoinKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinKind::Inner => "Inner",
            JoinKind::Left => "Left",
            JoinKind::Full => "Full",
            JoinKind::Cross => "Cross",
        }
    }
}

/// 连接节点
#[derive(Debug, Clone)]
pub struct JoinNode {
    id: i64,
    left: Box<PlanNodeEnum>,
    right: Box<PlanNodeEnum>,
    kind: JoinKind,
    condition: Option<Expression>,
    col_names: Vec<String>,
}

impl JoinNode {
    /// 创建新的连接节点
    pub fn new(
        left: PlanNodeEnum,
        right: PlanNodeEnum,
        kind: JoinKind,
        condition: Option<Expression>,
    ) -> Self {
        let mut col_names = left.col_names().to_vec();
        col_names.extend(right.col_names().iter().cloned());

        Self {
            id: next_node_id(),
            left: Box::new(left),
            right: Box::new(right),
            kind,
            condition,
            col_names,
        }
    }

    /// 创建在共享键列上做等值内连接的节点
    ///
    /// 条件为两侧同名键列等值的合取
    pub fn inner_on_columns(left: PlanNodeEnum, right: PlanNodeEnum, keys: &[String]) -> Self {
        let equalities: Vec<Expression> = keys
            .iter()
            .map(|key| {
                Expression::binary(
                    BinaryOp::Eq,
                    Expression::column(key.clone()),
                    Expression::column(key.clone()),
                )
            })
            .collect();

        Self::new(left, right, JoinKind::Inner, Expression::and_all(equalities))
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn type_name(&self) -> &'static str {
        "Join"
    }

    pub fn col_names(&self) -> &[String] {
        &self.col_names
    }

    /// 连接类型
    pub fn kind(&self) -> JoinKind {
        self.kind
    }

    /// 连接条件
    pub fn condition(&self) -> Option<&Expression> {
        self.condition.as_ref()
    }
}

impl PlanNode for JoinNode {
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
        PlanNodeEnum::Join(self)
    }
}

impl BinaryInputNode for JoinNode {
    fn left_input(&self) -> &PlanNodeEnum {
        &self.left
    }

    fn right_input(&self) -> &PlanNodeEnum {
        &self.right
    }

    fn set_left_input(&mut self, input: PlanNodeEnum) {
        self.left = Box::new(input);
    }

    fn set_right_input(&mut self, input: PlanNodeEnum) {
        self.right = Box::new(input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TableRef;
    use crate::plan::nodes::scan_node::ScanNode;

    fn scan(table: &str, cols: &[&str]) -> PlanNodeEnum {
        PlanNodeEnum::Scan(ScanNode::new(
            TableRef::new("db", table),
            cols.iter().map(|c| c.to_string()).collect(),
        ))
    }

    #[test]
    fn test_join_output_shape() {
        let join = JoinNode::new(
            scan("t1", &["k", "x"]),
            scan("t2", &["k", "y"]),
            JoinKind::Inner,
            None,
        );

        let expected: Vec<String> = ["k", "x", "k", "y"].iter().map(|c| c.to_string()).collect();
        assert_eq!(join.col_names(), expected.as_slice());
    }

    #[test]
    fn test_inner_on_columns_condition() {
        let join = JoinNode::inner_on_columns(
            scan("t1", &["k", "x"]),
            scan("t2", &["k", "y"]),
            &["k".to_string()],
        );

        assert_eq!(join.kind(), JoinKind::Inner);
        let condition = join.condition().expect("等值连接应有条件");
        assert_eq!(condition.column_refs(), vec!["k", "k"]);
    }
}
