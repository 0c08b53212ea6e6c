//! 计划节点模块
//!
//! 节点类型按文件拆分，公共样板由 `define_plan_node!` 宏生成；
//! Join 与 Union 输入结构特殊，直接手写实现。

pub mod macros;
pub mod plan_node_enum;
pub mod plan_node_traits;

pub mod aggregate_node;
pub mod filter_node;
pub mod join_node;
pub mod project_node;
pub mod scan_node;
pub mod union_node;

pub use aggregate_node::AggregateNode;
pub use filter_node::FilterNode;
pub use join_node::{JoinKind, JoinNode};
pub use plan_node_enum::PlanNodeEnum;
pub use plan_node_traits::{
    BinaryInputNode, MultipleInputNode, PlanNode, SingleInputNode, ZeroInputNode,
};
pub use project_node::ProjectNode;
pub use scan_node::ScanNode;
pub use union_node::UnionNode;
