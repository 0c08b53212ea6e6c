//! 集成测试共享工具模块
//!
//! 提供测试日志初始化与计划树构造辅助函数，供所有集成测试使用

#![allow(dead_code)]

use std::sync::Once;

use planfed::core::{Expression, NamedColumn, TableRef, Value};
use planfed::plan::nodes::{
    AggregateNode, FilterNode, JoinNode, PlanNodeEnum, ProjectNode, ScanNode, UnionNode,
};

static INIT: Once = Once::new();

/// 初始化测试日志，重复调用安全
pub fn init_test_logging() {
    INIT.call_once(|| {
        if let Ok(logger) = flexi_logger::Logger::try_with_env_or_str("debug") {
            if let Ok(handle) = logger.start() {
                // 保持 handle 存活到进程结束
                Box::leak(Box::new(handle));
            }
        }
    });
}

/// 构造扫描节点
pub fn scan(source: &str, table: &str, cols: &[&str]) -> PlanNodeEnum {
    PlanNodeEnum::Scan(ScanNode::new(
        TableRef::new(source, table),
        cols.iter().map(|c| c.to_string()).collect(),
    ))
}

/// 构造透传列引用的投影节点
pub fn project(input: PlanNodeEnum, cols: &[&str]) -> PlanNodeEnum {
    PlanNodeEnum::Project(ProjectNode::new(
        input,
        cols.iter().map(NamedColumn::column).collect(),
    ))
}

/// 构造恒真谓词的过滤节点
pub fn filter_true(input: PlanNodeEnum) -> PlanNodeEnum {
    PlanNodeEnum::Filter(FilterNode::new(
        input,
        Expression::Literal(Value::Bool(true)),
    ))
}

/// 构造键列上的内连接节点
pub fn inner_join(left: PlanNodeEnum, right: PlanNodeEnum, keys: &[&str]) -> PlanNodeEnum {
    let keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
    PlanNodeEnum::Join(JoinNode::inner_on_columns(left, right, &keys))
}

/// 构造两输入的并集节点（UNION ALL 语义）
pub fn union2(left: PlanNodeEnum, right: PlanNodeEnum) -> PlanNodeEnum {
    PlanNodeEnum::Union(UnionNode::new(vec![left, right], false))
}

/// 构造按指定列分组计数的聚合节点
pub fn aggregate_count(input: PlanNodeEnum, group: &[&str]) -> PlanNodeEnum {
    use planfed::core::{AggregateCall, AggregateFunc};

    PlanNodeEnum::Aggregate(AggregateNode::new(
        input,
        group.iter().map(NamedColumn::column).collect(),
        vec![AggregateCall::new(AggregateFunc::Count, None, "cnt")],
    ))
}

/// 两分区联邦表的标准测试配置
pub const FEDERATION_CONFIG: &str = r#"
    [[tables]]
    source = "mc_db"
    table = "employees"

    [[tables.partitions]]
    source = "mc_db_google"
    table = "employees"
    key_columns = ["multiid"]
    value_columns = ["id", "first", "last"]

    [[tables.partitions]]
    source = "mc_db_amazon"
    table = "employees"
    key_columns = ["multiid"]
    value_columns = ["age"]
"#;
