//! 表扫描节点实现
//!
//! ScanNode 读取一个数据源中表的若干列，是计划树的叶子节点。
//! 列表为空时表示扫描宽度未知，由消费方按保守全宽处理。

use crate::core::TableRef;
use crate::define_plan_node;
use crate::plan::node_id_generator::next_node_id;

define_plan_node! {
    pub struct ScanNode {
        table: TableRef,
    }
    enum: Scan
    input: ZeroInputNode
}

impl ScanNode {
    /// 创建新的扫描节点
    pub fn new(table: TableRef, columns: Vec<String>) -> Self {
        Self {
            id: next_node_id(),
            table,
            col_names: columns,
        }
    }

    /// 被扫描的表标识
    pub fn table(&self) -> &TableRef {
        &self.table
    }

    /// 数据源名
    pub fn source(&self) -> &str {
        &self.table.source
    }

    /// 表名
    pub fn table_name(&self) -> &str {
        &self.table.table
    }

    /// 扫描的列名列表
    pub fn columns(&self) -> &[String] {
        &self.col_names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::nodes::plan_node_traits::PlanNode;

    #[test]
    fn test_scan_node() {
        let scan = ScanNode::new(
            TableRef::new("db", "employees"),
            vec!["id".to_string(), "age".to_string()],
        );

        assert_eq!(scan.type_name(), "Scan");
        assert_eq!(scan.source(), "db");
        assert_eq!(scan.table_name(), "employees");
        assert_eq!(scan.columns(), &["id".to_string(), "age".to_string()]);

        let node = scan.into_enum();
        assert_eq!(node.name(), "Scan");
    }
}
