//! 字段使用分析模块
//!
//! 分析计划树实际消费的 (源, 表, 列) 三元组：对每个投影节点，
//! 沿其输入的单输入节点链下探到第一个扫描节点，把投影输出名
//! 解析回该扫描的表标识。输入链在到达扫描前经过多输入节点
//! （Join、Union）时无法判定列来自哪个分支，该投影静默跳过，
//! 不做猜测 —— 这是文档化的限制，不是错误。

use crate::core::{FieldRef, FieldRefSet, TableRef};
use crate::plan::nodes::plan_node_enum::PlanNodeEnum;
use crate::plan::nodes::plan_node_traits::SingleInputNode;
use crate::plan::nodes::scan_node::ScanNode;
use crate::rewrite::traversal::{walk_with_visitor, NodeVisitor, WalkControl};

/// 字段使用分析结果
///
/// 两个集合都去重并保留首次遇到的顺序
#[derive(Debug, Default, Clone)]
pub struct FieldUsageReport {
    /// 被投影实际引用的字段
    pub fields: FieldRefSet,
    /// 计划中出现的所有扫描表
    pub tables: Vec<TableRef>,
}

impl FieldUsageReport {
    /// 指定表被使用的列名，保留首次遇到的顺序
    pub fn columns_for(&self, table: &TableRef) -> Vec<String> {
        self.fields.columns_for(table)
    }
}

/// 字段使用分析器
pub struct FieldUsageAnalyzer;

impl FieldUsageAnalyzer {
    /// 分析计划树，返回字段使用报告
    ///
    /// 对输入树为纯函数，除 debug 日志外无副作用
    pub fn analyze(root: &PlanNodeEnum) -> FieldUsageReport {
        let mut collector = UsageCollector::default();
        walk_with_visitor(root, &mut collector);

        let report = collector.report;
        if log::log_enabled!(log::Level::Debug) {
            let rendered: Vec<String> = report.fields.iter().map(|f| f.to_string()).collect();
            log::debug!(
                "字段使用分析完成: {} 张表, 字段:\n\t{}",
                report.tables.len(),
                rendered.join("\n\t")
            );
        }
        report
    }
}

#[derive(Default)]
struct UsageCollector {
    report: FieldUsageReport,
}

impl NodeVisitor for UsageCollector {
    fn visit(&mut self, node: &PlanNodeEnum) -> WalkControl {
        match node {
            PlanNodeEnum::Scan(scan) => {
                if !self.report.tables.contains(scan.table()) {
                    self.report.tables.push(scan.table().clone());
                }
            }
            PlanNodeEnum::Project(project) => {
                match resolve_origin_scan(project.input()) {
                    Some(scan) => {
                        for column in project.col_names() {
                            self.report
                                .fields
                                .insert(FieldRef::of(scan.table(), column.clone()));
                        }
                    }
                    None => {
                        // 多输入歧义，跳过该投影
                        log::debug!(
                            "投影节点 {} 的输入链在到达扫描前经过多输入节点，不解析其输出",
                            project.id()
                        );
                    }
                }
            }
            _ => {}
        }
        WalkControl::Continue
    }
}

/// 沿单输入节点链下探到第一个扫描节点
///
/// 遇到 Join 或 Union 返回 None
fn resolve_origin_scan(mut node: &PlanNodeEnum) -> Option<&ScanNode> {
    loop {
        match node {
            PlanNodeEnum::Scan(scan) => return Some(scan),
            PlanNodeEnum::Project(n) => node = n.input(),
            PlanNodeEnum::Filter(n) => node = n.input(),
            PlanNodeEnum::Aggregate(n) => node = n.input(),
            PlanNodeEnum::Join(_) | PlanNodeEnum::Union(_) => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Expression, NamedColumn, Value};
    use crate::plan::nodes::{FilterNode, JoinNode, ProjectNode};

    fn scan(source: &str, table: &str, cols: &[&str]) -> PlanNodeEnum {
        PlanNodeEnum::Scan(ScanNode::new(
            TableRef::new(source, table),
            cols.iter().map(|c| c.to_string()).collect(),
        ))
    }

    fn project(input: PlanNodeEnum, cols: &[&str]) -> PlanNodeEnum {
        PlanNodeEnum::Project(ProjectNode::new(
            input,
            cols.iter().map(NamedColumn::column).collect(),
        ))
    }

    #[test]
    fn test_project_over_scan() {
        let tree = project(scan("s", "t", &["a", "b"]), &["a", "b"]);
        let report = FieldUsageAnalyzer::analyze(&tree);

        let fields: Vec<String> = report.fields.iter().map(|f| f.to_string()).collect();
        assert_eq!(fields, vec!["s.t.a", "s.t.b"]);
        assert_eq!(report.tables, vec![TableRef::new("s", "t")]);
    }

    #[test]
    fn test_filter_chain_is_transparent() {
        let filtered = PlanNodeEnum::Filter(FilterNode::new(
            scan("s", "t", &["a", "b"]),
            Expression::Literal(Value::Bool(true)),
        ));
        let tree = project(filtered, &["a"]);

        let report = FieldUsageAnalyzer::analyze(&tree);
        let fields: Vec<String> = report.fields.iter().map(|f| f.to_string()).collect();
        assert_eq!(fields, vec!["s.t.a"]);
    }

    #[test]
    fn test_join_blocks_resolution() {
        let join = PlanNodeEnum::Join(JoinNode::inner_on_columns(
            scan("s", "t1", &["k", "x"]),
            scan("s", "t2", &["k", "y"]),
            &["k".to_string()],
        ));
        let tree = project(join, &["x", "y"]);

        let report = FieldUsageAnalyzer::analyze(&tree);
        assert!(report.fields.is_empty(), "跨连接的投影不应产生字段引用");
        // 两张表仍被外层遍历记录
        assert_eq!(report.tables.len(), 2);
    }

    #[test]
    fn test_no_duplicate_fields() {
        let lower = project(scan("s", "t", &["a", "b"]), &["a"]);
        let tree = project(lower, &["a"]);

        let report = FieldUsageAnalyzer::analyze(&tree);
        assert_eq!(report.fields.len(), 1);
    }
}
