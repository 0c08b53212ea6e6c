//! 物化视图增量改写资格检查
//!
//! 判定一次物化视图刷新能否从整体重算改写为增量追加。
//! 候选形态为 聚合/并集 之上接"新数据"分支和"既有视图"分支：
//!
//! ```text
//!   [Project*] -> [Aggregate] -> Union(新数据分支, 视图分支)
//! ```
//!
//! 检查项：
//! 1. 根部在到达 Union 前只允许 Project 透传和至多一个 Aggregate；
//! 2. Union 必须恰好有两个输入；
//! 3. 新数据分支只允许 Scan、Filter、Project、Join，
//!    聚合模式下额外允许 Aggregate；
//! 4. 视图分支只允许 Project 透传加一个终端 Scan，该扫描必须是
//!    正在刷新的目标视图；聚合模式下目标视图还必须支持可合并的
//!    增量写入。
//!
//! 这是纯分类器，从不改写计划。首个违例立即短路，
//! 结论用显式返回值沿递归向上传递。

use crate::core::TableRef;
use crate::mv::catalog::MaterializationCatalog;
use crate::plan::nodes::plan_node_enum::PlanNodeEnum;
use crate::plan::nodes::plan_node_traits::{MultipleInputNode, SingleInputNode};
use crate::plan::nodes::UnionNode;

/// 资格结论
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// 可以改写为增量追加
    Allowed,
    /// 回退整体重算
    Rejected,
}

/// 检查结果
///
/// `has_aggregate` 记录被检查的形态是否以聚合开头，
/// 无论结论如何都会返回
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityVerdict {
    pub verdict: Verdict,
    pub has_aggregate: bool,
}

impl EligibilityVerdict {
    pub fn is_allowed(&self) -> bool {
        self.verdict == Verdict::Allowed
    }
}

/// 物化视图改写资格检查器
///
/// 目标视图由调用方提供，不从计划中推断
#[derive(Debug)]
pub struct ViewRewriteChecker<'a> {
    target: TableRef,
    catalog: &'a MaterializationCatalog,
}

impl<'a> ViewRewriteChecker<'a> {
    pub fn new(target: TableRef, catalog: &'a MaterializationCatalog) -> Self {
        Self { target, catalog }
    }

    /// 检查候选计划形态
    ///
    /// 每次调用产生新的结论，检查器自身无状态累积
    pub fn check(&self, root: &PlanNodeEnum) -> EligibilityVerdict {
        let mut has_aggregate = false;
        let verdict = self.classify_root(root, &mut has_aggregate);

        log::debug!(
            "视图 {} 的增量改写检查: {:?}, has_aggregate={}",
            self.target,
            verdict,
            has_aggregate
        );
        EligibilityVerdict {
            verdict,
            has_aggregate,
        }
    }

    /// 根部分类：Project 透传，Aggregate 之下必须是 Union
    fn classify_root(&self, node: &PlanNodeEnum, has_aggregate: &mut bool) -> Verdict {
        match node {
            PlanNodeEnum::Project(project) => self.classify_root(project.input(), has_aggregate),
            PlanNodeEnum::Aggregate(aggregate) => {
                *has_aggregate = true;
                match aggregate.input() {
                    PlanNodeEnum::Union(union) => self.check_union(union, true),
                    other => {
                        log::debug!("聚合之下不是并集而是 {}, 拒绝", other.name());
                        Verdict::Rejected
                    }
                }
            }
            PlanNodeEnum::Union(union) => self.check_union(union, false),
            other => {
                log::debug!("根部形态 {} 不在候选语法内, 拒绝", other.name());
                Verdict::Rejected
            }
        }
    }

    /// 检查并集：恰好两个输入，先左（新数据）后右（既有视图）
    fn check_union(&self, union: &UnionNode, has_aggregate: bool) -> Verdict {
        if union.inputs().len() != 2 {
            log::debug!("并集有 {} 个输入而非 2 个, 拒绝", union.inputs().len());
            return Verdict::Rejected;
        }

        if let Verdict::Rejected = self.check_new_data_branch(&union.inputs()[0], has_aggregate) {
            return Verdict::Rejected;
        }
        self.check_view_branch(&union.inputs()[1], has_aggregate)
    }

    /// 新数据分支：逐节点检查，首个违例立即短路
    fn check_new_data_branch(&self, node: &PlanNodeEnum, has_aggregate: bool) -> Verdict {
        let permitted = match node {
            PlanNodeEnum::Scan(_)
            | PlanNodeEnum::Filter(_)
            | PlanNodeEnum::Project(_)
            | PlanNodeEnum::Join(_) => true,
            PlanNodeEnum::Aggregate(_) => has_aggregate,
            PlanNodeEnum::Union(_) => false,
        };
        if !permitted {
            log::debug!("新数据分支出现 {}, 拒绝", node.name());
            return Verdict::Rejected;
        }

        for child in node.children() {
            if let Verdict::Rejected = self.check_new_data_branch(child, has_aggregate) {
                return Verdict::Rejected;
            }
        }
        Verdict::Allowed
    }

    /// 视图分支：Project 透传，终端扫描必须是目标视图
    fn check_view_branch(&self, node: &PlanNodeEnum, has_aggregate: bool) -> Verdict {
        match node {
            PlanNodeEnum::Project(project) => {
                self.check_view_branch(project.input(), has_aggregate)
            }
            PlanNodeEnum::Scan(scan) => {
                if scan.table() != &self.target {
                    log::debug!(
                        "视图分支扫描的是 {} 而非目标视图 {}, 拒绝",
                        scan.table(),
                        self.target
                    );
                    return Verdict::Rejected;
                }
                // 聚合模式需要 MERGE 支持
                if has_aggregate && !self.catalog.is_mergeable(scan.table()) {
                    log::debug!("目标视图 {} 不支持可合并的增量写入, 拒绝", self.target);
                    return Verdict::Rejected;
                }
                Verdict::Allowed
            }
            other => {
                log::debug!("视图分支出现 {}, 拒绝", other.name());
                Verdict::Rejected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AggregateCall, AggregateFunc, NamedColumn};
    use crate::mv::catalog::Materialization;
    use crate::plan::nodes::{AggregateNode, ProjectNode, ScanNode};

    fn scan(source: &str, table: &str) -> PlanNodeEnum {
        PlanNodeEnum::Scan(ScanNode::new(
            TableRef::new(source, table),
            vec!["a".to_string()],
        ))
    }

    fn catalog(mergeable: bool) -> MaterializationCatalog {
        let mut catalog = MaterializationCatalog::new();
        catalog.register(Materialization::new(TableRef::new("db", "mv"), mergeable));
        catalog
    }

    #[test]
    fn test_union_with_three_inputs_rejected() {
        let union = PlanNodeEnum::Union(UnionNode::new(
            vec![scan("db", "t1"), scan("db", "t2"), scan("db", "mv")],
            false,
        ));

        let catalog = catalog(true);
        let checker = ViewRewriteChecker::new(TableRef::new("db", "mv"), &catalog);
        let result = checker.check(&union);

        assert_eq!(result.verdict, Verdict::Rejected);
        assert!(!result.has_aggregate);
    }

    #[test]
    fn test_aggregate_over_union_requires_mergeable_view() {
        let union = PlanNodeEnum::Union(UnionNode::new(
            vec![scan("db", "t1"), scan("db", "mv")],
            false,
        ));
        let root = PlanNodeEnum::Aggregate(AggregateNode::new(
            union,
            vec![NamedColumn::column("a")],
            vec![AggregateCall::new(AggregateFunc::Count, None, "cnt")],
        ));

        let non_mergeable = catalog(false);
        let checker = ViewRewriteChecker::new(TableRef::new("db", "mv"), &non_mergeable);
        let result = checker.check(&root);
        assert_eq!(result.verdict, Verdict::Rejected);
        assert!(result.has_aggregate);

        let mergeable = catalog(true);
        let checker = ViewRewriteChecker::new(TableRef::new("db", "mv"), &mergeable);
        let result = checker.check(&root);
        assert_eq!(result.verdict, Verdict::Allowed);
        assert!(result.has_aggregate);
    }

    #[test]
    fn test_view_branch_must_scan_target() {
        let union = PlanNodeEnum::Union(UnionNode::new(
            vec![scan("db", "t1"), scan("db", "other_view")],
            false,
        ));

        let catalog = catalog(true);
        let checker = ViewRewriteChecker::new(TableRef::new("db", "mv"), &catalog);
        assert_eq!(checker.check(&union).verdict, Verdict::Rejected);
    }

    #[test]
    fn test_project_passthrough_on_view_branch() {
        let view_side = PlanNodeEnum::Project(ProjectNode::new(
            scan("db", "mv"),
            vec![NamedColumn::column("a")],
        ));
        let union = PlanNodeEnum::Union(UnionNode::new(vec![scan("db", "t1"), view_side], false));

        let catalog = catalog(false);
        let checker = ViewRewriteChecker::new(TableRef::new("db", "mv"), &catalog);
        let result = checker.check(&union);

        // 非聚合模式不要求 MERGE 支持
        assert_eq!(result.verdict, Verdict::Allowed);
        assert!(!result.has_aggregate);
    }
}
