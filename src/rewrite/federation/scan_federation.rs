//! 扫描联邦化规则
//!
//! 把对一个逻辑表的扫描改写为跨多个物理分区的连接：
//! 每个分区产生 Project(Scan(分区)) 投影键列加值列，
//! 再按描述符顺序从左到右折叠成键列上的内连接，
//! 最后用一层投影恢复调用方需要的列。
//!
//! 分区数量预期很小，连接顺序直接跟随描述符顺序，不做重排。
//! 改写引入的扫描携带分区的物理标识，配置校验保证分区标识
//! 不会与任何联邦键重合，因此规则对自身输出不会再次命中。

use std::collections::HashMap;
use std::sync::Arc;

use crate::analysis::FieldUsageReport;
use crate::config::{FederatedTable, FederationCatalog, PartitionDescriptor};
use crate::core::{NamedColumn, TableRef};
use crate::plan::nodes::plan_node_enum::PlanNodeEnum;
use crate::plan::nodes::plan_node_traits::PlanNode;
use crate::plan::nodes::{JoinNode, ProjectNode, ScanNode};
use crate::rewrite::pattern::Pattern;
use crate::rewrite::result::{RewriteResult, TransformResult};
use crate::rewrite::rule::RewriteRule;

/// 扫描联邦化规则
///
/// 模式为单个 Scan 节点；未注册的表直接放弃，保持原计划
#[derive(Debug)]
pub struct ScanFederationRule {
    catalog: Arc<FederationCatalog>,
    /// 每个逻辑表实际被使用的列，来自字段使用分析
    required: HashMap<TableRef, Vec<String>>,
}

impl ScanFederationRule {
    /// 创建规则实例
    pub fn new(catalog: Arc<FederationCatalog>) -> Self {
        log::debug!("初始化规则: ScanFederationRule, {} 张联邦表", catalog.len());
        Self {
            catalog,
            required: HashMap::new(),
        }
    }

    /// 接入字段使用分析结果，让外层投影只保留实际使用的列
    pub fn with_field_usage(mut self, usage: &FieldUsageReport) -> Self {
        for field in &usage.fields {
            let table = field.table_ref();
            if !self.catalog.is_federated(&table) {
                continue;
            }
            let columns = self.required.entry(table).or_default();
            if !columns.contains(&field.column) {
                columns.push(field.column.clone());
            }
        }
        self
    }

    /// 尝试改写一个扫描节点
    ///
    /// 返回 None 表示放弃（未注册的表），调用方保持原计划
    pub fn try_rewrite(&self, scan: &ScanNode) -> Option<PlanNodeEnum> {
        let federated = match self.catalog.lookup(scan.table()) {
            Some(f) => f,
            None => {
                log::debug!("扫描 {} 不是联邦表, 保持原计划", scan.table());
                return None;
            }
        };

        let needed = self.needed_columns(scan, federated);
        let tree = build_partition_join(federated, &needed)?;

        // 外层投影恢复调用方上下文需要的列
        let columns: Vec<NamedColumn> = needed.iter().map(NamedColumn::column).collect();
        let result = ProjectNode::new(tree, columns).into_enum();
        log::debug!("联邦化 {} -> {}", scan.table(), result.digest());
        Some(result)
    }

    /// 调用方上下文需要的列
    ///
    /// 基准为扫描自身声明的列表；扫描未声明列时退化为保守全宽
    /// （键列加全部分区值列）。有字段使用信息时按基准顺序收窄，
    /// 收窄结果为空时回退基准。
    fn needed_columns(&self, scan: &ScanNode, federated: &FederatedTable) -> Vec<String> {
        let base: Vec<String> = if !scan.columns().is_empty() {
            scan.columns().to_vec()
        } else {
            let mut columns = federated.key_columns().to_vec();
            for column in federated.value_columns() {
                if !columns.contains(&column) {
                    columns.push(column);
                }
            }
            columns
        };

        match self.required.get(scan.table()) {
            Some(used) if !used.is_empty() => {
                let narrowed: Vec<String> =
                    base.iter().filter(|c| used.contains(*c)).cloned().collect();
                if narrowed.is_empty() {
                    base
                } else {
                    narrowed
                }
            }
            _ => base,
        }
    }
}

/// 为单个分区构造 Project(Scan(分区)) 子树
///
/// 扫描和投影都选键列加该分区贡献的值列；值列收窄到
/// 调用方需要的集合。扫描只通过公开构造函数创建。
fn partition_projection(
    partition: &PartitionDescriptor,
    keys: &[String],
    needed: &[String],
) -> PlanNodeEnum {
    let mut columns: Vec<String> = keys.to_vec();
    for column in &partition.value_columns {
        if needed.contains(column) && !columns.contains(column) {
            columns.push(column.clone());
        }
    }

    let scan = ScanNode::new(partition.table_ref(), columns.clone()).into_enum();
    let named: Vec<NamedColumn> = columns.iter().map(NamedColumn::column).collect();
    ProjectNode::new(scan, named).into_enum()
}

/// 按描述符顺序把分区投影折叠成键列上的内连接
fn build_partition_join(federated: &FederatedTable, needed: &[String]) -> Option<PlanNodeEnum> {
    let keys = federated.key_columns();
    let mut partitions = federated.partitions.iter();

    let first = partitions.next()?;
    let mut tree = partition_projection(first, keys, needed);
    for partition in partitions {
        let right = partition_projection(partition, keys, needed);
        tree = JoinNode::inner_on_columns(tree, right, keys).into_enum();
    }
    Some(tree)
}

impl RewriteRule for ScanFederationRule {
    fn name(&self) -> &'static str {
        "ScanFederationRule"
    }

    fn pattern(&self) -> Pattern {
        Pattern::with_scan_matcher()
    }

    fn apply(&self, node: &PlanNodeEnum) -> RewriteResult<Option<TransformResult>> {
        let scan = match node.as_scan() {
            Some(s) => s,
            None => return Ok(None),
        };

        Ok(self.try_rewrite(scan).map(TransformResult::new))
    }
}
