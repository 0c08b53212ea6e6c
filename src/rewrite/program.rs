//! 重写程序与注册
//!
//! RewriteProgram 是宿主优化器的入口：接收一棵计划树，
//! 先做字段使用分析（其结果接入联邦化规则的列裁剪），
//! 再自底向上应用启发式规则，返回外部形状不变的新树。
//! 启发式程序在宿主基于代价的搜索之前运行，宿主负责对
//! 替换子树重估代价并继续触发后续规则。
//!
//! 注册是进程级一次性操作：install 用原子的检查并设置把本
//! 程序前插到宿主的程序链，重复调用为空操作，并发调用也只会
//! 前插一次。

use std::sync::{Arc, OnceLock};

use crate::analysis::FieldUsageAnalyzer;
use crate::config::FederationCatalog;
use crate::core::TableRef;
use crate::mv::Materialization;
use crate::plan::nodes::plan_node_enum::PlanNodeEnum;
use crate::rewrite::federation::ScanFederationRule;
use crate::rewrite::plan_rewriter::PlanRewriter;
use crate::rewrite::projection_pushdown::PruneScanColumnsRule;
use crate::rewrite::result::{RewriteError, RewriteResult};

/// 重写程序
///
/// 规则对每棵树按当次分析结果构建，程序自身只持有只读目录，
/// 可在多线程间共享
#[derive(Debug)]
pub struct RewriteProgram {
    catalog: Arc<FederationCatalog>,
}

impl RewriteProgram {
    /// 创建新的重写程序
    pub fn new(catalog: Arc<FederationCatalog>) -> Self {
        Self { catalog }
    }

    /// 在一棵计划树上运行程序
    ///
    /// # 参数
    /// - `root`: 计划树根节点
    /// - `required_output`: 宿主要求的输出列，空表示跟随输入形状
    /// - `materializations`: 可用物化视图，转交诊断输出
    /// - `lattices`: 可用格结构，转交诊断输出
    ///
    /// # 返回
    /// 外部形状与输入一致的新树；所有规则都未命中时结构不变。
    /// 输出形状改变说明某条规则破坏了等价性，按结构错误上抛。
    pub fn run(
        &self,
        root: PlanNodeEnum,
        required_output: &[String],
        materializations: &[Materialization],
        lattices: &[TableRef],
    ) -> RewriteResult<PlanNodeEnum> {
        let usage = FieldUsageAnalyzer::analyze(&root);
        if !materializations.is_empty() {
            log::debug!("本次规划有 {} 个可用物化视图", materializations.len());
        }
        if !lattices.is_empty() {
            log::debug!("本次规划有 {} 个可用格结构", lattices.len());
        }

        let mut rewriter = PlanRewriter::new();
        rewriter.add_rule(ScanFederationRule::new(self.catalog.clone()).with_field_usage(&usage));
        rewriter.add_rule(PruneScanColumnsRule::new());

        let original_shape = root.col_names().to_vec();
        let rewritten = rewriter.rewrite(root)?;

        // 外部形状契约：根节点输出列不变
        let expected: &[String] = if required_output.is_empty() {
            &original_shape
        } else {
            required_output
        };
        if !expected.is_empty() && rewritten.col_names() != expected {
            return Err(RewriteError::invalid_plan_structure(format!(
                "重写改变了输出形状: 期望 [{}], 实际 [{}]",
                expected.join(","),
                rewritten.col_names().join(",")
            )));
        }

        Ok(rewritten)
    }
}

/// 宿主的规划程序链
///
/// 程序按顺序依次运行，前一个的输出作为后一个的输入。
/// 某个程序全部放弃时其输出结构不变，链的既有行为不受影响。
#[derive(Debug, Default)]
pub struct ProgramChain {
    programs: Vec<Arc<RewriteProgram>>,
}

impl ProgramChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// 前插一个程序
    pub fn prepend(&mut self, program: Arc<RewriteProgram>) {
        self.programs.insert(0, program);
    }

    /// 追加一个程序
    pub fn push(&mut self, program: Arc<RewriteProgram>) {
        self.programs.push(program);
    }

    pub fn len(&self) -> usize {
        self.programs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// 依次运行链上所有程序
    pub fn run(
        &self,
        root: PlanNodeEnum,
        required_output: &[String],
        materializations: &[Materialization],
        lattices: &[TableRef],
    ) -> RewriteResult<PlanNodeEnum> {
        let mut node = root;
        for program in &self.programs {
            node = program.run(node, required_output, materializations, lattices)?;
        }
        Ok(node)
    }
}

static INSTALL_GUARD: OnceLock<()> = OnceLock::new();

/// 把重写程序一次性前插到宿主的程序链
///
/// 进程生命周期内只有第一次调用生效，返回 true；
/// 之后的调用（包括并发竞争中失败的一方）不改动链并返回 false。
/// 重复注册会让程序每次规划运行两遍，这里用原子的检查并设置排除。
pub fn install(chain: &mut ProgramChain, program: Arc<RewriteProgram>) -> bool {
    let mut first = false;
    INSTALL_GUARD.get_or_init(|| {
        first = true;
    });

    if first {
        chain.prepend(program);
        log::debug!("重写程序已注册, 链上现有 {} 个程序", chain.len());
    } else {
        log::debug!("重写程序已注册过, 忽略本次调用");
    }
    first
}
