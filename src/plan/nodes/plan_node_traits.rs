//! PlanNode 统一特征定义
//!
//! 定义所有计划节点需要实现的基础特征。
//! 节点按输入数量分为零输入、单输入、双输入和多输入四类。

use super::plan_node_enum::PlanNodeEnum;

/// PlanNode 基础特征
pub trait PlanNode {
    /// 获取节点的唯一ID
    fn id(&self) -> i64;

    /// 获取节点类型的名称
    fn name(&self) -> &'static str;

    /// 获取输出列名列表
    fn col_names(&self) -> &[String];

    /// 转换为 PlanNodeEnum
    fn into_enum(self) -> PlanNodeEnum;
}

/// 单输入节点特征
pub trait SingleInputNode: PlanNode {
    /// 获取输入节点
    fn input(&self) -> &PlanNodeEnum;

    /// 设置输入节点
    fn set_input(&mut self, input: PlanNodeEnum);

    /// 获取输入数量（始终为1）
    fn input_count(&self) -> usize {
        1
    }
}

/// 双输入节点特征
///
/// 适用于连接操作
pub trait BinaryInputNode: PlanNode {
    /// 获取左输入节点
    fn left_input(&self) -> &PlanNodeEnum;

    /// 获取右输入节点
    fn right_input(&self) -> &PlanNodeEnum;

    /// 设置左输入节点
    fn set_left_input(&mut self, input: PlanNodeEnum);

    /// 设置右输入节点
    fn set_right_input(&mut self, input: PlanNodeEnum);

    /// 获取输入数量（始终为2）
    fn input_count(&self) -> usize {
        2
    }
}

/// 多输入节点特征
///
/// 适用于有任意多个输入的节点（如Union）
pub trait MultipleInputNode: PlanNode {
    /// 获取所有输入节点
    fn inputs(&self) -> &[Box<PlanNodeEnum>];

    /// 添加输入节点
    fn add_input(&mut self, input: PlanNodeEnum);

    /// 获取输入数量
    fn input_count(&self) -> usize {
        self.inputs().len()
    }
}

/// 无输入节点特征
///
/// 适用于叶子节点（如Scan）
pub trait ZeroInputNode: PlanNode {
    /// 获取输入数量（始终为0）
    fn input_count(&self) -> usize {
        0
    }
}
