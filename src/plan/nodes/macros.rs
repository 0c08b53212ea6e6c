//! 计划节点宏定义
//!
//! 提供宏来简化计划节点的定义，减少样板代码。
//! 宏生成公共字段（id、col_names）、访问器与 PlanNode 特征实现；
//! 构造函数由各节点文件手写。双输入与多输入节点（Join、Union）
//! 结构特殊，直接手写实现。

/// 定义计划节点的宏
///
/// # 示例
/// ```ignore
/// define_plan_node! {
///     pub struct FilterNode {
///         predicate: Expression,
///     }
///     enum: Filter
///     input: SingleInputNode
/// }
/// ```
#[macro_export]
macro_rules! define_plan_node {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($field:ident: $type:ty),* $(,)?
        }
        enum: $variant:ident
        input: SingleInputNode
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            id: i64,
            input: Box<$crate::plan::nodes::plan_node_enum::PlanNodeEnum>,
            $($field: $type,)*
            col_names: Vec<String>,
        }

        impl $name {
            pub fn id(&self) -> i64 {
                self.id
            }

            pub fn type_name(&self) -> &'static str {
                stringify!($variant)
            }

            pub fn col_names(&self) -> &[String] {
                &self.col_names
            }
        }

        impl $crate::plan::nodes::plan_node_traits::PlanNode for $name {
            fn id(&self) -> i64 {
                self.id()
            }

            fn name(&self) -> &'static str {
                self.type_name()
            }

            fn col_names(&self) -> &[String] {
                self.col_names()
            }

            fn into_enum(self) -> $crate::plan::nodes::plan_node_enum::PlanNodeEnum {
                $crate::plan::nodes::plan_node_enum::PlanNodeEnum::$variant(self)
            }
        }

        impl $crate::plan::nodes::plan_node_traits::SingleInputNode for $name {
            fn input(&self) -> &$crate::plan::nodes::plan_node_enum::PlanNodeEnum {
                &self.input
            }

            fn set_input(&mut self, input: $crate::plan::nodes::plan_node_enum::PlanNodeEnum) {
                self.input = Box::new(input);
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($field:ident: $type:ty),* $(,)?
        }
        enum: $variant:ident
        input: ZeroInputNode
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            id: i64,
            $($field: $type,)*
            col_names: Vec<String>,
        }

        impl $name {
            pub fn id(&self) -> i64 {
                self.id
            }

            pub fn type_name(&self) -> &'static str {
                stringify!($variant)
            }

            pub fn col_names(&self) -> &[String] {
                &self.col_names
            }
        }

        impl $crate::plan::nodes::plan_node_traits::PlanNode for $name {
            fn id(&self) -> i64 {
                self.id()
            }

            fn name(&self) -> &'static str {
                self.type_name()
            }

            fn col_names(&self) -> &[String] {
                self.col_names()
            }

            fn into_enum(self) -> $crate::plan::nodes::plan_node_enum::PlanNodeEnum {
                $crate::plan::nodes::plan_node_enum::PlanNodeEnum::$variant(self)
            }
        }

        impl $crate::plan::nodes::plan_node_traits::ZeroInputNode for $name {}
    };
}
