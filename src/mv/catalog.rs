//! 物化视图目录
//!
//! 外部提供的视图能力查询：视图标识 -> 是否支持可合并的增量写入。
//! 由宿主在规划前装载，检查期间只读。

use crate::core::TableRef;

/// 一个已注册的物化视图及其能力
#[derive(Debug, Clone)]
pub struct Materialization {
    /// 视图的表标识
    pub view: TableRef,
    /// 是否支持可合并的增量写入
    pub mergeable: bool,
}

impl Materialization {
    pub fn new(view: TableRef, mergeable: bool) -> Self {
        Self { view, mergeable }
    }
}

/// 物化视图目录
#[derive(Debug, Default)]
pub struct MaterializationCatalog {
    views: Vec<Materialization>,
}

impl MaterializationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一个物化视图
    pub fn register(&mut self, materialization: Materialization) {
        self.views.push(materialization);
    }

    /// 查找视图
    pub fn lookup(&self, view: &TableRef) -> Option<&Materialization> {
        self.views.iter().find(|m| &m.view == view)
    }

    /// 视图是否支持可合并的增量写入，未注册视为不支持
    pub fn is_mergeable(&self, view: &TableRef) -> bool {
        self.lookup(view).map(|m| m.mergeable).unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
