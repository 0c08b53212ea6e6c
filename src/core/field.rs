//! 字段引用定义
//!
//! 提供 (源, 表, 列) 三元组及其按插入顺序去重的集合。
//! 三元组的相等与哈希均为结构性比较。

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// 表标识
///
/// 一个逻辑表或物理表的标识：数据源名加表名
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableRef {
    pub source: String,
    pub table: String,
}

impl TableRef {
    pub fn new(source: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            table: table.into(),
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.source, self.table)
    }
}

/// 字段引用
///
/// 标识一个物理列的 (源, 表, 列) 三元组
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldRef {
    pub source: String,
    pub table: String,
    pub column: String,
}

impl FieldRef {
    pub fn new(
        source: impl Into<String>,
        table: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            table: table.into(),
            column: column.into(),
        }
    }

    /// 由表标识加列名构造
    pub fn of(table: &TableRef, column: impl Into<String>) -> Self {
        Self {
            source: table.source.clone(),
            table: table.table.clone(),
            column: column.into(),
        }
    }

    /// 该字段所属的表标识
    pub fn table_ref(&self) -> TableRef {
        TableRef::new(self.source.clone(), self.table.clone())
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.source, self.table, self.column)
    }
}

/// 字段引用集合
///
/// 无重复元素，保留首次插入顺序
#[derive(Debug, Default, Clone)]
pub struct FieldRefSet {
    items: Vec<FieldRef>,
    seen: HashSet<FieldRef>,
}

impl FieldRefSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入一个字段引用，重复时返回 false
    pub fn insert(&mut self, field: FieldRef) -> bool {
        if self.seen.insert(field.clone()) {
            self.items.push(field);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, field: &FieldRef) -> bool {
        self.seen.contains(field)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldRef> {
        self.items.iter()
    }

    /// 返回属于指定表的列名，保留插入顺序
    pub fn columns_for(&self, table: &TableRef) -> Vec<String> {
        self.items
            .iter()
            .filter(|f| f.source == table.source && f.table == table.table)
            .map(|f| f.column.clone())
            .collect()
    }
}

impl<'a> IntoIterator for &'a FieldRefSet {
    type Item = &'a FieldRef;
    type IntoIter = std::slice::Iter<'a, FieldRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
