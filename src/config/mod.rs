//! 联邦描述符配置
//!
//! 外部提供的逻辑表到物理分区的映射，TOML 格式，进程启动时装载一次，
//! 规划期间只读。所有配置不变量在装载期校验并拒绝，重写期间不再检查。
//!
//! # 配置示例
//!
//! ```toml
//! [[tables]]
//! source = "mc_db"
//! table = "employees"
//!
//! [[tables.partitions]]
//! source = "mc_db_google"
//! table = "employees"
//! key_columns = ["multiid"]
//! value_columns = ["id", "first", "last"]
//!
//! [[tables.partitions]]
//! source = "mc_db_amazon"
//! table = "employees"
//! key_columns = ["multiid"]
//! value_columns = ["age"]
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::TableRef;

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("配置文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置解析失败: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("配置校验失败: {0}")]
    Validation(String),
}

impl ConfigError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// 分区描述符
///
/// 一个物理数据源，持有逻辑表的部分列。每个分区声明共享连接键列
/// 和它贡献的值列集合。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionDescriptor {
    pub source: String,
    pub table: String,
    pub key_columns: Vec<String>,
    pub value_columns: Vec<String>,
}

impl PartitionDescriptor {
    /// 分区的物理表标识
    pub fn table_ref(&self) -> TableRef {
        TableRef::new(self.source.clone(), self.table.clone())
    }
}

/// 联邦表描述符
///
/// 一个逻辑表标识与其有序分区列表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FederatedTable {
    pub source: String,
    pub table: String,
    pub partitions: Vec<PartitionDescriptor>,
}

impl FederatedTable {
    /// 逻辑表标识
    pub fn table_ref(&self) -> TableRef {
        TableRef::new(self.source.clone(), self.table.clone())
    }

    /// 共享连接键列
    ///
    /// 校验保证所有分区声明一致的键列，取第一个分区（键的贡献方）的声明
    pub fn key_columns(&self) -> &[String] {
        &self.partitions[0].key_columns
    }

    /// 各分区值列的并集，按分区顺序去重
    pub fn value_columns(&self) -> Vec<String> {
        let mut columns = Vec::new();
        for partition in &self.partitions {
            for column in &partition.value_columns {
                if !columns.contains(column) {
                    columns.push(column.clone());
                }
            }
        }
        columns
    }
}

/// 联邦配置文件
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FederationConfig {
    #[serde(default)]
    pub tables: Vec<FederatedTable>,
}

impl FederationConfig {
    /// 从 TOML 文件装载并校验，冻结为只读目录
    pub fn load<P: AsRef<Path>>(path: P) -> Result<FederationCatalog, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 从 TOML 字符串装载并校验
    pub fn from_toml_str(content: &str) -> Result<FederationCatalog, ConfigError> {
        let config: FederationConfig = toml::from_str(content)?;
        config.into_catalog()
    }

    /// 校验所有配置不变量，构建只读目录
    ///
    /// 拒绝条件：
    /// - 重复注册的逻辑表
    /// - 零分区的逻辑表
    /// - 键列为空或各分区声明不一致
    /// - 值列重复声明键列
    /// - 分区物理标识与任何逻辑表标识重合（会导致规则循环触发）
    pub fn into_catalog(self) -> Result<FederationCatalog, ConfigError> {
        let logical_keys: Vec<TableRef> = self.tables.iter().map(|t| t.table_ref()).collect();

        let mut tables = HashMap::new();
        for federated in self.tables {
            let logical = federated.table_ref();

            if federated.partitions.is_empty() {
                return Err(ConfigError::validation(format!(
                    "逻辑表 {} 没有注册任何分区",
                    logical
                )));
            }

            let shared_keys = &federated.partitions[0].key_columns;
            if shared_keys.is_empty() {
                return Err(ConfigError::validation(format!(
                    "逻辑表 {} 的连接键列为空",
                    logical
                )));
            }

            for partition in &federated.partitions {
                if &partition.key_columns != shared_keys {
                    return Err(ConfigError::validation(format!(
                        "逻辑表 {} 的分区 {} 声明的键列 [{}] 与共享键列 [{}] 不一致",
                        logical,
                        partition.table_ref(),
                        partition.key_columns.join(","),
                        shared_keys.join(",")
                    )));
                }

                if partition.value_columns.is_empty() {
                    return Err(ConfigError::validation(format!(
                        "逻辑表 {} 的分区 {} 没有贡献任何值列",
                        logical,
                        partition.table_ref()
                    )));
                }

                if let Some(dup) = partition
                    .value_columns
                    .iter()
                    .find(|c| shared_keys.contains(*c))
                {
                    return Err(ConfigError::validation(format!(
                        "逻辑表 {} 的分区 {} 在值列中重复声明了键列 {}",
                        logical,
                        partition.table_ref(),
                        dup
                    )));
                }

                // 分区标识与联邦键重合会让重写结果再次命中规则
                if logical_keys.contains(&partition.table_ref()) {
                    return Err(ConfigError::validation(format!(
                        "分区标识 {} 与已注册的逻辑表标识重合",
                        partition.table_ref()
                    )));
                }
            }

            if tables.insert(logical.clone(), federated).is_some() {
                return Err(ConfigError::validation(format!(
                    "逻辑表 {} 被重复注册",
                    logical
                )));
            }
        }

        Ok(FederationCatalog { tables })
    }
}

/// 联邦目录
///
/// 装载期校验后的只读映射：逻辑表标识 -> 联邦表描述符。
/// 只能通过 [`FederationConfig`] 的校验路径构建。
#[derive(Debug, Default)]
pub struct FederationCatalog {
    tables: HashMap<TableRef, FederatedTable>,
}

impl FederationCatalog {
    /// 查找逻辑表的联邦描述符
    pub fn lookup(&self, table: &TableRef) -> Option<&FederatedTable> {
        self.tables.get(table)
    }

    /// 逻辑表是否被注册为联邦表
    pub fn is_federated(&self, table: &TableRef) -> bool {
        self.tables.contains_key(table)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
