//! 节点ID生成器
//!
//! 提供全局唯一的计划节点ID分配机制，仅用于日志与诊断输出。

use std::sync::atomic::{AtomicI64, Ordering};

// 从1开始，0保留为无效ID
static COUNTER: AtomicI64 = AtomicI64::new(1);

/// 为节点分配新ID
pub fn next_node_id() -> i64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_generation_monotonic() {
        let id1 = next_node_id();
        let id2 = next_node_id();
        assert!(id2 > id1);
        assert!(id1 > 0);
    }
}
