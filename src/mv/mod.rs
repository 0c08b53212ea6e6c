//! 物化视图模块
//!
//! 视图能力目录与增量改写资格检查。
//! 检查只做分类，回退路径（整体重算）由宿主执行。

pub mod catalog;
pub mod eligibility;

pub use catalog::{Materialization, MaterializationCatalog};
pub use eligibility::{EligibilityVerdict, Verdict, ViewRewriteChecker};
