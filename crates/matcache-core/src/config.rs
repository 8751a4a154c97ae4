//! 求逆參數配置

use serde::{Deserialize, Serialize};

/// 求逆參數
///
/// 由呼叫端提供，原樣轉交給求逆例程；快取層不解讀其內容。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    /// 主元選取策略
    pub pivoting: PivotStrategy,
}

impl SolveOptions {
    /// 創建預設參數（部分主元）
    pub fn new() -> Self {
        Self {
            pivoting: PivotStrategy::Partial,
        }
    }

    /// 建構器模式：設置主元策略
    pub fn with_pivoting(mut self, pivoting: PivotStrategy) -> Self {
        self.pivoting = pivoting;
        self
    }
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// 主元選取策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotStrategy {
    /// 部分主元：每欄選絕對值最大的非零元素
    #[default]
    Partial,
    /// 不換列，對角主元為零時直接失敗
    Disabled,
}
