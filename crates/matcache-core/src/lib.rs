//! # Matcache Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod matrix;

// Re-export 主要類型
pub use config::{PivotStrategy, SolveOptions};
pub use matrix::Matrix;

/// 矩陣運算錯誤類型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatcacheError {
    #[error("矩陣不是方陣: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("奇異矩陣，第 {column} 欄找不到有效主元")]
    Singular { column: usize },

    #[error("數值超出 Decimal 可表示範圍（第 {column} 欄）")]
    Overflow { column: usize },

    #[error("無效的矩陣形狀: {0}")]
    InvalidShape(String),

    #[error("矩陣維度不相容: {lhs_rows}x{lhs_cols} 與 {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },
}

pub type Result<T> = std::result::Result<T, MatcacheError>;
