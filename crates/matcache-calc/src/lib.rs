//! # Matcache Calculation
//!
//! 求逆例程：快取層只透過 [`Inverter`] 呼叫，不關心具體演算法

pub mod gauss_jordan;

// Re-export 主要類型
pub use gauss_jordan::GaussJordanInverter;

use matcache_core::{Matrix, Result, SolveOptions};

/// 矩陣求逆能力
///
/// 給定方陣回傳其逆矩陣；非方陣或不可逆時回傳錯誤。
/// `options` 由呼叫端提供，實作可自行決定如何解讀。
pub trait Inverter {
    fn invert(&self, matrix: &Matrix, options: &SolveOptions) -> Result<Matrix>;
}

impl<T: Inverter + ?Sized> Inverter for &T {
    fn invert(&self, matrix: &Matrix, options: &SolveOptions) -> Result<Matrix> {
        (**self).invert(matrix, options)
    }
}

impl<T: Inverter + ?Sized> Inverter for Box<T> {
    fn invert(&self, matrix: &Matrix, options: &SolveOptions) -> Result<Matrix> {
        (**self).invert(matrix, options)
    }
}
