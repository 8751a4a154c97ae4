//! 矩陣資料模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{MatcacheError, Result};

/// 稠密矩陣（列優先存放）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Decimal>>", into = "Vec<Vec<Decimal>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<Decimal>,
}

impl Matrix {
    /// 由逐列資料創建矩陣
    ///
    /// 空矩陣或各列長度不一致時回傳 [`MatcacheError::InvalidShape`]。
    pub fn from_rows(rows: Vec<Vec<Decimal>>) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map(Vec::len).unwrap_or(0);

        if row_count == 0 || col_count == 0 {
            return Err(MatcacheError::InvalidShape("矩陣不可為空".to_string()));
        }

        let mut data = Vec::with_capacity(row_count * col_count);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != col_count {
                return Err(MatcacheError::InvalidShape(format!(
                    "第 {} 列長度為 {}，預期 {}",
                    index,
                    row.len(),
                    col_count
                )));
            }
            data.extend(row);
        }

        Ok(Self {
            rows: row_count,
            cols: col_count,
            data,
        })
    }

    /// 由整數字面值創建矩陣
    pub fn from_i64_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.as_ref().iter().copied().map(Decimal::from).collect())
                .collect(),
        )
    }

    /// 創建 n 階單位矩陣
    ///
    /// `n` 為 0 時回傳 [`MatcacheError::InvalidShape`]。
    pub fn identity(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(MatcacheError::InvalidShape("矩陣不可為空".to_string()));
        }

        let mut data = vec![Decimal::ZERO; n * n];
        for i in 0..n {
            data[i * n + i] = Decimal::ONE;
        }

        Ok(Self {
            rows: n,
            cols: n,
            data,
        })
    }

    /// 列數
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// 欄數
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// 讀取單一元素，越界時回傳 `None`
    pub fn get(&self, row: usize, col: usize) -> Option<Decimal> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// 讀取整列
    pub fn row(&self, row: usize) -> Option<&[Decimal]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// 轉為逐列資料
    pub fn to_rows(&self) -> Vec<Vec<Decimal>> {
        self.data.chunks(self.cols).map(<[Decimal]>::to_vec).collect()
    }

    /// 矩陣乘法，用於驗證 `A · A⁻¹ = I`
    pub fn mul(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(MatcacheError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }

        let mut data = vec![Decimal::ZERO; self.rows * rhs.cols];
        for i in 0..self.rows {
            for k in 0..self.cols {
                let lhs = self.data[i * self.cols + k];
                if lhs.is_zero() {
                    continue;
                }
                for j in 0..rhs.cols {
                    data[i * rhs.cols + j] += lhs * rhs.data[k * rhs.cols + j];
                }
            }
        }

        Ok(Matrix {
            rows: self.rows,
            cols: rhs.cols,
            data,
        })
    }
}

impl TryFrom<Vec<Vec<Decimal>>> for Matrix {
    type Error = MatcacheError;

    fn try_from(rows: Vec<Vec<Decimal>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<Decimal>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.data.chunks(self.cols).enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (col, value) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value.normalize())?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
