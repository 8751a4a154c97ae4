//! 無分數 Gauss-Jordan 消去法求逆

use matcache_core::{MatcacheError, Matrix, PivotStrategy, Result, SolveOptions};
use rust_decimal::Decimal;

use crate::Inverter;

/// Gauss-Jordan 求逆器
///
/// 先把矩陣放大成整數矩陣 `B = A · 10^s`，再對增廣矩陣 `[B | I]` 做無分數
/// （Bareiss）列運算。每一步的整除都是精確的，結束時左半為 `det · I`、
/// 右半為 `det · B⁻¹`，所以奇異判定不受捨入影響。
///
/// 只有最後的 `右半 / det` 會做一次 `Decimal` 除法，誤差限於 `Decimal`
/// 的有效位數。中間值超出 `i128` 或結果無法以 `Decimal` 表示時回傳
/// [`MatcacheError::Overflow`]。
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussJordanInverter;

impl GaussJordanInverter {
    pub fn new() -> Self {
        Self
    }

    /// 將所有元素放大到共同的小數位數，回傳整數矩陣與該位數
    fn scale_to_integers(matrix: &Matrix) -> Result<(Vec<Vec<i128>>, u32)> {
        let rows = matrix.to_rows();
        let scale = rows.iter().flatten().map(Decimal::scale).max().unwrap_or(0);

        let integers = rows
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(column, value)| {
                        10i128
                            .checked_pow(scale - value.scale())
                            .and_then(|factor| value.mantissa().checked_mul(factor))
                            .ok_or(MatcacheError::Overflow { column })
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok((integers, scale))
    }

    /// 選出第 `column` 欄的主元列
    fn select_pivot(
        augmented: &[Vec<i128>],
        column: usize,
        options: &SolveOptions,
    ) -> Option<usize> {
        match options.pivoting {
            PivotStrategy::Partial => (column..augmented.len())
                .filter(|&row| augmented[row][column] != 0)
                .max_by_key(|&row| augmented[row][column].unsigned_abs()),
            PivotStrategy::Disabled => (augmented[column][column] != 0).then_some(column),
        }
    }

    /// `(pivot · value - factor · pivot_value) / previous`，整除必為精確
    fn eliminate(
        pivot: i128,
        value: i128,
        factor: i128,
        pivot_value: i128,
        previous: i128,
    ) -> Option<i128> {
        let scaled = pivot.checked_mul(value)?;
        let removed = factor.checked_mul(pivot_value)?;
        scaled.checked_sub(removed)?.checked_div(previous)
    }
}

impl Inverter for GaussJordanInverter {
    fn invert(&self, matrix: &Matrix, options: &SolveOptions) -> Result<Matrix> {
        let n = matrix.rows();

        if !matrix.is_square() {
            tracing::debug!("拒絕非方陣: {}x{}", matrix.rows(), matrix.cols());
            return Err(MatcacheError::NotSquare {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }

        let (integers, scale) = Self::scale_to_integers(matrix)?;
        tracing::debug!(
            "開始 Gauss-Jordan 求逆：{} 階，放大 10^{}，主元策略 {:?}",
            n,
            scale,
            options.pivoting
        );

        // 建立增廣矩陣 [B | I]
        let mut augmented: Vec<Vec<i128>> = integers
            .into_iter()
            .enumerate()
            .map(|(i, mut row)| {
                row.extend((0..n).map(|j| i128::from(i == j)));
                row
            })
            .collect();

        let mut previous: i128 = 1;
        for column in 0..n {
            let pivot_row = Self::select_pivot(&augmented, column, options).ok_or_else(|| {
                tracing::debug!("第 {} 欄找不到非零主元", column);
                MatcacheError::Singular { column }
            })?;

            if pivot_row != column {
                augmented.swap(pivot_row, column);
            }

            let pivot_values = augmented[column].clone();
            let pivot = pivot_values[column];

            for (row, values) in augmented.iter_mut().enumerate() {
                if row == column {
                    continue;
                }
                let factor = values[column];
                for (value, &pivot_value) in values.iter_mut().zip(&pivot_values) {
                    *value = Self::eliminate(pivot, *value, factor, pivot_value, previous)
                        .ok_or(MatcacheError::Overflow { column })?;
                }
            }

            previous = pivot;
        }

        // A⁻¹ = 10^s · B⁻¹ = 右半 / (det / 10^s)
        let determinant = Decimal::try_from_i128_with_scale(previous, scale)
            .map_err(|_| MatcacheError::Overflow { column: n - 1 })?;

        let inverse = augmented
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .skip(n)
                    .enumerate()
                    .map(|(column, adjugate)| {
                        let numerator = Decimal::try_from_i128_with_scale(adjugate, 0)
                            .map_err(|_| MatcacheError::Overflow { column })?;
                        match numerator.checked_div(determinant) {
                            // 非零值被捨成零代表超出可表示範圍
                            Some(value) if value.is_zero() && !numerator.is_zero() => {
                                Err(MatcacheError::Overflow { column })
                            }
                            Some(value) => Ok(value.normalize()),
                            None => Err(MatcacheError::Overflow { column }),
                        }
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Matrix::from_rows(inverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn matrix(rows: &[&[i64]]) -> Matrix {
        Matrix::from_i64_rows(rows).unwrap()
    }

    fn invert(a: &Matrix) -> Result<Matrix> {
        GaussJordanInverter::new().invert(a, &SolveOptions::default())
    }

    #[test]
    fn test_invert_2x2() {
        let a = matrix(&[&[1, 2], &[3, 4]]);
        let inverse = invert(&a).unwrap();

        let expected = Matrix::from_rows(vec![
            vec![Decimal::from(-2), Decimal::ONE],
            vec![Decimal::new(15, 1), Decimal::new(-5, 1)],
        ])
        .unwrap();
        assert_eq!(inverse, expected);
    }

    #[rstest]
    #[case(matrix(&[&[4, 3], &[1, 1]]))]
    #[case(matrix(&[&[2, 0, 0], &[0, 4, 0], &[0, 0, 5]]))]
    #[case(matrix(&[&[0, 1, 2], &[1, 0, 3], &[4, -3, 8]]))]
    #[case(matrix(&[&[5]]))]
    fn test_inverse_times_matrix_is_identity(#[case] a: Matrix) {
        let inverse = invert(&a).unwrap();

        let identity = Matrix::identity(a.rows()).unwrap();
        assert_eq!(a.mul(&inverse).unwrap(), identity);
        assert_eq!(inverse.mul(&a).unwrap(), identity);
    }

    #[rstest]
    #[case(matrix(&[&[1, 2], &[2, 4]]), 1)]
    #[case(matrix(&[&[0, 0], &[0, 1]]), 0)]
    #[case(matrix(&[&[1, 2, 3], &[2, 4, 6], &[1, 1, 1]]), 2)]
    fn test_singular_matrix(#[case] a: Matrix, #[case] column: usize) {
        assert_eq!(invert(&a), Err(MatcacheError::Singular { column }));
    }

    // 以浮點或 Decimal 除法消去時，這些矩陣會殘留約 1e-28 的假主元
    #[rstest]
    #[case(matrix(&[&[3, 2, 1], &[2, 7, 1], &[7, 16, 3]]))]
    #[case(matrix(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]))]
    #[case(matrix(&[&[2, 9, 4], &[7, 5, 3], &[16, 19, 10]]))]
    #[case(matrix(&[&[3, 4, 3, 1], &[4, 7, 1, 3], &[3, 1, 11, 4], &[10, 12, 15, 8]]))]
    #[case(matrix(&[&[1, 3, 5, 7], &[2, 4, 6, 8], &[3, 5, 7, 9], &[4, 6, 8, 10]]))]
    fn test_singular_with_inexact_quotients(#[case] a: Matrix) {
        assert!(matches!(invert(&a), Err(MatcacheError::Singular { .. })));
    }

    #[test]
    fn test_decimal_singular_matrix() {
        // 第二列為第一列的 0.3 倍
        let a = Matrix::from_rows(vec![
            vec![Decimal::new(7, 1), Decimal::new(11, 2)],
            vec![Decimal::new(21, 2), Decimal::new(33, 3)],
        ])
        .unwrap();

        assert_eq!(invert(&a), Err(MatcacheError::Singular { column: 1 }));
    }

    #[rstest]
    // 大數：1e21 的逆為 1e-21
    #[case(Decimal::from_i128_with_scale(10i128.pow(21), 0), Decimal::new(1, 21))]
    // 小數：1e-20 的逆為 1e20
    #[case(Decimal::new(1, 20), Decimal::from_i128_with_scale(10i128.pow(20), 0))]
    #[case(Decimal::new(-25, 1), Decimal::new(-4, 1))]
    #[case(Decimal::new(8, 0), Decimal::new(125, 3))]
    fn test_extreme_magnitudes(#[case] entry: Decimal, #[case] expected: Decimal) {
        let a = Matrix::from_rows(vec![vec![entry]]).unwrap();

        let inverse = invert(&a).unwrap();

        assert_eq!(inverse.get(0, 0), Some(expected));
        assert_eq!(a.mul(&inverse).unwrap(), Matrix::identity(1).unwrap());
    }

    #[test]
    fn test_mixed_magnitude_diagonal_matrix() {
        let a = Matrix::from_rows(vec![
            vec![Decimal::from(1_000_000_000), Decimal::ZERO],
            vec![Decimal::ZERO, Decimal::new(1, 6)],
        ])
        .unwrap();

        let inverse = invert(&a).unwrap();

        assert_eq!(inverse.get(0, 0), Some(Decimal::new(1, 9)));
        assert_eq!(inverse.get(1, 1), Some(Decimal::from(1_000_000)));
        assert_eq!(a.mul(&inverse).unwrap(), Matrix::identity(2).unwrap());
    }

    #[test]
    fn test_small_quotient_not_rounded_to_zero() {
        // 1/3e21 不可被捨成零
        let a = Matrix::from_rows(vec![vec![Decimal::from_i128_with_scale(3 * 10i128.pow(21), 0)]])
            .unwrap();

        let inverse = invert(&a).unwrap();
        let value = inverse.get(0, 0).unwrap();

        assert!(value > Decimal::new(3333, 25));
        assert!(value < Decimal::new(3334, 25));
    }

    #[rstest]
    // 消去時乘積超出 i128
    #[case(Matrix::from_rows(vec![
        vec![Decimal::MAX, Decimal::ONE],
        vec![Decimal::ONE, Decimal::MAX],
    ]).unwrap())]
    // 逆矩陣元素小於 Decimal 最小正數
    #[case(Matrix::from_rows(vec![vec![Decimal::MAX]]).unwrap())]
    // 放大到共同小數位數時超出 i128
    #[case(Matrix::from_rows(vec![
        vec![Decimal::MAX, Decimal::ZERO],
        vec![Decimal::ZERO, Decimal::new(1, 28)],
    ]).unwrap())]
    fn test_overflow_is_an_error(#[case] a: Matrix) {
        assert!(matches!(invert(&a), Err(MatcacheError::Overflow { .. })));
    }

    #[test]
    fn test_not_square() {
        let a = matrix(&[&[1, 2, 3], &[4, 5, 6]]);
        assert_eq!(invert(&a), Err(MatcacheError::NotSquare { rows: 2, cols: 3 }));
    }

    #[test]
    fn test_zero_leading_pivot_needs_pivoting() {
        // 左上角為 0：部分主元可換列求解，關閉換列則失敗
        let a = matrix(&[&[0, 1], &[1, 0]]);

        assert_eq!(invert(&a).unwrap(), a);

        let disabled = SolveOptions::default().with_pivoting(PivotStrategy::Disabled);
        let result = GaussJordanInverter::new().invert(&a, &disabled);
        assert_eq!(result, Err(MatcacheError::Singular { column: 0 }));
    }

    #[test]
    fn test_pivoting_disabled_still_inverts() {
        let a = matrix(&[&[2, 1], &[1, 1]]);
        let disabled = SolveOptions::default().with_pivoting(PivotStrategy::Disabled);

        let inverse = GaussJordanInverter::new().invert(&a, &disabled).unwrap();

        assert_eq!(inverse, matrix(&[&[1, -1], &[-1, 2]]));
    }

    /// 由單位矩陣經列加法與換列產生的行列式為 ±1 的整數矩陣
    fn unimodular() -> impl Strategy<Value = Vec<Vec<i64>>> {
        (2usize..=4).prop_flat_map(|n| {
            prop::collection::vec((0..n, 0..n, -2i64..=2), 0..8).prop_map(move |ops| {
                let mut rows: Vec<Vec<i64>> = (0..n)
                    .map(|i| (0..n).map(|j| i64::from(i == j)).collect())
                    .collect();
                for (target, source, multiple) in ops {
                    if target == source {
                        rows.swap(target, (target + 1) % n);
                    } else {
                        let source_row = rows[source].clone();
                        for (value, s) in rows[target].iter_mut().zip(source_row) {
                            *value += multiple * s;
                        }
                    }
                }
                rows
            })
        })
    }

    /// 最後一列為其餘列線性組合的整數矩陣
    fn rank_deficient() -> impl Strategy<Value = Vec<Vec<i64>>> {
        (2usize..=4).prop_flat_map(|n| {
            (
                prop::collection::vec(prop::collection::vec(-9i64..=9, n), n - 1),
                prop::collection::vec(-3i64..=3, n - 1),
                0..n,
            )
                .prop_map(move |(mut rows, coefficients, position)| {
                    let combined = (0..n)
                        .map(|j| {
                            rows.iter()
                                .zip(&coefficients)
                                .map(|(row, c)| row[j] * c)
                                .sum()
                        })
                        .collect();
                    rows.insert(position, combined);
                    rows
                })
        })
    }

    proptest! {
        #[test]
        fn prop_inverse_of_unimodular_is_exact(rows in unimodular()) {
            let a = Matrix::from_i64_rows(rows.as_slice()).unwrap();
            let inverse = invert(&a).unwrap();

            let identity = Matrix::identity(a.rows()).unwrap();
            prop_assert_eq!(a.mul(&inverse).unwrap(), identity.clone());
            prop_assert_eq!(inverse.mul(&a).unwrap(), identity);
        }

        #[test]
        fn prop_rank_deficient_is_singular(rows in rank_deficient()) {
            let a = Matrix::from_i64_rows(rows.as_slice()).unwrap();
            let result = invert(&a);
            prop_assert!(
                matches!(result, Err(MatcacheError::Singular { .. })),
                "expected singular, got {:?}",
                result
            );
        }
    }
}
