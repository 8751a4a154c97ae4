//! 逆矩陣記憶化

use matcache_calc::{GaussJordanInverter, Inverter};
use matcache_core::{Matrix, Result, SolveOptions};

use crate::CacheCell;

/// 快取命中時發出的診斷訊息
pub const CACHE_HIT_MESSAGE: &str = "使用快取的逆矩陣";

/// 取得快取單元中矩陣的逆矩陣
///
/// 已有快取時直接回傳，並發出一則 [`CACHE_HIT_MESSAGE`] 診斷事件；否則以
/// `inverter` 計算目前值的逆矩陣（`options` 原樣轉交），寫回快取後回傳。
///
/// 不預先檢查可逆性。求逆失敗時錯誤直接回傳給呼叫端，快取保持未設置。
pub fn cached_inverse<'a, I>(
    cell: &'a mut CacheCell<Matrix>,
    inverter: &I,
    options: &SolveOptions,
) -> Result<&'a Matrix>
where
    I: Inverter + ?Sized,
{
    match cell.get_derived() {
        Some(_) => tracing::info!("{}", CACHE_HIT_MESSAGE),
        None => {
            let value = cell.get();
            tracing::debug!("快取未命中，計算 {}x{} 矩陣的逆矩陣", value.rows(), value.cols());

            let inverse = inverter.invert(value, options)?;
            cell.set_derived(inverse);
        }
    }

    // 命中時回傳原有的值，未命中時回傳剛寫入的值
    Ok(cell
        .get_derived()
        .expect("infallible: derived value was present or has just been stored"))
}

/// 使用預設求逆器與參數的 [`cached_inverse`]
pub fn cached_inverse_default(cell: &mut CacheCell<Matrix>) -> Result<&Matrix> {
    cached_inverse(cell, &GaussJordanInverter::new(), &SolveOptions::default())
}
