//! # Matcache
//!
//! 矩陣逆的單槽記憶化：首次請求時計算，之後直接回傳快取，直到矩陣被替換。
//!
//! ```
//! use matcache::{cached_inverse_default, CacheCell, Matrix};
//!
//! let mut cell = CacheCell::new(Matrix::from_i64_rows(&[[4, 3], [1, 1]]).unwrap());
//! let inverse = cached_inverse_default(&mut cell).unwrap();
//! assert_eq!(inverse, &Matrix::from_i64_rows(&[[1, -3], [-1, 4]]).unwrap());
//! ```

pub use matcache_cache::{cached_inverse, cached_inverse_default, CacheCell, CACHE_HIT_MESSAGE};
pub use matcache_calc::{GaussJordanInverter, Inverter};
pub use matcache_core::{MatcacheError, Matrix, PivotStrategy, Result, SolveOptions};
pub use rust_decimal::Decimal;
