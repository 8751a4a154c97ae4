//! 逆矩陣快取示例
//!
//! 以 `RUST_LOG=debug cargo run --example inverse_demo` 觀察快取命中與失效。

use matcache::{cached_inverse, CacheCell, GaussJordanInverter, Matrix, SolveOptions};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== 逆矩陣快取示例 ===\n");

    let inverter = GaussJordanInverter::new();
    let options = SolveOptions::default();
    let mut cell = CacheCell::new(Matrix::from_i64_rows(&[[1, 2], [3, 4]])?);

    println!("矩陣:\n{}\n", cell.get());

    // 第一次：計算
    let inverse = cached_inverse(&mut cell, &inverter, &options)?;
    println!("逆矩陣:\n{}\n", inverse);

    // 第二次：命中快取
    let inverse = cached_inverse(&mut cell, &inverter, &options)?;
    println!("再次取得（快取）:\n{}\n", inverse);

    // 替換矩陣後快取失效
    cell.set(Matrix::from_i64_rows(&[[4, 3], [1, 1]])?);
    println!("新矩陣:\n{}\n", cell.get());
    let inverse = cached_inverse(&mut cell, &inverter, &options)?;
    println!("新逆矩陣:\n{}\n", inverse);

    // 奇異矩陣：錯誤直接回傳
    cell.set(Matrix::from_i64_rows(&[[1, 2], [2, 4]])?);
    match cached_inverse(&mut cell, &inverter, &options) {
        Ok(inverse) => println!("逆矩陣:\n{}", inverse),
        Err(err) => println!("無法求逆: {}", err),
    }

    Ok(())
}
