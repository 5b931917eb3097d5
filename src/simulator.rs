//! バランスシミュレーター。
//! 実行: cargo test simulate_optimal -- --nocapture
