//! rps-bench: Criterion benchmarks. See `benches/`.
