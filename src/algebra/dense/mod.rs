mod core;
mod gemm;
mod matrix_math;
