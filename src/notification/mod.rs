mod matrix;

pub use matrix::{HttpMatrixClient, MatrixClient};
