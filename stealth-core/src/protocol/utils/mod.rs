mod common;

pub use common::{mul_generator, mul_point, random_scalar};
