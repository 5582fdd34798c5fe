pub mod binary;
pub mod compare;
pub mod math;
pub mod unary;

mod chained;

pub use binary::*;
pub use compare::*;
pub use math::*;
pub use unary::*;
