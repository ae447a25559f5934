#![allow(non_snake_case)]

//! Celer: a working-set solver for the Lasso.
//!
//! The minimized objective is:
//! ```ignore
//! 1 / (2 * n_samples) * ||y - Xw||^2_2 + alpha * ||w||_1
//! ```
//!
//! The solver combines an outer loop that builds working sets from duality
//! gap certificates with an inner coordinate descent solver whose dual point
//! is improved by Anderson (dual) extrapolation.
//!
//! Reference: `https://arxiv.org/abs/1802.07481`

use ndarray::ScalarOperand;

use num_traits::{AsPrimitive, FromPrimitive, NumAssignOps, NumCast, Signed};

use std::cmp::PartialOrd;
use std::fmt;
use std::iter::Sum;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Float point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point
/// number and implement them for 32bit and 64bit float points.
/// Ref: https://github.com/rust-ml/linfa/blob/master/src/dataset/mod.rs#L36
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + fmt::LowerExp
    + Signed
    + Sum
    + NumAssignOps
    + AsPrimitive<usize>
    + for<'a> AddAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> DivAssign<&'a Self>
    + num_traits::MulAdd<Output = Self>
    + ScalarOperand
    + approx::AbsDiffEq<Epsilon = Self>
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

pub mod cd;
pub mod celer;
pub mod datafits;
pub mod datasets;
pub mod dual;
pub mod estimators;
pub mod extrapolation;
pub mod helpers;
pub mod penalties;
pub mod screening;
pub mod solver;
pub mod working_set;
