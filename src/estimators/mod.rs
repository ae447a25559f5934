
pub mod error;
pub mod hyperparams;
pub mod lasso;
pub mod param_guard;
pub mod traits;
