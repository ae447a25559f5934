use super::traits::Fit;
use crate::datasets::{AsSingleTargets, DatasetBase, DesignMatrix};
use std::error::Error;

/// Hyperparameters that may hold invalid values.
///
/// The validated set is only reachable through `check_ref` or `check`, which
/// must run the same validation. Any set whose validated counterpart
/// implements [`Fit`] can be fitted directly: the validation then happens
/// right before the fit.
pub trait ParamGuard {
    /// Validated hyperparameters
    type Checked;
    /// Error raised by the validation
    type Error: Error;

    /// Validates the hyperparameters and borrows the validated set.
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error>;

    /// Validates the hyperparameters and consumes them into the validated set.
    fn check(self) -> Result<Self::Checked, Self::Error>;

    /// Same as `check` but panics on invalid hyperparameters.
    fn check_unwrap(self) -> Self::Checked
    where
        Self: Sized,
    {
        self.check().unwrap()
    }
}

/// Validates the hyperparameters before fitting the estimator. A validation
/// error is converted into the error type of the fit.
impl<DM: DesignMatrix, T: AsSingleTargets, E, P: ParamGuard> Fit<DM, T, E> for P
where
    P::Checked: Fit<DM, T, E>,
    E: Error + From<P::Error>,
{
    type Object = <<P as ParamGuard>::Checked as Fit<DM, T, E>>::Object;

    fn fit(&self, dataset: &DatasetBase<DM, T>) -> Result<Self::Object, E> {
        let checked = self.check_ref()?;
        checked.fit(dataset)
    }
}
