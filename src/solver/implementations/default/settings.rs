use crate::algebra::*;
use crate::solver::core::traits::Settings;
use crate::solver::core::{SettingsError, Verbosity};
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Standard-form solver type implementing the [`Settings`](crate::solver::core::traits::Settings) trait

#[derive(Builder, Debug, Clone)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DefaultSettings<T: FloatT> {
    ///maximum number of iterations.   The value 0 selects the
    ///dimension dependent default of `50*(n+m)` at setup
    #[builder(default = "0")]
    pub max_iter: u32,

    ///maximum run time (seconds)
    #[builder(default = "f64::INFINITY")]
    pub time_limit: f64,

    ///print verbosity
    #[builder(default = "Verbosity::Summary")]
    pub verbosity: Verbosity,

    ///feasibility tolerance on bound and constraint rows.   Scaled
    ///internally by the magnitude of the problem data
    #[builder(default = "(1e-8).as_T()")]
    pub tol_feas: T,

    ///optimality tolerance for stationarity and multiplier sign tests.
    ///Scaled internally by the magnitude of the problem data
    #[builder(default = "(1e-8).as_T()")]
    pub tol_optimality: T,

    ///rank tolerance for the factorization of the active constraint
    ///normals.   Scaled internally by the magnitude of the problem data
    #[builder(default = "(1e-10).as_T()")]
    pub tol_rank: T,

    ///threshold at or beyond which a bound value is treated as infinite
    #[builder(default = "(1e25).as_T()")]
    pub infinite_bound: T,

    ///diagonal regularization applied when retrying a failed reduced
    ///Hessian factorization
    #[builder(default = "(1e-8).as_T()")]
    pub static_regularization_constant: T,
}

impl<T> Default for DefaultSettings<T>
where
    T: FloatT,
{
    fn default() -> DefaultSettings<T> {
        DefaultSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> Settings<T> for DefaultSettings<T>
where
    T: FloatT,
{
    //NB: CoreSettings is typedef'd to DefaultSettings
    fn core(&self) -> &DefaultSettings<T> {
        self
    }
    fn core_mut(&mut self) -> &mut DefaultSettings<T> {
        self
    }
}

impl<T> DefaultSettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.time_limit.is_nan() || self.time_limit < 0. {
            return Err(SettingsError::BadFieldValue("time_limit"));
        }
        if !(self.tol_feas > T::zero()) {
            return Err(SettingsError::BadFieldValue("tol_feas"));
        }
        if !(self.tol_optimality > T::zero()) {
            return Err(SettingsError::BadFieldValue("tol_optimality"));
        }
        if !(self.tol_rank > T::zero()) {
            return Err(SettingsError::BadFieldValue("tol_rank"));
        }
        if !(self.infinite_bound > T::one()) {
            return Err(SettingsError::BadFieldValue("infinite_bound"));
        }
        if !(self.static_regularization_constant >= T::zero()) {
            return Err(SettingsError::BadFieldValue(
                "static_regularization_constant",
            ));
        }
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for DefaultSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        DefaultSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> DefaultSettingsBuilder<T>
where
    T: FloatT,
{
    /// check any populated fields for validity
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(v) = self.time_limit {
            if v.is_nan() || v < 0. {
                return Err(SettingsError::BadFieldValue("time_limit"));
            }
        }
        if let Some(v) = self.tol_feas {
            if !(v > T::zero()) {
                return Err(SettingsError::BadFieldValue("tol_feas"));
            }
        }
        if let Some(v) = self.tol_optimality {
            if !(v > T::zero()) {
                return Err(SettingsError::BadFieldValue("tol_optimality"));
            }
        }
        if let Some(v) = self.tol_rank {
            if !(v > T::zero()) {
                return Err(SettingsError::BadFieldValue("tol_rank"));
            }
        }
        if let Some(v) = self.infinite_bound {
            if !(v > T::one()) {
                return Err(SettingsError::BadFieldValue("infinite_bound"));
            }
        }
        if let Some(v) = self.static_regularization_constant {
            if !(v >= T::zero()) {
                return Err(SettingsError::BadFieldValue(
                    "static_regularization_constant",
                ));
            }
        }
        Ok(())
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    DefaultSettingsBuilder::<f64>::default().build().unwrap();

    // fail on a non-positive tolerance
    assert!(DefaultSettingsBuilder::<f64>::default()
        .tol_feas(0.0)
        .build()
        .is_err());

    // fail on a nonsense infinite bound
    assert!(DefaultSettingsBuilder::<f64>::default()
        .infinite_bound(0.5)
        .build()
        .is_err());

    // directly construct a bad DefaultSettings and manually check
    let settings = DefaultSettings::<f64> {
        tol_rank: -1.0,
        ..DefaultSettings::default()
    };
    assert!(settings.validate().is_err());
}
