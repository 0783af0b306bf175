use crate::algebra::{AsFloatT, FloatT, SettingsError};
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Tolerance settings for approximate matrix comparison.
///
/// Build with [`ComparisonSettingsBuilder`], or use `Default` for the
/// standard tolerance of `0.01`.

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ComparisonSettings<T: FloatT> {
    ///values `a` and `b` compare equal when `|a - b| < tolerance`
    #[builder(default = "(0.01).as_T()")]
    pub tolerance: T,
}

impl<T> Default for ComparisonSettings<T>
where
    T: FloatT,
{
    fn default() -> ComparisonSettings<T> {
        ComparisonSettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T> ComparisonSettings<T>
where
    T: FloatT,
{
    /// Checks that the settings are valid.  Deserialized settings bypass
    /// the builder and should be checked with this function.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_tolerance(self.tolerance)
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for ComparisonSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        ComparisonSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl<T> ComparisonSettingsBuilder<T>
where
    T: FloatT,
{
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(tolerance) = self.tolerance {
            validate_tolerance(tolerance)?;
        }
        Ok(())
    }
}

fn validate_tolerance<T: FloatT>(tolerance: T) -> Result<(), SettingsError> {
    if tolerance.is_finite() && tolerance > T::zero() {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue("tolerance"))
    }
}

#[test]
fn test_settings_validate() {
    // standard settings
    let settings = ComparisonSettingsBuilder::<f32>::default().build().unwrap();
    assert_eq!(settings.tolerance, 0.01);
    assert_eq!(settings, ComparisonSettings::default());

    // fail on bad tolerances
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(ComparisonSettingsBuilder::<f64>::default()
            .tolerance(bad)
            .build()
            .is_err());
    }

    let settings = ComparisonSettingsBuilder::<f64>::default()
        .tolerance(1e-6)
        .build()
        .unwrap();
    assert!(settings.validate().is_ok());
}

#[cfg(feature = "serde")]
#[test]
fn test_settings_deserialize() {
    let settings: ComparisonSettings<f64> = serde_json::from_str("{}").unwrap();
    assert_eq!(settings.tolerance, 0.01);

    let settings: ComparisonSettings<f64> = serde_json::from_str(r#"{"tolerance": -2.0}"#).unwrap();
    assert!(settings.validate().is_err());
}
