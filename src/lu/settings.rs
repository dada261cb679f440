use super::SettingsError;
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings for an [`LUFactorizer`](crate::lu::LUFactorizer)
///
/// Construct with [`LUSettingsBuilder`], or start from
/// `LUSettings::default()` and overwrite individual fields.
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LUSettings {
    ///print a factorization report
    #[builder(default = "false")]
    pub verbose: bool,

    ///elimination kernel ("auto", "doolittle" or "outer_product")
    #[builder(default = r#""auto".to_string()"#)]
    pub method: String,

    ///reject input containing NaN or infinite values
    #[builder(default = "true")]
    pub check_finite: bool,

    ///include the computed factors in the report when verbose
    #[builder(default = "false")]
    pub print_factors: bool,

    ///largest dimension for which factors are printed
    #[builder(default = "10")]
    pub max_print_dim: usize,
}

impl Default for LUSettings {
    fn default() -> LUSettings {
        LUSettingsBuilder::default().build().unwrap()
    }
}

impl LUSettings {
    /// Checks that the settings are valid.  This only ensures that fields
    /// specified by strings contain valid options.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_method(&self.method)?;
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for LUSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        LUSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl LUSettingsBuilder {
    /// check that the specified method is valid
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(ref method) = self.method {
            validate_method(method)?;
        }
        Ok(())
    }
}

fn validate_method(method: &str) -> Result<(), SettingsError> {
    match method {
        "auto" => Ok(()),
        "doolittle" => Ok(()),
        "outer_product" => Ok(()),
        _ => Err(SettingsError::BadFieldValue("method")),
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    let settings = LUSettingsBuilder::default().build().unwrap();
    assert_eq!(settings, LUSettings::default());
    assert_eq!(settings.method, "auto");
    assert!(settings.check_finite);
    assert!(!settings.verbose);

    // fail on unknown method
    assert!(LUSettingsBuilder::default()
        .method("crout".to_string())
        .build()
        .is_err());

    assert!(LUSettingsBuilder::default()
        .method("doolittle".to_string())
        .verbose(true)
        .build()
        .is_ok());

    // directly construct a bad LUSettings and manually check
    let settings = LUSettings {
        method: "crout".to_string(),
        ..LUSettings::default()
    };
    assert_eq!(
        settings.validate(),
        Err(SettingsError::BadFieldValue("method"))
    );
}
