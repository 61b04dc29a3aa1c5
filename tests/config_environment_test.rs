// ABOUTME: Tests for environment-driven engine configuration
// ABOUTME: Validates BAPSANG_* overrides, list parsing, validation failures, and logging config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bapsang Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs, clippy::float_cmp)]

use bapsang::config::{ConfigError, FruitSnackConfig, IntelligenceConfig};
use bapsang::errors::{AppError, ErrorCode};
use bapsang::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const FRUIT_VARS: &[&str] = &[
    "BAPSANG_FRUIT_POTASSIUM_CAP_MG",
    "BAPSANG_FRUIT_SUGAR_CAP_G",
    "BAPSANG_FRUIT_MAX_SERVINGS",
    "BAPSANG_FRUIT_MAX_SERVINGS_CHILD",
    "BAPSANG_FRUIT_DEFAULT_TARGET_KCAL",
    "BAPSANG_RENAL_RISK_CODES",
    "BAPSANG_GLYCEMIC_RISK_CODES",
];

fn clear_fruit_vars() {
    for var in FRUIT_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_fruit_vars();
    let config = IntelligenceConfig::load().unwrap();
    let defaults = FruitSnackConfig::default();
    assert_eq!(config.fruit_snack.potassium_cap_mg, defaults.potassium_cap_mg);
    assert_eq!(config.fruit_snack.max_servings, 3);
    assert_eq!(config.fruit_snack.max_servings_child, 2);
}

#[test]
#[serial]
fn test_numeric_overrides_are_applied() {
    clear_fruit_vars();
    env::set_var("BAPSANG_FRUIT_POTASSIUM_CAP_MG", " 150 ");
    env::set_var("BAPSANG_FRUIT_SUGAR_CAP_G", "10.5");
    env::set_var("BAPSANG_FRUIT_MAX_SERVINGS", "2");
    env::set_var("BAPSANG_FRUIT_MAX_SERVINGS_CHILD", "1");

    let config = IntelligenceConfig::load().unwrap();
    assert_eq!(config.fruit_snack.potassium_cap_mg, 150.0);
    assert_eq!(config.fruit_snack.sugar_cap_g, 10.5);
    assert_eq!(config.fruit_snack.max_servings_for(false), 2);
    assert_eq!(config.fruit_snack.max_servings_for(true), 1);

    clear_fruit_vars();
}

#[test]
#[serial]
fn test_risk_code_lists_are_split_and_trimmed() {
    clear_fruit_vars();
    env::set_var("BAPSANG_RENAL_RISK_CODES", "ckd, esrd ,,dialysis");
    env::set_var("BAPSANG_GLYCEMIC_RISK_CODES", "diabetes");

    let config = IntelligenceConfig::load().unwrap();
    assert_eq!(
        config.fruit_snack.renal_risk_codes,
        vec!["ckd", "esrd", "dialysis"]
    );
    assert!(config.fruit_snack.has_renal_risk(&["ESRD"]));
    assert!(!config.fruit_snack.has_glycemic_risk(&["prediabetes"]));

    clear_fruit_vars();
}

#[test]
#[serial]
fn test_unparseable_override_is_a_parse_error() {
    clear_fruit_vars();
    env::set_var("BAPSANG_FRUIT_MAX_SERVINGS", "three");

    let err = IntelligenceConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("BAPSANG_FRUIT_MAX_SERVINGS"));

    clear_fruit_vars();
}

#[test]
#[serial]
fn test_out_of_range_override_fails_validation() {
    clear_fruit_vars();
    env::set_var("BAPSANG_FRUIT_MAX_SERVINGS", "5");
    assert!(matches!(
        IntelligenceConfig::load(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    clear_fruit_vars();
    env::set_var("BAPSANG_RENAL_RISK_CODES", " , ");
    assert!(matches!(
        IntelligenceConfig::load(),
        Err(ConfigError::MissingField("renal_risk_codes"))
    ));

    clear_fruit_vars();
}

#[cfg(unix)]
#[test]
#[serial]
fn test_non_unicode_override_is_an_env_var_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    clear_fruit_vars();
    env::set_var("BAPSANG_RENAL_RISK_CODES", OsStr::from_bytes(b"ckd,\xff"));

    let err = IntelligenceConfig::load().unwrap_err();
    assert!(matches!(err, ConfigError::EnvVar(env::VarError::NotUnicode(_))));

    let app: AppError = err.into();
    assert_eq!(app.code, ErrorCode::ConfigError);
    assert_eq!(app.http_status(), 500);

    clear_fruit_vars();
}

#[test]
fn test_config_error_converts_to_app_error() {
    let app: AppError = ConfigError::InvalidRange("max_servings_child").into();
    assert_eq!(app.code, ErrorCode::ConfigInvalid);
    assert!(app.message.contains("max_servings_child"));
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "bapsang-worker");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "bapsang-worker");
    assert!(config.include_location);

    env::remove_var("LOG_FORMAT");
    env::remove_var("SERVICE_NAME");
    env::remove_var("ENVIRONMENT");

    let config = LoggingConfig::from_env();
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
}
