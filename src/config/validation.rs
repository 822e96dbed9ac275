//! ConfigField trait implementations for config sections.
//!
//! Each section exposes its fields by name with validation, for the
//! `termfx config get/set/reset` commands.

use super::field::{parse_bool, parse_char, parse_positive, ConfigField, FieldError};
use super::{ColorizeConfig, LoaderConfig, ProgressConfig};
use crate::color::Color;
use crate::loader::LoaderKind;

fn parse_color(key: &str, value: &str) -> Result<Color, FieldError> {
    value.parse().map_err(|_| FieldError::InvalidValue {
        key: key.into(),
        expected: "white | blue | red | green | gray | orange | yellow | purple".into(),
    })
}

impl ConfigField for ColorizeConfig {
    fn get_field(&self, key: &str) -> Option<String> {
        match key {
            "default_color" => Some(self.default_color.to_string()),
            _ => None,
        }
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<(), FieldError> {
        match key {
            "default_color" => {
                self.default_color = parse_color(key, value)?;
                Ok(())
            }
            _ => Err(FieldError::UnknownKey(key.into())),
        }
    }

    fn field_names() -> &'static [&'static str] {
        &["default_color"]
    }
}

impl ConfigField for ProgressConfig {
    fn get_field(&self, key: &str) -> Option<String> {
        match key {
            "width" => Some(self.width.to_string()),
            "fill_char" => Some(self.fill_char.to_string()),
            "empty_char" => Some(self.empty_char.to_string()),
            "color" => Some(self.color.to_string()),
            "step_ms" => Some(self.step_ms.to_string()),
            _ => None,
        }
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<(), FieldError> {
        match key {
            "width" => self.width = parse_positive(key, value)?,
            "fill_char" => self.fill_char = parse_char(key, value)?,
            "empty_char" => self.empty_char = parse_char(key, value)?,
            "color" => self.color = parse_color(key, value)?,
            "step_ms" => self.step_ms = parse_positive(key, value)?,
            _ => return Err(FieldError::UnknownKey(key.into())),
        }
        Ok(())
    }

    fn field_names() -> &'static [&'static str] {
        &["width", "fill_char", "empty_char", "color", "step_ms"]
    }
}

impl ConfigField for LoaderConfig {
    fn get_field(&self, key: &str) -> Option<String> {
        match key {
            "kind" => Some(self.kind.to_string()),
            "message" => Some(self.message.clone()),
            "interval_ms" => Some(self.interval_ms.to_string()),
            "immediate_first_frame" => Some(self.immediate_first_frame.to_string()),
            "duration_ms" => Some(self.duration_ms.to_string()),
            _ => None,
        }
    }

    fn set_field(&mut self, key: &str, value: &str) -> Result<(), FieldError> {
        match key {
            "kind" => {
                self.kind = value
                    .parse::<LoaderKind>()
                    .map_err(|_| FieldError::InvalidValue {
                        key: key.into(),
                        expected: "dots | spin | bar".into(),
                    })?;
            }
            "message" => self.message = value.to_string(),
            "interval_ms" => self.interval_ms = parse_positive(key, value)?,
            "immediate_first_frame" => {
                self.immediate_first_frame =
                    parse_bool(value).map_err(|_| FieldError::InvalidValue {
                        key: key.into(),
                        expected: "true or false".into(),
                    })?;
            }
            "duration_ms" => self.duration_ms = parse_positive(key, value)?,
            _ => return Err(FieldError::UnknownKey(key.into())),
        }
        Ok(())
    }

    fn field_names() -> &'static [&'static str] {
        &[
            "kind",
            "message",
            "interval_ms",
            "immediate_first_frame",
            "duration_ms",
        ]
    }
}
