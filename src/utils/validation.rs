use crate::domain::model::Point;
use crate::utils::error::{Result, SkylineError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SkylineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SkylineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_choice(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(SkylineError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SkylineError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// The y-floor early exit is only sound when no point lies below the floor.
pub fn validate_y_floor(points: &[Point], floor: i64) -> Result<()> {
    if let Some(offender) = points.iter().find(|p| p.y < floor) {
        return Err(SkylineError::ValidationError {
            message: format!(
                "point ({}, {}) lies below the configured y floor {}",
                offender.x, offender.y, floor
            ),
        });
    }
    Ok(())
}
