use serde::Serialize;
use shiftgrid_core::error::ShiftError;

pub fn render<T: Serialize + ?Sized>(value: &T) -> Result<String, ShiftError> {
    Ok(serde_json::to_string_pretty(value)?)
}
