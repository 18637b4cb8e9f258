use crate::domain::models::hotel::Address;
use crate::error::AppError;

const FALLBACK_STREET: &str = "Unknown Street";
const FALLBACK_CITY: &str = "Unknown City";
const FALLBACK_STATE: &str = "Unknown State";
const FALLBACK_ZIP: &str = "00000";
const FALLBACK_COUNTRY: &str = "Unknown Country";

/// Splits a free-text location ("Street, City, State, Zip, Country") into
/// address components. Missing trailing components get explicit
/// placeholders; fewer than two usable parts is rejected.
pub fn parse_location(raw: &str) -> Result<Address, AppError> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();

    let usable = parts.iter().filter(|p| !p.is_empty()).count();
    if usable < 2 {
        return Err(AppError::Validation(
            "location must contain at least a street and a city, separated by commas".into(),
        ));
    }

    let component = |idx: usize, fallback: &str| {
        parts
            .get(idx)
            .filter(|p| !p.is_empty())
            .map(|p| p.to_string())
            .unwrap_or_else(|| fallback.to_string())
    };

    Ok(Address {
        street: component(0, FALLBACK_STREET),
        city: component(1, FALLBACK_CITY),
        state: component(2, FALLBACK_STATE),
        zip_code: component(3, FALLBACK_ZIP),
        country: component(4, FALLBACK_COUNTRY),
    })
}
