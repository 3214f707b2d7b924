//! Device identity and session parameters

use ezto_core::classifier::ExerciseVariant;
use ezto_core::telemetry::MAX_DEVICE_ID_LEN;
use heapless::String;

use super::{required, required_token, ConfigError, RawParams};

/// Maximum location label length
pub const MAX_LOCATION_LEN: usize = 64;

/// Identity of this node and the exercise it is tracking
#[derive(Debug, Clone)]
pub struct DeviceParams {
    /// Identifier written into every document and its key
    pub device_id: String<MAX_DEVICE_ID_LEN>,
    /// Free-form placement label (e.g. which wrist)
    pub location: String<MAX_LOCATION_LEN>,
    /// Exercise performed for the whole session
    pub variant: ExerciseVariant,
}

/// Characters allowed in a device id, which ends up in document keys and
/// request paths
fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl DeviceParams {
    pub(crate) fn load(raw: &RawParams<'_>) -> Result<Self, ConfigError> {
        let device_id = required_token("DEVICE_ID", raw.device_id, is_id_char)?;
        let location = required("DEVICE_LOCATION", raw.location)?;

        let variant = raw.variant.trim();
        if variant.is_empty() {
            return Err(ConfigError::Missing("EXERCISE_VARIANT"));
        }
        let code = variant
            .parse::<i32>()
            .map_err(|_| ConfigError::Invalid("EXERCISE_VARIANT"))?;

        Ok(Self {
            device_id,
            location,
            variant: ExerciseVariant::from_code(code),
        })
    }
}
