//! Client-side request validation

use log::{debug, error};
use std::ops::RangeInclusive;

const TEMPERATURE_RANGE: RangeInclusive<f64> = 0.0..=2.0;
const PENALTY_RANGE: RangeInclusive<f64> = -2.0..=2.0;
const TOP_P_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Absent values take the provider default, which is always in range.
/// NaN is never contained in a range.
fn in_range(value: Option<f64>, range: &RangeInclusive<f64>) -> bool
{   value.map_or(true, |v| range.contains(&v))
}

/// Check a request before it goes on the wire.
///
/// The first failing check wins: messages, model, roles, temperature,
/// presence penalty, frequency penalty, top_p.
pub fn validate(
  req: &crate::request::ChatCompletionRequest
) -> Result<(), crate::error::Error>
{   debug!("Validating request for model: {}", req.model);

    if req.messages.is_empty()
    {   error!("Request has no messages");
        return Err(crate::error::Error::NoMessages);
    }

    if !req.model.is_supported()
    {   error!("Unsupported model: {}", req.model);
        return Err(crate::error::Error::InvalidModel);
    }

    if let Some(message) = req.messages.iter()
      .find(|m| !m.role.is_known())
    {   error!("Invalid message role: {}", message.role);
        return Err(crate::error::Error::InvalidRole);
    }

    if !in_range(req.temperature, &TEMPERATURE_RANGE)
    {   error!("Temperature out of range: {:?}", req.temperature);
        return Err(crate::error::Error::InvalidTemperature);
    }

    if !in_range(req.presence_penalty, &PENALTY_RANGE)
    {   error!(
          "Presence penalty out of range: {:?}",
          req.presence_penalty
        );
        return Err(crate::error::Error::InvalidPresencePenalty);
    }

    if !in_range(req.frequency_penalty, &PENALTY_RANGE)
    {   error!(
          "Frequency penalty out of range: {:?}",
          req.frequency_penalty
        );
        return Err(crate::error::Error::InvalidFrequencyPenalty);
    }

    // serde_json writes NaN/inf as null, which would silently drop it
    if !in_range(req.top_p, &TOP_P_RANGE)
    {   error!("top_p out of range: {:?}", req.top_p);
        return Err(crate::error::Error::InvalidTopP);
    }

    Ok(())
}
