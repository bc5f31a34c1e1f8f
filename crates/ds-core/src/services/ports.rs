use crate::error::{DevServicesError, Result};
use crate::models::DevServicesConfig;

/// The fixed listen port, checked against the TCP port range.
///
/// `Ok(None)` means no port was pinned and the caller picks a random one.
pub fn fixed_port(config: &DevServicesConfig) -> Result<Option<u16>> {
    match config.port() {
        None => Ok(None),
        Some(port) => match u16::try_from(port) {
            Ok(p) if p > 0 => Ok(Some(p)),
            _ => Err(DevServicesError::InvalidPort(port)),
        },
    }
}
