// ClipDump - Plateformes non supportees
//
// L'enumeration des formats natifs n'existe que sous Windows. Ailleurs,
// l'ouverture echoue avec `CdError::Acquire` et la passe s'arrete
// proprement avant toute enumeration.

use crate::clipboard::backend::ClipboardBackend;
use crate::constants::FormatId;
use crate::error::{CdError, CdResult, FetchError};
use crate::format::Payload;

/// Backend sans acces au presse-papiers.
#[derive(Debug, Default)]
pub struct UnsupportedClipboard;

impl UnsupportedClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardBackend for UnsupportedClipboard {
    fn open(&mut self) -> CdResult<()> {
        Err(CdError::Acquire(format!(
            "clipboard format enumeration is not available on {}",
            std::env::consts::OS
        )))
    }

    fn next_format(&mut self, _cursor: Option<FormatId>) -> CdResult<Option<FormatId>> {
        Ok(None)
    }

    fn get_data(&mut self, _id: FormatId) -> Result<Payload, FetchError> {
        Err(FetchError::Provider("clipboard is not available".into()))
    }

    fn close(&mut self) {}
}
