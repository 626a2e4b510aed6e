// ClipDump - Presse-papiers en memoire
//
// Backend scripte : une liste ordonnee de formats, chacun associe a une
// charge ou a un echec de lecture. Sert de double de test pour
// l'extracteur et la session, et compte les ouvertures/fermetures pour
// verifier l'appariement open/close.
//
// # Portabilite
// Ce module est en pur Rust, sans dependance Win32.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::clipboard::backend::ClipboardBackend;
use crate::constants::FormatId;
use crate::error::{CdError, CdResult, FetchError};
use crate::format::Payload;

/// Presse-papiers simule.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    formats: Vec<(FormatId, Result<Payload, FetchError>)>,
    registered: HashMap<FormatId, String>,
    busy: bool,
    stall_after: Option<FormatId>,
    open: bool,
    open_count: usize,
    close_count: Rc<Cell<usize>>,
    fetched: Vec<FormatId>,
}

impl MemoryClipboard {
    /// Presse-papiers vide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute un format lisible.
    pub fn with_format(mut self, id: FormatId, payload: Payload) -> Self {
        self.formats.push((id, Ok(payload)));
        self
    }

    /// Ajoute un format annonce dont la lecture echoue.
    pub fn with_failing_format(mut self, id: FormatId, error: FetchError) -> Self {
        self.formats.push((id, Err(error)));
        self
    }

    /// Associe un nom enregistre a un format.
    pub fn with_registered_name(mut self, id: FormatId, name: &str) -> Self {
        self.registered.insert(id, name.to_string());
        self
    }

    /// Simule un presse-papiers tenu par un autre processus.
    pub fn busy(mut self) -> Self {
        self.busy = true;
        self
    }

    /// Simule une enumeration qui n'avance plus apres `id`.
    pub fn stall_after(mut self, id: FormatId) -> Self {
        self.stall_after = Some(id);
        self
    }

    /// Indique si le presse-papiers est ouvert.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Nombre d'ouvertures reussies.
    pub fn open_count(&self) -> usize {
        self.open_count
    }

    /// Nombre de fermetures.
    pub fn close_count(&self) -> usize {
        self.close_count.get()
    }

    /// Compteur de fermetures partage, lisible apres destruction du backend.
    pub fn close_tracker(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.close_count)
    }

    /// Formats lus, dans l'ordre des appels a `get_data`.
    pub fn fetched(&self) -> &[FormatId] {
        &self.fetched
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn open(&mut self) -> CdResult<()> {
        if self.busy {
            return Err(CdError::Acquire("clipboard is held by another process".into()));
        }
        if self.open {
            return Err(CdError::Unexpected("clipboard already open".into()));
        }
        self.open = true;
        self.open_count += 1;
        Ok(())
    }

    fn next_format(&mut self, cursor: Option<FormatId>) -> CdResult<Option<FormatId>> {
        if !self.open {
            return Err(CdError::Unexpected("clipboard is not open".into()));
        }
        let Some(cursor) = cursor else {
            return Ok(self.formats.first().map(|(id, _)| *id));
        };
        if self.stall_after == Some(cursor) {
            return Ok(Some(cursor));
        }
        let pos = self
            .formats
            .iter()
            .position(|(id, _)| *id == cursor)
            .ok_or_else(|| CdError::Unexpected(format!("cursor {} is not on the clipboard", cursor)))?;
        Ok(self.formats.get(pos + 1).map(|(id, _)| *id))
    }

    fn get_data(&mut self, id: FormatId) -> Result<Payload, FetchError> {
        if !self.open {
            return Err(FetchError::Provider("clipboard is not open".into()));
        }
        self.fetched.push(id);
        self.formats
            .iter()
            .find(|(known, _)| *known == id)
            .map(|(_, result)| result.clone())
            .unwrap_or(Err(FetchError::NoData { code: 0 }))
    }

    fn close(&mut self) {
        self.open = false;
        self.close_count.set(self.close_count.get() + 1);
    }

    fn registered_name(&mut self, id: FormatId) -> Option<String> {
        self.registered.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_order() {
        let mut cb = MemoryClipboard::new()
            .with_format(13, Payload::Text("a".into()))
            .with_format(1, Payload::Bytes(b"a\0".to_vec()))
            .with_format(16, Payload::Scalar(1033));
        cb.open().unwrap();
        assert_eq!(cb.next_format(None).unwrap(), Some(13));
        assert_eq!(cb.next_format(Some(13)).unwrap(), Some(1));
        assert_eq!(cb.next_format(Some(1)).unwrap(), Some(16));
        assert_eq!(cb.next_format(Some(16)).unwrap(), None);
        cb.close();
    }

    #[test]
    fn test_busy_refuses_open() {
        let mut cb = MemoryClipboard::new().busy();
        assert!(matches!(cb.open(), Err(CdError::Acquire(_))));
        assert_eq!(cb.open_count(), 0);
    }

    #[test]
    fn test_closed_clipboard_refuses_reads() {
        let mut cb = MemoryClipboard::new().with_format(1, Payload::Bytes(vec![1]));
        assert!(cb.next_format(None).is_err());
        assert!(cb.get_data(1).is_err());
    }
}
