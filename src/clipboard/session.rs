// ClipDump - Session presse-papiers
//
// `ClipboardSession` detient le backend et l'etat d'ouverture. Le
// presse-papiers est ferme exactement une fois par ouverture reussie,
// soit par `release`, soit par `Drop` (retour anticipe, erreur, panique).
// `release` sans ouverture prealable, ou repete, est sans effet.
// La session n'est pas reentrante : une seconde ouverture est refusee.

use crate::clipboard::backend::ClipboardBackend;
use crate::constants::FormatId;
use crate::error::{CdError, CdResult, FetchError};
use crate::format::Payload;

/// Acces exclusif au presse-papiers pour la duree d'une passe.
pub struct ClipboardSession<B: ClipboardBackend> {
    backend: B,
    open: bool,
}

impl<B: ClipboardBackend> ClipboardSession<B> {
    /// Cree une session fermee autour d'un backend.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            open: false,
        }
    }

    /// Ouvre le presse-papiers.
    ///
    /// # Errors
    /// - `CdError::Acquire` si le presse-papiers est indisponible
    /// - `CdError::Unexpected` si la session est deja ouverte
    pub fn acquire(&mut self) -> CdResult<()> {
        if self.open {
            return Err(CdError::Unexpected("clipboard session is already open".into()));
        }
        self.backend.open()?;
        self.open = true;
        tracing::debug!("clipboard opened");
        Ok(())
    }

    /// Indique si la session tient le presse-papiers.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Format suivant le curseur (voir `ClipboardBackend::next_format`).
    pub fn next_format(&mut self, cursor: Option<FormatId>) -> CdResult<Option<FormatId>> {
        if !self.open {
            return Err(CdError::Unexpected("clipboard session is not open".into()));
        }
        self.backend.next_format(cursor)
    }

    /// Charge d'un format.
    pub fn get_data(&mut self, id: FormatId) -> Result<Payload, FetchError> {
        if !self.open {
            return Err(FetchError::Provider("clipboard session is not open".into()));
        }
        self.backend.get_data(id)
    }

    /// Nom enregistre d'un format.
    pub fn registered_name(&mut self, id: FormatId) -> Option<String> {
        if !self.open {
            return None;
        }
        self.backend.registered_name(id)
    }

    /// Ferme le presse-papiers. Sans effet si la session n'est pas ouverte.
    pub fn release(&mut self) {
        if self.open {
            self.open = false;
            self.backend.close();
            tracing::debug!("clipboard closed");
        }
    }

    /// Acces en lecture au backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: ClipboardBackend> Drop for ClipboardSession<B> {
    fn drop(&mut self) {
        self.release();
    }
}
