// ClipDump - Capacite presse-papiers
//
// Interface etroite vers le presse-papiers du systeme. L'extracteur ne
// connait que ce trait ; les appels plateforme sont isoles dans les
// implementations (`windows`, `memory`, `unsupported`).
//
// # Contrat
// - `open` donne un acces exclusif pour une passe ; echec = `CdError::Acquire`
// - `next_format(None)` retourne le premier format, `next_format(Some(c))`
//   le format suivant `c` ; `Ok(None)` marque la fin de la liste. La liste
//   est finie et parcourue vers l'avant uniquement pendant une session.
// - `get_data` lit la charge d'un format ; un echec ne concerne que ce format
// - `close` libere l'acces ; appele exactement une fois par `open` reussi

use crate::constants::FormatId;
use crate::error::{CdResult, FetchError};
use crate::format::Payload;

/// Acces en lecture au presse-papiers du systeme.
pub trait ClipboardBackend {
    /// Ouvre le presse-papiers pour une passe d'inspection.
    fn open(&mut self) -> CdResult<()>;

    /// Retourne le format suivant le curseur, ou `None` en fin de liste.
    fn next_format(&mut self, cursor: Option<FormatId>) -> CdResult<Option<FormatId>>;

    /// Lit la charge d'un format.
    fn get_data(&mut self, id: FormatId) -> Result<Payload, FetchError>;

    /// Ferme le presse-papiers.
    fn close(&mut self);

    /// Nom sous lequel un format a ete enregistre, s'il existe.
    fn registered_name(&mut self, _id: FormatId) -> Option<String> {
        None
    }
}
