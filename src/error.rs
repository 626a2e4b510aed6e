// ClipDump - Types d'erreur centralises
//
// Ce module definit l'enumeration `CdError`, l'enumeration `FetchError`
// et le type alias `CdResult<T>` utilises dans toute l'application.
//
// # Categories d'erreurs
// - `Acquire`    : presse-papiers indisponible (fatal pour la passe)
// - `Fetch`      : la charge d'un format n'a pas pu etre lue (recuperable)
// - `Write`      : un artefact n'a pas pu etre ecrit (recuperable)
// - `Unexpected` : toute autre defaillance pendant l'enumeration
//
// Les erreurs par format sont converties en lignes de log et en entrees
// du rapport. Seules `Acquire` et `Unexpected` remontent au point d'entree,
// et toujours apres la liberation du presse-papiers.
//
// Le `Display` de chaque variante porte un prefixe entre crochets pour
// faciliter le diagnostic dans les logs.

use std::path::PathBuf;

use thiserror::Error;

use crate::constants::FormatId;

/// Raison pour laquelle la charge d'un format n'a pas pu etre lue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Format annonce mais non rendu (format synthetise, rendu differe refuse)
    #[error("format advertised but no data rendered (code={code})")]
    NoData { code: u32 },
    /// Handle obtenu mais inexploitable (verrouillage memoire impossible, etc.)
    #[error("data handle is not accessible: {reason}")]
    Inaccessible { reason: String },
    /// Autre echec du fournisseur
    #[error("clipboard provider failure: {0}")]
    Provider(String),
}

/// Enumeration de toutes les erreurs possibles dans ClipDump.
#[derive(Debug, Error)]
pub enum CdError {
    /// Presse-papiers indisponible (tenu par un autre processus, plateforme non supportee)
    #[error("[Clipboard] {0}")]
    Acquire(String),
    /// Lecture de la charge d'un format impossible
    #[error("[Fetch] format {id}: {source}")]
    Fetch {
        id: FormatId,
        #[source]
        source: FetchError,
    },
    /// Ecriture d'un artefact impossible
    #[error("[Storage] {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Defaillance imprevue pendant l'enumeration
    #[error("[Internal] {0}")]
    Unexpected(String),
}

/// Type Result specialise pour ClipDump.
pub type CdResult<T> = Result<T, CdError>;
