// ClipDump - Module clipboard
// Inspection du presse-papiers et ecriture des artefacts
//
// # Sous-modules
// - `backend`     : trait `ClipboardBackend`, seule frontiere vers le systeme
// - `session`     : ouverture/fermeture appariees (RAII)
// - `extractor`   : passe d'inspection acquire/enumerate/release
// - `report`      : resultat par format et resume de fin de passe
// - `memory`      : presse-papiers scripte (tests uniquement)
// - `windows`     : backend Win32 (Windows uniquement)
// - `unsupported` : backend des autres plateformes
//
// # Flux
// ```text
// Backend -> Session -> Extractor -> encode -> ArtifactWriter -> fichiers
// ```

/// Capacite presse-papiers.
pub mod backend;
/// Extracteur de formats.
pub mod extractor;
/// Backend en memoire.
#[cfg(test)]
mod memory;
/// Rapport d'inspection.
pub mod report;
/// Session RAII.
pub mod session;
/// Backend des plateformes sans enumeration native.
#[cfg(not(windows))]
pub mod unsupported;
/// Backend Win32.
#[cfg(windows)]
pub mod windows;

pub use backend::ClipboardBackend;
pub use extractor::{ClipboardExtractor, ExtractorState};
pub use report::{FormatOutcome, FormatResult, InspectionReport};
pub use session::ClipboardSession;

/// Presse-papiers de la plateforme courante.
#[cfg(windows)]
pub type SystemClipboard = windows::Win32Clipboard;

/// Presse-papiers de la plateforme courante.
#[cfg(not(windows))]
pub type SystemClipboard = unsupported::UnsupportedClipboard;
