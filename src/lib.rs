// ClipDump - Arbre de modules (crate library)
//
// Ce fichier constitue le point d'entree de la crate library de ClipDump.
// Il re-exporte tous les modules pour permettre l'acces depuis le binaire
// et les tests.
//
// # Modules
// - `clipboard` : backend systeme, session RAII, extracteur, rapport
// - `config`    : parametres d'execution (variables d'environnement)
// - `constants` : identifiants de formats, mise en page, noms de variables
// - `dump`      : hex dump, encodage des charges, ecriture des artefacts
// - `error`     : types d'erreur centralises (CdError, FetchError, CdResult)
// - `format`    : catalogue des formats standard, forme des charges
// - `logging`   : subscriber tracing
// - `system`    : helpers Win32 (Windows uniquement)

/// Inspection du presse-papiers.
pub mod clipboard;
/// Parametres d'execution.
pub mod config;
/// Constantes globales.
pub mod constants;
/// Encodage et ecriture des artefacts.
pub mod dump;
/// Types d'erreur centralises.
pub mod error;
/// Catalogue des formats et charges.
pub mod format;
/// Journalisation.
pub mod logging;
/// Helpers Win32.
#[cfg(windows)]
pub mod system;
