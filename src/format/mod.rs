// ClipDump - Module format
// Identification des formats et forme des charges utiles
//
// - `catalog` : fonction totale identifiant -> nom affichable, recherche
//               inverse et classement par plage d'identifiants.
// - `decode`  : mise en forme des blocs CF_UNICODETEXT et CF_LOCALE.
// - `payload` : union etiquetee des formes de charge (octets, texte,
//               liste de fichiers, scalaire, valeur opaque).
//
// # Portabilite
// Ce module est en pur Rust, sans dependance Win32.

/// Noms des formats connus et repli pour les formats inconnus.
pub mod catalog;
/// Mise en forme des blocs natifs (texte UTF-16, LCID).
pub mod decode;
/// Formes possibles de la charge d'un format.
pub mod payload;

pub use catalog::{FormatClass, FormatName};
pub use payload::Payload;
