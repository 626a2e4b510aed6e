// ClipDump - Charge utile d'un format
//
// Une charge peut prendre plusieurs formes natives sans rapport entre
// elles. Elles sont reunies dans l'union etiquetee `Payload`, produite
// par le backend du presse-papiers et consommee uniquement par
// l'encodeur de dump. L'extracteur ne regarde jamais la forme.
//
// # Portabilite
// Ce module est en pur Rust, sans dependance Win32.

use std::path::PathBuf;

/// Donnees associees a un format du presse-papiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Bloc memoire brut
    Bytes(Vec<u8>),
    /// Texte natif (CF_UNICODETEXT)
    Text(String),
    /// Liste ordonnee de chemins (CF_HDROP)
    FileList(Vec<PathBuf>),
    /// Petit scalaire (identifiant de locale CF_LOCALE)
    Scalar(u32),
    /// Valeur opaque dont seule une description est disponible (handle GDI, etc.)
    Opaque(String),
}

impl Payload {
    /// Libelle semantique de la forme de la charge.
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Bytes(_) => "bytes",
            Payload::Text(_) => "text",
            Payload::FileList(_) => "file list",
            Payload::Scalar(_) => "scalar",
            Payload::Opaque(_) => "opaque",
        }
    }

    /// Taille indicative pour les logs (octets, caracteres ou elements).
    pub fn len(&self) -> usize {
        match self {
            Payload::Bytes(b) => b.len(),
            Payload::Text(t) => t.chars().count(),
            Payload::FileList(paths) => paths.len(),
            Payload::Scalar(_) => 1,
            Payload::Opaque(_) => 0,
        }
    }

    /// Indique si la charge est vide.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
