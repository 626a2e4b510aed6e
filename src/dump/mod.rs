// ClipDump - Module dump
// Serialisation des charges et ecriture des artefacts
//
// # Sous-modules
// - `hexdump` : rendu offset + hex + gouttiere ASCII, 16 octets par ligne
// - `encoder` : choix de la representation selon la forme de la charge
//               et le mode (hex, raw, repli textuel). Ne peut pas echouer.
// - `writer`  : assainissement des noms, horodatage de passe, creation
//               des fichiers. Seul point d'echec d'un dump.

/// Choix de la representation ecrite d'une charge.
pub mod encoder;
/// Rendu hex dump annote.
pub mod hexdump;
/// Nommage et ecriture des fichiers d'artefacts.
pub mod writer;

pub use encoder::{encode, DumpMode};
pub use hexdump::hex_dump;
pub use writer::ArtifactWriter;
