// ClipDump - Mise en forme des blocs natifs
//
// Conversion des blocs memoire lus par le backend en `Payload` pour les
// formats dont la forme est connue. Le backend Win32 ne fait que copier
// les octets ; la mise en forme se fait ici, sans appel systeme.
//
// - CF_UNICODETEXT : UTF-16 petit-boutiste, coupe au premier NUL. Un
//   octet final isole (taille impaire) est ignore.
// - CF_LOCALE      : LCID sur les 4 premiers octets. Un bloc plus court
//   est rapporte tel quel en `Payload::Bytes`.
//
// # Portabilite
// Ce module est en pur Rust, sans dependance Win32.

use crate::format::Payload;

/// Decode un bloc CF_UNICODETEXT.
pub fn decode_unicode_text(bytes: &[u8]) -> String {
    let wide: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .take_while(|&c| c != 0)
        .collect();
    String::from_utf16_lossy(&wide)
}

/// Decode un bloc CF_LOCALE.
pub fn decode_locale(bytes: Vec<u8>) -> Payload {
    match bytes.get(..4) {
        Some(lcid) => Payload::Scalar(u32::from_le_bytes([lcid[0], lcid[1], lcid[2], lcid[3]])),
        None => Payload::Bytes(bytes),
    }
}
