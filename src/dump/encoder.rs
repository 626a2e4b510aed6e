// ClipDump - Encodeur de dump
// Convertit une charge en contenu d'artefact
//
// La forme de la charge est resolue ici, une seule fois :
// - `Payload::Bytes` en mode hex : hex dump annote (voir hexdump.rs)
// - `Payload::Bytes` en mode raw : octets inchanges
// - toute autre forme, quel que soit le mode : ligne d'en-tete
//   `# payload: <kind>` suivie du rendu textuel, encode en UTF-8
//
// L'encodage ne peut pas echouer ; seule l'ecriture sur disque
// (writer.rs) peut produire une erreur.

use std::fmt;

use crate::constants::TEXT_FALLBACK_HEADER;
use crate::dump::hexdump::hex_dump;
use crate::format::Payload;

/// Representation ecrite pour les charges binaires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DumpMode {
    /// Listing hexadecimal annote
    #[default]
    Hex,
    /// Octets bruts
    Raw,
}

impl DumpMode {
    /// Parse depuis une chaine.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hex" => Some(Self::Hex),
            "raw" => Some(Self::Raw),
            _ => None,
        }
    }

    /// Serialise en chaine.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Hex => "hex",
            Self::Raw => "raw",
        }
    }
}

impl fmt::Display for DumpMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encode une charge en contenu d'artefact.
pub fn encode(payload: &Payload, mode: DumpMode) -> Vec<u8> {
    let body = match payload {
        Payload::Bytes(data) => {
            return match mode {
                DumpMode::Hex => hex_dump(data).into_bytes(),
                DumpMode::Raw => data.clone(),
            };
        }
        Payload::Text(text) if text.ends_with('\n') => text.clone(),
        Payload::Text(text) => format!("{}\n", text),
        Payload::FileList(paths) => paths
            .iter()
            .map(|p| format!("{}\n", p.to_string_lossy()))
            .collect(),
        Payload::Scalar(value) => format!("{}\n", value),
        Payload::Opaque(description) => format!("{}\n", description),
    };
    text_fallback(payload.kind(), &body).into_bytes()
}

/// En-tete `# payload: <kind>` suivi des lignes deja terminees par `\n`.
fn text_fallback(kind: &str, body: &str) -> String {
    format!("{} {}\n{}", TEXT_FALLBACK_HEADER, kind, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_hex_mode_bytes() {
        let out = encode(&Payload::Bytes(b"Hi!".to_vec()), DumpMode::Hex);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "00000000: 48 69 21                                           Hi!\n"
        );
    }

    #[test]
    fn test_raw_mode_is_identity() {
        let inputs: Vec<Vec<u8>> = vec![
            Vec::new(),
            b"Hi!".to_vec(),
            (0u8..=255).collect(),
            vec![0, 0, 0xFF, 0x0A, 0x0D],
        ];
        for input in inputs {
            assert_eq!(encode(&Payload::Bytes(input.clone()), DumpMode::Raw), input);
        }
    }

    #[test]
    fn test_file_list_fallback() {
        let payload = Payload::FileList(vec![PathBuf::from("C:\\a.txt"), PathBuf::from("C:\\b.txt")]);
        for mode in [DumpMode::Hex, DumpMode::Raw] {
            let out = String::from_utf8(encode(&payload, mode)).unwrap();
            assert_eq!(out, "# payload: file list\nC:\\a.txt\nC:\\b.txt\n");
        }
    }

    #[test]
    fn test_text_fallback() {
        let out = encode(&Payload::Text("Bonjour\nmonde".into()), DumpMode::Hex);
        assert_eq!(String::from_utf8(out).unwrap(), "# payload: text\nBonjour\nmonde\n");

        let out = encode(&Payload::Text("fin\n".into()), DumpMode::Raw);
        assert_eq!(String::from_utf8(out).unwrap(), "# payload: text\nfin\n");
    }

    #[test]
    fn test_scalar_is_decimal() {
        let out = encode(&Payload::Scalar(0x0409), DumpMode::Hex);
        assert_eq!(String::from_utf8(out).unwrap(), "# payload: scalar\n1033\n");
    }

    #[test]
    fn test_opaque_fallback() {
        let out = encode(&Payload::Opaque("GDI handle 0x1a2b".into()), DumpMode::Raw);
        assert_eq!(String::from_utf8(out).unwrap(), "# payload: opaque\nGDI handle 0x1a2b\n");
    }

    #[test]
    fn test_non_byte_payloads_ignore_mode() {
        let payloads = [
            Payload::Text("00000000: 41".into()),
            Payload::FileList(vec![PathBuf::from("C:\\a.txt")]),
            Payload::Scalar(7),
            Payload::Opaque("handle".into()),
        ];
        for payload in &payloads {
            let hex = encode(payload, DumpMode::Hex);
            assert_eq!(hex, encode(payload, DumpMode::Raw));
            let text = String::from_utf8(hex).unwrap();
            assert_eq!(text.lines().next(), Some(format!("# payload: {}", payload.kind()).as_str()));
            assert!(!text.contains("# payload: bytes"));
        }
    }

    #[test]
    fn test_empty_non_byte_payloads() {
        let out = encode(&Payload::FileList(Vec::new()), DumpMode::Hex);
        assert_eq!(String::from_utf8(out).unwrap(), "# payload: file list\n");
        let out = encode(&Payload::Text(String::new()), DumpMode::Hex);
        assert_eq!(String::from_utf8(out).unwrap(), "# payload: text\n\n");
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(DumpMode::parse("hex"), Some(DumpMode::Hex));
        assert_eq!(DumpMode::parse(" RAW "), Some(DumpMode::Raw));
        assert_eq!(DumpMode::parse("bin"), None);
        assert_eq!(DumpMode::parse("base64"), None);
        assert_eq!(DumpMode::default(), DumpMode::Hex);
        assert_eq!(DumpMode::Raw.to_string(), "raw");
    }
}
