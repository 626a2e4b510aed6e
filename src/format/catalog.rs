// ClipDump - Catalogue des formats du presse-papiers
// Associe chaque identifiant de format a un nom affichable
//
// L'espace des identifiants est ouvert : une partie est reservee par la
// plateforme (formats standard, plages privee et GDI), le reste est
// attribue dynamiquement (RegisterClipboardFormat) ou inconnu.
// `name_of` est donc une fonction totale : tout identifiant hors de la
// table obtient un nom de repli `UNKNOWN_FORMAT_<id>` qui embarque la
// valeur numerique, ce qui garantit des noms de fichiers distincts.
//
// Les noms canoniques ne contiennent que `[A-Za-z0-9_]` pour rester
// identiques apres assainissement.
//
// # Portabilite
// Ce module est en pur Rust, sans dependance Win32.

use std::fmt;

use crate::constants::*;

/// Table des formats connus (identifiant, nom canonique).
const KNOWN_FORMATS: &[(FormatId, &str)] = &[
    (CF_TEXT, "CF_TEXT"),
    (CF_BITMAP, "CF_BITMAP"),
    (CF_METAFILEPICT, "CF_METAFILEPICT"),
    (CF_SYLK, "CF_SYLK"),
    (CF_DIF, "CF_DIF"),
    (CF_TIFF, "CF_TIFF"),
    (CF_OEMTEXT, "CF_OEMTEXT"),
    (CF_DIB, "CF_DIB"),
    (CF_PALETTE, "CF_PALETTE"),
    (CF_PENDATA, "CF_PENDATA"),
    (CF_RIFF, "CF_RIFF"),
    (CF_WAVE, "CF_WAVE"),
    (CF_UNICODETEXT, "CF_UNICODETEXT"),
    (CF_ENHMETAFILE, "CF_ENHMETAFILE"),
    (CF_HDROP, "CF_HDROP_FileList"),
    (CF_LOCALE, "CF_LOCALE"),
    (CF_DIBV5, "CF_DIBV5"),
    (CF_OWNERDISPLAY, "CF_OWNERDISPLAY"),
    (CF_DSPTEXT, "CF_DSPTEXT"),
    (CF_DSPBITMAP, "CF_DSPBITMAP"),
    (CF_DSPMETAFILEPICT, "CF_DSPMETAFILEPICT"),
    (CF_DSPENHMETAFILE, "CF_DSPENHMETAFILE"),
    (CF_PRIVATEFIRST, "CF_PRIVATEFIRST"),
    (CF_PRIVATELAST, "CF_PRIVATELAST"),
    (CF_GDIOBJFIRST, "CF_GDIOBJFIRST"),
    (CF_GDIOBJLAST, "CF_GDIOBJLAST"),
];

/// Nom affichable d'un format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatName {
    /// Format reserve par la plateforme, nom canonique stable
    Known(&'static str),
    /// Format hors table, nomme d'apres son identifiant
    Unknown(FormatId),
}

impl fmt::Display for FormatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatName::Known(name) => f.write_str(name),
            FormatName::Unknown(id) => write!(f, "{}{}", UNKNOWN_FORMAT_PREFIX, id),
        }
    }
}

/// Plage d'appartenance d'un identifiant de format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatClass {
    /// Format standard (CF_TEXT..CF_DIBV5, formats d'affichage)
    Standard,
    /// Plage privee de l'application proprietaire (CF_PRIVATEFIRST..CF_PRIVATELAST)
    Private,
    /// Objets GDI detruits avec le presse-papiers (CF_GDIOBJFIRST..CF_GDIOBJLAST)
    GdiObject,
    /// Format enregistre dynamiquement (0xC000..0xFFFF)
    Registered,
    /// Identifiant hors de toute plage connue
    Other,
}

impl FormatClass {
    /// Libelle court pour les logs.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Standard => "standard",
            Self::Private => "private",
            Self::GdiObject => "gdi-object",
            Self::Registered => "registered",
            Self::Other => "other",
        }
    }
}

/// Retourne le nom affichable d'un format. Ne peut pas echouer.
pub fn name_of(id: FormatId) -> FormatName {
    KNOWN_FORMATS
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, name)| FormatName::Known(*name))
        .unwrap_or(FormatName::Unknown(id))
}

/// Recherche inverse : nom canonique ou `UNKNOWN_FORMAT_<id>` vers identifiant.
pub fn id_of(name: &str) -> Option<FormatId> {
    if let Some((id, _)) = KNOWN_FORMATS.iter().find(|(_, known)| *known == name) {
        return Some(*id);
    }
    let digits = name.strip_prefix(UNKNOWN_FORMAT_PREFIX)?;
    let id: FormatId = digits.parse().ok()?;
    // Un identifiant connu n'a jamais de nom de repli
    match name_of(id) {
        FormatName::Unknown(_) => Some(id),
        FormatName::Known(_) => None,
    }
}

/// Classe un identifiant selon sa plage.
pub fn classify(id: FormatId) -> FormatClass {
    match id {
        CF_TEXT..=CF_DIBV5 => FormatClass::Standard,
        CF_OWNERDISPLAY..=CF_DSPMETAFILEPICT | CF_DSPENHMETAFILE => FormatClass::Standard,
        CF_PRIVATEFIRST..=CF_PRIVATELAST => FormatClass::Private,
        CF_GDIOBJFIRST..=CF_GDIOBJLAST => FormatClass::GdiObject,
        CF_REGISTERED_FIRST..=CF_REGISTERED_LAST => FormatClass::Registered,
        _ => FormatClass::Other,
    }
}

/// Identifiants de la table, dans l'ordre de declaration.
pub fn known_ids() -> impl Iterator<Item = FormatId> {
    KNOWN_FORMATS.iter().map(|(id, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dump::writer::sanitize_name;
    use std::collections::HashSet;

    #[test]
    fn test_known_names() {
        assert_eq!(name_of(CF_TEXT), FormatName::Known("CF_TEXT"));
        assert_eq!(name_of(CF_UNICODETEXT).to_string(), "CF_UNICODETEXT");
        assert_eq!(name_of(CF_HDROP).to_string(), "CF_HDROP_FileList");
        assert_eq!(name_of(CF_DSPENHMETAFILE).to_string(), "CF_DSPENHMETAFILE");
    }

    #[test]
    fn test_unknown_name_embeds_id() {
        let name = name_of(49382);
        assert_eq!(name, FormatName::Unknown(49382));
        assert_eq!(name.to_string(), "UNKNOWN_FORMAT_49382");
        assert_eq!(name_of(0).to_string(), "UNKNOWN_FORMAT_0");
        assert_eq!(name_of(u32::MAX).to_string(), format!("UNKNOWN_FORMAT_{}", u32::MAX));
    }

    #[test]
    fn test_known_names_survive_sanitizing() {
        for id in known_ids() {
            let name = name_of(id).to_string();
            assert!(!name.is_empty());
            assert_eq!(sanitize_name(&name), name);
        }
    }

    #[test]
    fn test_known_sanitized_names_distinct() {
        let names: HashSet<String> = known_ids()
            .map(|id| sanitize_name(&name_of(id).to_string()))
            .collect();
        assert_eq!(names.len(), known_ids().count());
    }

    #[test]
    fn test_unknown_sanitized_names_distinct() {
        let ids = (18..0x80).chain(0x201..0x210).chain(0xC000..0xC100);
        let mut seen = HashSet::new();
        for id in ids {
            let name = sanitize_name(&name_of(id).to_string());
            assert!(seen.insert(name), "collision for {}", id);
        }
        // Aucun nom de repli ne collisionne avec un nom connu
        for id in known_ids() {
            assert!(!seen.contains(&name_of(id).to_string()));
        }
    }

    #[test]
    fn test_reverse_lookup() {
        for id in known_ids() {
            assert_eq!(id_of(&name_of(id).to_string()), Some(id));
        }
        assert_eq!(id_of("UNKNOWN_FORMAT_49382"), Some(49382));
        assert_eq!(id_of("UNKNOWN_FORMAT_13"), None);
        assert_eq!(id_of("UNKNOWN_FORMAT_"), None);
        assert_eq!(id_of("HTML Format"), None);
    }

    #[test]
    fn test_classify_ranges() {
        assert_eq!(classify(CF_TEXT), FormatClass::Standard);
        assert_eq!(classify(CF_DIBV5), FormatClass::Standard);
        assert_eq!(classify(CF_DSPTEXT), FormatClass::Standard);
        assert_eq!(classify(CF_DSPENHMETAFILE), FormatClass::Standard);
        assert_eq!(classify(0x0284), FormatClass::Private);
        assert_eq!(classify(0x0301), FormatClass::GdiObject);
        assert_eq!(classify(49382), FormatClass::Registered);
        assert_eq!(classify(0), FormatClass::Other);
        assert_eq!(classify(0x0084), FormatClass::Other);
        assert_eq!(classify(0x1_0000), FormatClass::Other);
        assert_eq!(FormatClass::Registered.as_str(), "registered");
    }
}
