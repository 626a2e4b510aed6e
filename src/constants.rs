// ClipDump - Constantes globales
//
// Ce module centralise toutes les constantes de l'application :
// - Identifiants des formats standard du presse-papiers (CF_*)
// - Bornes des plages d'identifiants (prives, objets GDI, enregistres)
// - Mise en page du hex dump
// - Nommage des fichiers d'artefacts
// - Noms des variables d'environnement de configuration
// - Parametres d'ouverture du presse-papiers
//
// Les valeurs des formats suivent winuser.h. Elles sont declarees ici
// plutot que prises dans windows-sys pour que le catalogue reste
// compilable et testable sur toutes les plateformes.

/// Identifiant d'un format du presse-papiers.
pub type FormatId = u32;

// --- Formats standard ---
pub const CF_TEXT: FormatId = 1;
pub const CF_BITMAP: FormatId = 2;
pub const CF_METAFILEPICT: FormatId = 3;
pub const CF_SYLK: FormatId = 4;
pub const CF_DIF: FormatId = 5;
pub const CF_TIFF: FormatId = 6;
pub const CF_OEMTEXT: FormatId = 7;
pub const CF_DIB: FormatId = 8;
pub const CF_PALETTE: FormatId = 9;
pub const CF_PENDATA: FormatId = 10;
pub const CF_RIFF: FormatId = 11;
pub const CF_WAVE: FormatId = 12;
pub const CF_UNICODETEXT: FormatId = 13;
pub const CF_ENHMETAFILE: FormatId = 14;
pub const CF_HDROP: FormatId = 15;
pub const CF_LOCALE: FormatId = 16;
pub const CF_DIBV5: FormatId = 17;

// --- Formats d'affichage ---
pub const CF_OWNERDISPLAY: FormatId = 0x0080;
pub const CF_DSPTEXT: FormatId = 0x0081;
pub const CF_DSPBITMAP: FormatId = 0x0082;
pub const CF_DSPMETAFILEPICT: FormatId = 0x0083;
pub const CF_DSPENHMETAFILE: FormatId = 0x008E;

// --- Plages ---
pub const CF_PRIVATEFIRST: FormatId = 0x0200;
pub const CF_PRIVATELAST: FormatId = 0x02FF;
pub const CF_GDIOBJFIRST: FormatId = 0x0300;
pub const CF_GDIOBJLAST: FormatId = 0x03FF;
/// Premier identifiant attribue par RegisterClipboardFormat
pub const CF_REGISTERED_FIRST: FormatId = 0xC000;
/// Dernier identifiant attribue par RegisterClipboardFormat
pub const CF_REGISTERED_LAST: FormatId = 0xFFFF;

/// Prefixe du nom de repli pour les formats inconnus
pub const UNKNOWN_FORMAT_PREFIX: &str = "UNKNOWN_FORMAT_";

// --- Hex dump ---

/// Nombre d'octets par ligne du hex dump
pub const HEX_BYTES_PER_ROW: usize = 16;

/// Largeur de la colonne hexadecimale, marge de fin comprise
pub const HEX_COLUMN_WIDTH: usize = HEX_BYTES_PER_ROW * 3 + 1;

/// Prefixe de la ligne d'en-tete des charges non binaires
pub const TEXT_FALLBACK_HEADER: &str = "# payload:";

// --- Artefacts ---

/// Prefixe des fichiers d'artefacts
pub const DUMP_FILE_PREFIX: &str = "clipboard_dump";

/// Extension des fichiers d'artefacts
pub const DUMP_FILE_EXTENSION: &str = "hex";

// --- Variables d'environnement ---

/// Mode de dump : `hex` ou `raw`
pub const ENV_MODE: &str = "CLIPDUMP_MODE";

/// Horodatage des noms de fichiers (booleen)
pub const ENV_TIMESTAMP: &str = "CLIPDUMP_TIMESTAMP";

/// Repertoire de sortie des artefacts
pub const ENV_OUT_DIR: &str = "CLIPDUMP_OUT_DIR";

/// Journalisation detaillee (booleen)
pub const ENV_VERBOSE: &str = "CLIPDUMP_VERBOSE";

// --- Ouverture du presse-papiers ---

/// Nombre de tentatives d'OpenClipboard
pub const OPEN_ATTEMPTS: u32 = 5;

/// Delai entre deux tentatives (ms)
pub const OPEN_RETRY_DELAY_MS: u64 = 10;

/// Taille max d'un nom de format enregistre (caracteres UTF-16)
pub const MAX_FORMAT_NAME_LEN: usize = 256;
