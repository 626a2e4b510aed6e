// ClipDump - Parseur de valeurs de configuration
// Conversion des valeurs brutes (variables d'environnement) en types
//
// Chaque fonction retourne `None` pour une valeur invalide : l'appelant
// conserve alors sa valeur par defaut. Les espaces autour de la valeur
// sont ignores, la casse aussi pour les mots-cles.
//
// # Portabilite
// Ce module est en pur Rust, sans dependance Win32.

use std::path::PathBuf;

use crate::dump::DumpMode;

/// Parse une valeur comme booleen.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// Parse un mode de dump (`hex`, `raw`).
pub fn parse_mode(value: &str) -> Option<DumpMode> {
    DumpMode::parse(value)
}

/// Parse un repertoire. Une valeur vide est refusee.
pub fn parse_dir(value: &str) -> Option<PathBuf> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}
