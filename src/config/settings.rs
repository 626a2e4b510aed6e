// ClipDump - Structure de configuration et valeurs par defaut
//
// `Settings` regroupe les parametres d'une passe d'inspection. Aucune
// configuration n'est persistee : les valeurs viennent de variables
// d'environnement lues au demarrage.
//
// # Variables
// ```text
// CLIPDUMP_MODE       hex | raw                 (defaut : hex)
// CLIPDUMP_TIMESTAMP  booleen                   (defaut : true)
// CLIPDUMP_OUT_DIR    repertoire de sortie      (defaut : repertoire courant)
// CLIPDUMP_VERBOSE    booleen                   (defaut : false)
// ```
// Une valeur absente conserve le defaut. Une valeur invalide conserve
// aussi le defaut et produit un avertissement.
//
// # Portabilite
// Ce module est en pur Rust, sans dependance Win32.

use std::path::PathBuf;

use tracing::warn;

use crate::config::parser;
use crate::constants::*;
use crate::dump::DumpMode;

/// Configuration d'une execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Representation des charges binaires
    pub mode: DumpMode,
    /// Horodatage des noms d'artefacts
    pub timestamp: bool,
    /// Repertoire de sortie
    pub output_dir: PathBuf,
    /// Journalisation DEBUG
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: DumpMode::Hex,
            timestamp: true,
            output_dir: default_output_dir(),
            verbose: false,
        }
    }
}

impl Settings {
    /// Charge la configuration depuis l'environnement du processus.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Charge la configuration depuis une source cle-valeur quelconque.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(raw) = lookup(ENV_MODE) {
            match parser::parse_mode(&raw) {
                Some(mode) => settings.mode = mode,
                None => warn!("Ignoring {}={:?}: expected hex or raw", ENV_MODE, raw),
            }
        }
        if let Some(raw) = lookup(ENV_TIMESTAMP) {
            match parser::parse_bool(&raw) {
                Some(v) => settings.timestamp = v,
                None => warn!("Ignoring {}={:?}: expected a boolean", ENV_TIMESTAMP, raw),
            }
        }
        if let Some(raw) = lookup(ENV_OUT_DIR) {
            match parser::parse_dir(&raw) {
                Some(dir) => settings.output_dir = dir,
                None => warn!("Ignoring empty {}", ENV_OUT_DIR),
            }
        }
        settings.verbose = verbose_from(&lookup);
        settings
    }

    /// Indique si la journalisation detaillee est demandee, sans charger
    /// le reste de la configuration (le subscriber n'existe pas encore).
    pub fn verbose_requested() -> bool {
        verbose_from(&|key: &str| std::env::var(key).ok())
    }
}

fn verbose_from<F>(lookup: &F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(ENV_VERBOSE)
        .and_then(|v| parser::parse_bool(&v))
        .unwrap_or(false)
}

/// Repertoire courant, ou `.` s'il est illisible.
fn default_output_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
