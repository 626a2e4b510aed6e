// ClipDump - Ecriture des artefacts
// Nommage et creation des fichiers de dump
//
// # Nom d'un artefact
// ```text
// clipboard_dump_<timestamp>_<NomAssaini>.hex   (horodatage actif)
// clipboard_dump_<NomAssaini>.hex               (horodatage desactive)
// ```
// L'assainissement supprime tout caractere hors de `[A-Za-z0-9_]`.
// L'horodatage (secondes Unix) est pris une fois par passe : tous les
// artefacts d'une meme passe le partagent, deux passes successives ne
// s'ecrasent pas. Sans horodatage, une nouvelle passe remplace les
// artefacts precedents de meme nom.
//
// # Ecriture
// Chaque artefact est cree (jamais complete). L'ecriture passe par un
// fichier temporaire renomme ensuite, un echec ne laisse donc pas
// d'artefact tronque.

use std::fs;
use std::path::PathBuf;

use crate::constants::{DUMP_FILE_EXTENSION, DUMP_FILE_PREFIX};
use crate::error::{CdError, CdResult};

/// Supprime tout caractere hors de `[A-Za-z0-9_]`.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// Construit le nom de fichier d'un artefact.
pub fn artifact_file_name(format_name: &str, timestamp: Option<i64>) -> String {
    let safe = sanitize_name(format_name);
    match timestamp {
        Some(ts) => format!("{}_{}_{}.{}", DUMP_FILE_PREFIX, ts, safe, DUMP_FILE_EXTENSION),
        None => format!("{}_{}.{}", DUMP_FILE_PREFIX, safe, DUMP_FILE_EXTENSION),
    }
}

/// Ecrit les artefacts d'une passe dans un repertoire.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    /// Repertoire de destination
    dir: PathBuf,
    /// Horodatage de la passe (None : noms stables)
    timestamp: Option<i64>,
}

impl ArtifactWriter {
    /// Cree un writer pour le repertoire donne.
    pub fn new(dir: impl Into<PathBuf>, timestamp: Option<i64>) -> Self {
        Self {
            dir: dir.into(),
            timestamp,
        }
    }

    /// Horodatage de la passe.
    pub fn timestamp(&self) -> Option<i64> {
        self.timestamp
    }

    /// Chemin complet de l'artefact d'un format.
    pub fn path_for(&self, format_name: &str) -> PathBuf {
        self.dir.join(artifact_file_name(format_name, self.timestamp))
    }

    /// Ecrit un artefact et retourne son chemin.
    ///
    /// # Errors
    /// Retourne `CdError::Write` si le fichier ne peut pas etre cree
    /// (permissions, disque plein, chemin invalide).
    pub fn write(&self, format_name: &str, contents: &[u8]) -> CdResult<PathBuf> {
        let path = self.path_for(format_name);
        let tmp_path = path.with_extension("tmp");

        let result = fs::write(&tmp_path, contents).and_then(|()| fs::rename(&tmp_path, &path));
        if let Err(source) = result {
            let _ = fs::remove_file(&tmp_path);
            return Err(CdError::Write { path, source });
        }
        Ok(path)
    }
}
