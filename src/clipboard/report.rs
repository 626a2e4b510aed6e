// ClipDump - Rapport d'inspection
//
// Resultat d'une passe : un `FormatOutcome` par format enumere, dans
// l'ordre d'enumeration, et l'eventuelle erreur imprevue qui a
// interrompu la passe. Le rapport est produit meme en cas d'echec
// partiel ; `summary_lines` en donne le resume affiche a l'utilisateur.

use std::path::{Path, PathBuf};

use crate::constants::FormatId;
use crate::dump::DumpMode;
use crate::error::{CdError, FetchError};
use crate::format::FormatName;

/// Issue du traitement d'un format.
#[derive(Debug)]
pub enum FormatResult {
    /// Artefact ecrit
    Dumped { path: PathBuf, bytes: usize },
    /// Charge illisible, format ignore
    FetchFailed(FetchError),
    /// Artefact non ecrit (message de l'erreur d'ecriture)
    WriteFailed(String),
}

/// Traitement d'un format enumere.
#[derive(Debug)]
pub struct FormatOutcome {
    pub id: FormatId,
    pub name: FormatName,
    /// Nom enregistre aupres du systeme, pour information
    pub registered_name: Option<String>,
    pub result: FormatResult,
}

impl FormatOutcome {
    /// Chemin de l'artefact, si ecrit.
    pub fn artifact(&self) -> Option<&Path> {
        match &self.result {
            FormatResult::Dumped { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Resultat complet d'une passe d'inspection.
#[derive(Debug)]
pub struct InspectionReport {
    pub output_dir: PathBuf,
    pub timestamp: Option<i64>,
    pub mode: DumpMode,
    pub outcomes: Vec<FormatOutcome>,
    /// Erreur imprevue ayant arrete l'enumeration (presse-papiers libere)
    pub interrupted: Option<CdError>,
}

impl InspectionReport {
    /// Aucun format trouve.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Nombre d'artefacts ecrits.
    pub fn dumped_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.artifact().is_some()).count()
    }

    /// Nombre de formats en echec (lecture ou ecriture).
    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.dumped_count()
    }

    /// La passe est allee jusqu'a la fin de la liste des formats.
    pub fn is_complete(&self) -> bool {
        self.interrupted.is_none()
    }

    /// Resume de fin de passe.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.is_empty() {
            lines.push("No formats found on the clipboard.".to_string());
        }
        lines.push(format!(
            "{} format(s) found, {} dumped, {} failed ({} mode).",
            self.outcomes.len(),
            self.dumped_count(),
            self.failed_count(),
            self.mode
        ));
        for outcome in &self.outcomes {
            let status = match &outcome.result {
                FormatResult::Dumped { path, bytes } => {
                    let file = path.file_name().map(|f| f.to_string_lossy()).unwrap_or_default();
                    format!("{} ({} bytes)", file, bytes)
                }
                FormatResult::FetchFailed(e) => format!("not retrieved: {}", e),
                FormatResult::WriteFailed(e) => format!("not written: {}", e),
            };
            lines.push(format!("  - {}: {}", outcome.name, status));
        }
        if let Some(e) = &self.interrupted {
            lines.push(format!("Inspection interrupted: {}", e));
        }
        lines.push("Dump complete. Check for '.hex' files in the output directory.".to_string());
        lines.push(format!("Directory: {}", self.output_dir.display()));
        lines
    }
}
