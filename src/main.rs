// ClipDump - Point d'entree
// Inspecteur des formats du presse-papiers Windows
//
// Une execution = une passe : ouverture du presse-papiers, un artefact
// par format present, fermeture, resume sur stdout. Les journaux vont
// sur stderr.
//
// # Code de sortie
// - 0 : passe terminee (des formats isoles ont pu echouer)
// - 1 : presse-papiers indisponible
// - 2 : passe interrompue par une erreur imprevue
//
// # Configuration
// Variables CLIPDUMP_MODE, CLIPDUMP_TIMESTAMP, CLIPDUMP_OUT_DIR,
// CLIPDUMP_VERBOSE (voir config/settings.rs).

use clipdump::clipboard::{ClipboardExtractor, SystemClipboard};
use clipdump::config::Settings;
use clipdump::logging;

/// Point d'entree principal de ClipDump.
fn main() {
    logging::init(Settings::verbose_requested());
    let settings = Settings::from_env();
    tracing::debug!(?settings, "configuration loaded");

    let mut extractor = ClipboardExtractor::from_settings(SystemClipboard::new(), &settings);
    let report = match extractor.inspect() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("ClipDump error: {}", e);
            std::process::exit(1);
        }
    };

    for line in report.summary_lines() {
        println!("{}", line);
    }
    if !report.is_complete() {
        std::process::exit(2);
    }
}
