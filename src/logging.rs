// ClipDump - Journalisation
//
// Subscriber `tracing` compact ecrivant sur stderr, pour que stdout ne
// porte que le resume de fin de passe. Niveau INFO par defaut (formats
// trouves, artefacts ecrits, echecs), DEBUG en mode verbeux (classe des
// formats, forme des charges, ouverture/fermeture).

use tracing::Level;

/// Niveau maximal selon le mode verbeux.
pub fn max_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Installe le subscriber global. Les appels suivants sont sans effet.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(max_level(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .compact()
        .try_init();
}
