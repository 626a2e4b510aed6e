// ClipDump - Module config
// Parametres d'execution lus dans l'environnement
//
// # Sous-modules
// - `parser`   : conversion des valeurs brutes (booleens, mode, repertoire)
// - `settings` : structure Settings, valeurs par defaut et chargement
//
// # Utilisation
// ```rust
// let settings = Settings::from_env();
// // Les valeurs absentes ou invalides utilisent les defauts
// ```

/// Conversion des valeurs de configuration.
pub mod parser;
/// Structure de configuration et valeurs par defaut.
pub mod settings;

pub use settings::Settings;
