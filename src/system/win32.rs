// ClipDump - Helpers Win32
// Conversions UTF-16 et code d'erreur du thread
//
// Les declarations FFI viennent de la crate windows-sys ; ce fichier ne
// contient que les petits helpers Rust partages par les backends.
//
// # Portabilite
// Ce module est specifique a Windows (cfg(windows) dans system/mod.rs).

use windows_sys::Win32::Foundation::{GetLastError, SetLastError};

/// Convertit un slice UTF-16 (possiblement null-termine) en String.
pub fn from_wstring(s: &[u16]) -> String {
    let len = s.iter().position(|&c| c == 0).unwrap_or(s.len());
    String::from_utf16_lossy(&s[..len])
}

/// Recupere le dernier code d'erreur Win32.
pub fn last_error() -> u32 {
    // SAFETY: Fonction Win32 sans effet de bord dangereux.
    unsafe { GetLastError() }
}

/// Remet a zero le code d'erreur du thread.
///
/// Necessaire avant les appels dont la valeur de retour 0 est ambigue
/// (EnumClipboardFormats, GetClipboardData).
pub fn clear_last_error() {
    // SAFETY: Fonction Win32 sans effet de bord dangereux.
    unsafe { SetLastError(0) }
}
