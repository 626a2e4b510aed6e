// ClipDump - Module system
// Helpers specifiques a Windows
//
// # Sous-modules
// - `win32` : conversions UTF-16 et gestion du code d'erreur du thread,
//             au-dessus des declarations FFI de windows-sys
//
// # Portabilite
// Ce module n'est compile que sous Windows.

/// Helpers Win32 (from_wstring, last_error, clear_last_error).
pub mod win32;
