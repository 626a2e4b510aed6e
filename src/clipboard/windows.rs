// ClipDump - Backend Win32
// Lecture du presse-papiers via OpenClipboard/EnumClipboardFormats/GetClipboardData
//
// # Forme des charges
// - CF_UNICODETEXT        : texte UTF-16, tronque au premier NUL
// - CF_HDROP              : liste de chemins via DragQueryFileW
// - CF_LOCALE             : LCID (u32) en tete du bloc memoire
// - bitmaps, palettes, metafichiers ameliores, CF_OWNERDISPLAY, plage GDI :
//                           handles GDI, seule leur valeur est rapportee
// - tout autre format     : copie du bloc memoire global
//
// # Safety
// Tous les appels FFI Win32 sont isoles dans des blocs unsafe locaux.
// Les handles retournes par GetClipboardData appartiennent au
// presse-papiers : ils ne sont jamais liberes ici et ne sont utilises
// qu'entre OpenClipboard et CloseClipboard. Chaque GlobalLock est suivi
// de son GlobalUnlock avant retour.
//
// # Portabilite
// Ce module est specifique a Windows (Win32 API).

use std::path::PathBuf;
use std::time::Duration;

use windows_sys::Win32::Foundation::HANDLE;
use windows_sys::Win32::System::DataExchange::{
    CloseClipboard, EnumClipboardFormats, GetClipboardData, GetClipboardFormatNameW, OpenClipboard,
};
use windows_sys::Win32::System::Memory::{GlobalLock, GlobalSize, GlobalUnlock};
use windows_sys::Win32::UI::Shell::DragQueryFileW;

use crate::clipboard::backend::ClipboardBackend;
use crate::constants::*;
use crate::error::{CdError, CdResult, FetchError};
use crate::format::catalog::{self, FormatClass};
use crate::format::decode::{decode_locale, decode_unicode_text};
use crate::format::Payload;
use crate::system::win32::{clear_last_error, from_wstring, last_error};

/// Presse-papiers Windows.
#[derive(Debug, Default)]
pub struct Win32Clipboard {
    open: bool,
}

impl Win32Clipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardBackend for Win32Clipboard {
    fn open(&mut self) -> CdResult<()> {
        if self.open {
            return Err(CdError::Unexpected("clipboard already open".into()));
        }
        for attempt in 1..=OPEN_ATTEMPTS {
            // SAFETY: appel FFI Win32 ; un proprietaire nul associe
            // l'ouverture a la tache courante.
            let ok = unsafe { OpenClipboard(std::ptr::null_mut()) };
            if ok != 0 {
                self.open = true;
                return Ok(());
            }
            tracing::debug!(attempt, code = last_error(), "OpenClipboard failed");
            if attempt < OPEN_ATTEMPTS {
                std::thread::sleep(Duration::from_millis(OPEN_RETRY_DELAY_MS));
            }
        }
        Err(CdError::Acquire(format!(
            "OpenClipboard failed after {} attempts (code={})",
            OPEN_ATTEMPTS,
            last_error()
        )))
    }

    fn next_format(&mut self, cursor: Option<FormatId>) -> CdResult<Option<FormatId>> {
        clear_last_error();
        // SAFETY: appel FFI Win32, presse-papiers ouvert par cette tache.
        let next = unsafe { EnumClipboardFormats(cursor.unwrap_or(0)) };
        if next != 0 {
            return Ok(Some(next));
        }
        // 0 signifie fin de liste, sauf si GetLastError signale une erreur
        match last_error() {
            0 => Ok(None),
            code => Err(CdError::Unexpected(format!(
                "EnumClipboardFormats failed (code={})",
                code
            ))),
        }
    }

    fn get_data(&mut self, id: FormatId) -> Result<Payload, FetchError> {
        if !self.open {
            return Err(FetchError::Provider("clipboard is not open".into()));
        }
        clear_last_error();
        // SAFETY: appel FFI Win32, presse-papiers ouvert par cette tache.
        let handle = unsafe { GetClipboardData(id) };
        if handle.is_null() {
            return Err(FetchError::NoData { code: last_error() });
        }

        if is_gdi_handle_format(id) {
            return Ok(Payload::Opaque(format!(
                "GDI handle {:#x} ({})",
                handle as usize,
                catalog::name_of(id)
            )));
        }

        match id {
            CF_HDROP => read_file_list(handle).map(Payload::FileList),
            CF_UNICODETEXT => read_global(handle).map(|b| Payload::Text(decode_unicode_text(&b))),
            CF_LOCALE => read_global(handle).map(decode_locale),
            _ => read_global(handle).map(Payload::Bytes),
        }
    }

    fn close(&mut self) {
        if self.open {
            self.open = false;
            // SAFETY: appel FFI Win32, ferme l'ouverture faite par `open`.
            unsafe { CloseClipboard() };
        }
    }

    fn registered_name(&mut self, id: FormatId) -> Option<String> {
        if catalog::classify(id) != FormatClass::Registered {
            return None;
        }
        let mut buf = [0u16; MAX_FORMAT_NAME_LEN];
        // SAFETY: le tampon est valide pour buf.len() caracteres.
        let len = unsafe { GetClipboardFormatNameW(id, buf.as_mut_ptr(), buf.len() as i32) };
        if len <= 0 {
            return None;
        }
        Some(from_wstring(&buf[..len as usize]))
    }
}

impl Drop for Win32Clipboard {
    fn drop(&mut self) {
        self.close();
    }
}

/// Formats dont la donnee est un handle GDI et non un bloc memoire global.
fn is_gdi_handle_format(id: FormatId) -> bool {
    matches!(
        id,
        CF_BITMAP
            | CF_DSPBITMAP
            | CF_PALETTE
            | CF_ENHMETAFILE
            | CF_DSPENHMETAFILE
            | CF_OWNERDISPLAY
    ) || catalog::classify(id) == FormatClass::GdiObject
}

/// Copie un bloc memoire global.
fn read_global(handle: HANDLE) -> Result<Vec<u8>, FetchError> {
    // SAFETY: handle issu de GetClipboardData, valide tant que le
    // presse-papiers est ouvert ; verrouille/deverrouille localement.
    unsafe {
        let ptr = GlobalLock(handle) as *const u8;
        if ptr.is_null() {
            return Err(FetchError::Inaccessible {
                reason: format!("GlobalLock failed (code={})", last_error()),
            });
        }
        let size = GlobalSize(handle);
        let bytes = std::slice::from_raw_parts(ptr, size).to_vec();
        GlobalUnlock(handle);
        Ok(bytes)
    }
}

/// Lit les chemins d'un handle CF_HDROP.
fn read_file_list(handle: HANDLE) -> Result<Vec<PathBuf>, FetchError> {
    // SAFETY: handle HDROP issu de GetClipboardData ; chaque tampon est
    // dimensionne d'apres la longueur retournee par DragQueryFileW.
    unsafe {
        let count = DragQueryFileW(handle, u32::MAX, std::ptr::null_mut(), 0);
        let mut paths = Vec::with_capacity(count as usize);
        for i in 0..count {
            let len = DragQueryFileW(handle, i, std::ptr::null_mut(), 0);
            if len == 0 {
                return Err(FetchError::Inaccessible {
                    reason: format!("DragQueryFileW returned no path for entry {}", i),
                });
            }
            let mut buf = vec![0u16; len as usize + 1];
            let copied = DragQueryFileW(handle, i, buf.as_mut_ptr(), buf.len() as u32);
            paths.push(PathBuf::from(from_wstring(&buf[..copied as usize])));
        }
        Ok(paths)
    }
}
