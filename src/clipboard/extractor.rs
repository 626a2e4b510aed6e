// ClipDump - Extracteur
// Enumere les formats du presse-papiers et ecrit un artefact par format
//
// # Etats
// ```text
// Closed --acquire--> Open --1er format--> Enumerating --release--> Closed
// ```
// `release` ramene tout etat a Closed et n'agit qu'une fois ; la session
// sous-jacente ferme aussi le presse-papiers a sa destruction.
//
// # Enumeration
// Le curseur part de "aucun format" et avance au format retourne par le
// backend jusqu'a la fin de liste. La liste est finie et parcourue vers
// l'avant : aucun dedoublonnage n'est fait ici. Un backend qui renvoie
// le curseur lui-meme n'avance plus, c'est une erreur imprevue.
//
// # Echecs
// - lecture d'un format : journalisee une fois, format ignore, pas de retry
// - ecriture d'un artefact : journalisee, les autres formats continuent
// - erreur imprevue d'enumeration : la passe s'arrete, le presse-papiers
//   est libere, l'erreur est portee par le rapport
// - echec d'ouverture : seule erreur retournee par `inspect`

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::clipboard::backend::ClipboardBackend;
use crate::clipboard::report::{FormatOutcome, FormatResult, InspectionReport};
use crate::clipboard::session::ClipboardSession;
use crate::config::Settings;
use crate::constants::FormatId;
use crate::dump::{encode, ArtifactWriter, DumpMode};
use crate::error::{CdError, CdResult};
use crate::format::catalog;

/// Etat de l'extracteur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractorState {
    Closed,
    Open,
    Enumerating,
}

/// Source de l'horodatage de passe (secondes Unix).
pub type Clock = fn() -> i64;

fn utc_now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Passe d'inspection du presse-papiers.
pub struct ClipboardExtractor<B: ClipboardBackend> {
    session: ClipboardSession<B>,
    state: ExtractorState,
    output_dir: PathBuf,
    mode: DumpMode,
    stamp_files: bool,
    clock: Clock,
    writer: Option<ArtifactWriter>,
    outcomes: Vec<FormatOutcome>,
}

impl<B: ClipboardBackend> ClipboardExtractor<B> {
    /// Cree un extracteur ecrivant dans `output_dir`.
    pub fn new(backend: B, output_dir: impl Into<PathBuf>, mode: DumpMode, stamp_files: bool) -> Self {
        Self {
            session: ClipboardSession::new(backend),
            state: ExtractorState::Closed,
            output_dir: output_dir.into(),
            mode,
            stamp_files,
            clock: utc_now,
            writer: None,
            outcomes: Vec::new(),
        }
    }

    /// Cree un extracteur d'apres la configuration.
    pub fn from_settings(backend: B, settings: &Settings) -> Self {
        Self::new(backend, settings.output_dir.clone(), settings.mode, settings.timestamp)
    }

    /// Remplace la source d'horodatage.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Etat courant.
    pub fn state(&self) -> ExtractorState {
        self.state
    }

    /// Acces en lecture au backend.
    pub fn backend(&self) -> &B {
        self.session.backend()
    }

    /// Ouvre le presse-papiers et prepare une nouvelle passe.
    ///
    /// # Errors
    /// - `CdError::Acquire` si le presse-papiers est indisponible
    /// - `CdError::Unexpected` si une passe est deja en cours
    pub fn acquire(&mut self) -> CdResult<()> {
        if self.state != ExtractorState::Closed {
            return Err(CdError::Unexpected("an inspection pass is already running".into()));
        }
        self.session.acquire()?;
        self.state = ExtractorState::Open;
        let timestamp = self.stamp_files.then(self.clock);
        self.writer = Some(ArtifactWriter::new(self.output_dir.clone(), timestamp));
        self.outcomes.clear();
        Ok(())
    }

    /// Parcourt tous les formats et traite chacun avant de demander le suivant.
    ///
    /// # Errors
    /// `CdError::Unexpected` si la session n'est pas ouverte, si le backend
    /// echoue a enumerer ou si l'enumeration n'avance plus.
    pub fn enumerate(&mut self) -> CdResult<()> {
        if self.state == ExtractorState::Closed {
            return Err(CdError::Unexpected("enumerate called without an open clipboard".into()));
        }
        let mut cursor: Option<FormatId> = None;
        while let Some(id) = self.session.next_format(cursor)? {
            if cursor == Some(id) {
                return Err(CdError::Unexpected(format!(
                    "format enumeration did not advance past {}",
                    id
                )));
            }
            self.state = ExtractorState::Enumerating;
            self.fetch_and_dump(id);
            cursor = Some(id);
        }
        Ok(())
    }

    /// Lit et ecrit un format. Les echecs sont journalises et enregistres.
    pub fn fetch_and_dump(&mut self, id: FormatId) {
        let name = catalog::name_of(id);
        let registered_name = self.session.registered_name(id);
        match &registered_name {
            Some(reg) => info!("Found format: {} [{}]", name, reg),
            None => info!("Found format: {}", name),
        }
        debug!(id, class = catalog::classify(id).as_str(), "format details");

        let result = match self.session.get_data(id) {
            Err(source) => {
                let err = CdError::Fetch {
                    id,
                    source: source.clone(),
                };
                warn!("Could not retrieve data for {}: {}", name, err);
                FormatResult::FetchFailed(source)
            }
            Ok(payload) => {
                debug!(kind = payload.kind(), len = payload.len(), "payload retrieved");
                let contents = encode(&payload, self.mode);
                match &self.writer {
                    Some(writer) => match writer.write(&name.to_string(), &contents) {
                        Ok(path) => {
                            info!("Dumping data to {}", path.display());
                            FormatResult::Dumped {
                                path,
                                bytes: contents.len(),
                            }
                        }
                        Err(e) => {
                            warn!("Failed to write dump for {}: {}", name, e);
                            FormatResult::WriteFailed(e.to_string())
                        }
                    },
                    None => FormatResult::WriteFailed("no inspection pass in progress".into()),
                }
            }
        };

        self.outcomes.push(FormatOutcome {
            id,
            name,
            registered_name,
            result,
        });
    }

    /// Ferme le presse-papiers. Sans effet si aucune passe n'est ouverte.
    pub fn release(&mut self) {
        self.session.release();
        self.state = ExtractorState::Closed;
    }

    /// Execute une passe complete : acquire, enumerate, release.
    ///
    /// Le presse-papiers est libere sur tous les chemins. Une erreur
    /// imprevue d'enumeration est placee dans `InspectionReport::interrupted`.
    ///
    /// # Errors
    /// `CdError::Acquire` si le presse-papiers n'a pas pu etre ouvert.
    pub fn inspect(&mut self) -> CdResult<InspectionReport> {
        self.acquire()?;
        let result = self.enumerate();
        self.release();

        if let Err(e) = &result {
            warn!("Inspection interrupted: {}", e);
        }
        let writer = self.writer.take();
        Ok(InspectionReport {
            output_dir: self.output_dir.clone(),
            timestamp: writer.and_then(|w| w.timestamp()),
            mode: self.mode,
            outcomes: std::mem::take(&mut self.outcomes),
            interrupted: result.err(),
        })
    }
}
