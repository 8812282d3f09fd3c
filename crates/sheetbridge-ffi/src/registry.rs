//! Global bridge registry.
//!
//! One process-wide registry holds the installed engine, the three handle
//! arenas, and the active legacy code page. Every exported function resolves
//! its handles here before anything is forwarded; resolution failures return a
//! sentinel without touching the engine.

use std::os::raw::c_int;
use std::path::Path;

use lazy_static::lazy_static;

use sheetbridge_codec::{to_utf8, Codepage};
use sheetbridge_engine::{FormatId, SheetEngine, SheetId, WorkbookId};

use crate::error::{
    PB_ERR_BAD_ARG, PB_ERR_BAD_HANDLE, PB_ERR_ENCODING, PB_ERR_NO_ENGINE, PB_ERR_NULL_ARG, PB_OK,
};
use crate::handles::{Arena, HandleKind, PbFormat, PbWorkbook, PbWorksheet, RawHandle};

struct WorkbookEntry {
    id: WorkbookId,
    // Slots owned by this workbook, freed together when it closes.
    worksheets: Vec<u32>,
    formats: Vec<u32>,
}

struct SheetEntry {
    id: SheetId,
}

struct FormatEntry {
    id: FormatId,
}

pub(crate) struct Registry {
    engine: Option<Box<dyn SheetEngine>>,
    workbooks: Arena<WorkbookEntry>,
    worksheets: Arena<SheetEntry>,
    formats: Arena<FormatEntry>,
    codepage: Codepage,
}

impl Registry {
    fn new() -> Self {
        Self {
            engine: None,
            workbooks: Arena::new(),
            worksheets: Arena::new(),
            formats: Arena::new(),
            codepage: Codepage::default(),
        }
    }

    /// Replace the engine and invalidate every outstanding handle.
    pub fn install(&mut self, engine: Option<Box<dyn SheetEngine>>) {
        self.engine = engine;
        self.workbooks.clear();
        self.worksheets.clear();
        self.formats.clear();
        self.codepage = Codepage::default();
    }

    pub fn set_codepage(&mut self, codepage: Codepage) {
        self.codepage = codepage;
    }

    /// Decode host-supplied legacy bytes under the active code page.
    pub fn decode(&self, bytes: &[u8]) -> Result<String, c_int> {
        to_utf8(self.codepage, bytes).map_err(|err| {
            log::debug!("rejecting undecodable text argument: {err}");
            PB_ERR_ENCODING
        })
    }

    pub fn engine(&mut self) -> Result<&mut dyn SheetEngine, c_int> {
        match self.engine.as_deref_mut() {
            Some(engine) => Ok(engine),
            None => {
                log::debug!("call rejected: no engine installed");
                Err(PB_ERR_NO_ENGINE)
            }
        }
    }

    /// Resolve a worksheet handle to its engine id.
    pub fn worksheet(&self, handle: PbWorksheet) -> Result<SheetId, c_int> {
        let raw = check_kind(handle.raw(), PbWorksheet::KIND)?;
        self.worksheets
            .get(raw.slot(), raw.generation())
            .map(|entry| entry.id)
            .ok_or_else(|| stale(PbWorksheet::KIND))
    }

    /// Resolve a workbook handle to its engine id.
    pub fn workbook(&self, handle: PbWorkbook) -> Result<WorkbookId, c_int> {
        let raw = check_kind(handle.raw(), PbWorkbook::KIND)?;
        self.workbooks
            .get(raw.slot(), raw.generation())
            .map(|entry| entry.id)
            .ok_or_else(|| stale(PbWorkbook::KIND))
    }

    /// Resolve a mandatory format handle.
    pub fn format(&self, handle: PbFormat) -> Result<FormatId, c_int> {
        let raw = check_kind(handle.raw(), PbFormat::KIND)?;
        self.formats
            .get(raw.slot(), raw.generation())
            .map(|entry| entry.id)
            .ok_or_else(|| stale(PbFormat::KIND))
    }

    /// Resolve an optional format handle. Null means "no format", which is a
    /// valid argument, not an error; a non-null handle must still be live.
    pub fn format_opt(&self, handle: PbFormat) -> Result<Option<FormatId>, c_int> {
        if handle.is_null() {
            return Ok(None);
        }
        self.format(handle).map(Some)
    }

    pub fn open_workbook(&mut self, path: &Path) -> Option<PbWorkbook> {
        let engine = match self.engine() {
            Ok(engine) => engine,
            Err(_) => return None,
        };
        match engine.workbook_new(path) {
            Ok(id) => {
                let (slot, generation) = self.workbooks.insert(WorkbookEntry {
                    id,
                    worksheets: Vec::new(),
                    formats: Vec::new(),
                });
                Some(PbWorkbook::from_raw(RawHandle::pack(
                    PbWorkbook::KIND,
                    generation,
                    slot,
                )))
            }
            Err(err) => {
                log::debug!("engine rejected workbook_new: {err}");
                None
            }
        }
    }

    /// Close a workbook, freeing it and every worksheet/format it owns. The
    /// engine's close status is returned verbatim.
    pub fn close_workbook(&mut self, handle: PbWorkbook) -> c_int {
        let raw = match check_kind(handle.raw(), PbWorkbook::KIND) {
            Ok(raw) => raw,
            Err(code) => return code,
        };
        let entry = match self.workbooks.remove(raw.slot(), raw.generation()) {
            Some(entry) => entry,
            None => return stale(PbWorkbook::KIND),
        };
        for slot in entry.worksheets {
            self.worksheets.free_slot(slot);
        }
        for slot in entry.formats {
            self.formats.free_slot(slot);
        }
        match self.engine() {
            Ok(engine) => engine.workbook_close(entry.id),
            Err(code) => code,
        }
    }

    pub fn add_worksheet(&mut self, workbook: PbWorkbook, name: Option<&str>) -> Option<PbWorksheet> {
        let (owner, workbook_id) = self.owned_workbook(workbook)?;
        let engine = self.engine.as_deref_mut()?;
        match engine.add_worksheet(workbook_id, name) {
            Ok(id) => {
                let (slot, generation) = self.worksheets.insert(SheetEntry { id });
                if let Some(entry) = self.workbooks.get_mut(owner.slot(), owner.generation()) {
                    entry.worksheets.push(slot);
                }
                Some(PbWorksheet::from_raw(RawHandle::pack(
                    PbWorksheet::KIND,
                    generation,
                    slot,
                )))
            }
            Err(err) => {
                log::debug!("engine rejected add_worksheet: {err}");
                None
            }
        }
    }

    pub fn add_format(&mut self, workbook: PbWorkbook) -> Option<PbFormat> {
        let (owner, workbook_id) = self.owned_workbook(workbook)?;
        let engine = self.engine.as_deref_mut()?;
        match engine.add_format(workbook_id) {
            Ok(id) => {
                let (slot, generation) = self.formats.insert(FormatEntry { id });
                if let Some(entry) = self.workbooks.get_mut(owner.slot(), owner.generation()) {
                    entry.formats.push(slot);
                }
                Some(PbFormat::from_raw(RawHandle::pack(
                    PbFormat::KIND,
                    generation,
                    slot,
                )))
            }
            Err(err) => {
                log::debug!("engine rejected add_format: {err}");
                None
            }
        }
    }

    fn owned_workbook(&self, handle: PbWorkbook) -> Option<(RawHandle, WorkbookId)> {
        let raw = check_kind(handle.raw(), PbWorkbook::KIND).ok()?;
        let id = self.workbooks.get(raw.slot(), raw.generation())?.id;
        Some((raw, id))
    }
}

fn check_kind(raw: RawHandle, expected: HandleKind) -> Result<RawHandle, c_int> {
    if raw.is_null() {
        return Err(PB_ERR_NULL_ARG);
    }
    if raw.kind() != Some(expected) {
        log::debug!(
            "rejecting handle with kind {:?}, expected {:?}",
            raw.kind(),
            expected
        );
        return Err(PB_ERR_BAD_HANDLE);
    }
    Ok(raw)
}

fn stale(kind: HandleKind) -> c_int {
    log::debug!("rejecting stale {kind:?} handle");
    PB_ERR_BAD_HANDLE
}

lazy_static! {
    pub(crate) static ref REGISTRY: std::sync::Mutex<Registry> =
        std::sync::Mutex::new(Registry::new());
}

/// Run a closure against the locked registry, answering `$fallback` if the
/// lock is poisoned.
macro_rules! with_registry {
    ($fallback:expr, |mut $reg:ident| $body:expr) => {
        match $crate::registry::REGISTRY.lock() {
            Ok(mut $reg) => $body,
            Err(_) => $fallback,
        }
    };
    ($fallback:expr, |$reg:ident| $body:expr) => {
        match $crate::registry::REGISTRY.lock() {
            Ok($reg) => $body,
            Err(_) => $fallback,
        }
    };
}

/// Unwrap a registry resolution inside a status-returning export.
macro_rules! try_status {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(code) => return code,
        }
    };
}

pub(crate) use {try_status, with_registry};

/// Install the engine all exported calls forward to.
///
/// Replacing the engine invalidates every outstanding handle and resets the
/// active code page; the embedding application installs once at startup,
/// before the host makes its first call.
pub fn install_engine(engine: Box<dyn SheetEngine>) {
    REGISTRY
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .install(Some(engine));
}

/// Drop the installed engine and invalidate every outstanding handle.
///
/// After this, handle-producing calls return the null handle and outstanding
/// handles are rejected, until an engine is installed again.
pub fn reset() {
    REGISTRY
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .install(None);
}

/// Switch the legacy code page used to decode host text.
///
/// Accepts any Windows code page number; unknown pages decode with a lossless
/// byte-to-Unicode fallback. Values outside 0..=65535 are rejected with
/// `PB_ERR_BAD_ARG`.
#[no_mangle]
pub extern "system" fn pb_set_codepage(codepage: c_int) -> c_int {
    let number = match u16::try_from(codepage) {
        Ok(number) => number,
        Err(_) => return PB_ERR_BAD_ARG,
    };
    with_registry!(crate::error::PB_ERR_INTERNAL, |mut reg| {
        reg.set_codepage(Codepage::new(number));
        PB_OK
    })
}
