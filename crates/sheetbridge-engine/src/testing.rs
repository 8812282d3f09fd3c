//! Test doubles for the engine capability trait.
//!
//! [`RecordingEngine`] implements [`SheetEngine`] by appending every invocation
//! to a shared [`Recording`]. Guard tests use it to prove a rejected call never
//! reached the engine; forwarding tests use it to assert argument fidelity.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::datetime::DateTime;
use crate::engine::{EngineStatus, SheetEngine, ENGINE_OK};
use crate::error::Result;
use crate::ids::{FormatId, SheetId, WorkbookId};
use crate::style::{BorderLine, CellAlign};

/// One observed engine invocation, arguments included.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    WorkbookNew { path: String },
    WorkbookClose { workbook: WorkbookId },
    AddWorksheet { workbook: WorkbookId, name: Option<String> },
    AddFormat { workbook: WorkbookId },
    SetBold { format: FormatId },
    SetItalic { format: FormatId },
    SetFontSize { format: FormatId, size: f64 },
    SetFontColor { format: FormatId, rgb: u32 },
    SetBgColor { format: FormatId, rgb: u32 },
    SetAlign { format: FormatId, align: CellAlign },
    SetBorder { format: FormatId, line: BorderLine },
    SetNumFormat { format: FormatId, pattern: String },
    SetTextWrap { format: FormatId },
    WriteString { sheet: SheetId, row: i32, col: i32, text: String, format: Option<FormatId> },
    WriteNumber { sheet: SheetId, row: i32, col: i32, value: f64, format: Option<FormatId> },
    WriteFormula { sheet: SheetId, row: i32, col: i32, formula: String, format: Option<FormatId> },
    WriteDatetime { sheet: SheetId, row: i32, col: i32, value: DateTime, format: Option<FormatId> },
    SetColumn { sheet: SheetId, first_col: i32, last_col: i32, width: f64, format: Option<FormatId> },
    SetRow { sheet: SheetId, row: i32, height: f64, format: Option<FormatId> },
    MergeRange {
        sheet: SheetId,
        first_row: i32,
        first_col: i32,
        last_row: i32,
        last_col: i32,
        text: String,
        format: Option<FormatId>,
    },
    FreezePanes { sheet: SheetId, row: i32, col: i32 },
    Autofilter { sheet: SheetId, first_row: i32, first_col: i32, last_row: i32, last_col: i32 },
    InsertImage { sheet: SheetId, row: i32, col: i32, path: String },
}

/// Everything a [`RecordingEngine`] has been asked to do.
#[derive(Debug, Default)]
pub struct Recording {
    pub calls: Vec<Call>,
}

impl Recording {
    /// Total number of engine invocations observed.
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    /// The `(row, col, text)` triples of all string writes, in call order.
    pub fn string_writes(&self) -> Vec<(i32, i32, String)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::WriteString { row, col, text, .. } => Some((*row, *col, text.clone())),
                _ => None,
            })
            .collect()
    }
}

/// A [`SheetEngine`] that records calls instead of producing files.
///
/// Ids are allocated sequentially starting at 1. Status-returning operations
/// answer with a configurable status (default [`ENGINE_OK`]).
pub struct RecordingEngine {
    state: Arc<Mutex<Recording>>,
    next_id: u32,
    status: EngineStatus,
}

impl RecordingEngine {
    /// New engine plus a shared view of its recording.
    pub fn new() -> (Self, Arc<Mutex<Recording>>) {
        Self::with_status(ENGINE_OK)
    }

    /// New engine whose status-returning operations all answer `status`.
    pub fn with_status(status: EngineStatus) -> (Self, Arc<Mutex<Recording>>) {
        let state = Arc::new(Mutex::new(Recording::default()));
        let engine = Self {
            state: Arc::clone(&state),
            next_id: 1,
            status,
        };
        (engine, state)
    }

    fn record(&self, call: Call) {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .calls
            .push(call);
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl SheetEngine for RecordingEngine {
    fn workbook_new(&mut self, path: &Path) -> Result<WorkbookId> {
        self.record(Call::WorkbookNew {
            path: path.to_string_lossy().into_owned(),
        });
        Ok(WorkbookId::from_raw(self.next_id()))
    }

    fn workbook_close(&mut self, workbook: WorkbookId) -> EngineStatus {
        self.record(Call::WorkbookClose { workbook });
        self.status
    }

    fn add_worksheet(&mut self, workbook: WorkbookId, name: Option<&str>) -> Result<SheetId> {
        self.record(Call::AddWorksheet {
            workbook,
            name: name.map(str::to_owned),
        });
        Ok(SheetId::from_raw(self.next_id()))
    }

    fn add_format(&mut self, workbook: WorkbookId) -> Result<FormatId> {
        self.record(Call::AddFormat { workbook });
        Ok(FormatId::from_raw(self.next_id()))
    }

    fn set_bold(&mut self, format: FormatId) {
        self.record(Call::SetBold { format });
    }

    fn set_italic(&mut self, format: FormatId) {
        self.record(Call::SetItalic { format });
    }

    fn set_font_size(&mut self, format: FormatId, size: f64) {
        self.record(Call::SetFontSize { format, size });
    }

    fn set_font_color(&mut self, format: FormatId, rgb: u32) {
        self.record(Call::SetFontColor { format, rgb });
    }

    fn set_bg_color(&mut self, format: FormatId, rgb: u32) {
        self.record(Call::SetBgColor { format, rgb });
    }

    fn set_align(&mut self, format: FormatId, align: CellAlign) {
        self.record(Call::SetAlign { format, align });
    }

    fn set_border(&mut self, format: FormatId, line: BorderLine) {
        self.record(Call::SetBorder { format, line });
    }

    fn set_num_format(&mut self, format: FormatId, pattern: &str) {
        self.record(Call::SetNumFormat {
            format,
            pattern: pattern.to_owned(),
        });
    }

    fn set_text_wrap(&mut self, format: FormatId) {
        self.record(Call::SetTextWrap { format });
    }

    fn write_string(
        &mut self,
        sheet: SheetId,
        row: i32,
        col: i32,
        text: &str,
        format: Option<FormatId>,
    ) -> EngineStatus {
        self.record(Call::WriteString {
            sheet,
            row,
            col,
            text: text.to_owned(),
            format,
        });
        self.status
    }

    fn write_number(
        &mut self,
        sheet: SheetId,
        row: i32,
        col: i32,
        value: f64,
        format: Option<FormatId>,
    ) -> EngineStatus {
        self.record(Call::WriteNumber {
            sheet,
            row,
            col,
            value,
            format,
        });
        self.status
    }

    fn write_formula(
        &mut self,
        sheet: SheetId,
        row: i32,
        col: i32,
        formula: &str,
        format: Option<FormatId>,
    ) -> EngineStatus {
        self.record(Call::WriteFormula {
            sheet,
            row,
            col,
            formula: formula.to_owned(),
            format,
        });
        self.status
    }

    fn write_datetime(
        &mut self,
        sheet: SheetId,
        row: i32,
        col: i32,
        value: DateTime,
        format: Option<FormatId>,
    ) -> EngineStatus {
        self.record(Call::WriteDatetime {
            sheet,
            row,
            col,
            value,
            format,
        });
        self.status
    }

    fn set_column(
        &mut self,
        sheet: SheetId,
        first_col: i32,
        last_col: i32,
        width: f64,
        format: Option<FormatId>,
    ) -> EngineStatus {
        self.record(Call::SetColumn {
            sheet,
            first_col,
            last_col,
            width,
            format,
        });
        self.status
    }

    fn set_row(
        &mut self,
        sheet: SheetId,
        row: i32,
        height: f64,
        format: Option<FormatId>,
    ) -> EngineStatus {
        self.record(Call::SetRow {
            sheet,
            row,
            height,
            format,
        });
        self.status
    }

    fn merge_range(
        &mut self,
        sheet: SheetId,
        first_row: i32,
        first_col: i32,
        last_row: i32,
        last_col: i32,
        text: &str,
        format: Option<FormatId>,
    ) -> EngineStatus {
        self.record(Call::MergeRange {
            sheet,
            first_row,
            first_col,
            last_row,
            last_col,
            text: text.to_owned(),
            format,
        });
        self.status
    }

    fn freeze_panes(&mut self, sheet: SheetId, row: i32, col: i32) -> EngineStatus {
        self.record(Call::FreezePanes { sheet, row, col });
        self.status
    }

    fn autofilter(
        &mut self,
        sheet: SheetId,
        first_row: i32,
        first_col: i32,
        last_row: i32,
        last_col: i32,
    ) -> EngineStatus {
        self.record(Call::Autofilter {
            sheet,
            first_row,
            first_col,
            last_row,
            last_col,
        });
        self.status
    }

    fn insert_image(&mut self, sheet: SheetId, row: i32, col: i32, path: &Path) -> EngineStatus {
        self.record(Call::InsertImage {
            sheet,
            row,
            col,
            path: path.to_string_lossy().into_owned(),
        });
        self.status
    }
}
