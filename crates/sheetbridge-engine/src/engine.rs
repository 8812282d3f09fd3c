//! The engine capability trait.

use std::path::Path;

use crate::datetime::DateTime;
use crate::error::Result;
use crate::ids::{FormatId, SheetId, WorkbookId};
use crate::style::{BorderLine, CellAlign};

/// Raw status code as reported by the engine.
///
/// The bridge forwards these unchanged: `0` is success, anything else is
/// engine-defined. Bridge-detected failures never use this channel; they are
/// reported with the FFI layer's own negative sentinels.
pub type EngineStatus = i32;

/// Conventional engine success status.
pub const ENGINE_OK: EngineStatus = 0;

/// Everything the bridge is allowed to ask of the backing spreadsheet engine.
///
/// Object-safe so the FFI registry can hold a `Box<dyn SheetEngine>` installed
/// at startup by the embedding application. All methods take `&mut self`; the
/// registry serializes access behind its mutex, so implementations need no
/// internal locking.
///
/// Text arguments are guaranteed valid UTF-8 by the time they arrive here;
/// legacy code page decoding happens on the FFI side.
pub trait SheetEngine: Send {
    /// Create a workbook that will be written to `path` on close.
    fn workbook_new(&mut self, path: &Path) -> Result<WorkbookId>;

    /// Finalize and write out the workbook. The id and every worksheet/format
    /// id derived from it are dead afterwards.
    fn workbook_close(&mut self, workbook: WorkbookId) -> EngineStatus;

    /// Add a worksheet. `None` lets the engine pick its default name.
    fn add_worksheet(&mut self, workbook: WorkbookId, name: Option<&str>) -> Result<SheetId>;

    /// Add an empty reusable cell format.
    fn add_format(&mut self, workbook: WorkbookId) -> Result<FormatId>;

    // Format setters. Setting an attribute twice leaves the format in the same
    // state as setting it once.

    fn set_bold(&mut self, format: FormatId);
    fn set_italic(&mut self, format: FormatId);
    fn set_font_size(&mut self, format: FormatId, size: f64);
    fn set_font_color(&mut self, format: FormatId, rgb: u32);
    fn set_bg_color(&mut self, format: FormatId, rgb: u32);
    fn set_align(&mut self, format: FormatId, align: CellAlign);
    fn set_border(&mut self, format: FormatId, line: BorderLine);
    fn set_num_format(&mut self, format: FormatId, pattern: &str);
    fn set_text_wrap(&mut self, format: FormatId);

    // Cell writes. Row/column bounds are the engine's to validate.

    fn write_string(
        &mut self,
        sheet: SheetId,
        row: i32,
        col: i32,
        text: &str,
        format: Option<FormatId>,
    ) -> EngineStatus;

    fn write_number(
        &mut self,
        sheet: SheetId,
        row: i32,
        col: i32,
        value: f64,
        format: Option<FormatId>,
    ) -> EngineStatus;

    fn write_formula(
        &mut self,
        sheet: SheetId,
        row: i32,
        col: i32,
        formula: &str,
        format: Option<FormatId>,
    ) -> EngineStatus;

    fn write_datetime(
        &mut self,
        sheet: SheetId,
        row: i32,
        col: i32,
        value: DateTime,
        format: Option<FormatId>,
    ) -> EngineStatus;

    // Layout operations.

    fn set_column(
        &mut self,
        sheet: SheetId,
        first_col: i32,
        last_col: i32,
        width: f64,
        format: Option<FormatId>,
    ) -> EngineStatus;

    fn set_row(
        &mut self,
        sheet: SheetId,
        row: i32,
        height: f64,
        format: Option<FormatId>,
    ) -> EngineStatus;

    #[allow(clippy::too_many_arguments)]
    fn merge_range(
        &mut self,
        sheet: SheetId,
        first_row: i32,
        first_col: i32,
        last_row: i32,
        last_col: i32,
        text: &str,
        format: Option<FormatId>,
    ) -> EngineStatus;

    fn freeze_panes(&mut self, sheet: SheetId, row: i32, col: i32) -> EngineStatus;

    fn autofilter(
        &mut self,
        sheet: SheetId,
        first_row: i32,
        first_col: i32,
        last_row: i32,
        last_col: i32,
    ) -> EngineStatus;

    fn insert_image(&mut self, sheet: SheetId, row: i32, col: i32, path: &Path) -> EngineStatus;
}
