//! Engine-side resource ids.
//!
//! These are issued by the engine and handed back to it verbatim. They carry no
//! generation or ownership information; the FFI handle registry layers that on
//! top.

macro_rules! engine_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(u32);

        impl $name {
            /// Wrap a raw engine id.
            pub fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            /// The raw id as issued by the engine.
            pub fn as_u32(self) -> u32 {
                self.0
            }
        }
    };
}

engine_id!(
    /// An open workbook inside the engine.
    WorkbookId
);

engine_id!(
    /// A worksheet owned by an engine workbook.
    SheetId
);

engine_id!(
    /// A reusable cell format owned by an engine workbook.
    FormatId
);
