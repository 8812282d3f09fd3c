//! Tagged generational handles.
//!
//! The host sees a handle as a plain 64-bit value. Internally it packs a
//! resource kind, a generation counter, and a slot index:
//!
//! ```text
//! [ kind : 8 | generation : 24 | slot : 32 ]
//! ```
//!
//! The kind tag means a worksheet handle can never be silently accepted where
//! a format handle is expected, and the generation counter means a handle to a
//! freed slot (workbook closed) is detected instead of resolving to whatever
//! resource reused the slot. Zero is the null handle; no packed handle is ever
//! zero because the kind bits are non-zero.

const KIND_SHIFT: u64 = 56;
const GEN_SHIFT: u64 = 32;
const GEN_MASK: u64 = 0x00FF_FFFF;
const SLOT_MASK: u64 = 0xFFFF_FFFF;

/// The three resource kinds a handle can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleKind {
    Workbook = 1,
    Worksheet = 2,
    Format = 3,
}

impl HandleKind {
    fn from_bits(bits: u8) -> Option<Self> {
        Some(match bits {
            1 => HandleKind::Workbook,
            2 => HandleKind::Worksheet,
            3 => HandleKind::Format,
            _ => return None,
        })
    }
}

/// An untyped handle value, exactly as the host transports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct RawHandle(u64);

impl RawHandle {
    pub const NULL: RawHandle = RawHandle(0);

    pub(crate) fn pack(kind: HandleKind, generation: u32, slot: u32) -> Self {
        let bits = ((kind as u64) << KIND_SHIFT)
            | ((u64::from(generation) & GEN_MASK) << GEN_SHIFT)
            | u64::from(slot);
        RawHandle(bits)
    }

    /// Reconstruct a handle from the host's 64-bit value.
    pub fn from_u64(bits: u64) -> Self {
        RawHandle(bits)
    }

    /// The 64-bit value the host transports.
    pub fn as_u64(self) -> u64 {
        self.0
    }

    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    /// The kind tag, if the bits carry a valid one.
    pub fn kind(self) -> Option<HandleKind> {
        HandleKind::from_bits((self.0 >> KIND_SHIFT) as u8)
    }

    pub(crate) fn generation(self) -> u32 {
        ((self.0 >> GEN_SHIFT) & GEN_MASK) as u32
    }

    pub(crate) fn slot(self) -> u32 {
        (self.0 & SLOT_MASK) as u32
    }
}

macro_rules! typed_handle {
    ($(#[$doc:meta])* $name:ident, $kind:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[repr(transparent)]
        pub struct $name(RawHandle);

        impl $name {
            pub const NULL: $name = $name(RawHandle::NULL);

            pub(crate) const KIND: HandleKind = $kind;

            /// Wrap a host-supplied handle value without validating it.
            pub fn from_raw(raw: RawHandle) -> Self {
                $name(raw)
            }

            pub fn raw(self) -> RawHandle {
                self.0
            }

            pub fn is_null(self) -> bool {
                self.0.is_null()
            }
        }
    };
}

typed_handle!(
    /// Handle to an open workbook.
    PbWorkbook,
    HandleKind::Workbook
);

typed_handle!(
    /// Handle to a worksheet inside an open workbook.
    PbWorksheet,
    HandleKind::Worksheet
);

typed_handle!(
    /// Handle to a reusable cell format inside an open workbook.
    PbFormat,
    HandleKind::Format
);

struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Generational slot arena backing one handle kind.
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
}

impl<T> Arena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Store a value, returning `(slot, generation)` for handle packing.
    pub fn insert(&mut self, value: T) -> (u32, u32) {
        if let Some(slot) = self.free.pop() {
            let entry = &mut self.slots[slot as usize];
            entry.value = Some(value);
            (slot, entry.generation)
        } else {
            let slot = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                value: Some(value),
            });
            (slot, 0)
        }
    }

    pub fn get(&self, slot: u32, generation: u32) -> Option<&T> {
        let entry = self.slots.get(slot as usize)?;
        if entry.generation != generation {
            return None;
        }
        entry.value.as_ref()
    }

    pub fn get_mut(&mut self, slot: u32, generation: u32) -> Option<&mut T> {
        let entry = self.slots.get_mut(slot as usize)?;
        if entry.generation != generation {
            return None;
        }
        entry.value.as_mut()
    }

    /// Remove a value if the generation still matches, invalidating every
    /// outstanding handle to the slot.
    pub fn remove(&mut self, slot: u32, generation: u32) -> Option<T> {
        let entry = self.slots.get_mut(slot as usize)?;
        if entry.generation != generation {
            return None;
        }
        let value = entry.value.take()?;
        entry.generation = bump(entry.generation);
        self.free.push(slot);
        Some(value)
    }

    /// Free a slot regardless of the handle generation. Used for cascaded
    /// teardown when an owning workbook closes.
    pub fn free_slot(&mut self, slot: u32) -> Option<T> {
        let entry = self.slots.get_mut(slot as usize)?;
        let value = entry.value.take()?;
        entry.generation = bump(entry.generation);
        self.free.push(slot);
        Some(value)
    }

    /// Free every occupied slot, invalidating all outstanding handles.
    pub fn clear(&mut self) {
        for (slot, entry) in self.slots.iter_mut().enumerate() {
            if entry.value.take().is_some() {
                entry.generation = bump(entry.generation);
                self.free.push(slot as u32);
            }
        }
    }
}

// Generations wrap at 24 bits to stay within the packed handle layout.
fn bump(generation: u32) -> u32 {
    (generation + 1) & (GEN_MASK as u32)
}
