//! Bus pins between the core (master) and its device slots.
//!
//! The simulated core owns one `BusPins` block. Master outputs (select vector, write enable,
//! address, write data, transfer type, ready) are shared by every slot; slave outputs (read
//! data, ready, response) exist once per slot. A device only ever sees its own slot through a
//! short-lived `BusSignals` view produced by [`BusPins::port`].

/// AHB-Lite transfer type (HTRANS).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum TransferType {
    /// No transfer requested.
    #[default]
    Idle = 0,
    /// Master inserted a wait inside a burst.
    Busy = 1,
    /// First (or single) transfer of a burst.
    NonSeq = 2,
    /// Remaining transfers of a burst.
    Seq = 3,
}

impl TransferType {
    /// Returns `true` if this transfer type moves data.
    #[inline(always)]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::NonSeq | Self::Seq)
    }
}

/// AHB-Lite slave response (HRESP).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Response {
    /// Transfer completed successfully.
    #[default]
    Okay = 0,
    /// Transfer failed.
    Error = 1,
}

/// All bus pins of one core.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BusPins {
    /// Per-slot select lines (HSELx), driven by the core's decoder.
    pub select: Vec<bool>,
    /// Write enable (HWRITE).
    pub write: bool,
    /// Transfer address (HADDR).
    pub addr: u32,
    /// Write data (HWDATA).
    pub write_data: u32,
    /// Ready fed back to the slaves (HREADY).
    pub master_ready: bool,
    /// Transfer type (HTRANS).
    pub trans: TransferType,
    /// Per-slot read data (HRDATAx).
    pub read_data: Vec<u32>,
    /// Per-slot ready outputs (HREADYOUTx).
    pub slave_ready: Vec<bool>,
    /// Per-slot responses (HRESPx).
    pub response: Vec<Response>,
}

impl BusPins {
    /// Creates a pin block for `slots` devices with every line low.
    pub fn new(slots: usize) -> Self {
        Self {
            select: vec![false; slots],
            write: false,
            addr: 0,
            write_data: 0,
            master_ready: false,
            trans: TransferType::Idle,
            read_data: vec![0; slots],
            slave_ready: vec![false; slots],
            response: vec![Response::Okay; slots],
        }
    }

    /// Number of device slots.
    pub fn slots(&self) -> usize {
        self.select.len()
    }

    /// Drives the master side of an idle cycle.
    pub fn drive_idle(&mut self) {
        self.trans = TransferType::Idle;
        self.write = false;
    }

    /// Builds the view device `slot` evaluates against.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not a valid slot index.
    pub fn port(&mut self, slot: usize) -> BusSignals<'_> {
        BusSignals {
            select: self.select[slot],
            write: self.write,
            addr: self.addr,
            write_data: self.write_data,
            master_ready: self.master_ready,
            trans: self.trans,
            read_data: &mut self.read_data[slot],
            ready: &mut self.slave_ready[slot],
            response: &mut self.response[slot],
        }
    }
}

/// One device slot's view of the bus for a single `evaluate` call.
#[derive(Debug)]
pub struct BusSignals<'a> {
    /// This slot is selected.
    pub select: bool,
    /// Current transfer is a write.
    pub write: bool,
    /// Transfer address.
    pub addr: u32,
    /// Data to store on a write.
    pub write_data: u32,
    /// Previous transfer has completed.
    pub master_ready: bool,
    /// Transfer type.
    pub trans: TransferType,
    /// Data returned on a read.
    pub read_data: &'a mut u32,
    /// Slot is ready to complete the transfer.
    pub ready: &'a mut bool,
    /// Transfer response.
    pub response: &'a mut Response,
}

impl BusSignals<'_> {
    /// Returns `true` if this slot is the target of a data-moving transfer.
    #[inline(always)]
    pub const fn is_transfer(&self) -> bool {
        self.select && self.trans.is_active()
    }
}
