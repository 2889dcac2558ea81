use thiserror::Error;

use crate::frame::FrameIndex;
use crate::page_table::PageNumber;

/// Errors surfaced by the page-replacement core.
///
/// `OutOfRange` is recoverable: the caller rejected a bad reference and the
/// session state is untouched. `NoFreeFrame` is consumed inside the fault
/// handler to trigger eviction and never escapes it. The remaining variants
/// are consistency violations between the core and its driver; the session
/// state may be wrong once one is returned, so callers should abort.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("page number {page} outside address space of {limit} pages")]
    OutOfRange { page: PageNumber, limit: usize },

    #[error("no free frame available")]
    NoFreeFrame,

    #[error("frame {0} is already free")]
    DoubleFree(FrameIndex),

    #[error("frame {0} is not part of the frame pool")]
    UnknownFrame(FrameIndex),

    #[error("page {0} is not resident")]
    NotResident(PageNumber),

    #[error("page {0} is already resident")]
    AlreadyResident(PageNumber),
}

pub type Result<T> = std::result::Result<T, Error>;
