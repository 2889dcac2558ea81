use std::collections::VecDeque;

use crate::error::{Error, Result};

/// A unit of physical memory capable of holding one page.
pub type FrameIndex = usize;

/// Tracks which physical frames are free and which hold a page.
///
/// Every frame in `0..num_frames` is in exactly one of the two states at all
/// times. Victim selection lives in the replacement policies; this type only
/// does the accounting, so every policy shares identical frame bookkeeping.
pub struct FrameAllocator {
    free: VecDeque<FrameIndex>,
    is_free: Vec<bool>,
}

impl FrameAllocator {
    /// All frames start free, handed out in ascending index order.
    pub fn new(num_frames: usize) -> Self {
        FrameAllocator {
            free: (0..num_frames).collect(),
            is_free: vec![true; num_frames],
        }
    }

    /// Hand out a free frame, or signal `NoFreeFrame` so the caller can
    /// evict and retry. Never blocks.
    pub fn allocate(&mut self) -> Result<FrameIndex> {
        let frame = self.free.pop_front().ok_or(Error::NoFreeFrame)?;
        self.is_free[frame] = false;
        Ok(frame)
    }

    /// Return a frame to the free pool after its occupant was evicted.
    pub fn release(&mut self, frame: FrameIndex) -> Result<()> {
        match self.is_free.get(frame).copied() {
            None => return Err(Error::UnknownFrame(frame)),
            Some(true) => return Err(Error::DoubleFree(frame)),
            Some(false) => {}
        }
        self.is_free[frame] = true;
        self.free.push_back(frame);
        Ok(())
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    pub fn num_frames(&self) -> usize {
        self.is_free.len()
    }

    pub fn is_free(&self, frame: FrameIndex) -> bool {
        self.is_free.get(frame).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_handed_out_in_order() {
        let mut frames = FrameAllocator::new(3);
        assert_eq!(frames.allocate(), Ok(0));
        assert_eq!(frames.allocate(), Ok(1));
        assert_eq!(frames.allocate(), Ok(2));
        assert_eq!(frames.allocate(), Err(Error::NoFreeFrame));
    }

    #[test]
    fn test_release_recycles_frame() {
        let mut frames = FrameAllocator::new(2);
        let a = frames.allocate().unwrap();
        let _b = frames.allocate().unwrap();

        frames.release(a).unwrap();
        assert_eq!(frames.free_count(), 1);
        assert_eq!(frames.allocate(), Ok(a));
        assert_eq!(frames.allocate(), Err(Error::NoFreeFrame));
    }

    #[test]
    fn test_double_free_rejected() {
        let mut frames = FrameAllocator::new(2);
        let a = frames.allocate().unwrap();
        frames.release(a).unwrap();
        assert_eq!(frames.release(a), Err(Error::DoubleFree(a)));
        // A frame that was never allocated is free already
        assert_eq!(frames.release(1), Err(Error::DoubleFree(1)));
    }

    #[test]
    fn test_unknown_frame_rejected() {
        let mut frames = FrameAllocator::new(2);
        assert_eq!(frames.release(5), Err(Error::UnknownFrame(5)));
    }

    #[test]
    fn test_free_and_assigned_partition_the_pool() {
        let mut frames = FrameAllocator::new(4);
        let a = frames.allocate().unwrap();
        let b = frames.allocate().unwrap();
        frames.release(a).unwrap();

        let free: usize = (0..4).filter(|&f| frames.is_free(f)).count();
        assert_eq!(free, frames.free_count());
        assert_eq!(frames.free_count(), 3);
        assert!(!frames.is_free(b));
    }
}
