//! Slot allocator backing the vertex, edge and face tables.
//!
//! A [`NodePool`] hands out stable `(index, generation)` handles. Freed
//! slots go on a LIFO free list and are reused before the backing vector
//! grows. Growing the vector moves records in memory but never changes a
//! handle, so traversals holding handles survive allocation.

use std::marker::PhantomData;

use crate::mesh_error::MeshLiteError;
use crate::topology::handle::{PoolHandle, RawHandle};

#[derive(Clone, Debug, PartialEq)]
struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Generational slot pool for records of type `T` addressed by handles `H`.
#[derive(Clone, Debug, PartialEq)]
pub struct NodePool<H, T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    live: usize,
    _handle: PhantomData<H>,
}

impl<H, T> Default for NodePool<H, T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
            _handle: PhantomData,
        }
    }
}

impl<H: PoolHandle, T> NodePool<H, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Number of live records.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of slots ever created (live + free).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Store `value` in a free slot, reusing freed slots first.
    pub fn allocate(&mut self, value: T) -> H {
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            debug_assert!(slot.value.is_none(), "free list holds an occupied slot");
            slot.value = Some(value);
            return H::from_raw(RawHandle::new(index, slot.generation));
        }
        let index = u32::try_from(self.slots.len()).expect("node pool exceeds u32::MAX slots");
        self.slots.push(Slot {
            generation: 0,
            value: Some(value),
        });
        H::from_raw(RawHandle::new(index, 0))
    }

    /// Release the slot of `handle` and return its record.
    ///
    /// Fails with [`MeshLiteError::DoubleFree`] if the slot was already
    /// freed since `handle` was issued, and with
    /// [`MeshLiteError::InvalidHandle`] if the index was never allocated.
    pub fn free(&mut self, handle: H) -> Result<T, MeshLiteError> {
        let raw = handle.raw();
        let slot = self
            .slots
            .get_mut(raw.index() as usize)
            .ok_or_else(|| invalid::<H>(raw))?;
        if slot.generation != raw.generation() || slot.value.is_none() {
            return Err(MeshLiteError::DoubleFree {
                kind: H::KIND,
                index: raw.index(),
            });
        }
        let value = slot.value.take().ok_or_else(|| invalid::<H>(raw))?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(raw.index());
        self.live -= 1;
        Ok(value)
    }

    /// True when `handle` names a live record.
    #[inline]
    pub fn contains(&self, handle: H) -> bool {
        self.get(handle).is_some()
    }

    #[inline]
    pub fn get(&self, handle: H) -> Option<&T> {
        let raw = handle.raw();
        self.slots
            .get(raw.index() as usize)
            .filter(|s| s.generation == raw.generation())
            .and_then(|s| s.value.as_ref())
    }

    #[inline]
    pub fn get_mut(&mut self, handle: H) -> Option<&mut T> {
        let raw = handle.raw();
        self.slots
            .get_mut(raw.index() as usize)
            .filter(|s| s.generation == raw.generation())
            .and_then(|s| s.value.as_mut())
    }

    /// Like [`get`](Self::get) but reports a stale handle as an error.
    #[inline]
    pub fn try_get(&self, handle: H) -> Result<&T, MeshLiteError> {
        self.get(handle).ok_or_else(|| invalid::<H>(handle.raw()))
    }

    #[inline]
    pub fn try_get_mut(&mut self, handle: H) -> Result<&mut T, MeshLiteError> {
        self.get_mut(handle)
            .ok_or_else(|| invalid::<H>(handle.raw()))
    }

    /// Live records in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (H, &T)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, s)| {
            s.value
                .as_ref()
                .map(|v| (H::from_raw(RawHandle::new(i as u32, s.generation)), v))
        })
    }

    /// Live handles in slot order.
    pub fn handles(&self) -> impl Iterator<Item = H> + '_ {
        self.iter().map(|(h, _)| h)
    }

    /// Free every record. Generations of occupied slots are bumped so
    /// handles issued before the clear stay invalid.
    pub fn clear(&mut self) {
        self.free.clear();
        for (i, slot) in self.slots.iter_mut().enumerate().rev() {
            if slot.value.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(i as u32);
        }
        self.live = 0;
    }
}

fn invalid<H: PoolHandle>(raw: RawHandle) -> MeshLiteError {
    MeshLiteError::InvalidHandle {
        kind: H::KIND,
        index: raw.index(),
        generation: raw.generation(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh_error::RecordKind;
    use crate::topology::handle::VertexId;

    type Pool = NodePool<VertexId, &'static str>;

    #[test]
    fn allocate_then_get() {
        let mut p = Pool::new();
        let a = p.allocate("a");
        let b = p.allocate("b");
        assert_eq!(p.len(), 2);
        assert_eq!(p.get(a), Some(&"a"));
        assert_eq!(p.get(b), Some(&"b"));
    }

    #[test]
    fn freed_slot_is_reused_with_new_generation() {
        let mut p = Pool::new();
        let a = p.allocate("a");
        let _b = p.allocate("b");
        assert_eq!(p.free(a), Ok("a"));
        let c = p.allocate("c");
        assert_eq!(c.index(), a.index());
        assert_ne!(c, a);
        assert_eq!(p.capacity(), 2);
        assert!(p.get(a).is_none());
        assert_eq!(p.get(c), Some(&"c"));
    }

    #[test]
    fn double_free_is_reported() {
        let mut p = Pool::new();
        let a = p.allocate("a");
        p.free(a).unwrap();
        assert_eq!(
            p.free(a),
            Err(MeshLiteError::DoubleFree {
                kind: RecordKind::Vertex,
                index: a.index()
            })
        );
        // Still a double free after the slot was handed out again.
        let _c = p.allocate("c");
        assert!(matches!(p.free(a), Err(MeshLiteError::DoubleFree { .. })));
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn stale_handle_is_invalid() {
        let mut p = Pool::new();
        let a = p.allocate("a");
        p.free(a).unwrap();
        assert!(matches!(
            p.try_get(a),
            Err(MeshLiteError::InvalidHandle {
                kind: RecordKind::Vertex,
                ..
            })
        ));
    }

    #[test]
    fn growth_keeps_handles_valid() {
        let mut p = NodePool::<VertexId, usize>::with_capacity(1);
        let handles: Vec<_> = (0..1000).map(|i| p.allocate(i)).collect();
        for (i, h) in handles.iter().enumerate() {
            assert_eq!(p.get(*h), Some(&i));
        }
    }

    #[test]
    fn iter_skips_free_slots() {
        let mut p = Pool::new();
        let a = p.allocate("a");
        let b = p.allocate("b");
        let c = p.allocate("c");
        p.free(b).unwrap();
        let live: Vec<_> = p.handles().collect();
        assert_eq!(live, vec![a, c]);
    }

    #[test]
    fn clear_invalidates_everything() {
        let mut p = Pool::new();
        let a = p.allocate("a");
        let b = p.allocate("b");
        p.clear();
        assert!(p.is_empty());
        assert!(!p.contains(a));
        assert!(!p.contains(b));
        let c = p.allocate("c");
        assert_eq!(c.index(), 0);
        assert_ne!(c, a);
    }
}
