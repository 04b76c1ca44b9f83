//=========================================================================
// Destroy Queue
//=========================================================================
//
// Objects waiting for destruction. Requests are queued during a tick and
// the runtime sweeps the queue once every object has been updated.
//
// The direct children are captured when destruction is requested; children
// attached afterwards survive the sweep.
//
//=========================================================================

//=== Internal Modules ====================================================

use crate::core::object::ObjectId;

//=== DestroyRequest ======================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DestroyRequest {
    pub(crate) object: ObjectId,
    pub(crate) children: Vec<ObjectId>,
}

//=== DestroyQueue ========================================================

#[derive(Debug, Default)]
pub(crate) struct DestroyQueue {
    queue: Vec<DestroyRequest>,
}

impl DestroyQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queues `object` and its current direct children.
    ///
    /// Requesting the same object twice before a sweep is a no-op.
    pub(crate) fn push(&mut self, object: ObjectId, children: Vec<ObjectId>) -> bool {
        if self.contains(object) {
            return false;
        }
        self.queue.push(DestroyRequest { object, children });
        true
    }

    pub(crate) fn contains(&self, object: ObjectId) -> bool {
        self.queue.iter().any(|request| request.object == object)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all requests, leaving the queue empty.
    pub(crate) fn take(&mut self) -> Vec<DestroyRequest> {
        std::mem::take(&mut self.queue)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_requests_are_ignored() {
        let mut queue = DestroyQueue::new();
        let id = ObjectId::new(0, 1);

        assert!(queue.push(id, vec![ObjectId::new(1, 1)]));
        assert!(!queue.push(id, Vec::new()));
        assert_eq!(queue.len(), 1);

        let requests = queue.take();
        assert_eq!(requests[0].children, vec![ObjectId::new(1, 1)]);
        assert!(queue.is_empty());
    }
}
