/// Receives diagnostic events emitted during an evaluation.
///
/// Observers let callers inspect intermediate quantities without changing an
/// evaluator's signature or result. They are purely observational: nothing an
/// observer does can alter the value an evaluator returns.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer.
pub trait Observer<E> {
    /// Observes a single event.
    fn observe(&mut self, event: &E);
}

/// Blanket implementation for observer closures.
impl<E, F> Observer<E> for F
where
    F: FnMut(&E),
{
    fn observe(&mut self, event: &E) {
        self(event);
    }
}

/// A no-op observer.
impl<E> Observer<E> for () {
    fn observe(&mut self, _event: &E) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit_all<O: Observer<u32>>(observer: &mut O, events: &[u32]) {
        for event in events {
            observer.observe(event);
        }
    }

    #[test]
    fn closure_sees_every_event() {
        let mut seen = Vec::new();
        let mut observer = |event: &u32| seen.push(*event);

        emit_all(&mut observer, &[3, 1, 4]);

        assert_eq!(seen, vec![3, 1, 4]);
    }

    #[test]
    fn unit_observer_ignores_events() {
        emit_all(&mut (), &[1, 2]);
    }
}
