use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::{
    Payload,
    monitoring::{Monitor, MonitorId},
};

pub(crate) struct MonitorSet<P: Payload> {
    monitors: Vec<(MonitorId, Box<dyn Monitor<P>>)>,
    last_id: MonitorId,
    ids_to_remove: Vec<MonitorId>,
}

impl<P: Payload> MonitorSet<P> {
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
            last_id: 0,
            ids_to_remove: Vec::with_capacity(4),
        }
    }

    pub fn add(&mut self, monitor: Box<dyn Monitor<P>>) -> MonitorId {
        let id = self.last_id;
        self.last_id += 1;
        self.monitors.push((id, monitor));
        id
    }

    pub fn remove(&mut self, id: MonitorId) -> bool {
        let before = self.monitors.len();
        self.monitors.retain(|(m, _)| *m != id);
        self.monitors.len() != before
    }

    pub fn notify(&mut self, f: impl Fn(&dyn Monitor<P>)) {
        for (id, monitor) in &self.monitors {
            let result = catch_unwind(AssertUnwindSafe(|| f(monitor.as_ref())));
            if result.is_err() {
                tracing::error!(monitor_id = %id, "Monitor panicked, removing");
                self.ids_to_remove.push(*id);
            }
        }

        for id in self.ids_to_remove.drain(..) {
            self.monitors.retain(|(m, _)| *m != id);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }
}
