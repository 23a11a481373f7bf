use tracing::{debug, info};
use crate::{metric::Metric, node::Node};

/// Which end of a conversion a factor belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Destination,
}

/// Trace records produced while a conversion runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConvertEvent {
    Request {
        metric: Metric,
        value: f64,
        src: Node,
        dst: Node,
        src_vdd: f64,
        dst_vdd: f64,
    },

    /// Area ratio read from the area table
    AreaRatio { dst: Node, src: Node, ratio: f64 },

    /// Voltage factor of one side of a delay/energy/power conversion
    Factor { side: Side, node: Node, vdd: f64, factor: f64 },

    Result { metric: Metric, value: f64 },
}

/// Receives the trace of every conversion. Advisory only: nothing an
/// observer does changes the result.
pub trait ConvertObserver {
    fn observe(&self, event: &ConvertEvent);
}

/// Forward events to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

/// Drop every event
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl ConvertObserver for TracingObserver {
    fn observe(&self, event: &ConvertEvent) {
        match *event {
            ConvertEvent::Request { metric, value, src, dst, src_vdd, dst_vdd } => info!(
                "converting {}: {} from {} to {}, source vdd: {}, destination vdd: {}",
                metric, value, src, dst, src_vdd, dst_vdd
            ),
            ConvertEvent::AreaRatio { dst, src, ratio } => {
                debug!("area ratio [{}][{}] = {}", dst, src, ratio)
            }
            ConvertEvent::Factor { side, node, vdd, factor } => {
                debug!("{:?} factor of {} at {}V = {}", side, node, vdd, factor)
            }
            ConvertEvent::Result { metric, value } => info!("scaled {}: {}", metric, value),
        }
    }
}

impl ConvertObserver for SilentObserver {
    fn observe(&self, _: &ConvertEvent) {}
}

impl<O: ConvertObserver + ?Sized> ConvertObserver for &O {
    fn observe(&self, event: &ConvertEvent) {
        (**self).observe(event)
    }
}
