mod error;
mod observer;
mod request;

pub use error::*;
pub use observer::*;
pub use request::*;

use crate::{invalid_arg, metric::Metric, node::Node, table::{AreaTable, CoefficientTable}};

/// Scale a metric value from one process node to another.
///
/// A `Converter` only borrows read-only tables, so one instance can serve any
/// number of callers. Every call is independent.
///
/// # Example
///
/// ```
/// use nodescale::{convert::Converter, metric::Metric, node::Node};
///
/// let converter = Converter::new();
/// let area = converter.convert(Metric::Area, 100.0, Node::bare(90), Node::bare(45), 1.0, 1.0).unwrap();
/// assert!((area - 100.0 / 2.8).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Converter<'t, O = TracingObserver> {
    area: &'t AreaTable,
    coefficients: &'t CoefficientTable,
    observer: O,
}

impl Converter<'static, TracingObserver> {
    /// Builtin tables, events go to `tracing`
    pub fn new() -> Self {
        Self::with_tables(AreaTable::builtin(), CoefficientTable::builtin(), TracingObserver)
    }
}

impl Default for Converter<'static, TracingObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t, O: ConvertObserver> Converter<'t, O> {
    pub fn with_tables(area: &'t AreaTable, coefficients: &'t CoefficientTable, observer: O) -> Self {
        Self { area, coefficients, observer }
    }

    pub fn with_observer<P: ConvertObserver>(self, observer: P) -> Converter<'t, P> {
        Converter {
            area: self.area,
            coefficients: self.coefficients,
            observer,
        }
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Supply voltages are only read for delay, energy and power.
    pub fn convert(
        &self,
        metric: Metric,
        value: f64,
        src: Node,
        dst: Node,
        src_vdd: f64,
        dst_vdd: f64,
    ) -> ConvertResult<f64> {
        if !value.is_finite() {
            invalid_arg!("value to convert must be a finite number, got {}", value);
        }
        if metric.is_voltage_dependent() {
            for (name, vdd) in [("source", src_vdd), ("destination", dst_vdd)] {
                if !(vdd.is_finite() && vdd > 0.0) {
                    invalid_arg!("{} vdd must be a positive number, got {}", name, vdd);
                }
            }
        }

        self.observer.observe(&ConvertEvent::Request { metric, value, src, dst, src_vdd, dst_vdd });

        let scaled = match metric {
            Metric::Area => self.scale_area(value, src, dst)?,
            _ => self.scale_by_voltage(metric, value, src, dst, src_vdd, dst_vdd)?,
        };
        if !scaled.is_finite() {
            return Err(ConvertError::NonFiniteResult { metric });
        }

        self.observer.observe(&ConvertEvent::Result { metric, value: scaled });
        Ok(scaled)
    }

    fn scale_area(&self, value: f64, src: Node, dst: Node) -> ConvertResult<f64> {
        // value / ratio[dst][src], the stored direction is kept as is
        let ratio = self.area.lookup(dst, src)?;
        self.observer.observe(&ConvertEvent::AreaRatio { dst, src, ratio });

        if ratio == 0.0 {
            return Err(ConvertError::DivisionByZero { metric: Metric::Area, node: src });
        }
        Ok(value / ratio)
    }

    fn scale_by_voltage(
        &self,
        metric: Metric,
        value: f64,
        src: Node,
        dst: Node,
        src_vdd: f64,
        dst_vdd: f64,
    ) -> ConvertResult<f64> {
        let src_factor = self.factor(metric, Side::Source, src, src_vdd)?;
        let dst_factor = self.factor(metric, Side::Destination, dst, dst_vdd)?;

        if src_factor == 0.0 {
            return Err(ConvertError::DivisionByZero { metric, node: src });
        }
        Ok(value * dst_factor / src_factor)
    }

    fn factor(&self, metric: Metric, side: Side, node: Node, vdd: f64) -> ConvertResult<f64> {
        let coefficients = self.coefficients.lookup(node)?;
        let factor = match coefficients.factor(metric, vdd) {
            Some(factor) => factor,
            None => invalid_arg!("metric {} has no voltage factor", metric),
        };
        self.observer.observe(&ConvertEvent::Factor { side, node, vdd, factor });

        // huge vdd overflows the polynomial terms
        if !factor.is_finite() {
            return Err(ConvertError::NonFiniteResult { metric });
        }
        Ok(factor)
    }
}

/// Convert with string tokens, resolved against the builtin tables.
///
/// `metric` is one of "area", "delay", "energy", "power".
pub fn convert(metric: &str, value: f64, src: &str, dst: &str, src_vdd: f64, dst_vdd: f64) -> ConvertResult<f64> {
    let metric: Metric = metric.parse()?;
    let src: Node = src.parse()?;
    let dst: Node = dst.parse()?;
    Converter::new().convert(metric, value, src, dst, src_vdd, dst_vdd)
}
