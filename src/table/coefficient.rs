use crate::{metric::Metric, node::Node};
use super::LookupError;

/// Fitted supply-voltage model of one process node.
///
/// - `[0..4]`: delay, cubic in V
/// - `[4..7]`: energy, quadratic in V
/// - `[7..10]`: power, quadratic in V
///
/// Coefficients are ordered from the highest power of V down to the constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceCoefficients(pub [f64; 10]);

impl DeviceCoefficients {
    pub fn delay_factor(&self, vdd: f64) -> f64 {
        let c = &self.0;
        c[0] * vdd.powi(3) + c[1] * vdd.powi(2) + c[2] * vdd + c[3]
    }

    pub fn energy_factor(&self, vdd: f64) -> f64 {
        let c = &self.0;
        c[4] * vdd.powi(2) + c[5] * vdd + c[6]
    }

    pub fn power_factor(&self, vdd: f64) -> f64 {
        let c = &self.0;
        c[7] * vdd.powi(2) + c[8] * vdd + c[9]
    }

    /// Voltage factor of a voltage dependent metric, `None` for area
    pub fn factor(&self, metric: Metric, vdd: f64) -> Option<f64> {
        match metric {
            Metric::Area => None,
            Metric::Delay => Some(self.delay_factor(vdd)),
            Metric::Energy => Some(self.energy_factor(vdd)),
            Metric::Power => Some(self.power_factor(vdd)),
        }
    }
}

const fn entry(node: Node, coefficients: [f64; 10]) -> (Node, DeviceCoefficients) {
    (node, DeviceCoefficients(coefficients))
}

const DEVICE_COEFFICIENTS: [(Node, DeviceCoefficients); 18] = [
    entry(Node::bare(180), [    0.0, 97.09, -356.7, 406.5,      0.0,    24.64,   -17.98,     0.0, 101000.0, -79720.0]),
    entry(Node::bare(130), [ -76.65, 334.9, -493.4, 275.8,    7.171,   -6.709,    2.904, 27020.0, -15450.0,   5630.0]),
    entry(Node::bare(90),  [ -60.34, 262.5, -384.2, 210.9,    4.762,   -4.781,    2.092, 17320.0, -11230.0,   4328.0]),
    entry(Node::bare(65),  [  -53.3, 230.4, -333.9, 178.6,    3.755,   -4.398,    1.975, 12890.0, -10510.0,   4362.0]),
    entry(Node::hp(45),    [ -501.6, 1567.0, -1619.0, 566.1,  1.018,  -0.3107,   0.1539,  5462.0,  -1760.0,    522.4]),
    entry(Node::hp(32),    [-1047.0, 2982.0, -2797.0, 873.5, 0.8367,  -0.4341,   0.1701,  4001.0,  -1733.0,    533.6]),
    entry(Node::lp(45),    [ -285.7, 1239.0, -1795.0, 898.8,  1.103,   -0.362,   0.2767,  6297.0,  -3009.0,   1124.0]),
    entry(Node::lp(32),    [ -325.9, 1374.0, -1922.0, 913.2, 0.9559,  -0.7823,    0.471,  4557.0,  -3037.0,   1323.0]),
    entry(Node::hp(20),    [    0.0, 34.63, -66.37, 41.15,    0.373,  -0.1582,  0.04104,  2922.0,  -1286.0,    299.9]),
    entry(Node::hp(16),    [    0.0,  24.8, -47.52, 28.87,   0.2958,  -0.1241,  0.03024,  2133.0,   -882.6,    197.7]),
    entry(Node::hp(14),    [ -40.66, 109.2, -100.6, 35.92,   0.2363, -0.09675,  0.02239,  1675.0,   -711.0,    159.0]),
    entry(Node::hp(10),    [ -34.95, 93.65, -85.99,  30.4,   0.2068, -0.09311,  0.02375,  1456.0,   -621.6,    143.8]),
    entry(Node::hp(7),     [ -28.58,  76.6, -70.26, 24.69,   0.1776, -0.09097,  0.02447,  1179.0,   -515.7,    123.4]),
    entry(Node::lp(20),    [ -160.5, 514.1, -558.6, 217.5,   0.2632,    -0.14,  0.06841,  2096.0,   -962.4,    287.1]),
    entry(Node::lp(16),    [ -114.6, 366.7, -397.4, 153.6,   0.2139,  -0.1187,  0.05639,  1609.0,   -715.5,    205.7]),
    entry(Node::lp(14),    [ -85.37, 271.6, -292.2, 111.4,   0.1556, -0.06472,  0.03066,  1259.0,   -554.1,    152.3]),
    entry(Node::lp(10),    [ -71.76, 228.6, -246.3, 93.91,   0.1261,  -0.0518,  0.02769,  1046.0,   -422.7,    118.9]),
    entry(Node::lp(7),     [ -61.79, 196.1, -210.3, 79.55,  0.09365, -0.03409,  0.02043,   815.2,   -307.3,    87.54]),
];

static BUILTIN_COEFFICIENT_TABLE: CoefficientTable = CoefficientTable::new(&DEVICE_COEFFICIENTS);

/// Device coefficients keyed by the full node identity.
///
/// `Node::Bare(45)` and `Node::hp(45)` are different keys: below 65nm only
/// the flavored nodes are present.
#[derive(Debug)]
pub struct CoefficientTable {
    entries: &'static [(Node, DeviceCoefficients)],
}

impl CoefficientTable {
    pub const fn new(entries: &'static [(Node, DeviceCoefficients)]) -> Self {
        Self { entries }
    }

    pub fn builtin() -> &'static Self {
        &BUILTIN_COEFFICIENT_TABLE
    }

    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.entries.iter().map(|(node, _)| *node)
    }

    pub fn lookup(&self, node: Node) -> Result<&DeviceCoefficients, LookupError> {
        self.entries
            .iter()
            .find(|(n, _)| *n == node)
            .map(|(_, coefficients)| coefficients)
            .ok_or(LookupError::CoefficientNodeNotFound(node))
    }
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;
    use super::*;

    #[test]
    fn test_builtin_nodes() {
        let table = CoefficientTable::builtin();
        assert_eq!(table.nodes().count(), 18);
        for size in [180, 130, 90, 65] {
            assert!(table.lookup(Node::bare(size)).is_ok());
        }
        for size in [45, 32, 20, 16, 14, 10, 7] {
            assert!(table.lookup(Node::hp(size)).is_ok());
            assert!(table.lookup(Node::lp(size)).is_ok());
        }
    }

    #[test]
    fn test_bare_small_node_missing() {
        let table = CoefficientTable::builtin();
        assert_eq!(
            table.lookup(Node::bare(45)),
            Err(LookupError::CoefficientNodeNotFound(Node::bare(45)))
        );
        assert!(table.lookup(Node::hp(65)).is_err());
    }

    #[test]
    fn test_factors_at_one_volt() {
        let table = CoefficientTable::builtin();
        let n90 = table.lookup(Node::bare(90)).unwrap();
        assert_abs_diff_eq!(n90.delay_factor(1.0), -60.34 + 262.5 - 384.2 + 210.9, epsilon = 1e-9);
        assert_abs_diff_eq!(n90.energy_factor(1.0), 4.762 - 4.781 + 2.092, epsilon = 1e-9);
        assert_abs_diff_eq!(n90.power_factor(1.0), 10418.0, epsilon = 1e-9);

        let hp45 = table.lookup(Node::hp(45)).unwrap();
        assert_abs_diff_eq!(hp45.power_factor(1.0), 4224.4, epsilon = 1e-9);
    }

    #[test]
    fn test_factor_by_metric() {
        let coefficients = CoefficientTable::builtin().lookup(Node::lp(7)).unwrap();
        let vdd = 0.8;
        assert_eq!(coefficients.factor(Metric::Area, vdd), None);
        assert_eq!(coefficients.factor(Metric::Delay, vdd), Some(coefficients.delay_factor(vdd)));
        assert_eq!(coefficients.factor(Metric::Energy, vdd), Some(coefficients.energy_factor(vdd)));
        assert_eq!(coefficients.factor(Metric::Power, vdd), Some(coefficients.power_factor(vdd)));
        assert_abs_diff_eq!(
            coefficients.energy_factor(vdd),
            0.09365 * 0.64 - 0.03409 * 0.8 + 0.02043,
            epsilon = 1e-12
        );
    }
}
