use crate::node::Node;
use super::LookupError;

const AREA_SIZES: [u32; 11] = [180, 130, 90, 65, 45, 32, 20, 16, 14, 10, 7];

// Row = destination size, column = source size, both in AREA_SIZES order
const AREA_RATIOS: [[f64; 11]; 11] = [
    //  180    130    90     65     45     32     20     16     14      10      7
    [   1.0,  0.34,  0.15,  0.08, 0.053, 0.025, 0.011,  0.01, 0.0093, 0.0055, 0.0032], // 180
    [   2.9,   1.0,  0.44,  0.23,  0.16, 0.072, 0.033,  0.03,  0.027,  0.016, 0.0092], // 130
    [   6.6,   2.3,   1.0,  0.53,  0.35,  0.16, 0.075, 0.067,  0.061,  0.036,  0.021], // 90
    [  12.0,   4.3,   1.9,   1.0,  0.66,  0.31,  0.14,  0.13,   0.12,  0.068,  0.039], // 65
    [  19.0,   6.4,   2.8,   1.5,   1.0,  0.46,  0.21,  0.19,   0.17,    0.1,  0.059], // 45
    [  40.0,  14.0,   6.1,   3.3,   2.2,   1.0,  0.46,  0.41,   0.38,   0.22,   0.13], // 32
    [  88.0,  30.0,  13.0,   7.1,   4.7,   2.2,   1.0,  0.89,   0.82,   0.48,   0.28], // 20
    [  99.0,  34.0,  15.0,   7.9,   5.3,   2.4,   1.1,   1.0,   0.91,   0.54,   0.31], // 16
    [ 110.0,  37.0,  16.0,   8.7,   5.8,   2.7,   1.2,   1.1,    1.0,   0.59,   0.34], // 14
    [ 180.0,  63.0,  28.0,  15.0,   9.8,   4.5,   2.1,   1.9,    1.7,    1.0,   0.58], // 10
    [ 320.0, 110.0,  48.0,  25.0,  17.0,   7.8,   3.6,   3.2,    2.9,    1.7,    1.0], // 7
];

static BUILTIN_AREA_TABLE: AreaTable = AreaTable::new(&AREA_SIZES, &AREA_RATIOS);

/// Area ratios between technology sizes.
///
/// `lookup(dst, src)` reads the stored cell as is, the values are never
/// re-derived from each other. Device flavor plays no part in area scaling.
#[derive(Debug)]
pub struct AreaTable {
    sizes: &'static [u32; 11],
    ratios: &'static [[f64; 11]; 11],
}

impl AreaTable {
    pub const fn new(sizes: &'static [u32; 11], ratios: &'static [[f64; 11]; 11]) -> Self {
        Self { sizes, ratios }
    }

    pub fn builtin() -> &'static Self {
        &BUILTIN_AREA_TABLE
    }

    pub fn sizes(&self) -> &[u32] {
        self.sizes
    }

    pub fn lookup(&self, dst: Node, src: Node) -> Result<f64, LookupError> {
        let row = self.index_of(dst)?;
        let col = self.index_of(src)?;
        Ok(self.ratios[row][col])
    }

    #[inline]
    fn index_of(&self, node: Node) -> Result<usize, LookupError> {
        let size = node.size();
        self.sizes
            .iter()
            .position(|&s| s == size)
            .ok_or(LookupError::AreaNodeNotFound(size))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_diagonal_is_one() {
        let table = AreaTable::builtin();
        for &size in table.sizes() {
            assert_eq!(table.lookup(Node::bare(size), Node::bare(size)).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_lookup_direction() {
        let table = AreaTable::builtin();
        assert_eq!(table.lookup(Node::bare(45), Node::bare(90)).unwrap(), 2.8);
        assert_eq!(table.lookup(Node::bare(90), Node::bare(45)).unwrap(), 0.35);
        assert_eq!(table.lookup(Node::bare(7), Node::bare(180)).unwrap(), 320.0);
        assert_eq!(table.lookup(Node::bare(180), Node::bare(7)).unwrap(), 0.0032);
    }

    #[test]
    fn test_flavor_ignored() {
        let table = AreaTable::builtin();
        let bare = table.lookup(Node::bare(32), Node::bare(45)).unwrap();
        let hp = table.lookup(Node::bare(32), Node::hp(45)).unwrap();
        let lp = table.lookup(Node::lp(32), Node::hp(45)).unwrap();
        assert_eq!(bare, hp);
        assert_eq!(bare, lp);
    }

    #[test]
    fn test_unknown_size() {
        let table = AreaTable::builtin();
        assert_eq!(
            table.lookup(Node::bare(90), Node::bare(999)),
            Err(LookupError::AreaNodeNotFound(999))
        );
        assert_eq!(
            table.lookup(Node::hp(5), Node::bare(90)),
            Err(LookupError::AreaNodeNotFound(5))
        );
        assert_eq!(
            table.lookup(Node::bare(28), Node::bare(28)),
            Err(LookupError::AreaNodeNotFound(28))
        );
    }
}
