use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use crate::{metric::Metric, node::Node};
use super::{ConvertError, ConvertObserver, ConvertResult, Converter};

/// One conversion request.
///
/// # Example
///
/// ```
/// use nodescale::{convert::{Conversion, Converter}, metric::Metric, node::Node};
///
/// let delay = Conversion::builder()
///     .metric(Metric::Delay)
///     .value(10.0)
///     .src(Node::hp(45))
///     .dst(Node::hp(14))
///     .dst_vdd(0.9)
///     .build()
///     .and_then(|conversion| conversion.run(&Converter::new()))
///     .unwrap();
/// assert!(delay > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Deserialize, Serialize)]
#[builder(pattern = "owned", setter(into), build_fn(error = "ConvertError"))]
pub struct Conversion {
    pub metric: Metric,
    pub value: f64,
    pub src: Node,
    pub dst: Node,

    #[builder(default = "1.0")]
    #[serde(default = "default_vdd")]
    pub src_vdd: f64,

    #[builder(default = "1.0")]
    #[serde(default = "default_vdd")]
    pub dst_vdd: f64,
}

fn default_vdd() -> f64 {
    1.0
}

impl Conversion {
    pub fn builder() -> ConversionBuilder {
        ConversionBuilder::default()
    }

    pub fn run<O: ConvertObserver>(&self, converter: &Converter<'_, O>) -> ConvertResult<f64> {
        converter.convert(self.metric, self.value, self.src, self.dst, self.src_vdd, self.dst_vdd)
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use crate::convert::SilentObserver;
    use super::*;

    #[test]
    fn test_default_vdd() {
        let conversion = Conversion::builder()
            .metric(Metric::Energy)
            .value(3.0)
            .src(Node::bare(130))
            .dst(Node::lp(20))
            .build()
            .unwrap();
        assert_eq!(conversion.src_vdd, 1.0);
        assert_eq!(conversion.dst_vdd, 1.0);

        let converter = Converter::new().with_observer(SilentObserver);
        let explicit = converter.convert(Metric::Energy, 3.0, Node::bare(130), Node::lp(20), 1.0, 1.0).unwrap();
        assert_relative_eq!(conversion.run(&converter).unwrap(), explicit);
    }

    #[test]
    fn test_missing_value() {
        let err = Conversion::builder()
            .metric(Metric::Area)
            .src(Node::bare(90))
            .dst(Node::bare(45))
            .build()
            .unwrap_err();
        assert_eq!(err, ConvertError::InvalidArgument("missing required value 'value'".into()));
    }

    #[test]
    fn test_deserialize() {
        let conversion: Conversion = serde_json::from_str(
            r#"{ "metric": "power", "value": 50, "src": "90", "dst": "HP45", "dst_vdd": 0.9 }"#
        ).unwrap();
        assert_eq!(conversion.metric, Metric::Power);
        assert_eq!(conversion.dst, Node::hp(45));
        assert_eq!(conversion.src_vdd, 1.0);
        assert_eq!(conversion.dst_vdd, 0.9);
    }
}
