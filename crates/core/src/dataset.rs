//! Observation dataset: payload decoding and the uniform baseline.
//!
//! The results file is a single JSON object whose keys are
//! `"model,temperature,trial"` and whose values are the generated numbers.
//! Decoding flattens it into [`Observation`]s ordered by trial index, which
//! is the order every downstream aggregation relies on.

use std::fmt;

use serde::de::{MapAccess, Visitor};

/// Number of models in a payload.
pub const MODEL_COUNT: usize = 3;
/// Temperature steps 0.0 to 1.0 inclusive, 0.1 apart.
pub const TEMP_STEPS: usize = 11;
/// Trials generated per model+temperature stream.
pub const TRIALS_PER_STREAM: u32 = 200;
/// Outcome values range over 0..=99.
pub const VALUE_SPAN: usize = 100;

/// Single-letter model identifier, exactly as it appears in payload keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Model {
    O,
    C,
    G,
}

impl Model {
    /// Chart order, matching the payload's model letters.
    pub const ALL: [Model; MODEL_COUNT] = [Model::O, Model::C, Model::G];

    pub fn from_code(code: &str) -> Option<Model> {
        match code {
            "O" => Some(Model::O),
            "C" => Some(Model::C),
            "G" => Some(Model::G),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Model::O => "O",
            Model::C => "C",
            Model::G => "G",
        }
    }

    /// Dense index for per-model tables.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Model::O => 0,
            Model::C => 1,
            Model::G => 2,
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Sampling temperature, stored in tenths so grid keys stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Temperature(u8);

impl Temperature {
    /// Builds a temperature from tenths (0..=10), i.e. `5` is 0.5.
    pub fn from_tenths(tenths: u8) -> Option<Temperature> {
        if (tenths as usize) < TEMP_STEPS {
            Some(Temperature(tenths))
        } else {
            None
        }
    }

    /// Parses one-decimal strings like "0.5"; whole numbers pass as "0"/"1".
    pub fn parse(text: &str) -> Option<Temperature> {
        let (whole, frac) = match text.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (text, "0"),
        };
        let whole: u8 = whole.parse().ok()?;
        if whole > 1 || frac.len() != 1 {
            return None;
        }
        let frac = frac.chars().next()?.to_digit(10)? as u8;
        Temperature::from_tenths(whole * 10 + frac)
    }

    #[inline]
    pub fn tenths(self) -> u8 {
        self.0
    }

    /// Grid row index, 0 for 0.0 up to 10 for 1.0.
    #[inline]
    pub fn row(self) -> usize {
        self.0 as usize
    }

    /// All steps in ascending order.
    pub fn all() -> impl Iterator<Item = Temperature> {
        (0..TEMP_STEPS as u8).map(Temperature)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

/// One generated number: which model produced it, under which temperature,
/// at which position in its 200-trial stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub model: Model,
    pub temperature: Temperature,
    pub trial: u32,
    pub value: u8,
}

/// Why a payload failed to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// The document is not a JSON object of string keys to integers.
    Json(String),
    /// A key is not of the form `"model,temperature,trial"`.
    KeyShape(String),
    /// A key names a model letter outside O/C/G.
    ModelCode(String),
    /// A key carries a temperature outside 0.0..=1.0 in tenths.
    Temperature(String),
    /// A key carries a non-integer trial index.
    Trial(String),
    /// An outcome value outside 0..=99.
    Value { key: String, value: u32 },
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadError::Json(msg) => write!(f, "payload: invalid JSON: {msg}"),
            PayloadError::KeyShape(key) => {
                write!(f, "payload: key {key:?} is not \"model,temperature,trial\"")
            }
            PayloadError::ModelCode(key) => write!(f, "payload: unknown model in key {key:?}"),
            PayloadError::Temperature(key) => {
                write!(f, "payload: bad temperature in key {key:?}")
            }
            PayloadError::Trial(key) => write!(f, "payload: bad trial index in key {key:?}"),
            PayloadError::Value { key, value } => {
                write!(f, "payload: value {value} out of range for key {key:?}")
            }
        }
    }
}

impl std::error::Error for PayloadError {}

/// JSON object entries in document order.
///
/// `serde_json`'s default map type sorts keys, which would scramble the
/// payload order that breaks trial ties across streams, so the entries are
/// collected through a map visitor instead.
struct RawEntries(Vec<(String, u32)>);

impl<'de> serde::Deserialize<'de> for RawEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of \"model,temperature,trial\" keys to outcome values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, u32>()? {
                    entries.push(entry);
                }
                Ok(RawEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Decodes a results document into observations ordered by trial index.
///
/// The sort is stable, so observations sharing a trial index keep their
/// document order.
pub fn parse_payload(text: &str) -> Result<Vec<Observation>, PayloadError> {
    let raw: RawEntries =
        serde_json::from_str(text).map_err(|e| PayloadError::Json(e.to_string()))?;
    let mut observations = Vec::with_capacity(raw.0.len());
    for (key, value) in raw.0 {
        observations.push(parse_entry(&key, value)?);
    }
    observations.sort_by_key(|o| o.trial);
    Ok(observations)
}

fn parse_entry(key: &str, value: u32) -> Result<Observation, PayloadError> {
    let mut parts = key.splitn(3, ',');
    let (model, temperature, trial) = match (parts.next(), parts.next(), parts.next()) {
        (Some(model), Some(temperature), Some(trial)) => (model, temperature, trial),
        _ => return Err(PayloadError::KeyShape(key.to_string())),
    };
    let model = Model::from_code(model).ok_or_else(|| PayloadError::ModelCode(key.to_string()))?;
    let temperature = Temperature::parse(temperature)
        .ok_or_else(|| PayloadError::Temperature(key.to_string()))?;
    let trial = trial
        .parse()
        .map_err(|_| PayloadError::Trial(key.to_string()))?;
    if value >= VALUE_SPAN as u32 {
        return Err(PayloadError::Value {
            key: key.to_string(),
            value,
        });
    }
    Ok(Observation {
        model,
        temperature,
        trial,
        value: value as u8,
    })
}

/// Reference dataset with a perfectly uniform outcome distribution: every
/// model and temperature gets 200 trials with `value = trial % 100`.
///
/// Trials are the outermost loop, keeping the list in the ascending trial
/// order that [`cutoff_grid`] scans rely on.
///
/// [`cutoff_grid`]: crate::freq::cutoff_grid
pub fn uniform_baseline() -> Vec<Observation> {
    let mut observations =
        Vec::with_capacity(MODEL_COUNT * TEMP_STEPS * TRIALS_PER_STREAM as usize);
    for trial in 0..TRIALS_PER_STREAM {
        for model in Model::ALL {
            for temperature in Temperature::all() {
                observations.push(Observation {
                    model,
                    temperature,
                    trial,
                    value: (trial % VALUE_SPAN as u32) as u8,
                });
            }
        }
    }
    observations
}

/// Highest trial index present, 0 for an empty list.
pub fn max_trial(observations: &[Observation]) -> u32 {
    observations.iter().map(|o| o.trial).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_codes_round_trip() {
        for model in Model::ALL {
            assert_eq!(Model::from_code(model.label()), Some(model));
        }
        assert_eq!(Model::from_code("X"), None);
        assert_eq!(Model::from_code(""), None);
    }

    #[test]
    fn temperature_parses_one_decimal_strings() {
        assert_eq!(Temperature::parse("0.0"), Temperature::from_tenths(0));
        assert_eq!(Temperature::parse("0.5"), Temperature::from_tenths(5));
        assert_eq!(Temperature::parse("1.0"), Temperature::from_tenths(10));
        assert_eq!(Temperature::parse("1"), Temperature::from_tenths(10));
        assert_eq!(Temperature::parse("1.5"), None);
        assert_eq!(Temperature::parse("0.55"), None);
        assert_eq!(Temperature::parse("2.0"), None);
        assert_eq!(Temperature::parse("x"), None);
    }

    #[test]
    fn temperature_displays_with_one_decimal() {
        let shown: Vec<String> = Temperature::all().map(|t| t.to_string()).collect();
        assert_eq!(shown.first().map(String::as_str), Some("0.0"));
        assert_eq!(shown.get(7).map(String::as_str), Some("0.7"));
        assert_eq!(shown.last().map(String::as_str), Some("1.0"));
    }

    #[test]
    fn payload_parses_and_orders_by_trial() {
        let text = r#"{"O,0.0,1": 40, "C,0.5,0": 7, "G,1.0,1": 12, "O,0.0,0": 3}"#;
        let observations = parse_payload(text).expect("payload is well-formed");
        let order: Vec<(Model, u32, u8)> = observations
            .iter()
            .map(|o| (o.model, o.trial, o.value))
            .collect();
        // Trials ascend; the two trial-1 entries keep document order.
        assert_eq!(
            order,
            vec![
                (Model::C, 0, 7),
                (Model::O, 0, 3),
                (Model::O, 1, 40),
                (Model::G, 1, 12),
            ]
        );
    }

    #[test]
    fn payload_rejects_bad_entries() {
        assert!(matches!(
            parse_payload("not json"),
            Err(PayloadError::Json(_))
        ));
        assert!(matches!(
            parse_payload(r#"{"O,0.0": 1}"#),
            Err(PayloadError::KeyShape(_))
        ));
        assert!(matches!(
            parse_payload(r#"{"X,0.0,0": 1}"#),
            Err(PayloadError::ModelCode(_))
        ));
        assert!(matches!(
            parse_payload(r#"{"O,1.5,0": 1}"#),
            Err(PayloadError::Temperature(_))
        ));
        assert!(matches!(
            parse_payload(r#"{"O,0.0,x": 1}"#),
            Err(PayloadError::Trial(_))
        ));
        assert!(matches!(
            parse_payload(r#"{"O,0.0,0": 100}"#),
            Err(PayloadError::Value { value: 100, .. })
        ));
    }

    #[test]
    fn baseline_covers_every_stream_uniformly() {
        let baseline = uniform_baseline();
        assert_eq!(baseline.len(), 3 * 11 * 200);
        let mut counts = [0u32; VALUE_SPAN];
        for o in &baseline {
            counts[o.value as usize] += 1;
        }
        assert!(counts.iter().all(|&c| c == 66), "each value appears 66x");
        assert_eq!(max_trial(&baseline), 199);
        assert!(
            baseline.windows(2).all(|w| w[0].trial <= w[1].trial),
            "baseline is ordered by ascending trial"
        );
    }

    #[test]
    fn max_trial_of_empty_list_is_zero() {
        assert_eq!(max_trial(&[]), 0);
    }
}
