//! JavaScript-facing chord analyzer
//!
//! `ChordAnalyzer` wraps an `Analyzer` built once from the reference tables.
//! The editor calls `analyzeText` on every keystroke, so the last input and
//! its result are kept and reused while the chords on the page don't change.

use wasm_bindgen::prelude::*;

use crate::analysis::{AnalysisResult, Analyzer, AnalyzerConfig};
use crate::data::ReferenceData;
use crate::fretboard;
use crate::parse::{extract_chord_tokens, parse_chord};
use crate::theory;
use crate::{wasm_info, wasm_log, wasm_warn};

use super::helpers::{deserialize, serialize, validate_octave, validation_error};

#[wasm_bindgen]
pub struct ChordAnalyzer {
    analyzer: Analyzer,
    /// Normalized token string of the last `analyzeText` call and its result
    last: Option<(String, AnalysisResult)>,
}

#[wasm_bindgen]
impl ChordAnalyzer {
    /// Analyzer over the built-in reference tables
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ChordAnalyzer, JsValue> {
        let analyzer = Analyzer::with_defaults().map_err(|e| validation_error(e.to_string()))?;
        Ok(Self::wrap(analyzer))
    }

    /// Analyzer over caller-supplied table text
    #[wasm_bindgen(js_name = fromTables)]
    pub fn from_tables(scales: &str, progressions: &str) -> Result<ChordAnalyzer, JsValue> {
        let data = ReferenceData::from_tables(scales, progressions)
            .map_err(|e| validation_error(e.to_string()))?;
        for warning in &data.warnings {
            wasm_warn!("{}", warning);
        }
        Ok(Self::wrap(Analyzer::new(data, AnalyzerConfig::default())))
    }

    /// Built-in tables with a configuration object; omitted fields keep defaults
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<ChordAnalyzer, JsValue> {
        let config: AnalyzerConfig = deserialize(config, "Invalid analyzer config")?;
        config.validate().map_err(|e| validation_error(e.to_string()))?;
        Self::with_builtin_data(config)
    }

    /// Built-in tables with a YAML configuration document
    #[wasm_bindgen(js_name = withConfigYaml)]
    pub fn with_config_yaml(yaml: &str) -> Result<ChordAnalyzer, JsValue> {
        let config = AnalyzerConfig::from_yaml(yaml).map_err(|e| validation_error(e.to_string()))?;
        Self::with_builtin_data(config)
    }

    /// Analyze an array of chord tokens
    pub fn analyze(&self, tokens: JsValue) -> Result<JsValue, JsValue> {
        let values: Vec<serde_json::Value> = deserialize(tokens, "Chords must be an array")?;
        let result = self.analyzer.analyze_values(&values);
        wasm_log!("analyze: {} chords, status {:?}", result.input_chords.len(), result.status);
        serialize(&result, "Failed to serialize analysis")
    }

    /// Analyze every chord in a block of editor text
    #[wasm_bindgen(js_name = analyzeText)]
    pub fn analyze_text(&mut self, text: &str) -> Result<JsValue, JsValue> {
        let result = self.analyze_text_cached(text);
        serialize(&result, "Failed to serialize analysis")
    }

    /// Per-line analysis for the floating result boxes
    #[wasm_bindgen(js_name = analyzeLines)]
    pub fn analyze_lines(&self, text: &str) -> Result<JsValue, JsValue> {
        let lines = self.analyzer.analyze_lines(text);
        serialize(&lines, "Failed to serialize line analysis")
    }

    #[wasm_bindgen(js_name = isDataLoaded)]
    pub fn is_data_loaded(&self) -> bool {
        self.analyzer.data().is_loaded()
    }

    #[wasm_bindgen(js_name = keyCount)]
    pub fn key_count(&self) -> usize {
        self.analyzer.data().keys.len()
    }

    #[wasm_bindgen(js_name = progressionCount)]
    pub fn progression_count(&self) -> usize {
        self.analyzer.data().progressions.len()
    }

    /// Non-fatal problems found while loading the tables
    #[wasm_bindgen(js_name = loadWarnings)]
    pub fn load_warnings(&self) -> Result<JsValue, JsValue> {
        serialize(&self.analyzer.data().warnings, "Failed to serialize warnings")
    }
}

impl ChordAnalyzer {
    fn wrap(analyzer: Analyzer) -> Self {
        wasm_info!(
            "Chord analyzer ready: {} scales, {} progressions",
            analyzer.data().keys.len(),
            analyzer.data().progressions.len()
        );
        Self { analyzer, last: None }
    }

    fn with_builtin_data(config: AnalyzerConfig) -> Result<ChordAnalyzer, JsValue> {
        let data = ReferenceData::builtin().map_err(|e| validation_error(e.to_string()))?;
        Ok(Self::wrap(Analyzer::new(data, config)))
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Analyze text, reusing the previous result when the chords are unchanged
    pub fn analyze_text_cached(&mut self, text: &str) -> AnalysisResult {
        let tokens = extract_chord_tokens(text);
        let key = tokens.join(" ");

        if let Some((last_key, result)) = &self.last {
            if *last_key == key {
                return result.clone();
            }
        }

        let result = self.analyzer.analyze(&tokens);
        self.last = Some((key, result.clone()));
        result
    }
}

/// Chord tokens found in a block of text, line by line
#[wasm_bindgen(js_name = extractChordTokens)]
pub fn extract_chord_tokens_js(text: &str) -> js_sys::Array {
    extract_chord_tokens(text)
        .into_iter()
        .map(|token| JsValue::from_str(&token))
        .collect()
}

/// Parse a single chord symbol into root, accidentals and quality
#[wasm_bindgen(js_name = parseChord)]
pub fn parse_chord_js(token: &str) -> Result<JsValue, JsValue> {
    let chord = parse_chord(token).map_err(|e| validation_error(e.to_string()))?;
    serialize(&chord, "Failed to serialize chord")
}

/// Notes, intervals and frequencies of a chord voiced from `octave`
#[wasm_bindgen(js_name = chordInfo)]
pub fn chord_info_js(token: &str, octave: i32) -> Result<JsValue, JsValue> {
    validate_octave(octave).map_err(validation_error)?;
    let info = theory::chord_info(token, octave).map_err(|e| validation_error(e.to_string()))?;
    serialize(&info, "Failed to serialize chord info")
}

/// Other black-key spelling of a chord ("C#m" -> "Dbm"), if it has one
#[wasm_bindgen(js_name = enharmonicEquivalent)]
pub fn enharmonic_equivalent_js(chord: &str) -> Option<String> {
    theory::enharmonic_equivalent(chord)
}

#[wasm_bindgen(js_name = supportedQualities)]
pub fn supported_qualities_js() -> Result<JsValue, JsValue> {
    serialize(&theory::supported_qualities(), "Failed to serialize qualities")
}

/// Chord name for a guitar fret shape such as "x32010"; null when every string is muted
#[wasm_bindgen(js_name = detectFretboardChord)]
pub fn detect_fretboard_chord_js(notation: &str) -> Result<JsValue, JsValue> {
    match fretboard::detect_chord(notation) {
        Some(chord) => {
            wasm_log!("fretboard {} -> {}", notation, chord.chord);
            serialize(&chord, "Failed to serialize fretboard chord")
        }
        None => Ok(JsValue::NULL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalysisStatus;

    fn analyzer() -> ChordAnalyzer {
        ChordAnalyzer {
            analyzer: Analyzer::with_defaults().unwrap(),
            last: None,
        }
    }

    #[test]
    fn test_cached_analysis_reused_for_same_chords() {
        let mut api = analyzer();
        let first = api.analyze_text_cached("C Am F G");
        assert_eq!(first.status, AnalysisStatus::Ok);
        assert_eq!(api.last.as_ref().map(|(k, _)| k.as_str()), Some("C Am F G"));

        // different text, same chords
        let second = api.analyze_text_cached("C  Am\nF G");
        assert_eq!(first, second);
    }

    #[test]
    fn test_cache_refreshes_on_new_chords() {
        let mut api = analyzer();
        api.analyze_text_cached("C G");
        let result = api.analyze_text_cached("Am Dm");
        assert_eq!(result.input_chords, vec!["Am", "Dm"]);
        assert_eq!(api.last.as_ref().map(|(k, _)| k.as_str()), Some("Am Dm"));
    }

    #[test]
    fn test_empty_text() {
        let mut api = analyzer();
        assert_eq!(api.analyze_text_cached("").status, AnalysisStatus::Empty);
        assert_eq!(api.analyzer().data().keys.len(), 30);
    }
}
