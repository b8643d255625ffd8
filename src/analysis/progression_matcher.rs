//! Progression matching: membership, fixed-index sequence bonus and key relevance

use crate::data::ProgressionEntry;
use crate::theory::KeyRelationships;

use super::config::AnalyzerConfig;
use super::equivalence::ChordLabel;
use super::result::ProgressionMatch;

#[derive(Debug, Clone)]
pub struct PreparedProgression {
    pub name: String,
    pub chords: Vec<ChordLabel>,
}

impl PreparedProgression {
    pub fn new(entry: &ProgressionEntry) -> Self {
        Self {
            name: entry.name.clone(),
            chords: entry.chords.iter().map(|c| ChordLabel::new(c.as_str())).collect(),
        }
    }

    /// Input chords found anywhere in the progression
    pub fn match_count(&self, inputs: &[ChordLabel]) -> usize {
        inputs
            .iter()
            .filter(|input| self.chords.iter().any(|chord| input.matches(chord)))
            .count()
    }

    /// Input chords sitting at the same index as in the progression
    pub fn sequence_score(&self, inputs: &[ChordLabel]) -> usize {
        inputs
            .iter()
            .enumerate()
            .filter(|(index, input)| self.chords.get(*index).map_or(false, |chord| input.matches(chord)))
            .count()
    }
}

/// Relevance of a progression's key to the anchor key of the input
pub fn key_relevance(
    anchor: Option<&str>,
    progression_key: &str,
    relationships: &KeyRelationships,
    config: &AnalyzerConfig,
) -> f64 {
    match anchor {
        Some(anchor) => config.relevance.score(relationships.relation(anchor, progression_key)),
        None => config.relevance.unrelated,
    }
}

/// Progressions sharing at least one chord with the input, best first,
/// capped at `max_progressions`
pub fn match_progressions(
    progressions: &[PreparedProgression],
    inputs: &[ChordLabel],
    anchor: Option<&str>,
    relationships: &KeyRelationships,
    config: &AnalyzerConfig,
) -> Vec<ProgressionMatch> {
    let mut matches: Vec<ProgressionMatch> = progressions
        .iter()
        .filter_map(|progression| {
            let match_count = progression.match_count(inputs);
            if match_count == 0 {
                return None;
            }
            Some(ProgressionMatch {
                name: progression.name.clone(),
                chords: progression.chords.iter().map(|c| c.text.clone()).collect(),
                match_count,
                sequence_score: progression.sequence_score(inputs),
                key_relevance: key_relevance(anchor, &progression.name, relationships, config),
            })
        })
        .collect();

    matches.sort_by(|a, b| b.rank().total_cmp(&a.rank()));
    matches.truncate(config.max_progressions);
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progression(name: &str, chords: &[&str]) -> PreparedProgression {
        PreparedProgression::new(&ProgressionEntry {
            name: name.to_string(),
            chords: chords.iter().map(|c| c.to_string()).collect(),
        })
    }

    fn inputs(chords: &[&str]) -> Vec<ChordLabel> {
        chords.iter().map(|c| ChordLabel::new(*c)).collect()
    }

    #[test]
    fn test_sequence_bonus_for_exact_order() {
        let prog = progression("test", &["I", "V", "vi", "IV"]);
        let input = inputs(&["I", "V", "vi", "IV"]);
        assert_eq!(prog.match_count(&input), 4);
        assert_eq!(prog.sequence_score(&input), 4);
    }

    #[test]
    fn test_sequence_is_positional() {
        let prog = progression("C Major", &["C", "G", "Am", "F"]);
        let input = inputs(&["G", "C", "Am", "F"]);
        assert_eq!(prog.match_count(&input), 4);
        assert_eq!(prog.sequence_score(&input), 2);
    }

    #[test]
    fn test_enharmonic_counts_as_present() {
        let prog = progression("Db Major", &["Db", "Ab", "Bbm", "Gb"]);
        let input = inputs(&["C#", "G#"]);
        assert_eq!(prog.match_count(&input), 2);
        assert_eq!(prog.sequence_score(&input), 2);
    }

    #[test]
    fn test_key_relevance_scores() {
        let rel = KeyRelationships::standard();
        let config = AnalyzerConfig::default();
        assert_eq!(key_relevance(Some("C Major"), "C Major", &rel, &config), 1.5);
        assert_eq!(key_relevance(Some("C Major"), "A Minor", &rel, &config), 1.0);
        assert_eq!(key_relevance(Some("Db Major"), "C# Major", &rel, &config), 0.8);
        assert_eq!(key_relevance(Some("C Major"), "C Minor", &rel, &config), 0.6);
        assert_eq!(key_relevance(Some("C Major"), "G Major", &rel, &config), -0.5);
        assert_eq!(key_relevance(Some("C Major"), "F# Major", &rel, &config), -1.0);
        assert_eq!(key_relevance(None, "C Major", &rel, &config), -1.0);
    }

    #[test]
    fn test_ranking_and_cap() {
        let rel = KeyRelationships::standard();
        let config = AnalyzerConfig {
            max_progressions: 2,
            ..AnalyzerConfig::default()
        };
        let progressions = vec![
            progression("G Major", &["G", "D", "Em", "C"]),
            progression("F# Major", &["F#", "C#", "D#m", "B"]),
            progression("C Major", &["C", "G", "Am", "F"]),
            progression("A Minor", &["Am", "F", "C", "G"]),
        ];
        let result = match_progressions(
            &progressions,
            &inputs(&["C", "G", "Am", "F"]),
            Some("C Major"),
            &rel,
            &config,
        );
        let names: Vec<&str> = result.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["C Major", "A Minor"]);
        assert_eq!(result[0].sequence_score, 4);
        assert_eq!(result[0].key_relevance, 1.5);
        assert_eq!(result[1].key_relevance, 1.0);
    }
}
