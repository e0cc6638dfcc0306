// Scored rendering of transcriptions

use crate::phonetic::table::PhonemeTable;

/// A fully mapped transcription.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendering {
    pub text: String,
    pub score: f64,
}

/// Render one transcription through the phoneme table.
///
/// Returns `None` if any segmented phoneme has no mapping. An empty
/// segmentation renders to an empty text with score zero.
pub fn render_transcription(table: &PhonemeTable, transcription: &str) -> Option<Rendering> {
    let mut text = String::new();
    let mut score = 0.0;
    for phoneme in table.segment(transcription) {
        let Some(mapping) = table.get(phoneme) else {
            log::debug!("no mapping for phoneme {phoneme:?} in {transcription:?}");
            return None;
        };
        text.push_str(&mapping.glyph);
        score += mapping.weight;
    }
    Some(Rendering { text, score })
}

/// Pick the best rendering among a word's transcriptions.
///
/// The highest score wins; on equal scores the earlier transcription is
/// kept. Transcriptions that do not fully map are skipped.
pub fn best_rendering<S: AsRef<str>>(
    table: &PhonemeTable,
    transcriptions: &[S],
) -> Option<Rendering> {
    let mut best: Option<Rendering> = None;
    for transcription in transcriptions {
        let Some(candidate) = render_transcription(table, transcription.as_ref()) else {
            continue;
        };
        let better = match &best {
            None => true,
            Some(current) => candidate.score > current.score,
        };
        if better {
            best = Some(candidate);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonetic::table::PhonemeMapping;

    fn table() -> PhonemeTable {
        [
            ("h", "は", 0.9),
            ("ə", "あ", 0.8),
            ("l", "ら", 0.9),
            ("oʊ", "おう", 0.9),
            ("ɛ", "え", 0.5),
            ("t", "と", 1.0),
            ("d", "ど", 1.0),
        ]
        .into_iter()
        .map(|(p, g, w)| (p.to_string(), PhonemeMapping::new(g, w)))
        .collect()
    }

    #[test]
    fn render_sums_weights() {
        let r = render_transcription(&table(), "həˈloʊ").unwrap();
        assert_eq!(r.text, "はあらおう");
        assert!((r.score - 3.5).abs() < 1e-9);
    }

    #[test]
    fn unknown_characters_render_empty() {
        let r = render_transcription(&table(), "xyz").unwrap();
        assert_eq!(r.text, "");
        assert_eq!(r.score, 0.0);
    }

    #[test]
    fn inserted_phoneme_is_used() {
        let mut t = table();
        t.insert("ʒ", PhonemeMapping::new("じ", 1.0));
        assert_eq!(render_transcription(&t, "ʒə").map(|r| r.text), Some("じあ".to_string()));
    }

    #[test]
    fn higher_score_wins() {
        // "hɛloʊ" scores 3.2, "həloʊ" scores 3.5
        let best = best_rendering(&table(), &["hɛloʊ", "həloʊ"]).unwrap();
        assert_eq!(best.text, "はあらおう");
    }

    #[test]
    fn tie_keeps_first() {
        let best = best_rendering(&table(), &["tə", "də"]).unwrap();
        assert_eq!(best.text, "とあ");
    }

    #[test]
    fn nothing_renders() {
        let empty: [&str; 0] = [];
        assert_eq!(best_rendering(&table(), &empty), None);
    }
}
