// Criterion benchmarks for glyphswap-engine.
//
// Run:
//   cargo bench -p glyphswap-engine

use criterion::{Criterion, criterion_group, criterion_main};

use glyphswap_core::options::KanaScript;
use glyphswap_engine::phonetic::{PhonemeMapping, PhonemeTable, PhoneticEncoder, PronunciationTable};

const SENTENCE: &str = "he ran into the cellar with the rest of a box of chocolates \
                        and shouted that the atmosphere was rationally beautiful";

// ---------------------------------------------------------------------------
// Contraction engine
// ---------------------------------------------------------------------------

fn bench_contract(c: &mut Criterion) {
    let words: Vec<&str> = SENTENCE.split(' ').collect();

    c.bench_function("tag_sentence", |b| {
        b.iter(|| std::hint::black_box(glyphswap_ueb::tag(SENTENCE)));
    });

    c.bench_function("contract_words", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(glyphswap_ueb::contract(word));
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Phoneme engine
// ---------------------------------------------------------------------------

fn phonetic_encoder() -> PhoneticEncoder {
    let phonemes: PhonemeTable = [
        ("h", "は", 0.9),
        ("ə", "あ", 0.8),
        ("l", "ら", 0.9),
        ("oʊ", "おう", 0.9),
        ("w", "わ", 0.9),
        ("ɝ", "あー", 0.7),
        ("d", "ど", 0.9),
        ("t", "と", 0.9),
        ("m", "ま", 0.9),
        ("ʌ", "あ", 0.8),
        ("p", "ぷ", 0.9),
        ("ɪ", "い", 0.9),
        ("tʃ", "ち", 0.9),
        ("aɪ", "あい", 0.9),
    ]
    .into_iter()
    .map(|(phoneme, glyph, weight)| (phoneme.to_string(), PhonemeMapping::new(glyph, weight)))
    .collect();

    let mut pronunciations = PronunciationTable::new();
    pronunciations.insert("hello", "həˈloʊ");
    pronunciations.insert("world", "wɝld");
    pronunciations.insert("multiple", "ˈmʌltəpəl");
    pronunciations.insert("multiple", "mʌlˈtɪpəl");

    PhoneticEncoder::with_tables(pronunciations, phonemes)
}

fn bench_phonetic(c: &mut Criterion) {
    let encoder = phonetic_encoder();
    let words = ["hello", "WORLD", "multiple", "unknown"];

    c.bench_function("phonetic_render", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(encoder.render(word, KanaScript::Katakana));
            }
        });
    });
}

criterion_group!(benches, bench_contract, bench_phonetic);
criterion_main!(benches);
