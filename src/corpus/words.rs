//! Word-frequency extraction over poem contents.
//!
//! A deliberately simple segmentation for classical Chinese verse: match a
//! fixed lexicon of common two-character phrases, then supplement with
//! high-frequency single characters. Consumers (e.g. a word cloud) only
//! need a ranked term list, not linguistically precise tokens.

use std::collections::HashMap;

use super::types::models::Poem;

/// Common phrases of classical verse: scenery, sentiment, time and place.
const LEXICON: &[&str] = &[
    "春风", "秋月", "夏日", "冬雪", "山水", "江河", "湖海", "花草", "树木",
    "青山", "绿水", "白云", "明月", "夕阳", "朝霞", "星辰", "雨露", "霜雪",
    "桃花", "梅花", "荷花", "菊花", "兰花", "松树", "柳树", "梧桐", "芭蕉",
    "思君", "怀古", "离别", "相思", "愁绪", "孤独", "寂寞", "惆怅", "怀念",
    "春日", "夏夜", "秋晨", "冬夕", "黄昏", "清晨", "深夜", "故乡", "他乡",
    "江南", "塞北", "京城", "山村", "水乡", "边塞", "田园", "佳人", "知己",
    "故人", "知音", "游子", "诗词", "文章", "书画", "烟雾",
];

/// Single characters too common to be meaningful on their own.
const STOP_CHARS: &[char] = &['的', '了', '在', '是', '有', '和', '与', '及', '或', '者'];

/// Punctuation stripped before any matching.
const PUNCTUATION: &[char] = &[
    '，', '。', '！', '？', '；', '：', '“', '”', '‘', '’', '（', '）', '【',
    '】', '《', '》', '、',
];

/// A single character only counts once it appears this often in one poem.
const SINGLE_CHAR_MIN: usize = 3;
/// Cap on how much one poem can contribute for a single character.
const SINGLE_CHAR_CAP: usize = 5;
/// Terms rarer than this across the corpus are dropped.
const MIN_CORPUS_FREQ: usize = 2;
/// Length of the returned ranking.
const TOP_TERMS: usize = 50;

/// Computes the ranked term frequencies over all poem contents.
///
/// Returns at most [`TOP_TERMS`] `(term, count)` pairs sorted by descending
/// count, ties broken by term so the ranking is deterministic.
pub fn word_frequency(poems: &[Poem]) -> Vec<(String, usize)> {
    let mut freq: HashMap<String, usize> = HashMap::new();

    for poem in poems {
        let cleaned: String = poem
            .content
            .chars()
            .map(|c| if PUNCTUATION.contains(&c) { ' ' } else { c })
            .collect();

        for phrase in LEXICON {
            let hits = cleaned.matches(phrase).count();
            if hits > 0 {
                *freq.entry((*phrase).to_string()).or_insert(0) += hits;
            }
        }

        // Supplement with single characters that recur within this poem.
        let mut per_poem: HashMap<char, usize> = HashMap::new();
        for c in cleaned.chars() {
            if is_cjk(c) && !STOP_CHARS.contains(&c) {
                *per_poem.entry(c).or_insert(0) += 1;
            }
        }
        for (c, count) in per_poem {
            if count >= SINGLE_CHAR_MIN {
                *freq.entry(c.to_string()).or_insert(0) += count.min(SINGLE_CHAR_CAP);
            }
        }
    }

    let mut ranked: Vec<(String, usize)> = freq
        .into_iter()
        .filter(|(_, count)| *count >= MIN_CORPUS_FREQ)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(TOP_TERMS);
    ranked
}

fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}
