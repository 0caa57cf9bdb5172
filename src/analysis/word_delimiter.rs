//! Word delimiter engine: splits identifiers into subwords.
//!
//! Subwords are split on:
//!  - intra-word delimiters (by default every non alpha-numeric char)
//!     - "Wi-Fi" → "Wi", "Fi"
//!  - lower to upper case transitions
//!     - "PowerShot" → "Power", "Shot"
//!  - letter/digit transitions
//!     - "SD500" → "SD", "500"
//!  - upper to lower case transitions preceded by two or more capitals,
//!    splitting before the last capital
//!     - "XMLElement" → "XMLE", "lement", plus the adjusted pair "Element", "XML"
//!     - "FOOs" stays whole (a lone trailing "s" is a plural, not a new word)
//!  - trailing possessive "'s" is removed
//!     - "O'Neil's" → "O", "Neil"
//!
//! The [`WordDelimiterConfig`] flags decide how subwords are emitted:
//!  - `generate_*_parts` emits the subwords themselves
//!  - `catenate_*` emits maximal runs of word (or number) subwords joined together
//!     - "PowerShot" → "Power", "PowerShot", "Shot"
//!     - "wi-fi" → "wi", "wifi", "wi-fi", "fi" (separator preserving variant)
//!  - `catenate_all` additionally joins every subword of the input
//!     - "wi-fi-4000" → ..., "wifi4000"
//!
//! GUIDs ("61e80ffa-f99b-46ac-8dd0-f3f4171568f3") are only split at dashes, so
//! their hex groups do not explode into single-character tokens.

use std::cmp::max;
use std::fs;
use std::path::Path;

use ahash::AHashSet;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::char_type::{CharClass, CharTypeTable};
use crate::analysis::token::{Token, TokenType, assign_positions};
use crate::error::Result;

lazy_static! {
    static ref DASHED_GUID: Regex = Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
    )
    .expect("dashed GUID pattern is valid");
    static ref PLAIN_GUID: Regex =
        Regex::new(r"^[0-9a-fA-F]{32}$").expect("plain GUID pattern is valid");
}

/// Flags controlling which subwords and combinations are emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordDelimiterConfig {
    /// "PowerShot" → "Power" "Shot"
    pub generate_word_parts: bool,
    /// "500-42" → "500" "42"
    pub generate_number_parts: bool,
    /// "wi-fi" → "wifi"
    pub catenate_words: bool,
    /// "500-42" → "50042"
    pub catenate_numbers: bool,
    /// "wi-fi-4000" → "wifi4000"
    pub catenate_all: bool,
}

impl Default for WordDelimiterConfig {
    fn default() -> Self {
        WordDelimiterConfig {
            generate_word_parts: true,
            generate_number_parts: true,
            catenate_words: false,
            catenate_numbers: false,
            catenate_all: false,
        }
    }
}

impl WordDelimiterConfig {
    /// All flags off: inputs pass through unsplit.
    pub fn none() -> Self {
        WordDelimiterConfig {
            generate_word_parts: false,
            generate_number_parts: false,
            catenate_words: false,
            catenate_numbers: false,
            catenate_all: false,
        }
    }

    /// Generate parts and catenate word and number runs.
    pub fn indexing() -> Self {
        WordDelimiterConfig {
            catenate_words: true,
            catenate_numbers: true,
            ..Default::default()
        }
    }

    /// Whether every flag is off.
    pub fn is_pass_through(&self) -> bool {
        !(self.generate_word_parts
            || self.generate_number_parts
            || self.catenate_words
            || self.catenate_numbers
            || self.catenate_all)
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Whether the text looks like a GUID, with or without dashes.
pub fn is_guid(text: &str) -> bool {
    DASHED_GUID.is_match(text) || PLAIN_GUID.is_match(text)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RunKind {
    Word,
    Number,
}

impl RunKind {
    fn of(class: CharClass) -> Self {
        if class == CharClass::Digit {
            RunKind::Number
        } else {
            RunKind::Word
        }
    }

    fn token_type(self) -> TokenType {
        match self {
            RunKind::Word => TokenType::Word,
            RunKind::Number => TokenType::Number,
        }
    }
}

/// A subword as char indices into the input.
#[derive(Clone, Copy, Debug)]
struct Subword {
    start: usize,
    end: usize,
    kind: RunKind,
    /// Ends with the capital that actually starts the next subword ("XMLE" in "XMLElement").
    abbreviation: bool,
}

enum Scan {
    /// No internal boundary: the input is a single subword starting at 0.
    Whole,
    Subwords(Vec<Subword>),
}

/// Splits identifiers into subword tokens.
#[derive(Clone, Debug, Default)]
pub struct WordDelimiter {
    config: WordDelimiterConfig,
    table: CharTypeTable,
}

impl WordDelimiter {
    /// Create a word delimiter with the default character table.
    pub fn new(config: WordDelimiterConfig) -> Self {
        WordDelimiter {
            config,
            table: CharTypeTable::default(),
        }
    }

    /// Create a word delimiter with a custom character table.
    pub fn with_table(config: WordDelimiterConfig, table: CharTypeTable) -> Self {
        WordDelimiter { config, table }
    }

    /// The emission flags.
    pub fn config(&self) -> &WordDelimiterConfig {
        &self.config
    }

    /// Split one input into tokens.
    ///
    /// Offsets are char offsets shifted by `base_offset`; the first emitted
    /// token carries `position_increment`. Delimiter-only input yields no tokens.
    pub fn split(&self, text: &str, base_offset: usize, position_increment: usize) -> Vec<Token> {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return Vec::new();
        }
        if self.config.is_pass_through() {
            return vec![self.whole_token(text, &chars, base_offset, position_increment)];
        }

        let subwords = match self.scan(&chars) {
            Scan::Whole => {
                return vec![self.whole_token(text, &chars, base_offset, position_increment)];
            }
            Scan::Subwords(subwords) => subwords,
        };

        let mut emission = Emission::new(&chars);
        match subwords.as_slice() {
            [] => return Vec::new(),
            [single] => emission.part(single),
            _ => self.combine(text, &chars, &subwords, &mut emission),
        }
        emission.into_tokens(base_offset, position_increment)
    }

    /// Split an identifier into its subword strings, applying the abbreviation
    /// fix-up: "XMLElement" → ["XML", "Element"], "getHTTPServer2" → ["get", "HTTP", "Server", "2"].
    pub fn split_identifier(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let subwords = match self.scan(&chars) {
            Scan::Whole => return vec![text.to_string()],
            Scan::Subwords(subwords) => subwords,
        };

        let mut parts = Vec::with_capacity(subwords.len());
        let mut carried_start: Option<usize> = None;
        for (i, subword) in subwords.iter().enumerate() {
            let start = carried_start.take().unwrap_or(subword.start);
            let mut end = subword.end;
            let next_is_adjacent = subwords.get(i + 1).is_some_and(|n| n.start == subword.end);
            if subword.abbreviation && next_is_adjacent {
                end -= 1;
                carried_start = Some(end);
            }
            if end > start {
                parts.push(chars[start..end].iter().collect());
            }
        }
        parts
    }

    fn whole_token(
        &self,
        text: &str,
        chars: &[char],
        base_offset: usize,
        position_increment: usize,
    ) -> Token {
        let token_type = if chars.iter().all(|&c| self.table.classify(c) == CharClass::Digit) {
            TokenType::Number
        } else {
            TokenType::Word
        };
        let mut token = Token::with_offsets(text, 0, base_offset, base_offset + chars.len())
            .with_token_type(token_type)
            .with_position_increment(position_increment);
        token.position = position_increment.saturating_sub(1);
        token
    }

    /// Find subword boundaries.
    fn scan(&self, chars: &[char]) -> Scan {
        let end = chars.len();
        let mut subwords = Vec::new();
        if end == 0 {
            return Scan::Subwords(subwords);
        }

        let mut start = 0;
        let mut ch = chars[0];
        let mut class = self.table.classify(ch);

        while start < end {
            // eat delimiters at the start of this subword
            while class == CharClass::Delimiter {
                start += 1;
                if start >= end {
                    break;
                }
                ch = chars[start];
                class = self.table.classify(ch);
            }
            if start >= end {
                break;
            }

            let mut pos = start;
            let first = class;
            let mut last = class;

            loop {
                if class != last {
                    // ALPHA "'" ("s"|"S") (DELIMITER | END)
                    if last.is_alpha()
                        && ch == '\''
                        && pos + 1 < end
                        && matches!(chars[pos + 1], 's' | 'S')
                    {
                        let subword_end = pos;
                        if pos + 2 >= end {
                            pos += 2;
                        } else {
                            let next = chars[pos + 2];
                            let next_class = self.table.classify(next);
                            if next_class == CharClass::Delimiter {
                                ch = next;
                                class = next_class;
                                pos += 2;
                            }
                        }
                        subwords.push(Subword {
                            start,
                            end: subword_end,
                            kind: RunKind::of(first),
                            abbreviation: false,
                        });
                        break;
                    }

                    if last == CharClass::Upper && class == CharClass::Lower {
                        // Only split when at least two capitals precede, and never
                        // on a lone plural "s" ("FOOs", "IDsList").
                        if pos - start > 1 && !self.is_plural_suffix(chars, pos) {
                            subwords.push(Subword {
                                start,
                                end: pos,
                                kind: RunKind::of(first),
                                abbreviation: true,
                            });
                            break;
                        }
                    } else {
                        // LOWER->UPPER, ALPHA<->DIGIT, *->DELIMITER
                        subwords.push(Subword {
                            start,
                            end: pos,
                            kind: RunKind::of(first),
                            abbreviation: false,
                        });
                        break;
                    }
                }

                pos += 1;
                if pos >= end {
                    if start == 0 {
                        return Scan::Whole;
                    }
                    subwords.push(Subword {
                        start,
                        end: pos,
                        kind: RunKind::of(first),
                        abbreviation: false,
                    });
                    break;
                }
                last = class;
                ch = chars[pos];
                class = self.table.classify(ch);
            }

            start = pos;
        }

        Scan::Subwords(subwords)
    }

    fn is_plural_suffix(&self, chars: &[char], pos: usize) -> bool {
        chars[pos] == 's'
            && chars
                .get(pos + 1)
                .is_none_or(|&next| self.table.classify(next) != CharClass::Lower)
    }

    fn combine(&self, text: &str, chars: &[char], subwords: &[Subword], emission: &mut Emission) {
        let config = &self.config;
        let num_words = subwords
            .iter()
            .filter(|s| s.kind == RunKind::Word)
            .count();
        let num_numbers = subwords.len() - num_words;
        let guid = is_guid(text);
        let has_abbreviation = subwords.iter().any(|s| s.abbreviation);
        let leading_underscore = chars.first() == Some(&'_');
        let keep_separators = text.contains('_') || text.contains('-');

        let combos = Combos {
            chars,
            first_start: subwords[0].start,
            guid,
            leading_underscore,
            keep_separators,
        };

        let as_is = !guid
            && !has_abbreviation
            && !config.catenate_all
            && (!config.catenate_words || num_words <= 1)
            && (!config.catenate_numbers || num_numbers <= 1)
            && (config.generate_word_parts || num_words == 0)
            && (config.generate_number_parts || num_numbers == 0);

        if as_is {
            for subword in subwords {
                emission.part(subword);
            }
            return;
        }

        if guid {
            combos.add(
                subwords,
                config.generate_word_parts || config.generate_number_parts,
                config.catenate_words || config.catenate_numbers || config.catenate_all,
                emission,
            );
            return;
        }

        if num_words == 0 {
            combos.add(
                subwords,
                config.generate_number_parts,
                config.catenate_numbers || config.catenate_all,
                emission,
            );
        } else if num_numbers == 0 {
            combos.add(
                subwords,
                config.generate_word_parts,
                config.catenate_words || config.catenate_all,
                emission,
            );
        } else if !config.generate_number_parts
            && !config.generate_word_parts
            && !config.catenate_numbers
            && !config.catenate_words
        {
            combos.add(subwords, false, config.catenate_all, emission);
        } else {
            for run in subwords.chunk_by(|a, b| a.kind == b.kind) {
                let (generate, catenate) = match run[0].kind {
                    RunKind::Word => (config.generate_word_parts, config.catenate_words),
                    RunKind::Number => (config.generate_number_parts, config.catenate_numbers),
                };
                combos.add(run, generate, catenate, emission);
            }
            if config.catenate_all {
                combos.add(subwords, false, true, emission);
            }
        }

        emission.abbreviation_pairs(subwords);
    }
}

/// Per-input context for emitting runs of subwords.
struct Combos<'a> {
    chars: &'a [char],
    first_start: usize,
    guid: bool,
    leading_underscore: bool,
    keep_separators: bool,
}

impl Combos<'_> {
    fn add(&self, run: &[Subword], generate: bool, catenate: bool, emission: &mut Emission) {
        if run.len() == 1 {
            // catenating a single subword is the subword itself
            emission.part(&run[0]);
            return;
        }

        let mut span = run.len();
        if generate {
            if self.guid {
                let groups: Vec<&[Subword]> = run.chunk_by(|a, b| a.end == b.start).collect();
                span = groups.len();
                for group in groups {
                    emission.group(group);
                }
            } else {
                for subword in run {
                    emission.part(subword);
                }
            }
        }

        if catenate {
            let first = &run[0];
            let last = &run[run.len() - 1];
            let joined: String = run
                .iter()
                .flat_map(|s| self.chars[s.start..s.end].iter())
                .collect();

            if self.keep_separators {
                let separated = self.separated(run);
                emission.catenation(joined.clone(), first.start, last.end, span);
                if separated != joined {
                    emission.catenation(separated, first.start, last.end, span);
                }
            } else {
                emission.catenation(joined, first.start, last.end, span);
            }
        }
    }

    /// Join a run keeping single `_`/`-` separators: "foo_bar" → "foo_bar", "foo__bar" → "foobar".
    fn separated(&self, run: &[Subword]) -> String {
        let mut text = String::new();
        if self.leading_underscore && run[0].start == self.first_start {
            text.push('_');
        }
        for (i, subword) in run.iter().enumerate() {
            if i > 0 {
                let previous = &run[i - 1];
                if subword.start == previous.end + 1 {
                    let separator = self.chars[previous.end];
                    if separator == '_' || separator == '-' {
                        text.push(separator);
                    }
                }
            }
            text.extend(self.chars[subword.start..subword.end].iter());
        }
        text
    }
}

struct Candidate {
    text: String,
    start: usize,
    end: usize,
    token_type: TokenType,
    part: bool,
    span: usize,
}

/// Collects the tokens produced for one input before ordering them.
struct Emission<'a> {
    chars: &'a [char],
    candidates: Vec<Candidate>,
}

impl<'a> Emission<'a> {
    fn new(chars: &'a [char]) -> Self {
        Emission {
            chars,
            candidates: Vec::new(),
        }
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    fn part(&mut self, subword: &Subword) {
        self.candidates.push(Candidate {
            text: self.slice(subword.start, subword.end),
            start: subword.start,
            end: subword.end,
            token_type: subword.kind.token_type(),
            part: true,
            span: 1,
        });
    }

    fn group(&mut self, group: &[Subword]) {
        let first = &group[0];
        let last = &group[group.len() - 1];
        let token_type = if group.len() == 1 {
            first.kind.token_type()
        } else if group.iter().any(|s| s.kind == RunKind::Word) {
            TokenType::Word
        } else {
            TokenType::Number
        };
        self.candidates.push(Candidate {
            text: self.slice(first.start, last.end),
            start: first.start,
            end: last.end,
            token_type,
            part: true,
            span: 1,
        });
    }

    fn catenation(&mut self, text: String, start: usize, end: usize, span: usize) {
        self.candidates.push(Candidate {
            text,
            start,
            end,
            token_type: TokenType::Catenated,
            part: false,
            span,
        });
    }

    /// For "XMLE" + "lement": emit "Element" and, when long enough, "XML".
    fn abbreviation_pairs(&mut self, subwords: &[Subword]) {
        for pair in subwords.windows(2) {
            let (previous, next) = (&pair[0], &pair[1]);
            if !previous.abbreviation || previous.end != next.start {
                continue;
            }
            self.candidates.push(Candidate {
                text: self.slice(previous.end - 1, next.end),
                start: previous.end - 1,
                end: next.end,
                token_type: TokenType::Abbreviation,
                part: false,
                span: 1,
            });
            if previous.end - previous.start >= 3 {
                self.candidates.push(Candidate {
                    text: self.slice(previous.start, previous.end - 1),
                    start: previous.start,
                    end: previous.end - 1,
                    token_type: TokenType::Abbreviation,
                    part: false,
                    span: 1,
                });
            }
        }
    }

    fn into_tokens(mut self, base_offset: usize, position_increment: usize) -> Vec<Token> {
        self.candidates.sort_by_key(|c| (c.start, c.end));

        let mut seen = AHashSet::new();
        let mut tokens = Vec::with_capacity(self.candidates.len());
        let mut seen_part = false;
        let mut max_end = 0;

        for candidate in self.candidates {
            if !seen.insert((candidate.text.clone(), candidate.start, candidate.end)) {
                continue;
            }
            let increment = if tokens.is_empty() {
                position_increment
            } else if (candidate.part && seen_part) || candidate.start >= max_end {
                1
            } else {
                0
            };
            seen_part |= candidate.part;
            max_end = max(max_end, candidate.end);

            tokens.push(
                Token::with_offsets(
                    candidate.text,
                    0,
                    base_offset + candidate.start,
                    base_offset + candidate.end,
                )
                .with_token_type(candidate.token_type)
                .with_position_increment(increment)
                .with_position_length(candidate.span),
            );
        }

        assign_positions(&mut tokens);
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    fn split(config: WordDelimiterConfig, text: &str) -> Vec<Token> {
        WordDelimiter::new(config).split(text, 0, 1)
    }

    #[test]
    fn test_simple_word_passes_through() {
        let tokens = split(WordDelimiterConfig::none(), "identifier");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "identifier");
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 10));

        let tokens = split(WordDelimiterConfig::default(), "identifier");
        assert_eq!(texts(&tokens), vec!["identifier"]);
    }

    #[test]
    fn test_all_flags_off_does_not_split() {
        let tokens = split(WordDelimiterConfig::none(), "PowerShot-500");
        assert_eq!(texts(&tokens), vec!["PowerShot-500"]);
    }

    #[test]
    fn test_case_transition() {
        let tokens = split(WordDelimiterConfig::default(), "PowerShot");
        assert_eq!(texts(&tokens), vec!["Power", "Shot"]);
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 5));
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (5, 9));
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_delimiters_are_consumed() {
        let tokens = split(WordDelimiterConfig::default(), "Wi-Fi");
        assert_eq!(texts(&tokens), vec!["Wi", "Fi"]);
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (3, 5));

        let tokens = split(WordDelimiterConfig::default(), "//hello---there, 'dude'");
        assert_eq!(texts(&tokens), vec!["hello", "there", "dude"]);
    }

    #[test]
    fn test_letter_digit_transition() {
        let tokens = split(WordDelimiterConfig::default(), "SD500");
        assert_eq!(texts(&tokens), vec!["SD", "500"]);
        assert_eq!(tokens[0].token_type, TokenType::Word);
        assert_eq!(tokens[1].token_type, TokenType::Number);
    }

    #[test]
    fn test_possessive_removed() {
        let tokens = split(WordDelimiterConfig::default(), "O'Neil's");
        assert_eq!(texts(&tokens), vec!["O", "Neil"]);

        let tokens = split(WordDelimiterConfig::default(), "Bob's-car");
        assert_eq!(texts(&tokens), vec!["Bob", "car"]);
    }

    #[test]
    fn test_delimiter_only_input_yields_nothing() {
        assert!(split(WordDelimiterConfig::default(), "--__--").is_empty());
        assert!(split(WordDelimiterConfig::default(), "").is_empty());
    }

    #[test]
    fn test_single_subword_keeps_inner_offsets() {
        let tokens = split(WordDelimiterConfig::indexing(), "__init__");
        assert_eq!(texts(&tokens), vec!["init"]);
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (2, 6));
    }

    #[test]
    fn test_plural_acronym_stays_whole() {
        assert_eq!(texts(&split(WordDelimiterConfig::default(), "FOOs")), vec!["FOOs"]);
        assert_eq!(
            texts(&split(WordDelimiterConfig::default(), "IDsList")),
            vec!["IDs", "List"]
        );
    }

    #[test]
    fn test_single_capital_does_not_split() {
        assert_eq!(
            texts(&split(WordDelimiterConfig::default(), "Element")),
            vec!["Element"]
        );
    }

    #[test]
    fn test_abbreviation_pair() {
        let tokens = split(WordDelimiterConfig::default(), "XMLElement");
        let texts = texts(&tokens);
        assert_eq!(texts, vec!["XML", "XMLE", "Element", "lement"]);

        let element = tokens.iter().find(|t| t.text == "Element").unwrap();
        assert_eq!(element.token_type, TokenType::Abbreviation);
        assert_eq!((element.start_offset, element.end_offset), (3, 10));

        let xml = tokens.iter().find(|t| t.text == "XML").unwrap();
        assert_eq!((xml.start_offset, xml.end_offset), (0, 3));
    }

    #[test]
    fn test_short_abbreviation_only_joins_forward() {
        // "UI" is too short to trim, only the joined variant is added.
        let tokens = split(WordDelimiterConfig::default(), "UIsettings");
        assert_eq!(texts(&tokens), vec!["UI", "Isettings", "settings"]);
    }

    #[test]
    fn test_catenate_words() {
        let tokens = split(WordDelimiterConfig::indexing(), "PowerShot");
        assert_eq!(texts(&tokens), vec!["Power", "PowerShot", "Shot"]);

        let increments: Vec<usize> = tokens.iter().map(|t| t.position_increment).collect();
        assert_eq!(increments, vec![1, 0, 1]);
        assert_eq!(tokens[1].position_length, 2);
        assert_eq!(tokens[1].token_type, TokenType::Catenated);
    }

    #[test]
    fn test_catenate_only_uses_caller_increment() {
        let config = WordDelimiterConfig {
            generate_word_parts: false,
            generate_number_parts: false,
            catenate_words: true,
            ..WordDelimiterConfig::none()
        };
        let tokens = WordDelimiter::new(config).split("PowerShot", 10, 3);
        assert_eq!(texts(&tokens), vec!["PowerShot"]);
        assert_eq!(tokens[0].position_increment, 3);
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (10, 19));
    }

    #[test]
    fn test_catenate_numbers() {
        let tokens = split(WordDelimiterConfig::indexing(), "500-42");
        assert_eq!(texts(&tokens), vec!["500", "50042", "500-42", "42"]);

        let tokens = split(WordDelimiterConfig::indexing(), "500 42");
        assert_eq!(texts(&tokens), vec!["500", "50042", "42"]);
    }

    #[test]
    fn test_separator_preserving_catenation() {
        let tokens = split(WordDelimiterConfig::indexing(), "foo_bar");
        assert_eq!(texts(&tokens), vec!["foo", "foobar", "foo_bar", "bar"]);

        let tokens = split(WordDelimiterConfig::indexing(), "_foo-bar");
        assert!(texts(&tokens).contains(&"_foo-bar"));

        // two separators in a row are not preserved
        let tokens = split(WordDelimiterConfig::indexing(), "foo__bar");
        assert_eq!(texts(&tokens), vec!["foo", "foobar", "bar"]);
    }

    #[test]
    fn test_mixed_runs_and_catenate_all() {
        let config = WordDelimiterConfig {
            catenate_all: true,
            ..Default::default()
        };
        let tokens = split(config, "wi-fi-4000");
        assert_eq!(texts(&tokens), vec!["wi", "wifi4000", "wi-fi-4000", "fi", "4000"]);
    }

    #[test]
    fn test_word_parts_off_keeps_numbers() {
        let config = WordDelimiterConfig {
            generate_word_parts: false,
            ..Default::default()
        };
        // single subword runs are always emitted
        assert_eq!(texts(&split(config, "SD500")), vec!["SD", "500"]);
        assert!(split(config, "PowerShot").is_empty());
    }

    #[test]
    fn test_guid_only_splits_on_dashes() {
        let tokens = split(
            WordDelimiterConfig::default(),
            "61e80ffa-f99b-46ac-8dd0-f3f4171568f3",
        );
        assert_eq!(
            texts(&tokens),
            vec!["61e80ffa", "f99b", "46ac", "8dd0", "f3f4171568f3"]
        );
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (9, 13));
    }

    #[test]
    fn test_plain_guid_stays_whole() {
        let tokens = split(
            WordDelimiterConfig::default(),
            "7e03caf306ed4ff5962aeffa1fb2f383",
        );
        assert_eq!(texts(&tokens), vec!["7e03caf306ed4ff5962aeffa1fb2f383"]);
    }

    #[test]
    fn test_is_guid() {
        assert!(is_guid("7e03caf3-06ed-4ff5-962a-effa1fb2f383"));
        assert!(is_guid("7E03CAF306ED4FF5962AEFFA1FB2F383"));
        assert!(!is_guid("not-a-guid"));
        assert!(!is_guid("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz"));
    }

    #[test]
    fn test_offsets_are_monotonic_and_bounded() {
        let inputs = [
            "XMLElement",
            "Super-Duper-XL500-42-AutoCoder!",
            "_foo_Bar2Baz__qux",
            "getHTTPServerURLs",
            "a'sb's",
        ];
        let configs = [
            WordDelimiterConfig::default(),
            WordDelimiterConfig::indexing(),
            WordDelimiterConfig {
                catenate_all: true,
                ..WordDelimiterConfig::indexing()
            },
        ];
        for config in configs {
            for input in inputs {
                let tokens = split(config, input);
                let len = input.chars().count();
                for window in tokens.windows(2) {
                    assert!(window[0].start_offset <= window[1].start_offset, "{input}");
                }
                for token in &tokens {
                    assert!(token.end_offset <= len, "{input}");
                    assert!(token.start_offset < token.end_offset, "{input}");
                }
            }
        }
    }

    #[test]
    fn test_custom_table() {
        let table = CharTypeTable::default().with_class('$', CharClass::Lower);
        let delimiter = WordDelimiter::with_table(WordDelimiterConfig::default(), table);
        let tokens = delimiter.split("$scope_value", 0, 1);
        assert_eq!(texts(&tokens), vec!["$scope", "value"]);
    }

    #[test]
    fn test_split_identifier() {
        let delimiter = WordDelimiter::default();
        assert_eq!(delimiter.split_identifier("XMLElement"), vec!["XML", "Element"]);
        assert_eq!(
            delimiter.split_identifier("getHTTPServer2"),
            vec!["get", "HTTP", "Server", "2"]
        );
        assert_eq!(delimiter.split_identifier("plain"), vec!["plain"]);
        assert!(delimiter.split_identifier("__").is_empty());
    }
}
