//! Builds the byte -> parser dispatch table once at engine construction
//! (§4.4.1), so the per-character hot loop is a single array index instead
//! of a linear scan over every registered parser.

use std::collections::HashMap;

use crate::error::ConfigError;

use super::parser::InlineParser;

pub struct Dispatch {
    /// Index into the parser list that owns this ASCII byte, if any.
    by_byte: [Option<usize>; 128],
    /// Parsers with no claimed first-chars; tried, in order, on any byte
    /// (and as the fallback after a claimed byte's owner declines).
    fallback: Vec<usize>,
}

impl Dispatch {
    pub fn build(parsers: &[Box<dyn InlineParser>]) -> Result<Self, ConfigError> {
        let mut by_byte: [Option<usize>; 128] = [None; 128];
        let mut owners: HashMap<u8, &'static str> = HashMap::new();
        let mut fallback = Vec::new();

        for (idx, parser) in parsers.iter().enumerate() {
            let claims = parser.first_chars();
            if claims.is_empty() {
                fallback.push(idx);
                continue;
            }
            for &byte in claims {
                if byte >= 128 {
                    return Err(ConfigError::NonAsciiFirstChar { parser: parser.name(), byte });
                }
                if let Some(&first) = owners.get(&byte) {
                    return Err(ConfigError::DuplicateFirstChar {
                        first,
                        second: parser.name(),
                        byte,
                        ch: byte as char,
                    });
                }
                owners.insert(byte, parser.name());
                by_byte[byte as usize] = Some(idx);
            }
        }

        Ok(Self { by_byte, fallback })
    }

    /// Parser indices to try, in priority order, for a leading byte.
    pub fn candidates(&self, byte: u8) -> Vec<usize> {
        let mut out = Vec::new();
        if byte < 128 {
            if let Some(idx) = self.by_byte[byte as usize] {
                out.push(idx);
            }
        }
        out.extend(self.fallback.iter().copied());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::InlineParserState;

    #[derive(Debug)]
    struct Stub(&'static str, &'static [u8]);
    impl InlineParser for Stub {
        fn name(&self) -> &'static str {
            self.0
        }
        fn first_chars(&self) -> &'static [u8] {
            self.1
        }
        fn match_inline(&self, _state: &mut InlineParserState<'_, '_>) -> bool {
            false
        }
    }

    #[test]
    fn duplicate_first_char_is_a_config_error() {
        let parsers: Vec<Box<dyn InlineParser>> = vec![Box::new(Stub("a", b"*")), Box::new(Stub("b", b"*"))];
        assert!(matches!(Dispatch::build(&parsers), Err(ConfigError::DuplicateFirstChar { .. })));
    }

    #[test]
    fn non_ascii_first_char_is_a_config_error() {
        let parsers: Vec<Box<dyn InlineParser>> = vec![Box::new(Stub("a", &[200]))];
        assert!(matches!(Dispatch::build(&parsers), Err(ConfigError::NonAsciiFirstChar { .. })));
    }
}
