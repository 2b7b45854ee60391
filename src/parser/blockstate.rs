use super::types::{BlockState, StateMap};
use crate::error::TemplateError;

/// Split one block notation line into its base identifier and state map.
///
/// The state segment runs from after the first `[` to the last `]` on the
/// line, so multiple bracket groups collapse into one flat attribute list.
/// A `[` with no closing `]` leaves the state empty.
pub fn parse_block_state(line: &str) -> Result<BlockState, TemplateError> {
    let Some(open) = line.find('[') else {
        return Ok(BlockState {
            base: line.trim().to_string(),
            state: StateMap::new(),
        });
    };

    let state = match line.rfind(']') {
        Some(close) if close > open => parse_state_list(&line[open + 1..close])?,
        _ => StateMap::new(),
    };

    Ok(BlockState {
        base: line[..open].to_string(),
        state,
    })
}

/// Parse a comma-separated `key=value` list. Values lose surrounding
/// whitespace and one enclosing layer of double quotes per side.
fn parse_state_list(raw: &str) -> Result<StateMap, TemplateError> {
    let mut state = StateMap::new();

    for pair in raw.split(',') {
        let Some((key, value)) = pair.split_once('=') else {
            return Err(TemplateError::MissingEquals {
                pair: pair.trim().to_string(),
            });
        };

        let mut value = value.trim();
        if let Some(stripped) = value.strip_prefix('"') {
            value = stripped;
        }
        if let Some(stripped) = value.strip_suffix('"') {
            value = stripped;
        }

        state.insert(key.trim().to_string(), value.to_string());
    }

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_only() {
        let parsed = parse_block_state("minecraft:stone").unwrap();
        assert_eq!(parsed.base, "minecraft:stone");
        assert!(parsed.state.is_empty());
    }

    #[test]
    fn test_base_and_state() {
        let parsed = parse_block_state("minecraft:lever[face=wall,facing=north]").unwrap();
        assert_eq!(parsed.base, "minecraft:lever");
        assert_eq!(parsed.state.get("face"), Some(&"wall".to_string()));
        assert_eq!(parsed.state.get("facing"), Some(&"north".to_string()));
    }

    #[test]
    fn test_quoted_value_is_unquoted() {
        let parsed = parse_block_state("x[a=\"foo\"]").unwrap();
        assert_eq!(parsed.state.get("a"), Some(&"foo".to_string()));
    }

    #[test]
    fn test_whitespace_trimmed_around_pairs() {
        let parsed = parse_block_state("x[ a = 1 , b = 2 ]").unwrap();
        assert_eq!(parsed.state.get("a"), Some(&"1".to_string()));
        assert_eq!(parsed.state.get("b"), Some(&"2".to_string()));
    }

    #[test]
    fn test_value_keeps_extra_equals() {
        // Split happens on the first `=` only.
        let parsed = parse_block_state("x[expr=a=b]").unwrap();
        assert_eq!(parsed.state.get("expr"), Some(&"a=b".to_string()));
    }

    #[test]
    fn test_two_bracket_groups_merge() {
        // Greedy close: everything between the first `[` and the last `]`
        // becomes one attribute list, `]...[` junk and all.
        let parsed = parse_block_state("x[a=1][b=2]").unwrap();
        assert_eq!(parsed.base, "x");
        assert_eq!(parsed.state.get("a"), Some(&"1][b=2".to_string()));
        assert_eq!(parsed.state.len(), 1);
    }

    #[test]
    fn test_unclosed_bracket_yields_empty_state() {
        let parsed = parse_block_state("x[a=1").unwrap();
        assert_eq!(parsed.base, "x");
        assert!(parsed.state.is_empty());
    }

    #[test]
    fn test_pair_without_equals_is_error() {
        let err = parse_block_state("x[a=1,broken]").unwrap_err();
        assert!(matches!(err, TemplateError::MissingEquals { ref pair } if pair == "broken"));
    }

    #[test]
    fn test_empty_bracket_list_is_error() {
        assert!(parse_block_state("x[]").is_err());
    }

    #[test]
    fn test_repeated_key_last_wins() {
        let parsed = parse_block_state("x[a=1,a=2]").unwrap();
        assert_eq!(parsed.state.get("a"), Some(&"2".to_string()));
        assert_eq!(parsed.state.len(), 1);
    }
}
