// Prompt templates for the teammate check.
//
// Substitution is verbatim — player names go into the template untouched and
// the upstream model is trusted to treat them as data. That trust boundary is
// deliberate: the only consumer of the output is the model itself.

use crate::check::models::Mode;

/// Single-player template. Replace `{single_player}` and `{player_list}`.
const SINGLE_PROMPT_TEMPLATE: &str = r#"I have a single focus soccer player: "{single_player}".
I also have a list of other players provided below, separated by newlines:
---
{player_list}
---
Your task is to determine if the focus player, "{single_player}", has ever been an official teammate (at a professional club or on a national team) with ANY of the players on the provided list.
Please format your response as follows:
1. Start with a clear summary sentence.
2. If matches are found, create a bulleted list specifying the player, team, and approximate years."#;

/// Common-teammate template. Replace `{player_list}`.
const COMMON_PROMPT_TEMPLATE: &str = r#"I have a list of soccer players provided below, separated by newlines:
---
{player_list}
---
Your task is to find one or more players who have been an official teammate (at a professional club or on a national team) with EVERY player on the provided list.
Work through this step by step: for each candidate you consider, verify a shared team with each listed player before including them.
Please format your response as follows:
1. Start with a clear summary sentence naming any common teammates found.
2. If found, create a bulleted list justifying the connection to each listed player, with the team and approximate years.
3. If no player connects to everyone on the list, say so clearly."#;

/// Builds the upstream prompt. Pure string templating, no side effects.
pub fn build_prompt(mode: Mode, player_list: &str, single_player: &str) -> String {
    match mode {
        Mode::Common => COMMON_PROMPT_TEMPLATE.replace("{player_list}", player_list),
        Mode::Single => SINGLE_PROMPT_TEMPLATE
            .replace("{single_player}", single_player)
            .replace("{player_list}", player_list),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_prompt_contains_both_inputs_verbatim() {
        let prompt = build_prompt(Mode::Single, "Xavi\nIniesta\nPuyol", "Lionel Messi");
        assert!(prompt.contains("Lionel Messi"));
        assert!(prompt.contains("Xavi\nIniesta\nPuyol"));
    }

    #[test]
    fn test_single_prompt_does_not_escape_input() {
        // Names pass through untouched, markup and all.
        let prompt = build_prompt(Mode::Single, "<b>Xavi</b>", "O'Brien \"Quote\"");
        assert!(prompt.contains("<b>Xavi</b>"));
        assert!(prompt.contains(r#"O'Brien "Quote""#));
    }

    #[test]
    fn test_common_prompt_omits_single_player() {
        let prompt = build_prompt(Mode::Common, "Xavi\nIniesta", "Lionel Messi");
        assert!(!prompt.contains("Lionel Messi"));
        assert!(prompt.contains("Xavi\nIniesta"));
        assert!(prompt.contains("EVERY player"));
    }

    #[test]
    fn test_common_prompt_asks_for_step_by_step_reasoning() {
        let prompt = build_prompt(Mode::Common, "A\nB", "");
        assert!(prompt.contains("step by step"));
    }

    #[test]
    fn test_empty_inputs_still_produce_a_prompt() {
        // The proxy degrades to empty substitutions rather than failing.
        let prompt = build_prompt(Mode::Single, "", "");
        assert!(prompt.contains("separated by newlines"));
        assert!(!prompt.contains("{player_list}"));
        assert!(!prompt.contains("{single_player}"));
    }
}
