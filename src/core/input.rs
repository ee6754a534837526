use crate::domain::model::{BatchRequest, GenerationOptions};
use crate::domain::ports::Console;
use crate::utils::error::{Result, UsernameError};
use crate::utils::validation::{parse_min_length, parse_positive_int, parse_yes_no};

const COUNT_PROMPT: &str = "How many usernames would you like to generate? ";
const NUMBERS_PROMPT: &str = "Include numbers? (y/n): ";
const SPECIALS_PROMPT: &str = "Include special characters? (y/n): ";
const MIN_LENGTH_PROMPT: &str = "Minimum length? (press enter to skip): ";

/// Asks every question in order. Invalid numbers are re-asked for as long as
/// input keeps coming; a closed input stream ends collection with `InputClosed`.
pub fn collect_request<C: Console>(console: &mut C) -> Result<BatchRequest> {
    let count = ask_until_valid(console, COUNT_PROMPT, parse_positive_int)?;
    let include_numbers = parse_yes_no(&ask_required(console, NUMBERS_PROMPT)?);
    let include_specials = parse_yes_no(&ask_required(console, SPECIALS_PROMPT)?);
    let min_length = ask_until_valid(console, MIN_LENGTH_PROMPT, parse_min_length)?;

    let request = BatchRequest {
        count,
        options: GenerationOptions {
            include_numbers,
            include_specials,
            min_length,
        },
    };
    tracing::debug!("Collected request: {:?}", request);
    Ok(request)
}

fn ask_required<C: Console>(console: &mut C, prompt: &str) -> Result<String> {
    console.ask(prompt)?.ok_or(UsernameError::InputClosed)
}

fn ask_until_valid<C, T, F>(console: &mut C, prompt: &str, parse: F) -> Result<T>
where
    C: Console,
    F: Fn(&str) -> Result<T>,
{
    loop {
        let answer = ask_required(console, prompt)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable_input() => {
                tracing::debug!("Rejected answer {:?}: {}", answer, e);
                console.say(&e.user_friendly_message())?;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::LineConsole;
    use std::io::Cursor;

    fn console(script: &str) -> LineConsole<Cursor<String>, Vec<u8>> {
        LineConsole::new(Cursor::new(script.to_string()), Vec::new())
    }

    #[test]
    fn test_collects_all_answers() {
        let mut console = console("3\ny\nn\n10\n");
        let request = collect_request(&mut console).unwrap();
        assert_eq!(
            request,
            BatchRequest {
                count: 3,
                options: GenerationOptions {
                    include_numbers: true,
                    include_specials: false,
                    min_length: Some(10),
                },
            }
        );
    }

    #[test]
    fn test_blank_minimum_skips() {
        let mut console = console("1\nn\nY\n\n");
        let request = collect_request(&mut console).unwrap();
        assert_eq!(request.options.min_length, None);
        assert!(request.options.include_specials);
    }

    #[test]
    fn test_reprompts_until_valid() {
        let mut console = console("abc\n0\n-4\n2\nn\nn\nzero\n0\n8\n");
        let request = collect_request(&mut console).unwrap();
        assert_eq!(request.count, 2);
        assert_eq!(request.options.min_length, Some(8));

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches("Invalid input. Please enter a number.").count(), 2);
        assert_eq!(output.matches("Please enter a positive number.").count(), 3);
        assert_eq!(output.matches(COUNT_PROMPT).count(), 4);
    }

    #[test]
    fn test_closed_input_stops_collection() {
        let mut console = console("abc\nxyz\n");
        assert!(matches!(
            collect_request(&mut console),
            Err(UsernameError::InputClosed)
        ));
    }
}
