use std::io::{self, BufRead, Write};

use super::*;

/// One line from stdin, without the trailing newline. Not masked.
pub(super) fn read_password() -> Result<String> {
    eprint!("password: ");
    io::stderr().flush().ok();
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub(super) fn password_or_prompt(password: Option<String>) -> Result<String> {
    match password {
        Some(p) => Ok(p),
        None => read_password(),
    }
}

/// `y`/`yes` confirms; anything else, including EOF, declines.
pub(super) fn confirm_on_stdin(prompt: &str) -> bool {
    eprint!("{} [y/N] ", prompt);
    io::stderr().flush().ok();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(_) => is_yes(&line),
        Err(err) => {
            tracing::debug!(error = %err, "confirmation read failed");
            false
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// `--yes` answers every prompt up front.
pub(super) fn confirmer(yes: bool) -> impl FnMut(&str) -> bool {
    move |prompt: &str| yes || confirm_on_stdin(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_explicit_yes_confirms() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }
}
