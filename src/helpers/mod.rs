use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HelperError {
	#[error("IO error: {0}")]
	Io(#[from] io::Error),
	#[error("Other Error {0}")]
	FromString(String),
}

impl HelperError {
	pub fn msg<M: Into<String>>(msg: M) -> Self {
		HelperError::FromString(msg.into())
	}
}

/// Print `prompt` and read one line from stdin, without the trailing
/// newline. EOF is an error, the interactive flow cannot continue.
pub fn prompt_line(prompt: &str) -> Result<String, HelperError> {
	let mut stdout = io::stdout();
	write!(stdout, "{}", prompt)?;
	stdout.flush()?;
	let mut line = String::new();
	let read = io::stdin().lock().read_line(&mut line)?;
	if read == 0 {
		return Err(HelperError::msg("Unexpected end of input"));
	}
	Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Keep prompting until the user enters an integer >= 1. Bad input is
/// never fatal, it just loops.
pub fn prompt_slide_count(prompt: &str) -> Result<u32, HelperError> {
	loop {
		let line = prompt_line(prompt)?;
		match line.trim().parse::<u32>() {
			Ok(n) if n >= 1 => return Ok(n),
			Ok(_) => println!("Please enter an integer greater than or equal to 1."),
			Err(_) => println!("Invalid input. Please enter an integer."),
		}
	}
}

/// Build the output filename for a deck: spaces in the topic become
/// underscores, then the timestamp is concatenated after the .pptx
/// extension. Appending after the extension looks like a bug but it is
/// what the tool has always produced, so it stays until someone decides
/// otherwise.
pub fn output_filename(topic: &str, timestamp: &str) -> String {
	format!("{}_Presentation.pptx{}", topic.replace(' ', "_"), timestamp)
}
