// imgresize/src/prompt.rs
//! Console prompts that gather a [`ResizeRequest`].
//!
//! Every prompt re-asks until it gets an acceptable answer. The input source
//! and the console are injected so the loops can be driven from a fixed list
//! of answers; running out of input ends the loop with
//! [`io::ErrorKind::UnexpectedEof`].

use crate::core::ResizeRequest;
use crate::utils::generate_output_path;
use std::io::{self, BufRead, Stdout, StdinLock, Write};
use std::path::{Path, PathBuf};

const NOT_FOUND: &str = "File not found. Please enter a valid file path.";
const NOT_A_NUMBER: &str = "Please enter valid numbers for width and height.";
const NOT_POSITIVE: &str = "Please enter positive numbers for width and height.";
const NOT_YES_NO: &str = "Please enter 'y' for yes or 'n' for no.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DimensionInput {
    NotANumber,
    NotPositive,
}

fn parse_dimension(answer: &str) -> Result<u32, DimensionInput> {
    let value: i64 = answer.parse().map_err(|_| DimensionInput::NotANumber)?;
    if value <= 0 {
        return Err(DimensionInput::NotPositive);
    }
    u32::try_from(value).map_err(|_| DimensionInput::NotANumber)
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints a line to the console.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim().to_string())
    }

    pub fn prompt_input_path(&mut self) -> io::Result<PathBuf> {
        loop {
            let answer = self.ask("Enter the path to your image file: ")?;
            let path = PathBuf::from(answer);
            if path.exists() {
                return Ok(path);
            }
            self.say(NOT_FOUND)?;
        }
    }

    /// An empty answer yields `<stem>_resized<.ext>` next to the input.
    pub fn prompt_output_path(&mut self, input_path: &Path) -> io::Result<PathBuf> {
        let answer = self.ask("Enter output file path (press Enter for auto-generated name): ")?;
        let output = (!answer.is_empty()).then(|| PathBuf::from(answer));
        Ok(generate_output_path(input_path, output.as_deref(), "resized"))
    }

    pub fn prompt_dimensions(&mut self) -> io::Result<(u32, u32)> {
        loop {
            let width = match parse_dimension(&self.ask("Enter target width (pixels): ")?) {
                Ok(width) => width,
                Err(e) => {
                    self.reject_dimension(e)?;
                    continue;
                }
            };

            match parse_dimension(&self.ask("Enter target height (pixels): ")?) {
                Ok(height) => return Ok((width, height)),
                Err(e) => self.reject_dimension(e)?,
            }
        }
    }

    fn reject_dimension(&mut self, reason: DimensionInput) -> io::Result<()> {
        match reason {
            DimensionInput::NotANumber => self.say(NOT_A_NUMBER),
            DimensionInput::NotPositive => self.say(NOT_POSITIVE),
        }
    }

    pub fn prompt_aspect_choice(&mut self) -> io::Result<bool> {
        loop {
            let answer = self.ask("Maintain aspect ratio? (y/n): ")?;
            if let Some(choice) = parse_yes_no(&answer) {
                return Ok(choice);
            }
            self.say(NOT_YES_NO)?;
        }
    }

    /// Asks once; anything other than y/yes counts as no.
    pub fn confirm_once(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.ask(question)?;
        Ok(parse_yes_no(&answer).unwrap_or(false))
    }

    pub fn collect_request(&mut self) -> io::Result<ResizeRequest> {
        self.say("=== Image Resizer Tool ===\n")?;

        let input_path = self.prompt_input_path()?;
        let output_path = self.prompt_output_path(&input_path)?;
        let (width, height) = self.prompt_dimensions()?;
        let maintain_aspect = self.prompt_aspect_choice()?;

        ResizeRequest::new(input_path, output_path, width, height, maintain_aspect)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
