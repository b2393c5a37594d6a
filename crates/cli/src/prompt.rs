use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin};

pub struct Prompt {
    input: BufReader<Stdin>,
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt {
    pub fn new() -> Self {
        Self {
            input: BufReader::new(tokio::io::stdin()),
        }
    }

    /// Anything but `y`/`yes` (including EOF) is a no.
    pub async fn confirm(&mut self, question: &str) -> std::io::Result<bool> {
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(format!("{} [y/N] ", question).as_bytes())
            .await?;
        stdout.flush().await?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer).await? == 0 {
            return Ok(false);
        }
        Ok(matches!(
            answer.trim().to_ascii_lowercase().as_str(),
            "y" | "yes"
        ))
    }

    /// Collects pasted lines until an empty line or EOF.
    pub async fn read_paste(&mut self) -> std::io::Result<String> {
        let mut text = String::new();
        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line).await? == 0 || line.trim().is_empty() {
                break;
            }
            text.push_str(&line);
        }
        Ok(text)
    }
}
