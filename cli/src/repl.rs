use std::io::Write;

/// Prompt and read one line from stdin. EOF turns into an `exit` command
/// so piped input terminates the loop cleanly.
pub fn readline() -> Result<String, String> {
    write!(std::io::stdout(), "> ").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())?;

    let mut buffer = String::new();
    let bytes = std::io::stdin()
        .read_line(&mut buffer)
        .map_err(|e| e.to_string())?;
    if bytes == 0 {
        return Ok("exit".to_string());
    }
    Ok(buffer)
}
