/// Parse and validate a server port.
///
/// Port 0 is rejected: the preview URL has to be known before the server
/// starts.
///
/// # Errors
///
/// Returns an error message if the value is not a number in `1..=65535`.
pub fn parse_port(s: &str) -> Result<u16, String> {
    let port: u16 = s
        .trim()
        .parse()
        .map_err(|_| format!("Port must be a number between 1 and 65535: '{}'", s))?;

    if port == 0 {
        return Err("Port must be between 1 and 65535".to_string());
    }

    Ok(port)
}
