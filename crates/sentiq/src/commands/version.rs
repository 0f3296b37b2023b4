pub fn run() -> anyhow::Result<()> {
    println!("sentiq {}", env!("CARGO_PKG_VERSION"));
    println!("Command-line client for the movie-review sentiment API");
    Ok(())
}
